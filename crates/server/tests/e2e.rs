use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

struct TestApp {
    base_url: String,
}

async fn start_server(state: ServerState) -> anyhow::Result<TestApp> {
    let app: Router = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

impl TestApp {
    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = client().post(format!("{}{}", self.base_url, path)).json(&body).send().await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await?))
    }

    async fn get(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = client().get(format!("{}{}", self.base_url, path)).send().await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await?))
    }

    /// mango @1000, chicken @15000 and one menu group; returns (group, mango, chicken) ids.
    async fn seed(&self) -> anyhow::Result<(i64, i64, i64)> {
        let (_, group) = self.post("/api/menu-groups", json!({"name": "new menus"})).await?;
        let (_, mango) = self.post("/api/products", json!({"name": "mango", "price": 1000})).await?;
        let (_, chicken) = self.post("/api/products", json!({"name": "chicken", "price": "15000"})).await?;
        Ok((
            group["id"].as_i64().expect("group id"),
            mango["id"].as_i64().expect("mango id"),
            chicken["id"].as_i64().expect("chicken id"),
        ))
    }
}

fn mango_chicken(group: i64, mango: i64, chicken: i64, price: Value) -> Value {
    json!({
        "name": "mango chicken",
        "price": price,
        "menu_group_id": group,
        "items": [
            {"product_id": mango, "quantity": 2},
            {"product_id": chicken, "quantity": 1}
        ]
    })
}

/// Numeric value of a decimal, whether serialized as a string or a number.
fn decimal(v: &Value) -> f64 {
    v.as_f64()
        .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
        .expect("decimal value")
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let (status, body) = app.get("/health").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let (status, body) = app.get("/api-docs/openapi.json").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(body["paths"]["/api/menus"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_product_create_and_list() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;

    let (status, created) = app.post("/api/products", json!({"name": "mango", "price": 1000})).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(created["name"], "mango");
    assert_eq!(decimal(&created["price"]), 1000.0);

    let (status, list) = app.get("/api/products").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert_eq!(list[0]["id"], created["id"]);
    Ok(())
}

#[tokio::test]
async fn e2e_product_negative_price_is_bad_request() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let (status, body) = app.post("/api/products", json!({"name": "mango", "price": -1})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Argument");
    assert_eq!(body["code"], 1002);
    Ok(())
}

#[tokio::test]
async fn e2e_product_price_must_fit_two_decimal_places() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;

    let (status, body) = app.post("/api/products", json!({"name": "mango", "price": "1.005"})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1010);

    let (status, body) = app.post("/api/products", json!({"name": "gold", "price": "100000000000000000"})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1011);

    let (status, _) = app.post("/api/products", json!({"name": "mango", "price": "1.230"})).await?;
    assert_eq!(status, HttpStatusCode::CREATED);

    let (_, list) = app.get("/api/products").await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn e2e_menu_list_empty() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let (status, body) = app.get("/api/menus").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_menu_create_and_list_round_trip() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let (group, mango, chicken) = app.seed().await?;

    let (status, created) = app.post("/api/menus", mango_chicken(group, mango, chicken, json!(17000))).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(decimal(&created["price"]), 17000.0);
    assert_eq!(created["items"][0]["product_id"], mango);
    assert_eq!(created["items"][0]["quantity"], 2);
    assert_eq!(created["items"][1]["product_id"], chicken);
    assert_eq!(created["items"][1]["menu_id"], created["id"]);

    let (status, list) = app.get("/api/menus").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(list, json!([created]));
    Ok(())
}

#[tokio::test]
async fn e2e_menu_price_mismatch_is_bad_request() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let (group, mango, chicken) = app.seed().await?;

    let (status, body) = app.post("/api/menus", mango_chicken(group, mango, chicken, json!(16000))).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1009);
    assert!(body["detail"].as_str().unwrap_or_default().contains("price mismatch"));

    let (_, list) = app.get("/api/menus").await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_menu_unknown_group_and_product_are_bad_requests() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let (group, mango, chicken) = app.seed().await?;

    let (status, body) = app.post("/api/menus", mango_chicken(group + 100, mango, chicken, json!(17000))).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1004);

    let (status, body) = app.post("/api/menus", mango_chicken(group, mango, chicken + 100, json!(17000))).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1007);
    Ok(())
}

#[tokio::test]
async fn e2e_menu_groups_create_and_list() -> anyhow::Result<()> {
    let app = start_server(ServerState::in_memory()).await?;
    let (status, created) = app.post("/api/menu-groups", json!({"name": "sides"})).await?;
    assert_eq!(status, HttpStatusCode::CREATED);

    let (status, list) = app.get("/api/menu-groups").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(list, json!([created]));

    let (status, _) = app.post("/api/menu-groups", json!({"name": "   "})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_postgres_menu_flow() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip postgres e2e test.");
        return Ok(());
    }
    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await { eprintln!("migrations notice: {}", e); }

    let app = start_server(ServerState::seaorm(db)).await?;
    let (group, mango, chicken) = app.seed().await?;

    let (status, created) = app.post("/api/menus", mango_chicken(group, mango, chicken, json!("17000.00"))).await?;
    assert_eq!(status, HttpStatusCode::CREATED);

    let (_, list) = app.get("/api/menus").await?;
    let listed = list
        .as_array()
        .and_then(|l| l.iter().find(|m| m["id"] == created["id"]))
        .cloned()
        .expect("created menu is listed");
    assert_eq!(listed["items"], created["items"]);
    assert_eq!(decimal(&listed["price"]), 17000.0);
    Ok(())
}
