use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_from_env;
use configs::{AppConfig, DatabaseConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file when present, otherwise `SERVER_HOST`/`SERVER_PORT` and `DATABASE_URL`.
fn load_config() -> AppConfig {
    match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config file unavailable; falling back to environment");
            let mut cfg = AppConfig::default();
            cfg.server.host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            cfg.server.port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            cfg.database = DatabaseConfig::from_env();
            cfg
        }
    }
}

/// Pick storage from `STORAGE` (`memory` or the default `postgres`).
async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    if env::var("STORAGE").as_deref() == Ok("memory") {
        warn!("using in-memory storage; data is lost on exit");
        return Ok(ServerState::in_memory());
    }
    cfg.database.validate()?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");
    Ok(ServerState::seaorm(db))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_from_env();

    let cfg = load_config();
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting kitchenpos server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
