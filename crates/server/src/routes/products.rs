use axum::{extract::State, http::StatusCode, Json};
use service::product::domain::{CreateProductInput, Product};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "Persistence Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Product>>, JsonApiError> {
    let list = state.products.list().await?;
    info!(count = list.len(), "list products");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::CreateProductDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Invalid Argument"),
        (status = 500, description = "Persistence Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateProductInput>,
) -> Result<(StatusCode, Json<Product>), JsonApiError> {
    let product = state.products.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
