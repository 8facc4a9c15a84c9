use axum::{extract::State, http::StatusCode, Json};
use service::menu::domain::{CreateMenuInput, Menu};
use tracing::{info, warn};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/menus", tag = "menus",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "Persistence Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Menu>>, JsonApiError> {
    let list = state.menus.list().await?;
    info!(count = list.len(), "list menus");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/menus", tag = "menus",
    request_body = crate::openapi::CreateMenuDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Invalid Argument"),
        (status = 500, description = "Persistence Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateMenuInput>,
) -> Result<(StatusCode, Json<Menu>), JsonApiError> {
    info!(name = %input.name, menu_group_id = input.menu_group_id, items = input.items.len(), "menu_create_request");
    match state.menus.create(input).await {
        Ok(menu) => Ok((StatusCode::CREATED, Json(menu))),
        Err(e) => {
            if let Some(v) = e.violation() {
                warn!(violation = %v, "menu create rejected");
            }
            Err(e.into())
        }
    }
}
