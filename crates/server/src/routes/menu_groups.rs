use axum::{extract::State, http::StatusCode, Json};
use service::menu_group::domain::{CreateMenuGroupInput, MenuGroup};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(get, path = "/api/menu-groups", tag = "menu-groups", responses((status = 200, description = "List OK")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<MenuGroup>>, JsonApiError> {
    Ok(Json(state.menu_groups.list().await?))
}

#[utoipa::path(
    post, path = "/api/menu-groups", tag = "menu-groups",
    request_body = crate::openapi::CreateMenuGroupDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Invalid Argument"))
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateMenuGroupInput>,
) -> Result<(StatusCode, Json<MenuGroup>), JsonApiError> {
    let group = state.menu_groups.create(input).await?;
    Ok((StatusCode::CREATED, Json(group)))
}
