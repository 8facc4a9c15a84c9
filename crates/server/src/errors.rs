use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body: `{"error": title, "code": n, "detail": message}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub code: Option<u16>,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, code: None, detail }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "Invalid Argument"),
            ServiceError::Persistence(_) => {
                error!(err = %e, "persistence failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Persistence Error")
            }
        };
        Self { status, title, code: Some(e.code()), detail: Some(e.to_string()) }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.title,
            "code": self.code,
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}
