use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::StoreError;
use thiserror::Error;
use tracing::{error, warn};

/// Failure surfaced by a handler. Unknown players are not errors; they are
/// answered with a plain 404 by the handler itself.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = self.to_string();
        if status.is_server_error() {
            error!(error = %msg, "store operation failed");
        } else {
            warn!(error = %msg, "rejected request");
        }
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}
