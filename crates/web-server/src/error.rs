use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use datastore::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Invalid query parameter: {0}")]
    InvalidParam(String),
}

/// Converts our custom `AppError` into an HTTP response with the uniform
/// error envelope `{"error": {"code", "message", "type"}}`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::Store(store_err) => match store_err {
                StoreError::MarketNotFound(_)
                | StoreError::PropertyNotFound(_)
                | StoreError::NoSnapshots(_) => {
                    (StatusCode::NOT_FOUND, "not_found", store_err.to_string())
                }
                other => {
                    tracing::error!(error = ?other, "Datastore error.");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "server_error",
                        "Internal server error".to_string(),
                    )
                }
            },
            AppError::InvalidParam(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
            ),
        };

        let body = Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": message,
                "type": error_type
            }
        }));
        (status, body).into_response()
    }
}
