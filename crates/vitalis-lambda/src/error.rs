use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    /// The prediction service could not be reached or gave no usable
    /// answer. Surfaces as a generic "unable to connect" state; the
    /// detail is logged, not leaked.
    Upstream(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Upstream(msg) => {
                tracing::warn!("prediction service unavailable: {msg}");
                (StatusCode::BAD_GATEWAY, "unable to connect".to_string())
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<vitalis_storage::error::StorageError> for ApiError {
    fn from(e: vitalis_storage::error::StorageError) -> Self {
        match e {
            vitalis_storage::error::StorageError::NotFound { key } => {
                ApiError::NotFound(format!("object not found: {key}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<vitalis_engine::error::EngineError> for ApiError {
    fn from(e: vitalis_engine::error::EngineError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<vitalis_predict::error::PredictError> for ApiError {
    fn from(e: vitalis_predict::error::PredictError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
