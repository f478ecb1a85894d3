//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use sentra_ai::AiError;
use sentra_core::errors::{Error as CoreError, StoreError, ValidationError};

pub type ApiResult<T> = Result<T, ApiError>;

/// An error ready to leave the API boundary.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let status = match &err {
            CoreError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            CoreError::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            CoreError::Store(_) => StatusCode::BAD_GATEWAY,
            CoreError::Sheet(_) => StatusCode::BAD_GATEWAY,
            CoreError::Validation(ValidationError::MissingField(_))
            | CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::Template(_) | CoreError::Compose(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CoreError::InvalidConfigValue(_) => StatusCode::BAD_REQUEST,
            CoreError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        let status = match &err {
            AiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AiError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            AiError::Provider(_) => StatusCode::BAD_GATEWAY,
            AiError::Core(_) => return CoreErrorWrapper(err).into(),
            AiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

// Unwraps AiError::Core so the store/validation mapping stays in one place.
struct CoreErrorWrapper(AiError);

impl From<CoreErrorWrapper> for ApiError {
    fn from(wrapper: CoreErrorWrapper) -> Self {
        match wrapper.0 {
            AiError::Core(core) => core.into(),
            other => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("API error {}: {}", self.status, self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
