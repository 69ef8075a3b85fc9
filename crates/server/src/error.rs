//! API error types

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use blueprint_core::BuilderError;
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// API error with HTTP status code
#[derive(Debug, Clone, Serialize, Error)]
#[error("[{status}] [{code}] {message}")]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,

    pub message: String,

    /// Stable tag for client handling
    pub code: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: code.into(),
        }
    }

    /// 400 Bad Request
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, "MALFORMED_INPUT")
    }
}

impl From<BuilderError> for ApiError {
    fn from(err: BuilderError) -> Self {
        match &err {
            BuilderError::MalformedInput(_) => Self::malformed(err.to_string()),
            BuilderError::Catalog(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), err.code())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::malformed(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = %self.code, "{}", self.message);
        }

        let body = Json(serde_json::json!({
            "success": false,
            "error": self.message,
            "code": self.code,
        }));

        (self.status, body).into_response()
    }
}
