use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modules::counters::core::errors::StoreError;

/// Structured failure payload returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterError {
    pub error: String,
    pub error_description: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

impl ApiError {
    /// Builds a validation error from field messages, joined the way clients expect.
    pub fn validation(messages: &[&str]) -> Self {
        if messages.is_empty() {
            ApiError::Validation("invalid input".to_string())
        } else {
            ApiError::Validation(messages.join(","))
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    pub fn client_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::NotFound(_) => "resource_not_found",
            ApiError::Conflict(_) => "resource_conflict",
            ApiError::UnsupportedMediaType(_) => "unsupported_media_type",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::Conflict(_) => ApiError::Conflict(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::UnsupportedMediaType(rejection.body_text())
            }
            _ => ApiError::Validation(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(CounterError {
            error: self.client_code().to_string(),
            error_description: self.to_string(),
        });
        (status, body).into_response()
    }
}
