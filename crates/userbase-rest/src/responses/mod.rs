//! API response types.
//!
//! Every body is JSON. Failures carry a fixed `{"message": ...}` per route;
//! the underlying cause goes to the log, never to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use userbase_core::UserbaseError;
use utoipa::ToSchema;

/// `{"message": ...}` body shared by success and failure responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Handler failure.
#[derive(Debug)]
pub enum AppError {
    /// The addressed resource does not exist (404).
    NotFound { resource: &'static str },
    /// Anything else (500), answered with a fixed route-specific message.
    Failed {
        message: &'static str,
        source: UserbaseError,
    },
}

impl AppError {
    /// Absence of `resource`.
    #[must_use]
    pub const fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Maps any error to a 500 carrying `message`.
    pub fn failed(message: &'static str) -> impl FnOnce(UserbaseError) -> Self {
        move |source| Self::Failed { message, source }
    }

    /// Like [`AppError::failed`], but keeps a storage-reported absence as 404.
    pub fn failed_unless_missing(message: &'static str) -> impl FnOnce(UserbaseError) -> Self {
        move |source| match source {
            UserbaseError::NotFound { resource_type, .. } => Self::not_found(resource_type),
            source => Self::Failed { message, source },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { resource } => {
                debug!("{} not found", resource);
                (
                    StatusCode::NOT_FOUND,
                    Json(MessageResponse::new(format!("{resource} not found"))),
                )
                    .into_response()
            }
            Self::Failed { message, source } => {
                error!(
                    error_code = source.error_code(),
                    error = %source,
                    "{}",
                    message
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new(message)),
                )
                    .into_response()
            }
        }
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<T, AppError>;

/// Helper to create a 200 JSON response.
pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// Helper to create a 201 JSON response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// Helper to create a 200 `{"message": ...}` response.
pub fn message(text: &str) -> (StatusCode, Json<MessageResponse>) {
    ok(MessageResponse::new(text))
}
