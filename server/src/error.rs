//! HTTP-facing errors and their responses.
//!
//! # Design
//! `NotFound` always renders the same fixed message regardless of which id
//! missed. A malformed create payload is rendered according to the
//! [`PayloadPolicy`] in effect when it was decoded.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_core::TodoError;

use crate::config::PayloadPolicy;
use crate::response::{Message, PrettyJson, NOT_FOUND_MESSAGE};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("todo not found: {0}")]
    NotFound(String),

    #[error("invalid todo payload: {reason}")]
    MalformedPayload {
        reason: String,
        policy: PayloadPolicy,
    },
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                PrettyJson(Message::new(NOT_FOUND_MESSAGE)),
            )
                .into_response(),
            ApiError::MalformedPayload {
                reason,
                policy: PayloadPolicy::Reject,
            } => (
                StatusCode::BAD_REQUEST,
                PrettyJson(Message::new(format!("Invalid todo payload: {reason}"))),
            )
                .into_response(),
            ApiError::MalformedPayload {
                policy: PayloadPolicy::Silent,
                ..
            } => StatusCode::BAD_REQUEST.into_response(),
        }
    }
}
