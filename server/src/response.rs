//! Response bodies.
//!
//! Every body the service produces is indented JSON. [`PrettyJson`] is the
//! counterpart of axum's `Json` responder with `to_vec_pretty` in place of
//! `to_vec`.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const NOT_FOUND_MESSAGE: &str = "Todo not found!";
pub const DELETED_MESSAGE: &str = "Todo deleted successfully!";

/// Body for outcomes that carry no todo: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Serializes `T` as indented JSON with `content-type: application/json`.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
