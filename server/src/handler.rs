//! Route handlers.
//!
//! Each handler takes the lock once, calls a single `TodoStore` operation and
//! renders the result. Returned todos are cloned out so the guard is released
//! before the body is serialized.
//!
//! The create body is decoded as JSON whatever its `content-type` says; only
//! a body that fails to decode is rejected.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use todo_core::Todo;

use crate::error::ApiError;
use crate::response::{Message, PrettyJson, DELETED_MESSAGE};
use crate::AppState;

pub async fn list_todos(State(state): State<AppState>) -> PrettyJson<Vec<Todo>> {
    let todos = state.db.read().await;
    tracing::debug!(count = todos.len(), "listing todos");
    PrettyJson(todos.list().to_vec())
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, PrettyJson<Todo>), ApiError> {
    let input: Todo = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(reason = %err, "rejected todo payload");
        ApiError::MalformedPayload {
            reason: err.to_string(),
            policy: state.payload_policy,
        }
    })?;

    let todo = state.db.write().await.create(input);
    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, PrettyJson(todo)))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<PrettyJson<Todo>, ApiError> {
    let todos = state.db.read().await;
    let todo = todos.get(&id).inspect_err(|_| {
        tracing::debug!(%id, "todo not found");
    })?;
    Ok(PrettyJson(todo.clone()))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<PrettyJson<Todo>, ApiError> {
    let mut todos = state.db.write().await;
    let todo = todos.toggle_completed(&id)?.clone();
    tracing::info!(%id, completed = todo.completed, "toggled todo");
    Ok(PrettyJson(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<PrettyJson<Message>, ApiError> {
    state.db.write().await.delete(&id)?;
    tracing::info!(%id, "deleted todo");
    Ok(PrettyJson(Message::new(DELETED_MESSAGE)))
}
