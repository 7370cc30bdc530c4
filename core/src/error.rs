//! Error type for collection operations.
//!
//! # Design
//! The collection has exactly one failure mode: an id-based operation found
//! no record with that id. Decoding failures belong to the HTTP layer and
//! never reach the store.

use thiserror::Error;

/// Errors returned by `TodoStore` id-based operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No todo with the given id exists in the collection.
    #[error("todo not found: {0}")]
    NotFound(String),
}
