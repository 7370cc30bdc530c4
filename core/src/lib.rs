//! In-memory todo collection.
//!
//! # Overview
//! Holds an ordered sequence of todos and answers the five collection
//! operations (create, list, fetch, toggle, delete) without touching the
//! network. The HTTP layer lives in the `todo-server` crate and only
//! translates requests into calls on [`TodoStore`].
//!
//! # Design
//! - `TodoStore` is a plain owned value with no interior locking. The server
//!   decides how to share it between requests.
//! - Ids are caller-supplied strings. Duplicates are allowed and every lookup
//!   acts on the first match in insertion order.
//! - The collection starts from a fixed seed and nothing is persisted.

pub mod error;
pub mod store;
pub mod types;

pub use error::TodoError;
pub use store::TodoStore;
pub use types::{seed_todos, Todo};
