//! HTTP front end for the in-memory todo collection.
//!
//! # Overview
//! Maps five routes onto `todo_core::TodoStore`:
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | POST | `/todos` | 201, created todo |
//! | GET | `/todos` | 200, all todos |
//! | GET | `/todos/{id}` | 200, todo |
//! | PATCH | `/todos/{id}` | 200, todo with `completed` flipped |
//! | DELETE | `/todos/{id}` | 200, confirmation message |
//!
//! Unknown ids answer 404 with `{"message": "Todo not found!"}`.
//!
//! # Design
//! - The store is owned by [`AppState`] behind a single `RwLock`; there is no
//!   global state. Every router built by [`router`] gets whatever state it is
//!   handed, so tests and hosting adapters each own their collection.
//! - [`adapter`] is the entry point for hosts that hand over one request at a
//!   time. It builds the same router once per process and forwards to it.

pub mod adapter;
pub mod config;
pub mod error;
pub mod handler;
pub mod observability;
pub mod response;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::TodoStore;
use tower_http::trace::TraceLayer;

pub use config::{PayloadPolicy, ServerConfig};
pub use response::Message;
pub use todo_core::Todo;

pub type Db = Arc<RwLock<TodoStore>>;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub payload_policy: PayloadPolicy,
}

impl AppState {
    /// State holding a freshly seeded collection.
    pub fn new(payload_policy: PayloadPolicy) -> Self {
        Self::with_store(TodoStore::seeded(), payload_policy)
    }

    pub fn with_store(store: TodoStore, payload_policy: PayloadPolicy) -> Self {
        Self {
            db: Arc::new(RwLock::new(store)),
            payload_policy,
        }
    }
}

/// Router over a seeded collection with the default payload policy.
pub fn app() -> Router {
    router(AppState::new(PayloadPolicy::default()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handler::list_todos).post(handler::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handler::get_todo)
                .patch(handler::toggle_todo)
                .delete(handler::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, router(state)).await
}
