//! Single-request entry point for serverless-style hosts.
//!
//! The host calls [`handle`] once per request. The router and its collection
//! are built on the first call and reused for the life of the process, so
//! state carries over between calls exactly as it does under [`crate::run`].
//! The payload policy is read from the environment on that first call; an
//! unreadable configuration falls back to the defaults.

use std::sync::OnceLock;

use axum::{extract::Request, response::Response, Router};
use tower::ServiceExt;

use crate::config::{ConfigError, ServerConfig};
use crate::{router, AppState};

static ROUTER: OnceLock<Router> = OnceLock::new();

fn shared_router() -> &'static Router {
    ROUTER.get_or_init(|| build_router(ServerConfig::from_env()))
}

fn build_router(config: Result<ServerConfig, ConfigError>) -> Router {
    let config = config.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid configuration, using defaults");
        ServerConfig::default()
    });
    tracing::debug!(payload_policy = ?config.payload_policy, "building router for adapter");
    router(AppState::new(config.payload_policy))
}

pub async fn handle(request: Request) -> Response {
    shared_router()
        .clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {})
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{self, StatusCode},
    };
    use http_body_util::BodyExt;

    use super::*;

    fn bad_create() -> Request {
        http::Request::builder()
            .method("POST")
            .uri("/todos")
            .body(Body::from("not json"))
            .unwrap()
    }

    async fn bad_create_body(router: Router) -> bytes::Bytes {
        let resp = router.oneshot(bad_create()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn silent_policy_from_config_applies() {
        let config = ServerConfig::from_lookup(|key| {
            (key == "MALFORMED_PAYLOAD").then(|| "silent".to_string())
        });
        assert!(bad_create_body(build_router(config)).await.is_empty());
    }

    #[tokio::test]
    async fn invalid_config_falls_back_to_reject() {
        let config = ServerConfig::from_lookup(|key| (key == "PORT").then(|| "x".to_string()));
        assert!(config.is_err());
        assert!(!bad_create_body(build_router(config)).await.is_empty());
    }
}
