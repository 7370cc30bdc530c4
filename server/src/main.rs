use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{observability, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("failed to read configuration")?;
    observability::init_tracing(config.log_format);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, payload_policy = ?config.payload_policy, "listening");

    todo_server::run(listener, AppState::new(config.payload_policy))
        .await
        .context("server stopped unexpectedly")
}
