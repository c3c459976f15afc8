//! HTTP pre-check service in front of `kontak-core`.
//!
//! Exposes the detector at a system boundary so moderation pipelines can
//! gate text without linking the engine directly:
//! `POST /v1/detect` returns the full result, `POST /v1/check` only the
//! boolean signal.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kontak_svc=info,tower_http=info")),
        )
        .init();

    let addr = std::env::var("KONTAK_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "kontak pre-check service listening");

    axum::serve(listener, api::router())
        .await
        .context("server error")?;
    Ok(())
}
