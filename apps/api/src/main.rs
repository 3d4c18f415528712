mod config;
mod errors;
mod extraction;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting keymatch v{}", env!("CARGO_PKG_VERSION"));
    info!(
        top_n = config.keyword_top_n,
        stopwords = config.stopwords.len(),
        stopword_filtering = !config.stopwords.is_empty(),
        max_upload_bytes = config.max_upload_bytes,
        policy = ?config.unsupported_format_policy,
        "Keyword matching configured"
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let state = AppState::new(config);

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
