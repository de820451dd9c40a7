mod auth;
mod catalog;
mod config;
mod db;
mod editor;
mod errors;
mod export;
mod extract;
mod models;
mod resumes;
mod routes;
mod scoring;
mod state;
mod store;
mod suggestions;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::export::pdf::HttpPdfRenderer;
use crate::routes::build_router;
use crate::scoring::ScoringWeights;
use crate::state::AppState;
use crate::store::{MemoryResumeStore, PgResumeStore, ResumeStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn ResumeStore> = match &config.database_url {
        Some(url) => Arc::new(PgResumeStore::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set; resumes are stored in memory and lost on restart");
            Arc::new(MemoryResumeStore::new())
        }
    };

    let pdf_renderer = Arc::new(HttpPdfRenderer::new(
        &config.pdf_renderer_url,
        Duration::from_secs(config.pdf_render_timeout_secs),
    )?);
    info!("PDF renderer configured at {}", config.pdf_renderer_url);

    let state = AppState {
        store,
        pdf_renderer,
        scoring: ScoringWeights::default(),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
