pub mod error;
pub mod handlers;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::ocr::OcrEngine;
use crate::storage::UploadStore;

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ocr: OcrEngine,
    pub store: UploadStore,
}

/// Open the upload store and assemble the shared state
pub async fn build_state(config: Config) -> Result<AppState> {
    let store = UploadStore::open(&config.storage).await?;
    let ocr = OcrEngine::new(&config.ocr);

    Ok(AppState {
        config: Arc::new(config),
        ocr,
        store,
    })
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    let max_upload_bytes = state.config.server.max_upload_bytes;

    Router::new()
        .route("/extract-text", post(handlers::extract_text))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until `shutdown` resolves
pub async fn serve(config: Config, shutdown: impl Future<Output = ()> + Send + 'static) -> Result<()> {
    let bind = config.server.bind.clone();
    let state = build_state(config).await?;

    info!(
        upload_dir = %state.store.dir().display(),
        languages = state.ocr.languages(),
        "starting extraction service"
    );

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    info!(addr = %bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    Ok(())
}
