//! HTTP front of the flashcard extraction service

pub mod api;
pub mod state;


use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use fiszki_config::Config;
use fiszki_core::{ContentStore, ExtractorSettings, FlashcardExtractor, ModelProvider};
use fiszki_ollama::OllamaProvider;
use fiszki_store::{MemoryStore, PayloadClient};
use tokio_util::sync::CancellationToken;

pub use self::state::ServerState;

/// Wire the store and provider described by `config` into an extractor.
///
/// With `notes_file` set, notes come from a local JSON file instead of Payload.
pub async fn build_extractor(
    config: &Config,
    notes_file: Option<&Path>,
) -> Result<FlashcardExtractor> {
    let store: Arc<dyn ContentStore> = match notes_file {
        Some(path) => Arc::new(
            MemoryStore::from_json_file(path)
                .await
                .with_context(|| format!("loading notes from {}", path.display()))?,
        ),
        None => {
            tracing::info!("Using Payload content store at {}", config.store.url);
            Arc::new(PayloadClient::from_config(&config.store).context("creating Payload client")?)
        }
    };

    let provider: Arc<dyn ModelProvider> = Arc::new(
        OllamaProvider::from_config(&config.model).context("creating Ollama client")?,
    );
    tracing::info!(
        "Using model {} at {}",
        config.model.model,
        config.model.host
    );

    Ok(FlashcardExtractor::new(
        store,
        provider,
        ExtractorSettings::from(&config.model),
    ))
}

/// Serve the API until `shutdown` is cancelled
pub async fn start_server(
    config: Config,
    state: ServerState,
    shutdown: CancellationToken,
) -> Result<()> {
    let app = api::create_router(state);
    let addr = config.server.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Flashcard service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            tracing::info!("Shutdown requested");
        })
        .await
        .context("server error")?;

    Ok(())
}
