//! Terminal flashcard study client

use std::sync::Arc;

use clap::Parser;
use fiszki_config::Config;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod client;
pub mod command;
pub mod controller;
pub mod events;
pub mod render;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "fiszki-study")]
#[command(about = "Browse and generate flashcards from your notes")]
struct Cli {
    /// Flashcard service URL (overrides FISZKI_SERVER_URL)
    #[arg(long)]
    server_url: Option<String>,

    /// Minimum milliseconds between card transitions
    #[arg(long)]
    cooldown_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout belongs to the study view
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,fiszki=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::new();
    if let Some(url) = cli.server_url {
        config.study.server_url = url;
    }
    if let Some(ms) = cli.cooldown_ms {
        config.study.nav_cooldown_ms = ms;
    }

    tracing::info!("Using flashcard service at {}", config.study.server_url);
    let state = Arc::new(AppState::new(config)?);
    let controller = AppController::new(state);

    let input = BufReader::new(tokio::io::stdin());
    let mut tasks = controller.spawn_tasks(input, tokio::io::stdout());

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("Task finished"),
                Ok(Err(e)) => tracing::error!("Task failed: {e:#}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::debug!("Task exited with error during shutdown: {e:#}");
        }
    }

    Ok(())
}
