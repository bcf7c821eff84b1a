//! Flashcard extraction server

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fiszki_config::Config;
use fiszki_server::ServerState;
use fiszki_types::ExtractionResponse;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fiszki-server")]
#[command(about = "Turns stored notes into flashcards with a local model")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP service
    Serve {
        /// Port to listen on (overrides SERVER_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Read notes from a JSON file instead of Payload
        #[arg(long)]
        notes_file: Option<PathBuf>,
    },

    /// Extract flashcards from one note and print them as JSON
    Extract {
        note_id: String,

        #[arg(long)]
        notes_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fiszki=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::new();

    match cli.command {
        Commands::Serve { port, notes_file } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let extractor = fiszki_server::build_extractor(&config, notes_file.as_deref()).await?;

            let shutdown = CancellationToken::new();
            let signal_token = shutdown.clone();
            tokio::spawn(async move {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for ctrl+c: {e}");
                }
                signal_token.cancel();
            });

            fiszki_server::start_server(config, ServerState::new(extractor), shutdown).await
        }
        Commands::Extract {
            note_id,
            notes_file,
        } => {
            let extractor = fiszki_server::build_extractor(&config, notes_file.as_deref()).await?;
            let flashcards = extractor
                .extract(&note_id)
                .await
                .with_context(|| format!("extracting flashcards from note {}", note_id))?;

            let output = serde_json::to_string_pretty(&ExtractionResponse { flashcards })?;
            println!("{}", output);
            Ok(())
        }
    }
}
