use std::sync::Arc;

use fiszki_config::Config;
use fiszki_core::StudySession;
use fiszki_types::NoteSummary;
use tokio::sync::RwLock;

use crate::client::FlashcardClient;

/// What the terminal currently shows
#[derive(Debug, Default)]
pub struct View {
    pub session: StudySession,
    /// Last picker listing, addressed by `gen <index>`
    pub notes: Vec<NoteSummary>,
    pub picker_open: bool,
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub view: RwLock<View>,
    pub client: FlashcardClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = FlashcardClient::new(&config.study.server_url)?;
        let view = View {
            session: StudySession::new(config.study.nav_cooldown()),
            ..View::default()
        };

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            view: RwLock::new(view),
            client,
        })
    }
}
