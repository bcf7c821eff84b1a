use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_nav_cooldown_ms() -> u64 {
    300
}

fn default_note_picker_limit() -> usize {
    20
}

/// Terminal study client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Base URL of the flashcard service
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Minimum gap between two card transitions
    #[serde(default = "default_nav_cooldown_ms")]
    pub nav_cooldown_ms: u64,
    #[serde(default = "default_note_picker_limit")]
    pub note_picker_limit: usize,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            nav_cooldown_ms: default_nav_cooldown_ms(),
            note_picker_limit: default_note_picker_limit(),
        }
    }
}

impl StudyConfig {
    pub fn new() -> Self {
        let server_url = env::var("FISZKI_SERVER_URL").unwrap_or_else(|_| default_server_url());
        let nav_cooldown_ms = env_or("NAV_COOLDOWN_MS", default_nav_cooldown_ms());
        let note_picker_limit = env_or("NOTE_PICKER_LIMIT", default_note_picker_limit());

        Self {
            server_url,
            nav_cooldown_ms,
            note_picker_limit,
        }
    }

    pub fn nav_cooldown(&self) -> Duration {
        Duration::from_millis(self.nav_cooldown_ms)
    }
}
