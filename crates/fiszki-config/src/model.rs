use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "qwen3:8b".to_string()
}

fn default_timeout_seconds() -> u64 {
    120
}

/// Text-generation provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Ollama base URL
    #[serde(default = "default_host")]
    pub host: String,
    /// Model identifier passed to the chat endpoint
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on one provider round trip
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: default_model(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ModelConfig {
    pub fn new() -> Self {
        let host = env::var("OLLAMA_HOST").unwrap_or_else(|_| default_host());
        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| default_model());
        let timeout_seconds = env_or("MODEL_TIMEOUT_SECONDS", default_timeout_seconds());

        Self {
            host,
            model,
            timeout_seconds,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
