use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::model::ModelConfig;
use self::server::ServerConfig;
use self::store::StoreConfig;
use self::study::StudyConfig;

pub mod model;
pub mod server;
pub mod store;
pub mod study;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub store: StoreConfig,
    pub study: StudyConfig,
}

impl Config {
    /// Build from environment variables, falling back to defaults per field
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            model: ModelConfig::new(),
            store: StoreConfig::new(),
            study: StudyConfig::new(),
        }
    }
}

/// Read `key` from the environment, keeping `default` when unset or unparsable
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
