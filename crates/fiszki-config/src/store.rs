use std::env;

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_auth_collection() -> String {
    "users".to_string()
}

/// Payload CMS content store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Empty means anonymous access
    #[serde(default)]
    pub api_key: String,
    /// Collection that owns the API key
    #[serde(default = "default_auth_collection")]
    pub auth_collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            api_key: String::new(),
            auth_collection: default_auth_collection(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        let url = env::var("PAYLOAD_URL").unwrap_or_else(|_| default_url());
        let api_key = env::var("PAYLOAD_API_KEY").unwrap_or_default();
        let auth_collection =
            env::var("PAYLOAD_AUTH_COLLECTION").unwrap_or_else(|_| default_auth_collection());

        Self {
            url,
            api_key,
            auth_collection,
        }
    }

    /// `Authorization` header value, if an API key is configured
    pub fn auth_header(&self) -> Option<String> {
        if self.api_key.is_empty() {
            return None;
        }
        Some(format!("{} API-Key {}", self.auth_collection, self.api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_absent_without_key() {
        assert_eq!(StoreConfig::default().auth_header(), None);
    }

    #[test]
    fn test_auth_header_uses_collection_slug() {
        let config = StoreConfig {
            api_key: "abc123".to_string(),
            ..StoreConfig::default()
        };
        assert_eq!(config.auth_header().as_deref(), Some("users API-Key abc123"));
    }
}
