use std::time::Duration;

use async_trait::async_trait;
use fiszki_config::model::ModelConfig;
use fiszki_core::{ModelProvider, ProviderError, ProviderMetadata};
use fiszki_types::ChatMessage;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Chat client for an Ollama server
#[derive(Clone)]
pub struct OllamaProvider {
    client: reqwest::Client,
    host: String,
}

impl OllamaProvider {
    pub fn new(host: String, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ModelConfig) -> Result<Self, ProviderError> {
        Self::new(config.host.clone(), config.timeout())
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.host)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

fn request_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl ModelProvider for OllamaProvider {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model,
            messages,
            stream: false,
        };

        tracing::debug!("POST {} model={}", self.chat_url(), model);
        let response = self
            .client
            .post(self.chat_url())
            .json(&request)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::ModelNotFound(model.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError(format!(
                "HTTP {}: {}",
                status,
                body.trim()
            )));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                ProviderError::ApiError(format!("Failed to parse response: {}", e))
            }
        })?;

        if let Some(error) = body.error {
            return Err(ProviderError::ApiError(error));
        }

        Ok(body.message.map(|m| m.content).unwrap_or_default())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "ollama".to_string(),
            host: self.host.clone(),
        }
    }
}
