use fiszki_types::ChatMessage;

/// Text-generation backend
#[async_trait::async_trait]
pub trait ModelProvider: Send + Sync {
    /// Run a non-streaming chat completion and return the assistant text.
    ///
    /// A reply without a message yields an empty string; callers decide
    /// whether that is an error.
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ProviderError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub host: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Request timed out")]
    Timeout,
}
