use std::time::Duration;

use anyhow::{Context, Result, bail};
use fiszki_types::{ErrorBody, ExtractionRequest, ExtractionResponse, Flashcard, NoteSummary};
use serde::de::DeserializeOwned;

/// Outlives the server's own model timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

/// HTTP client of the flashcard service
#[derive(Clone)]
pub struct FlashcardClient {
    base_url: String,
    client: reqwest::Client,
}

impl FlashcardClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub async fn generate(&self, note_id: &str) -> Result<Vec<Flashcard>> {
        let url = format!("{}/api/flashcards", self.base_url);
        tracing::debug!("POST {} note_id={}", url, note_id);

        let response = self
            .client
            .post(&url)
            .json(&ExtractionRequest {
                note_id: note_id.to_string(),
            })
            .send()
            .await
            .context("flashcard service unreachable")?;

        let body: ExtractionResponse = into_result(response).await?;
        Ok(body.flashcards)
    }

    pub async fn list_notes(&self, limit: usize) -> Result<Vec<NoteSummary>> {
        let url = format!("{}/api/notes", self.base_url);
        tracing::debug!("GET {} limit={}", url, limit);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await
            .context("flashcard service unreachable")?;

        into_result(response).await
    }
}

/// Decode a success body, or turn the service's error body into an error
async fn into_result<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response.json().await.context("unexpected response body");
    }

    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => {
            tracing::debug!("Service error {}: {} ({})", status, body.error, body.kind);
            bail!(body.error)
        }
        Err(_) => bail!("HTTP {}", status),
    }
}
