use std::time::Duration;

use async_trait::async_trait;
use fiszki_config::store::StoreConfig;
use fiszki_core::{ContentStore, StoreError};
use fiszki_types::Note;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Payload CMS REST client
#[derive(Clone)]
pub struct PayloadClient {
    base_url: Url,
    auth_header: Option<String>,
    client: reqwest::Client,
}

impl PayloadClient {
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StoreError::ApiError(format!("Invalid Payload URL {base_url}: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        Ok(Self {
            base_url,
            auth_header: None,
            client,
        })
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut client = Self::new(&config.url)?;
        client.auth_header = config.auth_header();
        Ok(client)
    }

    /// `{base}/api/{segments...}` with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::ApiError(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    /// GET a document; 404 maps to `None`
    async fn fetch<T>(&self, url: Url, query: &[(&str, String)]) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url).query(query);
        if let Some(auth) = &self.auth_header {
            request = request.header("Authorization", auth);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(StoreError::AuthenticationError);
            }
            status if !status.is_success() => {
                return Err(StoreError::ApiError(format!("HTTP {}", status)));
            }
            _ => {}
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| StoreError::InvalidDocument(e.to_string()))
    }
}

#[derive(Deserialize)]
struct Paginated<T> {
    docs: Vec<T>,
}

#[async_trait]
impl ContentStore for PayloadClient {
    async fn find_by_id(
        &self,
        collection: &str,
        id: &str,
        depth: u8,
    ) -> Result<Option<Note>, StoreError> {
        let url = self.endpoint(&[collection, id])?;
        self.fetch(url, &[("depth", depth.to_string())]).await
    }

    async fn list(&self, collection: &str, limit: usize) -> Result<Vec<Note>, StoreError> {
        let url = self.endpoint(&[collection])?;
        let page: Option<Paginated<Note>> = self
            .fetch(url, &[("depth", "0".to_string()), ("limit", limit.to_string())])
            .await?;

        Ok(page.map(|p| p.docs).unwrap_or_default())
    }
}
