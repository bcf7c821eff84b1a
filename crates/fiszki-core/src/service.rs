use std::sync::Arc;
use std::time::{Duration, Instant};

use fiszki_config::model::ModelConfig;
use fiszki_types::{ChatMessage, Flashcard, NoteSummary};
use uuid::Uuid;

use crate::content::{flatten_content, note_summary};
use crate::error::ExtractionError;
use crate::extract::extract_flashcards;
use crate::prompt::build_messages;
use crate::provider::{ModelProvider, ProviderError, ProviderMetadata};
use crate::store::{ContentStore, NOTE_DEPTH, NOTES_COLLECTION};

/// Explicit knobs of the extraction pipeline
#[derive(Debug, Clone)]
pub struct ExtractorSettings {
    pub model: String,
    pub timeout: Duration,
}

impl From<&ModelConfig> for ExtractorSettings {
    fn from(config: &ModelConfig) -> Self {
        Self {
            model: config.model.clone(),
            timeout: config.timeout(),
        }
    }
}

/// Turns a stored note into a flashcard set.
///
/// Stateless between calls: concurrent extractions for different notes do not
/// coordinate.
pub struct FlashcardExtractor {
    store: Arc<dyn ContentStore>,
    provider: Arc<dyn ModelProvider>,
    settings: ExtractorSettings,
}

impl FlashcardExtractor {
    pub fn new(
        store: Arc<dyn ContentStore>,
        provider: Arc<dyn ModelProvider>,
        settings: ExtractorSettings,
    ) -> Self {
        Self {
            store,
            provider,
            settings,
        }
    }

    pub fn settings(&self) -> &ExtractorSettings {
        &self.settings
    }

    pub fn provider_metadata(&self) -> ProviderMetadata {
        self.provider.metadata()
    }

    /// Load the note, prompt the model and parse its reply
    pub async fn extract(&self, note_id: &str) -> Result<Vec<Flashcard>, ExtractionError> {
        let note_id = note_id.trim();
        if note_id.is_empty() {
            return Err(ExtractionError::InvalidInput);
        }

        let request_id = Uuid::new_v4();
        let started = Instant::now();
        tracing::info!(
            "[{}] Extracting flashcards from note {} with {}",
            request_id,
            note_id,
            self.settings.model
        );

        let note = self
            .store
            .find_by_id(NOTES_COLLECTION, note_id, NOTE_DEPTH)
            .await?
            .ok_or_else(|| ExtractionError::NoteNotFound(note_id.to_string()))?;

        let note_text = flatten_content(&note.content);
        tracing::debug!("[{}] Note flattened to {} chars", request_id, note_text.len());

        let messages = build_messages(&note_text);
        let raw = self.ask_model(&messages).await?;
        tracing::debug!("[{}] Model replied with {} chars", request_id, raw.len());

        let flashcards = extract_flashcards(&raw).inspect_err(|e| {
            tracing::warn!("[{}] Rejected model output: {}", request_id, e);
        })?;

        tracing::info!(
            "[{}] Extracted {} flashcards in {}ms",
            request_id,
            flashcards.len(),
            started.elapsed().as_millis()
        );

        Ok(flashcards)
    }

    /// Notes for the picker, in store order
    pub async fn list_notes(&self, limit: usize) -> Result<Vec<NoteSummary>, ExtractionError> {
        let notes = self.store.list(NOTES_COLLECTION, limit).await?;
        Ok(notes.iter().map(note_summary).collect())
    }

    async fn ask_model(&self, messages: &[ChatMessage]) -> Result<String, ExtractionError> {
        let call = self.provider.chat(&self.settings.model, messages);

        match tokio::time::timeout(self.settings.timeout, call).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(ProviderError::Timeout)) | Err(_) => {
                tracing::error!("Model provider exceeded {:?}", self.settings.timeout);
                Err(ExtractionError::Timeout(self.settings.timeout))
            }
            Ok(Err(e)) => {
                tracing::error!("Model provider failed: {}", e);
                Err(ExtractionError::Provider(e))
            }
        }
    }
}
