use std::time::Duration;

use crate::provider::ProviderError;
use crate::store::StoreError;

/// Failure of one extraction, reported per pipeline stage
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("note_id must be a non-empty string")]
    InvalidInput,

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Content store error: {0}")]
    Store(#[from] StoreError),

    #[error("Model provider error: {0}")]
    Provider(ProviderError),

    #[error("AI did not generate a response")]
    EmptyResponse,

    #[error("Could not extract JSON from AI response")]
    UnparsableResponse,

    #[error("Failed to parse flashcards JSON: {0}")]
    MalformedJson(String),

    #[error("Model provider timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NoteNotFound,
    StoreError,
    ProviderError,
    EmptyResponse,
    UnparsableResponse,
    MalformedJson,
    Timeout,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::NoteNotFound => "note_not_found",
            ErrorKind::StoreError => "store_error",
            ErrorKind::ProviderError => "provider_error",
            ErrorKind::EmptyResponse => "empty_response",
            ErrorKind::UnparsableResponse => "unparsable_response",
            ErrorKind::MalformedJson => "malformed_json",
            ErrorKind::Timeout => "timeout",
        }
    }
}

impl ExtractionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractionError::InvalidInput => ErrorKind::InvalidInput,
            ExtractionError::NoteNotFound(_) => ErrorKind::NoteNotFound,
            ExtractionError::Store(_) => ErrorKind::StoreError,
            ExtractionError::Provider(_) => ErrorKind::ProviderError,
            ExtractionError::EmptyResponse => ErrorKind::EmptyResponse,
            ExtractionError::UnparsableResponse => ErrorKind::UnparsableResponse,
            ExtractionError::MalformedJson(_) => ErrorKind::MalformedJson,
            ExtractionError::Timeout(_) => ErrorKind::Timeout,
        }
    }

    /// Short user-facing message; the underlying cause goes to `details`
    pub fn message(&self) -> String {
        match self {
            ExtractionError::Store(_) => "Content store request failed".to_string(),
            ExtractionError::Provider(_) => "Model provider request failed".to_string(),
            ExtractionError::MalformedJson(_) => "Failed to parse flashcards JSON".to_string(),
            other => other.to_string(),
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            ExtractionError::Store(e) => Some(e.to_string()),
            ExtractionError::Provider(e) => Some(e.to_string()),
            ExtractionError::MalformedJson(reason) => Some(reason.clone()),
            _ => None,
        }
    }
}
