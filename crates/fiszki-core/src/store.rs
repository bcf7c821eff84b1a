use fiszki_types::Note;

pub const NOTES_COLLECTION: &str = "notes";

/// Relationship expansion used when loading a note for extraction
pub const NOTE_DEPTH: u8 = 1;

/// Note persistence and retrieval
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// Load one document, `None` if it does not exist
    async fn find_by_id(
        &self,
        collection: &str,
        id: &str,
        depth: u8,
    ) -> Result<Option<Note>, StoreError>;

    /// First `limit` documents of a collection
    async fn list(&self, collection: &str, limit: usize) -> Result<Vec<Note>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Authentication error")]
    AuthenticationError,
}
