use std::sync::Arc;

use fiszki_core::FlashcardExtractor;

/// Default page size of `GET /api/notes`
pub const DEFAULT_NOTES_LIMIT: usize = 20;
pub const MAX_NOTES_LIMIT: usize = 100;

/// Shared, immutable handler state
#[derive(Clone)]
pub struct ServerState {
    pub extractor: Arc<FlashcardExtractor>,
}

impl ServerState {
    pub fn new(extractor: FlashcardExtractor) -> Self {
        Self {
            extractor: Arc::new(extractor),
        }
    }
}
