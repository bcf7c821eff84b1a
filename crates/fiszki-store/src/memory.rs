use std::path::Path;

use async_trait::async_trait;
use fiszki_core::{ContentStore, StoreError};
use fiszki_types::Note;
use tokio::sync::RwLock;

/// Notes held in process, keyed by id. Collection names are ignored.
#[derive(Default)]
pub struct MemoryStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(notes),
        }
    }

    /// Load a JSON array of notes, or a Payload `{ "docs": [...] }` page
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::ApiError(format!("{}: {}", path.display(), e)))?;

        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| StoreError::InvalidDocument(format!("{}: {}", path.display(), e)))?;
        let docs = match value {
            serde_json::Value::Object(mut page) => page
                .remove("docs")
                .unwrap_or(serde_json::Value::Array(Vec::new())),
            other => other,
        };

        let notes: Vec<Note> = serde_json::from_value(docs)
            .map_err(|e| StoreError::InvalidDocument(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Loaded {} notes from {}", notes.len(), path.display());
        Ok(Self::with_notes(notes))
    }

    /// Insert or replace by id
    pub async fn insert(&self, note: Note) {
        let mut notes = self.notes.write().await;
        match notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => *existing = note,
            None => notes.push(note),
        }
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn find_by_id(
        &self,
        _collection: &str,
        id: &str,
        _depth: u8,
    ) -> Result<Option<Note>, StoreError> {
        Ok(self.notes.read().await.iter().find(|n| n.id == id).cloned())
    }

    async fn list(&self, _collection: &str, limit: usize) -> Result<Vec<Note>, StoreError> {
        Ok(self.notes.read().await.iter().take(limit).cloned().collect())
    }
}
