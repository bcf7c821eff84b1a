pub mod content;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod provider;
pub mod service;
pub mod store;
pub mod study;

pub use error::{ErrorKind, ExtractionError};
pub use provider::{ModelProvider, ProviderError, ProviderMetadata};
pub use service::{ExtractorSettings, FlashcardExtractor};
pub use store::{ContentStore, StoreError};
pub use study::{Progress, StudySession};

#[cfg(test)]
mod tests;
