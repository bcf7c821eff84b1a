use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A single recall card produced from a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    pub category: String,
}

impl Flashcard {
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            category: category.into(),
        }
    }
}

/// Body of `POST /api/flashcards`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionRequest {
    #[serde(default)]
    pub note_id: String,
}

/// Successful extraction payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub flashcards: Vec<Flashcard>,
}

/// Error payload returned by the service for every failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A stored user document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: Option<NoteContent>,
    #[serde(default)]
    pub content: NoteContent,
}

/// Note body: either plain text or a rich-text editor document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteContent {
    Text(String),
    Document(serde_json::Value),
}

impl Default for NoteContent {
    fn default() -> Self {
        NoteContent::Text(String::new())
    }
}

impl From<&str> for NoteContent {
    fn from(text: &str) -> Self {
        NoteContent::Text(text.to_string())
    }
}

/// Picker entry for a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: String,
    pub title: String,
    pub preview: String,
}

// Payload returns numeric ids on SQL adapters and strings on Mongo
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Category filter of the study view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    All,
    Category(String),
}

impl Tab {
    /// `all` (any case) or nothing selects every card. A double-quoted name is
    /// always a category, so `"all"` and `""` reach categories with those names.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if let Some(quoted) = name
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            return Tab::Category(quoted.to_string());
        }

        if name.is_empty() || name.eq_ignore_ascii_case("all") {
            Tab::All
        } else {
            Tab::Category(name.to_string())
        }
    }

    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            Tab::All => true,
            Tab::Category(category) => card.category == *category,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::All => write!(f, "all"),
            Tab::Category(category) => write!(f, "{category}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Navigate(Direction),
    Flip,
    SelectTab(Tab),
    ShowNotes,
    NotesLoaded(Result<Vec<NoteSummary>, String>),
    /// Note id, or 1-based position in the last picker listing
    Generate(String),
    GenerationFinished(Result<Vec<Flashcard>, String>),
    Help,
    /// Rendered text for the terminal
    Display(String),
    Quit,
}
