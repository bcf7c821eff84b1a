use std::time::{Duration, Instant};

use fiszki_types::{Direction, Flashcard, Tab};

pub const DEFAULT_NAV_COOLDOWN: Duration = Duration::from_millis(300);

/// Browse position over the displayed subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based, 0 when nothing is displayed
    pub position: usize,
    pub total: usize,
    pub percent: u32,
}

/// In-memory state of the study view
#[derive(Debug, Clone)]
pub struct StudySession {
    flashcards: Vec<Flashcard>,
    current_index: usize,
    is_flipped: bool,
    active_tab: Tab,
    is_generating: bool,
    last_error: Option<String>,
    cooldown: Duration,
    last_navigation: Option<Instant>,
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new(DEFAULT_NAV_COOLDOWN)
    }
}

impl StudySession {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            flashcards: Vec::new(),
            current_index: 0,
            is_flipped: false,
            active_tab: Tab::All,
            is_generating: false,
            last_error: None,
            cooldown,
            last_navigation: None,
        }
    }

    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn active_tab(&self) -> &Tab {
        &self.active_tab
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for card in &self.flashcards {
            if !categories.contains(&card.category.as_str()) {
                categories.push(&card.category);
            }
        }
        categories
    }

    pub fn category_count(&self, category: &str) -> usize {
        self.flashcards
            .iter()
            .filter(|card| card.category == category)
            .count()
    }

    /// Cards shown under the active tab
    pub fn filtered(&self) -> Vec<&Flashcard> {
        self.flashcards
            .iter()
            .filter(|card| self.active_tab.matches(card))
            .collect()
    }

    pub fn current(&self) -> Option<&Flashcard> {
        self.filtered().get(self.current_index).copied()
    }

    pub fn flip(&mut self) {
        if self.current().is_some() {
            self.is_flipped = !self.is_flipped;
        }
    }

    /// Switch the category filter and restart from the first card
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.current_index = 0;
        self.is_flipped = false;
    }

    /// Move one card with wrap-around.
    ///
    /// Returns false when the subset is empty or the previous move happened
    /// less than the cooldown ago.
    pub fn navigate(&mut self, direction: Direction, now: Instant) -> bool {
        let len = self.filtered().len();
        if len == 0 {
            return false;
        }

        if let Some(last) = self.last_navigation
            && now.duration_since(last) < self.cooldown
        {
            return false;
        }

        let index = self.current_index.min(len - 1);
        self.current_index = match direction {
            Direction::Next => (index + 1) % len,
            Direction::Prev => (index + len - 1) % len,
        };
        self.is_flipped = false;
        self.last_navigation = Some(now);
        true
    }

    /// Mark an extraction in flight; false if one already is
    pub fn begin_generation(&mut self) -> bool {
        if self.is_generating {
            return false;
        }
        self.is_generating = true;
        self.last_error = None;
        true
    }

    /// Apply the outcome of the in-flight extraction.
    ///
    /// Cards are appended only on success; a failure keeps the list intact and
    /// records the message for display.
    pub fn finish_generation(&mut self, outcome: Result<Vec<Flashcard>, String>) {
        self.is_generating = false;
        match outcome {
            Ok(cards) => {
                self.flashcards.extend(cards);
                self.last_error = None;
            }
            Err(message) => self.last_error = Some(message),
        }
    }

    pub fn progress(&self) -> Progress {
        let total = self.filtered().len();
        if total == 0 {
            return Progress {
                position: 0,
                total: 0,
                percent: 0,
            };
        }

        let position = self.current_index.min(total - 1) + 1;
        let percent = ((position as f64 / total as f64) * 100.0).round() as u32;
        Progress {
            position,
            total,
            percent,
        }
    }
}
