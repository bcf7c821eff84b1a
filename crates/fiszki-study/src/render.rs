use std::fmt::Write;

use fiszki_core::StudySession;
use fiszki_types::{NoteSummary, Tab};

pub const HELP: &str = "\
Commands:
  n, next          next card
  p, prev          previous card
  f, flip, <space> flip the current card
  tab <name|all>   filter by category; quote a category named
                   `all` or an empty one: tab \"all\", tab \"\"
  notes            list notes
  gen <id|index>   generate flashcards from a note
  q, quit          exit";

/// Tabs, progress and the current card side
pub fn render_session(session: &StudySession) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", render_tabs(session));

    if session.is_generating() {
        let _ = writeln!(out, "Generating flashcards...");
    }
    if let Some(error) = session.last_error() {
        let _ = writeln!(out, "Error: {}", error);
    }

    match session.current() {
        Some(card) => {
            let progress = session.progress();
            let _ = writeln!(
                out,
                "Card {} / {} ({}%)",
                progress.position, progress.total, progress.percent
            );
            if session.is_flipped() {
                let _ = writeln!(out, "Back:  {}", card.back);
            } else {
                let _ = writeln!(out, "Front: {}", card.front);
            }
            let _ = write!(out, "Category: {}", card.category);
        }
        None if session.flashcards().is_empty() => {
            let _ = write!(out, "No flashcards yet. Type `notes` to pick a note.");
        }
        None => {
            let _ = write!(out, "0 / 0 (0%)\nNo flashcards in this category.");
        }
    }

    out
}

fn render_tabs(session: &StudySession) -> String {
    let active = session.active_tab();
    let mark = |tab: &Tab, label: String| {
        if tab == active {
            format!("[{}]", label)
        } else {
            label
        }
    };

    let mut tabs = vec![mark(
        &Tab::All,
        format!("all ({})", session.flashcards().len()),
    )];
    for category in session.categories() {
        let tab = Tab::Category(category.to_string());
        let label = format!("{} ({})", category, session.category_count(category));
        tabs.push(mark(&tab, label));
    }

    tabs.join(" ")
}

/// Numbered picker listing
pub fn render_notes(notes: &[NoteSummary]) -> String {
    if notes.is_empty() {
        return "No notes found.".to_string();
    }

    let mut out = String::from("Notes:\n");
    for (i, note) in notes.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} [{}]", i + 1, note.title, note.id);
        if !note.preview.is_empty() {
            let _ = writeln!(out, "     {}", note.preview);
        }
    }
    out.push_str("Type `gen <number>` to generate flashcards.");
    out
}
