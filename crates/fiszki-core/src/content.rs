//! Flattening of note content into prompt-ready plain text.
//!
//! Notes come either as plain strings or as Lexical editor documents
//! (`{"root": {"children": [...]}}`). Documents are walked node by node so the
//! prompt receives the words a reader would see, never the JSON around them.

use fiszki_types::{Note, NoteContent, NoteSummary};
use serde_json::Value;

/// Characters of flattened content shown in the note picker
pub const PREVIEW_CHARS: usize = 100;

pub fn flatten_content(content: &NoteContent) -> String {
    match content {
        NoteContent::Text(text) => text.clone(),
        NoteContent::Document(doc) => flatten_document(doc),
    }
}

/// Plain text of a Lexical document or any JSON value holding text nodes
pub fn flatten_document(doc: &Value) -> String {
    let mut out = String::new();
    let root = doc.get("root").unwrap_or(doc);
    walk(root, &mut out, 0);
    tidy(&out)
}

fn walk(node: &Value, out: &mut String, depth: usize) {
    match node {
        Value::String(text) => out.push_str(text),
        Value::Array(items) => items.iter().for_each(|item| walk(item, out, depth)),
        Value::Object(map) => match map.get("type").and_then(Value::as_str) {
            Some("text") => {
                if let Some(text) = map.get("text").and_then(Value::as_str) {
                    out.push_str(text);
                }
            }
            Some("linebreak") => out.push('\n'),
            Some("tab") => out.push('\t'),
            Some("list") => walk_list(node, out, depth),
            Some("paragraph" | "heading" | "quote" | "code" | "listitem") => {
                walk_children(node, out, depth);
                out.push('\n');
            }
            _ => {
                if map.contains_key("children") {
                    walk_children(node, out, depth);
                } else if let Some(text) = map.get("text").and_then(Value::as_str) {
                    out.push_str(text);
                }
            }
        },
        _ => {}
    }
}

fn walk_children(node: &Value, out: &mut String, depth: usize) {
    if let Some(children) = node.get("children") {
        walk(children, out, depth);
    }
}

fn walk_list(list: &Value, out: &mut String, depth: usize) {
    let numbered = list.get("listType").and_then(Value::as_str) == Some("number");
    let mut counter = list.get("start").and_then(Value::as_u64).unwrap_or(1);
    let indent = "  ".repeat(depth);

    let Some(items) = list.get("children").and_then(Value::as_array) else {
        return;
    };

    for item in items {
        // Lexical nests sub-lists in a wrapper item that carries no text
        if holds_nested_list(item) {
            walk_children_nested(item, out, depth + 1);
            continue;
        }

        out.push_str(&indent);
        if numbered {
            let number = item.get("value").and_then(Value::as_u64).unwrap_or(counter);
            out.push_str(&format!("{number}. "));
            counter = number.saturating_add(1);
        } else {
            out.push_str("- ");
        }
        walk_children(item, out, depth);
        out.push('\n');
    }
}

fn holds_nested_list(item: &Value) -> bool {
    item.get("children")
        .and_then(Value::as_array)
        .is_some_and(|children| {
            !children.is_empty()
                && children
                    .iter()
                    .all(|c| c.get("type").and_then(Value::as_str) == Some("list"))
        })
}

fn walk_children_nested(item: &Value, out: &mut String, depth: usize) {
    if let Some(children) = item.get("children").and_then(Value::as_array) {
        for child in children {
            walk_list(child, out, depth);
        }
    }
}

/// Trim line ends and collapse runs of blank lines
fn tidy(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.is_empty() && lines.last().is_some_and(|last| last.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    lines.join("\n").trim().to_string()
}

/// Picker entry: title plus the start of the flattened body
pub fn note_summary(note: &Note) -> NoteSummary {
    let title = note
        .title
        .as_ref()
        .map(flatten_content)
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "Untitled".to_string());

    let body = flatten_content(&note.content).replace('\n', " ");
    let preview = body.chars().take(PREVIEW_CHARS).collect();

    NoteSummary {
        id: note.id.clone(),
        title,
        preview,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn text(t: &str) -> Value {
        json!({"type": "text", "text": t, "format": 0, "version": 1})
    }

    fn paragraph(children: Vec<Value>) -> Value {
        json!({"type": "paragraph", "children": children, "version": 1})
    }

    #[test]
    fn test_plain_text_passes_through() {
        let content = NoteContent::from("1. What is X? - Y.");
        assert_eq!(flatten_content(&content), "1. What is X? - Y.");
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let doc = json!({"root": {"type": "root", "children": [
            paragraph(vec![text("Hello "), text("world")]),
            paragraph(vec![]),
            paragraph(vec![]),
            paragraph(vec![text("Second"), json!({"type": "linebreak"}), text("line")]),
        ]}});
        assert_eq!(flatten_document(&doc), "Hello world\n\nSecond\nline");
    }

    #[test]
    fn test_numbered_list_keeps_numbers() {
        let doc = json!({"root": {"children": [
            {"type": "list", "listType": "number", "start": 1, "children": [
                {"type": "listitem", "value": 1, "children": [text("What is a variable? - A container.")]},
                {"type": "listitem", "value": 2, "children": [text("What is a function? - A block of code.")]},
            ]}
        ]}});
        assert_eq!(
            flatten_document(&doc),
            "1. What is a variable? - A container.\n2. What is a function? - A block of code."
        );
    }

    #[test]
    fn test_huge_list_value_does_not_overflow() {
        let doc = json!({"root": {"children": [
            {"type": "list", "listType": "number", "children": [
                {"type": "listitem", "value": u64::MAX, "children": [text("last")]},
                {"type": "listitem", "children": [text("after")]},
            ]}
        ]}});
        assert_eq!(
            flatten_document(&doc),
            format!("{0}. last\n{0}. after", u64::MAX)
        );
    }

    #[test]
    fn test_nested_bullet_list_is_indented() {
        let doc = json!({"root": {"children": [
            {"type": "list", "listType": "bullet", "children": [
                {"type": "listitem", "children": [text("Rust")]},
                {"type": "listitem", "children": [
                    {"type": "list", "listType": "bullet", "children": [
                        {"type": "listitem", "children": [text("ownership")]},
                    ]}
                ]},
            ]}
        ]}});
        assert_eq!(flatten_document(&doc), "- Rust\n  - ownership");
    }

    #[test]
    fn test_flattening_never_leaks_json_syntax() {
        let doc = json!({"root": {"children": [
            {"type": "heading", "tag": "h1", "children": [text("Title")]},
            {"type": "unknown-block", "children": [text("inner")]},
            {"type": "horizontalrule", "version": 1},
        ]}});
        let flat = flatten_document(&doc);
        assert_eq!(flat, "Title\ninner");
        assert!(!flat.contains('{') && !flat.contains("\"type\""));
    }

    #[test]
    fn test_summary_preview_is_capped() {
        let note = Note {
            id: "42".to_string(),
            title: Some(NoteContent::from("Biology")),
            content: NoteContent::Text("x".repeat(250)),
        };
        let summary = note_summary(&note);
        assert_eq!(summary.title, "Biology");
        assert_eq!(summary.preview.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn test_summary_without_title() {
        let note = Note {
            id: "7".to_string(),
            title: None,
            content: NoteContent::from("short"),
        };
        assert_eq!(note_summary(&note).title, "Untitled");
    }
}
