//! Pulling a flashcard array out of free-form model output.
//!
//! Models wrap JSON in markdown fences, prepend commentary, or leak an empty
//! `<think>` block. Extraction peels those layers and then takes the first
//! top-level balanced `[{ ... }]` group, so bracketed prose around the array
//! does not confuse it.

use std::sync::LazyLock;

use fiszki_types::Flashcard;
use regex::Regex;

use crate::error::ExtractionError;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[A-Za-z0-9_+-]*[ \t]*(.*?)\s*```").expect("fence pattern is valid")
});

static THINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("think pattern is valid"));

/// Drop `<think>...</think>` reasoning blocks
pub fn strip_reasoning(text: &str) -> String {
    THINK_RE.replace_all(text, "").into_owned()
}

/// Interior of the first fenced code block, or the input when there is none
pub fn strip_code_fence(text: &str) -> &str {
    match FENCE_RE.captures(text).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => text,
    }
}

/// First top-level balanced JSON array whose first element is an object.
///
/// When no candidate balances (a stray quote inside a string, say), the span
/// from the first `[{` to the last `]` is returned so the parser can report
/// what is wrong with it.
pub fn find_json_array(text: &str) -> Option<&str> {
    let mut search_from = 0;
    let mut first_candidate = None;

    while let Some(offset) = text[search_from..].find('[') {
        let start = search_from + offset;
        if text[start + 1..].trim_start().starts_with('{') {
            if let Some(end) = matching_close(&text[start..]) {
                return Some(&text[start..=start + end]);
            }
            first_candidate.get_or_insert(start);
        }
        search_from = start + 1;
    }

    let start = first_candidate?;
    let end = text[start..].rfind(']')?;
    Some(&text[start..=start + end])
}

/// Byte offset of the bracket closing the one at offset 0.
///
/// Brackets inside string literals are ignored; a mismatched closer ends the
/// candidate.
fn matching_close(text: &str) -> Option<usize> {
    let mut stack = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, byte) in text.bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => stack.push(byte),
            b']' | b'}' => {
                let expected = if byte == b']' { b'[' } else { b'{' };
                if stack.pop() != Some(expected) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

/// Run the whole response pipeline: unwrap, locate, parse.
///
/// The batch is all-or-nothing: one malformed card rejects the array.
pub fn extract_flashcards(raw: &str) -> Result<Vec<Flashcard>, ExtractionError> {
    let without_reasoning = strip_reasoning(raw);
    let text = strip_code_fence(&without_reasoning);

    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyResponse);
    }

    let json = find_json_array(text).ok_or(ExtractionError::UnparsableResponse)?;

    serde_json::from_str(json).map_err(|e| ExtractionError::MalformedJson(e.to_string()))
}
