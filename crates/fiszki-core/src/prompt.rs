use fiszki_types::ChatMessage;

/// Fixed instruction defining the card schema, with one worked example
pub const SYSTEM_PROMPT: &str = r#"
You are an assistant that creates flashcards from user-provided notes.

Your task is to:
- Extract all valid flashcard pairs from the note content.
- For each flashcard, generate a "front" (question or prompt) and "back" (answer).
- If the note includes multiple Q&A pairs (e.g. front1/back1, front2/back2, etc.), generate a flashcard for each pair.
- If the note includes a list of facts, definitions, or explanations, break them into useful flashcards.
- Return the flashcards as an array of objects in this format:
  [{ "front": "Question or term", "back": "Answer or explanation", "category": "Category of note" }, ...]

Be concise but informative. Avoid repeating identical flashcards. Use clear and simple language.

Example note content:
"1. What is a variable? - A container for storing data values.
2. What is a function? - A block of code designed to perform a particular task."

Expected output:
[
  { "front": "What is a variable?", "back": "A container for storing data values.", "category": "IT" },
  { "front": "What is a function?", "back": "A block of code designed to perform a particular task.", "category": "IT" }
]
"#;

/// Appended to the user turn so reasoning models skip their preamble
pub const NO_THINK_DIRECTIVE: &str = "/nothink";

pub fn user_prompt(note_text: &str) -> String {
    format!(
        "Please create flashcards materials with this note:\n{}\n\n{}",
        note_text.trim(),
        NO_THINK_DIRECTIVE
    )
}

/// System instruction followed by the note-bearing user turn
pub fn build_messages(note_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT.trim()),
        ChatMessage::user(user_prompt(note_text)),
    ]
}
