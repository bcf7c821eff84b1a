use fiszki_types::{AppEvent, Direction, Tab};

/// Parse one line of terminal input.
///
/// `Ok(None)` for a blank line, `Err` with a hint for anything unknown.
pub fn parse_command(line: &str) -> Result<Option<AppEvent>, String> {
    // a bare space flips, so only newlines are insignificant
    let line = line.trim_end_matches(['\r', '\n']);
    if line == " " {
        return Ok(Some(AppEvent::Flip));
    }

    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "n" | "next" => AppEvent::Navigate(Direction::Next),
        "p" | "prev" => AppEvent::Navigate(Direction::Prev),
        "f" | "flip" => AppEvent::Flip,
        "tab" => AppEvent::SelectTab(Tab::parse(arg)),
        "notes" => AppEvent::ShowNotes,
        "gen" | "generate" => {
            if arg.is_empty() {
                return Err("usage: gen <note-id|index>".to_string());
            }
            AppEvent::Generate(arg.to_string())
        }
        "h" | "help" | "?" => AppEvent::Help,
        "q" | "quit" | "exit" => AppEvent::Quit,
        other => return Err(format!("unknown command `{other}`, type `help`")),
    };

    Ok(Some(event))
}
