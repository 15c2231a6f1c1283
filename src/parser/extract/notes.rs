use tracing::debug;

use crate::parser::text::EntryText;

const OPEN_MARKER: &str = "annote = ";
const CLOSE_MARKER: &str = "},";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotesState {
    Searching,
    Capturing,
}

/// Lines of the `annote` block, trimmed. The opening and closing lines are
/// not part of the notes, and nothing after the closing line is read.
pub fn extract(text: &EntryText) -> Vec<String> {
    let mut state = NotesState::Searching;
    let mut notes = Vec::new();

    for line in text.lines() {
        match state {
            NotesState::Searching if line.contains(OPEN_MARKER) => {
                state = NotesState::Capturing;
            }
            NotesState::Searching => {}
            NotesState::Capturing if line.contains(CLOSE_MARKER) => return notes,
            NotesState::Capturing => notes.push(line.trim().to_string()),
        }
    }

    if state == NotesState::Capturing {
        debug!(captured = notes.len(), "annote block never closed");
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_block_lines() {
        let text = EntryText::from_raw("  annote = {\n  line one\n  line two\n},");
        assert_eq!(extract(&text), ["line one", "line two"]);
    }

    #[test]
    fn no_block() {
        let text = EntryText::from_raw("@article{x,\n  title = {X},\n}");
        assert!(extract(&text).is_empty());
    }

    #[test]
    fn stops_at_first_close() {
        let text = EntryText::from_raw(
            "  annote = {\n  kept\n  },\n  not a note\n  annote = {\n  second block\n  },",
        );
        assert_eq!(extract(&text), ["kept"]);
    }

    #[test]
    fn unterminated_block_is_partial() {
        let text = EntryText::from_raw("  annote = {\n  first\n  second");
        assert_eq!(extract(&text), ["first", "second"]);
    }

    #[test]
    fn opening_line_content_discarded() {
        let text = EntryText::from_raw("  annote = {inline text\n  body\n},");
        assert_eq!(extract(&text), ["body"]);
    }
}
