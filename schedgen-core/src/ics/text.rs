//! TEXT value escaping (RFC 5545 section 3.3.11).

/// How SUMMARY/LOCATION values are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEscaping {
    /// Escape backslash, semicolon, comma and line breaks.
    #[default]
    Rfc5545,
    /// Write labels verbatim. A label containing a line break produces a broken document.
    Legacy,
}

impl TextEscaping {
    pub fn apply(self, value: &str) -> String {
        match self {
            TextEscaping::Rfc5545 => escape_text(value),
            TextEscaping::Legacy => value.to_string(),
        }
    }
}

pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\r' => {
                // CRLF collapses into a single escaped newline
                chars.next_if_eq(&'\n');
                escaped.push_str("\\n");
            }
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_text("Lab A"), "Lab A");
        assert_eq!(escape_text("Room: 12"), "Room: 12");
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape_text("North, Room 1"), "North\\, Room 1");
        assert_eq!(escape_text("A;B"), "A\\;B");
        assert_eq!(escape_text("C:\\path"), "C:\\\\path");
    }

    #[test]
    fn escapes_line_breaks() {
        assert_eq!(escape_text("two\nlines"), "two\\nlines");
        assert_eq!(escape_text("two\r\nlines"), "two\\nlines");
        assert_eq!(escape_text("lone\rcr"), "lone\\ncr");
    }

    #[test]
    fn legacy_mode_is_verbatim() {
        assert_eq!(TextEscaping::Legacy.apply("a, b; c\nd"), "a, b; c\nd");
        assert_eq!(TextEscaping::Rfc5545.apply("a, b"), "a\\, b");
    }
}
