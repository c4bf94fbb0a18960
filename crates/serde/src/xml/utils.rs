//! Small helpers shared by the reader and the writer.

/// Checks if text consists only of XML whitespace.
///
/// Such text between block children is layout, not content.
pub fn is_whitespace(text: &str) -> bool {
    text.bytes().all(|b| matches!(b, b' ' | b'\n' | b'\r' | b'\t'))
}

/// Shortens text for log and error messages.
pub fn excerpt(text: &str) -> String {
    const LIMIT: usize = 40;
    let trimmed = text.trim();
    if trimmed.chars().count() <= LIMIT {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(LIMIT).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_whitespace() {
        assert!(is_whitespace(""));
        assert!(is_whitespace("\n    \t\r\n"));
        assert!(!is_whitespace("  x  "));
        assert!(!is_whitespace("\u{a0}"));
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("  '  "), "'");
        let long = "a".repeat(50);
        assert_eq!(excerpt(&long), format!("{}...", "a".repeat(40)));
    }
}
