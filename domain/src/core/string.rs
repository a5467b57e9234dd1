//! Text helpers shared by previews, search snippets and drafts.

/// Collapse every run of whitespace (including newlines) into one space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `s` to at most `max_len` bytes, marking the cut with `...`.
///
/// The cut lands on a char boundary, so multibyte text stays valid.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3);
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Single-line preview of free text, for progress output.
pub fn preview(s: &str, max_len: usize) -> String {
    truncate(&collapse_whitespace(s), max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  abuse\n\tcontact  email "), "abuse contact email");
        assert_eq!(collapse_whitespace("\n \t"), "");
    }

    #[test]
    fn test_truncate_short_input_unchanged() {
        assert_eq!(truncate("example.com", 50), "example.com");
    }

    #[test]
    fn test_truncate_cuts_with_marker() {
        assert_eq!(truncate("registrar abuse contact", 12), "registrar...");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // "é" is two bytes; a cut at byte 4 would split it
        assert_eq!(truncate("caféteria", 7), "caf...");
    }

    #[test]
    fn test_preview_flattens_lines() {
        assert_eq!(
            preview("Example Registrar\nabuse email", 40),
            "Example Registrar abuse email"
        );
        assert_eq!(preview("a\nb\nc d e f g h", 8), "a b c...");
    }
}
