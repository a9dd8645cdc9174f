//! Width-aware text helpers for pane rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` so it occupies at most `max_width` visual columns.
/// Wide characters (CJK, emoji) count as their display width, so a wide
/// character that would straddle the limit is dropped entirely.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(ch);
        current_width += char_width;
    }

    result
}

/// Number of spaces needed after `text` to fill `target_width` columns.
pub fn pad_to_width(text: &str, target_width: usize) -> usize {
    target_width.saturating_sub(text.width())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("let x = 1;", 5), "let x");
        assert_eq!(truncate_to_width("let x = 1;", 20), "let x = 1;");
        assert_eq!(truncate_to_width("let x = 1;", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns; never split one across the limit.
        assert_eq!(truncate_to_width("你好世界", 5), "你好");
        assert_eq!(truncate_to_width("你好世界", 6), "你好世");
        assert_eq!(truncate_to_width("ab你好", 3), "ab");
    }

    #[test]
    fn test_truncate_zero_width_combining() {
        let text = "e\u{0301}x"; // e + combining acute, then x
        assert_eq!(truncate_to_width(text, 1), "e\u{0301}");
    }

    #[test]
    fn test_pad_ascii() {
        assert_eq!(pad_to_width("abc", 10), 7);
        assert_eq!(pad_to_width("abc", 3), 0);
        assert_eq!(pad_to_width("abcdef", 3), 0);
    }

    #[test]
    fn test_pad_wide_chars() {
        assert_eq!(pad_to_width("你好", 10), 6);
        assert_eq!(pad_to_width("你好", 4), 0);
    }
}
