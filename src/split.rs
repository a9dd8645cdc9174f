//! Splitting of diff operation payloads into display lines.

/// Split one diff operation's text into the lines it represents.
///
/// An empty payload still stands for one (empty) line, never zero. A payload
/// ending in a newline would otherwise produce a dangling empty element, which
/// is dropped - except for `"\n"` itself, which is exactly one blank line.
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();

    // A trailing newline terminates the last line, it does not open a new one.
    if text.ends_with('\n') && lines.len() > 1 {
        lines.pop();
    }

    lines
}
