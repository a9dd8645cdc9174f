//! The alignment engine: turns a sequence of line-level diff ops into two
//! row-synchronized pane sequences ready for rendering.
//!
//! Every op produces the same number of rows on both sides. Standalone added
//! or removed lines are balanced by placeholder rows on the opposite pane; an
//! adjacent removed+added pair of equal line count is rendered as modified
//! rows on both panes with character-level highlighting.

use crate::diff::{self, DiffOp, OpKind};
use crate::rows::{CharSpan, RenderModel, Row};
use crate::split::split_lines;

/// Decide whether `ops[i]` opens a modified block: a removed run immediately
/// followed by an added run of the same, nonzero declared line count.
///
/// Same-length adjacent remove+add is the shape the line differ produces for
/// "this line changed" edits; pairing them reads far better side by side than
/// an unrelated deletion followed by an unrelated insertion.
pub fn is_modified_pair(ops: &[DiffOp], i: usize) -> bool {
    match (ops.get(i), ops.get(i + 1)) {
        (Some(removed), Some(added)) => {
            removed.kind == OpKind::Removed
                && added.kind == OpKind::Added
                && removed.line_count == added.line_count
                && removed.line_count > 0
        }
        _ => false,
    }
}

/// Character-level highlighting for one modified line pair.
///
/// Runs the character differ once and partitions its output: the original
/// side keeps unchanged and removed runs (removed ones flagged), the modified
/// side keeps unchanged and added runs (added ones flagged). Each side's span
/// texts concatenate back to that side's full line.
pub fn highlight_pair(original_line: &str, modified_line: &str) -> (Vec<CharSpan>, Vec<CharSpan>) {
    let mut original_spans = Vec::new();
    let mut modified_spans = Vec::new();

    for op in diff::char_diff(original_line, modified_line) {
        match op.kind {
            OpKind::Common => {
                original_spans.push(CharSpan {
                    text: op.text.clone(),
                    changed: false,
                });
                modified_spans.push(CharSpan {
                    text: op.text,
                    changed: false,
                });
            }
            OpKind::Removed => original_spans.push(CharSpan {
                text: op.text,
                changed: true,
            }),
            OpKind::Added => modified_spans.push(CharSpan {
                text: op.text,
                changed: true,
            }),
        }
    }

    (original_spans, modified_spans)
}

/// Walk the op sequence and build the aligned two-pane model.
///
/// Line numbers are 1-based and local to this call; the two counters advance
/// independently (placeholders consume no number). Never panics: declared
/// line counts that turn out wrong after splitting demote the pair to
/// standalone removed-then-added treatment.
pub fn align(ops: &[DiffOp]) -> RenderModel {
    let mut original_rows = Vec::new();
    let mut modified_rows = Vec::new();
    let mut original_line_no = 1usize;
    let mut modified_line_no = 1usize;

    let mut i = 0;
    while i < ops.len() {
        if is_modified_pair(ops, i) {
            let removed_lines = split_lines(&ops[i].text);
            let added_lines = split_lines(&ops[i + 1].text);

            // The declared counts can lie; pair only when the split agrees.
            if removed_lines.len() == added_lines.len() {
                for (old_line, new_line) in removed_lines.iter().zip(added_lines.iter()) {
                    let (old_spans, new_spans) = highlight_pair(old_line, new_line);
                    original_rows.push(Row::modified(
                        original_line_no,
                        old_line.clone(),
                        old_spans,
                    ));
                    original_line_no += 1;
                    modified_rows.push(Row::modified(
                        modified_line_no,
                        new_line.clone(),
                        new_spans,
                    ));
                    modified_line_no += 1;
                }
                i += 2;
                continue;
            }
        }

        let op = &ops[i];
        match op.kind {
            OpKind::Common => {
                for line in split_lines(&op.text) {
                    original_rows.push(Row::unchanged(original_line_no, line.clone()));
                    original_line_no += 1;
                    modified_rows.push(Row::unchanged(modified_line_no, line));
                    modified_line_no += 1;
                }
            }
            OpKind::Removed => {
                for line in split_lines(&op.text) {
                    original_rows.push(Row::removed(original_line_no, line));
                    original_line_no += 1;
                    modified_rows.push(Row::placeholder());
                }
            }
            OpKind::Added => {
                for line in split_lines(&op.text) {
                    original_rows.push(Row::placeholder());
                    modified_rows.push(Row::added(modified_line_no, line));
                    modified_line_no += 1;
                }
            }
        }
        i += 1;
    }

    RenderModel {
        original_rows,
        modified_rows,
    }
}

/// Convenience entry point: diff two texts and align the result.
pub fn align_texts(original: &str, modified: &str) -> RenderModel {
    align(&diff::line_diff(original, modified))
}

#[cfg(test)]
mod pairing_tests {
    use super::*;

    fn op(kind: OpKind, text: &str) -> DiffOp {
        DiffOp {
            text: text.to_string(),
            kind,
            line_count: split_lines(text).len(),
        }
    }

    #[test]
    fn test_removed_then_added_equal_counts() {
        let ops = vec![op(OpKind::Removed, "b\n"), op(OpKind::Added, "x\n")];
        assert!(is_modified_pair(&ops, 0));
    }

    #[test]
    fn test_unequal_counts_not_paired() {
        let ops = vec![op(OpKind::Removed, "a\nb\n"), op(OpKind::Added, "x\n")];
        assert!(!is_modified_pair(&ops, 0));
    }

    #[test]
    fn test_added_then_removed_not_paired() {
        let ops = vec![op(OpKind::Added, "x\n"), op(OpKind::Removed, "b\n")];
        assert!(!is_modified_pair(&ops, 0));
    }

    #[test]
    fn test_common_never_opens_a_pair() {
        let ops = vec![op(OpKind::Common, "a\n"), op(OpKind::Added, "x\n")];
        assert!(!is_modified_pair(&ops, 0));
    }

    #[test]
    fn test_removed_at_end_of_sequence() {
        let ops = vec![op(OpKind::Removed, "b\n")];
        assert!(!is_modified_pair(&ops, 0));
    }

    #[test]
    fn test_index_past_end() {
        let ops = vec![op(OpKind::Removed, "b\n"), op(OpKind::Added, "x\n")];
        assert!(!is_modified_pair(&ops, 5));
    }

    #[test]
    fn test_zero_count_not_paired() {
        let ops = vec![
            DiffOp {
                text: String::new(),
                kind: OpKind::Removed,
                line_count: 0,
            },
            DiffOp {
                text: String::new(),
                kind: OpKind::Added,
                line_count: 0,
            },
        ];
        assert!(!is_modified_pair(&ops, 0));
    }
}
