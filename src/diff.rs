//! Adapters around the external differ. All diff computation happens in
//! `similar`; the rest of the crate only ever sees the op runs produced here.

use similar::{ChangeTag, TextDiff};

/// Classification of a contiguous diff run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Common,
    Added,
    Removed,
}

impl OpKind {
    fn from_tag(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => OpKind::Common,
            ChangeTag::Insert => OpKind::Added,
            ChangeTag::Delete => OpKind::Removed,
        }
    }
}

/// A contiguous run of line-level changes of one kind.
///
/// `text` is the concatenated payload of the run; `line_count` is the number
/// of logical lines it represents, consistent with `split::split_lines`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOp {
    pub text: String,
    pub kind: OpKind,
    pub line_count: usize,
}

/// A contiguous run of character-level changes of one kind within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharOp {
    pub text: String,
    pub kind: OpKind,
}

/// Line-level diff of two texts, coalesced into contiguous runs.
///
/// `similar` reports one change per line; adjacent changes with the same tag
/// are merged so that a block edit arrives as a single op.
pub fn line_diff(original: &str, modified: &str) -> Vec<DiffOp> {
    let diff = TextDiff::from_lines(original, modified);
    let mut ops: Vec<DiffOp> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = OpKind::from_tag(change.tag());
        // Line values keep their newline, except a final line without one.
        let value = change.value();

        match ops.last_mut() {
            Some(op) if op.kind == kind => {
                op.text.push_str(value);
                op.line_count += 1;
            }
            _ => ops.push(DiffOp {
                text: value.to_string(),
                kind,
                line_count: 1,
            }),
        }
    }

    ops
}

/// Character-level diff of two single lines, coalesced into contiguous runs.
pub fn char_diff(a: &str, b: &str) -> Vec<CharOp> {
    let diff = TextDiff::from_chars(a, b);
    let mut ops: Vec<CharOp> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = OpKind::from_tag(change.tag());
        let value = change.value();

        match ops.last_mut() {
            Some(op) if op.kind == kind => op.text.push_str(value),
            _ => ops.push(CharOp {
                text: value.to_string(),
                kind,
            }),
        }
    }

    ops
}

#[cfg(test)]
mod line_diff_tests {
    use super::*;

    #[test]
    fn test_identical_texts_single_common_run() {
        let ops = line_diff("a\nb\nc", "a\nb\nc");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].kind, OpKind::Common);
        assert_eq!(ops[0].line_count, 3);
        assert_eq!(ops[0].text, "a\nb\nc");
    }

    #[test]
    fn test_pure_addition_from_empty() {
        let ops = line_diff("", "hello");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].kind, OpKind::Added);
        assert_eq!(ops[0].line_count, 1);
        assert_eq!(ops[0].text, "hello");
    }

    #[test]
    fn test_pure_removal_to_empty() {
        let ops = line_diff("hello", "");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].kind, OpKind::Removed);
        assert_eq!(ops[0].line_count, 1);
    }

    #[test]
    fn test_changed_middle_line_yields_remove_then_add() {
        let ops = line_diff("a\nb\nc", "a\nx\nc");
        let kinds: Vec<OpKind> = ops.iter().map(|op| op.kind).collect();
        assert_eq!(
            kinds,
            vec![OpKind::Common, OpKind::Removed, OpKind::Added, OpKind::Common]
        );
        assert_eq!(ops[1].text, "b\n");
        assert_eq!(ops[2].text, "x\n");
    }

    #[test]
    fn test_adjacent_changes_coalesce() {
        let ops = line_diff("a\nb\nc\nd", "a\nx\ny\nd");
        // Both removed lines form one run, both added lines another.
        let removed: Vec<&DiffOp> = ops.iter().filter(|op| op.kind == OpKind::Removed).collect();
        let added: Vec<&DiffOp> = ops.iter().filter(|op| op.kind == OpKind::Added).collect();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].line_count, 2);
        assert_eq!(removed[0].text, "b\nc\n");
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].line_count, 2);
    }

    #[test]
    fn test_both_empty_yields_no_ops() {
        assert!(line_diff("", "").is_empty());
    }

    #[test]
    fn test_line_count_matches_split() {
        let ops = line_diff("a\nb\nc\n", "a\nb\nc\nd\n");
        for op in ops {
            assert_eq!(op.line_count, crate::split::split_lines(&op.text).len());
        }
    }
}
