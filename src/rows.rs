//! The render model: two index-aligned row sequences, one per pane.

/// One character run of a modified line, already filtered to this pane's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSpan {
    pub text: String,
    pub changed: bool,
}

/// Classification of a single pane row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Unchanged,
    Added,
    Removed,
    Modified,
    Placeholder,
}

/// One row of one pane. Rows carry a line number exactly when they are not
/// placeholders, and spans exactly when they are modified; the constructors
/// below are the only way rows are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line_number: Option<usize>,
    pub content: String,
    pub spans: Option<Vec<CharSpan>>,
    pub style: RowStyle,
}

impl Row {
    pub fn unchanged(line_number: usize, content: String) -> Self {
        Row {
            line_number: Some(line_number),
            content,
            spans: None,
            style: RowStyle::Unchanged,
        }
    }

    pub fn added(line_number: usize, content: String) -> Self {
        Row {
            line_number: Some(line_number),
            content,
            spans: None,
            style: RowStyle::Added,
        }
    }

    pub fn removed(line_number: usize, content: String) -> Self {
        Row {
            line_number: Some(line_number),
            content,
            spans: None,
            style: RowStyle::Removed,
        }
    }

    pub fn modified(line_number: usize, content: String, spans: Vec<CharSpan>) -> Self {
        Row {
            line_number: Some(line_number),
            content,
            spans: Some(spans),
            style: RowStyle::Modified,
        }
    }

    pub fn placeholder() -> Self {
        Row {
            line_number: None,
            content: String::new(),
            spans: None,
            style: RowStyle::Placeholder,
        }
    }
}

/// Row counts shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    pub fn is_clean(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.modified == 0
    }
}

/// The aligned two-pane output of one comparison. Both row sequences always
/// have the same length; index i of one pane sits beside index i of the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub original_rows: Vec<Row>,
    pub modified_rows: Vec<Row>,
}

impl RenderModel {
    /// True when the comparison produced no rows at all (both inputs empty).
    /// The viewer shows a "no differences" notice instead of a fabricated row.
    pub fn is_empty(&self) -> bool {
        self.original_rows.is_empty() && self.modified_rows.is_empty()
    }

    /// Number of aligned row pairs.
    pub fn row_count(&self) -> usize {
        self.original_rows.len()
    }

    /// Added rows are counted on the modified pane, removed rows on the
    /// original pane; a modified pair counts once.
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for row in &self.original_rows {
            match row.style {
                RowStyle::Removed => stats.removed += 1,
                RowStyle::Modified => stats.modified += 1,
                _ => {}
            }
        }
        for row in &self.modified_rows {
            if row.style == RowStyle::Added {
                stats.added += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_no_line_number() {
        let row = Row::placeholder();
        assert_eq!(row.line_number, None);
        assert_eq!(row.content, "");
        assert_eq!(row.spans, None);
        assert_eq!(row.style, RowStyle::Placeholder);
    }

    #[test]
    fn test_only_modified_rows_carry_spans() {
        let plain = Row::unchanged(1, "x".into());
        assert!(plain.spans.is_none());

        let spans = vec![CharSpan {
            text: "x".into(),
            changed: true,
        }];
        let modified = Row::modified(1, "x".into(), spans);
        assert!(modified.spans.is_some());
    }

    #[test]
    fn test_empty_model() {
        let model = RenderModel {
            original_rows: Vec::new(),
            modified_rows: Vec::new(),
        };
        assert!(model.is_empty());
        assert_eq!(model.row_count(), 0);
        assert!(model.stats().is_clean());
    }

    #[test]
    fn test_stats_count_each_pair_once() {
        let model = RenderModel {
            original_rows: vec![
                Row::unchanged(1, "a".into()),
                Row::removed(2, "b".into()),
                Row::modified(3, "c".into(), vec![]),
                Row::placeholder(),
            ],
            modified_rows: vec![
                Row::unchanged(1, "a".into()),
                Row::placeholder(),
                Row::modified(2, "d".into(), vec![]),
                Row::added(3, "e".into()),
            ],
        };
        let stats = model.stats();
        assert_eq!(stats.added, 1);
        assert_eq!(stats.removed, 1);
        assert_eq!(stats.modified, 1);
        assert!(!stats.is_clean());
    }
}
