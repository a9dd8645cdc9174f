//! Two-pane rendering of a `RenderModel`.

use crate::rows::{RenderModel, Row, RowStyle};
use crate::text::{pad_to_width, truncate_to_width};
use crate::theme::{ColorScheme, Theme};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Rows of terminal chrome around the pane content: title bar, bottom
/// border, status bar.
pub const CHROME_HEIGHT: u16 = 3;

/// Draw the whole screen: title bar, visible row pairs, bottom border,
/// status bar.
pub fn render(
    stdout: &mut impl Write,
    model: &RenderModel,
    left_title: &str,
    right_title: &str,
    scroll_offset: usize,
    theme: Theme,
) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let colors = theme.colors();
    let content_height = height.saturating_sub(CHROME_HEIGHT) as usize;

    // One column each for the outer borders and the middle separator.
    let total_content_width = (width as usize).saturating_sub(3);
    let left_pane_width = total_content_width / 2;
    let right_pane_width = total_content_width - left_pane_width;

    let gutter_width = gutter_width(model);
    let left_content_width = left_pane_width.saturating_sub(gutter_width);
    let right_content_width = right_pane_width.saturating_sub(gutter_width);

    render_title_bar(
        stdout,
        left_title,
        right_title,
        left_pane_width,
        right_pane_width,
        &colors,
    )?;

    for screen_line in 0..content_height {
        let y = screen_line as u16 + 1;
        let row_idx = scroll_offset + screen_line;

        queue!(
            stdout,
            MoveTo(0, y),
            SetForegroundColor(colors.border_fg),
            Print("│"),
            ResetColor
        )?;

        match (model.original_rows.get(row_idx), model.modified_rows.get(row_idx)) {
            (Some(left), Some(right)) => {
                // Changed spans on the left are removals, on the right additions.
                render_row(
                    stdout,
                    left,
                    gutter_width,
                    left_content_width,
                    colors.span_removed_bg,
                    &colors,
                )?;
                queue!(
                    stdout,
                    SetForegroundColor(colors.border_fg),
                    Print("│"),
                    ResetColor
                )?;
                render_row(
                    stdout,
                    right,
                    gutter_width,
                    right_content_width,
                    colors.span_added_bg,
                    &colors,
                )?;
            }
            _ => {
                render_blank(stdout, left_pane_width, &colors)?;
                queue!(
                    stdout,
                    SetForegroundColor(colors.border_fg),
                    Print("│"),
                    ResetColor
                )?;
                render_blank(stdout, right_pane_width, &colors)?;
            }
        }

        queue!(
            stdout,
            SetForegroundColor(colors.border_fg),
            Print("│"),
            ResetColor
        )?;
    }

    render_bottom_border(stdout, left_pane_width, right_pane_width, height, &colors)?;
    render_status_bar(
        stdout,
        model,
        left_title,
        right_title,
        scroll_offset,
        content_height,
        width,
        height,
        &colors,
    )?;

    stdout.flush()
}

/// Gutter wide enough for the largest line number on either pane, plus one
/// space of padding on each side.
fn gutter_width(model: &RenderModel) -> usize {
    let max_line = model
        .original_rows
        .iter()
        .chain(model.modified_rows.iter())
        .filter_map(|row| row.line_number)
        .max()
        .unwrap_or(1);
    max_line.to_string().len() + 2
}

fn render_title_bar(
    stdout: &mut impl Write,
    left_title: &str,
    right_title: &str,
    left_pane_width: usize,
    right_pane_width: usize,
    colors: &ColorScheme,
) -> io::Result<()> {
    queue!(stdout, MoveTo(0, 0))?;

    for (title, pane_width, corner) in [
        (left_title, left_pane_width, "┌"),
        (right_title, right_pane_width, "┬"),
    ] {
        let label = format!(" {} ", truncate_to_width(title, pane_width.saturating_sub(2)));
        let padding = "─".repeat(pane_width.saturating_sub(label.width()));
        queue!(
            stdout,
            SetForegroundColor(colors.border_fg),
            Print(corner),
            SetBackgroundColor(colors.title_bg),
            SetForegroundColor(colors.title_fg),
            Print(&label),
            ResetColor,
            SetForegroundColor(colors.border_fg),
            Print(&padding),
            ResetColor
        )?;
    }

    queue!(
        stdout,
        SetForegroundColor(colors.border_fg),
        Print("┐"),
        ResetColor
    )?;

    Ok(())
}

/// One pane cell of one row: gutter then content, background by row style.
fn render_row(
    stdout: &mut impl Write,
    row: &Row,
    gutter_width: usize,
    content_width: usize,
    span_changed_bg: Color,
    colors: &ColorScheme,
) -> io::Result<()> {
    match row.line_number {
        Some(line_number) => {
            let gutter = format!("{:>width$} ", line_number, width = gutter_width - 1);
            queue!(
                stdout,
                SetBackgroundColor(colors.bg),
                SetForegroundColor(colors.line_number_fg),
                Print(&gutter),
            )?;
        }
        None => {
            // Contentless side gets a tilde gutter instead of a number.
            let gutter = format!("{:>width$} ", "~", width = gutter_width - 1);
            queue!(
                stdout,
                SetBackgroundColor(colors.bg),
                SetForegroundColor(colors.placeholder_fg),
                Print(&gutter),
            )?;
        }
    }

    let row_bg = match row.style {
        RowStyle::Added => colors.added_bg,
        RowStyle::Removed => colors.removed_bg,
        RowStyle::Modified => colors.modified_bg,
        RowStyle::Unchanged | RowStyle::Placeholder => colors.bg,
    };

    match &row.spans {
        Some(spans) => {
            let mut current_width = 0;
            for span in spans {
                if current_width >= content_width {
                    break;
                }
                let remaining = content_width - current_width;
                let text = truncate_to_width(&span.text, remaining);
                let bg = if span.changed { span_changed_bg } else { row_bg };
                queue!(
                    stdout,
                    SetBackgroundColor(bg),
                    SetForegroundColor(colors.fg),
                    Print(&text),
                )?;
                current_width += text.width();
            }
            let padding = content_width.saturating_sub(current_width);
            if padding > 0 {
                queue!(
                    stdout,
                    SetBackgroundColor(row_bg),
                    Print(" ".repeat(padding)),
                )?;
            }
        }
        None => {
            let text = truncate_to_width(&row.content, content_width);
            let padding = pad_to_width(&text, content_width);
            queue!(
                stdout,
                SetBackgroundColor(row_bg),
                SetForegroundColor(colors.fg),
                Print(&text),
                Print(" ".repeat(padding)),
            )?;
        }
    }

    queue!(stdout, ResetColor)?;
    Ok(())
}

fn render_blank(stdout: &mut impl Write, pane_width: usize, colors: &ColorScheme) -> io::Result<()> {
    queue!(
        stdout,
        SetBackgroundColor(colors.bg),
        Print(" ".repeat(pane_width)),
        ResetColor
    )?;
    Ok(())
}

fn render_bottom_border(
    stdout: &mut impl Write,
    left_pane_width: usize,
    right_pane_width: usize,
    height: u16,
    colors: &ColorScheme,
) -> io::Result<()> {
    let y = height.saturating_sub(2);
    queue!(
        stdout,
        MoveTo(0, y),
        SetForegroundColor(colors.border_fg),
        Print(format!(
            "└{}┴{}┘",
            "─".repeat(left_pane_width),
            "─".repeat(right_pane_width)
        )),
        ResetColor
    )?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn render_status_bar(
    stdout: &mut impl Write,
    model: &RenderModel,
    left_title: &str,
    right_title: &str,
    scroll_offset: usize,
    content_height: usize,
    width: u16,
    height: u16,
    colors: &ColorScheme,
) -> io::Result<()> {
    let status = if model.is_empty() {
        format!(" {} and {} are identical (both empty)", left_title, right_title)
    } else {
        let stats = model.stats();
        let first = (scroll_offset + 1).min(model.row_count());
        let last = (scroll_offset + content_height).min(model.row_count());
        let summary = if stats.is_clean() {
            "no differences".to_string()
        } else {
            format!("+{} -{} ~{}", stats.added, stats.removed, stats.modified)
        };
        format!(
            " {} → {} | {} | rows {}-{}/{} | ↑↓ PgUp/PgDn scroll  t theme  q quit",
            left_title,
            right_title,
            summary,
            first,
            last,
            model.row_count()
        )
    };

    let text = truncate_to_width(&status, width as usize);
    let padding = pad_to_width(&text, width as usize);
    queue!(
        stdout,
        MoveTo(0, height.saturating_sub(1)),
        SetBackgroundColor(colors.status_bg),
        SetForegroundColor(colors.status_fg),
        Print(&text),
        Print(" ".repeat(padding)),
        ResetColor
    )?;
    Ok(())
}

#[cfg(test)]
mod gutter_tests {
    use super::*;
    use crate::align::align_texts;

    #[test]
    fn test_gutter_sized_to_widest_number() {
        let text: String = (0..120).map(|i| format!("line {}\n", i)).collect();
        let model = align_texts(&text, &text);
        // 120 lines: three digits plus two spaces of padding.
        assert_eq!(gutter_width(&model), 5);
    }

    #[test]
    fn test_gutter_minimum_for_empty_model() {
        let model = align_texts("", "");
        assert_eq!(gutter_width(&model), 3);
    }
}
