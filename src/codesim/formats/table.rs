//! Side-by-side diff table
//!
//! One line per [`DiffRow`]: a gutter marker (`-` removed, `+` inserted), the
//! left label, the similarity percentage and the right label. Nesting is shown
//! by indenting both labels two spaces per level.
//!
//! Colour is an explicit [`TableStyle`] setting, never detected here: callers
//! decide from configuration and command-line flags.

use crossterm::style::Stylize;

use crate::codesim::similarity::{DiffRow, RowKind, SimilarityReport};
use codesim_config::DisplayConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    pub color: bool,
    /// Width of the left column, indentation included
    pub label_width: usize,
    /// List removed and inserted nodes as rows of their own
    pub show_gaps: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            color: false,
            label_width: 40,
            show_gaps: true,
        }
    }
}

impl From<&DisplayConfig> for TableStyle {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            color: config.color,
            label_width: config.label_width,
            show_gaps: config.show_gaps,
        }
    }
}

pub fn render_table(report: &SimilarityReport, style: &TableStyle) -> String {
    let mut result = String::new();
    for row in report.rows() {
        if !style.show_gaps && matches!(row.kind, RowKind::Removed | RowKind::Inserted) {
            continue;
        }
        result.push_str(&render_row(&row, style));
        result.push('\n');
    }
    result
}

fn render_row(row: &DiffRow, style: &TableStyle) -> String {
    let marker = match row.kind {
        RowKind::Removed => '-',
        RowKind::Inserted => '+',
        RowKind::Compared | RowKind::Group => ' ',
    };
    let width = style.label_width;
    let left = fit(&indented(row.depth, &row.left), width);
    let right = fit(&indented(row.depth, &row.right), width);
    let percentage = format!("{:>4}", format!("{}%", row.percentage));
    let percentage = if style.color {
        colored(percentage, row.percentage)
    } else {
        percentage
    };

    let line = format!("{} {:<width$} {}  {}", marker, left, percentage, right);
    line.trim_end().to_string()
}

fn colored(cell: String, percentage: u32) -> String {
    match percentage {
        100 => cell.green().to_string(),
        50..=99 => cell.yellow().to_string(),
        _ => cell.red().to_string(),
    }
}

fn indented(depth: usize, label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!("{}{}", "  ".repeat(depth), label)
    }
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    if width > 0 {
        cut.push('…');
    }
    cut
}
