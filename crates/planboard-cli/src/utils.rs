//! Text table formatting for the Planboard CLI

use colored::Colorize;
use planboard_core::utils::truncate_text;
use planboard_core::{PageItem, PaginationState};

/// Widest a column may grow before cells are truncated
pub const MAX_COLUMN_WIDTH: usize = 28;

/// Lay out `header` and `rows` as aligned, space-separated columns
pub fn format_table(header: &[String], rows: &[Vec<String>], color: bool) -> Vec<String> {
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, label)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(&truncate_text(cell, *width), *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 1);
    let header_line = line(header);
    out.push(if color {
        header_line.bold().to_string()
    } else {
        header_line
    });
    out.extend(rows.iter().map(|row| line(row)));
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Page strip with the current page bracketed, e.g. `1 … 9 [10] 11 … 20`
pub fn format_page_window(state: &PaginationState) -> String {
    let current = state.current_page();
    state
        .page_window()
        .into_iter()
        .map(|item| match item {
            PageItem::Page(n) if n == current => format!("[{}]", n),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Status text followed by the page strip
pub fn format_footer(state: &PaginationState) -> String {
    format!("{}  |  {}", state.status_text(), format_page_window(state))
}
