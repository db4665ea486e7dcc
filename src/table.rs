use unicode_width::UnicodeWidthStr;

use crate::block::{Cell, TableGrid, spans_plain_text};
use crate::inline::render_inline;
use crate::render::RenderContext;
use crate::style::FontWeight;

/// Build a table grid from raw `|`-delimited rows.
///
/// Returns `None` when no row survives separator and empty-cell removal.
pub fn render_table(rows: &[String], ctx: &RenderContext) -> Option<TableGrid> {
    let mut cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.trim())
        .filter(|row| !is_separator_row(row))
        .map(split_cells)
        .filter(|row| !row.is_empty())
        .collect();

    if cells.is_empty() {
        tracing::debug!(rows = rows.len(), "table has no content rows");
        return None;
    }

    let column_count = cells.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut cells {
        row.resize(column_count, String::new());
    }

    let min_width = ctx.config.layout.table_min_column_width;
    let mut column_widths = vec![min_width; column_count];
    let mut rendered: Vec<Vec<Cell>> = Vec::with_capacity(cells.len());
    for row in &cells {
        let row: Vec<Cell> = row.iter().map(|cell| render_inline(cell)).collect();
        for (width, cell) in column_widths.iter_mut().zip(&row) {
            *width = (*width).max(spans_plain_text(cell).width());
        }
        rendered.push(row);
    }

    let mut rendered = rendered.into_iter();
    let header = rendered.next().unwrap_or_default();
    Some(TableGrid {
        header,
        rows: rendered.collect(),
        column_widths,
        header_style: ctx.body_style().weight(FontWeight::Semibold),
        body_style: ctx.body_style(),
    })
}

/// Rows made only of `-`, `:`, `|` and spaces, with at least one `-`.
fn is_separator_row(row: &str) -> bool {
    row.contains('-') && row.chars().all(|c| matches!(c, '-' | ':' | '|' | ' '))
}

fn split_cells(row: &str) -> Vec<String> {
    row.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}
