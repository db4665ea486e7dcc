use unicode_width::UnicodeWidthStr;

use crate::block::{Cell, RenderUnit, TableGrid, spans_plain_text};
use crate::config::LayoutConfig;

const RULE: char = '─';
const QUOTE_BAR: &str = "│ ";
const COLUMN_SEPARATOR: &str = " │ ";
const HEADER_JOINT: &str = "─┼─";

/// Render units as monospace text for terminals and logs.
pub fn units_to_plain_text(units: &[RenderUnit], layout: &LayoutConfig) -> String {
    let mut lines = Vec::new();
    for unit in units {
        emit_unit(unit, layout, &mut lines);
    }
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn emit_unit(unit: &RenderUnit, layout: &LayoutConfig, lines: &mut Vec<String>) {
    match unit {
        RenderUnit::Spacer { .. } => lines.push(String::new()),
        RenderUnit::Rule => lines.push(RULE.to_string().repeat(layout.text_width)),
        RenderUnit::Heading { content, .. } | RenderUnit::Paragraph { content, .. } => {
            lines.push(spans_plain_text(content));
        }
        RenderUnit::Quote { content, .. } => {
            lines.push(format!("{QUOTE_BAR}{}", spans_plain_text(content)));
        }
        RenderUnit::ListItem {
            marker,
            indent,
            content,
            ..
        } => {
            lines.push(format!(
                "{}{marker} {}",
                " ".repeat(*indent),
                spans_plain_text(content)
            ));
        }
        RenderUnit::Table(grid) => emit_table(grid, lines),
        RenderUnit::MathPanel { text, .. } => {
            let margin = layout.text_width.saturating_sub(text.width()) / 2;
            lines.push(format!("{}{text}", " ".repeat(margin)));
        }
        RenderUnit::CodeBlock {
            language, content, ..
        } => {
            lines.push(format!("```{}", language.as_deref().unwrap_or_default()));
            lines.extend(content.lines().map(str::to_string));
            lines.push("```".to_string());
        }
    }
}

fn emit_table(grid: &TableGrid, lines: &mut Vec<String>) {
    lines.push(table_row(&grid.header, &grid.column_widths));
    let rule: Vec<String> = grid
        .column_widths
        .iter()
        .map(|width| RULE.to_string().repeat(*width))
        .collect();
    lines.push(rule.join(HEADER_JOINT));
    for row in &grid.rows {
        lines.push(table_row(row, &grid.column_widths));
    }
}

fn table_row(cells: &[Cell], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_to_width(&spans_plain_text(cell), *width))
        .collect();
    padded.join(COLUMN_SEPARATOR).trim_end().to_string()
}

/// Pad with spaces up to a display width; `format!` pads by char count.
fn pad_to_width(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
