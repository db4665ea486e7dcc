use crate::block::{RenderUnit, Span, TableGrid};
use crate::style::{Color, FontWeight, TextStyle};

/// Convert render units to Typst markup
pub fn units_to_typst(units: &[RenderUnit]) -> String {
    let mut out = String::new();
    for unit in units {
        emit_unit(unit, &mut out);
    }
    out
}

fn emit_unit(unit: &RenderUnit, out: &mut String) {
    match unit {
        RenderUnit::Spacer { height } => {
            out.push_str(&format!("#v({height}pt)\n\n"));
        }
        RenderUnit::Rule => {
            out.push_str("#line(length: 100%)\n\n");
        }
        RenderUnit::Heading {
            level,
            style,
            content,
        } => {
            for _ in 0..*level {
                out.push('=');
            }
            out.push(' ');
            styled(style, content, out);
            out.push_str("\n\n");
        }
        RenderUnit::Quote {
            accent,
            style,
            content,
        } => {
            out.push_str(&format!(
                "#block(stroke: (left: 2pt + rgb(\"{accent}\")), inset: (left: 8pt))["
            ));
            styled(style, content, out);
            out.push_str("]\n\n");
        }
        RenderUnit::ListItem {
            marker,
            indent,
            style,
            content,
            ..
        } => {
            out.push_str(&format!(
                "#pad(left: {}em)[#\"{}\" ",
                *indent as f32 * 0.5,
                marker
            ));
            styled(style, content, out);
            out.push_str("]\n");
        }
        RenderUnit::Paragraph { style, content } => {
            styled(style, content, out);
            out.push_str("\n\n");
        }
        RenderUnit::Table(grid) => {
            // Keep tables together when possible
            out.push_str("#block(breakable: false)[\n");
            table_to_typst(grid, out);
            out.push_str("]\n\n");
        }
        RenderUnit::MathPanel { style, text } => {
            out.push_str("#align(center)[");
            text_call(style, out);
            out.push('[');
            escape_text(text, out);
            out.push_str("]]\n\n");
        }
        RenderUnit::CodeBlock {
            language,
            content,
            color,
        } => {
            out.push_str(&format!("#text(fill: rgb(\"{color}\"))[\n````"));
            if let Some(lang) = language {
                out.push_str(lang);
            }
            out.push('\n');
            out.push_str(content);
            if !content.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("````\n]\n\n");
        }
    }
}

/// Wrap spans in a `#text(...)` call carrying the style.
fn styled(style: &TextStyle, content: &[Span], out: &mut String) {
    text_call(style, out);
    out.push('[');
    spans_to_typst(content, out);
    out.push(']');
}

fn text_call(style: &TextStyle, out: &mut String) {
    out.push_str(&format!(
        "#text(fill: {}, size: {}pt, weight: \"{}\"",
        rgb(style.color),
        style.size,
        weight_name(style.weight)
    ));
    if style.italic {
        out.push_str(", style: \"italic\"");
    }
    if style.serif {
        out.push_str(", font: \"New Computer Modern\"");
    }
    out.push(')');
}

fn rgb(color: Color) -> String {
    format!("rgb(\"{color}\")")
}

fn weight_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "regular",
        FontWeight::Medium => "medium",
        FontWeight::Semibold => "semibold",
        FontWeight::Bold => "bold",
    }
}

fn spans_to_typst(spans: &[Span], out: &mut String) {
    for span in spans {
        span_to_typst(span, out);
    }
}

fn span_to_typst(span: &Span, out: &mut String) {
    match span {
        Span::Text(text) => escape_text(text, out),
        Span::Bold(inner) => {
            out.push('*');
            spans_to_typst(inner, out);
            out.push('*');
        }
        Span::Italic(inner) => {
            out.push('_');
            spans_to_typst(inner, out);
            out.push('_');
        }
        Span::Code(text) => {
            out.push('`');
            // Inside raw/code, backticks need special handling
            out.push_str(&text.replace('`', "\\`"));
            out.push('`');
        }
        Span::Link { url, content } => {
            out.push_str(&format!("#link(\"{}\")[", url.replace('"', "\\\"")));
            spans_to_typst(content, out);
            out.push(']');
        }
    }
}

/// Escape special Typst characters. Text reaches here with its markdown block
/// markers intact, so list, heading, comment and shorthand starters are
/// escaped too.
fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '/' | '+' | '-'
            | '=' | '~' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}

fn table_to_typst(grid: &TableGrid, out: &mut String) {
    let col_count = grid.column_count();
    if col_count == 0 {
        return;
    }

    out.push_str("#table(\n");
    out.push_str(&format!("  columns: {},\n", col_count));

    // Header cells (bold)
    for cell in &grid.header {
        out.push_str("  [*");
        spans_to_typst(cell, out);
        out.push_str("*],\n");
    }

    // Data rows
    for row in &grid.rows {
        for cell in row {
            out.push_str("  [");
            spans_to_typst(cell, out);
            out.push_str("],\n");
        }
    }

    out.push_str(")\n");
}

#[cfg(test)]
mod tests {
    use crate::{Color, format_message, typst::units_to_typst};

    const TEXT: &str = "#text(fill: rgb(\"#000000\"), size: 14pt, weight: \"regular\")";

    fn to_typst(message: &str) -> String {
        units_to_typst(&format_message(message, Color::rgb(0, 0, 0)))
    }

    #[test]
    fn heading() {
        assert_eq!(
            to_typst("# Hello"),
            "= #text(fill: rgb(\"#000000\"), size: 24pt, weight: \"bold\")[Hello]\n\n"
        );
    }

    #[test]
    fn paragraph() {
        assert_eq!(to_typst("Hello world"), format!("{TEXT}[Hello world]\n\n"));
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(to_typst("**bold**"), format!("{TEXT}[*bold*]\n\n"));
        assert_eq!(to_typst("*italic*"), format!("{TEXT}[_italic_]\n\n"));
    }

    #[test]
    fn inline_code() {
        assert_eq!(to_typst("`code`"), format!("{TEXT}[`code`]\n\n"));
    }

    #[test]
    fn code_block() {
        assert_eq!(
            to_typst("```rust\nlet x = 1;\n```"),
            "#text(fill: rgb(\"#24292f\"))[\n````rust\nlet x = 1;\n````\n]\n\n"
        );
    }

    #[test]
    fn list_items_are_padded() {
        assert_eq!(
            to_typst("- one\n  - two"),
            format!("#pad(left: 0em)[#\"•\" {TEXT}[one]]\n#pad(left: 1em)[#\"•\" {TEXT}[two]]\n")
        );
    }

    #[test]
    fn numbered_marker_is_a_string_literal() {
        assert_eq!(
            to_typst("1. one"),
            format!("#pad(left: 0em)[#\"1.\" {TEXT}[one]]\n")
        );
    }

    #[test]
    fn escapes_special_chars() {
        assert_eq!(to_typst("a # b"), format!("{TEXT}[a \\# b]\n\n"));
        assert_eq!(to_typst("a_b"), format!("{TEXT}[a\\_b]\n\n"));
    }

    #[test]
    fn double_slash_is_not_a_comment() {
        assert_eq!(
            to_typst("see a // b here"),
            format!("{TEXT}[see a \\/\\/ b here]\n\n")
        );
    }

    #[test]
    fn block_markers_in_fallback_text_are_escaped() {
        assert_eq!(to_typst("+ not a list"), format!("{TEXT}[\\+ not a list]\n\n"));
        assert_eq!(to_typst("1) x = 2"), format!("{TEXT}[1) x \\= 2]\n\n"));
        assert_eq!(to_typst("a ~ b - c"), format!("{TEXT}[a \\~ b \\- c]\n\n"));
    }

    #[test]
    fn link_urls_stay_unescaped() {
        assert_eq!(
            to_typst("[docs](https://x.y/a-b)"),
            format!("{TEXT}[#link(\"https://x.y/a-b\")[docs]]\n\n")
        );
    }

    #[test]
    fn table() {
        let md = "| A | B |\n|---|---|\n| 1 | 2 |";
        let expected = "#block(breakable: false)[\n#table(\n  columns: 2,\n  [*A*],\n  [*B*],\n  [1],\n  [2],\n)\n]\n\n";
        assert_eq!(to_typst(md), expected);
    }

    #[test]
    fn math_panel() {
        assert_eq!(
            to_typst("[\nx^{2}\n]"),
            "#align(center)[#text(fill: rgb(\"#000000\"), size: 16pt, weight: \"medium\", font: \"New Computer Modern\")[x²]]\n\n"
        );
    }

    #[test]
    fn horizontal_rule() {
        assert_eq!(to_typst("---"), "#line(length: 100%)\n\n");
    }
}
