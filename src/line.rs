use crate::block::{BulletContent, RenderUnit};
use crate::inline::render_inline;
use crate::render::RenderContext;
use crate::style::heading_weight;

const RULES: [&str; 3] = ["---", "***", "___"];
const QUOTE_PREFIX: &str = "> ";
const MAX_INDENT_LEVEL: u8 = 3;
const MAX_ORDINAL_DIGITS: usize = 3;

/// Unordered list prefixes and the marker each one displays.
const BULLETS: [(&str, &str); 5] = [
    ("- ", "•"),
    ("* ", "•"),
    ("• ", "•"),
    ("○ ", "○"),
    ("▪ ", "▪"),
];

/// Structural reading of a single prose line, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Rule,
    Heading { level: u8, text: &'a str },
    Quote(&'a str),
    Bullet(BulletContent),
    Paragraph(&'a str),
}

/// Decide what a line is. The first matching rule wins, in this order:
/// blank, rule, heading (longest marker first), quote, list item, paragraph.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if RULES.iter().any(|rule| *rule == trimmed) {
        return LineKind::Rule;
    }
    if let Some((level, text)) = heading(trimmed) {
        return LineKind::Heading { level, text };
    }
    if let Some(text) = trimmed.strip_prefix(QUOTE_PREFIX) {
        return LineKind::Quote(text);
    }
    if let Some(bullet) = parse_bullet(line) {
        return LineKind::Bullet(bullet);
    }
    LineKind::Paragraph(trimmed)
}

fn heading(trimmed: &str) -> Option<(u8, &str)> {
    (1..=6u8).rev().find_map(|level| {
        let marker = format!("{} ", "#".repeat(usize::from(level)));
        trimmed.strip_prefix(marker.as_str()).map(|text| (level, text))
    })
}

/// Parse a bullet or numbered list line. `line` is the original, untrimmed
/// line; its leading spaces set the indent level.
///
/// A sentence that happens to start with `3. ` is read as a numbered item.
pub fn parse_bullet(line: &str) -> Option<BulletContent> {
    let trimmed = line.trim();
    let indent_level = indent_level(line);

    for (prefix, marker) in BULLETS {
        if let Some(text) = trimmed.strip_prefix(prefix) {
            return Some(BulletContent {
                marker: marker.to_string(),
                text: text.to_string(),
                is_numbered: false,
                indent_level,
            });
        }
    }

    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if (1..=MAX_ORDINAL_DIGITS).contains(&digits) {
        if let Some(text) = trimmed[digits..].strip_prefix(". ") {
            return Some(BulletContent {
                marker: format!("{}.", &trimmed[..digits]),
                text: text.to_string(),
                is_numbered: true,
                indent_level,
            });
        }
    }
    None
}

/// Leading spaces halved, clamped to 0..=3.
fn indent_level(line: &str) -> u8 {
    let spaces = line.chars().take_while(|c| *c == ' ').count();
    u8::try_from(spaces / 2)
        .unwrap_or(MAX_INDENT_LEVEL)
        .min(MAX_INDENT_LEVEL)
}

/// Render one prose line into its render unit.
pub fn render_line(line: &str, ctx: &RenderContext) -> RenderUnit {
    match classify_line(line) {
        LineKind::Blank => RenderUnit::Spacer {
            height: ctx.config.layout.spacer_height,
        },
        LineKind::Rule => RenderUnit::Rule,
        LineKind::Heading { level, text } => RenderUnit::Heading {
            level,
            style: ctx
                .text_style(ctx.config.typography.size_for_heading(level))
                .weight(heading_weight(level)),
            content: render_inline(text),
        },
        LineKind::Quote(text) => RenderUnit::Quote {
            accent: ctx.config.theme.quote_accent_color,
            style: ctx.body_style().italic(),
            content: render_inline(text),
        },
        LineKind::Bullet(bullet) => RenderUnit::ListItem {
            indent: usize::from(bullet.indent_level) * ctx.config.layout.indent_width,
            style: ctx.body_style(),
            content: render_inline(&bullet.text),
            marker: bullet.marker,
            numbered: bullet.is_numbered,
            indent_level: bullet.indent_level,
        },
        LineKind::Paragraph(text) => RenderUnit::Paragraph {
            style: ctx.body_style(),
            content: render_inline(text),
        },
    }
}
