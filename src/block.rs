use serde::Serialize;

use crate::style::{Color, TextStyle};

/// A contiguous run of prose or fenced code, in message order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub is_code: bool,
    pub language: Option<String>,
    pub content: String,
}

/// Structural unit classified out of a prose segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Line(String),
    /// Raw row text, at least two rows.
    Table(Vec<String>),
    /// Trimmed lines between a display-math delimiter pair.
    MathBlock(Vec<String>),
}

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(Vec<Span>),
    Italic(Vec<Span>),
    Code(String),
    Link { url: String, content: Vec<Span> },
}

impl Span {
    /// The visible text of this span with all formatting removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Span::Text(text) | Span::Code(text) => out.push_str(text),
            Span::Bold(inner) | Span::Italic(inner) | Span::Link { content: inner, .. } => {
                for span in inner {
                    span.push_plain_text(out);
                }
            }
        }
    }
}

pub fn spans_plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::plain_text).collect()
}

/// A recognized bullet or numbered list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletContent {
    pub marker: String,
    pub text: String,
    pub is_numbered: bool,
    /// 0..=3, from the leading spaces of the untrimmed line.
    pub indent_level: u8,
}

/// A table cell after inline formatting.
pub type Cell = Vec<Span>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableGrid {
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
    /// Display width of each column, never below the configured minimum.
    pub column_widths: Vec<usize>,
    pub header_style: TextStyle,
    pub body_style: TextStyle,
}

impl TableGrid {
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }
}

/// Toolkit-neutral output element handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderUnit {
    Spacer {
        height: f32,
    },
    Rule,
    Heading {
        level: u8,
        style: TextStyle,
        content: Vec<Span>,
    },
    Quote {
        accent: Color,
        style: TextStyle,
        content: Vec<Span>,
    },
    ListItem {
        marker: String,
        numbered: bool,
        indent_level: u8,
        /// Left padding in columns.
        indent: usize,
        style: TextStyle,
        content: Vec<Span>,
    },
    Paragraph {
        style: TextStyle,
        content: Vec<Span>,
    },
    Table(TableGrid),
    MathPanel {
        style: TextStyle,
        text: String,
    },
    CodeBlock {
        language: Option<String>,
        content: String,
        color: Color,
    },
}
