use crate::block::{Block, RenderUnit, Segment};
use crate::classify::classify;
use crate::config::Config;
use crate::latex::transliterate;
use crate::line::render_line;
use crate::segment::segment;
use crate::style::{Color, FontWeight, TextStyle};
use crate::table::render_table;

/// Everything a renderer needs besides the text: the config and the
/// caller's display color for non-code text.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub color: Color,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, color: Color) -> Self {
        Self { config, color }
    }

    pub fn text_style(&self, size: f32) -> TextStyle {
        TextStyle::body(self.color, size)
    }

    pub fn body_style(&self) -> TextStyle {
        self.text_style(self.config.typography.body_size)
    }
}

/// Run the whole pipeline: segments, then blocks, then render units.
pub fn render_message(text: &str, ctx: &RenderContext) -> Vec<RenderUnit> {
    let mut units = Vec::new();
    for segment in segment(text) {
        render_segment(segment, ctx, &mut units);
    }
    units
}

fn render_segment(segment: Segment, ctx: &RenderContext, units: &mut Vec<RenderUnit>) {
    if segment.is_code {
        units.push(RenderUnit::CodeBlock {
            language: segment.language,
            content: segment.content,
            color: ctx.config.theme.code_color,
        });
        return;
    }

    for block in classify(&segment.content) {
        match block {
            Block::Line(line) => units.push(render_line(&line, ctx)),
            Block::Table(rows) => {
                if let Some(grid) = render_table(&rows, ctx) {
                    units.push(RenderUnit::Table(grid));
                }
            }
            Block::MathBlock(lines) => units.push(render_math(&lines, ctx)),
        }
    }
}

/// Join display-math lines with single spaces into one centered panel.
pub fn render_math(lines: &[String], ctx: &RenderContext) -> RenderUnit {
    let joined = lines.join(" ");
    RenderUnit::MathPanel {
        style: ctx
            .text_style(ctx.config.typography.math_size)
            .weight(FontWeight::Medium)
            .serif(),
        text: transliterate(&joined).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Span;

    fn render(text: &str) -> Vec<RenderUnit> {
        let config = Config::compiled_default();
        render_message(text, &RenderContext::new(&config, Color::default()))
    }

    fn paragraph_text(unit: &RenderUnit) -> Option<String> {
        match unit {
            RenderUnit::Paragraph { content, .. } => {
                Some(crate::block::spans_plain_text(content))
            }
            _ => None,
        }
    }

    #[test]
    fn code_segment_becomes_code_block() {
        let config = Config::compiled_default();
        let units = render("```swift\nlet x = 1\n```");
        assert_eq!(
            units,
            vec![RenderUnit::CodeBlock {
                language: Some("swift".to_string()),
                content: "let x = 1".to_string(),
                color: config.theme.code_color,
            }]
        );
    }

    #[test]
    fn math_panel_is_transliterated() {
        let units = render("Energy:\n$$\nE = m c^{2}\n\\text{(rest)}\n$$");
        assert_eq!(units.len(), 2);
        match &units[1] {
            RenderUnit::MathPanel { style, text } => {
                assert_eq!(text, "E = m c² (rest)");
                assert!(style.serif);
                assert_eq!(style.weight, FontWeight::Medium);
            }
            other => panic!("expected math panel, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_math_renders_paragraphs() {
        let units = render("[\nE=mc^2");
        assert_eq!(units.len(), 1);
        assert_eq!(paragraph_text(&units[0]).as_deref(), Some("E=mc²"));
    }

    #[test]
    fn table_of_separators_renders_nothing() {
        let units = render("before\n|---|\n|:-:|\nafter");
        let texts: Vec<_> = units.iter().filter_map(paragraph_text).collect();
        assert_eq!(units.len(), 2);
        assert_eq!(texts, vec!["before", "after"]);
    }

    #[test]
    fn mixed_message_keeps_order() {
        let text = "# Plan\n\n1. Install\n   - check `PATH`\n\n```sh\nmake\n```\n| k | v |\n| a | 1 |\n> done";
        let units = render(text);
        let kinds: Vec<&str> = units
            .iter()
            .map(|unit| match unit {
                RenderUnit::Spacer { .. } => "spacer",
                RenderUnit::Rule => "rule",
                RenderUnit::Heading { .. } => "heading",
                RenderUnit::Quote { .. } => "quote",
                RenderUnit::ListItem { .. } => "item",
                RenderUnit::Paragraph { .. } => "paragraph",
                RenderUnit::Table(_) => "table",
                RenderUnit::MathPanel { .. } => "math",
                RenderUnit::CodeBlock { .. } => "code",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["heading", "spacer", "item", "item", "code", "table", "quote"]
        );
        match &units[3] {
            RenderUnit::ListItem { indent_level, content, .. } => {
                assert_eq!(*indent_level, 1);
                assert_eq!(
                    content,
                    &vec![
                        Span::Text("check ".to_string()),
                        Span::Code("PATH".to_string())
                    ]
                );
            }
            other => panic!("expected list item, got {other:?}"),
        }
    }

    #[test]
    fn reference_definition_line_is_not_blank() {
        let units = render("[1]: https://example.com");
        assert_eq!(
            paragraph_text(&units[0]).as_deref(),
            Some("[1]: https://example.com")
        );
    }

    #[test]
    fn color_applies_to_prose() {
        let config = Config::compiled_default();
        let color = Color::rgb(0xaa, 0xbb, 0xcc);
        let units = render_message("hello", &RenderContext::new(&config, color));
        match &units[0] {
            RenderUnit::Paragraph { style, .. } => assert_eq!(style.color, color),
            other => panic!("expected paragraph, got {other:?}"),
        }
    }
}
