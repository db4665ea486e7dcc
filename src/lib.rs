mod block;
mod classify;
mod config;
mod inline;
mod latex;
mod line;
mod plain;
mod render;
mod segment;
mod style;
mod table;
mod typst;

pub use block::{Block, BulletContent, Cell, RenderUnit, Segment, Span, TableGrid};
pub use classify::classify;
pub use config::{Config, ConfigError, LayoutConfig, ThemeConfig, TypographyConfig};
pub use inline::render_inline;
pub use latex::{needs_transliteration, transliterate};
pub use line::parse_bullet;
pub use render::RenderContext;
pub use segment::segment;
pub use style::{Color, ColorParseError, FontWeight, TextStyle};

/// Format a chat message into render units using the bundled config.
pub fn format_message(text: &str, color: Color) -> Vec<RenderUnit> {
    format_message_with_config(text, color, &Config::compiled_default())
}

/// Format a chat message into render units with a custom config.
pub fn format_message_with_config(text: &str, color: Color, config: &Config) -> Vec<RenderUnit> {
    render::render_message(text, &RenderContext::new(config, color))
}

/// Convert render units to Typst markup.
pub fn to_typst(units: &[RenderUnit]) -> String {
    typst::units_to_typst(units)
}

/// Convert render units to a monospace plain-text preview.
pub fn to_plain_text(units: &[RenderUnit], config: &Config) -> String {
    plain::units_to_plain_text(units, &config.layout)
}
