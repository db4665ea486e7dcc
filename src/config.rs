use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::style::Color;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub typography: TypographyConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub text_color: Color,
    pub code_color: Color,
    pub quote_accent_color: Color,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            text_color: Color::default(),
            code_color: Color::rgb(0x24, 0x29, 0x2f),
            quote_accent_color: Color::rgb(0x82, 0x50, 0xdf),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypographyConfig {
    pub body_size: f32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub h4_size: f32,
    pub h5_size: f32,
    pub h6_size: f32,
    pub math_size: f32,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            body_size: 14.0,
            h1_size: 24.0,
            h2_size: 21.0,
            h3_size: 18.0,
            h4_size: 16.0,
            h5_size: 15.0,
            h6_size: 14.0,
            math_size: 16.0,
        }
    }
}

impl TypographyConfig {
    /// Font size for a header tier. Levels outside 1-6 get the body size.
    pub fn size_for_heading(&self, level: u8) -> f32 {
        match level {
            1 => self.h1_size,
            2 => self.h2_size,
            3 => self.h3_size,
            4 => self.h4_size,
            5 => self.h5_size,
            6 => self.h6_size,
            _ => self.body_size,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Columns of padding per list indent level.
    pub indent_width: usize,
    pub table_min_column_width: usize,
    pub spacer_height: f32,
    /// Line width used when centering math panels in plain-text output.
    pub text_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            table_min_column_width: 3,
            spacer_height: 6.0,
            text_width: 72,
        }
    }
}

impl Config {
    /// The configuration bundled with the crate (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                Self::compiled_default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "falling back to default config");
                Self::compiled_default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_default_matches_bundled_file() {
        let config = Config::compiled_default();
        assert_eq!(config.theme.text_color, Color::rgb(0x1f, 0x23, 0x28));
        assert_eq!(config.typography.h1_size, 24.0);
        assert_eq!(config.layout.indent_width, 2);
        assert_eq!(config.layout.text_width, 72);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = Config::from_toml_str("[layout]\nindent_width = 4\n").unwrap();
        assert_eq!(config.layout.indent_width, 4);
        assert_eq!(config.layout.table_min_column_width, 3);
        assert_eq!(config.typography.body_size, 14.0);
    }

    #[test]
    fn heading_sizes_by_level() {
        let typography = TypographyConfig::default();
        assert_eq!(typography.size_for_heading(1), 24.0);
        assert_eq!(typography.size_for_heading(6), 14.0);
        assert_eq!(typography.size_for_heading(9), typography.body_size);
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err = Config::from_toml_str("[theme]\ntext_color = \"red\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = Config::load(Path::new("/nonexistent/chatmark.toml"));
        assert_eq!(config.layout.table_min_column_width, 3);
    }
}
