use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use chatmark::{Color, Config};

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(about = "Format a chat message into styled render units")]
struct Cli {
    /// Input message file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Display color for non-code text, as #rrggbb (defaults to the theme's text color)
    #[arg(short, long)]
    color: Option<String>,

    /// TOML config file overriding the bundled defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log pipeline fallbacks to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Typst,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::try_load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::compiled_default(),
    };

    let color = match &cli.color {
        Some(value) => value
            .parse::<Color>()
            .with_context(|| format!("parsing --color {value}"))?,
        None => config.theme.text_color,
    };

    let message = read_input(cli.input.as_ref())?;
    let units = chatmark::format_message_with_config(&message, color, &config);
    tracing::debug!(units = units.len(), "formatted message");

    let output = match cli.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&units).context("serializing units")?;
            json.push('\n');
            json
        }
        OutputFormat::Typst => chatmark::to_typst(&units),
        OutputFormat::Text => chatmark::to_plain_text(&units, &config),
    };
    print!("{output}");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut message = String::new();
            io::stdin()
                .read_to_string(&mut message)
                .context("reading stdin")?;
            Ok(message)
        }
    }
}
