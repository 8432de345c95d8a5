// Rust guideline compliant 2026-10-19

//! Tix CLI Application
//!
//! Interactive console for the Tix in-memory ticket desk.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use termcolor::StandardStream;
use tix_cli::{color_choice, create_formatter, init_tracing, should_use_color, Shell};
use tix_core::{Config, LogLevel};

#[derive(Parser, Debug)]
#[command(
    name = "tix",
    version,
    about = "Tix: in-memory support ticket console",
    long_about = "Tix is a single-session ticket desk. Tickets are created, listed, updated and viewed from a numbered menu and live only until the program exits.",
    after_help = "Examples:\n  tix\n  tix --format json\n  tix --log-level debug --log-file tix.log\n"
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rendering for list and view output
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Write JSON log events to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    match cli.format {
        Some(OutputFormat::Text) => config.output_format = tix_core::OutputFormat::Text,
        Some(OutputFormat::Json) => config.output_format = tix_core::OutputFormat::Json,
        None => {}
    }
    if cli.no_color {
        config.color = false;
    }
    if let Some(level) = cli.log_level {
        config.log_level = LogLevel::parse(&level)?;
    }
    if cli.log_file.is_some() {
        config.log_file = cli.log_file;
    }

    let _guard = init_tracing(&config)?;
    tracing::debug!(?config, "starting tix");

    let use_color = config.color && should_use_color();
    let output = StandardStream::stdout(color_choice(use_color));
    let input = io::stdin().lock();

    let mut shell = Shell::new(input, output, create_formatter(config.output_format));
    shell.run()?;

    Ok(())
}
