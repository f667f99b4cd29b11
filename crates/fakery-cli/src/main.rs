//! fakery CLI entry point.
//!
//! Prints fake values for one formatter, or a table documenting every
//! formatter when none is given:
//! - `fakery name -r 3` - three names
//! - `fakery words nb=5 -l de_DE --json` - five words as JSON
//! - `fakery` - every formatter with an example value

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, ValueEnum};
use commands::{run_generate, GenerateArgs};
use tracing_subscriber::EnvFilter;

/// Localized fake data generator.
#[derive(Debug, Parser)]
#[command(name = "fakery")]
#[command(about = "Generate localized fake data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// Log provider registration and locale fallback to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Route library `tracing` events to stderr; `RUST_LOG` wins over `-v`.
fn setup_logging(verbose: bool) {
    let default = if verbose { "fakery=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    match run_generate(cli.generate) {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
