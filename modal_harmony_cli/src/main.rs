// Modal Harmony CLI entry point.
//
// Prints the borrowed-chord and secondary-chord tables, or formats a single
// numeral.
//
// Usage:
//   numerals [--config PATH] [--format text|json] [--verbose] [COMMAND]
//
// Commands:
//   all                        Every table listed in the config (default)
//   borrowed [--signature N]   Modes of the circle of fifths, optionally only
//                              those with N sharps (N > 0) or flats (N < 0)
//   secondary                  Secondary chords of each degree
//   numeral DEGREE ACC QUALITY One label, e.g. `numeral 4 1 diminished`
//
// Log level comes from RUST_LOG (default warn; --verbose means debug).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use modal_harmony::{Quality, borrowed_chords_with_signature, to_roman_numeral};
use modal_harmony_cli::{OutputFormat, RenderConfig, TableKind, renderer_for, tables_for};
use std::path::PathBuf;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "numerals", about = "Roman-numeral chord tables for the diatonic modes")]
struct CliArgs {
    /// JSON render config.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the config's output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    All,
    Borrowed {
        #[arg(long, allow_negative_numbers = true)]
        signature: Option<i32>,
    },
    Secondary,
    #[command(allow_negative_numbers = true)]
    Numeral {
        degree: i32,
        accidental: i32,
        quality: Quality,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .try_init()
        .context("failed to install log subscriber")
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose)?;

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(format) = args.format {
        config.format = format;
    }
    debug!(?config, "render config");

    let tables = match args.command.unwrap_or(Command::All) {
        Command::Numeral {
            degree,
            accidental,
            quality,
        } => {
            println!("{}", to_roman_numeral(degree, accidental, quality)?);
            return Ok(());
        }
        Command::All => tables_for(&config.tables)?,
        Command::Borrowed { signature: None } => tables_for(&[TableKind::Borrowed])?,
        Command::Borrowed { signature: Some(n) } => vec![borrowed_chords_with_signature(n)?],
        Command::Secondary => tables_for(&[TableKind::Secondary])?,
    };

    let output = renderer_for(&config)
        .render(&tables)
        .context("failed to render tables")?;
    print!("{output}");
    Ok(())
}
