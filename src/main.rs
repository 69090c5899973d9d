//! Cellflow - A minimal reactive spreadsheet

mod cli;
mod error;
mod format;
mod shell;

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cellflow_core::{Mode, Sheet};
use cli::{Cli, OutputFormat};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_batch(sheet: &Sheet, format: OutputFormat) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            for cell in sheet.values() {
                writeln!(out, "{}", format::format_cell(&cell))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &sheet.snapshot())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.to_config();
    debug!(?config, "starting");
    let mut sheet = Sheet::load(&config)
        .with_context(|| format!("failed to load {}", config.source.describe()))?;

    match config.mode {
        Mode::Batch => print_batch(&sheet, cli.format),
        Mode::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            shell::run(&mut sheet, stdin.lock(), &mut stdout.lock())?;
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
