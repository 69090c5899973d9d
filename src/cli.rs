//! Command-line arguments and their mapping onto [`Config`].

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use cellflow_core::{Config, Mode, Source};
use cellflow_engine::engine::DEFAULT_MAX_PASSES;

#[derive(Parser, Debug)]
#[command(name = "cellflow")]
#[command(about = "Minimal reactive spreadsheet with positional {N} references")]
#[command(long_about = "Minimal reactive spreadsheet with positional {N} references.

Definitions are a comma-separated list. Each entry is either a number
(an input cell) or '=' followed by a formula. Formulas reference other
cells by zero-based position, e.g. {0}, and are evaluated strictly left
to right: 4+1*5 is 25.

EXAMPLES:
  cellflow sheet.cells
  cellflow --cells \"2, 18, =2*{0}, 9, ={2}+1*5\" --batch
  cellflow sheet.cells --batch --format json")]
#[command(version)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["file", "cells"])))]
pub struct Cli {
    /// Definitions file to load
    pub file: Option<PathBuf>,

    /// Inline definitions instead of a file
    #[arg(short, long)]
    pub cells: Option<String>,

    /// Print the converged values once and exit
    #[arg(short, long)]
    pub batch: bool,

    /// Output format for batch mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Give up recalculating after this many passes
    #[arg(long, env = "CELLFLOW_MAX_PASSES", default_value_t = DEFAULT_MAX_PASSES)]
    pub max_passes: usize,

    /// Log each propagation pass
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn to_config(&self) -> Config {
        let source = match (&self.file, &self.cells) {
            (_, Some(text)) => Source::Literal(text.clone()),
            (Some(path), None) => Source::File(path.clone()),
            // The required "source" group rules this out.
            (None, None) => Source::Literal(String::new()),
        };
        let mode = if self.batch {
            Mode::Batch
        } else {
            Mode::Interactive
        };
        Config::new(source)
            .with_mode(mode)
            .with_max_passes(self.max_passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_source() {
        let cli = Cli::try_parse_from(["cellflow", "sheet.cells"]).unwrap();
        let config = cli.to_config();
        assert_eq!(config.source, Source::File(PathBuf::from("sheet.cells")));
        assert_eq!(config.mode, Mode::Interactive);
    }

    #[test]
    fn test_inline_batch() {
        let cli = Cli::try_parse_from([
            "cellflow",
            "--cells",
            "1, ={0}",
            "--batch",
            "--max-passes",
            "7",
        ])
        .unwrap();
        let config = cli.to_config();
        assert_eq!(config.source, Source::Literal("1, ={0}".to_string()));
        assert_eq!(config.mode, Mode::Batch);
        assert_eq!(config.max_passes, 7);
    }

    #[test]
    fn test_source_is_required_and_exclusive() {
        assert!(Cli::try_parse_from(["cellflow"]).is_err());
        assert!(Cli::try_parse_from(["cellflow", "a.cells", "--cells", "1"]).is_err());
    }

    #[test]
    fn test_json_format() {
        let cli = Cli::try_parse_from(["cellflow", "-c", "1", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
