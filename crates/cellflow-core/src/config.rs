//! Run configuration.
//!
//! A [`Config`] is built once by the front end and passed to
//! [`Sheet::load`](crate::Sheet::load); nothing in the core reads process
//! arguments or environment on its own.

use std::path::PathBuf;

use cellflow_engine::engine::DEFAULT_MAX_PASSES;

use crate::error::Result;
use crate::storage;

/// Where the cell definitions come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// A definitions file on disk.
    File(PathBuf),
    /// Definitions given inline, e.g. `"2, 18, =2*{0}"`.
    Literal(String),
}

impl Source {
    /// Read the raw definitions text.
    pub fn read(&self) -> Result<String> {
        match self {
            Source::File(path) => storage::read_definitions(path),
            Source::Literal(text) => Ok(text.clone()),
        }
    }

    /// Short human-readable description for log lines.
    pub fn describe(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Literal(_) => "<inline definitions>".to_string(),
        }
    }
}

/// How the front end drives the sheet after loading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Read commands until the user quits.
    #[default]
    Interactive,
    /// Print the converged state once and exit.
    Batch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub mode: Mode,
    /// Upper bound on propagation passes before giving up.
    pub max_passes: usize,
}

impl Config {
    pub fn new(source: Source) -> Self {
        Config {
            source,
            mode: Mode::default(),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// A cap of 0 is raised to 1 so that at least one pass always runs.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new(Source::Literal("1".to_string()));
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.max_passes, DEFAULT_MAX_PASSES);
    }

    #[test]
    fn test_builder() {
        let config = Config::new(Source::Literal("1".to_string()))
            .with_mode(Mode::Batch)
            .with_max_passes(0);
        assert_eq!(config.mode, Mode::Batch);
        assert_eq!(config.max_passes, 1);
    }

    #[test]
    fn test_literal_source_reads_itself() {
        let source = Source::Literal("1, =2".to_string());
        assert_eq!(source.read().unwrap(), "1, =2");
        assert_eq!(source.describe(), "<inline definitions>");
    }
}
