//! Error types for Cellflow core.

use std::path::PathBuf;

use thiserror::Error;

use cellflow_engine::engine::PropagationError;

/// Errors that can occur in the Cellflow application
#[derive(Error, Debug)]
pub enum CellflowError {
    #[error("Cannot read definitions from {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Definitions source is empty")]
    EmptySource,

    #[error("Cell index {index} is out of range ({len} cells)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cell {index} is a formula; only input cells can be changed")]
    NotAnInput { index: usize },

    #[error(transparent)]
    Propagation(#[from] PropagationError),
}

pub type Result<T> = std::result::Result<T, CellflowError>;
