//! Error types for the interactive shell

use thiserror::Error;

/// Problems with a single line typed into the shell. None of these end the
/// session.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (type 'help')")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid cell index: {0}")]
    InvalidIndex(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}
