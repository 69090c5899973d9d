//! cellflow-core - UI-agnostic sheet model, configuration and storage.

pub mod config;
pub mod error;
pub mod sheet;
pub mod storage;

pub use config::{Config, Mode, Source};
pub use error::{CellflowError, Result};
pub use sheet::{CellValue, Sheet};

pub use cellflow_engine::engine::{Cell, Diagnostic};
