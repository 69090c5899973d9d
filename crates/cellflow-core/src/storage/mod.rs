//! Definitions file loading.

mod parser;

pub use parser::{parse_definitions, read_definitions};
