//! Reactive cell engine API.
//!
//! This module provides the computation core of the spreadsheet:
//!
//! - [`Cell`], [`parse_cells`] - Cell variants and the definitions parser
//! - [`evaluate_expression`] - Flat left-to-right arithmetic evaluation
//! - [`evaluate_formula`] - `{N}` reference substitution over a cell slice
//! - [`update_cells`] - Whole-collection recomputation to a fixed point
//! - [`Diagnostic`] - Non-fatal notices raised during evaluation

mod cell;
mod diagnostic;
mod eval;
mod propagate;
mod resolve;

pub use cell::{Cell, FORMULA_MARKER, parse_cells};
pub use diagnostic::Diagnostic;
pub use eval::{evaluate_expression, evaluate_expression_with_diagnostics};
pub use propagate::{
    DEFAULT_MAX_PASSES, Propagation, PropagationError, update_cells, update_cells_bounded,
};
pub use resolve::{evaluate_formula, evaluate_formula_with_diagnostics, extract_references};
