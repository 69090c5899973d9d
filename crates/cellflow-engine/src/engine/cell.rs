//! Cell data structures for the reactive collection.
//!
//! This module provides the core data types for representing cells:
//! - [`Cell`] - Either a literal input or a computed formula with a cached value
//! - [`parse_cells`] - Build an ordered collection from a comma-separated definitions string
//!
//! The collection itself is a plain `Vec<Cell>`; a cell's position is its address.

/// Prefix that marks a definition as a formula.
pub const FORMULA_MARKER: char = '=';

/// A cell in the collection.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// A literal number, settable by the caller.
    Input { value: f64 },
    /// A formula (without the leading marker) and its last evaluated value.
    Computed {
        formula: String,
        /// Reserved for dependency-driven recompute; currently always empty.
        dependencies: Vec<usize>,
        value: f64,
    },
}

impl Cell {
    pub fn new_input(value: f64) -> Cell {
        Cell::Input { value }
    }

    pub fn new_computed(formula: &str) -> Cell {
        Cell::Computed {
            formula: formula.to_string(),
            dependencies: vec![],
            value: 0.0,
        }
    }

    /// Parse a single definition and create the matching cell.
    /// - Starts with '=' -> Computed (without the '='), value 0
    /// - Anything else -> Input, NaN when the text is not a number
    pub fn from_definition(definition: &str) -> Cell {
        let trimmed = definition.trim();

        if let Some(formula) = trimmed.strip_prefix(FORMULA_MARKER) {
            return Cell::new_computed(formula);
        }

        Cell::new_input(trimmed.parse::<f64>().unwrap_or(f64::NAN))
    }

    /// Current numeric value (literal for inputs, cached result for formulas).
    pub fn value(&self) -> f64 {
        match self {
            Cell::Input { value } | Cell::Computed { value, .. } => *value,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Cell::Input { .. })
    }

    pub fn formula(&self) -> Option<&str> {
        match self {
            Cell::Input { .. } => None,
            Cell::Computed { formula, .. } => Some(formula),
        }
    }

    /// Overwrite the value of an input cell.
    /// Returns false (and leaves the cell alone) for computed cells.
    pub fn set_input(&mut self, new_value: f64) -> bool {
        match self {
            Cell::Input { value } => {
                *value = new_value;
                true
            }
            Cell::Computed { .. } => false,
        }
    }

    /// Render the cell back into definition syntax.
    pub fn to_definition(&self) -> String {
        match self {
            Cell::Input { value } => value.to_string(),
            Cell::Computed { formula, .. } => format!("{}{}", FORMULA_MARKER, formula),
        }
    }
}

/// Split a comma-separated definitions string into cells, preserving order.
///
/// No count or reference validation happens here; bad references are
/// resolved to a fallback at evaluation time.
pub fn parse_cells(text: &str) -> Vec<Cell> {
    text.split(',').map(Cell::from_definition).collect()
}
