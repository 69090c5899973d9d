//! Formula reference resolution.
//!
//! Before a formula can be evaluated, every `{N}` reference is replaced by the
//! current value of cell `N` written out as decimal text. The substituted
//! string is then handed to the expression evaluator.
//!
//! References past the end of the collection resolve to `0` and raise a
//! [`Diagnostic::ReferenceOutOfRange`].

use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::trace;

use super::cell::Cell;
use super::diagnostic::Diagnostic;
use super::eval::evaluate_expression_with_diagnostics;

/// Evaluate a formula against the current collection, discarding diagnostics.
pub fn evaluate_formula(formula: &str, cells: &[Cell]) -> f64 {
    evaluate_formula_with_diagnostics(formula, cells, &mut Vec::new())
}

/// Evaluate a formula against the current collection, collecting diagnostics
/// from both reference resolution and expression evaluation.
pub fn evaluate_formula_with_diagnostics(
    formula: &str,
    cells: &[Cell],
    diagnostics: &mut Vec<Diagnostic>,
) -> f64 {
    let substituted = substitute_references(formula, cells, diagnostics);
    evaluate_expression_with_diagnostics(&substituted, diagnostics)
}

/// Extract every referenced index from a formula, in order of appearance.
/// Duplicates are kept.
pub fn extract_references(formula: &str) -> Vec<usize> {
    reference_re()
        .captures_iter(formula)
        .map(|caps| reference_index(&caps))
        .collect()
}

fn substitute_references(formula: &str, cells: &[Cell], diagnostics: &mut Vec<Diagnostic>) -> String {
    reference_re()
        .replace_all(formula, |caps: &Captures| {
            let index = reference_index(caps);
            match cells.get(index) {
                // f64 Display is the shortest text that parses back to the same value.
                // Adding 0.0 turns -0.0 into 0.0 so it is not read as a leading minus.
                Some(cell) => (cell.value() + 0.0).to_string(),
                None => {
                    trace!(index, len = cells.len(), "reference out of range");
                    diagnostics.push(Diagnostic::ReferenceOutOfRange {
                        index,
                        len: cells.len(),
                    });
                    "0".to_string()
                }
            }
        })
        .into_owned()
}

/// Indices too large for usize saturate, which keeps them out of range.
fn reference_index(caps: &Captures) -> usize {
    caps[1].parse::<usize>().unwrap_or(usize::MAX)
}

fn reference_re() -> &'static Regex {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    REFERENCE_RE.get_or_init(|| Regex::new(r"\{(\d+)\}").expect("reference regex must compile"))
}
