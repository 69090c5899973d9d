//! Fixed-point recomputation of computed cells.
//!
//! A pass re-evaluates every computed cell in sequence order against the
//! collection as it currently stands, so a formula may see values written
//! earlier in the same pass. Passes repeat until one changes nothing.
//!
//! Cyclic formulas that never settle would loop forever; the pass count is
//! therefore capped and running out of passes is reported as an error.

use thiserror::Error;
use tracing::debug;

use super::cell::Cell;
use super::diagnostic::Diagnostic;
use super::resolve::evaluate_formula_with_diagnostics;

/// Pass cap used by [`update_cells`].
pub const DEFAULT_MAX_PASSES: usize = 1000;

/// Outcome of a converged propagation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Propagation {
    /// Passes run, including the final pass that changed nothing.
    pub passes: usize,
    /// Diagnostics raised by the final pass, i.e. against the converged state.
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropagationError {
    #[error("cells did not converge after {passes} passes")]
    DidNotConverge { passes: usize },
}

/// Recompute until convergence using [`DEFAULT_MAX_PASSES`].
pub fn update_cells(cells: &mut [Cell]) -> Result<Propagation, PropagationError> {
    update_cells_bounded(cells, DEFAULT_MAX_PASSES)
}

/// Recompute until a pass changes nothing, giving up after `max_passes`.
///
/// On error the collection holds whatever the last pass wrote.
pub fn update_cells_bounded(
    cells: &mut [Cell],
    max_passes: usize,
) -> Result<Propagation, PropagationError> {
    for pass in 1..=max_passes {
        let mut diagnostics = Vec::new();
        let changed = run_pass(cells, &mut diagnostics);
        debug!(pass, changed, "propagation pass");

        if changed == 0 {
            return Ok(Propagation {
                passes: pass,
                diagnostics,
            });
        }
    }

    Err(PropagationError::DidNotConverge { passes: max_passes })
}

/// One sweep over the collection. Returns the number of cells whose cached
/// value changed.
fn run_pass(cells: &mut [Cell], diagnostics: &mut Vec<Diagnostic>) -> usize {
    let mut changed = 0;

    for index in 0..cells.len() {
        let Some(formula) = cells[index].formula() else {
            continue;
        };
        let formula = formula.to_string();
        let next = evaluate_formula_with_diagnostics(&formula, cells, diagnostics);

        if let Cell::Computed { value, .. } = &mut cells[index] {
            if !same_value(*value, next) {
                *value = next;
                changed += 1;
            }
        }
    }

    changed
}

/// Exact comparison, except that NaN counts as equal to NaN so that cells
/// degraded by a malformed literal do not keep the loop alive.
fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parse_cells;

    fn values(cells: &[Cell]) -> Vec<f64> {
        cells.iter().map(Cell::value).collect()
    }

    #[test]
    fn test_end_to_end_left_to_right() {
        let mut cells = parse_cells("2, 18, =2*{0}, 9, ={2}+1*5");
        let outcome = update_cells(&mut cells).unwrap();
        assert_eq!(values(&cells), vec![2.0, 18.0, 4.0, 9.0, 25.0]);
        assert_eq!(outcome.passes, 2);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_idempotent_after_convergence() {
        let mut cells = parse_cells("2, 18, =2*{0}, 9, ={2}+1*5");
        update_cells(&mut cells).unwrap();
        let before = cells.clone();

        let outcome = update_cells(&mut cells).unwrap();
        assert_eq!(outcome.passes, 1);
        assert_eq!(cells, before);
    }

    #[test]
    fn test_forward_reference_needs_extra_pass() {
        // Cell 0 reads cell 1 before cell 1 has been computed in the first pass.
        let mut cells = parse_cells("={1}+1, ={2}*2, 3");
        let outcome = update_cells(&mut cells).unwrap();
        assert_eq!(values(&cells), vec![7.0, 6.0, 3.0]);
        assert_eq!(outcome.passes, 3);
    }

    #[test]
    fn test_input_change_reaches_transitive_dependents_only() {
        let mut cells = parse_cells("1, 10, ={0}+1, ={2}*2, ={1}+0");
        update_cells(&mut cells).unwrap();
        assert_eq!(values(&cells), vec![1.0, 10.0, 2.0, 4.0, 10.0]);

        assert!(cells[0].set_input(5.0));
        update_cells(&mut cells).unwrap();
        assert_eq!(values(&cells), vec![5.0, 10.0, 6.0, 12.0, 10.0]);
    }

    #[test]
    fn test_convergent_self_reference() {
        let mut cells = parse_cells("={0}/2+1");
        let outcome = update_cells(&mut cells).unwrap();
        assert_eq!(cells[0].value(), 2.0);
        assert!(outcome.passes > 2);
    }

    #[test]
    fn test_oscillating_cycle_does_not_converge() {
        let mut cells = parse_cells("=1-{0}");
        let err = update_cells_bounded(&mut cells, 25).unwrap_err();
        assert_eq!(err, PropagationError::DidNotConverge { passes: 25 });
    }

    #[test]
    fn test_nan_input_still_converges() {
        let mut cells = parse_cells("oops, ={0}+1");
        let outcome = update_cells(&mut cells).unwrap();
        assert!(cells[1].value().is_nan());
        assert_eq!(outcome.passes, 2);
    }

    #[test]
    fn test_diagnostics_come_from_final_pass() {
        let mut cells = parse_cells("1, ={7}+{0}");
        let outcome = update_cells(&mut cells).unwrap();
        assert_eq!(cells[1].value(), 1.0);
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::ReferenceOutOfRange { index: 7, len: 2 }]
        );
    }

    #[test]
    fn test_no_computed_cells() {
        let mut cells = parse_cells("1, 2");
        assert_eq!(update_cells(&mut cells).unwrap().passes, 1);
    }
}
