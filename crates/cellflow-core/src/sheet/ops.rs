use cellflow_engine::engine::update_cells_bounded;
use tracing::warn;

use super::Sheet;
use crate::error::{CellflowError, Result};

impl Sheet {
    /// Recompute every formula to a fixed point. Returns the number of passes.
    ///
    /// Diagnostics from the converged state replace the previous ones and are
    /// logged once each.
    pub fn recalculate(&mut self) -> Result<usize> {
        match update_cells_bounded(&mut self.cells, self.max_passes) {
            Ok(outcome) => {
                for diagnostic in &outcome.diagnostics {
                    warn!("{}", diagnostic);
                }
                self.diagnostics = outcome.diagnostics;
                Ok(outcome.passes)
            }
            Err(e) => {
                warn!("{}", e);
                self.diagnostics.clear();
                Err(e.into())
            }
        }
    }

    /// Change an input cell and recalculate.
    pub fn set_input(&mut self, index: usize, value: f64) -> Result<usize> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(CellflowError::IndexOutOfRange { index, len })?;

        if !cell.set_input(value) {
            return Err(CellflowError::NotAnInput { index });
        }

        self.recalculate()
    }
}
