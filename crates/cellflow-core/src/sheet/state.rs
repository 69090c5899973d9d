use cellflow_engine::engine::{Cell, DEFAULT_MAX_PASSES, Diagnostic};
use serde::Serialize;

/// One `(index, value)` pair as seen by display collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CellValue {
    pub index: usize,
    pub value: f64,
}

/// UI-agnostic owner of the cell collection.
///
/// All mutation goes through `&mut self`, so only one recomputation can be in
/// flight at a time.
#[derive(Clone, Debug)]
pub struct Sheet {
    /// Cells in definition order; position is the address.
    pub(crate) cells: Vec<Cell>,
    /// Pass cap handed to the propagator
    pub(crate) max_passes: usize,
    /// Diagnostics from the last converged recalculation
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl Sheet {
    /// Wrap an already-parsed collection. Values are not recomputed until
    /// [`Sheet::recalculate`] is called.
    pub fn new(cells: Vec<Cell>) -> Self {
        Sheet {
            cells,
            max_passes: DEFAULT_MAX_PASSES,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// `(index, value)` pairs in sequence order.
    pub fn values(&self) -> impl Iterator<Item = CellValue> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| CellValue {
                index,
                value: cell.value(),
            })
    }

    pub fn snapshot(&self) -> Vec<CellValue> {
        self.values().collect()
    }
}
