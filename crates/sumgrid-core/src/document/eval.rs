use super::Document;
use crate::error::Result;
use sumgrid_engine::engine::{Cell, CellRef, FormulaError, evaluate};

impl Document {
    /// Snapshot of the text currently displayed for a cell.
    ///
    /// Numbers show the text they were entered with, formulas their last
    /// computed result, text cells their text and empty cells an empty string.
    pub fn get_display_value(&self, cell_ref: &CellRef) -> Result<String> {
        self.check_bounds(cell_ref)?;
        Ok(self
            .grid
            .get(cell_ref)
            .map(Cell::display_text)
            .unwrap_or_default())
    }

    /// Evaluate a formula against the current grid without storing it.
    pub fn evaluate_formula(&self, formula: &str) -> std::result::Result<f64, FormulaError> {
        evaluate(formula, &self.grid)
    }
}
