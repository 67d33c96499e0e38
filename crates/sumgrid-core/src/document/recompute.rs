use super::Document;
use crate::display::{DisplaySink, ERROR_DISPLAY};
use sumgrid_engine::engine::{CellRef, CellType, FormulaError, evaluate, format_number};

impl Document {
    /// Re-evaluate every formula cell except `except`, once, in row-major order.
    ///
    /// All formulas see the grid as it was when the sweep started: a formula
    /// whose dependency is itself recomputed in this pass reads the dependency's
    /// previous value and catches up on the next sweep. There is no cycle
    /// detection; a cycle just lags by one edit per step.
    ///
    /// Successful results replace the cached value and are reported formatted.
    /// Failures report `ERROR` and leave the cell untouched.
    pub fn recompute(&mut self, except: &CellRef, sink: &mut impl DisplaySink) {
        let results: Vec<(CellRef, Result<f64, FormulaError>)> = self
            .grid
            .iter()
            .filter(|(cell_ref, _)| cell_ref != except)
            .filter_map(|(cell_ref, cell)| match &cell.contents {
                CellType::Formula { source, .. } => {
                    Some((cell_ref, evaluate(source, &self.grid)))
                }
                _ => None,
            })
            .collect();

        let mut failed = 0usize;
        for (cell_ref, result) in &results {
            match result {
                Ok(new_value) => {
                    if let Some(cell) = self.grid.get_mut(cell_ref)
                        && let CellType::Formula { value, .. } = &mut cell.contents
                    {
                        *value = *new_value;
                    }
                    tracing::trace!(cell = %cell_ref, value = new_value, "recomputed");
                    sink.cell_display_changed(cell_ref, &format_number(*new_value));
                }
                Err(e) => {
                    failed += 1;
                    tracing::trace!(cell = %cell_ref, error = %e, "recompute failed");
                    sink.cell_display_changed(cell_ref, ERROR_DISPLAY);
                }
            }
        }

        tracing::debug!(
            edited = %except,
            evaluated = results.len(),
            failed,
            "recompute sweep finished"
        );
    }
}
