use super::Document;
use crate::display::{DisplaySink, ERROR_DISPLAY};
use crate::error::Result;
use sumgrid_engine::engine::{
    Cell, CellRef, evaluate, format_number, is_valid_formula, is_valid_number,
};

impl Document {
    /// Set cell contents from raw user input.
    ///
    /// The input is classified as a number, a formula or plain text and stored.
    /// Every other formula cell is then re-evaluated once, and finally `sink`
    /// receives the edited cell's new display text: the number as typed, the
    /// formatted formula result, `ERROR`, or the text itself.
    ///
    /// Empty input is ignored.
    pub fn set_cell_value(
        &mut self,
        cell_ref: CellRef,
        input: &str,
        sink: &mut impl DisplaySink,
    ) -> Result<()> {
        self.check_bounds(&cell_ref)?;
        if input.is_empty() {
            return Ok(());
        }

        let shown = if is_valid_number(input) {
            let text = input.trim();
            let value = text.parse::<f64>().unwrap_or(0.0);
            self.grid.replace(&cell_ref, Cell::new_number(value, text));
            text.to_string()
        } else {
            // Stored as text first: a formula referencing its own cell reads 0 here.
            self.grid.replace(&cell_ref, Cell::new_text(input));
            if is_valid_formula(input) {
                match evaluate(input, &self.grid) {
                    Ok(value) => {
                        self.grid.replace(&cell_ref, Cell::new_formula(input, value));
                        format_number(value)
                    }
                    Err(e) => {
                        tracing::debug!(cell = %cell_ref, error = %e, "formula rejected");
                        ERROR_DISPLAY.to_string()
                    }
                }
            } else {
                input.to_string()
            }
        };

        self.modified = true;
        tracing::debug!(cell = %cell_ref, input, shown = %shown, "cell set");

        self.recompute(&cell_ref, sink);
        sink.cell_display_changed(&cell_ref, &shown);
        Ok(())
    }

    /// Clear the specified cell and report an empty display string.
    ///
    /// Clearing an empty cell does nothing. Formulas that referenced the cell
    /// keep their values until the next edit triggers a sweep.
    pub fn clear_cell(&mut self, cell_ref: &CellRef, sink: &mut impl DisplaySink) -> Result<()> {
        self.check_bounds(cell_ref)?;
        if self.grid.get(cell_ref).is_none_or(Cell::is_empty) {
            return Ok(());
        }

        self.grid.replace(cell_ref, Cell::new_empty());
        self.modified = true;
        tracing::debug!(cell = %cell_ref, "cell cleared");
        sink.cell_display_changed(cell_ref, "");
        Ok(())
    }
}
