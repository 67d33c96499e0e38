//! Sheet dimensions.

use crate::error::{Result, SheetError};
use serde::{Deserialize, Serialize};

/// Formula references name their column with a single letter.
pub const MAX_COLS: usize = 26;

/// Upper bound on `rows * cols`; the grid is allocated up front.
pub const MAX_CELLS: usize = 1 << 20;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 7;

/// Fixed grid size for a document. Missing fields fall back to the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    pub rows: usize,
    pub cols: usize,
}

impl SheetConfig {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let config = SheetConfig { rows, cols };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(SheetError::InvalidConfig(
                "rows must be at least 1".to_string(),
            ));
        }
        if self.cols == 0 || self.cols > MAX_COLS {
            return Err(SheetError::InvalidConfig(format!(
                "cols must be between 1 and {} (got {})",
                MAX_COLS, self.cols
            )));
        }
        if self.cell_count().is_none_or(|n| n > MAX_CELLS) {
            return Err(SheetError::InvalidConfig(format!(
                "{} rows x {} cols exceeds the {} cell limit",
                self.rows, self.cols, MAX_CELLS
            )));
        }
        Ok(())
    }

    /// Number of cells in the grid, or `None` if it does not fit in `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}
