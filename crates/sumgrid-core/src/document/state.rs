use crate::config::SheetConfig;
use crate::error::{Result, SheetError};
use std::path::PathBuf;
use sumgrid_engine::engine::{CellRef, Grid};

/// UI-agnostic document state for the spreadsheet.
pub struct Document {
    /// Every cell of the sheet; owns all cell text.
    pub grid: Grid,
    /// Dimensions the grid was built with
    pub config: SheetConfig,
    /// Current file path
    pub file_path: Option<PathBuf>,
    /// Whether the grid has been modified
    pub modified: bool,
}

impl Document {
    /// Create an empty document.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new(config: SheetConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols).ok_or_else(|| {
            SheetError::InvalidConfig(format!(
                "{} rows x {} cols does not fit in memory",
                config.rows, config.cols
            ))
        })?;
        Ok(Document {
            grid,
            config,
            file_path: None,
            modified: false,
        })
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    pub(crate) fn check_bounds(&self, cell_ref: &CellRef) -> Result<()> {
        if cell_ref.in_bounds(self.rows(), self.cols()) {
            Ok(())
        } else {
            Err(SheetError::OutOfBounds {
                cell: *cell_ref,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        let config = SheetConfig::default();
        Document {
            grid: Grid::new(config.rows, config.cols).expect("default dimensions are small"),
            config,
            file_path: None,
            modified: false,
        }
    }
}
