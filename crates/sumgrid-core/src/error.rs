//! Error types for Sumgrid core.

use sumgrid_engine::engine::CellRef;
use thiserror::Error;

/// Errors that can occur while editing, loading or saving a sheet.
///
/// Formula failures are not represented here: they are recovered inside the
/// document and surface only as the `ERROR` display string.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        cell: CellRef,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No file path set")]
    NoFilePath,
}

pub type Result<T> = std::result::Result<T, SheetError>;
