//! Spreadsheet engine API.
//!
//! This module provides the computation core for the spreadsheet:
//!
//! - [`Cell`], [`CellType`], [`Grid`] - Data structures for cell storage
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`is_valid_number`], [`is_valid_formula`] - Input classification
//! - [`evaluate`] - Sum a formula's operands against a [`ValueLookup`]
//! - [`NumericStack`] - Operand scratch space used by the evaluator
//! - [`format_number`] - Canonical rendering of formula results

mod cell;
mod cell_ref;
mod eval;
mod format;
mod stack;
mod syntax;

pub use cell::{Cell, CellType, Grid};
pub use cell_ref::CellRef;
pub use eval::{FormulaError, ValueLookup, evaluate};
pub use format::format_number;
pub use stack::{EmptyStackError, NumericStack};
pub use syntax::{FORMULA_MARKER, is_valid_formula, is_valid_number};
