//! Cell data structures for the spreadsheet grid.
//!
//! - [`CellType`] - The typed content of a cell (empty, number, text, or formula)
//! - [`Cell`] - A single grid slot owning its content
//! - [`Grid`] - Fixed-size, row-major storage for every cell of a sheet

use super::cell_ref::CellRef;
use super::eval::ValueLookup;
use super::format::format_number;

/// The type of content stored in a cell.
///
/// Each variant carries exactly the fields that are meaningful for it, so a
/// number without text or a formula without its source cannot be built.
#[derive(Clone, Debug, PartialEq)]
pub enum CellType {
    Empty,
    /// A number together with the literal text the user typed for it.
    Number { value: f64, text: String },
    Text(String),
    /// A formula that evaluated successfully. `source` is the original input
    /// (including the leading `=`), `value` the last computed result.
    Formula { source: String, value: f64 },
}

/// A cell in the spreadsheet grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub contents: CellType,
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell {
            contents: CellType::Empty,
        }
    }

    pub fn new_text(text: &str) -> Cell {
        Cell {
            contents: CellType::Text(text.to_string()),
        }
    }

    pub fn new_number(value: f64, text: &str) -> Cell {
        Cell {
            contents: CellType::Number {
                value,
                text: text.to_string(),
            },
        }
    }

    pub fn new_formula(source: &str, value: f64) -> Cell {
        Cell {
            contents: CellType::Formula {
                source: source.to_string(),
                value,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.contents, CellType::Empty)
    }

    /// Value seen by formulas that reference this cell. Text and empty cells read as 0.
    pub fn numeric_value(&self) -> f64 {
        match &self.contents {
            CellType::Number { value, .. } | CellType::Formula { value, .. } => *value,
            CellType::Empty | CellType::Text(_) => 0.0,
        }
    }

    /// The text shown to the user for this cell.
    pub fn display_text(&self) -> String {
        match &self.contents {
            CellType::Empty => String::new(),
            CellType::Number { text, .. } => text.clone(),
            CellType::Text(s) => s.clone(),
            CellType::Formula { value, .. } => format_number(*value),
        }
    }

    /// The text the user would type to recreate this cell.
    pub fn to_input_string(&self) -> String {
        match &self.contents {
            CellType::Empty => String::new(),
            CellType::Number { text, .. } => text.clone(),
            CellType::Text(s) => s.clone(),
            CellType::Formula { source, .. } => source.clone(),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new_empty()
    }
}

/// Fixed-size grid of cells, stored row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell starts out empty.
    ///
    /// Returns `None` when `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Option<Grid> {
        let len = rows.checked_mul(cols)?;
        Some(Grid {
            rows,
            cols,
            cells: vec![Cell::new_empty(); len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, cell_ref: &CellRef) -> Option<usize> {
        cell_ref
            .in_bounds(self.rows, self.cols)
            .then(|| cell_ref.row * self.cols + cell_ref.col)
    }

    pub fn get(&self, cell_ref: &CellRef) -> Option<&Cell> {
        let i = self.index(cell_ref)?;
        Some(&self.cells[i])
    }

    pub fn get_mut(&mut self, cell_ref: &CellRef) -> Option<&mut Cell> {
        let i = self.index(cell_ref)?;
        Some(&mut self.cells[i])
    }

    /// Install `cell` at `cell_ref`, returning the cell it replaced.
    pub fn replace(&mut self, cell_ref: &CellRef, cell: Cell) -> Option<Cell> {
        self.get_mut(cell_ref).map(|slot| std::mem::replace(slot, cell))
    }

    /// Iterate over every position in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (CellRef::new(i / cols, i % cols), cell))
    }
}

impl ValueLookup for Grid {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn numeric_value(&self, cell_ref: &CellRef) -> f64 {
        self.get(cell_ref).map_or(0.0, Cell::numeric_value)
    }
}
