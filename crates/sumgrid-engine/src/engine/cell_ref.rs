//! Cell addresses.
//!
//! Users name cells the way formulas do, one column letter followed by a
//! 1-based row (`C12`). Internally both coordinates are 0-based. Sheets never
//! have more than 26 columns, so there are no multi-letter columns.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Zero-based position of a cell in the grid.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

fn address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?<col>[A-Za-z])(?<row>[0-9]+)$").expect("address pattern is valid")
    })
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse an address such as `"B3"` or `" c10 "`. The column letter may be
    /// either case. Returns `None` for anything else, including row 0.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        let caps = address_pattern().captures(name.trim())?;
        let col = caps["col"].bytes().next()?.to_ascii_uppercase() - b'A';
        let row = caps["row"].parse::<usize>().ok()?.checked_sub(1)?;
        Some(CellRef::new(row, col as usize))
    }

    pub fn in_bounds(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Header text for a column: its letter, or `#n` past `Z`.
    pub fn column_label(col: usize) -> String {
        match u8::try_from(col) {
            Ok(n) if n < 26 => char::from(b'A' + n).to_string(),
            _ => format!("#{}", col as u128 + 1),
        }
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellRef::from_str(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::column_label(self.col), self.row as u128 + 1)
    }
}
