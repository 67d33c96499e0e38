//! Writer for .grd file format

use crate::error::Result;
use std::fs;
use std::path::Path;
use sumgrid_engine::engine::{CellType, Grid};

/// Write a Grid to a .grd file
pub fn write_grd(path: &Path, grid: &Grid) -> Result<()> {
    let content = write_grd_content(grid);
    fs::write(path, content)?;
    Ok(())
}

/// Write a Grid to a .grd format string, one line per non-empty cell in row-major order.
pub fn write_grd_content(grid: &Grid) -> String {
    let mut lines = vec!["# Sumgrid Spreadsheet".to_string()];

    for (cell_ref, cell) in grid.iter() {
        let value_str = match &cell.contents {
            CellType::Empty => continue,
            CellType::Number { text, .. } => text.clone(),
            CellType::Text(s) => format!("\"{}\"", escape_grd_text(s)),
            CellType::Formula { source, .. } => source.trim().to_string(),
        };

        lines.push(format!("{}: {}", cell_ref, value_str));
    }

    lines.join("\n") + "\n"
}

fn escape_grd_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}
