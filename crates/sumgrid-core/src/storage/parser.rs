//! Parser for .grd file format

use crate::error::{Result, SheetError};
use std::fs;
use std::path::Path;
use sumgrid_engine::engine::{CellRef, FORMULA_MARKER, is_valid_number};

/// Parse a .grd file into `(cell, raw input)` entries, in file order.
pub fn parse_grd(path: &Path) -> Result<Vec<(CellRef, String)>> {
    let content = fs::read_to_string(path)?;
    parse_grd_content(&content)
}

/// Parse .grd content from a string
pub fn parse_grd_content(content: &str) -> Result<Vec<(CellRef, String)>> {
    let mut entries = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse "CELLREF: VALUE" format
        let Some((cell_ref_str, value_str)) = line.split_once(':') else {
            return Err(SheetError::Parse {
                line: line_num + 1,
                message: "Expected 'CELLREF: VALUE' format".to_string(),
            });
        };

        let cell_ref_str = cell_ref_str.trim();
        let cell_ref = CellRef::from_str(cell_ref_str).ok_or_else(|| SheetError::Parse {
            line: line_num + 1,
            message: format!("Invalid cell reference: {}", cell_ref_str),
        })?;

        if let Some(input) = parse_cell_value(value_str, line_num + 1)? {
            entries.push((cell_ref, input));
        }
    }

    Ok(entries)
}

/// Turn a stored value back into the text the user entered.
fn parse_cell_value(value: &str, line_num: usize) -> Result<Option<String>> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    // Quoted string: starts and ends with '"'
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        let text = &value[1..value.len() - 1];
        return Ok(Some(unescape_grd_text(text)));
    }

    if value.starts_with(FORMULA_MARKER) || is_valid_number(value) {
        return Ok(Some(value.to_string()));
    }

    Err(SheetError::Parse {
        line: line_num,
        message: format!("Invalid value: {}. Use quotes for text.", value),
    })
}

fn unescape_grd_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                match next {
                    '\\' => out.push('\\'),
                    '"' => out.push('"'),
                    'n' => out.push('\n'),
                    _ => {
                        out.push('\\');
                        out.push(next);
                    }
                }
            } else {
                out.push('\\');
            }
        } else {
            out.push(ch);
        }
    }
    out
}
