//! Formula evaluation.
//!
//! A formula is a flat chain of operands joined by `+`. Operands are numeric
//! literals or single-letter cell references such as `C12`. References resolve
//! to the referenced cell's current numeric value at evaluation time; nothing
//! is tracked between evaluations.

use thiserror::Error;

use super::cell_ref::CellRef;
use super::stack::{EmptyStackError, NumericStack};
use super::syntax::{FORMULA_MARKER, is_valid_formula};

/// Read access to cell values needed while evaluating a formula.
pub trait ValueLookup {
    /// Grid size as `(rows, cols)`.
    fn dimensions(&self) -> (usize, usize);

    /// Current numeric value of an in-bounds cell.
    fn numeric_value(&self, cell_ref: &CellRef) -> f64;
}

/// Reasons a formula fails to evaluate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("syntax error at offset {position}: {message}")]
    Syntax { position: usize, message: String },

    #[error("reference {reference} is outside the {rows}x{cols} grid")]
    OutOfRange {
        reference: String,
        rows: usize,
        cols: usize,
    },

    #[error("{operands} operand(s) for {operators} operator(s)")]
    OperandCountMismatch { operands: usize, operators: usize },

    #[error(transparent)]
    EmptyStack(#[from] EmptyStackError),
}

/// Evaluate `formula` against the values in `cells`.
pub fn evaluate(formula: &str, cells: &impl ValueLookup) -> Result<f64, FormulaError> {
    if !is_valid_formula(formula) {
        return Err(FormulaError::Syntax {
            position: 0,
            message: format!("{:?} is not a formula", formula),
        });
    }

    let chars: Vec<char> = formula.trim().chars().collect();
    let (rows, cols) = cells.dimensions();
    let mut stack = NumericStack::new();
    let mut operators = 0usize;
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        if c == FORMULA_MARKER || c.is_whitespace() {
            pos += 1;
        } else if c == '+' {
            operators += 1;
            pos += 1;
        } else if c.is_ascii_uppercase() {
            let digits_start = pos + 1;
            if !chars.get(digits_start).is_some_and(char::is_ascii_digit) {
                return Err(FormulaError::Syntax {
                    position: pos,
                    message: format!("column {} is not followed by a row number", c),
                });
            }
            let digits_end = scan_digits(&chars, digits_start);
            let row_text: String = chars[digits_start..digits_end].iter().collect();
            let col = (c as u8 - b'A') as usize;

            let cell_ref = row_text
                .parse::<usize>()
                .ok()
                .and_then(|row| row.checked_sub(1))
                .map(|row| CellRef::new(row, col))
                .filter(|r| r.in_bounds(rows, cols))
                .ok_or_else(|| FormulaError::OutOfRange {
                    reference: format!("{}{}", c, row_text),
                    rows,
                    cols,
                })?;

            stack.push(cells.numeric_value(&cell_ref));
            pos = digits_end;
        } else if c.is_ascii_digit() || c == '.' {
            let (value, end) = scan_literal(&chars, pos)?;
            stack.push(value);
            pos = end;
        } else {
            return Err(FormulaError::Syntax {
                position: pos,
                message: format!("unexpected character {:?}", c),
            });
        }
    }

    if stack.size() != operators + 1 {
        return Err(FormulaError::OperandCountMismatch {
            operands: stack.size(),
            operators,
        });
    }

    let mut result = 0.0;
    while !stack.is_empty() {
        result += stack.pop()?;
    }
    tracing::trace!(formula, result, "evaluated formula");
    Ok(result)
}

fn scan_digits(chars: &[char], from: usize) -> usize {
    chars[from..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |n| from + n)
}

/// Parse the longest numeric literal starting at `start`: digits with at most
/// one `.`, optionally followed by an exponent such as `E3` or `E+3`.
fn scan_literal(chars: &[char], start: usize) -> Result<(f64, usize), FormulaError> {
    let mut end = scan_digits(chars, start);
    let mut has_digits = end > start;
    if chars.get(end) == Some(&'.') {
        let frac_end = scan_digits(chars, end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return Err(FormulaError::Syntax {
            position: start,
            message: "'.' without digits".to_string(),
        });
    }

    if chars.get(end) == Some(&'E') {
        let mut exp_start = end + 1;
        if chars.get(exp_start) == Some(&'+') {
            exp_start += 1;
        }
        let exp_end = scan_digits(chars, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    let literal: String = chars[start..end].iter().collect();
    literal
        .parse::<f64>()
        .map(|value| (value, end))
        .map_err(|e| FormulaError::Syntax {
            position: start,
            message: format!("invalid number {:?}: {}", literal, e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Cell, Grid};

    fn grid_with(values: &[(&str, f64)]) -> Grid {
        let mut grid = Grid::new(10, 7).unwrap();
        for (name, value) in values {
            let at = CellRef::from_str(name).unwrap();
            grid.replace(&at, Cell::new_number(*value, &value.to_string()));
        }
        grid
    }

    #[test]
    fn test_sum_of_references() {
        let grid = grid_with(&[("A1", 3.0), ("B2", 4.0)]);
        assert_eq!(evaluate("=A1+B2", &grid), Ok(7.0));
    }

    #[test]
    fn test_literals_and_whitespace() {
        let grid = grid_with(&[("C3", 1.5)]);
        assert_eq!(evaluate("= 1 + 2.5 + C3", &grid), Ok(5.0));
        assert_eq!(evaluate("=.5+5.", &grid), Ok(5.5));
        assert_eq!(evaluate("  =42  ", &grid), Ok(42.0));
    }

    #[test]
    fn test_empty_cells_read_as_zero() {
        let grid = Grid::new(10, 7).unwrap();
        assert_eq!(evaluate("=A1+G10", &grid), Ok(0.0));
    }

    #[test]
    fn test_exponent_literal() {
        let grid = Grid::new(10, 7).unwrap();
        assert_eq!(evaluate("=1E3", &grid), Ok(1000.0));
        assert_eq!(evaluate("=2.5E+1+1", &grid), Ok(26.0));
        assert_eq!(evaluate("=1E+1", &grid), Ok(10.0));
        // A dangling exponent marker is left for the reference branch.
        assert!(matches!(
            evaluate("=1E", &grid),
            Err(FormulaError::Syntax { .. })
        ));
    }

    #[test]
    fn test_hex_literals_are_not_numbers() {
        // `0X1A` scans as the literal 0 followed by the reference X1.
        let narrow = Grid::new(10, 7).unwrap();
        assert_eq!(
            evaluate("=0X1A", &narrow),
            Err(FormulaError::OutOfRange {
                reference: "X1".to_string(),
                rows: 10,
                cols: 7,
            })
        );

        let wide = Grid::new(10, 26).unwrap();
        assert!(matches!(
            evaluate("=0X1A", &wide),
            Err(FormulaError::Syntax { position: 4, .. })
        ));
        assert!(matches!(
            evaluate("=0x1A", &wide),
            Err(FormulaError::Syntax { position: 0, .. })
        ));
    }

    #[test]
    fn test_lowercase_is_syntax_error() {
        let grid = grid_with(&[("A1", 1.0)]);
        assert!(matches!(
            evaluate("=a1+1", &grid),
            Err(FormulaError::Syntax { .. })
        ));
    }

    #[test]
    fn test_column_without_row_is_syntax_error() {
        let grid = Grid::new(10, 7).unwrap();
        assert!(matches!(
            evaluate("=A+1", &grid),
            Err(FormulaError::Syntax { position: 1, .. })
        ));
        assert!(matches!(
            evaluate("=AB1", &grid),
            Err(FormulaError::Syntax { .. })
        ));
    }

    #[test]
    fn test_lone_point_is_syntax_error() {
        let grid = Grid::new(10, 7).unwrap();
        assert!(matches!(
            evaluate("=.+1", &grid),
            Err(FormulaError::Syntax { .. })
        ));
    }

    #[test]
    fn test_out_of_range_references() {
        let grid = Grid::new(10, 7).unwrap();
        assert_eq!(
            evaluate("=Z99+1", &grid),
            Err(FormulaError::OutOfRange {
                reference: "Z99".to_string(),
                rows: 10,
                cols: 7,
            })
        );
        assert!(matches!(
            evaluate("=A11", &grid),
            Err(FormulaError::OutOfRange { .. })
        ));
        assert!(matches!(
            evaluate("=A0", &grid),
            Err(FormulaError::OutOfRange { .. })
        ));
        assert!(matches!(
            evaluate("=A99999999999999999999999", &grid),
            Err(FormulaError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_operand_count_mismatch() {
        let grid = Grid::new(10, 7).unwrap();
        assert_eq!(
            evaluate("=1++2", &grid),
            Err(FormulaError::OperandCountMismatch {
                operands: 2,
                operators: 2,
            })
        );
        assert!(matches!(
            evaluate("=A1B1", &grid),
            Err(FormulaError::OperandCountMismatch { operands: 2, operators: 0 })
        ));
        assert!(matches!(
            evaluate("=", &grid),
            Err(FormulaError::OperandCountMismatch { operands: 0, operators: 0 })
        ));
        assert!(matches!(
            evaluate("=1+", &grid),
            Err(FormulaError::OperandCountMismatch { .. })
        ));
    }

    #[test]
    fn test_non_formula_is_rejected() {
        let grid = Grid::new(10, 7).unwrap();
        assert!(matches!(
            evaluate("A1+1", &grid),
            Err(FormulaError::Syntax { .. })
        ));
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let grid = grid_with(&[("A1", 0.1), ("B1", 0.2)]);
        let first = evaluate("=A1+B1+0.3", &grid).unwrap();
        for _ in 0..5 {
            assert_eq!(evaluate("=A1+B1+0.3", &grid).unwrap(), first);
        }
    }
}
