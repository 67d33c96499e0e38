//! Up-front syntax checks for user input.
//!
//! Both checks look at the whole string after trimming surrounding whitespace.
//! They only decide whether a string *may* be a number or a formula; operand
//! and operator alternation is left to the evaluator.

/// Marker that starts every formula.
pub const FORMULA_MARKER: char = '=';

/// True iff `text` holds at least one digit, at most one `.`, and nothing else.
///
/// Signs are not accepted, so `-1` and `+1` are plain text.
pub fn is_valid_number(text: &str) -> bool {
    let mut has_digit = false;
    let mut has_point = false;

    for c in text.trim().chars() {
        match c {
            '0'..='9' => has_digit = true,
            '.' if has_point => return false,
            '.' => has_point = true,
            _ => return false,
        }
    }

    has_digit
}

/// True iff `text` starts with `=` and every following non-whitespace character
/// is an uppercase letter, a digit, `.` or `+`.
///
/// A single lowercase letter anywhere invalidates the formula.
pub fn is_valid_formula(text: &str) -> bool {
    let Some(body) = text.trim().strip_prefix(FORMULA_MARKER) else {
        return false;
    };

    body.chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        for text in ["0", "42", "3.14", ".5", "5.", "  12.50  ", "007"] {
            assert!(is_valid_number(text), "{text:?} should be a number");
        }
    }

    #[test]
    fn test_invalid_numbers() {
        for text in ["", "   ", ".", "1.2.3", "-1", "+1", "1e5", "12a", "1 2", "=1"] {
            assert!(!is_valid_number(text), "{text:?} should not be a number");
        }
    }

    #[test]
    fn test_formula_requires_marker() {
        assert!(!is_valid_formula("A1+B1"));
        assert!(!is_valid_formula("1+2"));
        assert!(!is_valid_formula(""));
        assert!(!is_valid_formula("x=A1"));
    }

    #[test]
    fn test_valid_formulas() {
        for text in ["=A1+B2", "=1+2.5", "  = A1 + 3 ", "=", "=++", "=A1B2"] {
            assert!(is_valid_formula(text), "{text:?} should pass the syntax check");
        }
    }

    #[test]
    fn test_lowercase_anywhere_invalidates() {
        assert!(!is_valid_formula("=a1+1"));
        assert!(!is_valid_formula("=A1+b2"));
        assert!(!is_valid_formula("=1e5"));
    }

    #[test]
    fn test_other_characters_invalidate() {
        for text in ["=A1-B1", "=A1*2", "=(A1)", "=A1:B2", "=SUM(A1)", "=A1=B1"] {
            assert!(!is_valid_formula(text), "{text:?} should be rejected");
        }
    }
}
