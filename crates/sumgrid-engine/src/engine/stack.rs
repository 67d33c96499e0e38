//! Operand stack used as scratch space while a formula is evaluated.

use thiserror::Error;

const INITIAL_CAPACITY: usize = 16;

/// Popping from an empty stack. Well-formed evaluation never does this.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("pop from empty operand stack")]
pub struct EmptyStackError;

/// A growable stack of `f64` operands.
///
/// Capacity starts at 16 and doubles whenever a push finds the stack full.
/// The buffer is released when the stack is dropped, so every exit path out of
/// an evaluation (including early returns on a malformed formula) frees it.
#[derive(Debug)]
pub struct NumericStack {
    values: Vec<f64>,
}

impl NumericStack {
    pub fn new() -> Self {
        NumericStack {
            values: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.values.len() == self.values.capacity() {
            let grow_by = self.values.capacity().max(INITIAL_CAPACITY);
            self.values.reserve_exact(grow_by);
        }
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Result<f64, EmptyStackError> {
        self.values.pop().ok_or(EmptyStackError)
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }
}

impl Default for NumericStack {
    fn default() -> Self {
        Self::new()
    }
}
