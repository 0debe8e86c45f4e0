//! This module defines the `Tape`, a fixed-length run of binary cells.
//! The tape never grows or wraps; every access outside it is reported as an error.

use crate::types::{Symbol, TuringMachineError};

/// A fixed-length, zero-initialized binary tape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Symbol>,
}

impl Tape {
    /// Creates a tape of `length` cells, all set to [`Symbol::Zero`].
    ///
    /// # Returns
    ///
    /// * `Err(TuringMachineError::InvalidLength)` if `length` is zero.
    pub fn new(length: usize) -> Result<Self, TuringMachineError> {
        if length == 0 {
            return Err(TuringMachineError::InvalidLength(length));
        }

        Ok(Self {
            cells: vec![Symbol::Zero; length],
        })
    }

    /// Reads the cell at `index`.
    pub fn read(&self, index: usize) -> Result<Symbol, TuringMachineError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(TuringMachineError::OutOfBounds {
                index,
                length: self.cells.len(),
            })
    }

    /// Writes `value` into the cell at `index`.
    pub fn write(&mut self, index: usize, value: Symbol) -> Result<(), TuringMachineError> {
        let length = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(TuringMachineError::OutOfBounds { index, length })?;
        *cell = value;
        Ok(())
    }

    /// Returns the number of cells. Constant for the lifetime of the tape.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks whether the tape has no cells. [`Tape::new`] rejects a zero length, so this
    /// is `false` for every constructed tape.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns a read-only view of the cells.
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Resets every cell to [`Symbol::Zero`].
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Symbol::Zero);
    }
}

impl std::fmt::Display for Tape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tape_is_zeroed() {
        let tape = Tape::new(5).unwrap();

        assert_eq!(tape.len(), 5);
        assert!(!tape.is_empty());
        assert!(tape.cells().iter().all(|&c| c == Symbol::Zero));
        assert_eq!(tape.to_string(), "00000");
    }

    #[test]
    fn test_zero_length_rejected() {
        assert_eq!(Tape::new(0), Err(TuringMachineError::InvalidLength(0)));
    }

    #[test]
    fn test_read_write() {
        let mut tape = Tape::new(3).unwrap();

        tape.write(1, Symbol::One).unwrap();
        assert_eq!(tape.read(1), Ok(Symbol::One));
        assert_eq!(tape.read(0), Ok(Symbol::Zero));
        assert_eq!(tape.to_string(), "010");
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut tape = Tape::new(3).unwrap();

        assert_eq!(
            tape.read(3),
            Err(TuringMachineError::OutOfBounds {
                index: 3,
                length: 3
            })
        );
        assert_eq!(
            tape.write(10, Symbol::One),
            Err(TuringMachineError::OutOfBounds {
                index: 10,
                length: 3
            })
        );
        // A failed write leaves the tape untouched and its length fixed.
        assert_eq!(tape.to_string(), "000");
    }

    #[test]
    fn test_clear() {
        let mut tape = Tape::new(4).unwrap();
        tape.write(0, Symbol::One).unwrap();
        tape.write(3, Symbol::One).unwrap();

        tape.clear();
        assert_eq!(tape.to_string(), "0000");
        assert_eq!(tape.len(), 4);
    }
}
