//! Atom naming for the SAT encoding
//!
//! Every boolean atom stands for "cell (row, col) holds value". The name
//! `c_RCV` displays row and column 1-based so the output reads naturally;
//! the value is used as given. The mapping is injective for grids up to
//! 9x9, which configuration validation guarantees.

/// Deterministic mapping from (row, col, value) triples to atom names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomNamer {
    size: usize,
}

impl AtomNamer {
    /// Create a namer for an N×N grid
    pub fn new(size: usize) -> Self {
        debug_assert!(size <= 9, "atom names collide above size 9");
        Self { size }
    }

    /// Name the atom for "cell (row, col) holds value"
    ///
    /// Expects `row`, `col` in `[0, N)` and `value` in `[1, N]`; anything
    /// else is a caller bug, not a runtime error.
    pub fn atom(&self, row: usize, col: usize, value: usize) -> String {
        debug_assert!(row < self.size && col < self.size);
        debug_assert!((1..=self.size).contains(&value));
        format!("c_{}{}{}", row + 1, col + 1, value)
    }

    /// Total number of distinct atoms for this grid size
    pub fn atom_count(&self) -> usize {
        self.size * self.size * self.size
    }
}
