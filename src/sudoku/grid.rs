//! Grid representation for Sudoku puzzles

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A partially filled N×N Sudoku grid
///
/// Cells hold values in `[0, N]` where 0 marks an empty cell. The grid is
/// read-only once constructed; the encoder only ever inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuGrid {
    size: usize,
    block_size: usize,
    cells: Vec<u8>,
}

impl SudokuGrid {
    /// Create an empty puzzle (all cells unfilled)
    pub fn new(size: usize, block_size: usize) -> Self {
        Self {
            size,
            block_size,
            cells: vec![0; size * size],
        }
    }

    /// Create a grid from a 2D array of cell values
    pub fn from_cells(cells: Vec<Vec<u8>>, block_size: usize) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Puzzle cannot be empty");
        }

        let size = cells.len();

        if size > 9 {
            anyhow::bail!("Puzzle size {} exceeds the maximum of 9", size);
        }

        if block_size == 0 {
            anyhow::bail!("Block size must be positive");
        }

        if size % block_size != 0 {
            anyhow::bail!(
                "Puzzle size {} is not divisible by block size {}",
                size,
                block_size
            );
        }

        for (r, row) in cells.iter().enumerate() {
            if row.len() != size {
                anyhow::bail!(
                    "Row {} has length {}, expected {} (grid must be square)",
                    r,
                    row.len(),
                    size
                );
            }

            for (c, &value) in row.iter().enumerate() {
                if usize::from(value) > size {
                    anyhow::bail!(
                        "Cell ({}, {}) holds {}, outside the valid range [0, {}]",
                        r,
                        c,
                        value,
                        size
                    );
                }
            }
        }

        let flat_cells: Vec<u8> = cells.into_iter().flatten().collect();

        Ok(Self {
            size,
            block_size,
            cells: flat_cells,
        })
    }

    /// Edge length N of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Edge length B of the sub-blocks
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Convert 2D coordinates to the flat cell index
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get the value at the given cell, 0 meaning empty
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    /// All prefilled cells as `(row, col, value)` triples in row-major order
    pub fn prefilled_cells(&self) -> Vec<(usize, usize, usize)> {
        let mut prefilled = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.get(row, col);
                if value != 0 {
                    prefilled.push((row, col, usize::from(value)));
                }
            }
        }
        prefilled
    }

    /// Count of prefilled cells
    pub fn prefilled_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }

    /// Check whether no cell is filled
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&value| value == 0)
    }
}

impl fmt::Display for SudokuGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.get(row, col);
                if value == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
