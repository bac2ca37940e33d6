//! Formula assembly for the Sudoku SAT encoding

use super::ConstraintGenerator;
use crate::sudoku::SudokuGrid;
use anyhow::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Combines the five constraint generators into one formula string
///
/// The conjunct order is fixed (cell, row, column, block, prefill) so the
/// output is byte-for-byte deterministic for a given puzzle.
pub struct FormulaEncoder {
    generator: ConstraintGenerator,
    size: usize,
    block_size: usize,
}

impl FormulaEncoder {
    /// Create an encoder for the given geometry
    pub fn new(size: usize, block_size: usize) -> Self {
        Self {
            generator: ConstraintGenerator::new(size, block_size),
            size,
            block_size,
        }
    }

    /// Encode the puzzle into a single conjunction
    ///
    /// A degenerate geometry with no constraints yields the empty string.
    pub fn encode(&self, grid: &SudokuGrid) -> Result<String> {
        let constraints = self.generator.generate_all_constraints(grid)?;
        Ok(constraints.iter().join(" & "))
    }

    /// Encode the puzzle and report per-generator constraint counts
    pub fn encode_with_statistics(&self, grid: &SudokuGrid) -> Result<(String, EncodingStatistics)> {
        let cell = self.generator.cell_constraints();
        let row = self.generator.row_constraints();
        let column = self.generator.column_constraints();
        let block = self.generator.block_constraints();
        let prefill = self.generator.prefill_constraints(grid)?;

        let counts = ConstraintCounts {
            cell: cell.len(),
            row: row.len(),
            column: column.len(),
            block: block.len(),
            prefill: prefill.len(),
        };

        let formula = cell
            .into_iter()
            .chain(row)
            .chain(column)
            .chain(block)
            .chain(prefill)
            .join(" & ");

        let statistics = EncodingStatistics {
            size: self.size,
            block_size: self.block_size,
            atom_count: self.generator.namer().atom_count(),
            counts,
            formula_length: formula.len(),
        };

        Ok((formula, statistics))
    }

    /// The underlying constraint generator
    pub fn generator(&self) -> &ConstraintGenerator {
        &self.generator
    }
}

/// Number of constraints contributed by each generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintCounts {
    pub cell: usize,
    pub row: usize,
    pub column: usize,
    pub block: usize,
    pub prefill: usize,
}

impl ConstraintCounts {
    /// Total number of top-level conjuncts in the formula
    pub fn total(&self) -> usize {
        self.cell + self.row + self.column + self.block + self.prefill
    }
}

/// Statistics about an encoding run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingStatistics {
    pub size: usize,
    pub block_size: usize,
    pub atom_count: usize,
    pub counts: ConstraintCounts,
    pub formula_length: usize,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Encoding Statistics:")?;
        writeln!(f, "  Grid: {}x{} (blocks {}x{})", self.size, self.size, self.block_size, self.block_size)?;
        writeln!(f, "  Atoms: {}", self.atom_count)?;
        writeln!(f, "  Cell constraints: {}", self.counts.cell)?;
        writeln!(f, "  Row constraints: {}", self.counts.row)?;
        writeln!(f, "  Column constraints: {}", self.counts.column)?;
        writeln!(f, "  Block constraints: {}", self.counts.block)?;
        writeln!(f, "  Prefill constraints: {}", self.counts.prefill)?;
        writeln!(f, "  Total conjuncts: {}", self.counts.total())?;
        writeln!(f, "  Formula length: {} characters", self.formula_length)?;
        Ok(())
    }
}
