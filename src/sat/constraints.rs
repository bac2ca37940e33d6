//! Constraint generation for the Sudoku SAT encoding
//!
//! Five independent generators produce the constraints of the puzzle:
//! cell, row, column, block and prefill. Each constraint is a
//! self-contained text expression; the encoder joins them into one
//! conjunction. The generators do not depend on each other's output.

use super::AtomNamer;
use crate::sudoku::SudokuGrid;
use anyhow::Result;
use itertools::{iproduct, Itertools};

/// Generates the boolean constraints for an N×N puzzle with B×B blocks
pub struct ConstraintGenerator {
    namer: AtomNamer,
    size: usize,
    block_size: usize,
}

impl ConstraintGenerator {
    /// Create a new constraint generator for the given geometry
    pub fn new(size: usize, block_size: usize) -> Self {
        Self {
            namer: AtomNamer::new(size),
            size,
            block_size,
        }
    }

    /// Generate all constraints for the given puzzle, in the fixed order
    /// cell, row, column, block, prefill
    pub fn generate_all_constraints(&self, grid: &SudokuGrid) -> Result<Vec<String>> {
        let mut constraints = self.cell_constraints();
        constraints.extend(self.row_constraints());
        constraints.extend(self.column_constraints());
        constraints.extend(self.block_constraints());
        constraints.extend(self.prefill_constraints(grid)?);
        Ok(constraints)
    }

    /// Every cell holds at least one value
    ///
    /// One disjunction per cell over its N candidate atoms. There is no
    /// direct "at most one value per cell" clause; that exclusivity
    /// emerges from the row/column/block exclusions, and the clause
    /// counts in the tests rely on its absence.
    pub fn cell_constraints(&self) -> Vec<String> {
        let mut constraints = Vec::with_capacity(self.size * self.size);
        for (r, c) in iproduct!(0..self.size, 0..self.size) {
            let candidates = (1..=self.size).map(|v| self.namer.atom(r, c, v)).join(" | ");
            constraints.push(format!("({candidates})"));
        }
        constraints
    }

    /// Every value appears exactly once per column of row positions
    ///
    /// Despite the name, the loop fixes a column and scans rows: for each
    /// (value, column) it emits one disjunction over the row positions and
    /// one exclusion `~(a & b)` per pair r1 < r2. This axis assignment is
    /// kept as-is; swapping it would change which uniqueness direction
    /// each generator enforces.
    pub fn row_constraints(&self) -> Vec<String> {
        let mut constraints = Vec::new();
        for v in 1..=self.size {
            for c in 0..self.size {
                let positions = (0..self.size).map(|r| self.namer.atom(r, c, v)).join(" | ");
                constraints.push(format!("({positions})"));

                for (r1, r2) in (0..self.size).tuple_combinations() {
                    constraints.push(format!(
                        "~({} & {})",
                        self.namer.atom(r1, c, v),
                        self.namer.atom(r2, c, v)
                    ));
                }
            }
        }
        constraints
    }

    /// Every value appears exactly once per row of column positions
    ///
    /// Mirror image of [`Self::row_constraints`]: fixes a row, scans
    /// columns, pairs c1 < c2.
    pub fn column_constraints(&self) -> Vec<String> {
        let mut constraints = Vec::new();
        for v in 1..=self.size {
            for r in 0..self.size {
                let positions = (0..self.size).map(|c| self.namer.atom(r, c, v)).join(" | ");
                constraints.push(format!("({positions})"));

                for (c1, c2) in (0..self.size).tuple_combinations() {
                    constraints.push(format!(
                        "~({} & {})",
                        self.namer.atom(r, c1, v),
                        self.namer.atom(r, c2, v)
                    ));
                }
            }
        }
        constraints
    }

    /// Every value appears exactly once in each B×B block
    ///
    /// Blocks originate at every (br, bc) with both coordinates multiples
    /// of B. Cells within a block are enumerated row-major; exclusions
    /// pair list positions i < j.
    pub fn block_constraints(&self) -> Vec<String> {
        let mut constraints = Vec::new();
        for v in 1..=self.size {
            for br in (0..self.size).step_by(self.block_size) {
                for bc in (0..self.size).step_by(self.block_size) {
                    let block_cells: Vec<String> =
                        iproduct!(br..br + self.block_size, bc..bc + self.block_size)
                            .map(|(r, c)| self.namer.atom(r, c, v))
                            .collect();

                    constraints.push(format!("({})", block_cells.iter().join(" | ")));

                    for (cell1, cell2) in block_cells.iter().tuple_combinations() {
                        constraints.push(format!("~({cell1} & {cell2})"));
                    }
                }
            }
        }
        constraints
    }

    /// Assert the atom of every prefilled cell as a unit constraint
    ///
    /// Prefilled cells are scanned row-major; empty cells contribute
    /// nothing, so a blank puzzle yields an empty list.
    pub fn prefill_constraints(&self, grid: &SudokuGrid) -> Result<Vec<String>> {
        if grid.size() != self.size || grid.block_size() != self.block_size {
            anyhow::bail!(
                "Puzzle geometry {}x{} (block {}) does not match generator geometry {}x{} (block {})",
                grid.size(),
                grid.size(),
                grid.block_size(),
                self.size,
                self.size,
                self.block_size
            );
        }

        Ok(grid
            .prefilled_cells()
            .into_iter()
            .map(|(r, c, v)| self.namer.atom(r, c, v))
            .collect())
    }

    /// The atom namer used by this generator
    pub fn namer(&self) -> &AtomNamer {
        &self.namer
    }

    /// Closed-form count of cell constraints: N²
    pub fn expected_cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Closed-form count for either line generator: N·N·(1 + N(N−1)/2)
    pub fn expected_line_count(&self) -> usize {
        let pairs = self.size * (self.size.saturating_sub(1)) / 2;
        self.size * self.size * (1 + pairs)
    }

    /// Closed-form count of block constraints:
    /// (N/B)²·N·(1 + B²(B²−1)/2)
    pub fn expected_block_count(&self) -> usize {
        if self.block_size == 0 {
            return 0;
        }
        let blocks = (self.size / self.block_size) * (self.size / self.block_size);
        let cells = self.block_size * self.block_size;
        let pairs = cells * (cells - 1) / 2;
        blocks * self.size * (1 + pairs)
    }

    /// Total count of structural (grid-independent) constraints
    pub fn expected_structural_count(&self) -> usize {
        self.expected_cell_count() + 2 * self.expected_line_count() + self.expected_block_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_grid() -> SudokuGrid {
        let cells = vec![
            vec![0, 0, 4, 0],
            vec![0, 1, 0, 3],
            vec![0, 2, 0, 0],
            vec![0, 0, 0, 0],
        ];
        SudokuGrid::from_cells(cells, 2).unwrap()
    }

    #[test]
    fn test_cell_constraint_count_and_shape() {
        let generator = ConstraintGenerator::new(4, 2);
        let constraints = generator.cell_constraints();

        assert_eq!(constraints.len(), 16);
        assert_eq!(constraints.len(), generator.expected_cell_count());
        assert_eq!(constraints[0], "(c_111 | c_112 | c_113 | c_114)");
        assert_eq!(constraints[15], "(c_441 | c_442 | c_443 | c_444)");
    }

    #[test]
    fn test_row_constraints_fix_a_column() {
        let generator = ConstraintGenerator::new(4, 2);
        let constraints = generator.row_constraints();

        // 4 values x 4 columns x (1 disjunction + 6 exclusions)
        assert_eq!(constraints.len(), 112);
        assert_eq!(constraints.len(), generator.expected_line_count());

        // First group: value 1, column 0, scanning rows
        assert_eq!(constraints[0], "(c_111 | c_211 | c_311 | c_411)");
        assert_eq!(constraints[1], "~(c_111 & c_211)");
        assert_eq!(constraints[2], "~(c_111 & c_311)");
        assert_eq!(constraints[3], "~(c_111 & c_411)");
        assert_eq!(constraints[4], "~(c_211 & c_311)");
        assert_eq!(constraints[6], "~(c_311 & c_411)");
    }

    #[test]
    fn test_column_constraints_fix_a_row() {
        let generator = ConstraintGenerator::new(4, 2);
        let constraints = generator.column_constraints();

        assert_eq!(constraints.len(), 112);

        // First group: value 1, row 0, scanning columns
        assert_eq!(constraints[0], "(c_111 | c_121 | c_131 | c_141)");
        assert_eq!(constraints[1], "~(c_111 & c_121)");
    }

    #[test]
    fn test_block_constraints() {
        let generator = ConstraintGenerator::new(4, 2);
        let constraints = generator.block_constraints();

        // 4 values x 4 blocks x (1 disjunction + 6 exclusions)
        assert_eq!(constraints.len(), 112);
        assert_eq!(constraints.len(), generator.expected_block_count());

        // First block for value 1: cells row-major within the block
        assert_eq!(constraints[0], "(c_111 | c_121 | c_211 | c_221)");
        assert_eq!(constraints[1], "~(c_111 & c_121)");
        assert_eq!(constraints[6], "~(c_211 & c_221)");
    }

    #[test]
    fn test_prefill_constraints_in_row_major_order() {
        let generator = ConstraintGenerator::new(4, 2);
        let constraints = generator.prefill_constraints(&example_grid()).unwrap();

        assert_eq!(constraints, vec!["c_134", "c_221", "c_243", "c_232"]);
    }

    #[test]
    fn test_prefill_constraints_blank_puzzle() {
        let generator = ConstraintGenerator::new(4, 2);
        let blank = SudokuGrid::new(4, 2);

        let constraints = generator.prefill_constraints(&blank).unwrap();
        assert!(constraints.is_empty());
    }

    #[test]
    fn test_prefill_geometry_mismatch() {
        let generator = ConstraintGenerator::new(9, 3);
        assert!(generator.prefill_constraints(&example_grid()).is_err());
    }

    #[test]
    fn test_generate_all_constraint_count() {
        let generator = ConstraintGenerator::new(4, 2);
        let constraints = generator.generate_all_constraints(&example_grid()).unwrap();

        // 16 cell + 112 row + 112 column + 112 block + 4 prefill
        assert_eq!(constraints.len(), 356);
        assert_eq!(constraints.len(), generator.expected_structural_count() + 4);
    }

    #[test]
    fn test_classic_size_counts() {
        let generator = ConstraintGenerator::new(9, 3);

        assert_eq!(generator.expected_cell_count(), 81);
        // 9 * 9 * (1 + 36)
        assert_eq!(generator.expected_line_count(), 2997);
        // 9 blocks * 9 values * (1 + 36)
        assert_eq!(generator.expected_block_count(), 2997);

        assert_eq!(generator.row_constraints().len(), 2997);
        assert_eq!(generator.block_constraints().len(), 2997);
    }
}
