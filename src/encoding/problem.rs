//! Encoding problem definition

use super::{EncodedFormula, FormulaVerifier};
use crate::config::Settings;
use crate::sat::FormulaEncoder;
use crate::sudoku::{load_puzzle_from_file, SudokuGrid};
use anyhow::{Context, Result};
use std::time::Instant;

/// A Sudoku puzzle together with the machinery to encode it
pub struct EncodingProblem {
    settings: Settings,
    grid: SudokuGrid,
    encoder: FormulaEncoder,
}

impl EncodingProblem {
    /// Create a new problem from settings, loading the puzzle file
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate_geometry()?;

        let grid = load_puzzle_from_file(&settings.input.puzzle_file, settings.puzzle.block_size)
            .context("Failed to load puzzle file")?;

        if grid.size() != settings.puzzle.size {
            anyhow::bail!(
                "Puzzle file is {}x{} but the configuration expects {}x{}",
                grid.size(),
                grid.size(),
                settings.puzzle.size,
                settings.puzzle.size
            );
        }

        let encoder = FormulaEncoder::new(settings.puzzle.size, settings.puzzle.block_size);

        Ok(Self {
            settings,
            grid,
            encoder,
        })
    }

    /// Create a problem with an explicit grid (useful for testing)
    pub fn with_grid(settings: Settings, grid: SudokuGrid) -> Result<Self> {
        settings.validate_geometry()?;

        if grid.size() != settings.puzzle.size || grid.block_size() != settings.puzzle.block_size {
            anyhow::bail!(
                "Grid geometry {}x{} (block {}) does not match configuration {}x{} (block {})",
                grid.size(),
                grid.size(),
                grid.block_size(),
                settings.puzzle.size,
                settings.puzzle.size,
                settings.puzzle.block_size
            );
        }

        let encoder = FormulaEncoder::new(settings.puzzle.size, settings.puzzle.block_size);

        Ok(Self {
            settings,
            grid,
            encoder,
        })
    }

    /// Encode the puzzle into a verified formula
    pub fn encode(&self) -> Result<EncodedFormula> {
        let start_time = Instant::now();

        let (formula, statistics) = self
            .encoder
            .encode_with_statistics(&self.grid)
            .context("Failed to generate constraints")?;

        let encode_time = start_time.elapsed();

        let verification = FormulaVerifier::verify(&formula, &statistics.counts);
        if !verification.is_valid {
            anyhow::bail!(
                "Generated formula failed verification: {}",
                verification
                    .error_message
                    .unwrap_or_else(|| "unknown error".to_string())
            );
        }

        Ok(EncodedFormula::new(formula, statistics, encode_time))
    }

    /// The puzzle being encoded
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// The settings this problem was built from
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The underlying formula encoder
    pub fn encoder(&self) -> &FormulaEncoder {
        &self.encoder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InputConfig, OutputConfig, OutputFormat, PuzzleConfig};
    use std::path::PathBuf;

    fn test_settings(size: usize, block_size: usize) -> Settings {
        Settings {
            puzzle: PuzzleConfig { size, block_size },
            input: InputConfig {
                puzzle_file: PathBuf::from("test.txt"),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                output_directory: PathBuf::from("output"),
            },
        }
    }

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
    fn test_encode_with_grid() {
        let problem = EncodingProblem::with_grid(test_settings(4, 2), example_grid()).unwrap();
        let result = problem.encode().unwrap();

        assert_eq!(result.statistics.counts.total(), 356);
        assert!(result.formula.ends_with("c_134 & c_221 & c_243 & c_232"));
    }

    #[test]
    fn test_grid_settings_mismatch() {
        assert!(EncodingProblem::with_grid(test_settings(9, 3), example_grid()).is_err());
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        assert!(EncodingProblem::with_grid(test_settings(4, 3), example_grid()).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let puzzle_path = temp_dir.path().join("puzzle.txt");
        std::fs::write(&puzzle_path, "..4.\n.1.3\n.2..\n....\n").unwrap();

        let mut settings = test_settings(4, 2);
        settings.input.puzzle_file = puzzle_path;

        let problem = EncodingProblem::new(settings).unwrap();
        assert_eq!(problem.grid().prefilled_count(), 4);

        let result = problem.encode().unwrap();
        assert_eq!(result.statistics.counts.prefill, 4);
    }

    #[test]
    fn test_file_size_mismatch() {
        let temp_dir = tempfile::tempdir().unwrap();
        let puzzle_path = temp_dir.path().join("puzzle.txt");
        std::fs::write(&puzzle_path, "..4.\n.1.3\n.2..\n....\n").unwrap();

        let mut settings = test_settings(9, 3);
        settings.input.puzzle_file = puzzle_path;

        assert!(EncodingProblem::new(settings).is_err());
    }
}
