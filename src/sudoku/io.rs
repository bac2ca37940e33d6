//! File I/O operations for Sudoku puzzles

use super::SudokuGrid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a puzzle from a text file
///
/// Format: each line is one row; digits 1-9 are given values, '0' or '.'
/// mark empty cells. Whitespace inside a line is ignored.
pub fn load_puzzle_from_file<P: AsRef<Path>>(path: P, block_size: usize) -> Result<SudokuGrid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read puzzle file: {}", path.as_ref().display()))?;

    parse_puzzle_from_string(&content, block_size)
        .with_context(|| format!("Failed to parse puzzle from file: {}", path.as_ref().display()))
}

/// Parse a puzzle from a string representation
pub fn parse_puzzle_from_string(content: &str, block_size: usize) -> Result<SudokuGrid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Puzzle file is empty or contains no valid rows");
    }

    let mut cells = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::new();
        for (col_idx, ch) in line.chars().filter(|ch| !ch.is_whitespace()).enumerate() {
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only digits and '.' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            };
            row.push(value);
        }
        cells.push(row);
    }

    SudokuGrid::from_cells(cells, block_size)
}

/// Save a puzzle to a text file
pub fn save_puzzle_to_file<P: AsRef<Path>>(grid: &SudokuGrid, path: P) -> Result<()> {
    let content = grid.to_string();

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write puzzle to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example puzzle files for testing
pub fn create_example_puzzles<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // 4x4 puzzle with 2x2 blocks
    let small_content = "..4.\n.1.3\n.2..\n....\n";
    std::fs::write(dir.join("example_4x4.txt"), small_content)
        .context("Failed to write example_4x4.txt")?;

    // Classic 9x9 puzzle with 3x3 blocks
    let classic_content = "\
53..7....
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79
";
    std::fs::write(dir.join("example_9x9.txt"), classic_content)
        .context("Failed to write example_9x9.txt")?;

    Ok(())
}
