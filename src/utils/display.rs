//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::encoding::EncodedFormula;
use crate::sudoku::SudokuGrid;
use anyhow::{Context, Result};
use std::path::Path;

/// Formats puzzles and encoded formulas for display and saving
pub struct FormulaFormatter;

impl FormulaFormatter {
    /// Format a puzzle grid with block separators
    pub fn format_puzzle(grid: &SudokuGrid) -> String {
        let size = grid.size();
        let block = grid.block_size();
        let mut output = String::new();

        for row in 0..size {
            if row > 0 && block > 0 && row % block == 0 {
                // Ruler between block bands
                let dashes = "-".repeat(2 * size + 2 * (size / block - 1));
                output.push_str(&dashes);
                output.push('\n');
            }
            for col in 0..size {
                if col > 0 && block > 0 && col % block == 0 {
                    output.push_str("| ");
                }
                let value = grid.get(row, col);
                if value == 0 {
                    output.push_str(". ");
                } else {
                    output.push_str(&format!("{} ", value));
                }
            }
            output.push('\n');
        }

        output
    }

    /// Format a puzzle with 1-based row and column coordinates, matching
    /// the indices used in atom names
    pub fn format_puzzle_with_coords(grid: &SudokuGrid) -> String {
        let size = grid.size();
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..size {
            output.push_str(&format!("{:2}", col + 1));
        }
        output.push('\n');

        for row in 0..size {
            output.push_str(&format!("{:2} ", row + 1));
            for col in 0..size {
                let value = grid.get(row, col);
                if value == 0 {
                    output.push_str(" .");
                } else {
                    output.push_str(&format!("{:2}", value));
                }
            }
            output.push('\n');
        }

        output
    }

    /// Truncate a formula for console preview
    pub fn format_formula_preview(formula: &str, max_length: usize) -> String {
        if formula.len() <= max_length {
            formula.to_string()
        } else {
            let mut end = max_length;
            while !formula.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... ({} more characters)", &formula[..end], formula.len() - end)
        }
    }

    /// Save an encoded formula to the output directory
    ///
    /// Text format writes the raw formula to `formula.txt`; JSON writes
    /// the full result (formula + metadata) to `formula.json`.
    pub fn save_formula<P: AsRef<Path>>(
        result: &EncodedFormula,
        output_dir: P,
        format: OutputFormat,
    ) -> Result<std::path::PathBuf> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let path = match format {
            OutputFormat::Text => {
                let path = output_dir.join("formula.txt");
                let mut content = result.formula.clone();
                content.push('\n');
                std::fs::write(&path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                path
            }
            OutputFormat::Json => {
                let path = output_dir.join("formula.json");
                result.save_to_file(&path)?;
                path
            }
        };

        Ok(path)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if the terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
