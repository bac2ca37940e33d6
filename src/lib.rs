//! Sudoku to SAT formula encoder
//!
//! This library translates a partially filled Sudoku grid into a single
//! propositional formula whose satisfying assignments correspond exactly to
//! the valid completions of the puzzle. The formula is a text expression
//! over named atoms using `&`, `|` and `~`, ready to be handed to an
//! external SAT solver or logic engine.

pub mod config;
pub mod sudoku;
pub mod sat;
pub mod encoding;
pub mod utils;

pub use config::Settings;
pub use encoding::{EncodedFormula, EncodingProblem};
pub use sudoku::SudokuGrid;

use anyhow::Result;

/// Main entry point: load the puzzle named by the settings and encode it
pub fn encode_puzzle(settings: Settings) -> Result<EncodedFormula> {
    let problem = EncodingProblem::new(settings)?;
    problem.encode()
}
