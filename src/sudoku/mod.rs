//! Sudoku puzzle representation and I/O

pub mod grid;
pub mod io;

pub use grid::SudokuGrid;
pub use io::{load_puzzle_from_file, save_puzzle_to_file, create_example_puzzles};
