//! SAT formula generation for Sudoku puzzles

pub mod atoms;
pub mod constraints;
pub mod encoder;

pub use atoms::AtomNamer;
pub use constraints::ConstraintGenerator;
pub use encoder::{FormulaEncoder, ConstraintCounts, EncodingStatistics};
