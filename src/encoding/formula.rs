//! Encoded formula result type

use crate::sat::EncodingStatistics;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// The output of an encoding run: the formula plus its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedFormula {
    /// The full conjunction, one well-formed expression string
    pub formula: String,
    /// Per-generator constraint counts and geometry
    pub statistics: EncodingStatistics,
    /// Wall-clock time spent encoding
    pub encode_time: Duration,
}

impl EncodedFormula {
    /// Create a new encoded formula result
    pub fn new(formula: String, statistics: EncodingStatistics, encode_time: Duration) -> Self {
        Self {
            formula,
            statistics,
            encode_time,
        }
    }

    /// Serialize the result to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a result from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save the result as JSON to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self
            .to_json()
            .context("Failed to serialize encoded formula")?;
        std::fs::write(&path, json).with_context(|| {
            format!("Failed to write formula to {}", path.as_ref().display())
        })?;
        Ok(())
    }

    /// One-line summary for console output
    pub fn summary(&self) -> String {
        format!(
            "{}x{} puzzle, {} prefilled cells, {} conjuncts, {} characters, encoded in {:.3}ms",
            self.statistics.size,
            self.statistics.size,
            self.statistics.counts.prefill,
            self.statistics.counts.total(),
            self.formula.len(),
            self.encode_time.as_secs_f64() * 1000.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::FormulaEncoder;
    use crate::sudoku::SudokuGrid;

    fn example_formula() -> EncodedFormula {
        let cells = vec![
            vec![0, 0, 4, 0],
            vec![0, 1, 0, 3],
            vec![0, 2, 0, 0],
            vec![0, 0, 0, 0],
        ];
        let grid = SudokuGrid::from_cells(cells, 2).unwrap();
        let encoder = FormulaEncoder::new(4, 2);
        let (formula, statistics) = encoder.encode_with_statistics(&grid).unwrap();

        EncodedFormula::new(formula, statistics, Duration::from_millis(1))
    }

    #[test]
    fn test_json_round_trip() {
        let original = example_formula();
        let json = original.to_json().unwrap();
        let restored = EncodedFormula::from_json(&json).unwrap();

        assert_eq!(original.formula, restored.formula);
        assert_eq!(original.statistics.counts, restored.statistics.counts);
        assert_eq!(original.encode_time, restored.encode_time);
    }

    #[test]
    fn test_summary() {
        let result = example_formula();
        let summary = result.summary();

        assert!(summary.contains("4x4 puzzle"));
        assert!(summary.contains("4 prefilled cells"));
        assert!(summary.contains("356 conjuncts"));
    }
}
