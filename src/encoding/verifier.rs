//! Structural verification of generated formulas
//!
//! The verifier checks the textual contract of the output: balanced
//! parentheses, no empty top-level conjuncts, and a conjunct count that
//! matches the closed-form expectations for the puzzle geometry.

use crate::sat::ConstraintCounts;
use std::fmt;

/// Checks a formula string against the output contract
pub struct FormulaVerifier;

impl FormulaVerifier {
    /// Verify a formula against the expected constraint counts
    pub fn verify(formula: &str, expected: &ConstraintCounts) -> VerificationResult {
        if let Err(message) = check_parentheses(formula) {
            return VerificationResult::invalid(0, expected.total(), message);
        }

        if formula.is_empty() {
            // Degenerate geometry: an empty formula is valid iff nothing
            // was expected.
            let is_valid = expected.total() == 0;
            return VerificationResult {
                is_valid,
                conjunct_count: 0,
                expected_conjuncts: expected.total(),
                error_message: (!is_valid).then(|| "Formula is empty".to_string()),
            };
        }

        let conjuncts = split_top_level(formula);

        if let Some(position) = conjuncts.iter().position(|part| part.is_empty()) {
            return VerificationResult::invalid(
                conjuncts.len(),
                expected.total(),
                format!("Empty conjunct at position {position}"),
            );
        }

        if conjuncts.len() != expected.total() {
            return VerificationResult::invalid(
                conjuncts.len(),
                expected.total(),
                format!(
                    "Formula has {} top-level conjuncts, expected {}",
                    conjuncts.len(),
                    expected.total()
                ),
            );
        }

        VerificationResult {
            is_valid: true,
            conjunct_count: conjuncts.len(),
            expected_conjuncts: expected.total(),
            error_message: None,
        }
    }
}

/// Split a formula on `&` at parenthesis depth zero
///
/// The `&` inside exclusion clauses like `~(a & b)` sits at depth one and
/// is left alone, so the pieces are exactly the generated constraints.
pub fn split_top_level(formula: &str) -> Vec<&str> {
    let mut conjuncts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in formula.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '&' if depth == 0 => {
                conjuncts.push(formula[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    conjuncts.push(formula[start..].trim());

    conjuncts
}

fn check_parentheses(formula: &str) -> Result<(), String> {
    let mut depth = 0i64;
    for (i, ch) in formula.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(format!("Unmatched ')' at byte {i}"));
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(format!("{depth} unclosed '('"));
    }

    Ok(())
}

/// Outcome of verifying one formula
#[derive(Debug, Clone)]
pub struct VerificationResult {
    pub is_valid: bool,
    pub conjunct_count: usize,
    pub expected_conjuncts: usize,
    pub error_message: Option<String>,
}

impl VerificationResult {
    fn invalid(conjunct_count: usize, expected_conjuncts: usize, message: String) -> Self {
        Self {
            is_valid: false,
            conjunct_count,
            expected_conjuncts,
            error_message: Some(message),
        }
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Verification Result:")?;
        writeln!(f, "  Valid: {}", self.is_valid)?;
        writeln!(
            f,
            "  Top-level conjuncts: {} (expected {})",
            self.conjunct_count, self.expected_conjuncts
        )?;
        if let Some(ref message) = self.error_message {
            writeln!(f, "  Error: {}", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::FormulaEncoder;
    use crate::sudoku::SudokuGrid;

    fn counts(cell: usize, row: usize, column: usize, block: usize, prefill: usize) -> ConstraintCounts {
        ConstraintCounts {
            cell,
            row,
            column,
            block,
            prefill,
        }
    }

    #[test]
    fn test_split_ignores_nested_and() {
        let parts = split_top_level("(c_111 | c_112) & ~(c_111 & c_211) & c_134");
        assert_eq!(parts, vec!["(c_111 | c_112)", "~(c_111 & c_211)", "c_134"]);
    }

    #[test]
    fn test_split_single_conjunct() {
        assert_eq!(split_top_level("c_111"), vec!["c_111"]);
    }

    #[test]
    fn test_verify_encoded_formula() {
        let cells = vec![
            vec![0, 0, 4, 0],
            vec![0, 1, 0, 3],
            vec![0, 2, 0, 0],
            vec![0, 0, 0, 0],
        ];
        let grid = SudokuGrid::from_cells(cells, 2).unwrap();
        let encoder = FormulaEncoder::new(4, 2);
        let (formula, statistics) = encoder.encode_with_statistics(&grid).unwrap();

        let result = FormulaVerifier::verify(&formula, &statistics.counts);
        assert!(result.is_valid, "{result}");
        assert_eq!(result.conjunct_count, 356);
    }

    #[test]
    fn test_verify_rejects_unbalanced_parentheses() {
        let result = FormulaVerifier::verify("(c_111 | c_112", &counts(1, 0, 0, 0, 0));
        assert!(!result.is_valid);

        let result = FormulaVerifier::verify("c_111) & c_112", &counts(0, 0, 0, 0, 2));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_verify_rejects_count_mismatch() {
        let result = FormulaVerifier::verify("c_111 & c_112", &counts(0, 0, 0, 0, 3));
        assert!(!result.is_valid);
        assert_eq!(result.conjunct_count, 2);
        assert_eq!(result.expected_conjuncts, 3);
    }

    #[test]
    fn test_verify_rejects_empty_conjunct() {
        let result = FormulaVerifier::verify("c_111 &  & c_112", &counts(0, 0, 0, 0, 3));
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("Empty conjunct"));
    }

    #[test]
    fn test_verify_empty_formula() {
        let none = counts(0, 0, 0, 0, 0);
        assert!(FormulaVerifier::verify("", &none).is_valid);

        let some = counts(1, 0, 0, 0, 0);
        assert!(!FormulaVerifier::verify("", &some).is_valid);
    }
}
