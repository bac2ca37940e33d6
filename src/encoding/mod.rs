//! Encoding problem definition, result type and formula verification

pub mod problem;
pub mod formula;
pub mod verifier;

pub use problem::EncodingProblem;
pub use formula::EncodedFormula;
pub use verifier::{FormulaVerifier, VerificationResult};
