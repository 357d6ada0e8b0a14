mod analyzer;

use serde_json::Value;

use crate::models::{AnalysisError, Summary, Transaction};

pub use analyzer::Analyzer;

/// Analyzes a typed batch with the default thresholds.
pub fn analyze(transactions: &[Transaction]) -> Result<Summary, AnalysisError> {
    Analyzer::new().analyze(transactions)
}

/// Analyzes a dynamic batch with the default thresholds.
pub fn analyze_value(input: &Value) -> Result<Summary, AnalysisError> {
    Analyzer::new().analyze_value(input)
}
