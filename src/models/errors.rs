use thiserror::Error;

/// Reasons an aggregation call produces no summary.
///
/// The first three variants are the invalid-input sentinel: a caller that only
/// cares whether a summary exists can use [`AnalysisError::is_invalid_input`],
/// while the variant itself says which validation step failed.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid input: expected a sequence of transactions")]
    NotASequence,
    #[error("Invalid input: the transaction sequence is empty")]
    EmptySequence,
    #[error("Invalid input: none of the [{total}] transactions are valid")]
    NoValidTransactions {
        total: usize
    },
    #[error("Amount of the transaction at position [{position}] is outside the decimal range")]
    AmountOutOfRange {
        position: usize
    },
    #[error("Numeric overflow while computing [{field}]")]
    Overflow {
        field: &'static str
    }
}

impl AnalysisError {
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::AmountOutOfRange { .. } | Self::Overflow { .. })
    }
}

/// Why a single record is left out of the valid-transaction set.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum Rejection {
    #[error("amount is missing or not a number")]
    NonNumericAmount,
    #[error("amount is not positive")]
    NonPositiveAmount,
    #[error("type is not credit or debit")]
    UnsupportedType
}
