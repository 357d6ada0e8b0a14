mod errors;
mod summary;
mod transaction;

use serde::Serialize;

pub use errors::{AnalysisError, Rejection};
pub use summary::Summary;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit
}

impl TransactionType {
    /// Parses a case-sensitive type tag. Anything other than `credit` or `debit` is not a type.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "credit" => Some(Self::Credit),
            "debit" => Some(Self::Debit),
            _ => None
        }
    }
}
