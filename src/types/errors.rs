use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AmountError {
    #[error("Amount error: [{0}] is positive but cannot be represented as a decimal")]
    OutOfRange(String)
}
