mod amount;
mod errors;

pub use amount::{amount_from_number, serialize_amount, serialize_amount_map, JsonAmount};
pub use errors::AmountError;

use rust_decimal::Decimal;

pub type Amount = Decimal;
pub type TransactionId = String;
pub type Contact = String;
pub type Category = String;

/// Amounts at or above this value count as a large transaction.
pub const LARGE_TRANSACTION_THRESHOLD: i64 = 5000;
/// Amounts must be strictly above this value for a batch to be "all above".
pub const SMALL_TRANSACTION_FLOOR: i64 = 100;
/// Bucket used in the category breakdown for records without a category.
pub const UNCATEGORIZED: &str = "uncategorized";
