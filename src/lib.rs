//! Transaction log analysis.
//!
//! A batch of `credit`/`debit` records is filtered down to its valid
//! transactions and reduced to a fixed-shape [`Summary`](models::Summary):
//! totals, net balance, average, the highest transaction, a per-category
//! breakdown, the most frequent counterparty and two threshold flags.
//!
//! - `types`  - amount and identifier aliases, thresholds
//! - `models` - the transaction record, the summary and error types
//! - `engine` - the analyzer itself
//! - `ingest` - loading JSON or CSV logs from disk

pub mod engine;
pub mod ingest;
pub mod models;
pub mod types;

pub use engine::{analyze, analyze_value, Analyzer};
pub use models::{AnalysisError, Summary, Transaction, TransactionType};
