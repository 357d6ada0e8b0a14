use std::hash::Hash;
use std::mem::take;

use indexmap::IndexMap;
use rust_decimal::RoundingStrategy;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::models::{AnalysisError, Summary, Transaction, TransactionType};
use crate::types::{Amount, LARGE_TRANSACTION_THRESHOLD, SMALL_TRANSACTION_FLOOR, UNCATEGORIZED};

/// A record of the valid-transaction set, with its type and amount already checked.
struct Entry<'a> {
    record: &'a Transaction,
    transaction_type: TransactionType,
    amount: Amount
}

/// Aggregates a batch of transaction records into a [`Summary`].
///
/// The analyzer holds no state between calls; each call filters its input
/// down to the valid-transaction set and derives every field from that set.
#[derive(Debug, Clone)]
pub struct Analyzer {
    large_threshold: Amount,
    floor: Amount
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an analyzer with the standard thresholds (large at 5000, floor at 100).
    pub fn new() -> Self {
        Self {
            large_threshold: Amount::from(LARGE_TRANSACTION_THRESHOLD),
            floor: Amount::from(SMALL_TRANSACTION_FLOOR)
        }
    }

    /// Amount at or above which a transaction counts as large.
    pub fn with_large_threshold(mut self, threshold: Amount) -> Self {
        self.large_threshold = threshold;
        self
    }

    /// Amount every transaction must strictly exceed for `all_above100`.
    pub fn with_floor(mut self, floor: Amount) -> Self {
        self.floor = floor;
        self
    }

    /// Analyzes a dynamically shaped batch, such as a parsed JSON document.
    ///
    /// # Errors
    /// Returns `AnalysisError::NotASequence` when `input` is not an array,
    /// `AnalysisError::AmountOutOfRange` when a credit or debit carries a positive
    /// amount a `Decimal` cannot hold, and otherwise whatever [`Analyzer::analyze`]
    /// returns for its elements.
    pub fn analyze_value(&self, input: &Value) -> Result<Summary, AnalysisError> {
        let Value::Array(records) = input else {
            return Err(AnalysisError::NotASequence)
        };

        let transactions = records.iter()
            .enumerate()
            .map(|(position, record)| {
                Transaction::from_value(record).map_err(|error| {
                    error!("{error}");
                    AnalysisError::AmountOutOfRange { position }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.analyze(&transactions)
    }

    /// Analyzes a batch of records.
    ///
    /// # Errors
    /// Returns `AnalysisError` if:
    /// - The batch is empty.
    /// - No record survives the valid-transaction filter.
    /// - A decimal sum leaves the representable range.
    pub fn analyze(&self, transactions: &[Transaction]) -> Result<Summary, AnalysisError> {
        if transactions.is_empty() {
            return Err(AnalysisError::EmptySequence)
        }

        let entries = valid_entries(transactions);

        let Some((first, rest)) = entries.split_first() else {
            return Err(AnalysisError::NoValidTransactions { total: transactions.len() })
        };

        info!("Analyzing [{}] valid transactions, [{}] skipped", entries.len(), transactions.len() - entries.len());

        let highest_transaction = highest(first, rest).clone();

        let total_credit = sum_of(&entries, TransactionType::Credit, "totalCredit")?;
        let total_debit = sum_of(&entries, TransactionType::Debit, "totalDebit")?;

        let net_balance = total_credit.checked_sub(total_debit)
            .ok_or(AnalysisError::Overflow { field: "netBalance" })?;

        let total = total_credit.checked_add(total_debit)
            .ok_or(AnalysisError::Overflow { field: "avgTransaction" })?;

        let avg_transaction = total.checked_div(Amount::from(entries.len()))
            .ok_or(AnalysisError::Overflow { field: "avgTransaction" })?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let category_breakdown = tally(
            &entries,
            |entry| Some(entry.record.category.clone().unwrap_or_else(|| UNCATEGORIZED.to_string())),
            |sum: Amount, entry| sum.checked_add(entry.amount).ok_or(AnalysisError::Overflow { field: "categoryBreakdown" })
        )?;

        let contact_counts = tally(
            &entries,
            |entry| entry.record.to.as_deref(),
            |count: usize, _| Ok::<_, AnalysisError>(count + 1)
        )?;

        Ok(Summary {
            total_credit,
            total_debit,
            net_balance,
            transaction_count: entries.len(),
            avg_transaction,
            highest_transaction,
            category_breakdown,
            frequent_contact: frequent_contact(&contact_counts),
            all_above100: entries.iter().all(|entry| entry.amount > self.floor),
            has_large_transaction: entries.iter().any(|entry| entry.amount >= self.large_threshold)
        })
    }
}

fn valid_entries(transactions: &[Transaction]) -> Vec<Entry<'_>> {
    let mut entries = Vec::with_capacity(transactions.len());

    for (position, record) in transactions.iter().enumerate() {
        match record.classify() {
            Ok((transaction_type, amount)) => entries.push(Entry { record, transaction_type, amount }),
            Err(rejection) => debug!("Skipping transaction [{}] at position [{position}]: {rejection}", record.id.as_deref().unwrap_or("-"))
        }
    }

    entries
}

fn sum_of(entries: &[Entry<'_>], transaction_type: TransactionType, field: &'static str) -> Result<Amount, AnalysisError> {
    entries.iter()
        .filter(|entry| entry.transaction_type == transaction_type)
        .try_fold(Amount::ZERO, |sum, entry| {
            sum.checked_add(entry.amount).ok_or(AnalysisError::Overflow { field })
        })
}

/// Folds entries into per-key accumulators, keeping keys in first-seen order.
///
/// Entries for which `key` returns `None` are left out.
fn tally<'a, K, V, E>(
    entries: &[Entry<'a>],
    key: impl Fn(&Entry<'a>) -> Option<K>,
    accumulate: impl Fn(V, &Entry<'a>) -> Result<V, E>
) -> Result<IndexMap<K, V>, E>
where
    K: Hash + Eq,
    V: Default,
{
    let mut totals = IndexMap::new();

    for entry in entries {
        let Some(key) = key(entry) else {
            continue
        };

        let slot = totals.entry(key).or_insert_with(V::default);
        *slot = accumulate(take(slot), entry)?;
    }

    Ok(totals)
}

/// First record in input order holding the largest amount.
fn highest<'a>(first: &Entry<'a>, rest: &[Entry<'a>]) -> &'a Transaction {
    rest.iter()
        .fold(first, |best, entry| if entry.amount > best.amount { entry } else { best })
        .record
}

fn frequent_contact(counts: &IndexMap<&str, usize>) -> Option<String> {
    counts.iter()
        .max_by(|(left_name, left_count), (right_name, right_count)| {
            left_count.cmp(right_count).then_with(|| right_name.cmp(left_name))
        })
        .map(|(name, _)| name.to_string())
}
