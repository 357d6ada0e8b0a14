use indexmap::IndexMap;
use serde::Serialize;

use crate::models::Transaction;
use crate::types::{serialize_amount, serialize_amount_map, Amount, Category, Contact};

/// Fixed-shape aggregate of one analysis call over the valid-transaction set.
///
/// Amounts serialize as JSON integers when whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(serialize_with = "serialize_amount")]
    pub total_credit: Amount,
    #[serde(serialize_with = "serialize_amount")]
    pub total_debit: Amount,
    /// Always `total_credit - total_debit`.
    #[serde(serialize_with = "serialize_amount")]
    pub net_balance: Amount,
    pub transaction_count: usize,
    /// Mean amount rounded to an integer, midpoint away from zero.
    #[serde(serialize_with = "serialize_amount")]
    pub avg_transaction: Amount,
    /// First record in input order carrying the maximum amount.
    pub highest_transaction: Transaction,
    /// Credit and debit amounts summed per category, in first-seen order.
    #[serde(serialize_with = "serialize_amount_map")]
    pub category_breakdown: IndexMap<Category, Amount>,
    /// Most common counterparty; ties go to the lexicographically smallest name.
    pub frequent_contact: Option<Contact>,
    pub all_above100: bool,
    pub has_large_transaction: bool
}
