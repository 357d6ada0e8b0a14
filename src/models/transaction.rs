use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::models::{Rejection, TransactionType};
use crate::types::{amount_from_number, Amount, AmountError, Category, Contact, JsonAmount, TransactionId};

/// A single record of a transaction log.
///
/// Every field is optional so that malformed records can be carried through
/// ingestion and dropped by the valid-transaction filter instead of failing
/// the whole batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transaction {
    /// Opaque identifier, only ever passed through.
    pub id: Option<TransactionId>,
    /// `None` when the tag was missing or not `credit`/`debit`.
    pub transaction_type: Option<TransactionType>,
    /// `None` when the source value was missing or not a number.
    pub amount: Option<Amount>,
    /// Counterparty name.
    pub to: Option<Contact>,
    pub category: Option<Category>,
    pub date: Option<String>,
    /// The object this record was read from. When present it is what gets
    /// serialized, so pass-through fields keep their original values.
    pub source: Option<Value>
}

impl Transaction {
    /// Builds a record from one element of a dynamic batch.
    ///
    /// Non-object elements produce an empty record, which never passes the filter.
    ///
    /// # Errors
    /// Returns `AmountError::OutOfRange` when a `credit` or `debit` record carries
    /// a positive amount that does not fit a `Decimal`.
    pub fn from_value(value: &Value) -> Result<Self, AmountError> {
        let Some(fields) = value.as_object() else {
            return Ok(Self::default())
        };

        let transaction_type = fields.get("type")
            .and_then(Value::as_str)
            .and_then(TransactionType::parse);

        let amount = match fields.get("amount") {
            Some(Value::Number(number)) => match amount_from_number(number) {
                Ok(amount) => Some(amount),
                Err(error) if transaction_type.is_some() => return Err(error),
                Err(_) => None
            },
            _ => None
        };

        Ok(Self {
            id: fields.get("id").and_then(text_field),
            transaction_type,
            amount,
            to: fields.get("to").and_then(text_field),
            category: fields.get("category").and_then(text_field),
            date: fields.get("date").and_then(text_field),
            source: Some(value.clone())
        })
    }

    /// Returns the type and amount of a record that belongs to the valid-transaction set.
    ///
    /// # Errors
    /// Returns the first `Rejection` found, checking the amount before the type.
    pub fn classify(&self) -> Result<(TransactionType, Amount), Rejection> {
        let Some(amount) = self.amount else {
            return Err(Rejection::NonNumericAmount)
        };

        if amount <= Amount::ZERO {
            return Err(Rejection::NonPositiveAmount)
        }

        let Some(transaction_type) = self.transaction_type else {
            return Err(Rejection::UnsupportedType)
        };

        Ok((transaction_type, amount))
    }

    pub fn is_valid(&self) -> bool {
        self.classify().is_ok()
    }
}

impl Serialize for Transaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(source) = &self.source {
            return source.serialize(serializer);
        }

        let mut map = serializer.serialize_map(None)?;

        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        if let Some(transaction_type) = &self.transaction_type {
            map.serialize_entry("type", transaction_type)?;
        }
        if let Some(amount) = &self.amount {
            map.serialize_entry("amount", &JsonAmount(amount))?;
        }
        if let Some(to) = &self.to {
            map.serialize_entry("to", to)?;
        }
        if let Some(category) = &self.category {
            map.serialize_entry("category", category)?;
        }
        if let Some(date) = &self.date {
            map.serialize_entry("date", date)?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Transaction::from_value(&value).map_err(de::Error::custom)
    }
}

/// Text view of a pass-through field, used for grouping. The original value is kept in `source`.
fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None
    }
}
