use indexmap::IndexMap;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Number;
use tracing::trace;

use crate::types::errors::AmountError;
use crate::types::Amount;

/// Converts a JSON number into an exact decimal amount.
///
/// Integers are converted losslessly. Floating point values go through
/// `Decimal::from_f64`. A non-positive value the decimal range cannot hold is
/// clamped to `Decimal::MIN` or zero, since it is only ever rejected by the
/// valid-transaction filter.
///
/// # Errors
/// Returns `AmountError::OutOfRange` for a positive value that is too large,
/// or too close to zero, for a `Decimal`.
pub fn amount_from_number(number: &Number) -> Result<Amount, AmountError> {
    if let Some(value) = number.as_i64() {
        return Ok(Amount::from(value));
    }

    if let Some(value) = number.as_u64() {
        return Ok(Amount::from(value));
    }

    let Some(value) = number.as_f64() else {
        return Err(AmountError::OutOfRange(number.to_string()))
    };

    match Amount::from_f64(value) {
        Some(amount) if value == 0.0 || !amount.is_zero() => Ok(amount),
        _ if value > 0.0 => Err(AmountError::OutOfRange(number.to_string())),
        _ if value <= -1.0 => {
            trace!("Amount [{number}] is below the decimal range, clamping");
            Ok(Amount::MIN)
        }
        _ => Ok(Amount::ZERO)
    }
}

/// Writes an amount as a JSON integer when it is whole, otherwise as a float.
pub fn serialize_amount<S>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let normalized = amount.normalize();

    if normalized.scale() == 0 {
        if let Some(whole) = normalized.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }

    match normalized.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => serializer.serialize_str(&normalized.to_string())
    }
}

pub fn serialize_amount_map<K, S>(amounts: &IndexMap<K, Amount>, serializer: S) -> Result<S::Ok, S::Error>
where
    K: Serialize,
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(amounts.len()))?;

    for (key, amount) in amounts {
        map.serialize_entry(key, &JsonAmount(amount))?;
    }

    map.end()
}

/// Borrowed amount that serializes through [`serialize_amount`].
pub struct JsonAmount<'a>(pub &'a Amount);

impl Serialize for JsonAmount<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_amount(self.0, serializer)
    }
}
