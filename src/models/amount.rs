//! Loosely-typed monetary entries.
//!
//! Bonus and deduction lists arrive from forms where an entry may be blank or
//! garbage. [`Amount`] keeps the raw value of such entries instead of
//! rejecting the whole record, and contributes zero to any sum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A monetary entry that is either a number or an unparseable raw value.
///
/// Deserializes from a JSON number or a numeric string as [`Amount::Numeric`];
/// anything else (`null`, `"abc"`, objects, ...) becomes [`Amount::Invalid`].
///
/// # Example
///
/// ```
/// use nomina_engine::models::Amount;
/// use rust_decimal::Decimal;
///
/// let entries: Vec<Amount> = serde_json::from_str(r#"[100, "50.5", "n/a", null]"#).unwrap();
/// let total: Decimal = entries.iter().map(Amount::value).sum();
/// assert_eq!(total, Decimal::new(1505, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// A well-formed decimal amount.
    Numeric(Decimal),
    /// A non-numeric entry, kept verbatim.
    Invalid(serde_json::Value),
}

impl Amount {
    /// Returns the numeric value, or zero for an invalid entry.
    pub fn value(&self) -> Decimal {
        match self {
            Amount::Numeric(amount) => *amount,
            Amount::Invalid(_) => Decimal::ZERO,
        }
    }

    /// Returns the decimal if this entry is numeric.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Amount::Numeric(amount) => Some(*amount),
            Amount::Invalid(_) => None,
        }
    }

    /// Returns true for entries that will be treated as zero.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Amount::Invalid(_))
    }
}

impl From<Decimal> for Amount {
    fn from(amount: Decimal) -> Self {
        Amount::Numeric(amount)
    }
}

/// Sums a list of entries, counting invalid ones as zero.
///
/// Fails with an out-of-range `InvalidArgument` naming `field` when the
/// total does not fit in a [`Decimal`].
pub fn sum_amounts(field: &str, entries: &[Amount]) -> EngineResult<Decimal> {
    entries.iter().try_fold(Decimal::ZERO, |total, entry| {
        total
            .checked_add(entry.value())
            .ok_or_else(|| EngineError::out_of_range(field))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_number_deserializes_as_numeric() {
        let amount: Amount = serde_json::from_str("250").unwrap();
        assert_eq!(amount, Amount::Numeric(dec("250")));
    }

    #[test]
    fn test_numeric_string_deserializes_as_numeric() {
        let amount: Amount = serde_json::from_str(r#""99.95""#).unwrap();
        assert_eq!(amount.as_decimal(), Some(dec("99.95")));
    }

    #[test]
    fn test_garbage_string_is_invalid() {
        let amount: Amount = serde_json::from_str(r#""bono""#).unwrap();
        assert!(amount.is_invalid());
        assert_eq!(amount.value(), Decimal::ZERO);
        assert_eq!(amount, Amount::Invalid(serde_json::json!("bono")));
    }

    #[test]
    fn test_null_and_objects_are_invalid() {
        let entries: Vec<Amount> = serde_json::from_str(r#"[null, {"x": 1}, true]"#).unwrap();
        assert!(entries.iter().all(Amount::is_invalid));
    }

    #[test]
    fn test_sum_skips_invalid_entries() {
        let entries = vec![
            Amount::from(dec("100")),
            Amount::Invalid(serde_json::json!("abc")),
            Amount::from(dec("25.50")),
        ];
        assert_eq!(sum_amounts("bonuses", &entries).unwrap(), dec("125.50"));
    }

    #[test]
    fn test_sum_of_empty_list_is_zero() {
        assert_eq!(sum_amounts("bonuses", &[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_sum_overflow_is_rejected() {
        let entries = vec![Amount::from(Decimal::MAX), Amount::from(Decimal::MAX)];
        match sum_amounts("bonuses", &entries) {
            Err(EngineError::InvalidArgument { field, message }) => {
                assert_eq!(field, "bonuses");
                assert_eq!(message, "amount out of range");
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_entry_serializes_verbatim() {
        let entries = vec![Amount::from(dec("10")), Amount::Invalid(serde_json::json!(null))];
        let json = serde_json::to_string(&entries).unwrap();
        assert_eq!(json, r#"["10",null]"#);
    }
}
