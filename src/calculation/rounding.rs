//! Shared rounding policy and input validation.
//!
//! Every calculator rounds each output field on its own, immediately after
//! computing it, rather than once at the end of a chain.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Number of fraction digits kept on every monetary and day-count output.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to the nearest cent, half away from zero.
///
/// The result carries exactly two fraction digits so serialized amounts
/// read `1500.00` rather than `1500`. Values with more than 26 integer
/// digits keep the scale they can hold.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("2.675").unwrap()).to_string(), "2.68");
/// assert_eq!(round_money(Decimal::from_str("1500").unwrap()).to_string(), "1500.00");
/// assert_eq!(round_money(Decimal::from_str("-0.125").unwrap()).to_string(), "-0.13");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

/// Fails with [`EngineError::InvalidArgument`] when `value` is negative.
pub fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid_argument(
            field,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}
