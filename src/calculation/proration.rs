//! Aguinaldo proration for partial years of service.
//!
//! A caller-side helper: it scales an already computed annual aguinaldo to
//! the days actually worked, producing the `proportional_aguinaldo` amount a
//! finiquito expects. It never computes the annual amount itself.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::DEFAULT_DAYS_IN_YEAR;
use crate::error::{EngineError, EngineResult};

use super::rounding::{ensure_non_negative, round_money};

/// Scales an annual aguinaldo to `days_worked` out of `days_in_year`.
///
/// `days_in_year` defaults to 365. Days worked beyond a full year are
/// capped at the full annual amount.
///
/// # Errors
///
/// Returns `InvalidArgument` for negative inputs, a zero-length year, or an
/// amount that leaves the decimal range.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::prorate_aguinaldo;
/// use rust_decimal::Decimal;
///
/// // Half a year of a 4,650 aguinaldo, on a 360-day commercial year.
/// let amount = prorate_aguinaldo(
///     Decimal::new(4650, 0),
///     Decimal::new(180, 0),
///     Some(Decimal::new(360, 0)),
/// )
/// .unwrap();
/// assert_eq!(amount, Decimal::new(2325, 0));
/// ```
pub fn prorate_aguinaldo(
    annual_amount: Decimal,
    days_worked: Decimal,
    days_in_year: Option<Decimal>,
) -> EngineResult<Decimal> {
    ensure_non_negative("annual_amount", annual_amount)?;
    ensure_non_negative("days_worked", days_worked)?;
    let days_in_year = days_in_year.unwrap_or(DEFAULT_DAYS_IN_YEAR);
    if days_in_year <= Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            "days_in_year",
            format!("must be positive, got {}", days_in_year),
        ));
    }

    let worked = days_worked.min(days_in_year);
    let proportional = round_money(
        annual_amount
            .checked_mul(worked)
            .and_then(|scaled| scaled.checked_div(days_in_year))
            .ok_or_else(|| EngineError::out_of_range("proportional_aguinaldo"))?,
    );

    debug!(
        %annual_amount,
        %days_worked,
        %days_in_year,
        %proportional,
        "Prorated aguinaldo"
    );

    Ok(proportional)
}
