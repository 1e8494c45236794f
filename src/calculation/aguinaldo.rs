//! Aguinaldo (year-end bonus) calculation.
//!
//! The bonus is the daily salary times a base day count, plus half a day for
//! every whole year of tenure.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AguinaldoInput, AguinaldoResult};

use super::rounding::{ensure_non_negative, round_money};

/// Additional aguinaldo days granted per whole year of tenure.
pub const ADDITIONAL_DAYS_PER_TENURE_YEAR: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Computes the annual aguinaldo.
///
/// Tenure is truncated to whole years before the half-day increment, so
/// 2.7 years yields one additional day, not 1.35.
///
/// # Errors
///
/// Returns `InvalidArgument` if `daily_salary`, `days_per_year` or
/// `tenure_years` is negative, or if the amount leaves the decimal range.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::compute_aguinaldo;
/// use nomina_engine::models::AguinaldoInput;
/// use rust_decimal::Decimal;
///
/// let input = AguinaldoInput::new(Decimal::new(300, 0), Decimal::new(5, 0));
/// let result = compute_aguinaldo(&input).unwrap();
///
/// assert_eq!(result.additional_days, Decimal::new(25, 1));
/// assert_eq!(result.total_days, Decimal::new(175, 1));
/// assert_eq!(result.aguinaldo_amount, Decimal::new(5250, 0));
/// ```
pub fn compute_aguinaldo(input: &AguinaldoInput) -> EngineResult<AguinaldoResult> {
    ensure_non_negative("daily_salary", input.daily_salary)?;
    ensure_non_negative("days_per_year", input.days_per_year)?;
    ensure_non_negative("tenure_years", input.tenure_years)?;

    let base_days = input.days_per_year;
    let additional_days = input
        .tenure_years
        .floor()
        .checked_mul(ADDITIONAL_DAYS_PER_TENURE_YEAR)
        .ok_or_else(|| EngineError::out_of_range("additional_days"))?;
    let total_days = base_days
        .checked_add(additional_days)
        .ok_or_else(|| EngineError::out_of_range("total_days"))?;
    let aguinaldo_amount = input
        .daily_salary
        .checked_mul(total_days)
        .ok_or_else(|| EngineError::out_of_range("aguinaldo_amount"))?;

    let result = AguinaldoResult {
        daily_salary: input.daily_salary,
        tenure_years: input.tenure_years,
        base_days: round_money(base_days),
        additional_days: round_money(additional_days),
        total_days: round_money(total_days),
        aguinaldo_amount: round_money(aguinaldo_amount),
        calculated_at: Utc::now(),
    };

    debug!(
        daily_salary = %input.daily_salary,
        tenure_years = %input.tenure_years,
        total_days = %result.total_days,
        aguinaldo_amount = %result.aguinaldo_amount,
        "Computed aguinaldo"
    );

    Ok(result)
}
