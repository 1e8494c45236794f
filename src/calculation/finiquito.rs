//! Finiquito (termination settlement) calculation.
//!
//! Composes pending wages, vacation pay, the vacation bonus and a prorated
//! aguinaldo supplied by the caller into a total settlement.

use chrono::Utc;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{FiniquitoInput, FiniquitoResult};

use super::rounding::{ensure_non_negative, round_money};

/// Computes a termination settlement.
///
/// The prorated aguinaldo is taken as given; callers that need one derive it
/// from an aguinaldo result first (see [`super::prorate_aguinaldo`]).
///
/// # Errors
///
/// Returns `InvalidArgument` if any input field is negative, or if an amount
/// leaves the decimal range.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::compute_finiquito;
/// use nomina_engine::models::FiniquitoInput;
/// use rust_decimal::Decimal;
///
/// let input = FiniquitoInput::new(
///     Decimal::new(300, 0),
///     Decimal::new(5, 0),
///     Decimal::new(6, 0),
///     Decimal::new(1500, 0),
/// );
/// let result = compute_finiquito(&input).unwrap();
///
/// assert_eq!(result.vacation_bonus, Decimal::new(450, 0));
/// assert_eq!(result.total_finiquito, Decimal::new(5250, 0));
/// ```
pub fn compute_finiquito(input: &FiniquitoInput) -> EngineResult<FiniquitoResult> {
    ensure_non_negative("daily_salary", input.daily_salary)?;
    ensure_non_negative("pending_days", input.pending_days)?;
    ensure_non_negative("vacations", input.vacations)?;
    ensure_non_negative("vacation_bonus_pct", input.vacation_bonus_pct)?;
    ensure_non_negative("proportional_aguinaldo", input.proportional_aguinaldo)?;

    let pending_pay = input
        .pending_days
        .checked_mul(input.daily_salary)
        .ok_or_else(|| EngineError::out_of_range("pending_pay"))?;
    let vacation_pay = input
        .vacations
        .checked_mul(input.daily_salary)
        .ok_or_else(|| EngineError::out_of_range("vacation_pay"))?;
    let vacation_bonus = vacation_pay
        .checked_mul(input.vacation_bonus_pct)
        .ok_or_else(|| EngineError::out_of_range("vacation_bonus"))?;
    let total_finiquito = [vacation_pay, vacation_bonus, input.proportional_aguinaldo]
        .into_iter()
        .try_fold(pending_pay, |total, part| total.checked_add(part))
        .ok_or_else(|| EngineError::out_of_range("total_finiquito"))?;

    let result = FiniquitoResult {
        daily_salary: input.daily_salary,
        pending_days: input.pending_days,
        vacations: input.vacations,
        vacation_bonus_pct: input.vacation_bonus_pct,
        proportional_aguinaldo: input.proportional_aguinaldo,
        pending_pay: round_money(pending_pay),
        vacation_pay: round_money(vacation_pay),
        vacation_bonus: round_money(vacation_bonus),
        total_finiquito: round_money(total_finiquito),
        calculated_at: Utc::now(),
    };

    debug!(
        daily_salary = %input.daily_salary,
        pending_days = %input.pending_days,
        vacations = %input.vacations,
        total_finiquito = %result.total_finiquito,
        "Computed finiquito"
    );

    Ok(result)
}
