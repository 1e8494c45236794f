//! Weekly pay calculation.
//!
//! Computes regular pay, overtime pay, bonuses, deductions, gross pay and
//! net pay for a single pay period.

use chrono::Utc;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{WeeklyPayInput, WeeklyPayResult, sum_amounts};

use super::rounding::{ensure_non_negative, round_money};

/// Computes the pay for one weekly period.
///
/// Bonus and deduction entries that are not numeric count as zero. Each
/// monetary field is rounded to cents on its own; `gross_pay` and `net_pay`
/// are rounded from the unrounded components, so they can differ by a cent
/// from a sum of the rounded fields.
///
/// # Errors
///
/// Returns `InvalidArgument` if `hourly_rate`, `hours`, `overtime_hours` or
/// `overtime_factor` is negative, or if an amount leaves the representable
/// decimal range (the error then names the output field).
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::compute_weekly_pay;
/// use nomina_engine::models::WeeklyPayInput;
/// use rust_decimal::Decimal;
///
/// let input = WeeklyPayInput::new(Decimal::new(30, 0), Decimal::new(40, 0), Decimal::new(5, 0));
/// let result = compute_weekly_pay(&input).unwrap();
///
/// assert_eq!(result.regular_pay, Decimal::new(1200, 0));
/// assert_eq!(result.overtime_pay, Decimal::new(225, 0));
/// assert_eq!(result.gross_pay, Decimal::new(1425, 0));
/// ```
pub fn compute_weekly_pay(input: &WeeklyPayInput) -> EngineResult<WeeklyPayResult> {
    ensure_non_negative("hourly_rate", input.hourly_rate)?;
    ensure_non_negative("hours", input.hours)?;
    ensure_non_negative("overtime_hours", input.overtime_hours)?;
    ensure_non_negative("overtime_factor", input.overtime_factor)?;

    let regular_pay = input
        .hours
        .checked_mul(input.hourly_rate)
        .ok_or_else(|| EngineError::out_of_range("regular_pay"))?;
    let overtime_pay = input
        .overtime_hours
        .checked_mul(input.hourly_rate)
        .and_then(|pay| pay.checked_mul(input.overtime_factor))
        .ok_or_else(|| EngineError::out_of_range("overtime_pay"))?;
    let total_bonuses = sum_amounts("bonuses", &input.bonuses)?;
    let total_deductions = sum_amounts("deductions", &input.deductions)?;
    let gross_pay = regular_pay
        .checked_add(overtime_pay)
        .and_then(|pay| pay.checked_add(total_bonuses))
        .ok_or_else(|| EngineError::out_of_range("gross_pay"))?;
    let net_pay = gross_pay
        .checked_sub(total_deductions)
        .ok_or_else(|| EngineError::out_of_range("net_pay"))?;

    let skipped = input
        .bonuses
        .iter()
        .chain(input.deductions.iter())
        .filter(|entry| entry.is_invalid())
        .count();

    let result = WeeklyPayResult {
        hourly_rate: input.hourly_rate,
        hours: input.hours,
        overtime_hours: input.overtime_hours,
        regular_pay: round_money(regular_pay),
        overtime_pay: round_money(overtime_pay),
        total_bonuses: round_money(total_bonuses),
        total_deductions: round_money(total_deductions),
        gross_pay: round_money(gross_pay),
        net_pay: round_money(net_pay),
        calculated_at: Utc::now(),
    };

    debug!(
        hourly_rate = %input.hourly_rate,
        hours = %input.hours,
        overtime_hours = %input.overtime_hours,
        skipped_entries = skipped,
        gross_pay = %result.gross_pay,
        net_pay = %result.net_pay,
        "Computed weekly pay"
    );

    Ok(result)
}
