//! Salary unit conversion.
//!
//! Converts an hourly rate into a daily salary and a daily salary into a
//! monthly one, using the regular-hours and days-per-month policy defaults.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{DEFAULT_DAYS_PER_MONTH, DEFAULT_REGULAR_HOURS_DAILY};
use crate::error::{EngineError, EngineResult};

use super::rounding::{ensure_non_negative, round_money};

/// Converts an hourly rate into a daily salary.
///
/// `hours_per_day` defaults to the regular 8-hour day.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::calculate_daily_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let daily = calculate_daily_salary(Decimal::from_str("31.25").unwrap(), None).unwrap();
/// assert_eq!(daily, Decimal::from_str("250.00").unwrap());
/// ```
pub fn calculate_daily_salary(
    hourly_rate: Decimal,
    hours_per_day: Option<Decimal>,
) -> EngineResult<Decimal> {
    ensure_non_negative("hourly_rate", hourly_rate)?;
    let hours_per_day = hours_per_day.unwrap_or(DEFAULT_REGULAR_HOURS_DAILY);
    ensure_non_negative("hours_per_day", hours_per_day)?;

    let daily_salary = round_money(
        hourly_rate
            .checked_mul(hours_per_day)
            .ok_or_else(|| EngineError::out_of_range("daily_salary"))?,
    );
    debug!(%hourly_rate, %hours_per_day, %daily_salary, "Converted hourly rate to daily salary");
    Ok(daily_salary)
}

/// Converts a daily salary into a monthly salary.
///
/// `days_per_month` defaults to 30.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::calculate_monthly_salary;
/// use rust_decimal::Decimal;
///
/// let monthly = calculate_monthly_salary(Decimal::new(300, 0), None).unwrap();
/// assert_eq!(monthly, Decimal::new(9000, 0));
/// ```
pub fn calculate_monthly_salary(
    daily_salary: Decimal,
    days_per_month: Option<Decimal>,
) -> EngineResult<Decimal> {
    ensure_non_negative("daily_salary", daily_salary)?;
    let days_per_month = days_per_month.unwrap_or(DEFAULT_DAYS_PER_MONTH);
    ensure_non_negative("days_per_month", days_per_month)?;

    let monthly_salary = round_money(
        daily_salary
            .checked_mul(days_per_month)
            .ok_or_else(|| EngineError::out_of_range("monthly_salary"))?,
    );
    debug!(%daily_salary, %days_per_month, %monthly_salary, "Converted daily salary to monthly salary");
    Ok(monthly_salary)
}
