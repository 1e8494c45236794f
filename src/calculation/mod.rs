//! Calculation logic for the payroll calculation engine.
//!
//! This module contains the pure calculators (weekly pay, aguinaldo and
//! finiquito), the salary unit converters, aguinaldo proration and the
//! shared rounding policy they all apply. Calculators never call each
//! other; callers compose them.

mod aguinaldo;
mod finiquito;
mod proration;
mod rounding;
mod salary_units;
mod weekly_pay;

pub use aguinaldo::{ADDITIONAL_DAYS_PER_TENURE_YEAR, compute_aguinaldo};
pub use finiquito::compute_finiquito;
pub use proration::prorate_aguinaldo;
pub use rounding::{MONEY_DECIMAL_PLACES, ensure_non_negative, round_money};
pub use salary_units::{calculate_daily_salary, calculate_monthly_salary};
pub use weekly_pay::compute_weekly_pay;
