//! Request types for the payroll engine API.
//!
//! Optional fields are resolved against the loaded [`PolicyConstants`]
//! rather than the compiled-in defaults, so a deployment can tune them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PolicyConstants;
use crate::models::{AguinaldoInput, Amount, FiniquitoInput, WeeklyPayInput};

/// Request body for `POST /weekly-pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPayRequest {
    /// Pay per regular hour.
    pub hourly_rate: Decimal,
    /// Regular hours worked.
    pub hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Overtime multiplier; the policy default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_factor: Option<Decimal>,
    /// Bonus entries.
    #[serde(default)]
    pub bonuses: Vec<Amount>,
    /// Deduction entries.
    #[serde(default)]
    pub deductions: Vec<Amount>,
}

impl WeeklyPayRequest {
    /// Converts the request into calculator input.
    pub fn into_input(self, policy: &PolicyConstants) -> WeeklyPayInput {
        WeeklyPayInput {
            hourly_rate: self.hourly_rate,
            hours: self.hours,
            overtime_hours: self.overtime_hours,
            overtime_factor: self.overtime_factor.unwrap_or(policy.overtime_factor),
            bonuses: self.bonuses,
            deductions: self.deductions,
        }
    }
}

/// Request body for `POST /aguinaldo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AguinaldoRequest {
    /// Daily salary.
    pub daily_salary: Decimal,
    /// Base days; the policy default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_per_year: Option<Decimal>,
    /// Years of service.
    pub tenure_years: Decimal,
}

impl AguinaldoRequest {
    /// Converts the request into calculator input.
    pub fn into_input(self, policy: &PolicyConstants) -> AguinaldoInput {
        AguinaldoInput {
            daily_salary: self.daily_salary,
            days_per_year: self.days_per_year.unwrap_or(policy.aguinaldo_days_default),
            tenure_years: self.tenure_years,
        }
    }
}

/// Request body for `POST /finiquito`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiniquitoRequest {
    /// Daily salary.
    pub daily_salary: Decimal,
    /// Worked days not yet paid.
    pub pending_days: Decimal,
    /// Vacation days owed.
    pub vacations: Decimal,
    /// Vacation bonus fraction; the policy default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacation_bonus_pct: Option<Decimal>,
    /// Prorated aguinaldo amount.
    pub proportional_aguinaldo: Decimal,
}

impl FiniquitoRequest {
    /// Converts the request into calculator input.
    pub fn into_input(self, policy: &PolicyConstants) -> FiniquitoInput {
        FiniquitoInput {
            daily_salary: self.daily_salary,
            pending_days: self.pending_days,
            vacations: self.vacations,
            vacation_bonus_pct: self
                .vacation_bonus_pct
                .unwrap_or(policy.vacation_bonus_percentage),
            proportional_aguinaldo: self.proportional_aguinaldo,
        }
    }
}

/// Request body for `POST /aguinaldo/prorate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProrateRequest {
    /// Annual aguinaldo amount.
    pub annual_amount: Decimal,
    /// Days worked in the period.
    pub days_worked: Decimal,
    /// Length of the year; 365 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_in_year: Option<Decimal>,
}

/// Request body for `POST /salary/daily`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySalaryRequest {
    /// Pay per hour.
    pub hourly_rate: Decimal,
    /// Hours per day; the policy's regular daily hours when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_day: Option<Decimal>,
}

/// Request body for `POST /salary/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySalaryRequest {
    /// Daily salary.
    pub daily_salary: Decimal,
    /// Days per month; the policy default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_per_month: Option<Decimal>,
}

/// Request body for `POST /format/currency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatCurrencyRequest {
    /// Amount to render; absent or non-numeric renders as the fallback.
    #[serde(default)]
    pub amount: Option<Amount>,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Locale tag.
    #[serde(default)]
    pub locale: Option<String>,
}
