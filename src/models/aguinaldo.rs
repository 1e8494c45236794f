//! Aguinaldo (year-end bonus) input and result records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_AGUINALDO_DAYS;

/// Inputs for the annual aguinaldo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AguinaldoInput {
    /// Daily salary.
    pub daily_salary: Decimal,
    /// Base aguinaldo days per year.
    #[serde(default = "default_days_per_year")]
    pub days_per_year: Decimal,
    /// Years of service. Fractions are truncated before the tenure increment.
    pub tenure_years: Decimal,
}

fn default_days_per_year() -> Decimal {
    DEFAULT_AGUINALDO_DAYS
}

impl AguinaldoInput {
    /// Creates an input with the default 15 base days.
    pub fn new(daily_salary: Decimal, tenure_years: Decimal) -> Self {
        Self {
            daily_salary,
            days_per_year: DEFAULT_AGUINALDO_DAYS,
            tenure_years,
        }
    }

    /// Replaces the base day count.
    pub fn with_days_per_year(mut self, days_per_year: Decimal) -> Self {
        self.days_per_year = days_per_year;
        self
    }
}

/// Computed aguinaldo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AguinaldoResult {
    /// Echo of the input daily salary.
    pub daily_salary: Decimal,
    /// Echo of the input tenure.
    pub tenure_years: Decimal,
    /// Base days (the input `days_per_year`).
    pub base_days: Decimal,
    /// Half a day per whole year of tenure.
    pub additional_days: Decimal,
    /// base_days + additional_days.
    pub total_days: Decimal,
    /// daily_salary × total_days.
    pub aguinaldo_amount: Decimal,
    /// When the result was computed.
    pub calculated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_days_per_year() {
        let input: AguinaldoInput =
            serde_json::from_str(r#"{"dailySalary": 300, "tenureYears": 2.7}"#).unwrap();
        assert_eq!(input.days_per_year, Decimal::new(15, 0));
        assert_eq!(input.tenure_years, Decimal::new(27, 1));
    }

    #[test]
    fn test_with_days_per_year_overrides_default() {
        let input = AguinaldoInput::new(Decimal::new(300, 0), Decimal::ONE)
            .with_days_per_year(Decimal::new(30, 0));
        assert_eq!(input.days_per_year, Decimal::new(30, 0));
    }
}
