//! Finiquito (termination settlement) input and result records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_VACATION_BONUS_PCT;

/// Inputs for a termination settlement.
///
/// `proportional_aguinaldo` is an amount the caller has already prorated;
/// the settlement never derives it from tenure itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiniquitoInput {
    /// Daily salary.
    pub daily_salary: Decimal,
    /// Worked days not yet paid.
    pub pending_days: Decimal,
    /// Vacation days owed.
    pub vacations: Decimal,
    /// Vacation bonus as a fraction of vacation pay.
    #[serde(default = "default_vacation_bonus_pct")]
    pub vacation_bonus_pct: Decimal,
    /// Prorated aguinaldo amount supplied by the caller.
    pub proportional_aguinaldo: Decimal,
}

fn default_vacation_bonus_pct() -> Decimal {
    DEFAULT_VACATION_BONUS_PCT
}

impl FiniquitoInput {
    /// Creates an input with the default 25% vacation bonus.
    pub fn new(
        daily_salary: Decimal,
        pending_days: Decimal,
        vacations: Decimal,
        proportional_aguinaldo: Decimal,
    ) -> Self {
        Self {
            daily_salary,
            pending_days,
            vacations,
            vacation_bonus_pct: DEFAULT_VACATION_BONUS_PCT,
            proportional_aguinaldo,
        }
    }

    /// Replaces the vacation bonus fraction.
    pub fn with_vacation_bonus_pct(mut self, vacation_bonus_pct: Decimal) -> Self {
        self.vacation_bonus_pct = vacation_bonus_pct;
        self
    }
}

/// Computed termination settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiniquitoResult {
    /// Echo of the input daily salary.
    pub daily_salary: Decimal,
    /// Echo of the input pending days.
    pub pending_days: Decimal,
    /// Echo of the input vacation days.
    pub vacations: Decimal,
    /// Echo of the input vacation bonus fraction.
    pub vacation_bonus_pct: Decimal,
    /// Echo of the prorated aguinaldo.
    pub proportional_aguinaldo: Decimal,
    /// pending_days × daily_salary.
    pub pending_pay: Decimal,
    /// vacations × daily_salary.
    pub vacation_pay: Decimal,
    /// vacation_pay × vacation_bonus_pct.
    pub vacation_bonus: Decimal,
    /// pending_pay + vacation_pay + vacation_bonus + proportional_aguinaldo.
    pub total_finiquito: Decimal,
    /// When the result was computed.
    pub calculated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_vacation_bonus_pct() {
        let json = r#"{
            "dailySalary": 300,
            "pendingDays": 5,
            "vacations": 6,
            "proportionalAguinaldo": 1500
        }"#;
        let input: FiniquitoInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.vacation_bonus_pct, Decimal::new(25, 2));
    }

    #[test]
    fn test_missing_proportional_aguinaldo_is_rejected() {
        let json = r#"{"dailySalary": 300, "pendingDays": 5, "vacations": 6}"#;
        let result: Result<FiniquitoInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
