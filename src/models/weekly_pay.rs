//! Weekly pay input and result records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_OVERTIME_FACTOR;

use super::Amount;

/// Inputs for one weekly pay period.
///
/// # Example
///
/// ```
/// use nomina_engine::models::WeeklyPayInput;
/// use rust_decimal::Decimal;
///
/// let input = WeeklyPayInput::new(Decimal::new(30, 0), Decimal::new(40, 0), Decimal::new(5, 0))
///     .with_bonus(Decimal::new(200, 0))
///     .with_deduction(Decimal::new(150, 0));
/// assert_eq!(input.overtime_factor, Decimal::new(15, 1));
/// assert_eq!(input.bonuses.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPayInput {
    /// Pay per regular hour.
    pub hourly_rate: Decimal,
    /// Regular hours worked.
    pub hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Multiplier applied to overtime hours.
    #[serde(default = "default_overtime_factor")]
    pub overtime_factor: Decimal,
    /// Bonus entries, summed in order.
    #[serde(default)]
    pub bonuses: Vec<Amount>,
    /// Deduction entries, summed in order.
    #[serde(default)]
    pub deductions: Vec<Amount>,
}

fn default_overtime_factor() -> Decimal {
    DEFAULT_OVERTIME_FACTOR
}

impl WeeklyPayInput {
    /// Creates an input with the default overtime factor and no adjustments.
    pub fn new(hourly_rate: Decimal, hours: Decimal, overtime_hours: Decimal) -> Self {
        Self {
            hourly_rate,
            hours,
            overtime_hours,
            overtime_factor: DEFAULT_OVERTIME_FACTOR,
            bonuses: Vec::new(),
            deductions: Vec::new(),
        }
    }

    /// Replaces the overtime factor.
    pub fn with_overtime_factor(mut self, overtime_factor: Decimal) -> Self {
        self.overtime_factor = overtime_factor;
        self
    }

    /// Appends a bonus entry.
    pub fn with_bonus(mut self, bonus: impl Into<Amount>) -> Self {
        self.bonuses.push(bonus.into());
        self
    }

    /// Appends a deduction entry.
    pub fn with_deduction(mut self, deduction: impl Into<Amount>) -> Self {
        self.deductions.push(deduction.into());
        self
    }
}

/// Computed pay for one weekly period.
///
/// Every monetary field is rounded to cents independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPayResult {
    /// Echo of the input hourly rate.
    pub hourly_rate: Decimal,
    /// Echo of the input regular hours.
    pub hours: Decimal,
    /// Echo of the input overtime hours.
    pub overtime_hours: Decimal,
    /// hours × hourly_rate.
    pub regular_pay: Decimal,
    /// overtime_hours × hourly_rate × overtime_factor.
    pub overtime_pay: Decimal,
    /// Sum of numeric bonus entries.
    pub total_bonuses: Decimal,
    /// Sum of numeric deduction entries.
    pub total_deductions: Decimal,
    /// regular_pay + overtime_pay + total_bonuses.
    pub gross_pay: Decimal,
    /// gross_pay − total_deductions. May be negative.
    pub net_pay: Decimal,
    /// When the result was computed.
    pub calculated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{"hourlyRate": "31.25", "hours": 48, "overtimeHours": 0}"#;
        let input: WeeklyPayInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.hourly_rate, dec("31.25"));
        assert_eq!(input.hours, dec("48"));
        assert_eq!(input.overtime_factor, dec("1.5"));
        assert!(input.bonuses.is_empty());
        assert!(input.deductions.is_empty());
    }

    #[test]
    fn test_deserialize_keeps_invalid_bonus_entries() {
        let json = r#"{
            "hourlyRate": 30,
            "hours": 40,
            "overtimeHours": 5,
            "overtimeFactor": "2",
            "bonuses": [100, "oops"],
            "deductions": [null]
        }"#;
        let input: WeeklyPayInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.overtime_factor, dec("2"));
        assert_eq!(input.bonuses.len(), 2);
        assert!(input.bonuses[1].is_invalid());
        assert!(input.deductions[0].is_invalid());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{"hourlyRate": 30, "hours": 40}"#;
        let result: Result<WeeklyPayInput, _> = serde_json::from_str(json);
        assert!(result.unwrap_err().to_string().contains("overtimeHours"));
    }

    #[test]
    fn test_builder_appends_in_order() {
        let input = WeeklyPayInput::new(dec("30"), dec("40"), dec("0"))
            .with_bonus(dec("1"))
            .with_bonus(dec("2"))
            .with_deduction(dec("3"));

        assert_eq!(input.bonuses, vec![Amount::from(dec("1")), Amount::from(dec("2"))]);
        assert_eq!(input.deductions, vec![Amount::from(dec("3"))]);
    }
}
