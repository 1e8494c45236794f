//! Configuration types for payroll policy and currency formatting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, together with the
//! built-in defaults used when no file is supplied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default overtime multiplier (time and a half).
pub const DEFAULT_OVERTIME_FACTOR: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default double-time multiplier.
pub const DEFAULT_DOUBLE_TIME_FACTOR: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Default number of aguinaldo days per year.
pub const DEFAULT_AGUINALDO_DAYS: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Default vacation bonus ("prima vacacional") as a fraction of vacation pay.
pub const DEFAULT_VACATION_BONUS_PCT: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Default regular hours in a working week.
pub const DEFAULT_REGULAR_HOURS_WEEKLY: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Default regular hours in a working day.
pub const DEFAULT_REGULAR_HOURS_DAILY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default number of days used to convert a daily salary to a monthly one.
pub const DEFAULT_DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Default number of days in a year used for aguinaldo proration.
pub const DEFAULT_DAYS_IN_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Default IANA timezone label. Informational only.
pub const DEFAULT_TIMEZONE: &str = "America/Mexico_City";

/// Default currency code for formatting.
pub const DEFAULT_CURRENCY: &str = "MXN";

/// Default locale for formatting.
pub const DEFAULT_LOCALE: &str = "es-MX";

/// Named payroll policy defaults consumed by every calculator.
///
/// # Example
///
/// ```
/// use nomina_engine::config::PolicyConstants;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConstants::default();
/// assert_eq!(policy.overtime_factor, Decimal::new(15, 1));
/// assert_eq!(policy.timezone, "America/Mexico_City");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConstants {
    /// Multiplier applied to overtime hours.
    pub overtime_factor: Decimal,
    /// Multiplier for double time.
    pub double_time_factor: Decimal,
    /// Base aguinaldo days per year.
    pub aguinaldo_days_default: Decimal,
    /// Vacation bonus as a fraction of vacation pay.
    pub vacation_bonus_percentage: Decimal,
    /// Regular hours per week.
    pub regular_hours_weekly: Decimal,
    /// Regular hours per day.
    pub regular_hours_daily: Decimal,
    /// Days per month for salary conversion.
    pub days_per_month: Decimal,
    /// Timezone label; no calculation depends on it.
    pub timezone: String,
}

impl Default for PolicyConstants {
    fn default() -> Self {
        Self {
            overtime_factor: DEFAULT_OVERTIME_FACTOR,
            double_time_factor: DEFAULT_DOUBLE_TIME_FACTOR,
            aguinaldo_days_default: DEFAULT_AGUINALDO_DAYS,
            vacation_bonus_percentage: DEFAULT_VACATION_BONUS_PCT,
            regular_hours_weekly: DEFAULT_REGULAR_HOURS_WEEKLY,
            regular_hours_daily: DEFAULT_REGULAR_HOURS_DAILY,
            days_per_month: DEFAULT_DAYS_PER_MONTH,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// Number-rendering conventions for a single locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConventions {
    /// Separator inserted between groups of three integer digits.
    pub group_separator: String,
    /// Separator between the integer and fraction digits.
    pub decimal_separator: String,
    /// Minimum number of digits in the leading group before grouping kicks in.
    ///
    /// `1` groups `1234` as `1,234`; `2` leaves it as `1234` and only
    /// groups from `12345` upwards.
    #[serde(default = "default_min_grouping_digits")]
    pub min_grouping_digits: usize,
    /// Layout of a formatted amount, using `{symbol}` and `{number}` placeholders.
    pub pattern: String,
    /// Map of currency code to the symbol rendered in this locale.
    pub symbols: HashMap<String, String>,
}

fn default_min_grouping_digits() -> usize {
    1
}

/// Locale conventions file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConventions {
    /// Map of locale tag (e.g. "es-MX") to its conventions.
    pub locales: HashMap<String, LocaleConventions>,
}

impl FormatConventions {
    /// Looks up the conventions for a locale tag.
    pub fn locale(&self, tag: &str) -> Option<&LocaleConventions> {
        self.locales.get(tag)
    }
}

fn locale(
    group: &str,
    decimal: &str,
    min_grouping_digits: usize,
    pattern: &str,
    symbols: &[(&str, &str)],
) -> LocaleConventions {
    LocaleConventions {
        group_separator: group.to_string(),
        decimal_separator: decimal.to_string(),
        min_grouping_digits,
        pattern: pattern.to_string(),
        symbols: symbols
            .iter()
            .map(|(code, symbol)| (code.to_string(), symbol.to_string()))
            .collect(),
    }
}

impl Default for FormatConventions {
    fn default() -> Self {
        let mut locales = HashMap::new();
        locales.insert(
            "es-MX".to_string(),
            locale(
                ",",
                ".",
                1,
                "{symbol}{number}",
                &[("MXN", "$"), ("USD", "USD\u{a0}"), ("EUR", "EUR\u{a0}")],
            ),
        );
        locales.insert(
            "en-US".to_string(),
            locale(
                ",",
                ".",
                1,
                "{symbol}{number}",
                &[("USD", "$"), ("MXN", "MX$"), ("EUR", "€")],
            ),
        );
        locales.insert(
            "es-ES".to_string(),
            locale(
                ".",
                ",",
                2,
                "{number}\u{a0}{symbol}",
                &[("EUR", "€"), ("USD", "US$"), ("MXN", "MXN")],
            ),
        );
        locales.insert(
            "de-DE".to_string(),
            locale(
                ".",
                ",",
                1,
                "{number}\u{a0}{symbol}",
                &[("EUR", "€"), ("USD", "$"), ("MXN", "MX$")],
            ),
        );
        locales.insert(
            "fr-FR".to_string(),
            locale(
                "\u{202f}",
                ",",
                1,
                "{number}\u{a0}{symbol}",
                &[("EUR", "€"), ("USD", "$US"), ("MXN", "$MX")],
            ),
        );
        Self { locales }
    }
}
