//! Configuration loading and management for the payroll calculation engine.
//!
//! This module loads payroll policy constants and currency formatting
//! conventions from YAML files, and exposes the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use nomina_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/mx_lft").unwrap();
//! println!("Timezone: {}", config.policy().timezone);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_AGUINALDO_DAYS, DEFAULT_CURRENCY, DEFAULT_DAYS_IN_YEAR, DEFAULT_DAYS_PER_MONTH,
    DEFAULT_DOUBLE_TIME_FACTOR, DEFAULT_LOCALE, DEFAULT_OVERTIME_FACTOR,
    DEFAULT_REGULAR_HOURS_DAILY, DEFAULT_REGULAR_HOURS_WEEKLY, DEFAULT_TIMEZONE,
    DEFAULT_VACATION_BONUS_PCT, FormatConventions, LocaleConventions, PolicyConstants,
};
