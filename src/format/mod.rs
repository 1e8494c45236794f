//! Display formatting for computed amounts.
//!
//! Formatters never fail; see [`format_currency`] for the fallback rules.

mod currency;

pub use currency::{NON_NUMERIC_FALLBACK, format_currency, format_currency_with};
