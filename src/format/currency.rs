//! Locale-aware currency formatting.
//!
//! Formatting sits on render paths, so nothing here returns an error or
//! panics: non-numeric input renders as `$0.00` and an unknown locale or
//! currency falls back to `$` plus the amount with two decimals.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::round_money;
use crate::config::{DEFAULT_CURRENCY, DEFAULT_LOCALE, FormatConventions, LocaleConventions};
use crate::models::Amount;

/// Rendering used for amounts that are not numeric.
pub const NON_NUMERIC_FALLBACK: &str = "$0.00";

static BUILTIN_CONVENTIONS: LazyLock<FormatConventions> = LazyLock::new(FormatConventions::default);

/// Formats an amount with the built-in locale conventions.
///
/// `currency` defaults to `"MXN"` and `locale` to `"es-MX"`.
///
/// # Examples
///
/// ```
/// use nomina_engine::format::format_currency;
/// use nomina_engine::models::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = Amount::from(Decimal::new(123456789, 2));
/// assert_eq!(format_currency(&amount, None, None), "$1,234,567.89");
///
/// let garbage = Amount::Invalid(serde_json::json!("abc"));
/// assert_eq!(format_currency(&garbage, None, None), "$0.00");
/// ```
pub fn format_currency(amount: &Amount, currency: Option<&str>, locale: Option<&str>) -> String {
    format_currency_with(&BUILTIN_CONVENTIONS, amount, currency, locale)
}

/// Formats an amount with an explicit set of locale conventions.
pub fn format_currency_with(
    conventions: &FormatConventions,
    amount: &Amount,
    currency: Option<&str>,
    locale: Option<&str>,
) -> String {
    let Some(value) = amount.as_decimal() else {
        return NON_NUMERIC_FALLBACK.to_string();
    };

    let currency = currency.unwrap_or(DEFAULT_CURRENCY);
    let locale = locale.unwrap_or(DEFAULT_LOCALE);

    match render(conventions, value, currency, locale) {
        Some(formatted) => formatted,
        None => {
            debug!(%currency, %locale, "No conventions for currency/locale, using plain fallback");
            plain_fallback(value)
        }
    }
}

/// `$` followed by the amount fixed to two decimals.
fn plain_fallback(value: Decimal) -> String {
    format!("${}", fixed_cents(round_money(value)))
}

/// Renders a rounded amount with exactly two fraction digits.
///
/// `rescale` cannot widen values within a few digits of `Decimal::MAX`, so
/// the missing zeros are padded here.
fn fixed_cents(rounded: Decimal) -> String {
    let plain = rounded.to_string();
    match rounded.scale() {
        0 => format!("{}.00", plain),
        1 => format!("{}0", plain),
        _ => plain,
    }
}

fn render(
    conventions: &FormatConventions,
    value: Decimal,
    currency: &str,
    locale: &str,
) -> Option<String> {
    let locale = conventions.locale(locale)?;
    let symbol = locale.symbols.get(currency)?;

    let rounded = round_money(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let number = group_digits(locale, &fixed_cents(rounded.abs()))?;

    let body = locale
        .pattern
        .replace("{symbol}", symbol)
        .replace("{number}", &number);

    Some(if negative { format!("-{}", body) } else { body })
}

/// Applies grouping and the locale decimal separator to a plain `1234.56` string.
fn group_digits(locale: &LocaleConventions, plain: &str) -> Option<String> {
    let (integer, fraction) = plain.split_once('.')?;
    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let grouped = if integer.len() >= 3 + locale.min_grouping_digits.max(1) {
        let digits: Vec<char> = integer.chars().collect();
        let lead = digits.len() % 3;
        let mut out = String::with_capacity(integer.len() * 2);
        for (i, digit) in digits.iter().enumerate() {
            if i > 0 && (i + 3 - lead) % 3 == 0 {
                out.push_str(&locale.group_separator);
            }
            out.push(*digit);
        }
        out
    } else {
        integer.to_string()
    };

    Some(format!("{}{}{}", grouped, locale.decimal_separator, fraction))
}
