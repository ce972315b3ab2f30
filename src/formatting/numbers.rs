//! Number rendering for output fields.
//!
//! Rounding follows the page convention: halves round toward positive
//! infinity, so `-2.5` becomes `-2`, not `-3`.

use tracing::debug;

use crate::config::DisplayConfig;
use crate::errors::EstimatorError;

/// Largest magnitude that still converts to `i64` exactly enough to group.
const GROUPABLE_LIMIT: f64 = i64::MAX as f64;

/// Nearest integer, halves toward positive infinity.
///
/// `value - floor` is exact, so values just below a half and integers
/// past 2^52 are left where they belong.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    // -0.0 prints as "-0"
    rounded + 0.0
}

pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Insert `separator` between groups of three digits.
///
/// Fails for values that are not finite or too large for an `i64`.
pub fn group_digits(value: f64, separator: &str) -> Result<String, EstimatorError> {
    if !value.is_finite() || value.abs() >= GROUPABLE_LIMIT {
        return Err(EstimatorError::Format(value));
    }

    let whole = value.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(std::str::from_utf8)
        .collect::<Result<Vec<&str>, _>>()
        .map_err(|_| EstimatorError::Format(value))?
        .join(separator);

    Ok(if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    })
}

/// Currency symbol plus the rounded, grouped amount.
///
/// Never fails: when grouping is impossible the rounded value is printed
/// as-is after the symbol.
pub fn format_currency(value: f64, display: &DisplayConfig) -> String {
    let rounded = round_half_up(value);
    match group_digits(rounded, &display.group_separator) {
        Ok(grouped) => format!("{}{}", display.currency_symbol, grouped),
        Err(e) => {
            debug!("{}; printing without grouping", e);
            format!("{}{}", display.currency_symbol, rounded)
        }
    }
}

/// Rounded to one decimal and always printed with exactly one.
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", round_to_tenth(value))
}

pub fn format_whole(value: f64) -> String {
    format!("{:.0}", round_half_up(value))
}

pub fn format_hours(value: f64, display: &DisplayConfig) -> String {
    format!("{}{}", format_whole(value), display.hours_suffix)
}

pub fn format_multiple(value: f64, display: &DisplayConfig) -> String {
    format!("{}{}", format_one_decimal(value), display.multiple_suffix)
}
