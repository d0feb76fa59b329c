//! Numeric normalization utilities.
//!
//! Absence is always `None`. Nothing in this module turns a missing input
//! into a zero, with the single exception of [`clamp_score`] mapping NaN to
//! 0 once a score has already been computed.

use serde_json::Value;

/// Coerce a provider-native value to a finite number.
///
/// Numbers pass through; strings are trimmed, a single trailing `%` is
/// dropped, and the rest must parse as a float. Everything else (null,
/// booleans, arrays, objects, empty or placeholder strings such as `"None"`
/// or `"-"`, NaN, infinities) is absent.
pub fn to_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_numeric(text),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Express a growth or margin figure in percent.
///
/// Values in the closed range [-1, 1] are read as fractions and scaled by
/// 100; anything outside is assumed to already be a percentage. A genuine
/// 1% encoded as `1` is therefore read as 100%. Applying this twice is not
/// meaningful.
pub fn normalize_percent(value: f64) -> f64 {
    if (-1.0..=1.0).contains(&value) {
        value * 100.0
    } else {
        value
    }
}

/// Clamp a score to [0, 100] and round to two decimals. NaN maps to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let clamped = value.clamp(0.0, 100.0);
    (clamped * 100.0).round() / 100.0
}

/// Mean of the present, finite entries; absent when there are none.
pub fn average(values: &[Option<f64>]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .flatten()
        .filter(|value| value.is_finite())
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Population standard deviation; absent for an empty slice.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt())
}

/// Percent change from `base` to `value`; absent when `base` is zero.
pub fn percent_change(base: f64, value: f64) -> Option<f64> {
    if base == 0.0 {
        return None;
    }
    let change = (value - base) / base * 100.0;
    change.is_finite().then_some(change)
}
