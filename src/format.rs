//! Rendering of results in the `%g` style.
//!
//! Values are shown with a fixed number of significant digits. Numbers whose
//! decimal exponent is between `-4` and the precision are written in plain
//! decimal form; everything else uses scientific notation with a signed,
//! two-digit minimum exponent. Trailing zeros are dropped in both forms.

/// Significant digits used when no precision is configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest precision honoured; `f64` carries no more significant digits.
pub const MAX_PRECISION: usize = 17;

/// Format `value` with `precision` significant digits.
///
/// The precision is clamped to `1..=MAX_PRECISION`.
///
/// # Examples
///
/// ```
/// use linecalc::format::format_general;
///
/// assert_eq!(format_general(14.0, 6), "14");
/// assert_eq!(format_general(std::f64::consts::PI, 6), "3.14159");
/// assert_eq!(format_general(1e20, 6), "1e+20");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    let precision = precision.clamp(1, MAX_PRECISION);
    // Rounding to `precision` digits can carry into the next power of ten,
    // so the exponent is read back from the rounded scientific form.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return scientific;
    };
    let limit = i64::try_from(precision).unwrap_or(i64::MAX);
    if (-4..limit).contains(&exponent) {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
