//! Numeric literal parsing and number rendering

use crate::domain::DomainError;

/// Parse a numeric literal typed by the user.
///
/// Accepts decimal floats (`12`, `-3.5`, `.5`, `1e3`), `Infinity` with an optional
/// sign (exactly that spelling) and unsigned integers with a `0x`, `0o` or `0b`
/// prefix. Surrounding whitespace is ignored. `inf`, `NaN` and other spellings the
/// float parser would take are rejected.
pub fn parse_number(input: &str) -> Result<f64, DomainError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(DomainError::EmptyNumber);
    }
    let invalid = || DomainError::InvalidNumber(input.to_string());

    if let Some(value) = parse_radix(text) {
        return value.ok_or_else(invalid);
    }
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return Err(invalid());
    }
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(invalid()),
    }
}

/// `None` when `text` carries no radix prefix, `Some(None)` when it does but the digits are bad.
fn parse_radix(text: &str) -> Option<Option<f64>> {
    let (radix, digits) = match text.get(..2) {
        Some("0x" | "0X") => (16, &text[2..]),
        Some("0o" | "0O") => (8, &text[2..]),
        Some("0b" | "0B") => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Some(None);
    }
    Some(u128::from_str_radix(digits, radix).ok().map(|v| v as f64))
}

/// Render a number the way results are shown to the user.
///
/// Integral values print without a fraction, `-0` prints as `0`, infinities as
/// `Infinity`, and very large or very small magnitudes in exponent form (`1e+21`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    value.to_string()
}

/// Render `value` with exactly `digits` fraction digits.
///
/// An exact tie rounds away from zero (`0.125` → `0.13`), everything else to the
/// nearest. Non-finite values and magnitudes of 1e21 and above fall back to
/// [`format_number`].
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return format_number(value);
    }
    // 10^d is exact up to 10^22
    if digits <= 22 {
        let scale = 10f64.powi(digits as i32);
        let scaled = value * scale;
        let exact = value.mul_add(scale, -scaled) == 0.0;
        if exact && scaled.fract().abs() == 0.5 {
            let rounded = scaled.trunc() + scaled.signum();
            return format!("{:.*}", digits, rounded / scale);
        }
    }
    format!("{:.*}", digits, value)
}
