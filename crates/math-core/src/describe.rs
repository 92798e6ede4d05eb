//! Rendering of numbers for descriptions and JSON results.
//!
//! Existing clients compare response bodies byte for byte, so numbers are
//! rendered exactly as the first version of the service did:
//!
//! - descriptions use the `[]float64{70, 30.5, 1e+06}` list syntax, with
//!   `[]float64(nil)` for an empty list
//! - each number uses its shortest round-trip digits, switching to exponent
//!   form when the decimal exponent is below -4 or at least 6
//! - JSON results use fixed notation for `1e-6 <= |x| < 1e21`, so integral
//!   values print without a fractional part (`64`) and `-0.0` keeps its sign

use serde::Serializer;

/// Render a list of numbers in the description list syntax.
///
/// # Examples
///
/// ```
/// use math_core::describe::format_list;
///
/// assert_eq!(format_list(&[70.0, 30.0, 2.5]), "[]float64{70, 30, 2.5}");
/// assert_eq!(format_list(&[]), "[]float64(nil)");
/// ```
pub fn format_list(numbers: &[f64]) -> String {
    if numbers.is_empty() {
        return "[]float64(nil)".to_string();
    }

    let items: Vec<String> = numbers.iter().map(|&n| format_number(n)).collect();
    format!("[]float64{{{}}}", items.join(", "))
}

/// Render a single number.
///
/// # Examples
///
/// ```
/// use math_core::describe::format_number;
///
/// assert_eq!(format_number(64.0), "64");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(1_000_000.0), "1e+06");
/// assert_eq!(format_number(0.00001), "1e-05");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Inf");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let (digits, exp) = shortest_digits(value.abs());
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if !(-4..6).contains(&exp) {
        format!("{}{}", sign, exponent_form(&digits, exp))
    } else {
        format!("{}{}", sign, fixed_form(&digits, exp))
    }
}

/// Shortest round-trip decimal digits of a finite non-negative value and the
/// decimal exponent of the first digit.
fn shortest_digits(value: f64) -> (Vec<u8>, i32) {
    // `{:e}` yields the shortest round-trip representation, e.g. "1.2345e8"
    let rendered = format!("{:e}", value);
    let (mantissa, exp) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    (digits, exp.parse().unwrap_or(0))
}

fn exponent_form(digits: &[u8], exp: i32) -> String {
    let mut out = mantissa(digits);
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exp.unsigned_abs()));
    out
}

/// Like [`exponent_form`], but negative exponents are not zero-padded
/// (`1e-7`, `1e+21`).
fn json_exponent_form(digits: &[u8], exp: i32) -> String {
    let mut out = mantissa(digits);
    if exp < 0 {
        out.push_str(&format!("e-{}", exp.unsigned_abs()));
    } else {
        out.push_str(&format!("e+{:02}", exp));
    }
    out
}

fn mantissa(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len() + 6);
    out.push(char::from(digits[0]));
    if digits.len() > 1 {
        out.push('.');
        out.extend(digits[1..].iter().map(|&d| char::from(d)));
    }
    out
}

fn fixed_form(digits: &[u8], exp: i32) -> String {
    // Position of the decimal point relative to the first digit
    let point = exp + 1;
    let digit_at = |i: i32| -> char {
        usize::try_from(i)
            .ok()
            .and_then(|i| digits.get(i))
            .map_or('0', |&d| char::from(d))
    };

    let mut out = String::new();
    if point > 0 {
        (0..point).for_each(|i| out.push(digit_at(i)));
    } else {
        out.push('0');
    }

    let fraction_len = digits.len() as i32 - point;
    if fraction_len > 0 {
        out.push('.');
        (point..point + fraction_len).for_each(|i| out.push(digit_at(i)));
    }
    out
}

/// Render a number as a JSON literal.
///
/// Fixed notation is used for `1e-6 <= |x| < 1e21` and for zero, exponent
/// notation otherwise. The sign of `-0.0` is kept. Returns `None` for NaN
/// and infinities, which JSON cannot represent.
///
/// # Examples
///
/// ```
/// use math_core::describe::format_json_number;
///
/// assert_eq!(format_json_number(64.0).as_deref(), Some("64"));
/// assert_eq!(format_json_number(0.000001).as_deref(), Some("0.000001"));
/// assert_eq!(format_json_number(1e-7).as_deref(), Some("1e-7"));
/// assert_eq!(format_json_number(1e21).as_deref(), Some("1e+21"));
/// assert_eq!(format_json_number(f64::NAN), None);
/// ```
pub fn format_json_number(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let (digits, exp) = shortest_digits(value.abs());
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let abs = value.abs();

    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        Some(format!("{}{}", sign, json_exponent_form(&digits, exp)))
    } else {
        Some(format!("{}{}", sign, fixed_form(&digits, exp)))
    }
}

/// Serialize result values for the JSON body.
///
/// Each finite value is written verbatim as rendered by
/// [`format_json_number`]; non-finite values are written as `null`.
pub(crate) fn serialize_results<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::{Error, SerializeSeq};
    use serde_json::value::RawValue;

    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for &value in values {
        match format_json_number(value) {
            Some(literal) => {
                let raw = RawValue::from_string(literal).map_err(S::Error::custom)?;
                seq.serialize_element(&raw)?;
            }
            None => seq.serialize_element(&Option::<f64>::None)?,
        }
    }
    seq.end()
}
