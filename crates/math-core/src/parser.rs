//! Lenient parsing of raw query values.
//!
//! Neither parser ever fails: tokens that are not numbers are dropped, and a
//! missing or malformed quantifier becomes zero.

use tracing::debug;

/// Parse a comma-separated list of numbers.
///
/// Tokens are parsed as 64-bit floats in the order given. Tokens that fail to
/// parse are skipped, as are finite literals too large to represent
/// (`1e400`). Whitespace is not trimmed, so `" 2"` is skipped too.
///
/// # Examples
///
/// ```
/// use math_core::parser::parse_numbers;
///
/// assert_eq!(parse_numbers("70,abc,-3.5,1e2"), vec![70.0, -3.5, 100.0]);
/// assert!(parse_numbers("").is_empty());
/// ```
pub fn parse_numbers(input: &str) -> Vec<f64> {
    input
        .split(',')
        .filter_map(|token| match parse_float(token) {
            Some(value) => Some(value),
            None => {
                debug!("Skipping unparseable number token {:?}", token);
                None
            }
        })
        .collect()
}

fn parse_float(token: &str) -> Option<f64> {
    let value: f64 = token.parse().ok()?;

    // Overflowing literals parse to infinity; only explicit infinities are kept
    if value.is_infinite() && !is_infinity_literal(token) {
        return None;
    }

    Some(value)
}

fn is_infinity_literal(token: &str) -> bool {
    let unsigned = token.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parse the quantifier parameter.
///
/// Returns 0 when the value is absent, not an integer, or out of range.
pub fn parse_quantifier(input: Option<&str>) -> i64 {
    match input {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            debug!("Invalid quantifier {:?}, using 0", raw);
            0
        }),
        None => 0,
    }
}
