//! Parsing helpers for raw text coming from input fields.
//!
//! Values are read the way a browser form script reads them: surrounding
//! whitespace is dropped and the longest leading number wins, so `"2.5"`
//! is the integer 2 and `"12px"` is the number 12. Text with no leading
//! number is rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotNumeric(String),
    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

/// Parses the leading integer of `raw`. A `0x` prefix switches to hex;
/// anything after the last digit is ignored.
pub fn parse_integer(raw: &str) -> Result<i64, InputError> {
    let trimmed = non_empty(raw)?;
    let (negative, body) = split_sign(trimmed);
    let (radix, digits) = match body.get(..2) {
        Some("0x" | "0X") => (16, &body[2..]),
        _ => (10, body),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }
    if !seen {
        return Err(InputError::NotNumeric(trimmed.to_string()));
    }
    Ok(if negative { -value } else { value })
}

pub fn parse_integer_in(raw: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let value = parse_integer(raw)?;
    if !(min..=max).contains(&value) {
        return Err(InputError::OutOfRange { value, min, max });
    }
    Ok(value)
}

/// Parses the leading decimal number of `raw`. `Infinity` is spelled out in
/// full; `inf` and `NaN` are not numbers.
pub fn parse_number(raw: &str) -> Result<f64, InputError> {
    let trimmed = non_empty(raw)?;
    let (negative, body) = split_sign(trimmed);
    let magnitude = if body.starts_with("Infinity") {
        f64::INFINITY
    } else {
        body[..decimal_prefix_len(body)]
            .parse::<f64>()
            .map_err(|_| InputError::NotNumeric(trimmed.to_string()))?
    };
    Ok(if negative { -magnitude } else { magnitude })
}

fn non_empty(raw: &str) -> Result<&str, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed)
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

/// Byte length of the `digits[.digits][e[+-]digits]` run at the start of
/// `text`, or 0 when it does not start with a digit or `.digit`.
fn decimal_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let integer = digits_from(0);
    let mut end = integer;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }
    if end == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    end
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
