use std::fmt;

use serde::Serialize;
use shared::{
    error::{ErrorCategory, ErrorCode},
    input::parse_number,
};
use thiserror::Error;

use crate::number_format::format_number;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter a valid number")]
pub struct InvalidNumber;

impl ErrorCategory for InvalidNumber {
    fn code(&self) -> ErrorCode {
        ErrorCode::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Even,
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberReport {
    pub value: f64,
    pub sign: Sign,
    /// Only whole numbers have a parity.
    pub parity: Option<Parity>,
}

pub fn classify_number(raw: &str) -> Result<NumberReport, InvalidNumber> {
    let value = parse_number(raw).map_err(|_| InvalidNumber)?;

    let sign = if value > 0.0 {
        Sign::Positive
    } else if value < 0.0 {
        Sign::Negative
    } else {
        Sign::Zero
    };

    let parity = (value.is_finite() && value.fract() == 0.0).then(|| {
        if value % 2.0 == 0.0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    });

    Ok(NumberReport {
        value,
        sign,
        parity,
    })
}

impl fmt::Display for NumberReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sign {
            Sign::Positive => write!(f, "{} is a positive number.", format_number(self.value))?,
            Sign::Negative => write!(f, "{} is a negative number.", format_number(self.value))?,
            Sign::Zero => f.write_str("The number is zero.")?,
        }
        match self.parity {
            Some(Parity::Even) => f.write_str(" It is even."),
            Some(Parity::Odd) => f.write_str(" It is odd."),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "tests/numbers_tests.rs"]
mod tests;
