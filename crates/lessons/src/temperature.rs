use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::{
    error::{ErrorCategory, ErrorCode},
    input::parse_number,
};
use thiserror::Error;

use crate::number_format::{format_fixed1, format_number};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemperatureError {
    #[error("Please enter a valid temperature")]
    InvalidTemperature,
    #[error("unknown temperature unit '{0}', expected celsius or fahrenheit")]
    UnknownUnit(String),
}

impl ErrorCategory for TemperatureError {
    fn code(&self) -> ErrorCode {
        ErrorCode::Validation
    }
}

/// The unit the input temperature is given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = TemperatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(TemperatureError::UnknownUnit(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub input: f64,
    pub from: TemperatureUnit,
    pub output: f64,
}

pub fn convert_temperature(
    raw: &str,
    from: TemperatureUnit,
) -> Result<Conversion, TemperatureError> {
    let input = parse_number(raw).map_err(|_| TemperatureError::InvalidTemperature)?;
    let output = match from {
        TemperatureUnit::Celsius => input * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Fahrenheit => (input - 32.0) * 5.0 / 9.0,
    };
    if output.is_nan() {
        return Err(TemperatureError::InvalidTemperature);
    }
    Ok(Conversion {
        input,
        from,
        output,
    })
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} is {}{}",
            format_number(self.input),
            self.from.symbol(),
            format_fixed1(self.output),
            self.from.other().symbol()
        )
    }
}

#[cfg(test)]
#[path = "tests/temperature_tests.rs"]
mod tests;
