use std::fmt;

use serde::Serialize;
use shared::error::{ErrorCategory, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StringFormatError {
    #[error("Invalid input")]
    Missing,
    #[error("Empty string")]
    Blank,
}

impl ErrorCategory for StringFormatError {
    fn code(&self) -> ErrorCode {
        ErrorCode::Validation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormattedString(String);

impl FormattedString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Trims the input, uppercases its first character and lowercases the rest.
pub fn format_string(raw: &str) -> Result<FormattedString, StringFormatError> {
    if raw.is_empty() {
        return Err(StringFormatError::Missing);
    }
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return Err(StringFormatError::Blank);
    };

    let mut formatted = String::with_capacity(trimmed.len());
    formatted.extend(first.to_uppercase());
    formatted.push_str(&chars.as_str().to_lowercase());
    Ok(FormattedString(formatted))
}

impl fmt::Display for FormattedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Formatted string: \"{}\"", self.0)
    }
}

/// The user-visible line for either outcome.
pub fn render(raw: &str) -> String {
    match format_string(raw) {
        Ok(formatted) => formatted.to_string(),
        Err(err) => format!("Formatted string: \"{err}\""),
    }
}
