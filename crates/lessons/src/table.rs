use std::fmt;

use serde::Serialize;
use shared::{
    error::{ErrorCategory, ErrorCode},
    input::parse_integer_in,
};
use thiserror::Error;
use tracing::debug;

pub const MIN_FACTOR: i64 = 1;
pub const MAX_FACTOR: i64 = 10;
const ROWS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter a number between 1 and 10")]
pub struct InvalidFactor;

impl ErrorCategory for InvalidFactor {
    fn code(&self) -> ErrorCode {
        ErrorCode::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub factor: u32,
    pub multiplier: u32,
    pub product: u32,
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} = {}", self.factor, self.multiplier, self.product)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiplicationTable {
    pub factor: u32,
    pub rows: Vec<TableRow>,
}

impl MultiplicationTable {
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(TableRow::to_string)
    }
}

pub fn multiplication_table(raw: &str) -> Result<MultiplicationTable, InvalidFactor> {
    let factor = parse_integer_in(raw, MIN_FACTOR, MAX_FACTOR).map_err(|error| {
        debug!(input = raw, %error, "rejected table factor");
        InvalidFactor
    })?;
    // bounded by MAX_FACTOR
    let factor = factor as u32;
    let rows = (1..=ROWS)
        .map(|multiplier| TableRow {
            factor,
            multiplier,
            product: factor * multiplier,
        })
        .collect();
    Ok(MultiplicationTable { factor, rows })
}
