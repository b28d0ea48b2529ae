use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::input::{parse_integer_in, InputError};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ItemId);
id_newtype!(ElementId);

/// Identifies a single countdown run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A countdown duration already validated to lie in
/// `CountdownSeconds::MIN..=CountdownSeconds::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountdownSeconds(u8);

impl CountdownSeconds {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 60;

    pub fn new(seconds: i64) -> Result<Self, InputError> {
        if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&seconds) {
            return Err(InputError::OutOfRange {
                value: seconds,
                min: Self::MIN.into(),
                max: Self::MAX.into(),
            });
        }
        // the range check above keeps this lossless
        Ok(Self(seconds as u8))
    }

    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let seconds = parse_integer_in(raw, Self::MIN.into(), Self::MAX.into())?;
        Self::new(seconds)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for CountdownSeconds {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for CountdownSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
