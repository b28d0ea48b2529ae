//! Stateless lesson handlers. Each takes raw input text and produces the
//! text a learner sees, or an error whose message is that text.

mod number_format;
pub mod numbers;
pub mod strings;
pub mod table;
pub mod temperature;

pub use number_format::format_number;
pub use numbers::{classify_number, NumberReport, Parity, Sign};
pub use strings::{format_string, FormattedString};
pub use table::{multiplication_table, MultiplicationTable, TableRow};
pub use temperature::{convert_temperature, Conversion, TemperatureUnit};
