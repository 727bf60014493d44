//! Month-year parsing
//!
//! Every date the service accepts (`start_date`, `end_date`, the sum
//! bounds) is a calendar month written as `MM-YYYY`, e.g. `07-2025`.
//! Parsing normalizes to the first day of that month.

use chrono::NaiveDate;
use thiserror::Error;

/// Failure to parse a `MM-YYYY` month string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMonthError {
    /// Input does not have the `MM-YYYY` shape
    #[error("expected MM-YYYY, got {0:?}")]
    Format(String),

    /// Month component outside 1..=12
    #[error("month out of range: {0}")]
    MonthOutOfRange(u32),
}

/// Parse a `MM-YYYY` string into the first day of that month.
///
/// The format is strict: exactly two digits, a dash, exactly four digits.
/// `"7-2025"` and `"07-25"` are rejected.
pub fn parse_month_year(input: &str) -> Result<NaiveDate, ParseMonthError> {
    let (month_part, year_part) = input
        .split_once('-')
        .ok_or_else(|| ParseMonthError::Format(input.to_string()))?;

    if month_part.len() != 2
        || year_part.len() != 4
        || !month_part.bytes().all(|b| b.is_ascii_digit())
        || !year_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseMonthError::Format(input.to_string()));
    }

    let month: u32 = month_part
        .parse()
        .map_err(|_| ParseMonthError::Format(input.to_string()))?;
    let year: i32 = year_part
        .parse()
        .map_err(|_| ParseMonthError::Format(input.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ParseMonthError::MonthOutOfRange(month))
}
