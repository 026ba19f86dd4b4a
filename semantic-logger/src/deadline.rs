//! Deadline parsing and evaluation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced when a deadline string cannot be used.
#[derive(Debug, Error)]
pub enum DeadlineError {
    /// The string is not shaped like `YYYY-MM-DD`.
    #[error("Invalid deadline '{value}': expected an ISO date like 2018-10-23")]
    Malformed { value: String },

    /// The string is shaped correctly but names no calendar day.
    #[error("Invalid deadline '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
}

/// Parse an ISO calendar date of the form `YYYY-MM-DD`.
///
/// Only the strict form is accepted: four year digits, two month digits
/// and two day digits, with no surrounding whitespace.
///
/// # Example
///
/// ```
/// use semantic_logger::deadline::parse_deadline;
///
/// let date = parse_deadline("2018-10-23").unwrap();
/// assert_eq!(date.to_string(), "2018-10-23");
///
/// assert!(parse_deadline("2018-02-30").is_err());
/// assert!(parse_deadline("23.10.2018").is_err());
/// ```
pub fn parse_deadline(value: &str) -> Result<NaiveDate, DeadlineError> {
    if !is_iso_date_shape(value) {
        return Err(DeadlineError::Malformed {
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| DeadlineError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// Whether `today` lies strictly after `deadline`.
///
/// The deadline day itself does not count: a deadline of day D is first
/// reported as passed on day D+1.
pub fn is_past(deadline: NaiveDate, today: NaiveDate) -> bool {
    today > deadline
}

fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
