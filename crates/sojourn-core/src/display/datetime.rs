//! Date and time display utilities.
//!
//! This module provides wrapper types for formatting timestamps and plan
//! date strings in a consistent, human-readable format.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A wrapper around a `YYYY-MM-DD` date string that renders it with its
/// weekday, e.g. `Sat, Jun 01`.
///
/// Falls back to the raw string when it does not parse as a date.
pub struct ShortDate<'a>(pub &'a str);

impl fmt::Display for ShortDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.parse::<Date>() {
            Ok(date) => write!(f, "{}", date.strftime("%a, %b %d")),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date_renders_weekday() {
        let output = format!("{}", ShortDate("2024-06-01"));
        assert_eq!(output, "Sat, Jun 01");
    }

    #[test]
    fn test_short_date_falls_back_on_garbage() {
        assert_eq!(format!("{}", ShortDate("not-a-date")), "not-a-date");
    }
}
