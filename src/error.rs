//! Error type shared by both calendars.

use std::error::Error as StdError;
use std::fmt::{Display, Formatter};

/// Names the calendar a conversion was attempted in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Calendar {
    Chinese,
    Korean,
}

impl Display for Calendar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chinese => f.write_str("Chinese"),
            Self::Korean => f.write_str("Korean"),
        }
    }
}

/// Errors from calendar conversion and table lookup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The date (as a Julian day number) lies outside the span covered by
    /// the calendar's tables.
    OutOfRange { calendar: Calendar, jdn: i64 },
    /// A lunar year has no entry in the year tables.
    YearOutOfRange(i32),
    /// A month number outside `1..=12`.
    InvalidMonth(u32),
    /// A day number outside `1..=30`.
    InvalidDay(u32),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { calendar, jdn } => {
                write!(f, "JDN {jdn} is out of range for the {calendar} calendar")
            }
            Self::YearOutOfRange(year) => write!(f, "no table data for lunar year {year}"),
            Self::InvalidMonth(month) => write!(f, "month {month} not in 1..=12"),
            Self::InvalidDay(day) => write!(f, "day {day} not in 1..=30"),
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::OutOfRange {
            calendar: Calendar::Korean,
            jdn: 2229155,
        };
        assert_eq!(
            "JDN 2229155 is out of range for the Korean calendar",
            err.to_string()
        );
        assert_eq!("month 13 not in 1..=12", Error::InvalidMonth(13).to_string());
        assert_eq!(
            "no table data for lunar year 2101",
            Error::YearOutOfRange(2101).to_string()
        );
    }
}
