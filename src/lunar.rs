//! Result types shared by the Chinese and Korean conversions.

use crate::Error;
use crate::fmt;

/// Month name, `Common` for a regular month and `Leap` for an inserted one.
/// A leap month carries the number of the regular month it follows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// Month number regardless of leap.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` for a leap month, `false` for a regular one.
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    pub(crate) fn new(num: u32, is_leap: bool) -> Self {
        if is_leap {
            Self::Leap(num)
        } else {
            Self::Common(num)
        }
    }
}

/// A date in a lunisolar calendar.
///
/// # Example
///
/// ```
/// use lunisolar::{chinese, Date, Month};
///
/// let lunar = chinese::from_date(Date::from_gregorian(2017, 7, 23).unwrap()).unwrap();
/// assert_eq!(Month::Leap(6), lunar.month);
/// assert_eq!((2017, 6, 1), lunar.ymd());
/// assert!(lunar.is_leap());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    /// Lunar year, numbered as the Gregorian year in which it mostly falls
    pub year: i32,
    pub month: Month,
    /// Day of month, `1..=30`
    pub day: u32,
}

impl LunarDate {
    /// Returns `(year, month, day)`, the month numbered without regard to leap.
    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year, self.month.num(), self.day)
    }
    /// `true` if the date falls in a leap month.
    pub fn is_leap(&self) -> bool {
        self.month.is_leap()
    }
    /// Sexagenary number of the lunar year, from 1 (甲子) to 60 (癸亥).
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::{LunarDate, Month};
    ///
    /// let lunar = LunarDate { year: 2000, month: Month::Common(1), day: 1 };
    /// assert_eq!(17, lunar.sexagenary_year()); // 庚辰
    /// ```
    pub fn sexagenary_year(&self) -> u32 {
        sexagenary_for_year(self.year)
    }
    /// Chinese text form, see [`fmt::chinese`].
    pub fn to_chinese(&self) -> Result<String, Error> {
        fmt::chinese(self)
    }
    /// Korean text form, see [`fmt::korean`].
    pub fn to_korean(&self) -> Result<String, Error> {
        fmt::korean(self)
    }
}

impl std::fmt::Display for LunarDate {
    /// Formats as `year-month-day`, with an `L` before the month number of a
    /// leap month, e.g. `2017-L06-01`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap() { "L" } else { "" };
        write!(f, "{:04}-{}{:02}-{:02}", self.year, leap, self.month.num(), self.day)
    }
}

/// Returns the sexagenary number of a year.
///
/// # Example
///
/// ```
/// use lunisolar::lunar::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_parts() {
        assert_eq!(6, Month::Leap(6).num());
        assert!(Month::Leap(6).is_leap());
        assert!(!Month::Common(6).is_leap());
        assert_eq!(Month::Leap(3), Month::new(3, true));
        assert_eq!(Month::Common(3), Month::new(3, false));
    }

    #[test]
    fn display() {
        let lunar = LunarDate {
            year: 2017,
            month: Month::Leap(6),
            day: 1,
        };
        assert_eq!("2017-L06-01", lunar.to_string());
        let lunar = LunarDate {
            year: 1999,
            month: Month::Common(11),
            day: 25,
        };
        assert_eq!("1999-11-25", lunar.to_string());
    }

    #[test]
    fn year_sexagenary() {
        for (std, year) in [(60, -2697), (1, -2696), (17, 2000), (34, 2017)] {
            assert_eq!(std, sexagenary_for_year(year));
        }
    }
}
