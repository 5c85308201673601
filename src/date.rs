//! Calendar-independant date, counted in Julian day numbers.

use std::ops::{Add, Sub};

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// Returns the Julian day number (JDN) of a proleptic Gregorian date.
///
/// Uses the integer algorithm of Fliegel and Van Flandern. Dates before
/// 1582-10-15 are taken as proleptic Gregorian; the days dropped by the
/// Gregorian reform are not skipped.
///
/// # Example
///
/// ```
/// use lunisolar::date::julian_day;
///
/// assert_eq!(2451545, julian_day(2000, 1, 1));
/// assert_eq!(5, julian_day(1582, 10, 15) - julian_day(1582, 10, 10));
/// ```
pub fn julian_day(year: i32, month: i32, day: i32) -> i64 {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        u32::try_from(julian_day(year, month, day))
            .map(Self::from_jdn)
            .ok()
    }
    /// Creates a `Date` from the civil date of `t` in its own time zone.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{FixedOffset, TimeZone};
    /// use lunisolar::Date;
    ///
    /// let kst = FixedOffset::east_opt(9 * 3600).unwrap();
    /// let t = kst.with_ymd_and_hms(2000, 1, 1, 3, 0, 0).unwrap();
    /// assert_eq!("2000-01-01", Date::from_datetime(&t).unwrap().iso_gregorian());
    /// ```
    pub fn from_datetime<Tz: TimeZone>(t: &DateTime<Tz>) -> Option<Self> {
        Self::from_gregorian(t.year(), t.month() as i32, t.day() as i32)
    }
    /// Creates a `Date` from a `chrono` calendar date.
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        Self::from_gregorian(date.year(), date.month() as i32, date.day() as i32)
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i64::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
    /// Adds a signed number of days, returning `None` if the result falls
    /// outside the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use lunisolar::Date;
    ///
    /// let date = Date::from_jdn(1);
    /// assert_eq!(Some(Date::from_jdn(0)), date.checked_add(-1));
    /// assert_eq!(None, date.checked_add(-2));
    /// ```
    pub fn checked_add(self, days: i32) -> Option<Date> {
        self.jdn.checked_add_signed(days).map(Date::from_jdn)
    }
}

/// # Panics
///
/// Panics if the result falls outside the supported range. See
/// [`Date::checked_add`].
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        self.checked_add(rhs)
            .expect("overflow when adding days to date")
    }
}

/// # Panics
///
/// Panics if the difference does not fit in an `i32`.
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        i32::try_from(i64::from(self.jdn) - i64::from(rhs.jdn))
            .expect("overflow when subtracting dates")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
        assert_eq!(None, Date::from_gregorian(-4800, 1, 1));
    }

    #[test]
    fn julian_day_bounds() {
        assert_eq!(2229156, julian_day(1391, 2, 13));
        assert_eq!(2470172, julian_day(2050, 12, 31));
        assert_eq!(2415051, julian_day(1900, 1, 31));
    }

    #[test]
    fn reform_gap_not_skipped() {
        let before = Date::from_gregorian(1582, 10, 4).unwrap();
        let inside = Date::from_gregorian(1582, 10, 10).unwrap();
        let after = Date::from_gregorian(1582, 10, 15).unwrap();
        assert_eq!(6, inside - before);
        assert_eq!(5, after - inside);
        assert_eq!((1582, 10, 10), inside.gregorian());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2229156);
        assert_eq!((1391, 2, 13), date.gregorian());
    }

    #[test]
    fn from_datetime_uses_local_date() {
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let t = kst.with_ymd_and_hms(2017, 6, 24, 1, 30, 0).unwrap();
        assert_eq!("2017-06-24", Date::from_datetime(&t).unwrap().iso_gregorian());
        // same instant, still the previous day in UTC
        let utc = t.with_timezone(&Utc);
        assert_eq!(
            "2017-06-23",
            Date::from_datetime(&utc).unwrap().iso_gregorian()
        );
    }

    #[test]
    fn from_naive() {
        let nd = NaiveDate::from_ymd_opt(2000, 2, 5).unwrap();
        assert_eq!(Date::from_gregorian(2000, 2, 5), Date::from_naive(nd));
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2000, 1, 1).unwrap();
        assert_eq!("2000-02-05", (date + 35).iso_gregorian());
        assert_eq!("1999-12-31", (date + -1).iso_gregorian());
        assert_eq!(35, (date + 35) - date);
        assert_eq!(-35, date - (date + 35));
    }

    #[test]
    fn arithmetic_bounds() {
        assert_eq!(None, Date::from_jdn(0).checked_add(-1));
        assert_eq!(None, Date::from_jdn(u32::MAX).checked_add(1));
        assert_eq!(
            Some(Date::from_jdn(u32::MAX)),
            Date::from_jdn(u32::MAX - 5).checked_add(5)
        );
    }

    #[test]
    #[should_panic(expected = "overflow when adding days to date")]
    fn add_below_first_day() {
        let _ = Date::from_jdn(0) + -1;
    }

    #[test]
    #[should_panic(expected = "overflow when subtracting dates")]
    fn sub_out_of_i32() {
        let _ = Date::from_jdn(u32::MAX) - Date::from_jdn(0);
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }
}
