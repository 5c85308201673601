//! Korean lunisolar calendar.
//!
//! Dates are looked up in precomputed month, year and leap tables covering
//! lunisolar 1391-01-01 (JDN 2229156) through 2050-12-31 Gregorian
//! (lunisolar 2050-11-18). Dates outside that span are rejected
//! with [`Error::OutOfRange`].
//!
//! # Examples
//!
//! ```
//! use lunisolar::{korean, Date, Month::*};
//!
//! let date = Date::from_gregorian(2017, 6, 24).unwrap();
//! let lunar = korean::from_date(date).unwrap();
//!
//! assert_eq!((2017, Leap(5), 1), (lunar.year, lunar.month, lunar.day));
//! ```

use chrono::{DateTime, Datelike, TimeZone};
use log::{debug, trace};

use crate::date::{Date, julian_day};
use crate::error::{Calendar, Error};
use crate::lunar::{LunarDate, Month};

mod tables;

use tables::{LEAP_TABLE, MONTH_TABLE, YEAR_TABLE};

/// First lunisolar year in the tables.
pub const BASE_YEAR: i32 = 1391;
/// Last lunisolar year in the tables.
pub const MAX_YEAR: i32 = 2050;
/// JDN of lunisolar 1391-01-01, i.e. 1391-02-05 Julian, 1391-02-13 Gregorian.
pub const MIN_JDN: i64 = 2229156;
/// JDN of 2050-12-31 Gregorian, lunisolar 2050-11-18.
pub const MAX_JDN: i64 = 2470172;

/// Converts a timestamp, taking the civil date in its own time zone.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use lunisolar::{korean, Month::*};
///
/// let kst = FixedOffset::east_opt(9 * 3600).unwrap();
/// let t = kst.with_ymd_and_hms(2050, 12, 31, 12, 0, 0).unwrap();
/// assert_eq!((2050, 11, 18), korean::convert(&t).unwrap().ymd());
///
/// let t = kst.with_ymd_and_hms(2051, 1, 1, 0, 0, 0).unwrap();
/// assert!(korean::convert(&t).is_err());
/// ```
pub fn convert<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<LunarDate, Error> {
    from_jdn(julian_day(t.year(), t.month() as i32, t.day() as i32))
}

/// Converts a calendar-independant date.
pub fn from_date(date: Date) -> Result<LunarDate, Error> {
    from_jdn(i64::from(date.jdn()))
}

fn from_jdn(jdn: i64) -> Result<LunarDate, Error> {
    let out_of_range = || {
        debug!("JDN {jdn} outside the Korean calendar tables");
        Error::OutOfRange {
            calendar: Calendar::Korean,
            jdn,
        }
    };

    if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
        return Err(out_of_range());
    }
    let days = (jdn - MIN_JDN) as u32;

    // last month starting on or before `days`
    let slot = MONTH_TABLE
        .partition_point(|&start| start <= days)
        .checked_sub(1)
        .ok_or_else(out_of_range)?;
    // last year starting on or before `slot`
    let year_idx = YEAR_TABLE
        .partition_point(|&first| usize::from(first) <= slot)
        .checked_sub(1)
        .ok_or_else(out_of_range)?;

    let mut month = (slot - usize::from(YEAR_TABLE[year_idx])) as u32 + 1;
    let day = days - MONTH_TABLE[slot] + 1;
    let leap = u32::from(LEAP_TABLE[year_idx]);
    let mut is_leap = false;
    if leap != 0 && month >= leap {
        is_leap = month == leap;
        month -= 1;
    }

    let lunar = LunarDate {
        year: BASE_YEAR + year_idx as i32,
        month: Month::new(month, is_leap),
        day,
    };
    trace!("JDN {jdn} -> Korean {lunar}");
    Ok(lunar)
}

/// Index of `year` into the year and leap tables.
fn year_index(year: i32) -> Result<usize, Error> {
    if !(BASE_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::YearOutOfRange(year));
    }
    Ok((year - BASE_YEAR) as usize)
}

/// Range of [`MONTH_TABLE`] slots belonging to the year at `idx`.
fn month_slots(idx: usize) -> std::ops::Range<usize> {
    let start = usize::from(YEAR_TABLE[idx]);
    let end = YEAR_TABLE
        .get(idx + 1)
        .map_or(MONTH_TABLE.len() - 1, |&next| usize::from(next));
    start..end
}

/// Number of the regular month a leap month follows, `None` if the year has
/// no leap month.
///
/// ```
/// use lunisolar::korean;
///
/// assert_eq!(Ok(Some(5)), korean::leap_month(2017));
/// assert_eq!(Ok(None), korean::leap_month(2000));
/// ```
pub fn leap_month(year: i32) -> Result<Option<u32>, Error> {
    Ok(match LEAP_TABLE[year_index(year)?] {
        0 => None,
        pos => Some(u32::from(pos) - 1),
    })
}

/// Number of months in the year, 12 or 13.
pub fn months_in_year(year: i32) -> Result<u32, Error> {
    Ok(month_slots(year_index(year)?).len() as u32)
}

/// Days in the year, leap month included.
///
/// ```
/// use lunisolar::korean;
///
/// assert_eq!(Ok(354), korean::year_length(2000));
/// assert_eq!(Ok(384), korean::year_length(2017));
/// ```
pub fn year_length(year: i32) -> Result<u32, Error> {
    let slots = month_slots(year_index(year)?);
    Ok(MONTH_TABLE[slots.end] - MONTH_TABLE[slots.start])
}

/// Days in a month, 29 or 30.
///
/// Asking for a leap month the year does not have is an
/// [`Error::InvalidMonth`].
///
/// ```
/// use lunisolar::{korean, Month::*};
///
/// assert_eq!(Ok(29), korean::month_length(2017, Common(5)));
/// assert_eq!(Ok(29), korean::month_length(2017, Leap(5)));
/// assert_eq!(Ok(30), korean::month_length(2017, Common(6)));
/// ```
pub fn month_length(year: i32, month: Month) -> Result<u32, Error> {
    let num = month.num();
    if !(1..=12).contains(&num) {
        return Err(Error::InvalidMonth(num));
    }
    let leap = leap_month(year)?;
    if month.is_leap() && leap != Some(num) {
        return Err(Error::InvalidMonth(num));
    }
    // ordinal position within the year, leap month counted
    let pos = match leap {
        Some(l) if num > l || (num == l && month.is_leap()) => num,
        _ => num - 1,
    };
    let slot = month_slots(year_index(year)?).start + pos as usize;
    Ok(MONTH_TABLE[slot + 1] - MONTH_TABLE[slot])
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    fn lunar(y: i32, m: i32, d: i32) -> Result<LunarDate, Error> {
        from_date(Date::from_gregorian(y, m, d).unwrap())
    }

    #[test]
    fn tables_are_consistent() {
        assert_eq!(0, MONTH_TABLE[0]);
        assert!(MONTH_TABLE.windows(2).all(|w| matches!(w[1] - w[0], 29 | 30)));
        assert!(YEAR_TABLE.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(YEAR_TABLE.len(), LEAP_TABLE.len());
        assert_eq!((MAX_YEAR - BASE_YEAR + 1) as usize, YEAR_TABLE.len());
        assert_eq!(0, YEAR_TABLE[0]);
        // a leap month never precedes month 1
        assert!(LEAP_TABLE.iter().all(|&pos| pos == 0 || (2..=13).contains(&pos)));
        for idx in 0..YEAR_TABLE.len() {
            let expected = if LEAP_TABLE[idx] == 0 { 12 } else { 13 };
            assert_eq!(expected, month_slots(idx).len(), "year {}", BASE_YEAR + idx as i32);
        }
        assert!(MONTH_TABLE[MONTH_TABLE.len() - 1] as i64 > MAX_JDN - MIN_JDN);
    }

    #[test]
    fn bounds() {
        assert_eq!(
            Ok(LunarDate {
                year: 1391,
                month: Common(1),
                day: 1
            }),
            lunar(1391, 2, 13)
        );
        assert_eq!(
            Err(Error::OutOfRange {
                calendar: Calendar::Korean,
                jdn: MIN_JDN - 1
            }),
            lunar(1391, 2, 12)
        );
        assert_eq!((2050, 11, 18), lunar(2050, 12, 31).unwrap().ymd());
        assert_eq!(
            Err(Error::OutOfRange {
                calendar: Calendar::Korean,
                jdn: MAX_JDN + 1
            }),
            lunar(2051, 1, 1)
        );
    }

    #[test]
    fn leap_boundaries() {
        let data = [
            ((2017, 6, 23), (2017, Common(5), 29)),
            ((2017, 6, 24), (2017, Leap(5), 1)),
            ((2017, 7, 22), (2017, Leap(5), 29)),
            ((2017, 7, 23), (2017, Common(6), 1)),
            ((2012, 4, 20), (2012, Common(3), 30)),
            ((2012, 4, 21), (2012, Leap(3), 1)),
            ((2012, 5, 20), (2012, Leap(3), 30)),
            ((2012, 5, 21), (2012, Common(4), 1)),
        ];
        for ((y, m, d), (ly, lm, ld)) in data {
            let got = lunar(y, m, d).unwrap();
            assert_eq!((ly, lm, ld), (got.year, got.month, got.day), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn leap_month_after_twelfth() {
        assert_eq!(Ok(Some(12)), leap_month(1392));
        assert_eq!(13, LEAP_TABLE[1]);
        let data = [
            ((1393, 1, 20), (1392, Common(12), 30)),
            ((1393, 1, 21), (1392, Leap(12), 1)),
            ((1393, 2, 19), (1392, Leap(12), 30)),
            ((1393, 2, 20), (1393, Common(1), 1)),
        ];
        for ((y, m, d), (ly, lm, ld)) in data {
            let got = lunar(y, m, d).unwrap();
            assert_eq!((ly, lm, ld), (got.year, got.month, got.day), "{y}-{m}-{d}");
        }
        assert_eq!(Ok(30), month_length(1392, Common(12)));
        assert_eq!(Ok(30), month_length(1392, Leap(12)));
        assert_eq!(Ok(13), months_in_year(1392));
    }

    #[test]
    fn mean_term_leap_months() {
        // leap placement by mean solar terms before 1654
        assert_eq!(Ok(Some(1)), leap_month(1545));
        let got = lunar(1545, 3, 12).unwrap();
        assert_eq!((1545, Leap(1), 20), (got.year, got.month, got.day));
        assert_eq!(Ok(Some(11)), leap_month(1403));
        // true solar terms afterwards
        assert_eq!(Ok(Some(5)), leap_month(1762));
    }

    #[test]
    fn differs_from_chinese_new_year() {
        assert_eq!((1996, 12, 30), lunar(1997, 2, 7).unwrap().ymd());
        assert_eq!((1997, 1, 1), lunar(1997, 2, 8).unwrap().ymd());
    }

    #[test]
    fn year_queries() {
        assert_eq!(Ok(13), months_in_year(2017));
        assert_eq!(Ok(12), months_in_year(2000));
        assert_eq!(Ok(354), year_length(1391));
        assert_eq!(Ok(384), year_length(2050));
        assert_eq!(Ok(Some(3)), leap_month(2050));
        assert_eq!(Err(Error::YearOutOfRange(1390)), year_length(1390));
        assert_eq!(Err(Error::YearOutOfRange(2051)), leap_month(2051));
    }

    #[test]
    fn month_lengths_sum_to_year() {
        for year in BASE_YEAR..=MAX_YEAR {
            let mut total: u32 = (1..=12).map(|m| month_length(year, Common(m)).unwrap()).sum();
            if let Some(leap) = leap_month(year).unwrap() {
                total += month_length(year, Leap(leap)).unwrap();
            }
            assert_eq!(year_length(year).unwrap(), total, "{year}");
        }
    }

    #[test]
    fn month_length_errors() {
        assert_eq!(Err(Error::InvalidMonth(13)), month_length(2017, Common(13)));
        assert_eq!(Err(Error::InvalidMonth(0)), month_length(2017, Common(0)));
        assert_eq!(Err(Error::InvalidMonth(6)), month_length(2017, Leap(6)));
        assert_eq!(Err(Error::InvalidMonth(1)), month_length(2000, Leap(1)));
    }
}
