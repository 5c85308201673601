//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本模塊以預製的逐年月大小資料（見 [`info`]）推算夏曆，支持農曆 1900 年正月初一
//! （公曆 1900-01-31）至農曆 2100 年臘月末（公曆 2101-01-28）。
//!
//! # 用例
//!
//! ```
//! use lunisolar::{chinese, Date, Month::*};
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//! let lunar = chinese::from_date(date).unwrap();
//!
//! assert_eq!((1999, Common(11), 25), (lunar.year, lunar.month, lunar.day));
//! ```

use chrono::{DateTime, Datelike, TimeZone};
use log::{debug, trace};

use crate::date::{Date, julian_day};
use crate::error::{Calendar, Error};
use crate::lunar::{LunarDate, Month};

pub mod info;

pub use info::{MAX_YEAR, MIN_YEAR};

/// 起算日（公曆 1900-01-30）的儒略日數；農曆 1900 年正月初一為其後第 1 日。
pub const EPOCH_JDN: i64 = 2415050;

/// 將帶時區的時刻轉為農曆日期，以該時刻所在時區的公曆日期為準。
///
/// 不作四捨五入：午後乃至午夜前一刻仍屬當日，不進至次日。
///
/// # 用例
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use lunisolar::{chinese, Month::*};
///
/// let cst = FixedOffset::east_opt(8 * 3600).unwrap();
/// let t = cst.with_ymd_and_hms(2017, 7, 23, 23, 59, 59).unwrap();
/// let lunar = chinese::convert(&t).unwrap();
///
/// assert_eq!((2017, Leap(6), 1), (lunar.year, lunar.month, lunar.day));
/// ```
pub fn convert<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<LunarDate, Error> {
    from_jdn(julian_day(t.year(), t.month() as i32, t.day() as i32))
}

/// 取得給定日期的農曆日期。
///
/// 日期早於 1900-01-31 或晚於農曆 2100 年末則回報 [`Error::OutOfRange`]。
pub fn from_date(date: Date) -> Result<LunarDate, Error> {
    from_jdn(i64::from(date.jdn()))
}

fn from_jdn(jdn: i64) -> Result<LunarDate, Error> {
    let out_of_range = || {
        debug!("JDN {jdn} outside the Chinese calendar table");
        Error::OutOfRange {
            calendar: Calendar::Chinese,
            jdn,
        }
    };

    let offset = jdn - EPOCH_JDN;
    if offset < 1 {
        return Err(out_of_range());
    }
    let (year, offset) = year_by_offset(offset).ok_or_else(out_of_range)?;
    let (month, day) = month_by_offset(year, offset)?;

    let lunar = LunarDate {
        year,
        month,
        day: day as u32,
    };
    trace!("JDN {jdn} -> Chinese {lunar}");
    Ok(lunar)
}

/// 自 [`MIN_YEAR`] 起逐年扣除全年日數，返回所在年及年內日序（自 1 起）。
///
/// 超出 [`MAX_YEAR`] 則為 `None`。
fn year_by_offset(mut offset: i64) -> Option<(i32, i64)> {
    for year in MIN_YEAR..=MAX_YEAR {
        let days = i64::from(info::year_length(year).ok()?);
        if offset - days < 1 {
            return Some((year, offset));
        }
        offset -= days;
    }
    None
}

/// 依月序逐月扣除月日數，閏月緊隨同序平月之後。返回所在月及月內日序。
///
/// 閏月與否在扣除過程中記錄：僅當該日落在閏月區間內時為閏月。
fn month_by_offset(year: i32, mut offset: i64) -> Result<(Month, i64), Error> {
    let leap = info::leap_month(year)?;
    for num in 1..=12 {
        let days = i64::from(info::month_length(year, num)?);
        if offset <= days {
            return Ok((Month::Common(num), offset));
        }
        offset -= days;

        if leap == Some(num) {
            let days = i64::from(info::leap_month_length(year)?);
            if offset <= days {
                return Ok((Month::Leap(num), offset));
            }
            offset -= days;
        }
    }
    // year_by_offset 已保證日序不超過全年日數
    Err(Error::YearOutOfRange(year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    fn lunar(y: i32, m: i32, d: i32) -> Result<LunarDate, Error> {
        from_date(Date::from_gregorian(y, m, d).unwrap())
    }

    #[test]
    fn epoch() {
        assert_eq!(EPOCH_JDN, julian_day(1900, 1, 30));
        assert_eq!(
            Ok(LunarDate {
                year: 1900,
                month: Common(1),
                day: 1
            }),
            lunar(1900, 1, 31)
        );
        assert_eq!(
            Err(Error::OutOfRange {
                calendar: Calendar::Chinese,
                jdn: EPOCH_JDN
            }),
            lunar(1900, 1, 30)
        );
    }

    #[test]
    fn last_day() {
        assert_eq!((2100, 12, 29), lunar(2101, 1, 28).unwrap().ymd());
        assert!(matches!(
            lunar(2101, 1, 29),
            Err(Error::OutOfRange {
                calendar: Calendar::Chinese,
                ..
            })
        ));
    }

    #[test]
    fn afternoon_stays_on_civil_day() {
        use chrono::{FixedOffset, TimeZone};

        let cst = FixedOffset::east_opt(8 * 3600).unwrap();
        for (h, m, s) in [(0, 0, 0), (12, 0, 1), (18, 30, 0), (23, 59, 59)] {
            let t = cst.with_ymd_and_hms(2017, 1, 27, h, m, s).unwrap();
            assert_eq!((2016, 12, 30), convert(&t).unwrap().ymd(), "{h}:{m}:{s}");
        }
        let t = cst.with_ymd_and_hms(2017, 1, 28, 0, 0, 0).unwrap();
        assert_eq!((2017, 1, 1), convert(&t).unwrap().ymd());
    }

    #[test]
    fn year_walk() {
        assert_eq!(Some((1900, 1)), year_by_offset(1));
        assert_eq!(Some((1900, 384)), year_by_offset(384));
        assert_eq!(Some((1901, 1)), year_by_offset(385));
        assert_eq!(None, year_by_offset(i64::MAX / 2));
    }

    #[test]
    fn dates() {
        let data = [
            ((2016, 11, 29), (2016, Common(11), 1)),
            ((2017, 1, 27), (2016, Common(12), 30)),
            ((2017, 1, 28), (2017, Common(1), 1)),
            ((2017, 6, 24), (2017, Common(6), 1)),
            ((2017, 7, 22), (2017, Common(6), 29)),
            ((2017, 7, 23), (2017, Leap(6), 1)),
            ((2017, 8, 21), (2017, Leap(6), 30)),
            ((2017, 8, 22), (2017, Common(7), 1)),
            ((2017, 12, 17), (2017, Common(10), 30)),
        ];
        for ((y, m, d), (ly, lm, ld)) in data {
            let got = lunar(y, m, d).unwrap();
            assert_eq!((ly, lm, ld), (got.year, got.month, got.day), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn regular_month_sharing_leap_number_is_not_leap() {
        // 六月初一與閏六月初一同號，只有後者為閏
        assert!(!lunar(2017, 6, 24).unwrap().is_leap());
        assert!(lunar(2017, 7, 23).unwrap().is_leap());
        // 閏十一月跨公曆年，其後為臘月及次年正月
        let data = [
            ((2033, 12, 21), (2033, Common(11), 30)),
            ((2033, 12, 22), (2033, Leap(11), 1)),
            ((2034, 1, 19), (2033, Leap(11), 29)),
            ((2034, 2, 18), (2033, Common(12), 30)),
            ((2034, 2, 19), (2034, Common(1), 1)),
        ];
        for ((y, m, d), (ly, lm, ld)) in data {
            let got = lunar(y, m, d).unwrap();
            assert_eq!((ly, lm, ld), (got.year, got.month, got.day), "{y}-{m}-{d}");
        }
        assert_eq!(

            LunarDate {
                year: 2033,
                month: Common(12),
                day: 1
            },
            lunar(2034, 1, 20).unwrap()
        );
    }
}
