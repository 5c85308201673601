//! Golden-value integration tests for both calendars.
//!
//! Table properties are checked over every supported year; end-to-end
//! values are pinned against published lunar calendars.

use chrono::{FixedOffset, TimeZone, Utc};
use lunisolar::chinese::{self, info};
use lunisolar::{Calendar, Date, Error, LunarDate, Month::*, korean};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn date(y: i32, m: i32, d: i32) -> Date {
    Date::from_gregorian(y, m, d).unwrap()
}

#[test]
fn chinese_year_length_matches_bitmask() {
    for year in chinese::MIN_YEAR..=chinese::MAX_YEAR {
        let regular: u32 = (1..=12).map(|m| info::month_length(year, m).unwrap()).sum();
        let long_months = (1..=12)
            .filter(|&m| info::month_length(year, m).unwrap() == 30)
            .count() as u32;
        let leap = info::leap_month_length(year).unwrap();

        assert_eq!(348 + long_months + leap, info::year_length(year).unwrap(), "{year}");
        assert_eq!(regular + leap, info::year_length(year).unwrap(), "{year}");
        if info::leap_month(year).unwrap().is_none() {
            assert_eq!(0, leap, "{year}");
        }
    }
}

#[test]
fn chinese_invalid_month_everywhere() {
    for year in chinese::MIN_YEAR..=chinese::MAX_YEAR {
        assert_eq!(Err(Error::InvalidMonth(0)), info::month_length(year, 0));
        assert_eq!(Err(Error::InvalidMonth(13)), info::month_length(year, 13));
    }
}

#[test]
fn korean_year_lengths_chain_new_years() {
    for year in korean::BASE_YEAR..=korean::MAX_YEAR {
        let first = korean::from_date(first_day_korean(year)).unwrap();
        assert_eq!((year, Common(1), 1), (first.year, first.month, first.day));
    }
}

// lunisolar new year of `year`, summing year lengths from the first table year
fn first_day_korean(year: i32) -> Date {
    let start = Date::from_jdn(korean::MIN_JDN as u32);
    let offset: u32 = (korean::BASE_YEAR..year)
        .map(|y| korean::year_length(y).unwrap())
        .sum();
    start + offset as i32
}

#[test]
fn reference_date_2000() {
    init_logger();
    let expected = LunarDate {
        year: 1999,
        month: Common(11),
        day: 25,
    };
    assert_eq!(Ok(expected), chinese::from_date(date(2000, 1, 1)));
    assert_eq!(Ok(expected), korean::from_date(date(2000, 1, 1)));
    assert_eq!((2000, 1, 1), chinese::from_date(date(2000, 2, 5)).unwrap().ymd());
    assert_eq!((2024, 1, 1), chinese::from_date(date(2024, 2, 10)).unwrap().ymd());
}

#[test]
fn reform_gap_is_not_corrected() {
    init_logger();
    // 1582-10-10 exists in the proleptic Gregorian calendar used for input
    assert_eq!(
        (1582, 9, 14),
        korean::from_date(date(1582, 10, 10)).unwrap().ymd()
    );
    assert_eq!(
        (1582, 9, 19),
        korean::from_date(date(1582, 10, 15)).unwrap().ymd()
    );
    assert!(matches!(
        chinese::from_date(date(1582, 10, 10)),
        Err(Error::OutOfRange {
            calendar: Calendar::Chinese,
            ..
        })
    ));
}

#[test]
fn korean_min_date() {
    init_logger();
    for (y, m, d) in [(1391, 2, 4), (1391, 2, 5), (1391, 2, 12)] {
        assert!(
            matches!(
                korean::from_date(date(y, m, d)),
                Err(Error::OutOfRange {
                    calendar: Calendar::Korean,
                    ..
                })
            ),
            "{y}-{m}-{d}"
        );
    }
    let first = korean::from_date(Date::from_jdn(korean::MIN_JDN as u32)).unwrap();
    assert_eq!((1391, Common(1), 1), (first.year, first.month, first.day));
}

#[test]
fn korean_dates_before_1654() {
    init_logger();
    // dates recorded in the Joseon almanac
    let data = [
        ((1397, 5, 15), (1397, Common(4), 10)),
        ((1446, 10, 9), (1446, Common(9), 10)),
        ((1545, 4, 28), (1545, Common(3), 8)),
        ((1592, 5, 23), (1592, Common(4), 13)),
        ((1597, 10, 26), (1597, Common(9), 16)),
        ((1598, 12, 16), (1598, Common(11), 19)),
        ((1762, 7, 4), (1762, Leap(5), 13)),
    ];
    for ((y, m, d), (ly, lm, ld)) in data {
        let got = korean::from_date(date(y, m, d)).unwrap();
        assert_eq!((ly, lm, ld), (got.year, got.month, got.day), "{y}-{m}-{d}");
    }
}

#[test]
fn leap_month_boundaries() {
    init_logger();
    let cases: [(fn(Date) -> Result<LunarDate, Error>, _, _); 4] = [
        (chinese::from_date, date(2017, 7, 23), (2017, Leap(6), 1)),
        (chinese::from_date, date(2017, 8, 21), (2017, Leap(6), 30)),
        (korean::from_date, date(2017, 6, 24), (2017, Leap(5), 1)),
        (korean::from_date, date(2017, 7, 22), (2017, Leap(5), 29)),
    ];
    for (convert, d, (y, m, day)) in cases {
        let got = convert(d).unwrap();
        assert_eq!((y, m, day), (got.year, got.month, got.day), "{}", d.iso_gregorian());
        assert!(got.is_leap());
    }
    // first day after each leap month is the next regular month
    assert_eq!(Common(7), chinese::from_date(date(2017, 8, 22)).unwrap().month);
    assert_eq!(Common(6), korean::from_date(date(2017, 7, 23)).unwrap().month);
    // both calendars agree on a leap month shared in 2020
    for convert in [chinese::from_date, korean::from_date] {
        assert_eq!(Leap(4), convert(date(2020, 5, 23)).unwrap().month);
        assert_eq!(Common(5), convert(date(2020, 6, 21)).unwrap().month);
    }
}

#[test]
fn timestamps_use_their_own_civil_date() {
    let kst = FixedOffset::east_opt(9 * 3600).unwrap();
    let t = kst.with_ymd_and_hms(1997, 2, 8, 0, 30, 0).unwrap();
    assert_eq!((1997, 1, 1), korean::convert(&t).unwrap().ymd());
    // same instant is still 1997-02-07 in UTC
    let utc = t.with_timezone(&Utc);
    assert_eq!((1996, 12, 30), korean::convert(&utc).unwrap().ymd());

    let late = Utc.with_ymd_and_hms(2000, 2, 4, 23, 59, 59).unwrap();
    assert_eq!((1999, 12, 29), chinese::convert(&late).unwrap().ymd());
}

#[test]
fn formatted_names() {
    let lunar = chinese::from_date(date(2017, 7, 23)).unwrap();
    assert_eq!("丁酉年閏六月初一", lunar.to_chinese().unwrap());
    let lunar = korean::from_date(date(2017, 6, 24)).unwrap();
    assert_eq!("정유년 윤5월 1일", lunar.to_korean().unwrap());
    assert_eq!("2017-L05-01", lunar.to_string());
}
