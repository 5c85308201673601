//! Textual names for lunar dates, in Chinese and in Korean.

use crate::Error;
use crate::lunar::{LunarDate, Month};

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

const STEMS_CHINESE: &[&str] = &["癸", "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬"];
const BRANCHES_CHINESE: &[&str] = &[
    "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
];
const STEMS_KOREAN: &[&str] = &["계", "갑", "을", "병", "정", "무", "기", "경", "신", "임"];
const BRANCHES_KOREAN: &[&str] = &[
    "해", "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술",
];

/// 干支序號轉為文本形式。
///
/// # 用例
///
/// ```
/// use lunisolar::fmt;
///
/// assert_eq!("乙巳", fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    STEMS_CHINESE[(num % 10) as usize].to_owned() + BRANCHES_CHINESE[(num % 12) as usize]
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「臘月」。
///
/// # 用例
///
/// ```
/// use lunisolar::{fmt, Month::*};
///
/// assert_eq!("冬月", fmt::month(Common(11)).unwrap());
/// assert_eq!("閏正月", fmt::month(Leap(1)).unwrap());
/// ```
pub fn month(m: Month) -> Result<String, Error> {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "閏";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "臘",
        _ => return Err(Error::InvalidMonth(num)),
    };
    rt += "月";
    Ok(rt)
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use lunisolar::fmt;
///
/// assert_eq!("初十", fmt::day(10).unwrap());
/// assert_eq!("廿五", fmt::day(25).unwrap());
/// assert_eq!("三十", fmt::day(30).unwrap());
/// ```
pub fn day(d: u32) -> Result<String, Error> {
    let prefix = match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => return Err(Error::InvalidDay(d)),
    };
    Ok(prefix.to_owned() + NUM_CHINESE[(d % 10) as usize])
}

/// 完整中文日期，如「丁酉年閏六月初一」。
///
/// # 用例
///
/// ```
/// use lunisolar::{fmt, LunarDate, Month};
///
/// let lunar = LunarDate { year: 2017, month: Month::Leap(6), day: 1 };
/// assert_eq!("丁酉年閏六月初一", fmt::chinese(&lunar).unwrap());
/// ```
pub fn chinese(date: &LunarDate) -> Result<String, Error> {
    Ok(format!(
        "{}年{}{}",
        sexagenary(date.sexagenary_year()),
        month(date.month)?,
        day(date.day)?
    ))
}

/// Sexagenary name in Hangul.
///
/// ```
/// use lunisolar::fmt;
///
/// assert_eq!("정유", fmt::sexagenary_korean(34));
/// ```
pub fn sexagenary_korean(num: u32) -> String {
    STEMS_KOREAN[(num % 10) as usize].to_owned() + BRANCHES_KOREAN[(num % 12) as usize]
}

/// Korean month name, `윤` marking a leap month.
///
/// ```
/// use lunisolar::{fmt, Month::*};
///
/// assert_eq!("5월", fmt::month_korean(Common(5)).unwrap());
/// assert_eq!("윤5월", fmt::month_korean(Leap(5)).unwrap());
/// ```
pub fn month_korean(m: Month) -> Result<String, Error> {
    let num = m.num();
    if !(1..=12).contains(&num) {
        return Err(Error::InvalidMonth(num));
    }
    let leap = if m.is_leap() { "윤" } else { "" };
    Ok(format!("{leap}{num}월"))
}

/// Full Korean form, e.g. `정유년 윤5월 1일`.
///
/// ```
/// use lunisolar::{fmt, LunarDate, Month};
///
/// let lunar = LunarDate { year: 2017, month: Month::Leap(5), day: 1 };
/// assert_eq!("정유년 윤5월 1일", fmt::korean(&lunar).unwrap());
/// ```
pub fn korean(date: &LunarDate) -> Result<String, Error> {
    if !(1..=30).contains(&date.day) {
        return Err(Error::InvalidDay(date.day));
    }
    Ok(format!(
        "{}년 {} {}일",
        sexagenary_korean(date.sexagenary_year()),
        month_korean(date.month)?,
        date.day
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("癸亥", 60)] {
            assert_eq!(std, sexagenary(num));
        }
        for (std, num) in [("갑자", 1), ("경인", 27), ("계해", 60)] {
            assert_eq!(std, sexagenary_korean(num));
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d).unwrap());
        }
        assert_eq!(Err(Error::InvalidDay(0)), day(0));
        assert_eq!(Err(Error::InvalidDay(31)), day(31));
    }

    #[test]
    fn test_month() {
        assert_eq!("臘月", month(Month::Common(12)).unwrap());
        assert_eq!("閏十月", month(Month::Leap(10)).unwrap());
        assert_eq!(Err(Error::InvalidMonth(13)), month(Month::Common(13)));
        assert_eq!(Err(Error::InvalidMonth(0)), month_korean(Month::Leap(0)));
    }

    #[test]
    fn test_full() {
        let lunar = LunarDate {
            year: 1999,
            month: Month::Common(11),
            day: 25,
        };
        assert_eq!("己卯年冬月廿五", chinese(&lunar).unwrap());
        assert_eq!("기묘년 11월 25일", korean(&lunar).unwrap());
        let bad = LunarDate { day: 31, ..lunar };
        assert_eq!(Err(Error::InvalidDay(31)), korean(&bad));
    }
}
