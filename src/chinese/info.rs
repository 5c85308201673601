//! 逐年月大小及閏月資料
//!
//! 每年以一個整數表示：
//!
//! - 第 0–3 位：閏月月序，無閏月為 0
//! - 第 4–15 位：自十二月（第 4 位）至正月（第 15 位），置位為大月（三十日），否則為小月（二十九日）
//! - 第 16 位：閏月為大月則置位

use crate::Error;

/// 資料首年
pub const MIN_YEAR: i32 = 1900;
/// 資料末年
pub const MAX_YEAR: i32 = 2100;

#[rustfmt::skip]
static LUNAR_INFO: [u32; (MAX_YEAR - MIN_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                   // 2100
];

/// 月大小位段：正月至十二月
const MONTH_BITS: u32 = 0xfff0;
/// 閏月大小位
const LEAP_LONG_BIT: u32 = 0x10000;

/// 取得 `year` 年的資料；不在 [`MIN_YEAR`]..=[`MAX_YEAR`] 則回報錯誤，不以 0 代替。
fn lunar_info(year: i32) -> Result<u32, Error> {
    year.checked_sub(MIN_YEAR)
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| LUNAR_INFO.get(idx))
        .copied()
        .ok_or(Error::YearOutOfRange(year))
}

/// 全年日數，含閏月。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::info;
///
/// assert_eq!(Ok(354), info::year_length(2000));
/// assert_eq!(Ok(384), info::year_length(2017));
/// ```
pub fn year_length(year: i32) -> Result<u32, Error> {
    let info = lunar_info(year)?;
    Ok(348 + (info & MONTH_BITS).count_ones() + leap_month_length(year)?)
}

/// 平月日數，大月 30 日，小月 29 日。
///
/// 月序不在 `1..=12` 則回報 [`Error::InvalidMonth`]。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::info;
///
/// assert_eq!(Ok(30), info::month_length(2000, 1));
/// assert_eq!(Ok(29), info::month_length(2000, 3));
/// ```
pub fn month_length(year: i32, month: u32) -> Result<u32, Error> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth(month));
    }
    let info = lunar_info(year)?;
    Ok(if info & (LEAP_LONG_BIT >> month) != 0 {
        30
    } else {
        29
    })
}

/// 閏月月序，無閏月則為 `None`。
///
/// # 用例
///
/// ```
/// use lunisolar::chinese::info;
///
/// assert_eq!(Ok(Some(6)), info::leap_month(2017));
/// assert_eq!(Ok(None), info::leap_month(2000));
/// ```
pub fn leap_month(year: i32) -> Result<Option<u32>, Error> {
    Ok(match lunar_info(year)? & 0xf {
        0 => None,
        m => Some(m),
    })
}

/// 閏月日數，無閏月則為 0。
pub fn leap_month_length(year: i32) -> Result<u32, Error> {
    let info = lunar_info(year)?;
    Ok(match (leap_month(year)?, info & LEAP_LONG_BIT != 0) {
        (None, _) => 0,
        (Some(_), true) => 30,
        (Some(_), false) => 29,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_range() {
        assert_eq!((MAX_YEAR - MIN_YEAR + 1) as usize, LUNAR_INFO.len());
        assert_eq!(Ok(0x04bd8), lunar_info(MIN_YEAR));
        assert_eq!(Ok(0x0d520), lunar_info(MAX_YEAR));
        assert_eq!(Err(Error::YearOutOfRange(1899)), lunar_info(1899));
        assert_eq!(Err(Error::YearOutOfRange(2101)), lunar_info(2101));
    }

    #[test]
    fn year_1900() {
        let lengths: Vec<_> = (1..=12).map(|m| month_length(1900, m).unwrap()).collect();
        assert_eq!(
            vec![29, 30, 29, 29, 30, 29, 30, 30, 30, 30, 29, 30],
            lengths
        );
        assert_eq!(Ok(Some(8)), leap_month(1900));
        assert_eq!(Ok(29), leap_month_length(1900));
        assert_eq!(Ok(384), year_length(1900));
    }

    #[test]
    fn leap_years() {
        for (year, leap, len) in [(2017, 6, 30), (2020, 4, 29), (2023, 2, 29), (2033, 11, 29)] {
            assert_eq!(Ok(Some(leap)), leap_month(year), "{year}");
            assert_eq!(Ok(len), leap_month_length(year), "{year}");
        }
    }

    #[test]
    fn invalid_month() {
        for month in [0, 13, 100] {
            assert_eq!(Err(Error::InvalidMonth(month)), month_length(2000, month));
        }
        assert_eq!(Err(Error::YearOutOfRange(1800)), month_length(1800, 1));
    }

    #[test]
    fn out_of_range_years() {
        assert_eq!(Err(Error::YearOutOfRange(2101)), year_length(2101));
        assert_eq!(Err(Error::YearOutOfRange(1899)), leap_month(1899));
        assert_eq!(Err(Error::YearOutOfRange(i32::MIN)), leap_month_length(i32::MIN));
    }
}
