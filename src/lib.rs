//! Utilities for converting Gregorian dates into lunisolar calendars.
//!
//! Two calendars are supported, each driven by precomputed tables:
//!
//! - [`chinese`]: Chinese lunisolar calendar, lunar years 1900 through 2100
//! - [`korean`]: Korean lunisolar calendar, lunisolar 1391-01-01 through
//!   2050-12-31 Gregorian
//!
//! Both return a [`LunarDate`] (year, [`Month`], day) or an [`Error`] when the
//! date falls outside the tables.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use lunisolar::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Chinese and Korean calendars, from a `chrono` timestamp:
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use lunisolar::{chinese, korean, Month::*};
//!
//! let kst = FixedOffset::east_opt(9 * 3600).unwrap();
//! let t = kst.with_ymd_and_hms(2017, 6, 24, 9, 0, 0).unwrap();
//!
//! assert_eq!(Common(6), chinese::convert(&t).unwrap().month);
//! assert_eq!(Leap(5), korean::convert(&t).unwrap().month);
//! ```
//!
//! Conversion from lunar dates back to Gregorian is not provided.

pub mod chinese;
pub mod date;
pub mod error;
pub mod fmt;
pub mod korean;
pub mod lunar;

pub use date::Date;
pub use error::{Calendar, Error};
pub use lunar::{LunarDate, Month};
