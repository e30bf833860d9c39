//! Calendar dates and Julian day calculations.
//!
//! Dates use the proleptic Gregorian calendar for all years. The Julian day is
//! anchored at 1900-01-01 00:00 UTC (JD 2415020.5), the epoch used by the NOAA
//! solar calculator.

#![allow(clippy::unreadable_literal)]

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Julian Day Number of 1900-01-01 00:00:00 UTC.
pub const JD_1900_EPOCH: f64 = 2_415_020.5;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC).
pub const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Hours per day.
const HOURS_PER_DAY: f64 = 24.0;

/// Days between 1900-01-01 and 1970-01-01.
const DAYS_1900_TO_UNIX_EPOCH: i64 = 25_567;

/// A validated calendar date in the proleptic Gregorian calendar.
///
/// # Example
/// ```
/// # use noaa_solar::time::CalendarDate;
/// let date = CalendarDate::new(2024, 3, 20).unwrap();
/// assert_eq!(date.day_of_year(), 80);
/// assert!(CalendarDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date from year, month (1-12) and day of month.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not
    /// exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 {
            return Err(Error::invalid_date("day must be at least 1"));
        }
        if day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a calendar date from any chrono type implementing `Datelike`.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the chrono value carries an impossible date.
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_date_like<D: Datelike>(date: D) -> Result<Self> {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the ordinal day of the year (1-366).
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn day_of_year(&self) -> u32 {
        let jan_first = days_from_civil(self.year, 1, 1);
        // At most 365, fits in u32.
        (days_from_civil(self.year, self.month, self.day) - jan_first + 1) as u32
    }

    /// Whole days elapsed since 1900-01-01 (negative for earlier dates).
    #[must_use]
    pub fn days_since_1900(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day) + DAYS_1900_TO_UNIX_EPOCH
    }
}

/// Julian date representation for astronomical calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    /// Julian Date (JD) referenced to UTC
    jd: f64,
}

impl JulianDate {
    /// Creates a Julian date from a raw Julian Day number.
    #[must_use]
    pub const fn from_julian_day(jd: f64) -> Self {
        Self { jd }
    }

    /// Creates a Julian date from a local calendar date, the fraction of the
    /// local day elapsed and the local UTC offset in hours.
    ///
    /// JD = 2415020.5 + days since 1900-01-01 + `day_time` − `utc_offset_hours`/24
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::time::{CalendarDate, JulianDate};
    /// let date = CalendarDate::new(2000, 1, 1).unwrap();
    /// let jd = JulianDate::from_local(date, 0.5, 0.0);
    /// assert_eq!(jd.julian_day(), 2_451_545.0);
    /// assert_eq!(jd.julian_century(), 0.0);
    /// ```
    #[must_use]
    pub fn from_local(date: CalendarDate, day_time: f64, utc_offset_hours: f64) -> Self {
        let jd = JD_1900_EPOCH + date.days_since_1900() as f64 + day_time
            - utc_offset_hours / HOURS_PER_DAY;
        Self { jd }
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_day(&self) -> f64 {
        self.jd
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Howard Hinnant's `days_from_civil`, valid for every `i32` year.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let m = i64::from(month);
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
