//! UTC offsets from IANA time zone names.
//!
//! [`SolarContext`] only needs the offset in hours; this module resolves it
//! from the `chrono-tz` database for a given UTC instant, so daylight saving
//! time is taken into account.

use crate::{Error, Result, SolarContext};
use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Parses an IANA time zone identifier such as `"Europe/Vienna"`.
///
/// # Errors
/// Returns `UnknownTimeZone` if the name is not in the time zone database.
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::unknown_time_zone(name))
}

/// UTC offset in seconds of the named zone at the given instant.
///
/// # Errors
/// Returns `UnknownTimeZone` if the name is not in the time zone database.
///
/// # Example
/// ```
/// # use noaa_solar::tz::utc_offset_seconds;
/// use chrono::{TimeZone, Utc};
///
/// let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
/// assert_eq!(utc_offset_seconds("Europe/Vienna", winter).unwrap(), 3600);
/// assert_eq!(utc_offset_seconds("Europe/Vienna", summer).unwrap(), 7200);
/// ```
pub fn utc_offset_seconds(zone: &str, instant: DateTime<Utc>) -> Result<i32> {
    let tz = parse_zone(zone)?;
    Ok(tz
        .offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc())
}

/// UTC offset in hours of the named zone at the given instant.
///
/// # Errors
/// Returns `UnknownTimeZone` if the name is not in the time zone database.
pub fn utc_offset_hours(zone: &str, instant: DateTime<Utc>) -> Result<f64> {
    utc_offset_seconds(zone, instant).map(|seconds| f64::from(seconds) / 3600.0)
}

/// Builds a context for a UTC instant expressed in the named zone's local time.
///
/// # Errors
/// Returns `UnknownTimeZone` for an unknown zone name, or the validation
/// errors of [`SolarContext::new`].
pub fn context_in_zone(
    zone: &str,
    instant: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
) -> Result<SolarContext> {
    let tz = parse_zone(zone)?;
    SolarContext::from_datetime(instant.with_timezone(&tz), latitude, longitude)
}
