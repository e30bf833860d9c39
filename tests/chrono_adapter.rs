//! Tests for building contexts from chrono date-times.

#![cfg(feature = "chrono")]

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use noaa_solar::{CalendarDate, SolarContext};

#[test]
fn test_from_datetime_matches_numeric_api() {
    let datetime = "2024-03-20T12:00:00+00:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let from_chrono = SolarContext::from_datetime(datetime, 0.0, 0.0).unwrap();
    let numeric =
        SolarContext::new(0.0, 0.0, 0.5, 0.0, CalendarDate::new(2024, 3, 20).unwrap()).unwrap();

    assert_eq!(from_chrono, numeric);
    assert_eq!(
        from_chrono.solar_zenith_angle().to_bits(),
        numeric.solar_zenith_angle().to_bits()
    );
}

#[test]
fn test_sub_second_precision_is_dropped() {
    let datetime = Utc.with_ymd_and_hms(2024, 6, 21, 6, 0, 0).unwrap()
        + chrono::Duration::milliseconds(750);
    let context = SolarContext::from_datetime(datetime, 51.5, -0.13).unwrap();
    assert_eq!(context.day_time(), 0.25);
}

#[test]
fn test_local_date_is_used_across_midnight() {
    // 2024-01-01 02:00 in Tokyo is still 2023-12-31 in UTC.
    let tokyo = "2024-01-01T02:00:00+09:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let context = SolarContext::from_datetime(tokyo, 35.68, 139.69).unwrap();
    assert_eq!(context.date(), CalendarDate::new(2024, 1, 1).unwrap());
    assert_eq!(context.utc_offset_hours(), 9.0);

    let utc = SolarContext::from_datetime(tokyo.with_timezone(&Utc), 35.68, 139.69).unwrap();
    assert_eq!(utc.date(), CalendarDate::new(2023, 12, 31).unwrap());
    assert!((context.julian_day() - utc.julian_day()).abs() < 1e-9);
    assert!((context.solar_zenith_angle() - utc.solar_zenith_angle()).abs() < 1e-6);
}

#[test]
fn test_offset_outside_supported_range_is_rejected() {
    let offset = FixedOffset::west_opt(13 * 3600).unwrap();
    let datetime = offset.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    assert!(SolarContext::from_datetime(datetime, 0.0, 0.0).is_err());
}

#[test]
fn test_calendar_date_from_naive_date() {
    let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let date = CalendarDate::from_date_like(naive).unwrap();
    assert_eq!(date.day_of_year(), 60);
}

#[test]
fn test_sunrise_in_local_hours() {
    // Vienna, summer solstice, UTC+2
    let datetime = "2024-06-21T00:00:00+02:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let context = SolarContext::from_datetime(datetime, 48.21, 16.37).unwrap();
    let result = context.sunrise_and_sunset().unwrap();

    // Sunrise around 04:54, sunset around 20:59 local time.
    assert!((result.sunrise().unwrap().hours() - 4.9).abs() < 0.1);
    assert!((result.sunset().unwrap().hours() - 20.98).abs() < 0.1);
}
