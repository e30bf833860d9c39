//! Resolving UTC offsets by IANA time zone name before building a context.

use chrono::{TimeZone, Utc};
use noaa_solar::tz;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let places = [
        ("New York", "America/New_York", 40.7128, -74.0060),
        ("Vienna", "Europe/Vienna", 48.21, 16.37),
        ("Kathmandu", "Asia/Kathmandu", 27.7172, 85.3240),
        ("Adelaide", "Australia/Adelaide", -34.9285, 138.6007),
    ];

    for instant in [
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap(),
    ] {
        println!("=== {} ===", instant.format("%Y-%m-%d %H:%M UTC"));
        for (name, zone, latitude, longitude) in &places {
            let offset = tz::utc_offset_hours(zone, instant)?;
            let context = tz::context_in_zone(zone, instant, *latitude, *longitude)?;
            let day = context.sunrise_and_sunset()?;

            print!(
                "{name:<10} UTC{offset:+5.2}  local {:5.2} h  zenith {:6.2}°",
                context.day_time() * 24.0,
                context.solar_zenith_angle()
            );
            match (day.sunrise(), day.sunset()) {
                (Some(sunrise), Some(sunset)) => println!(
                    "  sunrise {:5.2} h  sunset {:5.2} h",
                    sunrise.hours(),
                    sunset.hours()
                ),
                _ => println!("  no sunrise/sunset"),
            }
        }
        println!();
    }

    let instant = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
    match tz::utc_offset_hours("Europe/Atlantis", instant) {
        Ok(offset) => println!("Unexpected offset {offset}"),
        Err(error) => println!("Lookup failed as expected: {error}"),
    }

    Ok(())
}
