//! Basic solar position calculation example.

use noaa_solar::{CalendarDate, SolarContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // San Francisco, June 21, 2023 at 12:00 Pacific Daylight Time (UTC-7)
    let date = CalendarDate::new(2023, 6, 21)?;
    let latitude = 37.7749;
    let longitude = -122.4194;

    let context = SolarContext::new(latitude, longitude, 0.5, -7.0, date)?;

    // The same instant, expressed in UTC (19:00)
    let context_utc = context
        .with_utc_offset_hours(0.0)?
        .with_day_time(19.0 / 24.0)?;

    let position = context.solar_position()?;
    let position_utc = context_utc.solar_position()?;

    println!("Solar position for San Francisco on June 21, 2023 at noon Pacific Time:");
    println!("  Julian day: {:.6}", context.julian_day());
    println!("  Equation of time: {:.3} min", context.equation_of_time());
    println!("  Declination: {:.3}°", context.solar_declination());
    println!("  Hour angle: {:.3}°", context.sun_hour_angle());
    println!("  Azimuth: {:.3}°", position.azimuth());
    println!("  Elevation: {:.3}°", position.elevation_angle());
    println!("  Zenith angle: {:.3}°", position.zenith_angle());

    println!("\nUsing UTC (same moment):");
    println!("  Azimuth: {:.3}°", position_utc.azimuth());
    println!("  Zenith angle: {:.3}°", position_utc.zenith_angle());

    println!(
        "\nDifference between both: {:.2e}°",
        (position.zenith_angle() - position_utc.zenith_angle()).abs()
    );

    if position.is_sun_up() {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    Ok(())
}
