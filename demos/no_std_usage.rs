//! Example demonstrating the numeric API without std/chrono dependencies.
//!
//! Everything used here is available with `default-features = false,
//! features = ["libm"]`; only the printing needs std.

use noaa_solar::noaa;
use noaa_solar::time::{CalendarDate, JulianDate};
use noaa_solar::{SolarContext, SunriseHourAngle};

fn main() {
    // 2024-06-21 12:00:00 UTC
    let date = CalendarDate::new(2024, 6, 21).expect("Valid date");
    let jd = JulianDate::from_local(date, 0.5, 0.0);
    let t = jd.julian_century();

    println!("NOAA solar calculations without std/chrono dependencies\n");
    println!("Julian Date: {:.6}", jd.julian_day());
    println!("Julian Century: {t:.9}\n");

    println!("Time-dependent terms:");
    println!("  Geometric mean longitude: {:.4}°", noaa::geom_mean_long_sun(t));
    println!("  Apparent longitude: {:.4}°", noaa::sun_app_long(t));
    println!("  Obliquity (corrected): {:.4}°", noaa::obliq_corr(t));
    println!("  Declination: {:.4}°", noaa::sun_declination(t));
    println!("  Right ascension: {:.4}°", noaa::sun_right_ascension(t));
    println!("  Equation of time: {:.3} min", noaa::equation_of_time(t));
    println!("  Sun-Earth distance: {:.6} AU\n", noaa::sun_rad_vector(t));

    // Vienna through the context API
    let context = SolarContext::new(48.21, 16.37, 0.5, 0.0, date).expect("Valid coordinates");
    println!("Vienna (48.21°N, 16.37°E) at 12:00 UTC:");
    println!("  Zenith: {:.3}°", context.solar_zenith_angle());
    match context.solar_azimuth_angle() {
        Ok(azimuth) => println!("  Azimuth: {azimuth:.3}°"),
        Err(error) => println!("  Azimuth: {error}"),
    }

    // Coordinate sweep sharing the time-dependent terms
    println!("\nCoordinate sweep example (3 locations, same instant):");

    let eot = noaa::equation_of_time(t);
    let declination = noaa::sun_declination(t);

    let locations = [
        ("Vienna", 48.21, 16.37),
        ("San Francisco", 37.7749, -122.4194),
        ("Sydney", -33.8688, 151.2093),
    ];

    for (name, lat, lon) in &locations {
        let tst = noaa::true_solar_time(0.5, *lon, eot, 0.0);
        let hour_angle = noaa::hour_angle(tst);
        let zenith = noaa::zenith_angle(*lat, declination, hour_angle);
        let daylight = match noaa::hour_angle_at_zenith(*lat, declination, noaa::SUNRISE_ZENITH) {
            Ok(SunriseHourAngle::Regular(degrees)) => format!("{:.2} h", degrees / 7.5),
            Ok(SunriseHourAngle::PolarDay) => "24 h".to_owned(),
            Ok(SunriseHourAngle::PolarNight) => "0 h".to_owned(),
            Err(error) => error.to_string(),
        };

        println!("  {name} - Zenith: {zenith:.1}°, Hour angle: {hour_angle:.1}°, Daylight: {daylight}");
    }
}
