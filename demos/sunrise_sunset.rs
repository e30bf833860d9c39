//! Sunrise/sunset calculation example with different twilight types across diverse global locations.

use noaa_solar::{CalendarDate, ClockHours, Horizon, SolarContext, SunriseResult};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            utc_offset_hours: 1.0,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            utc_offset_hours: -9.0,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            utc_offset_hours: 13.0,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            utc_offset_hours: 8.0,
        },
        City {
            name: "Brasília, Brazil",
            latitude: -15.8,
            longitude: -47.85,
            utc_offset_hours: -3.0,
        },
    ];

    // Winter solstice in the north shows the most extreme variations
    let date = CalendarDate::new(2023, 12, 21)?;

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E (UTC{:+})",
            city.latitude, city.longitude, city.utc_offset_hours
        );
        println!("Date: December 21, 2023 (Winter Solstice)");
        println!();

        let context = SolarContext::builder(city.latitude, city.longitude, date)
            .day_time(0.5)
            .utc_offset_hours(city.utc_offset_hours)
            .build()?;
        calculate_and_print_times(&context)?;
        println!();
    }

    Ok(())
}

fn calculate_and_print_times(context: &SolarContext) -> Result<(), Box<dyn std::error::Error>> {
    let horizons = [
        ("Sunrise/Sunset", Horizon::SunriseSunset),
        ("Civil Twilight", Horizon::CivilTwilight),
        ("Nautical Twilight", Horizon::NauticalTwilight),
        ("Astronomical Twilight", Horizon::AstronomicalTwilight),
    ];

    for (name, horizon) in &horizons {
        let result = context.sunrise_and_sunset_for_horizon(*horizon)?;
        print_sunrise_result(name, &result);
    }

    match context.day_length()? {
        Some(hours) => println!("Day length: {}", format_hours(ClockHours::from_hours(hours))),
        None => println!("Day length: no sunrise or sunset"),
    }

    Ok(())
}

fn format_hours(time: ClockHours) -> String {
    let (day_offset, hours) = time.day_and_hours();
    let minutes = (hours * 60.0).round() as i64;
    let suffix = match day_offset {
        0 => String::new(),
        offset => format!(" ({offset:+} day)"),
    };
    format!("{:02}:{:02}{suffix}", minutes / 60, minutes % 60)
}

fn print_sunrise_result(label: &str, result: &SunriseResult<ClockHours>) {
    println!("{label}:");
    match result {
        SunriseResult::RegularDay {
            sunrise,
            solar_noon,
            sunset,
        } => {
            println!("  Begin: {}", format_hours(*sunrise));
            println!("  Solar noon: {}", format_hours(*solar_noon));
            println!("  End: {}", format_hours(*sunset));
        }
        SunriseResult::AllDay { solar_noon } => {
            println!("  All day above horizon");
            println!("  Solar noon: {}", format_hours(*solar_noon));
        }
        SunriseResult::AllNight { solar_noon } => {
            println!("  All night below horizon");
            println!("  Solar noon: {}", format_hours(*solar_noon));
        }
    }
    println!();
}
