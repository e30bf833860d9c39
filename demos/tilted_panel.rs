//! Hourly incidence and effective irradiance on a tilted solar panel.

use chrono::{DateTime, Duration, FixedOffset};
use noaa_solar::SolarContext;

/// Clear-sky horizontal irradiance assumed for the example, in W/m².
const HORIZONTAL_IRRADIANCE: f64 = 1000.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Madrid, spring equinox, Central European Time
    let latitude = 40.4168;
    let longitude = -3.7038;
    let start = "2024-03-20T06:00:00+01:00".parse::<DateTime<FixedOffset>>()?;

    // Fixed south-facing panel tilted at the latitude, and a west-facing one
    let panels = [("south, 40° tilt", 40.0, 0.0), ("west, 30° tilt", 30.0, 90.0)];

    println!("Madrid, 2024-03-20 (UTC+1)");
    println!(
        "{:>5}  {:>8}  {:>8}  {:>24}  {:>24}",
        "time", "zenith", "azimuth", panels[0].0, panels[1].0
    );

    let mut energy = [0.0; 2];
    for hour in 0..=14 {
        let datetime = start + Duration::hours(hour);
        let context = SolarContext::from_datetime(datetime, latitude, longitude)?;

        let zenith = context.solar_zenith_angle();
        let azimuth = context.solar_azimuth_angle()?;

        let mut cells = Vec::with_capacity(panels.len());
        for (i, (_, tilt, surface_azimuth)) in panels.iter().enumerate() {
            let incidence = context.incidence_on_tilted_surface(*tilt, *surface_azimuth);
            let irradiance = if zenith < 90.0 {
                context.effective_irradiance(HORIZONTAL_IRRADIANCE, incidence)
            } else {
                0.0
            };
            energy[i] += irradiance;
            cells.push(format!("θ={incidence:6.2}° {irradiance:7.1} W/m²"));
        }

        println!(
            "{}  {zenith:7.2}°  {azimuth:7.2}°  {:>24}  {:>24}",
            datetime.format("%H:%M"),
            cells[0],
            cells[1]
        );
    }

    println!();
    for ((name, _, _), total) in panels.iter().zip(energy) {
        println!("{name}: {:.2} kWh/m² (hourly sum)", total / 1000.0);
    }

    Ok(())
}
