//! Incidence on tilted surfaces and effective irradiance.
//!
//! Surface orientation follows Duffie & Beckman, "Solar Engineering of
//! Thermal Processes":
//! - tilt (β): 0° = horizontal, 90° = vertical
//! - surface azimuth (γ): 0° = facing due south, east negative, west positive
//!
//! The hour angle is negative in the morning and positive in the afternoon,
//! matching [`SolarContext::sun_hour_angle`](crate::SolarContext::sun_hour_angle).

#![allow(clippy::suboptimal_flops)]

use crate::math::{acos, cos, degrees_to_radians, radians_to_degrees, sin};

/// Cosines at or below this count as grazing incidence.
const GRAZING_COSINE: f64 = 1e-12;

/// Angle of incidence in degrees between the sun's rays and the normal of a
/// tilted plane.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Solar declination in degrees
/// * `hour_angle` - Hour angle in degrees
/// * `surface_tilt` - Tilt of the plane from horizontal in degrees
/// * `surface_azimuth` - Azimuth of the plane normal from due south in degrees, west positive
///
/// # Example
/// ```
/// # use noaa_solar::irradiance::incidence_on_tilted_surface;
/// // A south-facing panel tilted at the latitude faces the equinox noon sun head-on.
/// let theta = incidence_on_tilted_surface(40.0, 0.0, 0.0, 40.0, 0.0);
/// assert!(theta.abs() < 1e-6);
/// ```
#[must_use]
pub fn incidence_on_tilted_surface(
    latitude: f64,
    declination: f64,
    hour_angle: f64,
    surface_tilt: f64,
    surface_azimuth: f64,
) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let omega = degrees_to_radians(hour_angle);
    let beta = degrees_to_radians(surface_tilt);
    let gamma = degrees_to_radians(surface_azimuth);

    let (sin_phi, cos_phi) = (sin(phi), cos(phi));
    let (sin_delta, cos_delta) = (sin(delta), cos(delta));
    let (sin_beta, cos_beta) = (sin(beta), cos(beta));

    let cos_theta = sin_delta * sin_phi * cos_beta
        - sin_delta * cos_phi * sin_beta * cos(gamma)
        + cos_delta * cos_phi * cos_beta * cos(omega)
        + cos_delta * sin_phi * sin_beta * cos(gamma) * cos(omega)
        + cos_delta * sin_beta * sin(gamma) * sin(omega);

    radians_to_degrees(acos(cos_theta.clamp(-1.0, 1.0)))
}

/// Irradiance reaching a surface from a horizontal-normal irradiance and an
/// incidence angle in degrees.
///
/// Returns `horizontal · cos(incidence)`, clamped to zero when the sun is at
/// or behind the plane of the surface.
///
/// # Example
/// ```
/// # use noaa_solar::irradiance::effective_irradiance;
/// assert_eq!(effective_irradiance(1000.0, 0.0), 1000.0);
/// assert_eq!(effective_irradiance(1000.0, 90.0), 0.0);
/// assert_eq!(effective_irradiance(1000.0, 120.0), 0.0);
/// ```
#[must_use]
pub fn effective_irradiance(horizontal: f64, incidence_degrees: f64) -> f64 {
    let cosine = cos(degrees_to_radians(incidence_degrees));
    if cosine <= GRAZING_COSINE {
        0.0
    } else {
        horizontal * cosine
    }
}
