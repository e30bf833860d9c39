//! NOAA solar calculator formulas.
//!
//! Numeric core of the crate. Every function takes the Julian century `t`
//! (centuries since J2000.0) or angles in degrees, and returns degrees unless
//! stated otherwise. These follow the NOAA Global Monitoring Laboratory solar
//! calculator, itself based on Meeus, "Astronomical Algorithms".
//!
//! [`SolarContext`](crate::SolarContext) chains these together for a given
//! place and time; the free functions are useful when evaluating many
//! locations for the same instant.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{
    MINUTES_PER_DAY, abs, acos, asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360,
    normalize_minutes_of_day, polynomial, radians_to_degrees, sin, tan,
};
use crate::types::SunriseHourAngle;
use crate::{Error, Result};

/// Fixed tan²(ε/2) used by the NOAA equation of time.
pub const EQUATION_OF_TIME_VAR_Y: f64 = 0.043031509;

/// Zenith angle of the sun's center at standard sunrise/sunset.
pub const SUNRISE_ZENITH: f64 = 90.833;

/// Below this, `cos(latitude) * sin(zenith)` is treated as zero.
const AZIMUTH_DEGENERACY_LIMIT: f64 = 1e-12;

/// Longitude of the ascending node of the moon's orbit, used by the
/// nutation and aberration terms.
fn omega(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Geometric mean longitude of the sun, in [0, 360).
#[must_use]
pub fn geom_mean_long_sun(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(&[280.46646, 36000.76983, 0.0003032], t))
}

/// Geometric mean anomaly of the sun (not range reduced).
#[must_use]
pub fn geom_mean_anom_sun(t: f64) -> f64 {
    polynomial(&[357.52911, 35999.05029, -0.0001537], t)
}

/// Eccentricity of Earth's orbit (unitless).
#[must_use]
pub fn eccent_earth_orbit(t: f64) -> f64 {
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], t)
}

/// Equation of time in minutes (apparent minus mean solar time).
#[must_use]
pub fn equation_of_time(t: f64) -> f64 {
    let l = degrees_to_radians(geom_mean_long_sun(t));
    let m = degrees_to_radians(geom_mean_anom_sun(t));
    let e = eccent_earth_orbit(t);
    let y = EQUATION_OF_TIME_VAR_Y;

    let eot = y * sin(2.0 * l) - 2.0 * e * sin(m) + 4.0 * e * y * sin(m) * cos(2.0 * l)
        - 0.5 * y * y * sin(4.0 * l)
        - 1.25 * e * e * sin(2.0 * m);

    4.0 * radians_to_degrees(eot)
}

/// Equation of center of the sun.
#[must_use]
pub fn sun_eq_of_center(t: f64) -> f64 {
    let m = degrees_to_radians(geom_mean_anom_sun(t));

    sin(m) * polynomial(&[1.914602, -0.004817, -0.000014], t)
        + sin(2.0 * m) * polynomial(&[0.019993, -0.000101], t)
        + sin(3.0 * m) * 0.000289
}

/// True longitude of the sun.
#[must_use]
pub fn sun_true_long(t: f64) -> f64 {
    geom_mean_long_sun(t) + sun_eq_of_center(t)
}

/// True anomaly of the sun.
#[must_use]
pub fn sun_true_anom(t: f64) -> f64 {
    geom_mean_anom_sun(t) + sun_eq_of_center(t)
}

/// Sun–Earth distance in astronomical units.
#[must_use]
pub fn sun_rad_vector(t: f64) -> f64 {
    let e = eccent_earth_orbit(t);
    let v = degrees_to_radians(sun_true_anom(t));
    (1.000001018 * (1.0 - e * e)) / (1.0 + e * cos(v))
}

/// Apparent longitude of the sun, corrected for nutation and aberration.
#[must_use]
pub fn sun_app_long(t: f64) -> f64 {
    sun_true_long(t) - 0.00569 - 0.00478 * sin(degrees_to_radians(omega(t)))
}

/// Mean obliquity of the ecliptic.
#[must_use]
pub fn mean_obliq_ecliptic(t: f64) -> f64 {
    let seconds = polynomial(&[21.448, -46.815, -0.00059, 0.001813], t);
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation.
#[must_use]
pub fn obliq_corr(t: f64) -> f64 {
    mean_obliq_ecliptic(t) + 0.00256 * cos(degrees_to_radians(omega(t)))
}

/// Apparent right ascension of the sun, in [0, 360).
#[must_use]
pub fn sun_right_ascension(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliq_corr(t));
    let lambda = degrees_to_radians(sun_app_long(t));
    normalize_degrees_0_to_360(radians_to_degrees(atan2(
        cos(epsilon) * sin(lambda),
        cos(lambda),
    )))
}

/// Apparent declination of the sun.
#[must_use]
pub fn sun_declination(t: f64) -> f64 {
    let epsilon = degrees_to_radians(obliq_corr(t));
    let lambda = degrees_to_radians(sun_app_long(t));
    radians_to_degrees(asin(sin(epsilon) * sin(lambda)))
}

/// Exact tan²(ε/2) from the corrected obliquity.
#[must_use]
pub fn var_y(t: f64) -> f64 {
    let half = tan(degrees_to_radians(obliq_corr(t) / 2.0));
    half * half
}

/// Solar noon as a fraction of the local day.
///
/// # Arguments
/// * `longitude` - Observer longitude in degrees (east positive)
/// * `equation_of_time` - Equation of time in minutes
/// * `utc_offset_hours` - Local UTC offset in hours
#[must_use]
pub fn solar_noon(longitude: f64, equation_of_time: f64, utc_offset_hours: f64) -> f64 {
    (720.0 - 4.0 * longitude - equation_of_time + utc_offset_hours * 60.0) / MINUTES_PER_DAY
}

/// True solar time in minutes since true solar midnight, in [0, 1440).
#[must_use]
pub fn true_solar_time(
    day_time: f64,
    longitude: f64,
    equation_of_time: f64,
    utc_offset_hours: f64,
) -> f64 {
    normalize_minutes_of_day(
        day_time * MINUTES_PER_DAY + equation_of_time + 4.0 * longitude
            - 60.0 * utc_offset_hours,
    )
}

/// Hour angle in degrees from true solar time in minutes.
///
/// Negative before solar noon, positive after.
#[must_use]
pub fn hour_angle(true_solar_time: f64) -> f64 {
    true_solar_time / 4.0 - 180.0
}

/// Hour angle at which the sun's center reaches the given zenith angle.
///
/// # Errors
/// Returns `ComputationError` if the inputs produce a NaN argument.
pub fn hour_angle_at_zenith(
    latitude: f64,
    declination: f64,
    zenith: f64,
) -> Result<SunriseHourAngle> {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let cos_h = cos(degrees_to_radians(zenith)) / (cos(phi) * cos(delta)) - tan(phi) * tan(delta);
    SunriseHourAngle::from_cosine(cos_h)
}

/// Solar zenith angle in degrees.
#[must_use]
pub fn zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let h = degrees_to_radians(hour_angle);
    let cos_zenith = sin(phi) * sin(delta) + cos(phi) * cos(delta) * cos(h);
    radians_to_degrees(acos(cos_zenith.clamp(-1.0, 1.0)))
}

/// Solar azimuth in degrees clockwise from north, in [0, 360).
///
/// # Errors
/// Returns `DegenerateAzimuth` when `cos(latitude) * sin(zenith)` vanishes,
/// i.e. the sun is at the zenith or nadir, or the observer stands on a pole.
pub fn azimuth_angle(latitude: f64, declination: f64, hour_angle: f64, zenith: f64) -> Result<f64> {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let theta_z = degrees_to_radians(zenith);

    let denominator = cos(phi) * sin(theta_z);
    if abs(denominator) < AZIMUTH_DEGENERACY_LIMIT {
        return Err(Error::degenerate_azimuth(zenith));
    }

    let cos_azimuth = (sin(phi) * cos(theta_z) - sin(delta)) / denominator;
    let a = radians_to_degrees(acos(cos_azimuth.clamp(-1.0, 1.0)));

    let azimuth = if hour_angle > 0.0 {
        a + 180.0
    } else {
        540.0 - a
    };
    Ok(normalize_degrees_0_to_360(azimuth))
}

/// Sunrise and sunset in local clock hours from solar noon (fraction of day)
/// and the sunrise hour angle in degrees.
#[must_use]
pub fn sunrise_sunset_hours(solar_noon: f64, hour_angle_sunrise: f64) -> (f64, f64) {
    let noon_degrees = solar_noon * 360.0;
    (
        (noon_degrees - hour_angle_sunrise) / 15.0,
        (noon_degrees + hour_angle_sunrise) / 15.0,
    )
}
