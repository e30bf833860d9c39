//! Error types for the NOAA solar calculations.

use crate::math::normalize_degrees_0_to_360;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while building a [`SolarContext`](crate::SolarContext)
/// or evaluating one of its derived quantities.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid fraction of day (must be between 0 and 1).
    InvalidDayTime {
        /// The invalid day fraction provided.
        value: f64,
    },
    /// Invalid UTC offset (must be between -12 and +14 hours).
    InvalidUtcOffset {
        /// The invalid offset in hours.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the calendar constraint violation.
        message: &'static str,
    },
    /// The solar azimuth is undefined because the sun stands at the zenith
    /// or the observer is at a geographic pole.
    DegenerateAzimuth {
        /// Zenith angle at the time of evaluation, in degrees.
        zenith: f64,
    },
    /// The time zone identifier is not known to the time zone database.
    #[cfg(feature = "tz")]
    UnknownTimeZone {
        /// The identifier that failed to resolve.
        name: String,
    },
    /// Numerical computation error (e.g. a non-finite intermediate value).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDayTime { value } => {
                write!(f, "invalid day time {value} (must be between 0 and 1)")
            }
            Self::InvalidUtcOffset { value } => {
                write!(
                    f,
                    "invalid UTC offset {value} h (must be between -12 and +14 hours)"
                )
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::DegenerateAzimuth { zenith } => {
                write!(
                    f,
                    "solar azimuth is undefined (zenith angle {zenith}°, sun at zenith or observer at a pole)"
                )
            }
            #[cfg(feature = "tz")]
            Self::UnknownTimeZone { name } => {
                write!(f, "unknown time zone '{name}'")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid day time error.
    #[must_use]
    pub const fn invalid_day_time(value: f64) -> Self {
        Self::InvalidDayTime { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates a degenerate azimuth error.
    #[must_use]
    pub const fn degenerate_azimuth(zenith: f64) -> Self {
        Self::DegenerateAzimuth { zenith }
    }

    /// Creates an unknown time zone error.
    #[cfg(feature = "tz")]
    #[must_use]
    pub fn unknown_time_zone(name: &str) -> Self {
        Self::UnknownTimeZone {
            name: name.to_owned(),
        }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates the fraction of day is within 0 to 1 (inclusive on both ends).
///
/// # Errors
/// Returns `InvalidDayTime` if the value is outside 0 to 1 or not finite.
pub fn check_day_time(day_time: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&day_time) {
        return Err(Error::invalid_day_time(day_time));
    }
    Ok(())
}

/// Validates the UTC offset is within -12 to +14 hours.
///
/// # Errors
/// Returns `InvalidUtcOffset` if the offset is outside -12 to +14 hours or not finite.
pub fn check_utc_offset(utc_offset_hours: f64) -> Result<()> {
    if !(-12.0..=14.0).contains(&utc_offset_hours) {
        return Err(Error::invalid_utc_offset(utc_offset_hours));
    }
    Ok(())
}

/// Validates and normalizes an azimuth angle to the range [0, 360) degrees.
///
/// # Errors
/// Returns `ComputationError` if azimuth is not finite.
pub fn check_azimuth(azimuth: f64) -> Result<f64> {
    if !azimuth.is_finite() {
        return Err(Error::computation_error("azimuth is not finite"));
    }
    Ok(normalize_degrees_0_to_360(azimuth))
}

/// Validates a zenith angle to be within the range [0, 180] degrees.
///
/// # Errors
/// Returns `ComputationError` if zenith angle is not finite or outside valid range.
pub fn check_zenith_angle(zenith: f64) -> Result<f64> {
    if !zenith.is_finite() {
        return Err(Error::computation_error("zenith angle is not finite"));
    }
    if !(0.0..=180.0).contains(&zenith) {
        return Err(Error::computation_error(
            "zenith angle must be between 0° and 180°",
        ));
    }
    Ok(zenith)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(45.5).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(122.5).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_day_time_validation() {
        assert!(check_day_time(0.0).is_ok());
        assert!(check_day_time(0.5).is_ok());
        assert!(check_day_time(1.0).is_ok());

        assert!(check_day_time(-0.001).is_err());
        assert!(check_day_time(1.5).is_err());
        assert!(check_day_time(f64::NAN).is_err());
    }

    #[test]
    fn test_utc_offset_validation() {
        assert!(check_utc_offset(0.0).is_ok());
        assert!(check_utc_offset(-12.0).is_ok());
        assert!(check_utc_offset(14.0).is_ok());
        assert!(check_utc_offset(5.75).is_ok());

        assert!(check_utc_offset(15.0).is_err());
        assert!(check_utc_offset(-12.5).is_err());
        assert!(check_utc_offset(f64::NAN).is_err());
        assert!(check_utc_offset(f64::INFINITY).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_longitude(185.0);
        assert_eq!(
            err.to_string(),
            "invalid longitude 185° (must be between -180° and +180°)"
        );

        let err = Error::invalid_day_time(1.5);
        assert_eq!(
            err.to_string(),
            "invalid day time 1.5 (must be between 0 and 1)"
        );

        let err = Error::invalid_utc_offset(15.0);
        assert_eq!(
            err.to_string(),
            "invalid UTC offset 15 h (must be between -12 and +14 hours)"
        );

        let err = Error::invalid_date("day is out of range for month");
        assert_eq!(err.to_string(), "invalid date: day is out of range for month");
    }

    #[test]
    fn test_check_azimuth() {
        assert!(check_azimuth(0.0).is_ok());
        assert!(check_azimuth(360.0).is_ok());

        assert_eq!(check_azimuth(-90.0).unwrap(), 270.0);
        assert_eq!(check_azimuth(450.0).unwrap(), 90.0);

        assert!(check_azimuth(f64::NAN).is_err());
        assert!(check_azimuth(f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_zenith_angle() {
        assert!(check_zenith_angle(0.0).is_ok());
        assert!(check_zenith_angle(90.0).is_ok());
        assert!(check_zenith_angle(180.0).is_ok());

        assert!(check_zenith_angle(-1.0).is_err());
        assert!(check_zenith_angle(181.0).is_err());
        assert!(check_zenith_angle(f64::NAN).is_err());
    }
}
