//! Core data types for the NOAA solar calculations.

use crate::error::{check_azimuth, check_zenith_angle};
use crate::math::floor;
use crate::{Error, Result};

/// Zenith angles used to define sunrise, sunset and the twilight boundaries.
///
/// The NOAA calculator uses 90.833° for sunrise and sunset, which folds the
/// average atmospheric refraction at the horizon and the radius of the solar
/// disk into a single constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset (zenith 90.833°)
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom zenith angle in degrees
    Custom(f64),
}

impl Horizon {
    /// Gets the zenith angle in degrees the sun crosses at this horizon.
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => crate::noaa::SUNRISE_ZENITH,
            Self::CivilTwilight => 96.0,
            Self::NauticalTwilight => 102.0,
            Self::AstronomicalTwilight => 108.0,
            Self::Custom(zenith) => *zenith,
        }
    }

    /// Creates a custom horizon with validation.
    ///
    /// # Errors
    /// Returns `ComputationError` if the zenith angle is outside 0 to 180 degrees.
    pub fn custom(zenith_degrees: f64) -> Result<Self> {
        check_zenith_angle(zenith_degrees)?;
        Ok(Self::Custom(zenith_degrees))
    }
}

/// Solar position as seen from the observer.
///
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Zenith angle: 0° = directly overhead, 90° = horizon, 180° = nadir
/// - Elevation angle: 90° = directly overhead, 0° = horizon, -90° = nadir
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise)
    azimuth: f64,
    /// Zenith angle in degrees (0° to 180°, 0° = zenith, 90° = horizon)
    zenith_angle: f64,
}

impl SolarPosition {
    /// Creates a new solar position from azimuth and zenith angle.
    ///
    /// # Errors
    /// Returns error if azimuth or zenith angles are outside valid ranges.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::SolarPosition;
    /// let position = SolarPosition::new(180.0, 30.0).unwrap();
    /// assert_eq!(position.azimuth(), 180.0);
    /// assert_eq!(position.elevation_angle(), 60.0);
    /// ```
    pub fn new(azimuth: f64, zenith_angle: f64) -> Result<Self> {
        let normalized_azimuth = check_azimuth(azimuth)?;
        let validated_zenith = check_zenith_angle(zenith_angle)?;

        Ok(Self {
            azimuth: normalized_azimuth,
            zenith_angle: validated_zenith,
        })
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the zenith angle in degrees (0° to 180°, 0° = zenith, 90° = horizon).
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Gets the elevation angle in degrees (90° - zenith).
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        90.0 - self.zenith_angle
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation_angle() > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation angle ≤ 0°).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.elevation_angle() <= 0.0
    }
}

/// Hour angle of the sun at sunrise, or the reason there is none.
///
/// The sunrise hour angle is `acos(x)` for an argument `x` that leaves
/// [-1, 1] at high latitudes: below -1 the sun never drops to the horizon,
/// above 1 it never reaches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunriseHourAngle {
    /// The sun crosses the horizon; hour angle in degrees (0° to 180°).
    Regular(f64),
    /// Polar day - the sun stays above the horizon all day
    PolarDay,
    /// Polar night - the sun stays below the horizon all day
    PolarNight,
}

impl SunriseHourAngle {
    /// Classifies an `acos` argument into a sunrise hour angle.
    pub(crate) fn from_cosine(cos_hour_angle: f64) -> Result<Self> {
        if cos_hour_angle.is_nan() {
            return Err(Error::computation_error(
                "sunrise hour angle argument is not a number",
            ));
        }
        if cos_hour_angle < -1.0 {
            Ok(Self::PolarDay)
        } else if cos_hour_angle > 1.0 {
            Ok(Self::PolarNight)
        } else {
            Ok(Self::Regular(crate::math::radians_to_degrees(
                crate::math::acos(cos_hour_angle),
            )))
        }
    }

    /// Gets the hour angle in degrees if the sun rises and sets.
    #[must_use]
    pub const fn degrees(&self) -> Option<f64> {
        if let Self::Regular(degrees) = self {
            Some(*degrees)
        } else {
            None
        }
    }
}

/// Hours since local midnight of the calculation date that can extend beyond
/// a single day.
///
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use noaa_solar::ClockHours;
/// let time = ClockHours::from_hours(25.5);
/// let (day_offset, hours) = time.day_and_hours();
/// assert_eq!(day_offset, 1);
/// assert!((hours - 1.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ClockHours(f64);

impl ClockHours {
    /// Creates a new `ClockHours` from hours since local midnight.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the time as a fraction of the day (hours / 24).
    #[must_use]
    pub fn day_fraction(&self) -> f64 {
        self.0 / 24.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where `day_offset` counts whole
    /// days from the calculation date.
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        if !self.0.is_finite() {
            return (0, self.0);
        }

        let days = floor(self.0 / 24.0);
        let hours = self.0 - days * 24.0;
        // Rounding may land exactly on either end of the day.
        let (days, hours) = if hours >= 24.0 {
            (days + 1.0, hours - 24.0)
        } else if hours < 0.0 {
            (days - 1.0, hours + 24.0)
        } else {
            (days, hours)
        };

        // Saturating float-to-int conversion.
        (days as i32, hours)
    }
}

/// Result of sunrise/sunset calculations for a given day.
///
/// At extreme latitudes the sun may not cross the horizon at all; those days
/// are reported as [`AllDay`](Self::AllDay) or [`AllNight`](Self::AllNight)
/// and still carry the time of solar noon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunriseResult<T = ClockHours> {
    /// Regular day with distinct sunrise, solar noon, and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time the sun crosses the local meridian
        solar_noon: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay {
        /// Time the sun crosses the local meridian
        solar_noon: T,
    },
    /// Polar night - sun remains below the horizon all day
    AllNight {
        /// Time the sun crosses the local meridian
        solar_noon: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the solar noon time for any sunrise result.
    pub const fn solar_noon(&self) -> &T {
        match self {
            Self::RegularDay { solar_noon, .. }
            | Self::AllDay { solar_noon }
            | Self::AllNight { solar_noon } => solar_noon,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }
}

impl SunriseResult<ClockHours> {
    /// Hours between sunrise and sunset, or `None` on a polar day or night.
    #[must_use]
    pub fn day_length(&self) -> Option<f64> {
        match self {
            Self::RegularDay {
                sunrise, sunset, ..
            } => Some(sunset.hours() - sunrise.hours()),
            Self::AllDay { .. } | Self::AllNight { .. } => None,
        }
    }
}
