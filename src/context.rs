//! Solar geometry for one place and one instant.

use crate::error::{check_coordinates, check_day_time, check_latitude, check_longitude, check_utc_offset};
use crate::irradiance;
use crate::noaa;
use crate::time::{CalendarDate, JulianDate};
use crate::types::{ClockHours, Horizon, SolarPosition, SunriseHourAngle, SunriseResult};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Offset, TimeZone, Timelike};

/// Inputs for the NOAA solar calculations and the quantities derived from them.
///
/// A context is immutable: every derived value is recomputed from the fields
/// on each call, and the `with_*` methods return a new, validated context.
///
/// # Example
/// ```
/// use noaa_solar::{CalendarDate, SolarContext};
///
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
/// // Vienna, 13:00 local time in summer (UTC+2)
/// let context = SolarContext::new(48.21, 16.37, 13.0 / 24.0, 2.0, date).unwrap();
///
/// println!("Zenith: {:.3}°", context.solar_zenith_angle());
/// println!("Azimuth: {:.3}°", context.solar_azimuth_angle().unwrap());
/// let day = context.sunrise_and_sunset().unwrap();
/// println!("Sunrise: {:.2} h", day.sunrise().unwrap().hours());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarContext {
    latitude: f64,
    longitude: f64,
    date: CalendarDate,
    day_time: f64,
    utc_offset_hours: f64,
}

impl SolarContext {
    /// Creates a new context.
    ///
    /// # Arguments
    /// * `latitude` - Observer latitude in degrees (-90 to +90)
    /// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
    /// * `day_time` - Fraction of the local day elapsed (0 = midnight, 1 = next midnight)
    /// * `utc_offset_hours` - Local UTC offset in hours (-12 to +14)
    /// * `date` - Local calendar date
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude`, `InvalidDayTime` or
    /// `InvalidUtcOffset` for out-of-range inputs.
    pub fn new(
        latitude: f64,
        longitude: f64,
        day_time: f64,
        utc_offset_hours: f64,
        date: CalendarDate,
    ) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_day_time(day_time)?;
        check_utc_offset(utc_offset_hours)?;
        Ok(Self {
            latitude,
            longitude,
            date,
            day_time,
            utc_offset_hours,
        })
    }

    /// Starts a builder for the given location and date.
    ///
    /// `day_time` and `utc_offset_hours` default to 0.
    #[must_use]
    pub const fn builder(latitude: f64, longitude: f64, date: CalendarDate) -> SolarContextBuilder {
        SolarContextBuilder {
            latitude,
            longitude,
            date,
            day_time: 0.0,
            clock: None,
            utc_offset_hours: 0.0,
        }
    }

    /// Creates a context from a timezone-aware chrono `DateTime`.
    ///
    /// The local date, time of day and UTC offset are taken from `datetime`;
    /// sub-second precision is dropped.
    ///
    /// # Errors
    /// Returns error for invalid coordinates or an offset outside -12 to +14 hours.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::SolarContext;
    /// use chrono::{DateTime, FixedOffset};
    ///
    /// let datetime = "2024-03-20T12:00:00+00:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// let context = SolarContext::from_datetime(datetime, 0.0, 0.0).unwrap();
    /// assert_eq!(context.day_time(), 0.5);
    /// assert_eq!(context.utc_offset_hours(), 0.0);
    /// ```
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let local = datetime.naive_local();
        let seconds_of_day = local.num_seconds_from_midnight();
        let offset_seconds = datetime.offset().fix().local_minus_utc();

        Self::new(
            latitude,
            longitude,
            f64::from(seconds_of_day) / 86_400.0,
            f64::from(offset_seconds) / 3600.0,
            CalendarDate::from_date_like(local.date())?,
        )
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the local calendar date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Gets the fraction of the local day elapsed.
    #[must_use]
    pub const fn day_time(&self) -> f64 {
        self.day_time
    }

    /// Gets the UTC offset in hours.
    #[must_use]
    pub const fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// Returns a copy with a different latitude.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
    pub fn with_latitude(&self, latitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        Ok(Self { latitude, ..*self })
    }

    /// Returns a copy with a different longitude.
    ///
    /// # Errors
    /// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
    pub fn with_longitude(&self, longitude: f64) -> Result<Self> {
        check_longitude(longitude)?;
        Ok(Self { longitude, ..*self })
    }

    /// Returns a copy with a different date.
    #[must_use]
    pub const fn with_date(&self, date: CalendarDate) -> Self {
        Self { date, ..*self }
    }

    /// Returns a copy with a different fraction of day.
    ///
    /// # Errors
    /// Returns `InvalidDayTime` if the value is outside 0 to 1.
    pub fn with_day_time(&self, day_time: f64) -> Result<Self> {
        check_day_time(day_time)?;
        Ok(Self { day_time, ..*self })
    }

    /// Returns a copy with a different UTC offset.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` if the offset is outside -12 to +14 hours.
    pub fn with_utc_offset_hours(&self, utc_offset_hours: f64) -> Result<Self> {
        check_utc_offset(utc_offset_hours)?;
        Ok(Self {
            utc_offset_hours,
            ..*self
        })
    }

    /// Julian date of the context instant.
    #[must_use]
    pub fn julian_date(&self) -> JulianDate {
        JulianDate::from_local(self.date, self.day_time, self.utc_offset_hours)
    }

    /// Julian Day number of the context instant.
    #[must_use]
    pub fn julian_day(&self) -> f64 {
        self.julian_date().julian_day()
    }

    /// Julian centuries since J2000.0.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        self.julian_date().julian_century()
    }

    /// Geometric mean longitude of the sun in degrees, in [0, 360).
    #[must_use]
    pub fn geom_mean_long_sun(&self) -> f64 {
        noaa::geom_mean_long_sun(self.julian_century())
    }

    /// Geometric mean anomaly of the sun in degrees.
    #[must_use]
    pub fn geom_mean_anom_sun(&self) -> f64 {
        noaa::geom_mean_anom_sun(self.julian_century())
    }

    /// Eccentricity of Earth's orbit.
    #[must_use]
    pub fn eccent_earth_orbit(&self) -> f64 {
        noaa::eccent_earth_orbit(self.julian_century())
    }

    /// Equation of time in minutes.
    #[must_use]
    pub fn equation_of_time(&self) -> f64 {
        noaa::equation_of_time(self.julian_century())
    }

    /// Solar noon as a fraction of the local day.
    #[must_use]
    pub fn solar_noon(&self) -> f64 {
        noaa::solar_noon(
            self.longitude,
            self.equation_of_time(),
            self.utc_offset_hours,
        )
    }

    /// Equation of center of the sun in degrees.
    #[must_use]
    pub fn sun_equation_of_center(&self) -> f64 {
        noaa::sun_eq_of_center(self.julian_century())
    }

    /// True longitude of the sun in degrees.
    #[must_use]
    pub fn sun_true_longitude(&self) -> f64 {
        noaa::sun_true_long(self.julian_century())
    }

    /// True anomaly of the sun in degrees.
    #[must_use]
    pub fn sun_true_anomaly(&self) -> f64 {
        noaa::sun_true_anom(self.julian_century())
    }

    /// Sun–Earth distance in astronomical units.
    #[must_use]
    pub fn sun_rad_vector(&self) -> f64 {
        noaa::sun_rad_vector(self.julian_century())
    }

    /// True solar time in minutes, in [0, 1440).
    #[must_use]
    pub fn true_solar_time(&self) -> f64 {
        noaa::true_solar_time(
            self.day_time,
            self.longitude,
            self.equation_of_time(),
            self.utc_offset_hours,
        )
    }

    /// Apparent longitude of the sun in degrees.
    #[must_use]
    pub fn sun_apparent_longitude(&self) -> f64 {
        noaa::sun_app_long(self.julian_century())
    }

    /// Mean obliquity of the ecliptic in degrees.
    #[must_use]
    pub fn mean_obliq_ecliptic(&self) -> f64 {
        noaa::mean_obliq_ecliptic(self.julian_century())
    }

    /// Obliquity of the ecliptic corrected for nutation, in degrees.
    #[must_use]
    pub fn oblique_correction(&self) -> f64 {
        noaa::obliq_corr(self.julian_century())
    }

    /// Apparent right ascension of the sun in degrees, in [0, 360).
    #[must_use]
    pub fn sun_right_ascension(&self) -> f64 {
        noaa::sun_right_ascension(self.julian_century())
    }

    /// Exact tan²(ε/2) for the context instant.
    #[must_use]
    pub fn var_y(&self) -> f64 {
        noaa::var_y(self.julian_century())
    }

    /// Solar declination in degrees.
    #[must_use]
    pub fn solar_declination(&self) -> f64 {
        noaa::sun_declination(self.julian_century())
    }

    /// Hour angle in degrees; negative before solar noon, positive after.
    #[must_use]
    pub fn sun_hour_angle(&self) -> f64 {
        noaa::hour_angle(self.true_solar_time())
    }

    /// Hour angle of sunrise in degrees, or the polar day/night outcome.
    ///
    /// # Errors
    /// Returns `ComputationError` if the trigonometry yields NaN.
    pub fn hour_angle_sunrise(&self) -> Result<SunriseHourAngle> {
        self.hour_angle_for_horizon(Horizon::SunriseSunset)
    }

    /// Hour angle at which the sun crosses the given horizon.
    ///
    /// # Errors
    /// Returns `ComputationError` if the trigonometry yields NaN.
    pub fn hour_angle_for_horizon(&self, horizon: Horizon) -> Result<SunriseHourAngle> {
        noaa::hour_angle_at_zenith(
            self.latitude,
            self.solar_declination(),
            horizon.zenith_angle(),
        )
    }

    /// Solar zenith angle in degrees.
    #[must_use]
    pub fn solar_zenith_angle(&self) -> f64 {
        noaa::zenith_angle(
            self.latitude,
            self.solar_declination(),
            self.sun_hour_angle(),
        )
    }

    /// Solar azimuth in degrees clockwise from north, in [0, 360).
    ///
    /// # Errors
    /// Returns `DegenerateAzimuth` when the sun stands at the zenith or the
    /// observer is at a pole.
    pub fn solar_azimuth_angle(&self) -> Result<f64> {
        noaa::azimuth_angle(
            self.latitude,
            self.solar_declination(),
            self.sun_hour_angle(),
            self.solar_zenith_angle(),
        )
    }

    /// Solar position (azimuth and zenith angle).
    ///
    /// # Errors
    /// Returns `DegenerateAzimuth` when the azimuth is undefined.
    pub fn solar_position(&self) -> Result<SolarPosition> {
        SolarPosition::new(self.solar_azimuth_angle()?, self.solar_zenith_angle())
    }

    /// Angle of the sun above the horizon in degrees (`90 − zenith`).
    #[must_use]
    pub fn solar_incidence_angle(&self) -> f64 {
        90.0 - self.solar_zenith_angle()
    }

    /// Incidence angle in degrees of the sun on a tilted surface.
    ///
    /// # Arguments
    /// * `surface_angle` - Tilt of the surface from horizontal in degrees
    /// * `surface_azimuth` - Azimuth of the surface normal from due south in degrees, west positive
    #[must_use]
    pub fn incidence_on_tilted_surface(&self, surface_angle: f64, surface_azimuth: f64) -> f64 {
        irradiance::incidence_on_tilted_surface(
            self.latitude,
            self.solar_declination(),
            self.sun_hour_angle(),
            surface_angle,
            surface_azimuth,
        )
    }

    /// Sunrise, solar noon and sunset in local clock hours.
    ///
    /// # Errors
    /// Returns `ComputationError` if the trigonometry yields NaN.
    pub fn sunrise_and_sunset(&self) -> Result<SunriseResult<ClockHours>> {
        self.sunrise_and_sunset_for_horizon(Horizon::SunriseSunset)
    }

    /// Crossing times of the given horizon in local clock hours.
    ///
    /// # Errors
    /// Returns `ComputationError` if the trigonometry yields NaN.
    pub fn sunrise_and_sunset_for_horizon(
        &self,
        horizon: Horizon,
    ) -> Result<SunriseResult<ClockHours>> {
        let solar_noon = self.solar_noon();
        let noon_hours = ClockHours::from_hours(solar_noon * 24.0);

        Ok(match self.hour_angle_for_horizon(horizon)? {
            SunriseHourAngle::Regular(hour_angle) => {
                let (sunrise, sunset) = noaa::sunrise_sunset_hours(solar_noon, hour_angle);
                SunriseResult::RegularDay {
                    sunrise: ClockHours::from_hours(sunrise),
                    solar_noon: noon_hours,
                    sunset: ClockHours::from_hours(sunset),
                }
            }
            SunriseHourAngle::PolarDay => SunriseResult::AllDay {
                solar_noon: noon_hours,
            },
            SunriseHourAngle::PolarNight => SunriseResult::AllNight {
                solar_noon: noon_hours,
            },
        })
    }

    /// Hours between sunrise and sunset; `None` on a polar day or night.
    ///
    /// # Errors
    /// Returns `ComputationError` if the trigonometry yields NaN.
    pub fn day_length(&self) -> Result<Option<f64>> {
        Ok(self.sunrise_and_sunset()?.day_length())
    }

    /// Sunlight duration in minutes (`8 × sunrise hour angle`); `None` on a
    /// polar day or night.
    ///
    /// # Errors
    /// Returns `ComputationError` if the trigonometry yields NaN.
    pub fn sunlight_duration_minutes(&self) -> Result<Option<f64>> {
        Ok(self.hour_angle_sunrise()?.degrees().map(|ha| 8.0 * ha))
    }

    /// Irradiance on a surface given horizontal irradiance and incidence angle.
    ///
    /// See [`irradiance::effective_irradiance`].
    #[must_use]
    pub fn effective_irradiance(&self, horizontal: f64, incidence_degrees: f64) -> f64 {
        irradiance::effective_irradiance(horizontal, incidence_degrees)
    }
}

/// Builder for [`SolarContext`], validated on [`build`](Self::build).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarContextBuilder {
    latitude: f64,
    longitude: f64,
    date: CalendarDate,
    day_time: f64,
    clock: Option<(u32, u32, u32)>,
    utc_offset_hours: f64,
}

impl SolarContextBuilder {
    /// Sets the fraction of the local day elapsed.
    #[must_use]
    pub const fn day_time(mut self, day_time: f64) -> Self {
        self.day_time = day_time;
        self.clock = None;
        self
    }

    /// Sets the local time of day from hours, minutes and seconds.
    ///
    /// The clock reading is checked by [`build`](Self::build): minutes and
    /// seconds must be below 60 and the time must not pass 24:00:00.
    #[must_use]
    pub const fn local_time(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.clock = Some((hour, minute, second));
        self
    }

    /// Sets the UTC offset in hours.
    #[must_use]
    pub const fn utc_offset_hours(mut self, utc_offset_hours: f64) -> Self {
        self.utc_offset_hours = utc_offset_hours;
        self
    }

    /// Sets the UTC offset from seconds, as returned by time zone databases.
    #[must_use]
    pub fn utc_offset_seconds(mut self, seconds: i32) -> Self {
        self.utc_offset_hours = f64::from(seconds) / 3600.0;
        self
    }

    /// Validates the inputs and builds the context.
    ///
    /// # Errors
    /// Returns the same errors as [`SolarContext::new`], and `InvalidDayTime`
    /// for an impossible clock reading given to [`local_time`](Self::local_time).
    pub fn build(self) -> Result<SolarContext> {
        let day_time = match self.clock {
            Some((hour, minute, second)) => clock_to_day_time(hour, minute, second)?,
            None => self.day_time,
        };
        SolarContext::new(
            self.latitude,
            self.longitude,
            day_time,
            self.utc_offset_hours,
            self.date,
        )
    }
}

/// Fraction of the day for a local clock reading, 24:00:00 included.
fn clock_to_day_time(hour: u32, minute: u32, second: u32) -> Result<f64> {
    let seconds = u64::from(hour) * 3600 + u64::from(minute) * 60 + u64::from(second);
    let day_time = seconds as f64 / 86_400.0;
    if minute >= 60 || second >= 60 || seconds > 86_400 {
        return Err(Error::invalid_day_time(day_time));
    }
    Ok(day_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn equinox_equator() -> SolarContext {
        let date = CalendarDate::new(2024, 3, 20).unwrap();
        SolarContext::new(0.0, 0.0, 0.5, 0.0, date).unwrap()
    }

    #[test]
    fn test_construction_validation() {
        let date = CalendarDate::new(2024, 3, 20).unwrap();
        assert!(SolarContext::new(0.0, 0.0, 0.5, 0.0, date).is_ok());
        assert!(SolarContext::new(90.0, 180.0, 1.0, 14.0, date).is_ok());
        assert!(SolarContext::new(-90.0, -180.0, 0.0, -12.0, date).is_ok());

        assert_eq!(
            SolarContext::new(91.0, 0.0, 0.5, 0.0, date),
            Err(Error::invalid_latitude(91.0))
        );
        assert_eq!(
            SolarContext::new(0.0, -181.0, 0.5, 0.0, date),
            Err(Error::invalid_longitude(-181.0))
        );
        assert_eq!(
            SolarContext::new(0.0, 0.0, 1.5, 0.0, date),
            Err(Error::invalid_day_time(1.5))
        );
        assert_eq!(
            SolarContext::new(0.0, 0.0, 0.5, 15.0, date),
            Err(Error::invalid_utc_offset(15.0))
        );
    }

    #[test]
    fn test_with_methods_return_new_values() {
        let context = equinox_equator();

        let moved = context.with_latitude(45.0).unwrap();
        assert_eq!(moved.latitude(), 45.0);
        assert_eq!(context.latitude(), 0.0);

        assert!(context.with_latitude(-91.0).is_err());
        assert!(context.with_longitude(180.5).is_err());
        assert!(context.with_day_time(-0.1).is_err());
        assert!(context.with_utc_offset_hours(-13.0).is_err());

        let later = context.with_day_time(0.75).unwrap();
        assert_eq!(later.day_time(), 0.75);
        assert_eq!(later.longitude(), context.longitude());

        let shifted = context.with_utc_offset_hours(5.5).unwrap();
        assert_eq!(shifted.utc_offset_hours(), 5.5);

        let east = context.with_longitude(100.0).unwrap();
        assert_eq!(east.longitude(), 100.0);

        let winter = context.with_date(CalendarDate::new(2024, 12, 21).unwrap());
        assert_eq!(winter.date().month(), 12);
        assert_eq!(context.date().month(), 3);
    }

    #[test]
    fn test_builder() {
        let date = CalendarDate::new(2024, 3, 20).unwrap();
        let context = SolarContext::builder(10.0, 20.0, date)
            .local_time(18, 0, 0)
            .utc_offset_seconds(-3 * 3600)
            .build()
            .unwrap();
        assert_eq!(context.day_time(), 0.75);
        assert_eq!(context.utc_offset_hours(), -3.0);

        let direct = SolarContext::builder(10.0, 20.0, date)
            .day_time(0.75)
            .utc_offset_hours(-3.0)
            .build()
            .unwrap();
        assert_eq!(context, direct);

        assert!(SolarContext::builder(10.0, 20.0, date)
            .utc_offset_hours(20.0)
            .build()
            .is_err());

        // The last setter wins.
        let fraction = SolarContext::builder(10.0, 20.0, date)
            .local_time(18, 0, 0)
            .day_time(0.25)
            .build()
            .unwrap();
        assert_eq!(fraction.day_time(), 0.25);
    }

    #[test]
    fn test_builder_rejects_impossible_clock_readings() {
        let date = CalendarDate::new(2024, 3, 20).unwrap();
        let build = |hour, minute, second| {
            SolarContext::builder(0.0, 0.0, date)
                .local_time(hour, minute, second)
                .build()
        };

        assert_eq!(build(24, 0, 0).unwrap().day_time(), 1.0);
        assert_eq!(build(0, 0, 0).unwrap().day_time(), 0.0);
        assert_eq!(build(23, 59, 59).unwrap().day_time(), 86_399.0 / 86_400.0);

        for (hour, minute, second) in [
            (u32::MAX, 0, 0),
            (1_193_047, 0, 0),
            (0, u32::MAX, u32::MAX),
            (25, 0, 0),
            (24, 0, 1),
            (12, 60, 0),
            (12, 0, 60),
        ] {
            assert!(
                matches!(build(hour, minute, second), Err(Error::InvalidDayTime { .. })),
                "accepted {hour}:{minute}:{second}"
            );
        }
    }

    #[test]
    fn test_equinox_noon_at_equator() {
        let context = equinox_equator();

        assert!(context.solar_declination().abs() < 0.5);

        let zenith = context.solar_zenith_angle();
        assert!((0.0..=5.0).contains(&zenith), "zenith={zenith}");
        assert!((zenith - 1.8285941663343752).abs() < 1e-6);

        assert!((context.true_solar_time() - 712.7092975921786).abs() < 1e-6);
        assert!((context.sun_hour_angle() - -1.8226756019553534).abs() < 1e-6);
        assert!((context.solar_noon() - 0.5050629877832093).abs() < 1e-9);
        assert!((context.solar_incidence_angle() - (90.0 - zenith)).abs() < 1e-12);

        let azimuth = context.solar_azimuth_angle().unwrap();
        assert!((azimuth - 85.3873426051345).abs() < 1e-4);
    }

    #[test]
    fn test_equinox_day_length_at_equator() {
        let context = equinox_equator();
        let day_length = context.day_length().unwrap().unwrap();
        // Twelve hours plus the 0.833° refraction and disk allowance on both ends.
        assert!((day_length - 12.0).abs() < 0.15, "day length={day_length}");
        assert!((day_length - 12.111067032385316).abs() < 1e-6);

        let result = context.sunrise_and_sunset().unwrap();
        let sunrise = result.sunrise().unwrap().hours();
        let sunset = result.sunset().unwrap().hours();
        assert!((sunrise - 6.065978190604367).abs() < 1e-6);
        assert!((sunset - 18.177045222989683).abs() < 1e-6);
        assert!((result.solar_noon().hours() - 24.0 * context.solar_noon()).abs() < 1e-12);

        let minutes = context.sunlight_duration_minutes().unwrap().unwrap();
        assert!((minutes - day_length * 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_polar_night_at_80_north() {
        let date = CalendarDate::new(2024, 12, 21).unwrap();
        let context = SolarContext::new(80.0, 0.0, 0.5, 0.0, date).unwrap();

        assert_eq!(
            context.hour_angle_sunrise().unwrap(),
            SunriseHourAngle::PolarNight
        );
        let result = context.sunrise_and_sunset().unwrap();
        assert!(result.is_polar_night());
        assert_eq!(context.day_length().unwrap(), None);
        assert_eq!(context.sunlight_duration_minutes().unwrap(), None);
    }

    #[test]
    fn test_polar_day_at_80_north() {
        let date = CalendarDate::new(2024, 6, 21).unwrap();
        let context = SolarContext::new(80.0, 0.0, 0.5, 0.0, date).unwrap();

        assert_eq!(
            context.hour_angle_sunrise().unwrap(),
            SunriseHourAngle::PolarDay
        );
        assert!(context.sunrise_and_sunset().unwrap().is_polar_day());
    }

    #[test]
    fn test_twilight_lengthens_the_day() {
        let date = CalendarDate::new(2024, 6, 21).unwrap();
        let context = SolarContext::new(48.21, 16.37, 0.5, 2.0, date).unwrap();

        let sunset = context.sunrise_and_sunset().unwrap();
        let civil = context
            .sunrise_and_sunset_for_horizon(Horizon::CivilTwilight)
            .unwrap();
        assert!(civil.sunrise().unwrap().hours() < sunset.sunrise().unwrap().hours());
        assert!(civil.sunset().unwrap().hours() > sunset.sunset().unwrap().hours());
    }

    #[test]
    fn test_azimuth_degenerate_at_pole() {
        let date = CalendarDate::new(2024, 6, 21).unwrap();
        let context = SolarContext::new(90.0, 0.0, 0.5, 0.0, date).unwrap();
        assert!(matches!(
            context.solar_azimuth_angle(),
            Err(Error::DegenerateAzimuth { .. })
        ));
        assert!(context.solar_position().is_err());
    }

    #[test]
    fn test_solar_position_matches_components() {
        let date = CalendarDate::new(2024, 6, 21).unwrap();
        let context = SolarContext::new(48.21, 16.37, 0.6, 2.0, date).unwrap();
        let position = context.solar_position().unwrap();
        assert_eq!(position.azimuth(), context.solar_azimuth_angle().unwrap());
        assert_eq!(position.zenith_angle(), context.solar_zenith_angle());
        assert!(position.is_sun_up());
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let date = CalendarDate::new(2024, 8, 1).unwrap();
        let context = SolarContext::new(-33.87, 151.21, 0.3, 10.0, date).unwrap();

        assert_eq!(
            context.julian_day().to_bits(),
            context.julian_day().to_bits()
        );
        assert_eq!(
            context.equation_of_time().to_bits(),
            context.equation_of_time().to_bits()
        );
        assert_eq!(
            context.solar_zenith_angle().to_bits(),
            context.solar_zenith_angle().to_bits()
        );
        assert_eq!(
            context.solar_azimuth_angle().unwrap().to_bits(),
            context.solar_azimuth_angle().unwrap().to_bits()
        );
        assert_eq!(
            context.sunrise_and_sunset().unwrap(),
            context.sunrise_and_sunset().unwrap()
        );
    }

    #[test]
    fn test_tilted_surface_and_irradiance() {
        let context = equinox_equator();
        let flat = context.incidence_on_tilted_surface(0.0, 0.0);
        assert!((flat - context.solar_zenith_angle()).abs() < 1e-6);

        assert_eq!(context.effective_irradiance(1000.0, 0.0), 1000.0);
        assert_eq!(context.effective_irradiance(1000.0, 90.0), 0.0);
        assert_eq!(context.effective_irradiance(1000.0, 120.0), 0.0);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_datetime() {
        use chrono::{DateTime, FixedOffset};

        let datetime = "2024-06-21T18:00:00+05:30"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let context = SolarContext::from_datetime(datetime, 28.6, 77.2).unwrap();
        assert_eq!(context.date(), CalendarDate::new(2024, 6, 21).unwrap());
        assert_eq!(context.day_time(), 0.75);
        assert_eq!(context.utc_offset_hours(), 5.5);

        let utc = "2024-06-21T12:30:00Z".parse::<DateTime<FixedOffset>>().unwrap();
        let same_instant = SolarContext::from_datetime(utc, 28.6, 77.2).unwrap();
        assert!((context.julian_day() - same_instant.julian_day()).abs() < 1e-9);
    }
}
