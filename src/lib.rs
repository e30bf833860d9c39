//! # NOAA Solar Calculations
//!
//! Solar geometry for a location and local time, following the NOAA solar
//! calculator spreadsheet.
//!
//! For one place and one instant this library derives the Julian day, the sun's
//! orbital parameters, the equation of time, the solar declination, the hour
//! angle, the zenith and azimuth angles, the incidence angle on a tilted
//! surface, sunrise and sunset, and the effective irradiance on a surface.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! ## Features
//!
//! - Works in `std` or `no_std` builds, with or without `chrono`, math via native or `libm`
//! - Validated, immutable [`SolarContext`]; every quantity is recomputed on demand
//! - Explicit polar day and polar night outcomes instead of NaN
//! - Thread-safe: no caches, no interior mutability
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based constructor
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `tz`: Look up UTC offsets by IANA time zone name via `chrono-tz`
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! noaa-solar = "0.1"
//!
//! # Minimal std (numeric API only)
//! noaa-solar = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std
//! noaa-solar = { version = "0.1", default-features = false, features = ["libm"] }
//!
//! # Time zone names
//! noaa-solar = { version = "0.1", features = ["tz"] }
//! ```
//!
//! ## References
//!
//! - NOAA Global Monitoring Laboratory, Solar Calculation Details and the
//!   `NOAA_Solar_Calculations_day.xls` spreadsheet.
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.
//! - Duffie, J. A.; Beckman, W. A. (2013). Solar Engineering of Thermal Processes, 4th ed.
//!
//! ## Quick Start
//!
//! ### Solar Position (numeric API)
//! ```rust
//! use noaa_solar::{CalendarDate, SolarContext};
//!
//! // Vienna, 2024-06-21 12:00 local time (UTC+2)
//! let date = CalendarDate::new(2024, 6, 21).unwrap();
//! let context = SolarContext::new(48.21, 16.37, 0.5, 2.0, date).unwrap();
//!
//! println!("Declination: {:.3}°", context.solar_declination());
//! println!("Zenith: {:.3}°", context.solar_zenith_angle());
//! println!("Azimuth: {:.3}°", context.solar_azimuth_angle().unwrap());
//! ```
//!
//! ### Solar Position (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use noaa_solar::SolarContext;
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2024-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let position = SolarContext::from_datetime(datetime, 48.21, 16.37)
//!     .and_then(|context| context.solar_position())
//!     .unwrap();
//!
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Elevation: {:.3}°", position.elevation_angle());
//! # }
//! ```
//!
//! ### Sunrise and Sunset
//! ```rust
//! use noaa_solar::{CalendarDate, SolarContext, SunriseResult};
//!
//! // San Francisco, UTC-7 in summer
//! let date = CalendarDate::new(2024, 6, 21).unwrap();
//! let context = SolarContext::new(37.7749, -122.4194, 0.5, -7.0, date).unwrap();
//!
//! match context.sunrise_and_sunset().unwrap() {
//!     SunriseResult::RegularDay { sunrise, solar_noon, sunset } => {
//!         println!("Sunrise: {:.2} h", sunrise.hours());
//!         println!("Solar noon: {:.2} h", solar_noon.hours());
//!         println!("Sunset: {:.2} h", sunset.hours());
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! ```
//!
//! ## Coordinate System
//!
//! - **Latitude**: north positive; **longitude**: east positive
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Zenith angle**: 0° = directly overhead (zenith), 90° = horizon (0° to 180°)
//! - **Hour angle**: negative before solar noon, positive after
//! - **Surface azimuth** (tilted surfaces): 0° = facing south, west positive

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::context::{SolarContext, SolarContextBuilder};
pub use crate::error::{Error, Result};
pub use crate::time::{CalendarDate, JulianDate};
pub use crate::types::{ClockHours, Horizon, SolarPosition, SunriseHourAngle, SunriseResult};

// Calculation modules
pub mod context;
pub mod irradiance;
pub mod noaa;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
#[cfg(feature = "tz")]
pub mod tz;
