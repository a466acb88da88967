//! # Constants and type definitions for Orbiter
//!
//! This module centralizes the **physical constants**, **conversion factors**, and the
//! **unit type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Geophysical constants of the reference body (Earth)
//! - Unit conversions (degrees ↔ radians, seconds ↔ minutes ↔ days, rad/min ↔ rev/day)
//! - Julian date anchor of the SGP4 epoch
//!
//! Gravity-model specific constants (equatorial radius, `J2`, `J3`, `J4`, `kₑ`) live in
//! [`crate::gravity`]; the values below are the ones the presentation layer and the derived
//! quantities are expressed with.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Mean Earth radius in kilometers, used for altitudes and the sub-orbital check
pub const EARTH_RADIUS: Kilometer = 6371.0;

/// Earth gravitational parameter in km³/s² (WGS-84 value)
pub const MU: f64 = 398_600.5;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of minutes in a day
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Number of seconds in a minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Revolutions per day → radians per minute divisor (`1440 / 2π` ≈ 229.1831180523293)
pub const XP_DOT_P: f64 = MINUTES_PER_DAY / DPI;

/// Days in a Julian year
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Julian date of J2000 (2000-01-01 12:00)
pub const JD_J2000: f64 = 2_451_545.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Duration in seconds
pub type Second = f64;
/// Duration in minutes
pub type Minute = f64;
