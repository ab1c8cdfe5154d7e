//! # Constants and type definitions for mpcorb
//!
//! This module centralizes the **conversion factors**, **catalog layout constants**, and
//! **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, days ↔ seconds)
//! - Time-scale offsets (TT ↔ TAI)
//! - MPCORB file layout (header length, minimal row length)
//! - Dynamical thresholds used by the orbit classifier

use std::ops::RangeInclusive;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Terrestrial Time leads International Atomic Time by exactly 32.184 s.
pub const TT_MINUS_TAI_MILLISECONDS: i64 = 32_184;

// -------------------------------------------------------------------------------------------------
// MPCORB layout
// -------------------------------------------------------------------------------------------------

/// Number of non-blank metadata lines preceding the first orbit row of `MPCORB.DAT`.
pub const MPCORB_HEADER_LINES: usize = 43;

/// Rows must reach the end of the flags column (characters `161..165`).
pub const MIN_ROW_LENGTH: usize = 165;

/// Location of the uncompressed catalog published by the Minor Planet Center.
pub const MPCORB_DAT_URL: &str = "https://minorplanetcenter.net/iau/MPCORB/MPCORB.DAT";

// -------------------------------------------------------------------------------------------------
// Dynamical thresholds
// -------------------------------------------------------------------------------------------------

/// Perihelion distances (AU) considered part of the main asteroid belt.
///
/// Somewhat arbitrary, roughly follows the usual inner and outer edges of the belt.
pub const ASTEROID_BELT_PERIHELION_AU: RangeInclusive<f64> = 2.06..=3.28;

/// Default tolerance (radians) when solving Kepler's equation.
pub const KEPLER_TOLERANCE: f64 = 1e-12;

/// Default iteration cap when solving Kepler's equation.
pub const KEPLER_MAX_ITERATIONS: usize = 100;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Mean motion in degrees per day
pub type DegreePerDay = f64;
