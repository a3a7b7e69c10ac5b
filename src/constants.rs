//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **numeric constants**, **conversion factors**, and
//! **unit type aliases** shared by the kinematics modules.
//!
//! ## Overview
//!
//! - Angle and time conversions (degrees ↔ radians, days ↔ hours ↔ seconds)
//! - Display-scale coefficients used by [`crate::scale_law`]
//! - Solver defaults used by [`crate::kepler`]
//! - The "no orbit" convention of the body catalogue

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of seconds in an hour
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Kinematics defaults
// -------------------------------------------------------------------------------------------------

/// Default stopping threshold on |ΔE| for the Kepler solver
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Default iteration cap for the Kepler solver
pub const KEPLER_MAX_ITERATIONS: usize = 100;

/// Default number of segments of a sampled orbit path
pub const DEFAULT_PATH_POINTS: usize = 100;

/// Rotation periods below this magnitude (hours) are treated as "no spin"
pub const ROTATION_PERIOD_EPSILON: f64 = 1e-9;

/// Semi-major axes at or below this value mean "no orbit" (e.g. the central star)
pub const NO_ORBIT_THRESHOLD: f64 = 1.0;

// -------------------------------------------------------------------------------------------------
// Display scale
// -------------------------------------------------------------------------------------------------

/// Common multiplier of both display power laws
pub const SCALE_COEFFICIENT: f64 = 1.5;

/// Exponent applied to body radii
pub const RADIUS_EXPONENT: f64 = 0.5;

/// Exponent applied to orbital distances
pub const DISTANCE_EXPONENT: f64 = 0.4;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Duration in days
pub type Days = f64;
/// Duration in hours
pub type Hours = f64;
/// Length in display (scene) units
pub type DisplayUnit = f64;
