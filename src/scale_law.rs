//! # Display scale law
//!
//! Physical radii and distances of a planetary system span more than five orders of
//! magnitude. A single linear scale makes small bodies invisible or puts distant ones
//! off-screen, so both magnitudes are compressed by a sub-linear power law
//!
//! ```text
//! s(x) = c · x^p
//! ```
//!
//! with `c = 1.5`, `p = 0.5` for body radii and `p = 0.4` for orbital distances.
//! The exponents are a visual compromise, not a physical law: relative proportions
//! are **not** preserved, and callers must not derive physical quantities from
//! scaled values.
//!
//! Both laws are strictly increasing on `(0, ∞)`, map `0` to `0`, and reject negative
//! inputs with [`OrreryError::NegativeScaleInput`].

use crate::{
    constants::{
        DisplayUnit, Kilometer, DISTANCE_EXPONENT, RADIUS_EXPONENT, SCALE_COEFFICIENT,
    },
    orrery_errors::OrreryError,
};

/// A monotonic power law `coefficient · x^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLaw {
    pub coefficient: f64,
    pub exponent: f64,
}

impl ScaleLaw {
    /// Law applied to body radii: `1.5 · r^0.5`.
    pub const RADIUS: ScaleLaw = ScaleLaw {
        coefficient: SCALE_COEFFICIENT,
        exponent: RADIUS_EXPONENT,
    };

    /// Law applied to orbital distances: `1.5 · d^0.4`.
    pub const DISTANCE: ScaleLaw = ScaleLaw {
        coefficient: SCALE_COEFFICIENT,
        exponent: DISTANCE_EXPONENT,
    };

    /// Apply the law to a non-negative physical magnitude.
    ///
    /// Arguments
    /// ---------
    /// * `value` – physical magnitude (km, or already scaled catalogue units).
    ///
    /// Return
    /// ------
    /// * The display-space magnitude, or [`OrreryError::NegativeScaleInput`] when
    ///   `value < 0` (NaN is rejected the same way).
    pub fn apply(&self, value: f64) -> Result<DisplayUnit, OrreryError> {
        if value < 0.0 || value.is_nan() {
            return Err(OrreryError::NegativeScaleInput(value));
        }
        Ok(self.apply_unchecked(value))
    }

    /// Apply the law to a magnitude already known to be non-negative.
    pub(crate) fn apply_unchecked(&self, value: f64) -> DisplayUnit {
        self.coefficient * value.powf(self.exponent)
    }
}

/// Scale a body radius to display units: `1.5 · r^0.5`.
pub fn scale_radius(radius: Kilometer) -> Result<DisplayUnit, OrreryError> {
    ScaleLaw::RADIUS.apply(radius)
}

/// Scale an orbital distance to display units: `1.5 · d^0.4`.
pub fn scale_distance(distance: Kilometer) -> Result<DisplayUnit, OrreryError> {
    ScaleLaw::DISTANCE.apply(distance)
}

/// Display sphere of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereDimensions {
    pub radius: DisplayUnit,
    pub height: DisplayUnit,
}

impl SphereDimensions {
    /// Size a body's display sphere from its equatorial and polar radii.
    ///
    /// Catalogue entries sometimes carry only one of the two radii, the missing one being
    /// stored as `0` (or `1`). The radius comes from the equatorial radius unless it is
    /// `≤ 1`, the height from twice the polar radius unless it is `≤ 1`; each falls back
    /// to the other radius.
    pub fn from_radii(
        equatorial_radius: Kilometer,
        polar_radius: Kilometer,
    ) -> Result<Self, OrreryError> {
        let radius = if equatorial_radius <= 1.0 {
            polar_radius
        } else {
            equatorial_radius
        };
        let height = if polar_radius <= 1.0 {
            equatorial_radius
        } else {
            polar_radius
        } * 2.0;

        Ok(SphereDimensions {
            radius: scale_radius(radius)?,
            height: scale_radius(height)?,
        })
    }
}
