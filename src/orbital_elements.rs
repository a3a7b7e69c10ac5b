//! # Orbital elements of a rendered body
//!
//! This module defines [`OrbitalElements`], the classical element set driving the
//! kinematics of one body, together with its validating builder.
//!
//! ## Elements
//!
//! 1. **a** – Semi-major axis (km, already-scaled catalogue units are accepted)
//! 2. **e** – Eccentricity, `e ∈ [0, 1)` (bound elliptical orbits only)
//! 3. **i** – Inclination (degrees)
//! 4. **ω** – Argument of periapsis (degrees)
//! 5. **Ω** – Longitude of ascending node (degrees)
//! 6. **M₀** – Mean anomaly at the reference epoch (degrees)
//!
//! plus the sidereal orbit period (days), the sidereal rotation period (hours), the
//! axial tilt (degrees, optional) and the reference epoch at which `M₀` is valid.
//!
//! ## Invariants
//!
//! An [`OrbitalElements`] value can only be obtained through
//! [`OrbitalElementsBuilder::build`], which rejects non-finite numbers, negative
//! semi-major axes, eccentricities outside `[0, 1)` and a zero orbit period on an
//! orbiting body. The per-frame calculators can therefore assume valid input.
//!
//! A semi-major axis `≤ 1` means "no orbit" (e.g. the central star): no position is
//! computed for such a body and its orbit period may be zero.
//!
//! ## Example
//!
//! ```rust
//! use orrery::orbital_elements::OrbitalElements;
//! use orrery::time::j2000;
//!
//! let earth = OrbitalElements::builder(j2000())
//!     .semi_major_axis(149_598_023.0)
//!     .eccentricity(0.0167)
//!     .sidereal_orbit_period(365.256)
//!     .sidereal_rotation_period(23.9345)
//!     .axial_tilt(23.4392811)
//!     .build()
//!     .unwrap();
//!
//! assert!(earth.has_orbit());
//! ```

use std::fmt;

use hifitime::Epoch;

use crate::{
    constants::{Days, Degree, Hours, Kilometer, Radian, NO_ORBIT_THRESHOLD, RADEG},
    orrery_errors::OrreryError,
};

/// Classical orbital and spin elements of one body.
///
/// Immutable: a change of elements goes through [`OrbitalElements::to_builder`] and
/// produces a new value, after which the owner must invalidate its
/// [`ElementCache`](crate::element_cache::ElementCache).
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElements {
    semi_major_axis: Kilometer,
    eccentricity: f64,
    inclination: Degree,
    argument_of_periapsis: Degree,
    longitude_of_ascending_node: Degree,
    mean_anomaly_at_epoch: Degree,
    sidereal_orbit_period: Days,
    sidereal_rotation_period: Hours,
    axial_tilt: Option<Degree>,
    reference_epoch: Epoch,
}

impl OrbitalElements {
    /// Start a builder with every numeric element set to zero.
    pub fn builder(reference_epoch: Epoch) -> OrbitalElementsBuilder {
        OrbitalElementsBuilder::new(reference_epoch)
    }

    /// Builder pre-filled with these elements, used to derive modified elements.
    pub fn to_builder(&self) -> OrbitalElementsBuilder {
        OrbitalElementsBuilder {
            semi_major_axis: self.semi_major_axis,
            eccentricity: self.eccentricity,
            inclination: self.inclination,
            argument_of_periapsis: self.argument_of_periapsis,
            longitude_of_ascending_node: self.longitude_of_ascending_node,
            mean_anomaly_at_epoch: self.mean_anomaly_at_epoch,
            sidereal_orbit_period: self.sidereal_orbit_period,
            sidereal_rotation_period: self.sidereal_rotation_period,
            axial_tilt: self.axial_tilt,
            reference_epoch: self.reference_epoch,
        }
    }

    pub fn semi_major_axis(&self) -> Kilometer {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn inclination_deg(&self) -> Degree {
        self.inclination
    }

    pub fn argument_of_periapsis_deg(&self) -> Degree {
        self.argument_of_periapsis
    }

    pub fn longitude_of_ascending_node_deg(&self) -> Degree {
        self.longitude_of_ascending_node
    }

    pub fn mean_anomaly_at_epoch_deg(&self) -> Degree {
        self.mean_anomaly_at_epoch
    }

    pub fn sidereal_orbit_period_days(&self) -> Days {
        self.sidereal_orbit_period
    }

    pub fn sidereal_rotation_period_hours(&self) -> Hours {
        self.sidereal_rotation_period
    }

    /// Axial tilt in degrees, `0` when the catalogue does not provide one.
    pub fn axial_tilt_deg(&self) -> Degree {
        self.axial_tilt.unwrap_or(0.0)
    }

    pub fn reference_epoch(&self) -> Epoch {
        self.reference_epoch
    }

    pub fn inclination(&self) -> Radian {
        self.inclination * RADEG
    }

    pub fn argument_of_periapsis(&self) -> Radian {
        self.argument_of_periapsis * RADEG
    }

    pub fn longitude_of_ascending_node(&self) -> Radian {
        self.longitude_of_ascending_node * RADEG
    }

    pub fn mean_anomaly_at_epoch(&self) -> Radian {
        self.mean_anomaly_at_epoch * RADEG
    }

    /// `false` for bodies whose semi-major axis is at or below the "no orbit" threshold.
    pub fn has_orbit(&self) -> bool {
        self.semi_major_axis > NO_ORBIT_THRESHOLD
    }
}

/// Validating builder for [`OrbitalElements`].
///
/// Angles are given in degrees, the orbit period in days and the rotation period in
/// hours. Unset elements default to zero, the axial tilt to "not provided".
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElementsBuilder {
    semi_major_axis: Kilometer,
    eccentricity: f64,
    inclination: Degree,
    argument_of_periapsis: Degree,
    longitude_of_ascending_node: Degree,
    mean_anomaly_at_epoch: Degree,
    sidereal_orbit_period: Days,
    sidereal_rotation_period: Hours,
    axial_tilt: Option<Degree>,
    reference_epoch: Epoch,
}

impl OrbitalElementsBuilder {
    pub fn new(reference_epoch: Epoch) -> Self {
        OrbitalElementsBuilder {
            semi_major_axis: 0.0,
            eccentricity: 0.0,
            inclination: 0.0,
            argument_of_periapsis: 0.0,
            longitude_of_ascending_node: 0.0,
            mean_anomaly_at_epoch: 0.0,
            sidereal_orbit_period: 0.0,
            sidereal_rotation_period: 0.0,
            axial_tilt: None,
            reference_epoch,
        }
    }

    pub fn semi_major_axis(mut self, value: Kilometer) -> Self {
        self.semi_major_axis = value;
        self
    }

    pub fn eccentricity(mut self, value: f64) -> Self {
        self.eccentricity = value;
        self
    }

    pub fn inclination(mut self, value: Degree) -> Self {
        self.inclination = value;
        self
    }

    pub fn argument_of_periapsis(mut self, value: Degree) -> Self {
        self.argument_of_periapsis = value;
        self
    }

    pub fn longitude_of_ascending_node(mut self, value: Degree) -> Self {
        self.longitude_of_ascending_node = value;
        self
    }

    pub fn mean_anomaly_at_epoch(mut self, value: Degree) -> Self {
        self.mean_anomaly_at_epoch = value;
        self
    }

    pub fn sidereal_orbit_period(mut self, value: Days) -> Self {
        self.sidereal_orbit_period = value;
        self
    }

    pub fn sidereal_rotation_period(mut self, value: Hours) -> Self {
        self.sidereal_rotation_period = value;
        self
    }

    pub fn axial_tilt(mut self, value: Degree) -> Self {
        self.axial_tilt = Some(value);
        self
    }

    pub fn reference_epoch(mut self, value: Epoch) -> Self {
        self.reference_epoch = value;
        self
    }

    /// Validate and freeze the elements.
    ///
    /// Return
    /// ------
    /// * The [`OrbitalElements`], or
    ///   - [`OrreryError::NonFiniteElement`] if any number is NaN or infinite,
    ///   - [`OrreryError::NegativeSemiMajorAxis`] if `a < 0`,
    ///   - [`OrreryError::UnsupportedEccentricity`] if `e ∉ [0, 1)`,
    ///   - [`OrreryError::ZeroOrbitalPeriod`] if the body orbits (`a > 1`) with a zero
    ///     sidereal orbit period, which would divide by zero in the mean motion.
    pub fn build(self) -> Result<OrbitalElements, OrreryError> {
        let fields = [
            ("semi_major_axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("argument_of_periapsis", self.argument_of_periapsis),
            ("longitude_of_ascending_node", self.longitude_of_ascending_node),
            ("mean_anomaly_at_epoch", self.mean_anomaly_at_epoch),
            ("sidereal_orbit_period", self.sidereal_orbit_period),
            ("sidereal_rotation_period", self.sidereal_rotation_period),
            ("axial_tilt", self.axial_tilt.unwrap_or(0.0)),
        ];
        if let Some((field, value)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(OrreryError::NonFiniteElement { field, value });
        }

        if self.semi_major_axis < 0.0 {
            return Err(OrreryError::NegativeSemiMajorAxis(self.semi_major_axis));
        }

        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrreryError::UnsupportedEccentricity(self.eccentricity));
        }

        if self.semi_major_axis > NO_ORBIT_THRESHOLD && self.sidereal_orbit_period == 0.0 {
            return Err(OrreryError::ZeroOrbitalPeriod(self.semi_major_axis));
        }

        Ok(OrbitalElements {
            semi_major_axis: self.semi_major_axis,
            eccentricity: self.eccentricity,
            inclination: self.inclination,
            argument_of_periapsis: self.argument_of_periapsis,
            longitude_of_ascending_node: self.longitude_of_ascending_node,
            mean_anomaly_at_epoch: self.mean_anomaly_at_epoch,
            sidereal_orbit_period: self.sidereal_orbit_period,
            sidereal_rotation_period: self.sidereal_rotation_period,
            axial_tilt: self.axial_tilt,
            reference_epoch: self.reference_epoch,
        })
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Elements @ epoch: {}", self.reference_epoch)?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.3} km",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6}°",
            self.inclination
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6}°",
            self.longitude_of_ascending_node
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6}°",
            self.argument_of_periapsis
        )?;
        writeln!(
            f,
            "  M₀  (mean anomaly at epoch) = {:.6}°",
            self.mean_anomaly_at_epoch
        )?;
        writeln!(
            f,
            "  P   (sidereal orbit)        = {:.6} d",
            self.sidereal_orbit_period
        )?;
        writeln!(
            f,
            "  Pr  (sidereal rotation)     = {:.6} h",
            self.sidereal_rotation_period
        )?;
        writeln!(f, "  ε   (axial tilt)            = {:.6}°", self.axial_tilt_deg())
    }
}
