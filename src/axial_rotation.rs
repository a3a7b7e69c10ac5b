//! # Axial rotation
//!
//! Spin orientation of a body from its sidereal rotation period and axial tilt.
//!
//! The spin angle grows linearly with time, `θ = (2π / P)·Δt`, normalized to
//! `[0, 2π)`. The orientation is `tilt · spin`: the body spins about its own up axis
//! by `θ`, and that spin axis is then tilted by the axial tilt about world `+X`.
//! A negative period spins the body backwards (retrograde rotation).

use hifitime::Epoch;
use nalgebra::UnitQuaternion;

use crate::{
    constants::{Degree, Hours, Radian, DPI, RADEG, ROTATION_PERIOD_EPSILON},
    kepler::principal_angle,
    orbital_elements::OrbitalElements,
    ref_system::{axis_rotation, world_right, world_up},
    time::hours_between,
};

/// Spin orientation of bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxialRotationCalculator {
    /// Periods with a magnitude below this value (hours) mean "no spin"
    pub period_epsilon: Hours,
}

impl Default for AxialRotationCalculator {
    fn default() -> Self {
        AxialRotationCalculator {
            period_epsilon: ROTATION_PERIOD_EPSILON,
        }
    }
}

impl AxialRotationCalculator {
    pub fn new(period_epsilon: Hours) -> Self {
        AxialRotationCalculator { period_epsilon }
    }

    /// Spin angle in `[0, 2π)` after the time elapsed from `epoch` to `now`.
    ///
    /// Return
    /// ------
    /// * `None` if the period is below the "no spin" threshold.
    pub fn spin_angle(&self, period: Hours, epoch: Epoch, now: Epoch) -> Option<Radian> {
        if period.abs() < self.period_epsilon {
            return None;
        }
        let elapsed_hours = hours_between(epoch, now);
        Some(principal_angle(DPI / period * elapsed_hours))
    }

    /// Orientation of a body with the given period and tilt.
    pub fn orientation(
        &self,
        period: Hours,
        axial_tilt: Degree,
        epoch: Epoch,
        now: Epoch,
    ) -> UnitQuaternion<f64> {
        let Some(angle) = self.spin_angle(period, epoch, now) else {
            return UnitQuaternion::identity();
        };

        let tilt = axis_rotation(&world_right(), axial_tilt * RADEG);
        let spin = axis_rotation(&world_up(), angle);
        tilt * spin
    }

    /// Orientation of the body described by `elements` at `now`, spin measured from `epoch`.
    pub fn rotation(
        &self,
        elements: &OrbitalElements,
        epoch: Epoch,
        now: Epoch,
    ) -> UnitQuaternion<f64> {
        self.orientation(
            elements.sidereal_rotation_period_hours(),
            elements.axial_tilt_deg(),
            epoch,
            now,
        )
    }
}

/// [`AxialRotationCalculator::rotation`] with the default "no spin" threshold.
pub fn axial_rotation(elements: &OrbitalElements, epoch: Epoch, now: Epoch) -> UnitQuaternion<f64> {
    AxialRotationCalculator::default().rotation(elements, epoch, now)
}

#[cfg(test)]
mod axial_rotation_test {
    use super::*;
    use crate::{orbital_elements::orbital_elements_test::earth_like, time::j2000};
    use approx::assert_abs_diff_eq;
    use hifitime::Unit;
    use nalgebra::Vector3;
    use std::f64::consts::FRAC_PI_2;

    fn wrapped(angle: f64) -> f64 {
        angle.min(DPI - angle)
    }

    #[test]
    fn test_full_day_closes_rotation() {
        let calc = AxialRotationCalculator::default();
        let later = j2000() + 24.0 * Unit::Hour;
        let angle = calc.spin_angle(24.0, j2000(), later).unwrap();
        assert!(wrapped(angle) < 1e-9, "angle {angle}");

        let q = axial_rotation(&earth_like(), j2000(), later);
        assert!(q.angle() < 1e-9);
    }

    #[test]
    fn test_quarter_day() {
        let calc = AxialRotationCalculator::default();
        let later = j2000() + 6.0 * Unit::Hour;
        let angle = calc.spin_angle(24.0, j2000(), later).unwrap();
        assert_abs_diff_eq!(angle, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_period_is_identity() {
        let sun = OrbitalElements::builder(j2000())
            .axial_tilt(7.25)
            .build()
            .unwrap();
        let later = j2000() + 5.0 * Unit::Hour;
        assert_eq!(axial_rotation(&sun, j2000(), later), UnitQuaternion::identity());
    }

    #[test]
    fn test_retrograde_spin() {
        let calc = AxialRotationCalculator::default();
        let later = j2000() + 6.0 * Unit::Hour;
        let angle = calc.spin_angle(-24.0, j2000(), later).unwrap();
        assert_abs_diff_eq!(angle, 3.0 * FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_tilt_leans_spin_axis() {
        let elements = earth_like().to_builder().axial_tilt(23.44).build().unwrap();
        let later = j2000() + 7.0 * Unit::Hour;
        let q = axial_rotation(&elements, j2000(), later);

        // The body's own up axis is the tilted spin axis, whatever the spin angle
        let axis = q * Vector3::y();
        let tilt = 23.44 * RADEG;
        assert_abs_diff_eq!(axis, Vector3::new(0.0, tilt.cos(), tilt.sin()), epsilon = 1e-12);
    }
}
