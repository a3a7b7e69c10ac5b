//! # Orbital state at a given time
//!
//! Converts a body's [`OrbitalElements`] and a simulation timestamp into its
//! display-space position:
//!
//! 1. `Δt = now − T₀` in days, `T₀` being the cached periapsis epoch,
//! 2. mean anomaly `M = n·Δt` normalized to `[0, 2π)`, which equals
//!    `M₀ + n·(now − t_ref)`,
//! 3. eccentric anomaly, true anomaly `ν` and radius `r` from [`crate::kepler`],
//! 4. planar point `(s·cos ν, 0, s·sin ν)` with `s = scale_distance(r)`,
//! 5. orientation by `ω`, `i`, `Ω` (see [`crate::ref_system`]).
//!
//! The display scale is applied to the scalar radius before projecting on the
//! plane: the power law is not linear, so scaling `x` and `z` separately would
//! distort the ellipse.

use hifitime::Epoch;
use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    constants::{Kilometer, Radian},
    element_cache::{DerivedOrbit, ElementCache},
    kepler::{principal_angle, KeplerSolution, KeplerSolver},
    orbital_elements::OrbitalElements,
    ref_system::{elements_orientation, orbital_plane_point},
    scale_law::ScaleLaw,
    time::days_between,
};

/// Position of a body at one instant, with the intermediate quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedPosition {
    /// World position in display units
    pub position: Vector3<f64>,
    /// Position in the orbital (X–Z) plane before orientation, display units
    pub planar_position: Vector3<f64>,
    /// Orbit orientation applied to `planar_position`
    pub rotation: UnitQuaternion<f64>,
    /// Mean anomaly `M ∈ [0, 2π)`
    pub mean_anomaly: Radian,
    /// Solution of Kepler's equation for `M`
    pub kepler: KeplerSolution,
    /// Physical (unscaled) distance to the focus
    pub radius: Kilometer,
}

/// Per-tick orbital placement of bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitalStateCalculator {
    pub solver: KeplerSolver,
}

impl OrbitalStateCalculator {
    pub fn new(solver: KeplerSolver) -> Self {
        OrbitalStateCalculator { solver }
    }

    /// Mean anomaly at `now`, normalized to `[0, 2π)`.
    pub fn mean_anomaly(derived: &DerivedOrbit, now: Epoch) -> Radian {
        let time_since_periapsis = days_between(derived.periapsis_epoch, now);
        principal_angle(derived.mean_motion * time_since_periapsis)
    }

    /// Compute the display position of a body at `now`.
    ///
    /// Arguments
    /// ---------
    /// * `elements` – the body's elements.
    /// * `cache` – the body's element cache, refreshed here if stale.
    /// * `now` – current simulation time.
    ///
    /// Return
    /// ------
    /// * `None` when the body has no orbit (semi-major axis `≤ 1`), whatever its
    ///   other elements; otherwise the [`OrientedPosition`].
    pub fn position(
        &self,
        elements: &OrbitalElements,
        cache: &mut ElementCache,
        now: Epoch,
    ) -> Option<OrientedPosition> {
        if !elements.has_orbit() {
            return None;
        }

        let derived = cache.refresh(elements);
        let mean_anomaly = Self::mean_anomaly(&derived, now);

        let kepler = self.solver.solve(mean_anomaly, elements.eccentricity());
        let radius = kepler.radius(elements.semi_major_axis());

        // r > 0 for a validated bound orbit
        let scaled_radius = ScaleLaw::DISTANCE.apply_unchecked(radius);
        let planar_position = orbital_plane_point(scaled_radius, kepler.true_anomaly);

        let rotation = elements_orientation(elements);

        Some(OrientedPosition {
            position: rotation * planar_position,
            planar_position,
            rotation,
            mean_anomaly,
            kepler,
            radius,
        })
    }
}

/// [`OrbitalStateCalculator::position`] with the default Kepler solver.
pub fn position(
    elements: &OrbitalElements,
    cache: &mut ElementCache,
    now: Epoch,
) -> Option<OrientedPosition> {
    OrbitalStateCalculator::default().position(elements, cache, now)
}

#[cfg(test)]
mod orbital_state_test {
    use super::*;
    use crate::{
        constants::DPI, orbital_elements::orbital_elements_test::earth_like,
        scale_law::scale_distance, time::j2000,
    };
    use approx::assert_abs_diff_eq;
    use hifitime::Duration;
    use std::f64::consts::PI;

    #[test]
    fn test_no_orbit_returns_none() {
        for a in [0.0, 0.5, 1.0] {
            let elements = OrbitalElements::builder(j2000())
                .semi_major_axis(a)
                .eccentricity(0.9)
                .inclination(33.0)
                .mean_anomaly_at_epoch(120.0)
                .sidereal_rotation_period(25.0)
                .build()
                .unwrap();
            let mut cache = ElementCache::new();
            let later = j2000() + Duration::from_days(17.0);
            assert!(position(&elements, &mut cache, later).is_none());
        }
    }

    #[test]
    fn test_at_periapsis_epoch() {
        let elements = earth_like()
            .to_builder()
            .eccentricity(0.2)
            .mean_anomaly_at_epoch(45.0)
            .build()
            .unwrap();
        let mut cache = ElementCache::new();
        let periapsis = cache.refresh(&elements).periapsis_epoch;

        let state = position(&elements, &mut cache, periapsis).unwrap();
        let nu = state.kepler.true_anomaly;
        assert!(nu.min(DPI - nu) < 1e-6, "true anomaly {nu}");
        assert_abs_diff_eq!(
            state.radius,
            elements.semi_major_axis() * 0.8,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_mean_anomaly_advances_from_epoch_value() {
        let elements = earth_like()
            .to_builder()
            .mean_anomaly_at_epoch(90.0)
            .build()
            .unwrap();
        let mut cache = ElementCache::new();

        let at_epoch = position(&elements, &mut cache, j2000()).unwrap();
        assert_abs_diff_eq!(at_epoch.mean_anomaly, PI / 2.0, epsilon = 1e-9);

        let later = j2000() + Duration::from_days(365.25 / 4.0);
        let state = position(&elements, &mut cache, later).unwrap();
        assert_abs_diff_eq!(state.mean_anomaly, PI, epsilon = 1e-9);
    }

    #[test]
    fn test_scale_applies_to_radius_only() {
        let elements = earth_like()
            .to_builder()
            .eccentricity(0.4)
            .inclination(12.0)
            .argument_of_periapsis(70.0)
            .longitude_of_ascending_node(200.0)
            .build()
            .unwrap();
        let mut cache = ElementCache::new();
        let later = j2000() + Duration::from_days(47.3);

        let state = position(&elements, &mut cache, later).unwrap();
        let expected = scale_distance(state.radius).unwrap();
        assert_abs_diff_eq!(state.position.norm(), expected, epsilon = 1e-9);
        assert_abs_diff_eq!(state.planar_position.y, 0.0);
    }

    #[test]
    fn test_inclined_orbit_rises_above_reference_plane() {
        let elements = earth_like()
            .to_builder()
            .eccentricity(0.0)
            .inclination(30.0)
            .build()
            .unwrap();
        let mut cache = ElementCache::new();

        let quarter = j2000() + Duration::from_days(365.25 / 4.0);
        let state = position(&elements, &mut cache, quarter).unwrap();
        let s = scale_distance(elements.semi_major_axis()).unwrap();
        assert_abs_diff_eq!(state.position.y, s * 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(state.position.z, s * (PI / 6.0).cos(), epsilon = 1e-6);
    }
}
