//! # Orbit path sampling
//!
//! Builds the static polyline drawn for an orbit. The ellipse is swept by a
//! **parametric** true anomaly `θ_j = 2π·j/N`, `j = 0..=N`, with the radius from the
//! conic equation
//!
//! ```text
//! r(θ) = a·(1 − e²) / (1 + e·cos θ)
//! ```
//!
//! rather than from Kepler's equation: the points are evenly spaced in angle, not
//! in time. Each radius goes through the display distance law and the point is
//! oriented exactly like the live position, so a body moves along its drawn path.
//!
//! The first and last points coincide, closing the loop.

use nalgebra::Vector3;

use crate::{
    constants::{DEFAULT_PATH_POINTS, DPI},
    orbital_elements::OrbitalElements,
    ref_system::{elements_orientation, orbital_plane_point},
    scale_law::ScaleLaw,
};

/// Samples orbit ellipses into closed polylines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPathSampler {
    /// Number of segments `N`; a path holds `N + 1` points
    pub point_count: usize,
}

impl Default for OrbitPathSampler {
    fn default() -> Self {
        OrbitPathSampler {
            point_count: DEFAULT_PATH_POINTS,
        }
    }
}

impl OrbitPathSampler {
    pub fn new(point_count: usize) -> Self {
        OrbitPathSampler { point_count }
    }

    /// Sample the orbit of `elements`.
    ///
    /// Return
    /// ------
    /// * `point_count + 1` world points in display units, or an empty vector when the
    ///   body has no orbit (semi-major axis `≤ 1`) or `point_count` is zero.
    pub fn sample_path(&self, elements: &OrbitalElements) -> Vec<Vector3<f64>> {
        if !elements.has_orbit() || self.point_count == 0 {
            return Vec::new();
        }

        let a = elements.semi_major_axis();
        let e = elements.eccentricity();
        let semi_latus_rectum = a * (1.0 - e * e);
        let rotation = elements_orientation(elements);

        (0..=self.point_count)
            .map(|j| {
                let theta = DPI * j as f64 / self.point_count as f64;
                let r = semi_latus_rectum / (1.0 + e * theta.cos());
                let scaled = ScaleLaw::DISTANCE.apply_unchecked(r);
                rotation * orbital_plane_point(scaled, theta)
            })
            .collect()
    }
}

/// Sample the orbit of `elements` with `point_count` segments.
pub fn sample_path(elements: &OrbitalElements, point_count: usize) -> Vec<Vector3<f64>> {
    OrbitPathSampler::new(point_count).sample_path(elements)
}

#[cfg(test)]
mod orbit_path_test {
    use super::*;
    use crate::{
        orbital_elements::orbital_elements_test::earth_like, scale_law::scale_distance,
        time::j2000,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_closed_path_of_n_plus_one_points() {
        let elements = earth_like()
            .to_builder()
            .eccentricity(0.3)
            .inclination(7.0)
            .argument_of_periapsis(29.0)
            .longitude_of_ascending_node(48.0)
            .build()
            .unwrap();
        let path = OrbitPathSampler::default().sample_path(&elements);
        assert_eq!(path.len(), 101);
        assert_abs_diff_eq!(path[0], path[100], epsilon = 1e-9);
    }

    #[test]
    fn test_no_orbit_gives_empty_path() {
        let sun = OrbitalElements::builder(j2000())
            .semi_major_axis(1.0)
            .build()
            .unwrap();
        assert!(sample_path(&sun, 100).is_empty());
        assert!(sample_path(&earth_like(), 0).is_empty());
    }

    #[test]
    fn test_periapsis_and_apoapsis_points() {
        let elements = earth_like().to_builder().eccentricity(0.5).build().unwrap();
        let a = elements.semi_major_axis();
        let path = sample_path(&elements, 4);

        assert_eq!(path.len(), 5);
        assert_abs_diff_eq!(path[0].x, scale_distance(a * 0.5).unwrap(), epsilon = 1e-9);
        assert_abs_diff_eq!(path[2].x, -scale_distance(a * 1.5).unwrap(), epsilon = 1e-9);
        assert!(path.iter().all(|p| p.y.abs() < 1e-9));
    }

    #[test]
    fn test_circular_path_has_constant_radius() {
        let elements = earth_like()
            .to_builder()
            .eccentricity(0.0)
            .inclination(60.0)
            .build()
            .unwrap();
        let s = scale_distance(elements.semi_major_axis()).unwrap();
        for p in sample_path(&elements, 36) {
            assert_abs_diff_eq!(p.norm(), s, epsilon = 1e-9);
        }
    }
}
