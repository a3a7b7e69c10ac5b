//! # World frame and orbit orientation
//!
//! The display world is right-handed with **Y up**: orbital planes are laid out in
//! the X–Z plane before being oriented. Rotations follow the active convention of
//! [`nalgebra::UnitQuaternion::from_axis_angle`]: the vector is rotated inside a
//! fixed frame, positive angles counter-clockwise when looking down the axis.
//!
//! An orbit is oriented by three successive rotations about **world** axes:
//!
//! 1. argument of periapsis `ω` about world up (`+Y`),
//! 2. inclination `i` about world left (`−X`),
//! 3. longitude of ascending node `Ω` about world up (`+Y`).
//!
//! These do not commute; the composed quaternion is `q = R_Y(Ω) · R_{−X}(i) · R_Y(ω)`.

use nalgebra::{Unit, UnitQuaternion, Vector3};

use crate::{constants::Radian, orbital_elements::OrbitalElements};

/// World up, the normal of the reference plane.
pub fn world_up() -> Unit<Vector3<f64>> {
    Vector3::y_axis()
}

/// World left (`−X`), the inclination axis.
pub fn world_left() -> Unit<Vector3<f64>> {
    Unit::new_unchecked(-Vector3::x())
}

/// World right (`+X`), the axial tilt axis.
pub fn world_right() -> Unit<Vector3<f64>> {
    Vector3::x_axis()
}

/// Rotation of `angle` radians about `axis`.
pub fn axis_rotation(axis: &Unit<Vector3<f64>>, angle: Radian) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(axis, angle)
}

/// Compose the orbit orientation from its three classical angles (radians).
///
/// Arguments
/// ---------
/// * `periapsis_argument` – `ω`, applied first, about world up.
/// * `inclination` – `i`, applied second, about world left.
/// * `ascending_node_longitude` – `Ω`, applied last, about world up.
///
/// Return
/// ------
/// * The quaternion mapping orbital-plane coordinates to world coordinates.
pub fn orbit_orientation(
    periapsis_argument: Radian,
    inclination: Radian,
    ascending_node_longitude: Radian,
) -> UnitQuaternion<f64> {
    axis_rotation(&world_up(), ascending_node_longitude)
        * axis_rotation(&world_left(), inclination)
        * axis_rotation(&world_up(), periapsis_argument)
}

/// Orientation of the orbit described by `elements`.
pub fn elements_orientation(elements: &OrbitalElements) -> UnitQuaternion<f64> {
    orbit_orientation(
        elements.argument_of_periapsis(),
        elements.inclination(),
        elements.longitude_of_ascending_node(),
    )
}

/// Point in the orbital plane at polar coordinates `(radius, angle)`, measured from
/// the periapsis direction `+X` towards `+Z`.
pub fn orbital_plane_point(radius: f64, angle: Radian) -> Vector3<f64> {
    Vector3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}
