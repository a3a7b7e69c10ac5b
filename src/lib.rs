//! Kinematics of a scaled solar system: orbital motion and axial rotation of
//! celestial bodies over accelerated game time.
//!
//! The per-tick pipeline for one body is
//! [`OrbitalElements`](orbital_elements::OrbitalElements) →
//! [`ElementCache`](element_cache::ElementCache) →
//! [`KeplerSolver`](kepler::KeplerSolver) →
//! [`scale_distance`](scale_law::scale_distance) → world orientation, producing an
//! [`OrientedPosition`](orbital_state::OrientedPosition). The axial spin and the
//! static orbit polyline are computed alongside. [`orrery::Orrery`] drives all of it
//! for a catalogue of bodies.

pub mod axial_rotation;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod element_cache;
pub mod kepler;
pub mod orbit_path;
pub mod orbital_elements;
pub mod orbital_state;
pub mod orrery;
pub mod orrery_errors;
pub mod ref_system;
pub mod scale_law;
pub mod time;
