#![allow(dead_code)]

use approx::assert_relative_eq;
use hifitime::Epoch;
use nalgebra::Vector3;
use orrery::{orbital_elements::OrbitalElements, time::j2000};

/// Earth-like orbit in the ecliptic, periapsis at J2000.
pub fn earth_elements() -> OrbitalElements {
    elements_at(j2000(), 149_598_023.0, 0.0167, 365.256)
}

pub fn elements_at(epoch: Epoch, a: f64, e: f64, period_days: f64) -> OrbitalElements {
    OrbitalElements::builder(epoch)
        .semi_major_axis(a)
        .eccentricity(e)
        .sidereal_orbit_period(period_days)
        .sidereal_rotation_period(23.9345)
        .build()
        .expect("valid test elements")
}

pub fn assert_vec_close(actual: &Vector3<f64>, expected: &Vector3<f64>, tolerance: f64) {
    let scale = expected.norm().max(1.0);
    for (a, b) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(a / scale, b / scale, epsilon = tolerance);
    }
}

pub fn data_path(file: &str) -> String {
    format!("{}/tests/data/{file}", env!("CARGO_MANIFEST_DIR"))
}

/// Route library logs to the test output; `RUST_LOG=orrery=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
