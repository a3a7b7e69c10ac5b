//! # Orrery configuration
//!
//! Tunables of the kinematics engine, read from TOML:
//!
//! ```toml
//! [kepler]
//! tolerance = 1e-6
//! max_iterations = 100
//!
//! [path]
//! point_count = 100
//!
//! [rotation]
//! period_epsilon_hours = 1e-9
//!
//! [clock]
//! time_scale = 1.0
//! ```
//!
//! Every section and key is optional and falls back to the defaults above.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    axial_rotation::AxialRotationCalculator,
    constants::{
        DEFAULT_PATH_POINTS, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE, ROTATION_PERIOD_EPSILON,
    },
    kepler::KeplerSolver,
    orbit_path::OrbitPathSampler,
    orbital_state::OrbitalStateCalculator,
    orrery_errors::OrreryError,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeplerSection {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for KeplerSection {
    fn default() -> Self {
        KeplerSection {
            tolerance: KEPLER_TOLERANCE,
            max_iterations: KEPLER_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathSection {
    pub point_count: usize,
}

impl Default for PathSection {
    fn default() -> Self {
        PathSection {
            point_count: DEFAULT_PATH_POINTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotationSection {
    pub period_epsilon_hours: f64,
}

impl Default for RotationSection {
    fn default() -> Self {
        RotationSection {
            period_epsilon_hours: ROTATION_PERIOD_EPSILON,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockSection {
    /// Game seconds per real second
    pub time_scale: f64,
}

impl Default for ClockSection {
    fn default() -> Self {
        ClockSection { time_scale: 1.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrreryConfig {
    pub kepler: KeplerSection,
    pub path: PathSection,
    pub rotation: RotationSection,
    pub clock: ClockSection,
}

impl OrreryConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(content: &str) -> Result<Self, OrreryError> {
        let config: OrreryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OrreryError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Reject values the calculators cannot work with.
    pub fn validate(&self) -> Result<(), OrreryError> {
        if !(self.kepler.tolerance > 0.0 && self.kepler.tolerance.is_finite()) {
            return Err(OrreryError::InvalidConfig(format!(
                "kepler.tolerance must be a positive number, got {}",
                self.kepler.tolerance
            )));
        }
        if self.kepler.max_iterations == 0 {
            return Err(OrreryError::InvalidConfig(
                "kepler.max_iterations must be at least 1".into(),
            ));
        }
        if self.path.point_count == 0 {
            return Err(OrreryError::InvalidConfig(
                "path.point_count must be at least 1".into(),
            ));
        }
        if !(self.rotation.period_epsilon_hours >= 0.0
            && self.rotation.period_epsilon_hours.is_finite())
        {
            return Err(OrreryError::InvalidConfig(format!(
                "rotation.period_epsilon_hours must be a non-negative number, got {}",
                self.rotation.period_epsilon_hours
            )));
        }
        if !(self.clock.time_scale >= 0.0 && self.clock.time_scale.is_finite()) {
            return Err(OrreryError::InvalidConfig(format!(
                "clock.time_scale must be a non-negative number, got {}",
                self.clock.time_scale
            )));
        }
        Ok(())
    }

    pub fn kepler_solver(&self) -> KeplerSolver {
        KeplerSolver {
            tolerance: self.kepler.tolerance,
            max_iterations: self.kepler.max_iterations,
        }
    }

    pub fn orbital_state_calculator(&self) -> OrbitalStateCalculator {
        OrbitalStateCalculator::new(self.kepler_solver())
    }

    pub fn axial_rotation_calculator(&self) -> AxialRotationCalculator {
        AxialRotationCalculator::new(self.rotation.period_epsilon_hours)
    }

    pub fn orbit_path_sampler(&self) -> OrbitPathSampler {
        OrbitPathSampler::new(self.path.point_count)
    }
}
