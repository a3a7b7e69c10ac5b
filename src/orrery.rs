//! # Orrery façade
//!
//! Ties the calculators to a collection of bodies. Each [`CelestialBody`] owns its
//! [`OrbitalElements`] and the private [`ElementCache`] derived from them, so one
//! body's state never leaks into another's. An [`Orrery`] holds the bodies in
//! insertion order together with the calculators built from an [`OrreryConfig`].
//!
//! ```rust,no_run
//! use orrery::{catalog::load_catalog, config::OrreryConfig, orrery::Orrery, time::{j2000, GameClock}};
//!
//! let records = load_catalog("bodies.json")?;
//! let majors: Vec<_> = records.into_iter().filter(|r| r.is_major_body()).collect();
//! let (mut orrery, skipped) = Orrery::from_catalog(&majors, j2000(), OrreryConfig::default())?;
//! assert!(skipped.is_empty());
//!
//! let mut clock = GameClock::new(j2000()).with_time_scale(orrery.config().clock.time_scale);
//! clock.advance_scaled(1.0 / 60.0);
//! let placements = orrery.update(clock.current());
//! for (body, placement) in orrery.bodies().iter().zip(&placements) {
//!     println!("{}: {:?}", body.name(), placement.position.as_ref().map(|p| p.position));
//! }
//! # Ok::<(), orrery::orrery_errors::OrreryError>(())
//! ```

use hifitime::Epoch;
use itertools::{Either, Itertools};
use nalgebra::{UnitQuaternion, Vector3};
use tracing::{debug, warn};

use crate::{
    axial_rotation::AxialRotationCalculator,
    catalog::BodyRecord,
    config::OrreryConfig,
    element_cache::ElementCache,
    orbit_path::OrbitPathSampler,
    orbital_elements::{OrbitalElements, OrbitalElementsBuilder},
    orbital_state::{OrbitalStateCalculator, OrientedPosition},
    orrery_errors::OrreryError,
    scale_law::SphereDimensions,
};

/// Where a body is and how it is turned at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPlacement {
    /// `None` for bodies without an orbit (the central star)
    pub position: Option<OrientedPosition>,
    /// Axial orientation (tilt then spin)
    pub spin: UnitQuaternion<f64>,
}

/// A named body with its elements and their cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    name: String,
    elements: OrbitalElements,
    sphere: Option<SphereDimensions>,
    cache: ElementCache,
}

impl CelestialBody {
    pub fn new(name: impl Into<String>, elements: OrbitalElements) -> Self {
        CelestialBody {
            name: name.into(),
            elements,
            sphere: None,
            cache: ElementCache::new(),
        }
    }

    pub fn with_sphere(mut self, sphere: SphereDimensions) -> Self {
        self.sphere = Some(sphere);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Display sphere, if the body was built with one.
    pub fn sphere(&self) -> Option<SphereDimensions> {
        self.sphere
    }

    /// Replace the elements and invalidate the derived values.
    pub fn set_elements(&mut self, elements: OrbitalElements) {
        self.elements = elements;
        self.cache.invalidate();
    }

    /// Edit the current elements through a builder.
    ///
    /// The edited elements are validated again; on error the body is left unchanged.
    pub fn modify_elements(
        &mut self,
        edit: impl FnOnce(OrbitalElementsBuilder) -> OrbitalElementsBuilder,
    ) -> Result<(), OrreryError> {
        let elements = edit(self.elements.to_builder()).build()?;
        self.set_elements(elements);
        Ok(())
    }

    /// Position and spin of the body at `now`.
    pub fn placement(
        &mut self,
        now: Epoch,
        orbit: &OrbitalStateCalculator,
        spin: &AxialRotationCalculator,
    ) -> BodyPlacement {
        BodyPlacement {
            position: orbit.position(&self.elements, &mut self.cache, now),
            spin: spin.rotation(&self.elements, self.elements.reference_epoch(), now),
        }
    }

    pub fn orbit_path(&self, sampler: &OrbitPathSampler) -> Vec<Vector3<f64>> {
        sampler.sample_path(&self.elements)
    }
}

/// A catalogue record that could not be turned into a body.
#[derive(Debug, PartialEq)]
pub struct SkippedBody {
    pub name: String,
    pub error: OrreryError,
}

/// An ordered set of bodies animated with a common configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Orrery {
    bodies: Vec<CelestialBody>,
    config: OrreryConfig,
    orbit: OrbitalStateCalculator,
    spin: AxialRotationCalculator,
    path: OrbitPathSampler,
}

impl Orrery {
    /// An empty orrery; the configuration is validated first.
    pub fn new(config: OrreryConfig) -> Result<Self, OrreryError> {
        config.validate()?;
        Ok(Orrery {
            bodies: Vec::new(),
            orbit: config.orbital_state_calculator(),
            spin: config.axial_rotation_calculator(),
            path: config.orbit_path_sampler(),
            config,
        })
    }

    /// Build an orrery from catalogue records valid at `epoch`.
    ///
    /// Records with missing or invalid kinematic fields are left out and returned
    /// alongside the orrery; they never prevent the other bodies from loading.
    ///
    /// Return
    /// ------
    /// * The orrery and the skipped records, or a configuration error.
    pub fn from_catalog(
        records: &[BodyRecord],
        epoch: Epoch,
        config: OrreryConfig,
    ) -> Result<(Self, Vec<SkippedBody>), OrreryError> {
        let mut orrery = Orrery::new(config)?;

        let (bodies, skipped): (Vec<CelestialBody>, Vec<SkippedBody>) =
            records.iter().partition_map(|record| {
                let body = record.to_elements(epoch).and_then(|elements| {
                    Ok(CelestialBody::new(record.display_name(), elements)
                        .with_sphere(record.sphere_dimensions()?))
                });
                match body {
                    Ok(body) => Either::Left(body),
                    Err(error) => {
                        warn!(body = record.display_name(), %error, "skipping catalogue body");
                        Either::Right(SkippedBody {
                            name: record.display_name().to_string(),
                            error,
                        })
                    }
                }
            });

        debug!(
            loaded = bodies.len(),
            skipped = skipped.len(),
            "built orrery from catalogue"
        );
        orrery.bodies = bodies;
        Ok((orrery, skipped))
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn add_body(&mut self, body: CelestialBody) {
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// First body named `name`.
    pub fn body(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn body_mut(&mut self, name: &str) -> Result<&mut CelestialBody, OrreryError> {
        self.bodies
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| OrreryError::BodyNotFound(name.to_string()))
    }

    /// Placement of a single body at `now`.
    pub fn placement_of(&mut self, name: &str, now: Epoch) -> Result<BodyPlacement, OrreryError> {
        let (orbit, spin) = (self.orbit, self.spin);
        Ok(self.body_mut(name)?.placement(now, &orbit, &spin))
    }

    /// Placements of every body at `now`, in the order of [`bodies`](Orrery::bodies).
    pub fn update(&mut self, now: Epoch) -> Vec<BodyPlacement> {
        let (orbit, spin) = (self.orbit, self.spin);
        self.bodies
            .iter_mut()
            .map(|body| body.placement(now, &orbit, &spin))
            .collect()
    }

    /// Orbit polylines of every body, in the order of [`bodies`](Orrery::bodies).
    /// Bodies without an orbit get an empty path.
    pub fn orbit_paths(&self) -> Vec<Vec<Vector3<f64>>> {
        self.bodies
            .iter()
            .map(|body| body.orbit_path(&self.path))
            .collect()
    }
}
