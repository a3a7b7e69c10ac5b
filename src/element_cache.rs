//! # Derived orbital quantities
//!
//! [`ElementCache`] memoizes the two quantities the per-frame position needs from
//! the elements:
//!
//! - the **mean motion** `n = 2π / P` (rad/day),
//! - the **periapsis epoch** `T₀ = t_ref − (M₀ / 2π)·P`, the instant at which the
//!   body was last exactly at periapsis.
//!
//! The cache is explicit rather than hidden behind property setters: whoever owns
//! the elements calls [`ElementCache::invalidate`] when they change, and the
//! calculators call [`ElementCache::refresh`] before reading, which recomputes only
//! when the cache is stale. Recomputation is O(1).
//!
//! A cache belongs to exactly one body and is not meant to be shared across threads.

use hifitime::{Duration, Epoch};
use tracing::trace;

use crate::{constants::DPI, orbital_elements::OrbitalElements};

/// Values derived from a body's [`OrbitalElements`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedOrbit {
    /// Mean motion `2π / P` in rad/day; `0` for a body without orbit period
    pub mean_motion: f64,
    /// Instant of the last periapsis passage preceding the reference epoch
    pub periapsis_epoch: Epoch,
}

impl DerivedOrbit {
    /// Compute the derived values from scratch.
    pub fn from_elements(elements: &OrbitalElements) -> Self {
        let period = elements.sidereal_orbit_period_days();
        if period == 0.0 {
            return DerivedOrbit {
                mean_motion: 0.0,
                periapsis_epoch: elements.reference_epoch(),
            };
        }

        let fraction_of_orbit = elements.mean_anomaly_at_epoch() / DPI;
        DerivedOrbit {
            mean_motion: DPI / period,
            periapsis_epoch: elements.reference_epoch()
                - Duration::from_days(fraction_of_orbit * period),
        }
    }
}

/// Lazily recomputed [`DerivedOrbit`] with a dirty flag.
///
/// The cache starts stale; an empty slot is the dirty state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementCache {
    derived: Option<DerivedOrbit>,
}

impl ElementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the cache stale; the next [`refresh`](ElementCache::refresh) recomputes.
    pub fn invalidate(&mut self) {
        self.derived = None;
    }

    pub fn is_stale(&self) -> bool {
        self.derived.is_none()
    }

    /// Recompute if stale, then return the derived values.
    ///
    /// Arguments
    /// ---------
    /// * `elements` – the elements this cache belongs to. Passing other elements
    ///   without invalidating first returns the values of the previous ones.
    pub fn refresh(&mut self, elements: &OrbitalElements) -> DerivedOrbit {
        *self.derived.get_or_insert_with(|| {
            let derived = DerivedOrbit::from_elements(elements);
            trace!(
                mean_motion = derived.mean_motion,
                periapsis_epoch = %derived.periapsis_epoch,
                "recomputed orbital element cache"
            );
            derived
        })
    }
}
