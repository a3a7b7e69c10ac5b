//! # Simulation time
//!
//! Timestamps are [`hifitime::Epoch`] values and intervals are
//! [`hifitime::Duration`]s. The kinematics functions never read the wall clock: the
//! current simulation time is always an explicit argument, supplied by a
//! [`GameClock`] living at the application boundary.

use std::str::FromStr;

use hifitime::{Duration, Epoch};
use tracing::debug;

use crate::{
    constants::{Days, Hours, SECONDS_PER_DAY, SECONDS_PER_HOUR},
    orrery_errors::OrreryError,
};

/// J2000.0 reference epoch (2000-01-01 12:00:00 UTC)
pub fn j2000() -> Epoch {
    Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0)
}

/// Parse a timestamp such as `2021-01-01T00:00:00 UTC`.
///
/// Return
/// ------
/// * The parsed [`Epoch`] or [`OrreryError::InvalidEpoch`].
pub fn parse_epoch(date: &str) -> Result<Epoch, OrreryError> {
    Ok(Epoch::from_str(date)?)
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: Epoch, to: Epoch) -> Days {
    (to - from).to_seconds() / SECONDS_PER_DAY
}

/// Signed number of hours from `from` to `to`.
pub fn hours_between(from: Epoch, to: Epoch) -> Hours {
    (to - from).to_seconds() / SECONDS_PER_HOUR
}

/// Game clock: a pausable, explicitly advanced simulation timestamp.
///
/// The clock only moves forward through [`advance`](GameClock::advance) (negative
/// deltas are ignored) and jumps through [`set_time`](GameClock::set_time). While
/// paused, advances are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct GameClock {
    start: Epoch,
    current: Epoch,
    paused: bool,
    /// Game seconds per real second
    time_scale: f64,
}

impl GameClock {
    /// A running clock starting at `start`, advancing one game second per real second.
    pub fn new(start: Epoch) -> Self {
        GameClock {
            start,
            current: start,
            paused: false,
            time_scale: 1.0,
        }
    }

    /// A running clock starting at the current system time.
    pub fn starting_now() -> Result<Self, OrreryError> {
        Ok(Self::new(Epoch::now()?))
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.set_time_scale(time_scale);
        self
    }

    pub fn start(&self) -> Epoch {
        self.start
    }

    pub fn current(&self) -> Epoch {
        self.current
    }

    /// Game time elapsed since the start of the clock.
    pub fn elapsed(&self) -> Duration {
        self.current - self.start
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Set the number of game seconds per real second; negative or non-finite
    /// values are ignored.
    pub fn set_time_scale(&mut self, time_scale: f64) {
        if time_scale.is_finite() && time_scale >= 0.0 {
            self.time_scale = time_scale;
        } else {
            debug!(time_scale, "ignoring invalid clock time scale");
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Jump to an absolute time, paused or not.
    pub fn set_time(&mut self, epoch: Epoch) {
        self.current = epoch;
    }

    /// Advance the game time by `delta` unless paused.
    pub fn advance(&mut self, delta: Duration) {
        if self.paused {
            return;
        }
        if delta < Duration::ZERO {
            debug!(%delta, "ignoring negative clock advance");
            return;
        }
        self.current += delta;
    }

    /// Advance by a frame of `real_seconds`, multiplied by the time scale.
    pub fn advance_scaled(&mut self, real_seconds: f64) {
        self.advance(Duration::from_seconds(real_seconds * self.time_scale));
    }
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;
    use hifitime::Unit;

    #[test]
    fn test_parse_epoch() {
        let epoch = parse_epoch("2000-01-01T12:00:00 UTC").unwrap();
        assert_eq!(epoch, j2000());
        assert!(matches!(
            parse_epoch("not a date"),
            Err(OrreryError::InvalidEpoch(_))
        ));
    }

    #[test]
    fn test_days_and_hours_between() {
        let later = j2000() + 182.625 * Unit::Day;
        assert_relative_eq!(days_between(j2000(), later), 182.625, epsilon = 1e-9);
        assert_relative_eq!(hours_between(j2000(), later), 182.625 * 24.0, epsilon = 1e-6);
        assert_relative_eq!(days_between(later, j2000()), -182.625, epsilon = 1e-9);
    }

    #[test]
    fn test_clock_advance_and_pause() {
        let mut clock = GameClock::new(j2000());
        clock.advance(Duration::from_seconds(90.0));
        assert_eq!(clock.elapsed(), Duration::from_seconds(90.0));

        clock.pause();
        clock.advance(Duration::from_seconds(30.0));
        assert!(clock.is_paused());
        assert_eq!(clock.elapsed(), Duration::from_seconds(90.0));

        clock.resume();
        clock.advance(Duration::from_seconds(-30.0));
        assert_eq!(clock.elapsed(), Duration::from_seconds(90.0));
    }

    #[test]
    fn test_clock_advance_scaled_uses_time_scale() {
        let mut clock = GameClock::new(j2000()).with_time_scale(3600.0);
        clock.advance_scaled(0.5);
        assert_relative_eq!(clock.elapsed().to_seconds(), 1800.0);

        clock.set_time_scale(-2.0);
        assert_eq!(clock.time_scale(), 3600.0);
    }

    #[test]
    fn test_clock_set_time() {
        let mut clock = GameClock::new(j2000());
        clock.pause();
        let target = j2000() + Duration::from_days(1.0);
        clock.set_time(target);
        assert_eq!(clock.current(), target);
        assert_eq!(clock.start(), j2000());
    }
}
