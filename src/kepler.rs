//! # Kepler's equation
//!
//! Solves the elliptic Kepler equation
//!
//! ```text
//! f(E) = E − e·sin(E) − M = 0
//! ```
//!
//! for the eccentric anomaly `E` given the mean anomaly `M` and the eccentricity
//! `e ∈ [0, 1)`, then derives the true anomaly and the orbital radius.
//!
//! The solver is a Newton–Raphson iteration started at `E₀ = M`. Since
//! `|E − M| = |e·sin E| ≤ e`, the root always lies in `[M − e, M + e]`; the bracket is
//! tightened at every step and a Newton step that would land on or outside it is
//! replaced by a bisection step. For moderate eccentricities this never triggers, and for `e → 1`
//! it prevents the wild overshoots of the plain iteration.
//!
//! Hitting the iteration cap is not an error: the last iterate is returned with
//! [`KeplerSolution::converged`] set to `false`.

use tracing::warn;

use crate::constants::{Kilometer, Radian, DPI, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE};

/// Principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: f64) -> f64 {
    let r = a.rem_euclid(DPI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if r >= DPI {
        0.0
    } else {
        r
    }
}

/// Result of one Kepler solve.
///
/// Ephemeral: recomputed on every query since the mean anomaly changes with time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly `E` (radians)
    pub eccentric_anomaly: Radian,
    /// True anomaly `ν` (radians), in `[0, 2π]` for `M ∈ [0, 2π)`
    pub true_anomaly: Radian,
    /// Eccentricity the equation was solved for
    pub eccentricity: f64,
    /// `false` when the iteration cap was reached before `|ΔE|` fell below tolerance
    pub converged: bool,
    /// Number of Newton/bisection steps performed
    pub iterations: usize,
}

impl KeplerSolution {
    /// Orbital radius `r = a·(1 − e·cos E)` for the semi-major axis `a`.
    pub fn radius(&self, semi_major_axis: Kilometer) -> Kilometer {
        semi_major_axis * (1.0 - self.eccentricity * self.eccentric_anomaly.cos())
    }
}

/// True anomaly from the eccentric anomaly:
/// `ν = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2))`.
pub fn true_anomaly(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin())
        .atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Newton–Raphson solver settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolver {
    /// Stop once `|ΔE|` drops below this value
    pub tolerance: f64,
    /// Hard cap on the number of steps
    pub max_iterations: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        KeplerSolver {
            tolerance: KEPLER_TOLERANCE,
            max_iterations: KEPLER_MAX_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    /// Solve Kepler's equation for the eccentric anomaly.
    ///
    /// Arguments
    /// ---------
    /// * `mean_anomaly` – `M` in radians. Callers should normalize it to `[0, 2π)` with
    ///   [`principal_angle`]; unnormalized values still converge.
    /// * `eccentricity` – `e ∈ [0, 1)`.
    ///
    /// Return
    /// ------
    /// * A [`KeplerSolution`]. For `e = 0` the eccentric anomaly is exactly `M`.
    pub fn solve(&self, mean_anomaly: Radian, eccentricity: f64) -> KeplerSolution {
        let mut lower = mean_anomaly - eccentricity;
        let mut upper = mean_anomaly + eccentricity;

        let mut ecc_anom = mean_anomaly;
        let mut converged = false;
        let mut iterations = 0;

        while iterations < self.max_iterations {
            iterations += 1;

            let fun = ecc_anom - eccentricity * ecc_anom.sin() - mean_anomaly;
            let funp = 1.0 - eccentricity * ecc_anom.cos();

            // f is increasing: the sign of f(E) tells on which side of the root E lies
            if fun < 0.0 {
                lower = ecc_anom;
            } else {
                upper = ecc_anom;
            }

            let step = fun / funp;
            let mut next = ecc_anom - step;
            if step.abs() >= self.tolerance && (next <= lower || next >= upper) {
                next = 0.5 * (lower + upper);
            }

            let delta = next - ecc_anom;
            ecc_anom = next;

            if delta.abs() < self.tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                mean_anomaly,
                eccentricity,
                iterations,
                "Kepler solver reached its iteration cap without converging"
            );
        }

        KeplerSolution {
            eccentric_anomaly: ecc_anom,
            true_anomaly: true_anomaly(ecc_anom, eccentricity),
            eccentricity,
            converged,
            iterations,
        }
    }
}

/// Solve Kepler's equation with the default tolerance and iteration cap.
///
/// See [`KeplerSolver::solve`].
pub fn solve_kepler_equation(mean_anomaly: Radian, eccentricity: f64) -> KeplerSolution {
    KeplerSolver::default().solve(mean_anomaly, eccentricity)
}

#[cfg(test)]
mod kepler_test {

    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn residual(sol: &KeplerSolution, mean_anomaly: f64) -> f64 {
        let e = sol.eccentricity;
        (sol.eccentric_anomaly - e * sol.eccentric_anomaly.sin() - mean_anomaly).abs()
    }

    #[test]
    fn test_principal_angle() {
        assert_eq!(principal_angle(0.0), 0.0);
        assert_abs_diff_eq!(principal_angle(-PI / 2.0), 1.5 * PI, epsilon = 1e-15);
        assert_abs_diff_eq!(principal_angle(5.0 * PI), PI, epsilon = 1e-14);
        assert_eq!(principal_angle(DPI), 0.0);
        assert!(principal_angle(-1e-20) < DPI);
    }

    #[test]
    fn test_circular_orbit_is_exact() {
        for k in 0..64 {
            let m = DPI * k as f64 / 64.0;
            let sol = solve_kepler_equation(m, 0.0);
            assert_eq!(sol.eccentric_anomaly, m);
            assert!(sol.converged);
        }

        let one_step = KeplerSolver {
            tolerance: KEPLER_TOLERANCE,
            max_iterations: 1,
        };
        assert_eq!(one_step.solve(1.234, 0.0).eccentric_anomaly, 1.234);
    }

    #[test]
    fn test_residual_over_eccentricity_grid() {
        for ie in 0..=99 {
            let e = ie as f64 / 100.0;
            for im in 0..200 {
                let m = DPI * im as f64 / 200.0;
                let sol = solve_kepler_equation(m, e);
                assert!(
                    residual(&sol, m) < 1e-5,
                    "residual too large for e = {e}, M = {m}: {sol:?}"
                );
                assert!(sol.converged, "no convergence for e = {e}, M = {m}");
            }
        }
    }

    #[test]
    fn test_unnormalized_mean_anomaly() {
        let m = 7.0 * DPI + 0.3;
        let sol = solve_kepler_equation(m, 0.2);
        assert!(residual(&sol, m) < 1e-5);
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let solver = KeplerSolver {
            tolerance: 1e-15,
            max_iterations: 2,
        };
        let sol = solver.solve(0.1414, 0.99);
        assert!(!sol.converged);
        assert_eq!(sol.iterations, 2);
        assert!(sol.eccentric_anomaly.is_finite());
    }

    #[test]
    fn test_true_anomaly_and_radius() {
        let e = 0.0167;
        let a = 149_600_000.0;

        let peri = solve_kepler_equation(0.0, e);
        assert_eq!(peri.true_anomaly, 0.0);
        assert_abs_diff_eq!(peri.radius(a), a * (1.0 - e), epsilon = 1e-6);

        let apo = solve_kepler_equation(PI, e);
        assert_abs_diff_eq!(apo.true_anomaly, PI, epsilon = 1e-9);
        assert_abs_diff_eq!(apo.radius(a), a * (1.0 + e), epsilon = 1e-3);
    }

    #[test]
    fn test_true_anomaly_leads_mean_anomaly_before_apoapsis() {
        let sol = solve_kepler_equation(1.0, 0.3);
        assert!(sol.eccentric_anomaly > 1.0);
        assert!(sol.true_anomaly > sol.eccentric_anomaly);
    }
}
