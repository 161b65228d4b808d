//! Fixed-step integration of a bound growth law.
//!
//! There is no adaptive step control: step size is caller-specified and
//! fixed for the run, and integration always runs to completion once
//! invoked. All arithmetic is `f64`.

use crate::domain::{SolverKind, Trajectory};
use crate::models::Law;

/// Internal step size used by [`integrate_at`].
const TARGET_DT: f64 = 1.0;

/// Advance one step of size `dt` from `(t, y)` and return the new `y`.
fn step(law: &Law, solver: SolverKind, t: f64, y: f64, dt: f64) -> f64 {
    match solver {
        SolverKind::Euler => y + dt * law.slope(t, y),
        SolverKind::Heun => {
            let k1 = law.slope(t, y);
            let k2 = law.slope(t + dt, y + dt * k1);
            y + dt * (k1 + k2) / 2.0
        }
        SolverKind::RungeKutta => {
            let k1 = law.slope(t, y);
            let k2 = law.slope(t + dt / 2.0, y + dt * k1 / 2.0);
            let k3 = law.slope(t + dt / 2.0, y + dt * k2 / 2.0);
            let k4 = law.slope(t + dt, y + dt * k3);
            y + dt * (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
        }
    }
}

/// Integrate from `(t, y) = (0, y0)`, recording every step.
///
/// Advances `t_end / step_size` steps of size `dt = 1 / step_size`; the
/// returned trajectory holds the initial state plus one point per step.
pub fn integrate_horizon(
    law: &Law,
    solver: SolverKind,
    y0: f64,
    step_size: f64,
    t_end: f64,
) -> Trajectory {
    let dt = 1.0 / step_size;
    let n_steps = (t_end / step_size).max(0.0) as usize;

    let mut out = Trajectory::with_capacity(n_steps + 1);
    let mut t = 0.0;
    let mut y = y0;
    out.push(t, y);
    for _ in 0..n_steps {
        y = step(law, solver, t, y, dt);
        t += dt;
        out.push(t, y);
    }
    out
}

/// Integrate with a fixed unit step, recording the state at each target time.
///
/// State carries forward across targets and internal time never resets. For
/// each target, the recorded value is whatever `y` is at the first internal
/// step that reaches or passes it; there is no interpolation. Targets are
/// expected in non-decreasing order; the output has exactly one point per
/// target.
pub fn integrate_at(law: &Law, solver: SolverKind, y0: f64, targets: &[f64]) -> Trajectory {
    let mut out = Trajectory::with_capacity(targets.len());
    let mut t = 0.0;
    let mut y = y0;
    for &target in targets {
        while t < target {
            y = step(law, solver, t, y, TARGET_DT);
            t += TARGET_DT;
        }
        out.push(target, y);
    }
    out
}
