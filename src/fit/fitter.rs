//! Derivative-free parameter calibration.
//!
//! Coordinate pattern search: perturb one parameter at a time, expand the
//! step after an accepted move and shrink it when neither direction
//! improves. A local heuristic: the result is the best parameter set seen,
//! not a global optimum.

use crate::domain::{FitResult, ModelKind, ParamMap, SolverKind};
use crate::error::ModelError;
use crate::fit::evaluator::CurveEvaluator;

/// Step growth factor applied after an accepted move.
const EXPAND: f64 = 1.2;
/// Step shrink factor applied when neither direction improves.
const SHRINK: f64 = 0.2;

/// Options that bound the pattern search.
#[derive(Debug, Clone, Copy)]
pub struct FitOptions {
    /// Maximum number of sweeps over the parameter set.
    pub max_tries: usize,
    /// The search stops once every step magnitude falls to this tolerance.
    pub step_tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            max_tries: 1000,
            step_tolerance: 1e-6,
        }
    }
}

/// Calibrate `initial`'s parameters against the evaluator's observations.
///
/// Every key in `initial` is a free coordinate, `y0` included. Improvement
/// is strict (`<`): an equal MSE is not accepted, so a flat objective
/// leaves the parameters where they started. The caller's map is never
/// mutated; each trial evaluates a fresh candidate.
pub fn fit_model(
    eval: &CurveEvaluator<'_>,
    model: ModelKind,
    solver: SolverKind,
    initial: &ParamMap,
    opts: &FitOptions,
) -> Result<FitResult, ModelError> {
    let mut params = initial.clone();
    let mut mse = eval.mse(model, solver, &params)?;

    // BTreeMap keys are sorted, so the sweep order is deterministic.
    let keys: Vec<String> = params.keys().cloned().collect();
    let mut deltas = vec![1.0_f64; keys.len()];

    for _ in 0..opts.max_tries {
        for (key, delta) in keys.iter().zip(deltas.iter_mut()) {
            let base = params[key];

            // Forward probe.
            let mut candidate = params.clone();
            candidate.insert(key.clone(), base + *delta);
            let trial = eval.mse(model, solver, &candidate)?;
            if trial < mse {
                params = candidate;
                mse = trial;
                *delta *= EXPAND;
                continue;
            }

            // Backward probe: flip the direction for the next sweep too.
            let mut candidate = params.clone();
            candidate.insert(key.clone(), base - *delta);
            let trial = eval.mse(model, solver, &candidate)?;
            if trial < mse {
                params = candidate;
                mse = trial;
                *delta = -*delta * EXPAND;
                continue;
            }

            *delta *= SHRINK;
        }

        if deltas.iter().all(|d| d.abs() <= opts.step_tolerance) {
            break;
        }
    }

    Ok(FitResult { params, mse })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ObservedData, Y0};
    use crate::models::Law;
    use crate::solve::integrate_at;
    use rand::prelude::*;
    use rand::rngs::StdRng;
    use rand_distr::Normal;

    fn params(entries: &[(&str, f64)]) -> ParamMap {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn linear_fit_recovers_growth_rate() {
        // Data generated by y(t) = 5 + 2t; start the search from c = 1.
        let times: Vec<f64> = (0..=10).map(f64::from).collect();
        let values: Vec<f64> = times.iter().map(|t| 5.0 + 2.0 * t).collect();
        let data = ObservedData::new(times, values);
        let eval = CurveEvaluator::new(&data);

        let initial = params(&[("c", 1.0), (Y0, 5.0)]);
        let result = fit_model(
            &eval,
            ModelKind::Linear,
            SolverKind::RungeKutta,
            &initial,
            &FitOptions::default(),
        )
        .unwrap();

        assert!((result.params["c"] - 2.0).abs() < 1e-2);
        assert!(result.mse < 1e-4);
        // Caller's map is untouched.
        assert_eq!(initial["c"], 1.0);
    }

    #[test]
    fn flat_objective_leaves_parameters_unchanged() {
        // All observations sit at t = 0, where only y0 matters; the MSE is
        // identical for every c, and equal error is not an improvement.
        let data = ObservedData::new(vec![0.0, 0.0, 0.0], vec![4.0, 4.0, 4.0]);
        let eval = CurveEvaluator::new(&data);

        let initial = params(&[("c", 3.0), (Y0, 4.0)]);
        let result = fit_model(
            &eval,
            ModelKind::Linear,
            SolverKind::Euler,
            &initial,
            &FitOptions::default(),
        )
        .unwrap();

        assert_eq!(result.params["c"], 3.0);
        assert_eq!(result.params[Y0], 4.0);
        assert_eq!(result.mse, 0.0);
    }

    #[test]
    fn zero_tries_returns_initial_state() {
        let data = ObservedData::new(vec![1.0, 2.0], vec![3.0, 5.0]);
        let eval = CurveEvaluator::new(&data);

        let initial = params(&[("c", 1.0), (Y0, 1.0)]);
        let opts = FitOptions {
            max_tries: 0,
            ..FitOptions::default()
        };
        let result = fit_model(&eval, ModelKind::Linear, SolverKind::Euler, &initial, &opts).unwrap();
        assert_eq!(result.params, initial);
        assert_eq!(
            result.mse,
            eval.mse(ModelKind::Linear, SolverKind::Euler, &initial).unwrap()
        );
    }

    #[test]
    fn missing_parameter_propagates() {
        let data = ObservedData::new(vec![1.0], vec![2.0]);
        let eval = CurveEvaluator::new(&data);

        let initial = params(&[("c", 1.0), (Y0, 1.0)]);
        let err = fit_model(
            &eval,
            ModelKind::Logistic,
            SolverKind::Euler,
            &initial,
            &FitOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::MissingParameter {
                model: ModelKind::Logistic,
                name: "ymax",
            }
        );
    }

    #[test]
    fn noisy_logistic_fit_improves_on_initial_guess() {
        // Seeded noise keeps this deterministic.
        let mut rng = StdRng::seed_from_u64(7);
        let noise = Normal::new(0.0, 0.2).unwrap();

        let truth = params(&[("c", 0.9), ("ymax", 30.0), (Y0, 1.0)]);
        let law = Law::bind(ModelKind::Logistic, &truth).unwrap();
        let times: Vec<f64> = (0..=12).map(f64::from).collect();
        let clean = integrate_at(&law, SolverKind::RungeKutta, 1.0, &times);
        let values: Vec<f64> = clean
            .values
            .iter()
            .map(|y| y + noise.sample(&mut rng))
            .collect();
        let data = ObservedData::new(times, values);
        let eval = CurveEvaluator::new(&data);

        let initial = params(&[("c", 1.0), ("ymax", 20.0), (Y0, 1.0)]);
        let start_mse = eval
            .mse(ModelKind::Logistic, SolverKind::RungeKutta, &initial)
            .unwrap();
        let result = fit_model(
            &eval,
            ModelKind::Logistic,
            SolverKind::RungeKutta,
            &initial,
            &FitOptions::default(),
        )
        .unwrap();

        assert!(result.mse < start_mse);
        assert!(result.mse < 1.0, "fit stalled at mse={}", result.mse);
    }
}
