//! Model scoring and selection.
//!
//! Information criteria trade fit quality against parameter count so that
//! laws of different complexity can be compared:
//!
//! - `BIC  = n·ln(mse) + k·ln(n)`
//! - `AIC  = n·ln(mse) + 2k`
//! - `AICc = n·ln(mse) + 2k·n/(n−k−1)`
//!
//! Selection rules:
//! 1. fit every candidate law (candidates are independent, so in parallel)
//! 2. choose the fit with minimum BIC
//! 3. if a fit with fewer parameters is within 2 BIC points of the best,
//!    prefer it

use rayon::prelude::*;

use crate::domain::{ModelKind, ObservedData, ParamMap, ScoredFit, Scores, SolverKind, Y0};
use crate::error::ModelError;
use crate::fit::evaluator::CurveEvaluator;
use crate::fit::fitter::{FitOptions, fit_model};

/// Margin within which a simpler model is preferred over the BIC winner.
const BIC_MARGIN: f64 = 2.0;

/// Compute BIC / AIC / AICc for a fitted error.
///
/// `n_params` counts the free parameters of the fit. AICc is undefined when
/// `n_samples == n_params + 1`; that case is an error rather than an
/// infinite score.
pub fn score(mse: f64, n_samples: usize, n_params: usize) -> Result<Scores, ModelError> {
    if n_samples == n_params + 1 {
        return Err(ModelError::DegenerateScore { n_samples, n_params });
    }
    let n = n_samples as f64;
    let k = n_params as f64;
    let goodness = n * mse.ln();
    Ok(Scores {
        bic: goodness + k * n.ln(),
        aic: goodness + 2.0 * k,
        aicc: goodness + 2.0 * k * n / (n - k - 1.0),
    })
}

/// Output of fitting and scoring every candidate model.
#[derive(Debug, Clone)]
pub struct Selection {
    pub best: ScoredFit,
    /// All candidates that fitted and scored, in candidate order.
    pub fits: Vec<ScoredFit>,
    /// Candidates that could not be fitted or scored, and why.
    pub skipped: Vec<(ModelKind, ModelError)>,
}

/// Starting parameters for a law: every required parameter at 1.0 and `y0`
/// at the first observed value.
pub fn initial_guess(model: ModelKind, data: &ObservedData) -> ParamMap {
    let mut params = ParamMap::new();
    for &name in model.required_params() {
        params.insert(name.to_string(), 1.0);
    }
    let y0 = data.values.first().copied().unwrap_or(1.0);
    params.insert(Y0.to_string(), y0);
    params
}

/// Fit every candidate and select the best-scoring model.
///
/// A candidate that fails to fit or score lands in `skipped` instead of
/// failing the sweep; if nothing fits, the first failure propagates.
///
/// # Panics
/// Panics if `candidates` is empty.
pub fn fit_and_select(
    data: &ObservedData,
    solver: SolverKind,
    candidates: &[(ModelKind, ParamMap)],
    opts: &FitOptions,
) -> Result<Selection, ModelError> {
    assert!(!candidates.is_empty(), "no candidate models to fit");
    if data.is_empty() {
        return Err(ModelError::EmptyData);
    }

    let eval = CurveEvaluator::new(data);
    let outcomes: Vec<(ModelKind, Result<ScoredFit, ModelError>)> = candidates
        .par_iter()
        .map(|(model, initial)| {
            let outcome = fit_model(&eval, *model, solver, initial, opts).and_then(|fit| {
                let scores = score(fit.mse, data.len(), fit.params.len())?;
                Ok(ScoredFit {
                    model: *model,
                    solver,
                    fit,
                    scores,
                    n_obs: data.len(),
                })
            });
            (*model, outcome)
        })
        .collect();

    let mut fits = Vec::new();
    let mut skipped = Vec::new();
    for (model, outcome) in outcomes {
        match outcome {
            Ok(scored) => fits.push(scored),
            Err(e) => skipped.push((model, e)),
        }
    }

    if fits.is_empty() {
        // Nothing fitted; surface the first reason.
        return Err(skipped[0].1.clone());
    }

    Ok(Selection {
        best: select_by_bic(&fits),
        fits,
        skipped,
    })
}

fn select_by_bic(fits: &[ScoredFit]) -> ScoredFit {
    let mut best = &fits[0];
    for fit in &fits[1..] {
        if fit.scores.bic < best.scores.bic {
            best = fit;
        }
    }
    let best_bic = best.scores.bic;

    // Prefer simplicity when the improvement is marginal: scan in order of
    // increasing parameter count and take the first fit within the margin.
    let mut by_complexity: Vec<&ScoredFit> = fits.iter().collect();
    by_complexity.sort_by_key(|fit| fit.n_params());
    for fit in by_complexity {
        if fit.scores.bic <= best_bic + BIC_MARGIN {
            return fit.clone();
        }
    }

    best.clone()
}
