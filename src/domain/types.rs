//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during integration and fitting
//! - exported to JSON for plotting or comparisons elsewhere

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Named parameter values for one model run.
///
/// Keys are a subset of a growth law's required parameter names plus the
/// initial-value key [`Y0`]. A `BTreeMap` keeps key order deterministic,
/// which the fitter's coordinate sweep relies on.
pub type ParamMap = BTreeMap<String, f64>;

/// Key under which the initial volume is stored in a [`ParamMap`].
pub const Y0: &str = "y0";

/// Concrete growth-law kind.
///
/// The set is closed: every law the crate supports is a variant here, and
/// the string keys used for lookup and serialization are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Linear,
    ExponentialIncr,
    Mendelsohn,
    ExponentialFlat,
    Logistic,
    Montroll,
    Allee,
    LinearLimited,
    SurfaceLimited,
    Bertalanffy,
    Gompertz,
}

impl ModelKind {
    /// Every supported law, in registry order.
    pub const ALL: [ModelKind; 11] = [
        ModelKind::Linear,
        ModelKind::ExponentialIncr,
        ModelKind::Mendelsohn,
        ModelKind::ExponentialFlat,
        ModelKind::Logistic,
        ModelKind::Montroll,
        ModelKind::Allee,
        ModelKind::LinearLimited,
        ModelKind::SurfaceLimited,
        ModelKind::Bertalanffy,
        ModelKind::Gompertz,
    ];

    /// Resolve a registry key to a law kind.
    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        match name {
            "linear" => Ok(ModelKind::Linear),
            "exponential_incr" => Ok(ModelKind::ExponentialIncr),
            "mendelsohn" => Ok(ModelKind::Mendelsohn),
            "exponential_flat" => Ok(ModelKind::ExponentialFlat),
            "logistic" => Ok(ModelKind::Logistic),
            "montroll" => Ok(ModelKind::Montroll),
            "allee" => Ok(ModelKind::Allee),
            "linear_limited" => Ok(ModelKind::LinearLimited),
            "surface_limited" => Ok(ModelKind::SurfaceLimited),
            "bertalanffy" => Ok(ModelKind::Bertalanffy),
            "gompertz" => Ok(ModelKind::Gompertz),
            other => Err(ModelError::UnknownModel(other.to_string())),
        }
    }

    /// Registry key for this law.
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::ExponentialIncr => "exponential_incr",
            ModelKind::Mendelsohn => "mendelsohn",
            ModelKind::ExponentialFlat => "exponential_flat",
            ModelKind::Logistic => "logistic",
            ModelKind::Montroll => "montroll",
            ModelKind::Allee => "allee",
            ModelKind::LinearLimited => "linear_limited",
            ModelKind::SurfaceLimited => "surface_limited",
            ModelKind::Bertalanffy => "bertalanffy",
            ModelKind::Gompertz => "gompertz",
        }
    }

    /// Ordered required parameter names for this law.
    ///
    /// Fixed data, not derived at runtime; `y0` is not listed because every
    /// run needs it regardless of the law.
    pub fn required_params(self) -> &'static [&'static str] {
        match self {
            ModelKind::Linear | ModelKind::ExponentialIncr => &["c"],
            ModelKind::Mendelsohn
            | ModelKind::LinearLimited
            | ModelKind::SurfaceLimited
            | ModelKind::Bertalanffy => &["c", "a"],
            ModelKind::ExponentialFlat | ModelKind::Logistic | ModelKind::Gompertz => {
                &["c", "ymax"]
            }
            ModelKind::Montroll => &["c", "ymax", "a"],
            ModelKind::Allee => &["c", "ymin", "ymax"],
        }
    }

    /// Number of law parameters (excluding `y0`).
    pub fn param_count(self) -> usize {
        self.required_params().len()
    }
}

/// Fixed-step integration scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolverKind {
    #[serde(rename = "euler")]
    Euler,
    #[serde(rename = "heun")]
    Heun,
    #[serde(rename = "runge-kutta")]
    RungeKutta,
}

impl SolverKind {
    /// Every supported scheme.
    pub const ALL: [SolverKind; 3] = [SolverKind::Euler, SolverKind::Heun, SolverKind::RungeKutta];

    /// Resolve a solver key to a scheme.
    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        match name {
            "euler" => Ok(SolverKind::Euler),
            "heun" => Ok(SolverKind::Heun),
            "runge-kutta" => Ok(SolverKind::RungeKutta),
            other => Err(ModelError::UnknownSolver(other.to_string())),
        }
    }

    /// Solver key for this scheme.
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Euler => "euler",
            SolverKind::Heun => "heun",
            SolverKind::RungeKutta => "runge-kutta",
        }
    }
}

/// A sampled solution curve.
///
/// `times` and `values` are aligned and equally long; `times` is
/// non-decreasing. Each integration call allocates a fresh trajectory owned
/// by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl Trajectory {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            times: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, t: f64, y: f64) {
        self.times.push(t);
        self.values.push(y);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Observed (time, volume) pairs the fitter calibrates against.
///
/// Owned by the caller; the evaluator borrows it for the lifetime of a fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedData {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl ObservedData {
    /// # Panics
    /// Panics if `times` and `values` have different lengths.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Self {
        assert_eq!(times.len(), values.len(), "times/values must be aligned");
        Self { times, values }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Best parameters found for one model, with the error they achieved.
///
/// Immutable once returned by the fitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub params: ParamMap,
    pub mse: f64,
}

/// Information-criterion scores for one fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub bic: f64,
    pub aic: f64,
    pub aicc: f64,
}

/// Fit output for a single model, scored for comparison across models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFit {
    pub model: ModelKind,
    pub solver: SolverKind,
    pub fit: FitResult,
    pub scores: Scores,
    /// Number of observations scored against.
    pub n_obs: usize,
}

impl ScoredFit {
    /// Number of free parameters of the fit (the keys the search varied).
    pub fn n_params(&self) -> usize {
        self.fit.params.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_names_round_trip() {
        for kind in ModelKind::ALL {
            assert_eq!(ModelKind::from_name(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn solver_names_round_trip() {
        for solver in SolverKind::ALL {
            assert_eq!(SolverKind::from_name(solver.name()).unwrap(), solver);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = ModelKind::from_name("verhulst").unwrap_err();
        assert_eq!(err, ModelError::UnknownModel("verhulst".to_string()));

        let err = SolverKind::from_name("rk45").unwrap_err();
        assert_eq!(err, ModelError::UnknownSolver("rk45".to_string()));
    }

    #[test]
    fn required_params_match_registry_table() {
        assert_eq!(ModelKind::Linear.required_params(), ["c"]);
        assert_eq!(ModelKind::Mendelsohn.required_params(), ["c", "a"]);
        assert_eq!(ModelKind::Montroll.required_params(), ["c", "ymax", "a"]);
        assert_eq!(ModelKind::Allee.required_params(), ["c", "ymin", "ymax"]);
        assert_eq!(ModelKind::Gompertz.required_params(), ["c", "ymax"]);
        assert_eq!(ModelKind::Allee.param_count(), 3);
    }

    #[test]
    fn trajectory_push_keeps_alignment() {
        let mut tr = Trajectory::with_capacity(2);
        tr.push(0.0, 1.0);
        tr.push(1.0, 2.5);
        assert_eq!(tr.len(), 2);
        assert_eq!(tr.times, [0.0, 1.0]);
        assert_eq!(tr.values, [1.0, 2.5]);
    }
}
