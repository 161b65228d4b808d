//! Model-curve evaluation against observed data.

use crate::domain::{ModelKind, ObservedData, ParamMap, SolverKind, Trajectory, Y0};
use crate::error::ModelError;
use crate::models::Law;
use crate::solve::integrate_at;

/// Evaluates model curves at the observation times and scores them.
///
/// Borrows the observations for the lifetime of a fit; every call allocates
/// a fresh trajectory and leaves the observations untouched.
#[derive(Debug, Clone, Copy)]
pub struct CurveEvaluator<'a> {
    data: &'a ObservedData,
}

impl<'a> CurveEvaluator<'a> {
    pub fn new(data: &'a ObservedData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &ObservedData {
        self.data
    }

    /// Integrate the model at the observation times.
    ///
    /// Binds the law from `params` (extra keys ignored; missing required
    /// keys, `y0` included, are fatal) and samples the solution at each
    /// observed time.
    pub fn curve(
        &self,
        model: ModelKind,
        solver: SolverKind,
        params: &ParamMap,
    ) -> Result<Trajectory, ModelError> {
        let law = Law::bind(model, params)?;
        let y0 = params
            .get(Y0)
            .copied()
            .ok_or(ModelError::MissingParameter { model, name: Y0 })?;
        Ok(integrate_at(&law, solver, y0, &self.data.times))
    }

    /// Mean squared error of the model curve against the observations.
    pub fn mse(
        &self,
        model: ModelKind,
        solver: SolverKind,
        params: &ParamMap,
    ) -> Result<f64, ModelError> {
        if self.data.is_empty() {
            return Err(ModelError::EmptyData);
        }
        let curve = self.curve(model, solver, params)?;
        let sum_squared: f64 = self
            .data
            .values
            .iter()
            .zip(curve.values.iter())
            .map(|(y_obs, y_model)| {
                let error = y_obs - y_model;
                error * error
            })
            .sum();
        Ok(sum_squared / curve.len() as f64)
    }
}
