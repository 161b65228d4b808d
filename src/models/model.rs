//! Growth-law slope evaluation.
//!
//! Each law is an ODE right-hand side `dy/dt = f(t, y, …)` over tumor volume
//! `y`. The solvers rely on two primitive operations:
//!
//! - bind a law kind to validated parameter values (once per run)
//! - evaluate the slope at `(t, y)` (once per solver stage)
//!
//! Domain safety is a contract of this module, not of individual laws:
//! every numeric input (`y` and every declared parameter) is clamped to a
//! strictly-positive floor before use, so divisions, fractional powers, and
//! `ln` stay finite for any state the solvers can reach.

use crate::domain::{ModelKind, ParamMap};
use crate::error::ModelError;

/// Strictly-positive floor applied to every slope input.
pub const POSITIVE_FLOOR: f64 = 1e-10;

/// Clamp a slope input into the strictly-positive domain.
#[inline]
pub fn clamp_positive(v: f64) -> f64 {
    v.max(POSITIVE_FLOOR)
}

/// A growth law bound to validated parameter values.
///
/// Each variant carries exactly the parameters its formula needs, so an
/// unbound or misnamed parameter cannot reach a slope evaluation. Built via
/// [`Law::bind`]; parameters are clamped once there, `y` on every
/// [`Law::slope`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Law {
    Linear { c: f64 },
    ExponentialIncr { c: f64 },
    Mendelsohn { c: f64, a: f64 },
    ExponentialFlat { c: f64, ymax: f64 },
    Logistic { c: f64, ymax: f64 },
    Montroll { c: f64, ymax: f64, a: f64 },
    Allee { c: f64, ymin: f64, ymax: f64 },
    LinearLimited { c: f64, a: f64 },
    SurfaceLimited { c: f64, a: f64 },
    Bertalanffy { c: f64, a: f64 },
    Gompertz { c: f64, ymax: f64 },
}

impl Law {
    /// Bind `kind` to the values in `params`.
    ///
    /// Extra keys (e.g. `y0`) are ignored; a missing required key is a
    /// [`ModelError::MissingParameter`].
    pub fn bind(kind: ModelKind, params: &ParamMap) -> Result<Law, ModelError> {
        let get = |name: &'static str| -> Result<f64, ModelError> {
            params
                .get(name)
                .copied()
                .map(clamp_positive)
                .ok_or(ModelError::MissingParameter { model: kind, name })
        };

        Ok(match kind {
            ModelKind::Linear => Law::Linear { c: get("c")? },
            ModelKind::ExponentialIncr => Law::ExponentialIncr { c: get("c")? },
            ModelKind::Mendelsohn => Law::Mendelsohn {
                c: get("c")?,
                a: get("a")?,
            },
            ModelKind::ExponentialFlat => Law::ExponentialFlat {
                c: get("c")?,
                ymax: get("ymax")?,
            },
            ModelKind::Logistic => Law::Logistic {
                c: get("c")?,
                ymax: get("ymax")?,
            },
            ModelKind::Montroll => Law::Montroll {
                c: get("c")?,
                ymax: get("ymax")?,
                a: get("a")?,
            },
            ModelKind::Allee => Law::Allee {
                c: get("c")?,
                ymin: get("ymin")?,
                ymax: get("ymax")?,
            },
            ModelKind::LinearLimited => Law::LinearLimited {
                c: get("c")?,
                a: get("a")?,
            },
            ModelKind::SurfaceLimited => Law::SurfaceLimited {
                c: get("c")?,
                a: get("a")?,
            },
            ModelKind::Bertalanffy => Law::Bertalanffy {
                c: get("c")?,
                a: get("a")?,
            },
            ModelKind::Gompertz => Law::Gompertz {
                c: get("c")?,
                ymax: get("ymax")?,
            },
        })
    }

    /// Evaluate `dy/dt` at `(t, y)`.
    ///
    /// All the laws here are autonomous; `t` is accepted for the solver
    /// call signature and unused.
    pub fn slope(&self, _t: f64, y: f64) -> f64 {
        let y = clamp_positive(y);
        match *self {
            Law::Linear { c } => c,
            Law::ExponentialIncr { c } => c * y,
            Law::Mendelsohn { c, a } => c * y.powf(a),
            Law::ExponentialFlat { c, ymax } => c * (ymax - y),
            Law::Logistic { c, ymax } => c * y * (1.0 - y / ymax),
            Law::Montroll { c, ymax, a } => c * y * (1.0 - y.powf(a) / ymax.powf(a)),
            Law::Allee { c, ymin, ymax } => c * (1.0 - ymin / y) * (1.0 - y / ymax),
            Law::LinearLimited { c, a } => c * y / (y + a),
            Law::SurfaceLimited { c, a } => c * y / (y + a).powf(1.0 / 3.0),
            Law::Bertalanffy { c, a } => c * y.powf(2.0 / 3.0) - a * y,
            Law::Gompertz { c, ymax } => c * y * (ymax / y).ln(),
        }
    }
}
