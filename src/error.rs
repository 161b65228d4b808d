use crate::domain::ModelKind;

/// Errors raised by the registry, solvers, evaluator, and scorer.
///
/// All of these are fatal to the operation that raised them; there are no
/// transient failure modes to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Model name is not one of the known growth laws.
    UnknownModel(String),
    /// Solver name is not one of the known schemes.
    UnknownSolver(String),
    /// A required parameter is absent from the parameter map.
    MissingParameter { model: ModelKind, name: &'static str },
    /// No observations to evaluate against.
    EmptyData,
    /// AICc denominator `n - k - 1` is zero.
    DegenerateScore { n_samples: usize, n_params: usize },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::UnknownModel(name) => write!(f, "Unknown growth model '{name}'."),
            ModelError::UnknownSolver(name) => write!(f, "Unknown solver '{name}'."),
            ModelError::MissingParameter { model, name } => {
                write!(f, "Model '{}' requires parameter '{}'.", model.name(), name)
            }
            ModelError::EmptyData => write!(f, "No data points to fit."),
            ModelError::DegenerateScore { n_samples, n_params } => {
                write!(f, "AICc is undefined for n={n_samples}, k={n_params}.")
            }
        }
    }
}

impl std::error::Error for ModelError {}
