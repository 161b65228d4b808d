//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed model/solver name sets (`ModelKind`, `SolverKind`)
//! - sampled curves and observations (`Trajectory`, `ObservedData`)
//! - fit outputs (`FitResult`, `Scores`, `ScoredFit`)

pub mod types;

pub use types::*;
