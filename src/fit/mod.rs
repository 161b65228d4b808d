//! Curve fitting orchestration.
//!
//! Responsibilities:
//!
//! - evaluate model curves at observation times and score their MSE
//! - calibrate law parameters by coordinate pattern search
//! - compare fitted models with information criteria and select one

pub mod evaluator;
pub mod fitter;
pub mod selection;

pub use evaluator::*;
pub use fitter::*;
pub use selection::*;
