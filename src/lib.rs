//! `growth-curves` library crate.
//!
//! Tumor-volume growth modeling: a fixed family of named ODE growth laws,
//! three fixed-step solvers, and a derivative-free fitter that calibrates
//! law parameters against observed (time, volume) data. Fitted models are
//! compared with information criteria (BIC / AIC / AICc).
//!
//! The crate returns data only (trajectories, fit results, scores) so that:
//!
//! - core logic is testable without any presentation layer
//! - plotting, reporting, and notebook glue stay external consumers

pub mod domain;
pub mod error;
pub mod fit;
pub mod models;
pub mod solve;
