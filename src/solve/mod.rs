//! Fixed-step ODE integration.
//!
//! Responsibilities:
//!
//! - one step of each scheme (Euler, Heun, classic RK4)
//! - fixed-horizon runs that record every step
//! - target-sampling runs that record the state at requested times

pub mod integrator;

pub use integrator::*;
