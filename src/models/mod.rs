//! Growth-law implementations.
//!
//! Laws are implemented as small, pure slope functions behind a validated
//! parameter record so that solver and fitting code can stay generic.

pub mod model;

pub use model::*;
