//! Numerical minimizers for the Descent engine.
//!
//! See [`optimization`] for the available solvers.

pub mod optimization;
