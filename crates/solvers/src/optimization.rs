//! Solvers for minimization problems.
//!
//! One-dimensional problems are handled in two stages: [`bracket`] locates
//! three points that certify a local minimum, then [`brent`] narrows that
//! bracket to a tolerance. Multi-dimensional problems reduce to repeated
//! one-dimensional searches along lines through the current point
//! ([`line_search`]).
//!
//! # Solvers
//!
//! - [`bracket`]: golden-ratio and parabolic extrapolation to a bracket
//! - [`brent`]: Brent's method, with or without derivative information
//! - [`line_search`]: minimization along a single direction in N dimensions
//! - [`powell`]: Powell's direction-set method, derivative-free
//! - [`conjugate_gradient`]: Polak-Ribière conjugate gradient, using the gradient
//!
//! Every solver minimizes. Wrap an objective in [`Negate`] to maximize it.

mod negate;
mod probe;
mod tolerance;

pub use negate::Negate;
pub use tolerance::MIN_TOLERANCE;

pub mod bracket;
pub mod brent;
pub mod conjugate_gradient;
pub mod line_search;
pub mod powell;
