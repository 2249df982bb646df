//! Core traits and types for the Descent minimization engine.
//!
//! This crate defines the shared abstractions that the solvers build on:
//!
//! - [`Scalar1D`], [`Scalar1DWithGradient`], [`ScalarND`],
//!   [`ScalarNDWithGradient`]: objective capabilities, with and without
//!   first-derivative information
//! - [`VectorSpace`]: the vector operations a multi-dimensional solver needs
//!   from the caller's vector type
//! - [`Point`], [`GradientPoint`], [`VectorPoint`]: immutable evaluated points
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;
mod point;
mod vector;

pub use objective::{Scalar1D, Scalar1DWithGradient, ScalarND, ScalarNDWithGradient};
pub use observer::Observer;
pub use point::{GradientPoint, Point, PointError, Sample, VectorPoint};
pub use vector::VectorSpace;
