use thiserror::Error;

use crate::VectorSpace;

/// A scalar abscissa together with the objective value observed there.
///
/// Implemented by [`Point`] and [`GradientPoint`] so bracketing and
/// refinement can be written once for both.
pub trait Sample: Copy {
    /// The abscissa.
    fn x(&self) -> f64;

    /// The objective value at the abscissa.
    fn value(&self) -> f64;
}

/// A point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The objective value at x.
    pub value: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, value: f64) -> Self {
        Self { x, value }
    }
}

impl Sample for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn value(&self) -> f64 {
        self.value
    }
}

/// A point with its evaluated objective value and derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPoint {
    /// The x value.
    pub x: f64,

    /// The objective value at x.
    pub value: f64,

    /// The derivative of the objective at x.
    pub derivative: f64,
}

impl GradientPoint {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, value: f64, derivative: f64) -> Self {
        Self {
            x,
            value,
            derivative,
        }
    }
}

impl Sample for GradientPoint {
    fn x(&self) -> f64 {
        self.x
    }

    fn value(&self) -> f64 {
        self.value
    }
}

impl From<GradientPoint> for Point {
    fn from(point: GradientPoint) -> Self {
        Self::new(point.x, point.value)
    }
}

/// Errors that can occur when constructing a [`VectorPoint`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PointError {
    #[error("gradient has dimension {gradient} but the point has dimension {point}")]
    DimensionMismatch { point: usize, gradient: usize },
}

/// A vector-valued point with its objective value and gradient.
///
/// The gradient always has the same dimension as the point.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPoint<V> {
    x: V,
    value: f64,
    gradient: V,
}

impl<V: VectorSpace> VectorPoint<V> {
    /// Creates a new point after checking the gradient's dimension.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::DimensionMismatch`] if `gradient` and `x` differ
    /// in dimension.
    pub fn new(x: V, value: f64, gradient: V) -> Result<Self, PointError> {
        if x.dimension() != gradient.dimension() {
            return Err(PointError::DimensionMismatch {
                point: x.dimension(),
                gradient: gradient.dimension(),
            });
        }

        Ok(Self { x, value, gradient })
    }

    /// Returns the position.
    #[must_use]
    pub fn x(&self) -> &V {
        &self.x
    }

    /// Returns the objective value at the position.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the gradient at the position.
    #[must_use]
    pub fn gradient(&self) -> &V {
        &self.gradient
    }

    /// Consumes the point, returning `(x, value, gradient)`.
    #[must_use]
    pub fn into_parts(self) -> (V, f64, V) {
        (self.x, self.value, self.gradient)
    }
}
