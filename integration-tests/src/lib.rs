//! Objectives shared by the end-to-end solver tests.
//!
//! These are implemented as named types rather than closures, to exercise the
//! capability traits the way a downstream crate would.

use descent_core::{Scalar1D, Scalar1DWithGradient, ScalarND, ScalarNDWithGradient};
use nalgebra::DVector;

/// The Rosenbrock banana function, minimized at `(1, 1, ..., 1)` with value 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;

impl ScalarND<DVector<f64>> for Rosenbrock {
    fn value(&self, x: &DVector<f64>) -> f64 {
        x.as_slice()
            .windows(2)
            .map(|pair| (1.0 - pair[0]).powi(2) + 100.0 * (pair[1] - pair[0] * pair[0]).powi(2))
            .sum()
    }
}

impl ScalarNDWithGradient<DVector<f64>> for Rosenbrock {
    fn value_and_gradient(&self, x: &DVector<f64>) -> (f64, DVector<f64>) {
        let mut gradient = DVector::zeros(x.len());
        for i in 0..x.len().saturating_sub(1) {
            let (a, b) = (x[i], x[i + 1]);
            let bend = b - a * a;
            gradient[i] += -2.0 * (1.0 - a) - 400.0 * a * bend;
            gradient[i + 1] += 200.0 * bend;
        }
        (self.value(x), gradient)
    }
}

/// A positive definite quadratic with cross terms, minimized at `center`.
///
/// `f(x) = Σ (i + 1) dᵢ² + Σ dᵢ dᵢ₊₁` where `d = x - center`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoupledQuadratic {
    pub center: DVector<f64>,
}

impl CoupledQuadratic {
    #[must_use]
    pub fn new(center: &[f64]) -> Self {
        Self {
            center: DVector::from_column_slice(center),
        }
    }
}

impl ScalarND<DVector<f64>> for CoupledQuadratic {
    fn value(&self, x: &DVector<f64>) -> f64 {
        let d = x - &self.center;
        let diagonal: f64 = d
            .iter()
            .enumerate()
            .map(|(i, di)| (i + 1) as f64 * di * di)
            .sum();
        let coupling: f64 = d.as_slice().windows(2).map(|pair| pair[0] * pair[1]).sum();
        diagonal + coupling
    }
}

impl ScalarNDWithGradient<DVector<f64>> for CoupledQuadratic {
    fn value_and_gradient(&self, x: &DVector<f64>) -> (f64, DVector<f64>) {
        let d = x - &self.center;
        let n = d.len();
        let gradient = DVector::from_fn(n, |i, _| {
            let below = if i > 0 { d[i - 1] } else { 0.0 };
            let above = if i + 1 < n { d[i + 1] } else { 0.0 };
            2.0 * (i + 1) as f64 * d[i] + below + above
        });
        (self.value(x), gradient)
    }
}

/// A damped cosine well, `1 - cos(x - shift) + (x - shift)² / 10`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosineWell {
    pub shift: f64,
}

impl Scalar1D for CosineWell {
    fn value(&self, x: f64) -> f64 {
        let d = x - self.shift;
        1.0 - d.cos() + 0.1 * d * d
    }
}

impl Scalar1DWithGradient for CosineWell {
    fn value_and_derivative(&self, x: f64) -> (f64, f64) {
        let d = x - self.shift;
        (self.value(x), d.sin() + 0.2 * d)
    }
}
