use descent_core::{Scalar1D, Scalar1DWithGradient, ScalarND, ScalarNDWithGradient, VectorSpace};

/// Adapter that negates an objective, along with any derivative it reports.
///
/// Minimizing `Negate(f)` maximizes `f`.
pub struct Negate<F>(pub F);

impl<F: Scalar1D> Scalar1D for Negate<F> {
    fn value(&self, x: f64) -> f64 {
        -self.0.value(x)
    }
}

impl<F: Scalar1DWithGradient> Scalar1DWithGradient for Negate<F> {
    fn value_and_derivative(&self, x: f64) -> (f64, f64) {
        let (value, derivative) = self.0.value_and_derivative(x);
        (-value, -derivative)
    }
}

impl<V, F: ScalarND<V>> ScalarND<V> for Negate<F> {
    fn value(&self, x: &V) -> f64 {
        -self.0.value(x)
    }
}

impl<V: VectorSpace, F: ScalarNDWithGradient<V>> ScalarNDWithGradient<V> for Negate<F> {
    fn value_and_gradient(&self, x: &V) -> (f64, V) {
        let (value, gradient) = self.0.value_and_gradient(x);
        (-value, gradient.scale(-1.0))
    }
}
