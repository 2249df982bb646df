use descent_core::{Scalar1D, Scalar1DWithGradient, ScalarND, ScalarNDWithGradient, VectorSpace};

/// An N-dimensional objective restricted to the line `origin + w * direction`.
pub(super) struct Projection<'a, F, V> {
    f: &'a F,
    origin: &'a V,
    direction: &'a V,
}

impl<'a, F, V> Projection<'a, F, V> {
    pub(super) fn new(f: &'a F, origin: &'a V, direction: &'a V) -> Self {
        Self {
            f,
            origin,
            direction,
        }
    }
}

impl<F: ScalarND<V>, V: VectorSpace> Scalar1D for Projection<'_, F, V> {
    fn value(&self, w: f64) -> f64 {
        self.f.value(&V::point_on_line(self.origin, self.direction, w))
    }
}

impl<F: ScalarNDWithGradient<V>, V: VectorSpace> Scalar1DWithGradient for Projection<'_, F, V> {
    fn value_and_derivative(&self, w: f64) -> (f64, f64) {
        let (value, gradient) = self
            .f
            .value_and_gradient(&V::point_on_line(self.origin, self.direction, w));
        (value, gradient.dot(self.direction))
    }
}
