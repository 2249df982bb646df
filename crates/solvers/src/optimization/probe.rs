use std::fmt::Debug;

use descent_core::{GradientPoint, Point, Sample, Scalar1D, Scalar1DWithGradient};

/// Samples a one-dimensional objective at a trial abscissa.
///
/// Bracketing and Brent refinement are generic over this trait. The point
/// type it yields decides whether derivative information is available.
pub(crate) trait Probe {
    type Point: Sample + Debug;

    fn probe(&self, x: f64) -> Self::Point;
}

/// Probes value-only objectives.
pub(crate) struct Values<'a, F>(pub(crate) &'a F);

impl<F: Scalar1D> Probe for Values<'_, F> {
    type Point = Point;

    fn probe(&self, x: f64) -> Point {
        Point::new(x, self.0.value(x))
    }
}

/// Probes objectives that also report their derivative.
pub(crate) struct Derivatives<'a, F>(pub(crate) &'a F);

impl<F: Scalar1DWithGradient> Probe for Derivatives<'_, F> {
    type Point = GradientPoint;

    fn probe(&self, x: f64) -> GradientPoint {
        let (value, derivative) = self.0.value_and_derivative(x);
        GradientPoint::new(x, value, derivative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn value_probe_records_abscissa_and_value() {
        let f = |x: f64| x * x - 1.0;

        let point = Values(&f).probe(3.0);

        assert_eq!(point, Point::new(3.0, 8.0));
    }

    #[test]
    fn derivative_probe_records_slope() {
        let f = |x: f64| (x * x, 2.0 * x);

        let point = Derivatives(&f).probe(-1.5);

        assert_relative_eq!(point.x, -1.5);
        assert_relative_eq!(point.value, 2.25);
        assert_relative_eq!(point.derivative, -3.0);
    }
}
