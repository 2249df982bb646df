/// A scalar function of one variable.
///
/// Closures of the form `Fn(f64) -> f64` implement this trait automatically.
pub trait Scalar1D {
    /// Evaluates the function at `x`.
    ///
    /// A NaN return marks `x` as outside the usable domain; solvers step
    /// around it where they can.
    fn value(&self, x: f64) -> f64;
}

/// A scalar function of one variable that also reports its derivative.
///
/// Closures of the form `Fn(f64) -> (f64, f64)` implement this trait
/// automatically, returning `(value, derivative)`.
pub trait Scalar1DWithGradient {
    /// Evaluates the function and its derivative at the same `x`.
    fn value_and_derivative(&self, x: f64) -> (f64, f64);
}

/// A scalar function of a vector variable.
///
/// Closures of the form `Fn(&V) -> f64` implement this trait automatically.
pub trait ScalarND<V> {
    /// Evaluates the function at `x`.
    fn value(&self, x: &V) -> f64;
}

/// A scalar function of a vector variable that also reports its gradient.
///
/// The returned gradient must have the same dimension as `x`.
/// Closures of the form `Fn(&V) -> (f64, V)` implement this trait automatically.
pub trait ScalarNDWithGradient<V> {
    /// Evaluates the function and its gradient at the same `x`.
    fn value_and_gradient(&self, x: &V) -> (f64, V);
}

impl<F> Scalar1D for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

impl<F> Scalar1DWithGradient for F
where
    F: Fn(f64) -> (f64, f64),
{
    fn value_and_derivative(&self, x: f64) -> (f64, f64) {
        self(x)
    }
}

impl<V, F> ScalarND<V> for F
where
    F: Fn(&V) -> f64,
{
    fn value(&self, x: &V) -> f64 {
        self(x)
    }
}

impl<V, F> ScalarNDWithGradient<V> for F
where
    F: Fn(&V) -> (f64, V),
{
    fn value_and_gradient(&self, x: &V) -> (f64, V) {
        self(x)
    }
}
