use nalgebra::{DVector, SVector};

/// The vector operations multi-dimensional solvers need from a vector type.
///
/// Solvers treat vectors as values: every operation returns a new vector and
/// leaves its operands untouched. Implementations are provided for
/// `[f64; N]`, `Vec<f64>`, and nalgebra's `DVector<f64>` and `SVector<f64, D>`.
///
/// Operations on vectors of different dimensions are a caller error; the
/// provided implementations do not check for it.
pub trait VectorSpace: Clone {
    /// Returns the number of components.
    fn dimension(&self) -> usize;

    /// Returns `self + other`.
    #[must_use]
    fn add(&self, other: &Self) -> Self;

    /// Returns `self * factor`.
    #[must_use]
    fn scale(&self, factor: f64) -> Self;

    /// Returns the inner product of `self` and `other`.
    fn dot(&self, other: &Self) -> f64;

    /// Returns the largest absolute component, or zero for an empty vector.
    fn max_abs_component(&self) -> f64;

    /// Returns the unit vector along axis `index`, with the dimension of `self`.
    #[must_use]
    fn basis(&self, index: usize) -> Self;

    /// Returns `self - other`.
    #[must_use]
    fn sub(&self, other: &Self) -> Self {
        self.add(&other.scale(-1.0))
    }

    /// Returns the squared Euclidean norm.
    fn magnitude2(&self) -> f64 {
        self.dot(self)
    }

    /// Returns the Euclidean norm.
    fn magnitude(&self) -> f64 {
        self.magnitude2().sqrt()
    }

    /// Returns the point `origin + step * direction`.
    #[must_use]
    fn point_on_line(origin: &Self, direction: &Self, step: f64) -> Self {
        origin.add(&direction.scale(step))
    }
}

fn max_abs<'a>(components: impl Iterator<Item = &'a f64>) -> f64 {
    components.fold(0.0_f64, |max, c| max.max(c.abs()))
}

impl<const N: usize> VectorSpace for [f64; N] {
    fn dimension(&self) -> usize {
        N
    }

    fn add(&self, other: &Self) -> Self {
        std::array::from_fn(|i| self[i] + other[i])
    }

    fn scale(&self, factor: f64) -> Self {
        self.map(|c| c * factor)
    }

    fn dot(&self, other: &Self) -> f64 {
        self.iter().zip(other).map(|(a, b)| a * b).sum()
    }

    fn max_abs_component(&self) -> f64 {
        max_abs(self.iter())
    }

    fn basis(&self, index: usize) -> Self {
        std::array::from_fn(|i| if i == index { 1.0 } else { 0.0 })
    }
}

impl VectorSpace for Vec<f64> {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn add(&self, other: &Self) -> Self {
        self.iter().zip(other).map(|(a, b)| a + b).collect()
    }

    fn scale(&self, factor: f64) -> Self {
        self.iter().map(|c| c * factor).collect()
    }

    fn dot(&self, other: &Self) -> f64 {
        self.iter().zip(other).map(|(a, b)| a * b).sum()
    }

    fn max_abs_component(&self) -> f64 {
        max_abs(self.iter())
    }

    fn basis(&self, index: usize) -> Self {
        (0..self.len())
            .map(|i| if i == index { 1.0 } else { 0.0 })
            .collect()
    }
}

impl VectorSpace for DVector<f64> {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn scale(&self, factor: f64) -> Self {
        self * factor
    }

    fn dot(&self, other: &Self) -> f64 {
        nalgebra::Matrix::dot(self, other)
    }

    fn max_abs_component(&self) -> f64 {
        max_abs(self.iter())
    }

    fn basis(&self, index: usize) -> Self {
        DVector::from_fn(self.len(), |row, _| if row == index { 1.0 } else { 0.0 })
    }

    fn magnitude2(&self) -> f64 {
        self.norm_squared()
    }

    fn magnitude(&self) -> f64 {
        self.norm()
    }
}

impl<const D: usize> VectorSpace for SVector<f64, D> {
    fn dimension(&self) -> usize {
        D
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn scale(&self, factor: f64) -> Self {
        self * factor
    }

    fn dot(&self, other: &Self) -> f64 {
        nalgebra::Matrix::dot(self, other)
    }

    fn max_abs_component(&self) -> f64 {
        max_abs(self.iter())
    }

    fn basis(&self, index: usize) -> Self {
        SVector::from_fn(|row, _| if row == index { 1.0 } else { 0.0 })
    }

    fn magnitude2(&self) -> f64 {
        self.norm_squared()
    }

    fn magnitude(&self) -> f64 {
        self.norm()
    }
}
