use descent_core::Sample;
use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// The abscissas are not strictly increasing (or one is NaN).
    #[error("bracket abscissas out of order: {left}, {inner}, {right}")]
    Unordered { left: f64, inner: f64, right: f64 },

    /// The inner value does not lie strictly below both outer values.
    #[error("inner value {inner} is not below both outer values ({left}, {right})")]
    NotDominated { left: f64, inner: f64, right: f64 },
}

/// Three points certifying that a local minimum lies in `(left.x, right.x)`.
///
/// A bracket always satisfies `left.x < inner.x < right.x` and has its inner
/// value strictly below both outer values. These invariants are checked at
/// construction and cannot be broken afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<P> {
    left: P,
    inner: P,
    right: P,
}

impl<P: Sample> Bracket<P> {
    /// Creates a bracket from points in increasing order of `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are out of order or the inner value is
    /// not strictly below both outer values.
    pub fn new(left: P, inner: P, right: P) -> Result<Self, BracketError> {
        let ordered = left.x() < inner.x() && inner.x() < right.x();
        if !ordered {
            return Err(BracketError::Unordered {
                left: left.x(),
                inner: inner.x(),
                right: right.x(),
            });
        }

        let dominated = inner.value() < left.value() && inner.value() < right.value();
        if !dominated {
            return Err(BracketError::NotDominated {
                left: left.value(),
                inner: inner.value(),
                right: right.value(),
            });
        }

        Ok(Self { left, inner, right })
    }

    /// Creates a bracket whose outer points may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns an error if `inner` does not lie strictly between the outer
    /// points or its value is not strictly below both of theirs.
    pub fn from_unordered(a: P, inner: P, b: P) -> Result<Self, BracketError> {
        if a.x() <= b.x() {
            Self::new(a, inner, b)
        } else {
            Self::new(b, inner, a)
        }
    }

    /// Returns the outer point with the smaller abscissa.
    #[must_use]
    pub fn left(&self) -> P {
        self.left
    }

    /// Returns the point with the lowest value.
    #[must_use]
    pub fn inner(&self) -> P {
        self.inner
    }

    /// Returns the outer point with the larger abscissa.
    #[must_use]
    pub fn right(&self) -> P {
        self.right
    }

    /// Returns the bracket width, which is always positive.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right.x() - self.left.x()
    }

    /// Returns true if `x` lies strictly inside the bracket.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.left.x() < x && x < self.right.x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::{GradientPoint, Point};

    #[test]
    fn accepts_valid_triples() {
        let bracket = Bracket::new(
            Point::new(-1.0, 1.0),
            Point::new(0.5, 0.25),
            Point::new(2.0, 4.0),
        )
        .expect("valid bracket");

        assert_relative_eq!(bracket.width(), 3.0);
        assert!(bracket.contains(0.0));
        assert!(!bracket.contains(2.0));
        assert_eq!(bracket.inner(), Point::new(0.5, 0.25));
    }

    #[test]
    fn rejects_out_of_order_points() {
        let result = Bracket::new(
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 4.0),
        );

        assert!(matches!(result, Err(BracketError::Unordered { .. })));
    }

    #[test]
    fn rejects_coincident_points() {
        let result = Bracket::new(
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 4.0),
        );

        assert!(matches!(result, Err(BracketError::Unordered { .. })));
    }

    #[test]
    fn rejects_inner_not_lowest() {
        let tie = Bracket::new(
            Point::new(-1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 2.0),
        );
        assert!(matches!(tie, Err(BracketError::NotDominated { .. })));

        let nan = Bracket::new(
            Point::new(-1.0, 1.0),
            Point::new(0.0, f64::NAN),
            Point::new(1.0, 2.0),
        );
        assert!(matches!(nan, Err(BracketError::NotDominated { .. })));
    }

    #[test]
    fn from_unordered_sorts_outer_points() {
        let bracket = Bracket::from_unordered(
            GradientPoint::new(3.0, 9.0, 6.0),
            GradientPoint::new(1.0, 1.0, 2.0),
            GradientPoint::new(-0.5, 0.25, -1.0),
        );

        assert!(matches!(bracket, Err(BracketError::NotDominated { .. })));

        let bracket = Bracket::from_unordered(
            GradientPoint::new(3.0, 9.0, 6.0),
            GradientPoint::new(0.5, 0.25, 1.0),
            GradientPoint::new(-1.0, 1.0, -2.0),
        )
        .expect("valid once sorted");

        assert_relative_eq!(bracket.left().x, -1.0);
        assert_relative_eq!(bracket.right().x, 3.0);
    }
}
