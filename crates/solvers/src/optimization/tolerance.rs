/// The smallest useful relative tolerance in `f64` arithmetic: `sqrt(f64::EPSILON)`.
///
/// Near a minimum the objective is flat to second order, so locating the
/// abscissa more finely than this changes the value by less than one ulp.
pub const MIN_TOLERANCE: f64 = 1.490_116_119_384_765_6e-8;

/// Checks that a relative tolerance lies strictly between zero and one.
pub(crate) fn validate(tolerance: f64) -> Result<(), &'static str> {
    if tolerance > 0.0 && tolerance < 1.0 {
        Ok(())
    } else {
        Err("tolerance must lie strictly between 0 and 1")
    }
}
