use descent_core::Sample;

/// Default ratio by which successive magnified steps grow.
pub(super) const GOLDEN_RATIO: f64 = 1.618_034;

/// Guards the parabola denominator against division by zero.
const TINY: f64 = 1e-20;

/// Returns the abscissa of the vertex of the parabola through three points.
///
/// Collinear points produce a huge but finite jump in the downhill direction,
/// which the caller clamps.
pub(super) fn parabolic_vertex<P: Sample>(a: &P, b: &P, c: &P) -> f64 {
    let r = (b.x() - a.x()) * (b.value() - c.value());
    let q = (b.x() - c.x()) * (b.value() - a.value());
    let denom = 2.0 * (q - r).abs().max(TINY).copysign(q - r);
    b.x() - ((b.x() - c.x()) * q - (b.x() - a.x()) * r) / denom
}

/// Returns true if `x` lies strictly between `a` and `b`, in either order.
pub(super) fn strictly_between(x: f64, a: f64, b: f64) -> bool {
    (x - a) * (b - x) > 0.0
}
