use super::{Point3, Vector3};

/// Returns the unclamped projection parameter of `p` onto the line through
/// `a` and `b`, measured so that `a` maps to 0 and `b` maps to 1.
///
/// The squared chord length is clamped to at least `epsilon`, so coincident
/// `a` and `b` yield a finite value (zero when `p` is finite) instead of NaN.
#[must_use]
pub fn chord_projection(a: &Point3, b: &Point3, p: &Point3, epsilon: f64) -> f64 {
    let chord = b - a;
    let len_sq = chord.norm_squared();
    if len_sq < epsilon {
        tracing::trace!(len_sq, "degenerate chord, clamping projection denominator");
    }
    (p - a).dot(&chord) / len_sq.max(epsilon)
}

/// In-plane cross product `v.x * tangent.y - v.y * tangent.x`.
///
/// Only the x/y components take part: the curve is assumed to lie in a
/// locally planar frame.
#[must_use]
pub fn cross_z(v: &Vector3, tangent: &Vector3) -> f64 {
    v.x * tangent.y - v.y * tangent.x
}

/// Sign function returning `0.0` for zero, unlike [`f64::signum`].
#[must_use]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
