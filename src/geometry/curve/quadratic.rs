use crate::math::{Point3, Vector3, MAX_COORDINATE, TOLERANCE};

use super::{BasisKind, BasisMatrix, Curve, CurveDomain};

/// The three control points of one quadratic segment, in local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
}

impl ControlPoints {
    /// Creates a new control point triple.
    #[must_use]
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self { p0, p1, p2 }
    }

    /// Returns whether every coordinate of every point is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.p0, self.p1, self.p2]
            .iter()
            .all(|p| p.coords.iter().all(|c| c.is_finite()))
    }

    /// Returns whether every coordinate lies within `±MAX_COORDINATE`.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        [self.p0, self.p1, self.p2]
            .iter()
            .all(|p| p.coords.amax() <= MAX_COORDINATE)
    }
}

/// A quadratic curve segment over the parameter range `[0, 1]`.
///
/// The basis is built once at construction; evaluation is then a fixed
/// handful of multiply-adds.
#[derive(Debug, Clone, Copy)]
pub struct QuadraticCurve {
    points: ControlPoints,
    kind: BasisKind,
    basis: BasisMatrix,
}

impl QuadraticCurve {
    /// Creates a quadratic Bézier segment.
    #[must_use]
    pub fn new(points: ControlPoints) -> Self {
        Self::with_basis(points, BasisKind::Bezier)
    }

    /// Creates a segment using the given characteristic matrix.
    #[must_use]
    pub fn with_basis(points: ControlPoints, kind: BasisKind) -> Self {
        Self {
            points,
            kind,
            basis: BasisMatrix::new(kind, &points),
        }
    }

    /// Returns the control points the curve was built from.
    #[must_use]
    pub fn control_points(&self) -> &ControlPoints {
        &self.points
    }

    /// Returns the basis kind.
    #[must_use]
    pub fn kind(&self) -> BasisKind {
        self.kind
    }

    /// Returns the power-basis coefficients.
    #[must_use]
    pub fn basis(&self) -> &BasisMatrix {
        &self.basis
    }

    /// Returns whether the curve collapses to a single point: both
    /// half-chords through the midpoint sample are shorter than [`TOLERANCE`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let [a, m, b] = self.samples();
        (m - a).norm() < TOLERANCE && (b - m).norm() < TOLERANCE
    }

    /// Samples the curve at `t = 0`, `0.5` and `1`.
    #[must_use]
    pub fn samples(&self) -> [Point3; 3] {
        [
            self.basis.evaluate(0.0),
            self.basis.evaluate(0.5),
            self.basis.evaluate(1.0),
        ]
    }
}

impl From<ControlPoints> for QuadraticCurve {
    fn from(points: ControlPoints) -> Self {
        Self::new(points)
    }
}

impl Curve for QuadraticCurve {
    fn evaluate(&self, t: f64) -> Point3 {
        self.basis.evaluate(t)
    }

    fn tangent(&self, t: f64) -> Vector3 {
        self.basis.tangent(t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> QuadraticCurve {
        QuadraticCurve::new(ControlPoints::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ))
    }

    #[test]
    fn samples_are_ends_and_apex() {
        let [a, m, b] = arch().samples();
        assert_relative_eq!(a, Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(m, Point3::new(1.0, 0.5, 0.0));
        assert_relative_eq!(b, Point3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn curve_trait_delegates_to_basis() {
        let curve = arch();
        assert_relative_eq!(curve.evaluate(0.25), Point3::new(0.5, 0.375, 0.0));
        assert_relative_eq!(curve.tangent(0.25), Vector3::new(2.0, 1.0, 0.0));
        assert_eq!(curve.domain(), CurveDomain::new(0.0, 1.0));
        assert!(!curve.is_degenerate());
    }

    #[test]
    fn fold_back_is_not_degenerate() {
        let curve = QuadraticCurve::new(ControlPoints::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ));
        assert_relative_eq!(curve.evaluate(0.0), curve.evaluate(1.0));
        assert!(!curve.is_degenerate());
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let p = Point3::new(3.0, -1.0, 2.0);
        let curve = QuadraticCurve::new(ControlPoints::new(p, p, p));
        assert!(curve.is_degenerate());
    }

    #[test]
    fn non_finite_points_are_detected() {
        let mut points = *arch().control_points();
        assert!(points.is_finite());
        points.p1.y = f64::NAN;
        assert!(!points.is_finite());
    }

    #[test]
    fn coordinate_bound_is_checked() {
        let mut points = *arch().control_points();
        assert!(points.is_bounded());
        points.p2.z = -MAX_COORDINATE;
        assert!(points.is_bounded());
        points.p0.x = 1e160;
        assert!(!points.is_bounded());
    }

    #[test]
    fn bspline_kind_is_kept() {
        let curve = QuadraticCurve::with_basis(*arch().control_points(), BasisKind::UniformBSpline);
        assert_eq!(curve.kind(), BasisKind::UniformBSpline);
        assert_relative_eq!(curve.evaluate(0.0), Point3::new(0.5, 0.5, 0.0));
    }
}
