use crate::math::{Point3, Vector3};

use super::ControlPoints;

/// Characteristic matrix used to turn three control points into power-basis
/// coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BasisKind {
    /// Quadratic Bézier: interpolates the first and last control points.
    #[default]
    Bezier,
    /// Uniform quadratic B-spline: runs from the midpoint of `p0`/`p1` to the
    /// midpoint of `p1`/`p2`.
    UniformBSpline,
}

impl BasisKind {
    /// Returns the 3x3 characteristic matrix, rows ordered by power of `t`.
    #[must_use]
    pub fn matrix(self) -> [[f64; 3]; 3] {
        match self {
            Self::Bezier => [[1.0, 0.0, 0.0], [-2.0, 2.0, 0.0], [1.0, -2.0, 1.0]],
            Self::UniformBSpline => [[0.5, 0.5, 0.0], [-1.0, 1.0, 0.0], [0.5, -1.0, 0.5]],
        }
    }
}

/// Power-basis form of a quadratic curve: `B(t) = c0 + c1 t + c2 t^2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisMatrix {
    rows: [Vector3; 3],
}

impl BasisMatrix {
    /// Builds the coefficient rows for `points` under the given basis.
    #[must_use]
    pub fn new(kind: BasisKind, points: &ControlPoints) -> Self {
        let m = kind.matrix();
        let p = [points.p0.coords, points.p1.coords, points.p2.coords];
        let row = |r: [f64; 3]| p[0] * r[0] + p[1] * r[1] + p[2] * r[2];
        Self {
            rows: [row(m[0]), row(m[1]), row(m[2])],
        }
    }

    /// Builds the Bézier coefficient rows:
    /// `[p0, -2 p0 + 2 p1, p0 - 2 p1 + p2]`.
    #[must_use]
    pub fn bezier(p0: &Point3, p1: &Point3, p2: &Point3) -> Self {
        Self {
            rows: [
                p0.coords,
                (p1 - p0) * 2.0,
                p0.coords - p1.coords * 2.0 + p2.coords,
            ],
        }
    }

    /// Returns the coefficient rows, indexed by power of `t`.
    #[must_use]
    pub fn rows(&self) -> &[Vector3; 3] {
        &self.rows
    }

    /// `row0 + row1 t + row2 t^2`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point3 {
        let [c0, c1, c2] = &self.rows;
        Point3::from(c0 + (c1 + c2 * t) * t)
    }

    /// `row1 + 2 row2 t`.
    #[must_use]
    pub fn tangent(&self, t: f64) -> Vector3 {
        let [_, c1, c2] = &self.rows;
        c1 + c2 * (2.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    fn bernstein(points: &ControlPoints, t: f64) -> Point3 {
        let s = 1.0 - t;
        Point3::from(
            points.p0.coords * (s * s)
                + points.p1.coords * (2.0 * t * s)
                + points.p2.coords * (t * t),
        )
    }

    fn sample_points() -> Vec<ControlPoints> {
        vec![
            ControlPoints::new(
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ),
            ControlPoints::new(
                Point3::new(-3.0, 2.5, 1.0),
                Point3::new(4.0, -1.0, 0.5),
                Point3::new(0.25, 7.0, -2.0),
            ),
            ControlPoints::new(
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(1.0, 1.0, 1.0),
            ),
        ]
    }

    #[test]
    fn bezier_rows_match_expansion() {
        let q = BasisMatrix::bezier(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 1.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
        );
        let [c0, c1, c2] = q.rows();
        assert_relative_eq!(*c0, Vector3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(*c1, Vector3::new(2.0, 2.0, 0.0));
        assert_relative_eq!(*c2, Vector3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn generic_constructor_agrees_with_bezier() {
        for points in sample_points() {
            let a = BasisMatrix::new(BasisKind::Bezier, &points);
            let b = BasisMatrix::bezier(&points.p0, &points.p1, &points.p2);
            for (ra, rb) in a.rows().iter().zip(b.rows()) {
                assert_relative_eq!(*ra, *rb, epsilon = TOL);
            }
        }
    }

    #[test]
    fn evaluate_matches_bernstein_form() {
        for points in sample_points() {
            let q = BasisMatrix::new(BasisKind::Bezier, &points);
            for i in 0..=20 {
                let t = f64::from(i) / 20.0;
                assert_relative_eq!(q.evaluate(t), bernstein(&points, t), epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn evaluate_hits_endpoints() {
        for points in sample_points() {
            let q = BasisMatrix::new(BasisKind::Bezier, &points);
            assert_relative_eq!(q.evaluate(0.0), points.p0, epsilon = TOL);
            assert_relative_eq!(q.evaluate(1.0), points.p2, epsilon = TOL);
        }
    }

    #[test]
    fn tangent_matches_central_difference() {
        let h = 1e-5;
        for points in sample_points() {
            let q = BasisMatrix::new(BasisKind::Bezier, &points);
            for &t in &[0.0, 0.2, 0.5, 0.8, 1.0] {
                let numeric = (q.evaluate(t + h) - q.evaluate(t - h)) / (2.0 * h);
                assert_relative_eq!(q.tangent(t), numeric, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn tangent_is_not_normalized() {
        let q = BasisMatrix::bezier(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
            &Point3::new(4.0, 0.0, 0.0),
        );
        assert_relative_eq!(q.tangent(0.5), Vector3::new(4.0, 0.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn coincident_points_give_zero_tangent() {
        let points = &sample_points()[2];
        let q = BasisMatrix::new(BasisKind::Bezier, points);
        assert_relative_eq!(q.tangent(0.3), Vector3::zeros(), epsilon = TOL);
        assert_relative_eq!(q.evaluate(0.3), points.p0, epsilon = TOL);
    }

    #[test]
    fn bspline_endpoints_are_midpoints() {
        let points = &sample_points()[1];
        let q = BasisMatrix::new(BasisKind::UniformBSpline, points);
        assert_relative_eq!(
            q.evaluate(0.0),
            nalgebra::center(&points.p0, &points.p1),
            epsilon = TOL
        );
        assert_relative_eq!(
            q.evaluate(1.0),
            nalgebra::center(&points.p1, &points.p2),
            epsilon = TOL
        );
    }
}
