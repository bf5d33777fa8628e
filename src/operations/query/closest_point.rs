use crate::geometry::{ControlPoints, Curve, Frame, QuadraticCurve};
use crate::math::{chord_projection, Point3, Vector2, Vector3};

use super::{DistanceMeasure, ProjectionParams, SegmentPolicy};

/// Result of a closest point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionResult {
    /// The parameter value at the closest point. Not clamped to the domain.
    pub parameter: f64,
    /// The closest point on the curve.
    pub position: Point3,
    /// First derivative at `parameter`, not normalized.
    pub tangent: Vector3,
    /// `query - position`.
    pub displacement: Vector3,
    /// The distance from the query point to the closest point.
    pub distance: f64,
    /// `distance` signed by the in-plane side of the tangent.
    pub signed_distance: f64,
    /// Smallest distance from the query point to the three solver samples.
    pub sample_minimum: f64,
}

impl ProjectionResult {
    /// Projects the displacement onto the cross-section plane of the frame
    /// built from the tangent and `up`.
    ///
    /// The along-tangent part is dropped, so the length equals `distance`
    /// only where the displacement is perpendicular to the tangent and is
    /// never larger.
    ///
    /// Returns `None` where the frame is undefined (zero tangent, or tangent
    /// parallel to `up`).
    #[must_use]
    pub fn section_coordinates(&self, up: &Vector3) -> Option<Vector2> {
        Frame::from_tangent(&self.tangent, up)
            .map(|frame| frame.section_coordinates(&self.displacement))
    }
}

/// Finds the closest point on a curve to a given point.
///
/// The parameter is estimated in one pass from chord projections onto the
/// two halves of the curve, without iterative refinement; the returned
/// position is exactly on the curve but only approximately the nearest one.
pub struct ClosestPointOnCurve<'a, C: Curve + ?Sized = QuadraticCurve> {
    curve: &'a C,
    point: Point3,
    params: ProjectionParams,
}

impl<'a, C: Curve + ?Sized> ClosestPointOnCurve<'a, C> {
    /// Creates a new `ClosestPointOnCurve` query.
    #[must_use]
    pub fn new(curve: &'a C, point: Point3) -> Self {
        Self {
            curve,
            point,
            params: ProjectionParams::default(),
        }
    }

    /// Sets the projection parameters.
    #[must_use]
    pub fn with_params(mut self, params: ProjectionParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> ProjectionResult {
        let domain = self.curve.domain();
        let (t_lo, t_mid, t_hi) = (domain.t_min, domain.midpoint(), domain.t_max);
        let a = self.curve.evaluate(t_lo);
        let m = self.curve.evaluate(t_mid);
        let b = self.curve.evaluate(t_hi);

        let p = &self.point;
        let eps = self.params.denominator_epsilon;
        let u1 = chord_projection(&a, &m, p, eps);
        let u2 = chord_projection(&m, &b, p, eps);
        let t1 = t_lo + u1 * (t_mid - t_lo);
        let t2 = t_mid + u2 * (t_hi - t_mid);

        let parameter = match self.params.policy {
            SegmentPolicy::Conservative => {
                if t1 < t_mid && t2 < t_mid {
                    t1
                } else if t1 > t_mid && t2 > t_mid {
                    t2
                } else {
                    let d1 = (p - self.curve.evaluate(t1)).norm_squared();
                    let d2 = (p - self.curve.evaluate(t2)).norm_squared();
                    if d2 < d1 {
                        t2
                    } else {
                        t1
                    }
                }
            }
            SegmentPolicy::Threshold => {
                if u1 < 1.0 {
                    t1
                } else if u2 > 0.0 {
                    t2
                } else {
                    t_mid
                }
            }
        };

        let position = self.curve.evaluate(parameter);
        let tangent = self.curve.tangent(parameter);
        let measure = DistanceMeasure::between(p, &position, &tangent);
        let sample_minimum = [a, m, b]
            .iter()
            .map(|s| (p - s).norm())
            .fold(f64::INFINITY, f64::min);

        ProjectionResult {
            parameter,
            position,
            tangent,
            displacement: measure.displacement,
            distance: measure.distance,
            signed_distance: measure.signed_distance,
            sample_minimum,
        }
    }
}

/// Projects `point` onto the quadratic Bézier through `points` with default
/// parameters.
#[must_use]
pub fn project(points: &ControlPoints, point: Point3) -> ProjectionResult {
    let curve = QuadraticCurve::new(*points);
    ClosestPointOnCurve::new(&curve, point).execute()
}
