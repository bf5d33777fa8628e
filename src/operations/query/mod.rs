mod closest_point;
mod field;
mod signed_distance;

pub use closest_point::{project, ClosestPointOnCurve, ProjectionResult};
pub use field::ProjectField;
pub use signed_distance::DistanceMeasure;

use crate::math::DENOMINATOR_EPSILON;

/// Rule for choosing between the two half-curve candidates.
///
/// The two rules agree away from the midpoint and may differ near it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentPolicy {
    /// Accept a candidate when both agree on its half; otherwise evaluate the
    /// curve at both and keep the nearer one (the first on ties).
    #[default]
    Conservative,
    /// Accept the first half whenever its chord projection is below 1, then
    /// the second half whenever its projection is above 0, else the midpoint.
    /// Never re-evaluates the curve.
    Threshold,
}

/// Parameters controlling closest-point projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Candidate selection rule.
    pub policy: SegmentPolicy,
    /// Lower bound on squared chord length in the projection denominator.
    pub denominator_epsilon: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            policy: SegmentPolicy::Conservative,
            denominator_epsilon: DENOMINATOR_EPSILON,
        }
    }
}
