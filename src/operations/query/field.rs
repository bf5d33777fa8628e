use rayon::prelude::*;

use crate::geometry::QuadraticCurve;
use crate::math::Point3;

use super::{ClosestPointOnCurve, ProjectionParams, ProjectionResult};

/// Projects many query points onto one curve in parallel.
///
/// Each sample is independent; results come back in input order.
pub struct ProjectField<'a> {
    curve: &'a QuadraticCurve,
    points: &'a [Point3],
    params: ProjectionParams,
}

impl<'a> ProjectField<'a> {
    /// Creates a new `ProjectField` operation.
    #[must_use]
    pub fn new(curve: &'a QuadraticCurve, points: &'a [Point3]) -> Self {
        Self {
            curve,
            points,
            params: ProjectionParams::default(),
        }
    }

    /// Sets the projection parameters used for every sample.
    #[must_use]
    pub fn with_params(mut self, params: ProjectionParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the projection over all samples.
    #[must_use]
    pub fn execute(&self) -> Vec<ProjectionResult> {
        self.log_start();
        self.points.par_iter().map(|p| self.project_one(*p)).collect()
    }

    /// Executes the projection and keeps only the signed distances.
    #[must_use]
    pub fn signed_distances(&self) -> Vec<f64> {
        self.log_start();
        self.points
            .par_iter()
            .map(|p| self.project_one(*p).signed_distance)
            .collect()
    }

    fn log_start(&self) {
        tracing::debug!(
            samples = self.points.len(),
            policy = ?self.params.policy,
            "projecting field"
        );
        if !self.curve.control_points().is_bounded() {
            tracing::warn!("control points exceed MAX_COORDINATE, results may overflow");
        }
    }

    fn project_one(&self, point: Point3) -> ProjectionResult {
        ClosestPointOnCurve::new(self.curve, point)
            .with_params(self.params)
            .execute()
    }
}
