mod basis;
mod quadratic;

pub use basis::{BasisKind, BasisMatrix};
pub use quadratic::{ControlPoints, QuadraticCurve};

use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns the parameter halfway through the domain.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.t_min + self.t_max)
    }
}

/// Trait for parametric curves in 3D space.
///
/// Evaluation is total: any finite parameter, including one outside
/// [`Curve::domain`], yields a finite result.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Computes the first derivative at parameter `t`.
    ///
    /// The vector is not normalized and may be zero on degenerate curves.
    fn tangent(&self, t: f64) -> Vector3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;
}
