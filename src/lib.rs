pub mod error;
pub mod geometry;
pub mod interface;
pub mod math;
pub mod operations;

pub use error::{BezierSdfError, Result};
pub use geometry::{BasisKind, BasisMatrix, ControlPoints, Curve, QuadraticCurve};
pub use interface::BezierSdfNode;
pub use operations::query::{
    project, ClosestPointOnCurve, ProjectionParams, ProjectionResult, SegmentPolicy,
};
