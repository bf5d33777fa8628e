pub mod curve;
pub mod frame;

pub use curve::{BasisKind, BasisMatrix, ControlPoints, Curve, CurveDomain, QuadraticCurve};
pub use frame::Frame;
