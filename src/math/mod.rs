pub mod chord;

pub use chord::{chord_projection, cross_z, sign};

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Smallest squared chord length used as a projection denominator.
pub const DENOMINATOR_EPSILON: f64 = 1e-12;

/// Largest coordinate magnitude for which projection results stay finite.
///
/// With the default [`DENOMINATOR_EPSILON`] an extrapolated parameter is at
/// most about `1e46`, which keeps `t^2` terms, squared norms and the in-plane
/// cross product below `f64::MAX`.
pub const MAX_COORDINATE: f64 = 1e40;
