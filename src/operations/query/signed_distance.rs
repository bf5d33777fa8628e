use crate::math::{cross_z, sign, Point3, Vector3};

/// Unsigned and signed distance from a query point to a point on a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMeasure {
    /// `query - position`.
    pub displacement: Vector3,
    /// Length of `displacement`.
    pub distance: f64,
    /// `distance` carrying the sign of the in-plane cross product of the
    /// displacement with the tangent.
    pub signed_distance: f64,
}

impl DistanceMeasure {
    /// Measures `query` against the curve point `position` with first
    /// derivative `tangent`.
    ///
    /// The sign is positive when the query lies clockwise of the tangent
    /// (seen from +z) and negative counter-clockwise. It is zero when the
    /// displacement is parallel to the tangent or the tangent vanishes.
    #[must_use]
    pub fn between(query: &Point3, position: &Point3, tangent: &Vector3) -> Self {
        let displacement = query - position;
        let distance = displacement.norm();
        Self {
            displacement,
            distance,
            signed_distance: sign(cross_z(&displacement, tangent)) * distance,
        }
    }
}
