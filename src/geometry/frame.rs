use crate::math::{Vector2, Vector3, TOLERANCE};

/// Orthonormal frame riding along a curve, with `z` on the tangent.
///
/// `x = normalize(z × up)` and `y = x × z`, so for a tangent lying in the
/// plane perpendicular to `up`, `y` coincides with `up`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: Vector3,
    pub y: Vector3,
    pub z: Vector3,
}

impl Frame {
    /// Builds the frame for `tangent` using `up` as the reference direction.
    ///
    /// Returns `None` if the tangent is zero-length or parallel to `up`.
    #[must_use]
    pub fn from_tangent(tangent: &Vector3, up: &Vector3) -> Option<Self> {
        let z = tangent.try_normalize(TOLERANCE)?;
        let x = z.cross(up).try_normalize(TOLERANCE)?;
        let y = x.cross(&z);
        Some(Self { x, y, z })
    }

    /// Projects `v` onto the frame's cross-section plane, dropping its
    /// component along the tangent.
    #[must_use]
    pub fn section_coordinates(&self, v: &Vector3) -> Vector2 {
        Vector2::new(v.dot(&self.x), v.dot(&self.y))
    }
}
