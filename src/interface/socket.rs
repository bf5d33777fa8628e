use std::fmt;

use crate::math::{Point3, Vector3};

/// Value type carried by a socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketKind {
    Point,
    Vector,
    Float,
}

impl fmt::Display for SocketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Vector => "vector",
            Self::Float => "float",
        };
        f.write_str(name)
    }
}

/// A value flowing through a socket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SocketValue {
    Point(Point3),
    Vector(Vector3),
    Float(f64),
}

impl SocketValue {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> SocketKind {
        match self {
            Self::Point(_) => SocketKind::Point,
            Self::Vector(_) => SocketKind::Vector,
            Self::Float(_) => SocketKind::Float,
        }
    }

    /// Returns whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Point(p) => p.coords.iter().all(|c| c.is_finite()),
            Self::Vector(v) => v.iter().all(|c| c.is_finite()),
            Self::Float(x) => x.is_finite(),
        }
    }

    /// Returns the largest absolute component.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        match self {
            Self::Point(p) => p.coords.amax(),
            Self::Vector(v) => v.amax(),
            Self::Float(x) => x.abs(),
        }
    }

    /// Returns the point, if this is a point value.
    #[must_use]
    pub fn as_point(&self) -> Option<Point3> {
        match self {
            Self::Point(p) => Some(*p),
            _ => None,
        }
    }

    /// Returns the vector, if this is a vector value.
    #[must_use]
    pub fn as_vector(&self) -> Option<Vector3> {
        match self {
            Self::Vector(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the scalar, if this is a float value.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }
}

/// Static description of one socket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocketSpec {
    pub name: &'static str,
    pub kind: SocketKind,
    /// Default coordinates for input sockets; `None` for outputs.
    pub default: Option<[f64; 3]>,
    pub description: &'static str,
}

impl SocketSpec {
    /// Returns the default as a socket value.
    #[must_use]
    pub fn default_value(&self) -> Option<SocketValue> {
        let [x, y, z] = self.default?;
        Some(match self.kind {
            SocketKind::Point => SocketValue::Point(Point3::new(x, y, z)),
            SocketKind::Vector => SocketValue::Vector(Vector3::new(x, y, z)),
            SocketKind::Float => SocketValue::Float(x),
        })
    }
}

pub(crate) const QUERY: &str = "Vector";
pub(crate) const P0: &str = "P0";
pub(crate) const P1: &str = "P1";
pub(crate) const P2: &str = "P2";

pub(crate) const T: &str = "t";
pub(crate) const DISTANCE: &str = "Distance";
pub(crate) const SIGNED_DISTANCE: &str = "Signed Distance";
pub(crate) const POSITION: &str = "Position";
pub(crate) const TANGENT: &str = "Tangent";
pub(crate) const DISPLACEMENT: &str = "Displacement";
pub(crate) const SAMPLE_MINIMUM: &str = "Sample Minimum";

/// Input sockets in display order.
pub static INPUT_SOCKETS: [SocketSpec; 4] = [
    SocketSpec {
        name: QUERY,
        kind: SocketKind::Point,
        default: Some([0.0, 0.0, 0.0]),
        description: "Point to project onto the curve",
    },
    SocketSpec {
        name: P0,
        kind: SocketKind::Point,
        default: Some([0.0, 0.0, 0.0]),
        description: "Start control point",
    },
    SocketSpec {
        name: P1,
        kind: SocketKind::Point,
        default: Some([0.5, 0.5, 0.0]),
        description: "Middle control point",
    },
    SocketSpec {
        name: P2,
        kind: SocketKind::Point,
        default: Some([1.0, 0.0, 0.0]),
        description: "End control point",
    },
];

/// Output sockets in display order.
pub static OUTPUT_SOCKETS: [SocketSpec; 7] = [
    SocketSpec {
        name: T,
        kind: SocketKind::Float,
        default: None,
        description: "Curve parameter of the projected point",
    },
    SocketSpec {
        name: DISTANCE,
        kind: SocketKind::Float,
        default: None,
        description: "Distance to the projected point",
    },
    SocketSpec {
        name: SIGNED_DISTANCE,
        kind: SocketKind::Float,
        default: None,
        description: "Distance signed by the side of the curve",
    },
    SocketSpec {
        name: POSITION,
        kind: SocketKind::Point,
        default: None,
        description: "Projected point on the curve",
    },
    SocketSpec {
        name: TANGENT,
        kind: SocketKind::Vector,
        default: None,
        description: "Curve derivative at the projected point, not normalized",
    },
    SocketSpec {
        name: DISPLACEMENT,
        kind: SocketKind::Vector,
        default: None,
        description: "Vector from the projected point to the query point",
    },
    SocketSpec {
        name: SAMPLE_MINIMUM,
        kind: SocketKind::Float,
        default: None,
        description: "Distance to the nearest of the start, middle and end samples",
    },
];

/// Looks up an input socket by name.
#[must_use]
pub fn input_spec(name: &str) -> Option<&'static SocketSpec> {
    INPUT_SOCKETS.iter().find(|s| s.name == name)
}

/// Looks up an output socket by name.
#[must_use]
pub fn output_spec(name: &str) -> Option<&'static SocketSpec> {
    OUTPUT_SOCKETS.iter().find(|s| s.name == name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn socket_names_are_unique() {
        let names: std::collections::HashSet<_> = INPUT_SOCKETS
            .iter()
            .chain(OUTPUT_SOCKETS.iter())
            .map(|s| s.name)
            .collect();
        assert_eq!(names.len(), INPUT_SOCKETS.len() + OUTPUT_SOCKETS.len());
    }

    #[test]
    fn inputs_have_defaults_and_outputs_do_not() {
        assert!(INPUT_SOCKETS.iter().all(|s| s.default_value().is_some()));
        assert!(OUTPUT_SOCKETS.iter().all(|s| s.default_value().is_none()));
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(input_spec("P1").unwrap().kind, SocketKind::Point);
        assert_eq!(output_spec("Signed Distance").unwrap().kind, SocketKind::Float);
        assert!(input_spec("Signed Distance").is_none());
        assert!(output_spec("P1").is_none());
    }

    #[test]
    fn default_value_matches_kind() {
        let p1 = input_spec(P1).unwrap().default_value().unwrap();
        assert_eq!(p1, SocketValue::Point(Point3::new(0.5, 0.5, 0.0)));
        assert_eq!(p1.kind(), SocketKind::Point);
    }

    #[test]
    fn value_accessors_check_kind() {
        let v = SocketValue::Vector(Vector3::new(1.0, 2.0, 3.0));
        assert!(v.as_point().is_none());
        assert!(v.as_float().is_none());
        assert_eq!(v.as_vector(), Some(Vector3::new(1.0, 2.0, 3.0)));
        assert!(!SocketValue::Float(f64::INFINITY).is_finite());
    }

    #[test]
    fn kind_display() {
        assert_eq!(SocketKind::Vector.to_string(), "vector");
    }
}
