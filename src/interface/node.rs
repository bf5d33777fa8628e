use crate::error::{InputError, Result, SocketError};
use crate::geometry::{BasisKind, ControlPoints, QuadraticCurve};
use crate::math::{Point3, MAX_COORDINATE};
use crate::operations::query::{ClosestPointOnCurve, ProjectionParams, ProjectionResult};

use super::socket::{
    input_spec, SocketKind, SocketValue, DISPLACEMENT, DISTANCE, P0, P1, P2, POSITION, QUERY,
    SAMPLE_MINIMUM, SIGNED_DISTANCE, T, TANGENT,
};

/// The Bézier distance node as seen by a host shading pipeline.
///
/// Inputs are bound by socket name; [`BezierSdfNode::evaluate`] is a pure
/// function of the bound inputs.
#[derive(Debug, Clone)]
pub struct BezierSdfNode {
    query: Point3,
    points: ControlPoints,
    kind: BasisKind,
    params: ProjectionParams,
}

impl Default for BezierSdfNode {
    fn default() -> Self {
        let default_point = |name: &str| {
            input_spec(name)
                .and_then(|s| s.default_value())
                .and_then(|v| v.as_point())
                .unwrap_or_else(Point3::origin)
        };
        Self {
            query: default_point(QUERY),
            points: ControlPoints::new(default_point(P0), default_point(P1), default_point(P2)),
            kind: BasisKind::Bezier,
            params: ProjectionParams::default(),
        }
    }
}

impl BezierSdfNode {
    /// Creates a node with every input at its socket default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the projection parameters.
    #[must_use]
    pub fn with_params(mut self, params: ProjectionParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the characteristic matrix used to build the curve.
    #[must_use]
    pub fn with_basis(mut self, kind: BasisKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the bound control points.
    #[must_use]
    pub fn control_points(&self) -> &ControlPoints {
        &self.points
    }

    /// Binds `value` to the input socket `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no input socket has that name, the value kind
    /// does not match the socket, or the value is not finite or exceeds
    /// [`MAX_COORDINATE`] in magnitude.
    pub fn set_input(&mut self, name: &str, value: SocketValue) -> Result<()> {
        let spec = input_spec(name).ok_or_else(|| SocketError::UnknownInput(name.to_owned()))?;
        let p = match value {
            SocketValue::Point(p) if spec.kind == SocketKind::Point => p,
            other => {
                return Err(SocketError::KindMismatch {
                    socket: spec.name,
                    expected: spec.kind,
                    found: other.kind(),
                }
                .into())
            }
        };
        if !value.is_finite() {
            return Err(InputError::NonFinite { socket: spec.name }.into());
        }
        if value.max_abs() > MAX_COORDINATE {
            return Err(InputError::OutOfRange {
                socket: spec.name,
                limit: MAX_COORDINATE,
            }
            .into());
        }
        tracing::debug!(socket = spec.name, x = p.x, y = p.y, z = p.z, "bind input");
        match spec.name {
            QUERY => self.query = p,
            P0 => self.points.p0 = p,
            P1 => self.points.p1 = p,
            P2 => self.points.p2 = p,
            _ => return Err(SocketError::UnknownInput(name.to_owned()).into()),
        }
        Ok(())
    }

    /// Reads the current value of the input socket `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no input socket has that name.
    pub fn input(&self, name: &str) -> Result<SocketValue> {
        let p = match name {
            QUERY => self.query,
            P0 => self.points.p0,
            P1 => self.points.p1,
            P2 => self.points.p2,
            _ => return Err(SocketError::UnknownInput(name.to_owned()).into()),
        };
        Ok(SocketValue::Point(p))
    }

    /// Evaluates the node for the bound inputs.
    #[must_use]
    pub fn evaluate(&self) -> NodeOutputs {
        let curve = QuadraticCurve::with_basis(self.points, self.kind);
        NodeOutputs {
            result: ClosestPointOnCurve::new(&curve, self.query)
                .with_params(self.params)
                .execute(),
        }
    }
}

/// Output values of one node evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeOutputs {
    result: ProjectionResult,
}

impl NodeOutputs {
    /// Returns the full projection result.
    #[must_use]
    pub fn result(&self) -> &ProjectionResult {
        &self.result
    }

    /// Reads the output socket `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no output socket has that name.
    pub fn get(&self, name: &str) -> Result<SocketValue> {
        let r = &self.result;
        Ok(match name {
            T => SocketValue::Float(r.parameter),
            DISTANCE => SocketValue::Float(r.distance),
            SIGNED_DISTANCE => SocketValue::Float(r.signed_distance),
            POSITION => SocketValue::Point(r.position),
            TANGENT => SocketValue::Vector(r.tangent),
            DISPLACEMENT => SocketValue::Vector(r.displacement),
            SAMPLE_MINIMUM => SocketValue::Float(r.sample_minimum),
            _ => return Err(SocketError::UnknownOutput(name.to_owned()).into()),
        })
    }
}
