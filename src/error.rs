use thiserror::Error;

use crate::interface::SocketKind;

/// Top-level error type for the host binding layer.
///
/// The geometric primitive itself is total and never fails; only name-based
/// socket access can.
#[derive(Debug, Error)]
pub enum BezierSdfError {
    #[error(transparent)]
    Socket(#[from] SocketError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors related to socket lookup by name.
#[derive(Debug, Error)]
pub enum SocketError {
    #[error("unknown input socket: {0}")]
    UnknownInput(String),

    #[error("unknown output socket: {0}")]
    UnknownOutput(String),

    #[error("socket {socket} expects a {expected} value, got {found}")]
    KindMismatch {
        socket: &'static str,
        expected: SocketKind,
        found: SocketKind,
    },
}

/// Errors related to values supplied by the host.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("non-finite value supplied to socket {socket}")]
    NonFinite { socket: &'static str },

    #[error("value supplied to socket {socket} exceeds magnitude {limit}")]
    OutOfRange { socket: &'static str, limit: f64 },
}

/// Convenience type alias for results using [`BezierSdfError`].
pub type Result<T> = std::result::Result<T, BezierSdfError>;
