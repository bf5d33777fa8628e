//! Host-facing call contract: named, typed sockets in and out.
//!
//! Socket descriptions are UI metadata and take no part in evaluation.

mod node;
mod socket;

pub use node::{BezierSdfNode, NodeOutputs};
pub use socket::{
    input_spec, output_spec, SocketKind, SocketSpec, SocketValue, INPUT_SOCKETS, OUTPUT_SOCKETS,
};
