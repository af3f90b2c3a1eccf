//! Error types for the keygraph library.

use thiserror::Error;

/// All errors that can occur in the keygraph library.
///
/// Both variants are local validation failures surfaced immediately to the
/// caller. Expected negative outcomes (unknown node, disconnected pair) are
/// reported as `Ok(false)` by the predicates instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node name failed key normalization.
    #[error("Invalid node name: {0}")]
    InvalidNode(String),

    /// An edge argument is not a two-element sequence of valid keys.
    #[error("Invalid edge definition: {0}")]
    InvalidEdge(String),
}

/// Convenience result type for keygraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
