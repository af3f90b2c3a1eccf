//! The derived edge type — a canonical unordered pair of node keys.

use std::fmt;

use serde::Serialize;

use super::error::{GraphError, GraphResult};
use super::key::{NodeKey, NodeName};

/// An undirected edge between two nodes.
///
/// Edges are not stored; the graph derives them on demand from its adjacency
/// lists. The endpoints are canonicalized to `(min, max)` key order at
/// construction, and the fields stay private so a non-canonical pair cannot
/// exist. A self-loop is the pair `(x, x)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    a: NodeKey,
    b: NodeKey,
}

impl Edge {
    /// Create an edge from two endpoint keys, sorting them into canonical
    /// order.
    pub fn new(x: NodeKey, y: NodeKey) -> Self {
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    /// Build an edge from a raw edge definition.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdge`] unless `names` is exactly two
    /// entries that both pass key normalization.
    pub fn from_names(names: &[NodeName]) -> GraphResult<Self> {
        match names {
            [x, y] => {
                let invalid =
                    |e: GraphError| GraphError::InvalidEdge(format!("bad endpoint: {e}"));
                let x = x.clone().normalize().map_err(invalid)?;
                let y = y.clone().normalize().map_err(invalid)?;
                Ok(Self::new(x, y))
            }
            _ => Err(GraphError::InvalidEdge(format!(
                "expected 2 endpoints, got {}",
                names.len()
            ))),
        }
    }

    /// The two endpoint keys in canonical `(min, max)` order.
    pub fn endpoints(&self) -> (&NodeKey, &NodeKey) {
        (&self.a, &self.b)
    }

    /// Whether this edge connects a node to itself.
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// Given one endpoint, the opposite one. For a self-loop the opposite
    /// endpoint is the node itself. `None` if `key` is not an endpoint.
    pub fn opposite(&self, key: &NodeKey) -> Option<&NodeKey> {
        if *key == self.a {
            Some(&self.b)
        } else if *key == self.b {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}
