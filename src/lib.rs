//! keygraph — minimal in-memory undirected graph keyed by normalized names.
//!
//! Nodes are identified by a canonical key derived from textual or integer
//! input; edges are implicit, derived on demand from per-node adjacency
//! lists. The store is multi-edge capable (repeated connects keep parallel
//! adjacency entries) and [`Graph::edges`] collapses them into a canonical
//! deduplicated set.
//!
//! The crate provides storage, membership queries, and pairwise relationship
//! predicates only — no traversal algorithms, no persistence, no internal
//! synchronization (callers serialize access to a graph instance).

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphResult, NodeKey, NodeName};

/// Crate version, exposed for embedders.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
