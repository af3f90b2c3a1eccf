//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod key_graph;

pub use builder::GraphBuilder;
pub use key_graph::Graph;
