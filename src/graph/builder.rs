//! Fluent API for building Graph instances.

use crate::types::{GraphResult, NodeName};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Names and connections accumulate unvalidated; everything is normalized in
/// [`GraphBuilder::build`]. Unlike [`Graph::connect`], the builder's
/// [`edge`](GraphBuilder::edge) ensures both endpoints exist before
/// connecting them — at construction time there is nothing to protect from
/// implicit creation.
pub struct GraphBuilder {
    name: Option<String>,
    nodes: Vec<NodeName>,
    edges: Vec<(NodeName, NodeName)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            name: None,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Set the graph's display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a node.
    pub fn node(mut self, name: impl Into<NodeName>) -> Self {
        self.nodes.push(name.into());
        self
    }

    /// Add an edge, creating either endpoint if it does not exist yet.
    pub fn edge(mut self, a: impl Into<NodeName>, b: impl Into<NodeName>) -> Self {
        self.edges.push((a.into(), b.into()));
        self
    }

    /// Build the final [`Graph`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if any accumulated name
    /// fails normalization.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = match self.name {
            Some(name) => Graph::with_name(name),
            None => Graph::new(),
        };
        for node in self.nodes {
            graph.add(node)?;
        }
        for (a, b) in self.edges {
            let a = a.normalize()?;
            let b = b.normalize()?;
            graph.add(a.clone())?;
            graph.add(b.clone())?;
            graph.connect(a, b)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
