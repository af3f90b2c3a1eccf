//! Core graph structure — an adjacency store over normalized node keys.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Edge, GraphResult, NodeKey, NodeName};

/// Sequence for implementation-assigned graph names.
static GRAPH_SEQ: AtomicU64 = AtomicU64::new(0);

/// An in-memory undirected graph.
///
/// Nodes are keyed by normalized names; each node owns an ordered list of
/// neighbor keys. Edges are implicit: `connect` appends to both endpoints'
/// lists (once for a self-loop), and [`Graph::edges`] derives the canonical
/// deduplicated edge set on demand. Parallel adjacency entries from repeated
/// connects are kept in storage.
///
/// All structural change goes through `add`/`connect`/`remove`; accessors
/// hand out read-only slices only.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Display name.
    name: String,
    /// Node keys in insertion order.
    order: Vec<NodeKey>,
    /// Adjacency lists, keyed by node.
    store: HashMap<NodeKey, Vec<NodeKey>>,
}

impl Graph {
    /// Create an empty graph with an implementation-assigned unique name.
    pub fn new() -> Self {
        let seq = GRAPH_SEQ.fetch_add(1, Ordering::Relaxed);
        Self::with_name(format!("graph-{seq}"))
    }

    /// Create an empty graph with the given display name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order: Vec::new(),
            store: HashMap::new(),
        }
    }

    /// Create a graph and add each initial name in order.
    ///
    /// Never fails on empty input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if an initial name fails
    /// normalization.
    pub fn build<I>(name: Option<&str>, with: I) -> GraphResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<NodeName>,
    {
        let mut graph = match name {
            Some(name) => Self::with_name(name),
            None => Self::new(),
        };
        for entry in with {
            graph.add(entry)?;
        }
        Ok(graph)
    }

    /// The graph's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True iff the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Number of distinct edges (parallel adjacency entries collapsed).
    ///
    /// Derived on demand from the adjacency store, so each call costs a full
    /// [`Graph::edges`] pass rather than reading a stored counter.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// True iff the graph has no self-loops and no parallel edges.
    ///
    /// A graph with no edges is trivially simple. Checked against the raw
    /// adjacency store, so parallel entries that [`Graph::edges`] would
    /// collapse still disqualify.
    pub fn is_simple(&self) -> bool {
        for (node, neighbors) in &self.store {
            let mut seen = HashSet::with_capacity(neighbors.len());
            for neighbor in neighbors {
                if neighbor == node || !seen.insert(neighbor) {
                    return false;
                }
            }
        }
        true
    }

    /// Whether a node with this name exists.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if `name` fails
    /// normalization.
    pub fn has_node(&self, name: impl Into<NodeName>) -> GraphResult<bool> {
        let key = name.into().normalize()?;
        Ok(self.store.contains_key(&key))
    }

    /// The node's neighbor list, or `None` if unknown. Equivalent to
    /// [`Graph::neighbors`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if `name` fails
    /// normalization.
    pub fn node(&self, name: impl Into<NodeName>) -> GraphResult<Option<&[NodeKey]>> {
        let key = name.into().normalize()?;
        Ok(self.store.get(&key).map(Vec::as_slice))
    }

    /// All node keys in insertion order.
    pub fn nodes(&self) -> &[NodeKey] {
        &self.order
    }

    /// A read-only view of a node's neighbors, or `None` if unknown.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if `name` fails
    /// normalization.
    pub fn neighbors(&self, name: impl Into<NodeName>) -> GraphResult<Option<&[NodeKey]>> {
        self.node(name)
    }

    /// True iff every given name normalizes AND is an existing node.
    ///
    /// An empty input is vacuously true. Malformed names yield `false`
    /// rather than an error.
    pub fn known<I>(&self, names: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<NodeName>,
    {
        names
            .into_iter()
            .all(|name| match name.into().normalize() {
                Ok(key) => self.store.contains_key(&key),
                Err(_) => false,
            })
    }

    /// The derived edge set.
    ///
    /// Nodes are visited in insertion order, neighbor lists in their stored
    /// order; each pair is canonicalized and the result deduplicated while
    /// preserving first-seen order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for node in &self.order {
            if let Some(neighbors) = self.store.get(node) {
                for neighbor in neighbors {
                    let edge = Edge::new(node.clone(), neighbor.clone());
                    if seen.insert(edge.clone()) {
                        result.push(edge);
                    }
                }
            }
        }
        result
    }

    /// Ensure a node exists, creating it with an empty neighbor list if
    /// absent. Adding an existing node leaves its neighbor list untouched.
    ///
    /// Always `Ok(true)` for a well-formed name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if `name` fails
    /// normalization.
    pub fn add(&mut self, name: impl Into<NodeName>) -> GraphResult<bool> {
        let key = name.into().normalize()?;
        self.insert_node(key);
        Ok(true)
    }

    /// Ensure `name` exists, then connect it to `to`.
    ///
    /// Returns `Ok(false)` without connecting when `to` is not a known node;
    /// the target is never auto-created. `name` itself is still created in
    /// that case.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if either name fails
    /// normalization.
    pub fn add_to(
        &mut self,
        name: impl Into<NodeName>,
        to: impl Into<NodeName>,
    ) -> GraphResult<bool> {
        let key = name.into().normalize()?;
        let to = to.into().normalize()?;
        self.insert_node(key.clone());
        if !self.store.contains_key(&to) {
            return Ok(false);
        }
        Ok(self.connect_keys(key, to))
    }

    /// Connect two existing nodes.
    ///
    /// Appends `target` to `source`'s neighbor list and, unless the two are
    /// equal (self-loop), `source` to `target`'s list. Returns `Ok(false)` if
    /// either node is unknown; nodes are never implicitly created. Repeated
    /// calls add parallel adjacency entries.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if either name fails
    /// normalization.
    pub fn connect(
        &mut self,
        source: impl Into<NodeName>,
        target: impl Into<NodeName>,
    ) -> GraphResult<bool> {
        let source = source.into().normalize()?;
        let target = target.into().normalize()?;
        Ok(self.connect_keys(source, target))
    }

    /// Remove a node and sever every incident adjacency entry.
    ///
    /// All occurrences of the node in its neighbors' lists are deleted, so
    /// parallel entries from repeated connects disappear together. Returns
    /// `Ok(false)` if the node is unknown, leaving the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if `name` fails
    /// normalization.
    pub fn remove(&mut self, name: impl Into<NodeName>) -> GraphResult<bool> {
        let key = name.into().normalize()?;
        let neighbors = match self.store.remove(&key) {
            Some(neighbors) => neighbors,
            None => return Ok(false),
        };
        log::debug!(
            "graph {}: removing node {key} with {} adjacency entries",
            self.name,
            neighbors.len()
        );
        let mut visited = HashSet::new();
        for neighbor in neighbors {
            if neighbor == key || !visited.insert(neighbor.clone()) {
                continue;
            }
            if let Some(list) = self.store.get_mut(&neighbor) {
                list.retain(|entry| *entry != key);
            }
        }
        self.order.retain(|entry| *entry != key);
        Ok(true)
    }

    /// Whether `target` appears in `source`'s neighbor list.
    ///
    /// Directional in lookup, but valid for the undirected relation because
    /// `connect` always inserts both directions. `Ok(false)` if either node
    /// is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if either name fails
    /// normalization.
    pub fn is_adjacent(
        &self,
        source: impl Into<NodeName>,
        target: impl Into<NodeName>,
    ) -> GraphResult<bool> {
        let source = source.into().normalize()?;
        let target = target.into().normalize()?;
        if !self.store.contains_key(&target) {
            return Ok(false);
        }
        match self.store.get(&source) {
            Some(neighbors) => Ok(neighbors.contains(&target)),
            None => Ok(false),
        }
    }

    /// Whether `node` is incident with `edge`.
    ///
    /// True iff the node and both edge endpoints exist, the node is one of
    /// the endpoints, and the node's neighbor list contains the other
    /// endpoint (for a self-loop the other endpoint is the node itself).
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidNode`] if `node` fails
    /// normalization, or [`crate::GraphError::InvalidEdge`] unless `edge` is
    /// exactly two valid names.
    pub fn is_incident(&self, node: impl Into<NodeName>, edge: &[NodeName]) -> GraphResult<bool> {
        let key = node.into().normalize()?;
        let edge = Edge::from_names(edge)?;
        if !self.store.contains_key(&key) {
            return Ok(false);
        }
        let (a, b) = edge.endpoints();
        if !self.store.contains_key(a) || !self.store.contains_key(b) {
            return Ok(false);
        }
        let other = match edge.opposite(&key) {
            Some(other) => other,
            None => return Ok(false),
        };
        match self.store.get(&key) {
            Some(neighbors) => Ok(neighbors.contains(other)),
            None => Ok(false),
        }
    }

    /// Whether `edge` is a self-loop on a known node.
    ///
    /// `Ok(false)` if either endpoint is unknown; true iff both endpoint
    /// keys are identical.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError::InvalidEdge`] unless `edge` is exactly
    /// two valid names.
    pub fn is_loop(&self, edge: &[NodeName]) -> GraphResult<bool> {
        let edge = Edge::from_names(edge)?;
        let (a, b) = edge.endpoints();
        if !self.store.contains_key(a) || !self.store.contains_key(b) {
            return Ok(false);
        }
        Ok(edge.is_loop())
    }

    fn insert_node(&mut self, key: NodeKey) {
        if !self.store.contains_key(&key) {
            log::trace!("graph {}: adding node {key}", self.name);
            self.order.push(key.clone());
            self.store.insert(key, Vec::new());
        }
    }

    fn connect_keys(&mut self, source: NodeKey, target: NodeKey) -> bool {
        if !self.store.contains_key(&source) || !self.store.contains_key(&target) {
            log::trace!(
                "graph {}: refusing connect {source} -> {target}, unknown endpoint",
                self.name
            );
            return false;
        }
        let is_loop = source == target;
        if let Some(list) = self.store.get_mut(&source) {
            list.push(target.clone());
        }
        // Skip the symmetric insertion for a self-loop so it counts once.
        if !is_loop {
            if let Some(list) = self.store.get_mut(&target) {
                list.push(source);
            }
        }
        true
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
