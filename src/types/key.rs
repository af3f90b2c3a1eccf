//! Node keys and the normalization of raw names into them.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use super::error::{GraphError, GraphResult};

/// A raw node name as supplied by the caller.
///
/// The accepted input kinds are text, integers, and already-normalized keys;
/// everything funnels through [`NodeName::normalize`] before touching the
/// store, so the graph only ever compares canonical keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeName {
    /// A textual name. Must contain at least one non-whitespace character.
    Text(String),
    /// An integer name; normalized to its canonical decimal form
    /// (`123` becomes the key `"123"`, never an octal reinterpretation).
    Integer(i64),
    /// A pre-normalized key; passes through unchanged.
    Key(NodeKey),
}

impl NodeName {
    /// Normalize this name into the canonical key used for storage and
    /// comparison.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidNode`] for empty or whitespace-only text.
    pub fn normalize(self) -> GraphResult<NodeKey> {
        match self {
            NodeName::Text(text) => {
                if text.trim().is_empty() {
                    return Err(GraphError::InvalidNode(
                        "name must not be empty".to_string(),
                    ));
                }
                Ok(NodeKey(text.into_boxed_str()))
            }
            NodeName::Integer(value) => Ok(NodeKey(value.to_string().into_boxed_str())),
            NodeName::Key(key) => Ok(key),
        }
    }
}

impl From<&str> for NodeName {
    fn from(value: &str) -> Self {
        NodeName::Text(value.to_string())
    }
}

impl From<String> for NodeName {
    fn from(value: String) -> Self {
        NodeName::Text(value)
    }
}

impl From<i64> for NodeName {
    fn from(value: i64) -> Self {
        NodeName::Integer(value)
    }
}

impl From<i32> for NodeName {
    fn from(value: i32) -> Self {
        NodeName::Integer(i64::from(value))
    }
}

impl From<NodeKey> for NodeName {
    fn from(value: NodeKey) -> Self {
        NodeName::Key(value)
    }
}

impl From<&NodeKey> for NodeName {
    fn from(value: &NodeKey) -> Self {
        NodeName::Key(value.clone())
    }
}

/// The canonical identifier of a node.
///
/// Keys are immutable once created and compare structurally. They can only be
/// obtained through normalization, so every `NodeKey` in circulation is in
/// canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeKey(Box<str>);

impl NodeKey {
    /// The key's textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeKey {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for NodeKey {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
