//! All data types for the keygraph library.

pub mod edge;
pub mod error;
pub mod key;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use key::{NodeKey, NodeName};
