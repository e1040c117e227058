//! Error type shared by the graph, heap and shortest-path engine
//!
//! Every failure in this crate is local and recoverable: it is reported to the
//! immediate caller together with the name, handle or value that caused it.

use std::fmt;

use crate::graph::VertexId;
use crate::heap::Distance;

/// Identifies a vertex that could not be found, either by name or by handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexKey {
    /// A display name that is not registered
    Name(String),
    /// A handle that is not (or no longer) present
    Handle(VertexId),
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexKey::Name(name) => write!(f, "'{name}'"),
            VertexKey::Handle(id) => write!(f, "#{id}"),
        }
    }
}

/// Error type for graph construction, heap operations and queries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Name or handle is not present
    #[error("unknown vertex {0}")]
    UnknownVertex(VertexKey),

    /// Handle is outside `[0, vertex_count)`
    #[error("vertex handle {vertex} out of range for graph with {vertex_count} vertices")]
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Edge weight is negative or does not fit the weight type
    #[error("invalid edge weight {0}: weights must be non-negative and at most u32::MAX")]
    InvalidWeight(i64),

    /// Name was already registered
    #[error("vertex name '{0}' is already registered")]
    DuplicateName(String),

    /// Name is empty or longer than [`MAX_NAME_LEN`](crate::names::MAX_NAME_LEN)
    #[error("invalid vertex name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// `decrease_key` was called with a value that does not lower the key
    #[error("cannot decrease key of vertex #{vertex} from {current} to {requested}")]
    InvalidDecrease {
        vertex: VertexId,
        current: Distance,
        requested: Distance,
    },

    /// Extraction attempted on an empty heap
    #[error("extract_min called on an empty heap")]
    EmptyHeap,

    /// The same handle was supplied twice when building a heap
    #[error("vertex #{0} supplied more than once")]
    DuplicateVertex(VertexId),

    /// The query was cancelled through its cancellation flag
    #[error("shortest-path query cancelled after settling {settled} vertices")]
    Cancelled { settled: usize },
}

/// Result alias used throughout the crate
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
