//! Error taxonomy for graph mutation and search.
//!
//! Every failure is local and recoverable: operations report a `GraphError`
//! and leave the graph exactly as it was before the call.

use core::fmt;

use crate::graph::VertexId;

/// The error type for graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The graph was declared with no room for any vertex.
    InvalidGraph {
        /// The declared capacity.
        capacity: usize,
    },
    /// The vertex identifier is not a valid (non-negative) id.
    InvalidVertex {
        /// The rejected id.
        id: VertexId,
    },
    /// A vertex with this id is already present.
    DuplicateId {
        /// The duplicated id.
        id: VertexId,
    },
    /// No vertex with this id exists.
    VertexNotFound {
        /// The missing id.
        id: VertexId,
    },
    /// No edge `origin -> destination` exists.
    EdgeNotFound {
        /// Source of the missing edge.
        origin: VertexId,
        /// Target of the missing edge.
        destination: VertexId,
    },
    /// The search exhausted every branch without reaching the destination.
    NoPathExists {
        /// Where the search started.
        origin: VertexId,
        /// The unreachable target.
        destination: VertexId,
    },
    /// Inserting would exceed the declared vertex bound.
    CapacityExceeded {
        /// The declared capacity.
        capacity: usize,
    },
    /// Adding the values of two vertices overflows [`Value`](crate::graph::Value).
    ValueOverflow {
        /// First vertex of the sum (edge source or query origin).
        origin: VertexId,
        /// Last vertex of the sum (edge target or query destination).
        destination: VertexId,
    },
    /// Storage for the new element could not be reserved.
    OutOfMemory,
}

impl GraphError {
    /// Returns `true` for lookups or deletions that named an absent vertex or edge.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::VertexNotFound { .. } | Self::EdgeNotFound { .. })
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGraph { capacity } => {
                write!(f, "invalid graph: declared capacity {capacity} cannot hold a vertex")
            }
            Self::InvalidVertex { id } => write!(f, "invalid vertex id {id}"),
            Self::DuplicateId { id } => write!(f, "vertex {id} already exists"),
            Self::VertexNotFound { id } => write!(f, "vertex {id} not found"),
            Self::EdgeNotFound { origin, destination } => {
                write!(f, "edge {origin} -> {destination} not found")
            }
            Self::NoPathExists { origin, destination } => {
                write!(f, "no path from vertex {origin} to vertex {destination}")
            }
            Self::CapacityExceeded { capacity } => {
                write!(f, "graph is full: capacity of {capacity} vertices reached")
            }
            Self::ValueOverflow { origin, destination } => {
                write!(f, "value sum from vertex {origin} to vertex {destination} overflows")
            }
            Self::OutOfMemory => f.write_str("memory allocation failed"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<std::collections::TryReserveError> for GraphError {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_covers_vertices_and_edges() {
        assert!(GraphError::VertexNotFound { id: 3 }.is_not_found());
        assert!(GraphError::EdgeNotFound { origin: 1, destination: 2 }.is_not_found());
        assert!(!GraphError::DuplicateId { id: 3 }.is_not_found());
        assert!(!GraphError::NoPathExists { origin: 1, destination: 2 }.is_not_found());
    }

    #[test]
    fn display_names_the_ids() {
        let msg = GraphError::NoPathExists { origin: 1, destination: 9 }.to_string();
        assert_eq!(msg, "no path from vertex 1 to vertex 9");
        assert_eq!(GraphError::OutOfMemory.to_string(), "memory allocation failed");
        let msg = GraphError::ValueOverflow { origin: 1, destination: 2 }.to_string();
        assert_eq!(msg, "value sum from vertex 1 to vertex 2 overflows");
    }
}
