//! Directed value graphs and the searches built on them.
//!
//! The graph is organized leaf-first:
//! - `adjacency`: per-vertex outgoing edge lists
//! - `vertices`: the id-ordered vertex collection
//! - `value_graph`: the bounded graph wrapper
//! - `search`: reachability and maximum-path queries
//! - `sample`: a fixed demonstration graph

pub mod adjacency;
pub mod sample;
pub mod search;
pub mod value_graph;
pub mod vertices;
pub(crate) mod access;

pub use access::VisitedSet;
pub use adjacency::{AdjacencyList, Edge};
pub use search::{MaxPath, Reachability, SumPolicy, NO_PATH};
pub use value_graph::ValueGraph;
pub use vertices::{Vertex, VertexList, VertexRemoval};

/// Identifier of a vertex. Valid ids are non-negative.
pub type VertexId = i64;

/// Value carried by a vertex; edge weights use the same type.
pub type Value = i64;

/// Capacity of the sample grid, used when no bound is given.
pub const DEFAULT_CAPACITY: usize = 25;
