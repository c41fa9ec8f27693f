//! # `valgraph` - Directed Value Graphs
//!
//! A directed graph whose vertices carry integer values, with two analytical
//! queries built on depth-first search:
//!
//! - **Reachability**: is `destination` reachable from `origin`, and what do
//!   the vertex values add up to along the way?
//! - **Maximum path**: over every possible start vertex, which simple path has
//!   the largest vertex-value sum?
//!
//! ## Data Model
//!
//! - [`ValueGraph`] owns a [`VertexList`] ordered strictly ascending by id and
//!   enforces a declared vertex capacity.
//! - Each [`Vertex`] owns an [`AdjacencyList`] of outgoing [`Edge`]s in
//!   insertion order.
//! - Edges refer to their target by id and snapshot `target.value` and
//!   `origin.value + target.value` at creation time; later value changes do
//!   not touch existing edges.
//! - Deleting a vertex removes its outgoing edges and every edge pointing at
//!   it, wherever it sits in the ordering.
//!
//! ## Searches
//!
//! Search state (the visited markers) is held in a [`VisitedSet`] owned by each
//! call rather than in the vertices, so queries take `&ValueGraph` and are
//! reentrant. Enable the `parallel` feature for a rayon-backed maximum-path
//! search and the `tracing` feature for structured debug events.
//!
//! ## Example
//!
//! ```rust
//! use valgraph::{SumPolicy, ValueGraph};
//!
//! let mut graph = ValueGraph::new(8)?;
//! graph.insert_vertex(1, 7)?;
//! graph.insert_vertex(2, 53)?;
//! graph.insert_vertex(3, 183)?;
//! graph.insert_edge(1, 2)?;
//! graph.insert_edge(2, 3)?;
//!
//! let reach = graph.reachability(1, 3, SumPolicy::PathOnly)?;
//! assert_eq!(reach.sum, 243);
//!
//! let best = graph.max_path();
//! assert_eq!((best.sum, best.terminal), (243, Some(3)));
//! # Ok::<(), valgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
mod trace;

pub use error::{GraphError, Result};
pub use graph::{
    AdjacencyList, Edge, MaxPath, Reachability, SumPolicy, Value, ValueGraph, Vertex, VertexId,
    VertexList, VertexRemoval, VisitedSet, DEFAULT_CAPACITY, NO_PATH,
};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // An edge is exactly its three integers.
    assert!(mem::size_of::<Edge>() == 3 * mem::size_of::<Value>());

    // Errors stay small enough to return by value cheaply.
    assert!(mem::size_of::<GraphError>() <= 3 * mem::size_of::<u64>());

    // Visited markers are a plain vector.
    assert!(mem::size_of::<VisitedSet>() == mem::size_of::<Vec<bool>>());
};
