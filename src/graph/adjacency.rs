//! Per-vertex outgoing edge lists.
//!
//! An [`AdjacencyList`] keeps its edges in insertion order: new edges are
//! appended at the tail and nothing is sorted by target. Each [`Edge`] carries
//! a snapshot of the values involved at the moment it was created.

use serde::Serialize;

use super::{Value, VertexId};
use crate::error::{GraphError, Result};

/// A directed edge stored in its source vertex's adjacency list.
///
/// `cached_value` and `weight` are captured when the edge is created and are
/// never recomputed, even if either endpoint's value later changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Destination vertex.
    pub target: VertexId,
    /// Destination value at creation time.
    pub cached_value: Value,
    /// `origin.value + destination.value` at creation time.
    pub weight: Value,
}

impl Edge {
    /// Creates an edge towards `target`.
    pub fn new(target: VertexId, cached_value: Value, weight: Value) -> Self {
        Self {
            target,
            cached_value,
            weight,
        }
    }
}

/// Ordered outgoing edges of a single vertex.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(1)\) amortized | Appends at the tail |
/// | `remove` | \(O(\text{out-degree})\) | First match only |
/// | `remove_all_targeting` | \(O(\text{out-degree})\) | Every match |
/// | `clear` | \(O(\text{out-degree})\) | Drops every edge |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    edges: Vec<Edge>,
}

impl AdjacencyList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Appends an edge at the tail.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfMemory`] if the list cannot grow; the list is
    /// left unchanged in that case.
    pub fn insert(&mut self, target: VertexId, cached_value: Value, weight: Value) -> Result<()> {
        self.edges.try_reserve(1)?;
        self.edges.push(Edge::new(target, cached_value, weight));
        Ok(())
    }

    /// Removes the first edge pointing at `target` and returns it.
    ///
    /// Returns `None` when no edge targets `target`; the list is then untouched.
    pub fn remove(&mut self, target: VertexId) -> Option<Edge> {
        let pos = self.edges.iter().position(|e| e.target == target)?;
        Some(self.edges.remove(pos))
    }

    /// Removes every edge pointing at `target`, returning how many were dropped.
    pub fn remove_all_targeting(&mut self, target: VertexId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| e.target != target);
        before - self.edges.len()
    }

    /// Drops every edge.
    ///
    /// Returns `true` only if the list held at least one edge on entry. An
    /// already-empty list reports `false` even though it is empty afterwards.
    pub fn clear(&mut self) -> bool {
        let had_edges = !self.edges.is_empty();
        self.edges.clear();
        had_edges
    }

    /// Returns the first edge pointing at `target`.
    pub fn get(&self, target: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.target == target)
    }

    /// Returns `true` if some edge points at `target`.
    pub fn contains(&self, target: VertexId) -> bool {
        self.get(target).is_some()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Edges as a slice, in insertion order.
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn require(&self, origin: VertexId, target: VertexId) -> Result<&Edge> {
        self.get(target).ok_or(GraphError::EdgeNotFound {
            origin,
            destination: target,
        })
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = &'a Edge;
    type IntoIter = core::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
