//! A bounded directed graph whose vertices carry integer values.
//!
//! `ValueGraph` wraps the ordered [`VertexList`] and enforces the declared
//! vertex capacity. Edges are always directed and snapshot the endpoint values
//! at the moment they are inserted.

use core::fmt;

use serde::Serialize;

use super::adjacency::{AdjacencyList, Edge};
use super::vertices::{Vertex, VertexList, VertexRemoval};
use super::{Value, VertexId};
use crate::error::{GraphError, Result};
use crate::trace::trace_event;

/// A directed, value-weighted graph with a fixed vertex bound.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert_vertex` | \(O(n)\) | Ordered insertion |
/// | `insert_edge` | \(O(\log n)\) amortized | Two lookups, tail append |
/// | `delete_edge` | \(O(\log n + \text{out-degree})\) | First matching edge |
/// | `delete_vertex` | \(O(n + m)\) | Cascades to incoming edges |
/// | `contains_vertex` | \(O(\log n)\) | Binary search on id |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueGraph {
    capacity: usize,
    vertices: VertexList,
}

impl ValueGraph {
    /// Creates an empty graph that can hold up to `capacity` vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidGraph`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GraphError::InvalidGraph { capacity });
        }
        Ok(Self {
            capacity,
            vertices: VertexList::new(),
        })
    }

    /// The declared vertex bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.edge_count()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` once `vertex_count() == capacity()`.
    pub fn is_full(&self) -> bool {
        self.vertices.len() >= self.capacity
    }

    /// The ordered vertex collection.
    pub fn vertices(&self) -> &VertexList {
        &self.vertices
    }

    /// Inserts a new vertex with `id` and `value`.
    ///
    /// # Errors
    /// See [`ValueGraph::insert`].
    pub fn insert_vertex(&mut self, id: VertexId, value: Value) -> Result<()> {
        self.insert(Vertex::new(id, value))
    }

    /// Inserts `vertex`, keeping ids ascending.
    ///
    /// Any edges the vertex already carries are discarded; edges enter the
    /// graph only through [`ValueGraph::insert_edge`].
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] for a negative id.
    /// - [`GraphError::DuplicateId`] if the id is present (checked before
    ///   capacity, so a full graph still reports duplicates as such).
    /// - [`GraphError::CapacityExceeded`] if the graph is full.
    /// - [`GraphError::OutOfMemory`] if storage cannot grow.
    ///
    /// On error the graph is unchanged.
    pub fn insert(&mut self, mut vertex: Vertex) -> Result<()> {
        let id = vertex.id();
        if id < 0 {
            return Err(GraphError::InvalidVertex { id });
        }
        if self.vertices.contains(id) {
            return Err(GraphError::DuplicateId { id });
        }
        if self.is_full() {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        vertex.edges_mut().clear();
        self.vertices.insert(vertex)?;
        trace_event!(id, count = self.vertices.len(), "vertex inserted");
        Ok(())
    }

    /// Inserts the directed edge `origin -> destination` and returns it.
    ///
    /// The edge records `destination.value` and
    /// `origin.value + destination.value` as they are now. Parallel edges are
    /// allowed; no reverse edge is added.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] naming whichever endpoint is missing
    ///   (origin checked first).
    /// - [`GraphError::ValueOverflow`] if the two values do not add up within
    ///   [`Value`]; no edge is added.
    /// - [`GraphError::OutOfMemory`] if the adjacency list cannot grow.
    pub fn insert_edge(&mut self, origin: VertexId, destination: VertexId) -> Result<Edge> {
        let origin_value = self.require_vertex(origin)?.value();
        let destination_value = self.require_vertex(destination)?.value();
        let weight = origin_value
            .checked_add(destination_value)
            .ok_or(GraphError::ValueOverflow {
                origin,
                destination,
            })?;

        let edges = self.edges_mut(origin)?;
        edges.insert(destination, destination_value, weight)?;
        trace_event!(origin, destination, weight, "edge inserted");
        Ok(Edge::new(destination, destination_value, weight))
    }

    /// Removes the first edge `origin -> destination` and returns it.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if either endpoint is missing.
    /// - [`GraphError::EdgeNotFound`] if both exist but are not connected.
    pub fn delete_edge(&mut self, origin: VertexId, destination: VertexId) -> Result<Edge> {
        self.require_vertex(origin)?;
        self.require_vertex(destination)?;
        let edge = self
            .edges_mut(origin)?
            .remove(destination)
            .ok_or(GraphError::EdgeNotFound {
                origin,
                destination,
            })?;
        trace_event!(origin, destination, "edge deleted");
        Ok(edge)
    }

    /// Removes vertex `id` together with its outgoing and incoming edges.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `id` is absent; nothing
    /// changes in that case.
    pub fn delete_vertex(&mut self, id: VertexId) -> Result<VertexRemoval> {
        let removal = self.vertices.remove(id)?;
        trace_event!(
            id,
            outgoing = removal.outgoing,
            incoming = removal.incoming,
            "vertex deleted"
        );
        Ok(removal)
    }

    /// Removes every edge that targets `id`, returning how many were removed.
    ///
    /// The vertex itself, if present, is kept along with its outgoing edges.
    pub fn purge_incoming(&mut self, id: VertexId) -> usize {
        let removed = self.vertices.purge_incoming(id);
        trace_event!(id, removed, "incoming edges purged");
        removed
    }

    /// Replaces the value of vertex `id`, returning the previous value.
    ///
    /// Existing edges keep the values they captured when they were created.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `id` is absent.
    pub fn set_vertex_value(&mut self, id: VertexId, value: Value) -> Result<Value> {
        let vertex = self
            .vertices
            .get_mut(id)
            .ok_or(GraphError::VertexNotFound { id })?;
        let previous = vertex.value();
        vertex.set_value(value);
        Ok(previous)
    }

    /// Returns `true` if vertex `id` exists.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(id)
    }

    /// Looks up vertex `id`.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Looks up vertex `id`, reporting absence as an error.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `id` is absent.
    pub fn require_vertex(&self, id: VertexId) -> Result<&Vertex> {
        self.vertices.get(id).ok_or(GraphError::VertexNotFound { id })
    }

    /// Outgoing edges of vertex `id`.
    pub fn edges(&self, id: VertexId) -> Option<&AdjacencyList> {
        self.vertices.get(id).map(Vertex::edges)
    }

    /// The first edge `origin -> destination`.
    pub fn edge(&self, origin: VertexId, destination: VertexId) -> Option<&Edge> {
        self.edges(origin)?.get(destination)
    }

    /// The first edge `origin -> destination`, reporting absence as an error.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] or [`GraphError::EdgeNotFound`].
    pub fn require_edge(&self, origin: VertexId, destination: VertexId) -> Result<&Edge> {
        self.require_vertex(origin)?.edges().require(origin, destination)
    }

    fn edges_mut(&mut self, id: VertexId) -> Result<&mut AdjacencyList> {
        self.vertices
            .get_mut(id)
            .map(Vertex::edges_mut)
            .ok_or(GraphError::VertexNotFound { id })
    }
}

impl fmt::Display for ValueGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            writeln!(f, "vertex {}: {}", vertex.id(), vertex.value())?;
            for edge in vertex.edges() {
                writeln!(
                    f,
                    "    -> {} (value {}, weight {})",
                    edge.target, edge.cached_value, edge.weight
                )?;
            }
        }
        Ok(())
    }
}
