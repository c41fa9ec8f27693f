//! The ordered vertex collection.
//!
//! [`VertexList`] owns every [`Vertex`] and keeps them strictly ascending by
//! id with no duplicates. Each vertex owns its [`AdjacencyList`]; edges refer
//! to other vertices by id only, never by reference.
//!
//! A vertex's position in the list (its *slot*) is stable for as long as the
//! list is borrowed immutably, which is what the searches rely on to key their
//! visited markers.

use serde::Serialize;

use super::adjacency::AdjacencyList;
use super::{Value, VertexId};
use crate::error::{GraphError, Result};

/// A graph node: a unique id, an integer value and its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    id: VertexId,
    value: Value,
    edges: AdjacencyList,
}

impl Vertex {
    /// Creates a vertex with no edges.
    pub fn new(id: VertexId, value: Value) -> Self {
        Self {
            id,
            value,
            edges: AdjacencyList::new(),
        }
    }

    /// The vertex id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The vertex value.
    pub fn value(&self) -> Value {
        self.value
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &AdjacencyList {
        &self.edges
    }

    pub(crate) fn edges_mut(&mut self) -> &mut AdjacencyList {
        &mut self.edges
    }

    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }
}

/// What a cascading vertex removal took out of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VertexRemoval {
    /// Id of the removed vertex.
    pub id: VertexId,
    /// Its value at removal time.
    pub value: Value,
    /// Outgoing edges dropped with it.
    pub outgoing: usize,
    /// Edges in other vertices' lists that pointed at it.
    pub incoming: usize,
}

/// Vertices ordered strictly ascending by id.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `contains` / `get` / `slot` | \(O(\log n)\) | Binary search on id |
/// | `insert` | \(O(n)\) | Shifts later vertices |
/// | `remove` | \(O(n + m)\) | Purges incoming edges everywhere |
/// | `purge_incoming` | \(O(n + m)\) | Scans every adjacency list |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VertexList {
    vertices: Vec<Vertex>,
}

impl VertexList {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns `true` if a vertex with `id` exists.
    pub fn contains(&self, id: VertexId) -> bool {
        self.slot(id).is_some()
    }

    /// Returns the vertex with `id`.
    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.slot(id).map(|s| &self.vertices[s])
    }

    pub(crate) fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        let slot = self.slot(id)?;
        Some(&mut self.vertices[slot])
    }

    /// Position of `id` in ascending order.
    pub fn slot(&self, id: VertexId) -> Option<usize> {
        self.vertices.binary_search_by_key(&id, Vertex::id).ok()
    }

    /// The vertex at position `slot`.
    pub fn at(&self, slot: usize) -> Option<&Vertex> {
        self.vertices.get(slot)
    }

    /// The vertex at a slot taken from [`VertexList::slot`] on this list
    /// during the current borrow.
    ///
    /// # Panics
    /// If `slot` is out of range, i.e. it did not come from this list.
    #[inline]
    pub(crate) fn at_slot(&self, slot: usize) -> &Vertex {
        &self.vertices[slot]
    }

    /// Inserts `vertex` at the position that keeps ids ascending.
    ///
    /// Returns the slot it landed in.
    ///
    /// # Errors
    /// - [`GraphError::DuplicateId`] if the id is already present; nothing is
    ///   overwritten.
    /// - [`GraphError::OutOfMemory`] if the collection cannot grow.
    pub fn insert(&mut self, vertex: Vertex) -> Result<usize> {
        match self.vertices.binary_search_by_key(&vertex.id, Vertex::id) {
            Ok(_) => Err(GraphError::DuplicateId { id: vertex.id }),
            Err(slot) => {
                self.vertices.try_reserve(1)?;
                self.vertices.insert(slot, vertex);
                Ok(slot)
            }
        }
    }

    /// Removes the vertex with `id` and every edge touching it.
    ///
    /// The vertex's own outgoing edges are dropped, every other vertex's
    /// edges towards `id` are purged, then the vertex is unlinked. This holds
    /// wherever the vertex sits in the ordering.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `id` is absent; the
    /// collection is unchanged.
    pub fn remove(&mut self, id: VertexId) -> Result<VertexRemoval> {
        let slot = self.slot(id).ok_or(GraphError::VertexNotFound { id })?;
        let mut vertex = self.vertices.remove(slot);
        let outgoing = vertex.edges.len();
        vertex.edges.clear();
        let incoming = self.purge_incoming(id);
        Ok(VertexRemoval {
            id,
            value: vertex.value,
            outgoing,
            incoming,
        })
    }

    /// Removes every edge, in every vertex's list, that points at `id`.
    ///
    /// Returns the number of edges removed. `id` does not need to exist.
    pub fn purge_incoming(&mut self, id: VertexId) -> usize {
        self.vertices
            .iter_mut()
            .map(|v| v.edges.remove_all_targeting(id))
            .sum()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in ascending id order.
    pub fn iter(&self) -> core::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    /// Total number of edges over all vertices.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum()
    }

    /// Checks that ids are strictly ascending.
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        self.vertices.windows(2).all(|w| w[0].id < w[1].id)
    }
}

impl<'a> IntoIterator for &'a VertexList {
    type Item = &'a Vertex;
    type IntoIter = core::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(ids: &[VertexId]) -> VertexList {
        let mut list = VertexList::new();
        for &id in ids {
            list.insert(Vertex::new(id, id * 10)).unwrap();
        }
        list
    }

    #[test]
    fn insert_keeps_ids_ascending() {
        // Head, tail and middle placements.
        let list = list_of(&[5, 1, 9, 3, 7]);
        assert_eq!(list.ids().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
        #[cfg(debug_assertions)]
        assert!(list.validate_invariants());
    }

    #[test]
    fn insert_reports_slot() {
        let mut list = list_of(&[2, 6]);
        assert_eq!(list.insert(Vertex::new(4, 0)).unwrap(), 1);
        assert_eq!(list.insert(Vertex::new(0, 0)).unwrap(), 0);
        assert_eq!(list.insert(Vertex::new(8, 0)).unwrap(), 4);
    }

    #[test]
    fn duplicate_insert_is_rejected_without_overwrite() {
        let mut list = list_of(&[1, 2]);
        let err = list.insert(Vertex::new(2, 999)).unwrap_err();
        assert_eq!(err, GraphError::DuplicateId { id: 2 });
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(2).unwrap().value(), 20);
    }

    #[test]
    fn remove_cascades_from_any_position() {
        let mut list = list_of(&[1, 2, 3]);
        // 1 -> 2, 3 -> 2, 2 -> 3, 2 -> 1
        list.get_mut(1).unwrap().edges_mut().insert(2, 20, 30).unwrap();
        list.get_mut(3).unwrap().edges_mut().insert(2, 20, 50).unwrap();
        list.get_mut(2).unwrap().edges_mut().insert(3, 30, 50).unwrap();
        list.get_mut(2).unwrap().edges_mut().insert(1, 10, 30).unwrap();

        // 2 is neither head nor tail.
        let removal = list.remove(2).unwrap();
        assert_eq!(removal.outgoing, 2);
        assert_eq!(removal.incoming, 2);
        assert_eq!(removal.value, 20);
        assert_eq!(list.ids().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(list.edge_count(), 0);
    }

    #[test]
    fn remove_missing_vertex_leaves_list_untouched() {
        let mut list = list_of(&[1, 3]);
        list.get_mut(1).unwrap().edges_mut().insert(3, 30, 40).unwrap();
        let before = list.clone();

        assert_eq!(list.remove(2).unwrap_err(), GraphError::VertexNotFound { id: 2 });
        assert_eq!(list, before);
    }

    #[test]
    fn purge_incoming_ignores_unknown_ids() {
        let mut list = list_of(&[1]);
        assert_eq!(list.purge_incoming(42), 0);
    }
}
