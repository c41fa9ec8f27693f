//! Exhaustive backtracking search for the highest-value simple path.
//!
//! Every vertex, in ascending id order, is tried as a path root. From a root
//! the search walks outgoing edges in list order, marking a vertex on entry
//! and unmarking it on exit, so a vertex is excluded only while it lies on the
//! current path. The running sum covers exactly the current path.
//!
//! The best record starts at `0` and is replaced only by a strictly greater
//! sum, so the first path found with the maximum sum wins and a graph whose
//! values are all `<= 0` reports an empty result.
//!
//! A step whose running sum would overflow [`Value`] is not taken: that
//! branch is pruned and the search goes on with the next edge, so the result
//! is the best path whose sum fits.
//!
//! Worst-case time is exponential in the vertex count: every simple path from
//! every root is enumerated.

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::access::VisitedSet;
use crate::graph::{Value, ValueGraph, VertexId, VertexList};
use crate::trace::trace_event;

/// The best path found by a maximum-path search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaxPath {
    /// Sum of vertex values along `path`; `0` when nothing beat the start value.
    pub sum: Value,
    /// Last vertex of the best path.
    pub terminal: Option<VertexId>,
    /// The best path, root first and `terminal` last.
    pub path: Vec<VertexId>,
}

impl MaxPath {
    /// Returns `true` if no path improved on the initial sum of `0`.
    pub fn is_empty(&self) -> bool {
        self.terminal.is_none()
    }

    /// Takes `candidate` if its sum is strictly greater.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn absorb(&mut self, candidate: MaxPath) {
        if candidate.sum > self.sum {
            *self = candidate;
        }
    }
}

struct Frame {
    slot: usize,
    next_edge: usize,
    sum: Value,
}

/// Per-root traversal state: the frame stack and the ids on the current path.
struct Walk<'a> {
    vertices: &'a VertexList,
    stack: Vec<Frame>,
    path: Vec<VertexId>,
}

impl<'a> Walk<'a> {
    fn new(vertices: &'a VertexList) -> Self {
        Self {
            vertices,
            stack: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Puts `slot` on the current path and records it if it beats `best`.
    ///
    /// Leaves `slot` off the path if the sum would overflow.
    fn enter(&mut self, slot: usize, parent_sum: Value, visited: &mut VisitedSet, best: &mut MaxPath) {
        let vertices = self.vertices;
        let vertex = vertices.at_slot(slot);
        let Some(sum) = parent_sum.checked_add(vertex.value()) else {
            trace_event!(parent_sum, vertex = vertex.id(), "branch pruned on overflow");
            return;
        };
        visited.mark(slot);
        self.path.push(vertex.id());
        if sum > best.sum {
            best.sum = sum;
            best.terminal = Some(vertex.id());
            best.path.clone_from(&self.path);
            trace_event!(sum, terminal = vertex.id(), "new best path");
        }
        self.stack.push(Frame {
            slot,
            next_edge: 0,
            sum,
        });
    }

    /// Backtracking DFS from `root`, updating `best` in place.
    ///
    /// `visited` must be sized to the vertex list and clear on entry; it is
    /// clear again on return.
    fn run(mut self, root: usize, visited: &mut VisitedSet, best: &mut MaxPath) {
        let vertices = self.vertices;
        self.enter(root, 0, visited, best);

        while let Some(frame) = self.stack.last_mut() {
            let Some(edge) = vertices
                .at_slot(frame.slot)
                .edges()
                .as_slice()
                .get(frame.next_edge)
            else {
                let slot = frame.slot;
                self.stack.pop();
                self.path.pop();
                visited.unmark(slot);
                continue;
            };
            frame.next_edge += 1;
            let parent_sum = frame.sum;

            if let Some(child) = vertices.slot(edge.target) {
                if !visited.is_visited(child) {
                    self.enter(child, parent_sum, visited, best);
                }
            }
        }
    }
}

fn search_root(vertices: &VertexList, root: usize, visited: &mut VisitedSet, best: &mut MaxPath) {
    Walk::new(vertices).run(root, visited, best);
}

impl ValueGraph {
    /// Finds the highest-value path over all start vertices.
    pub fn max_path(&self) -> MaxPath {
        let mut visited = VisitedSet::new(self.vertex_count());
        self.max_path_with(&mut visited)
    }

    /// Like [`ValueGraph::max_path`], reusing a caller-owned visited set.
    ///
    /// The set is reset to the graph's size on entry and is clear on return.
    pub fn max_path_with(&self, visited: &mut VisitedSet) -> MaxPath {
        let vertices = self.vertices();
        visited.reset(vertices.len());
        let mut best = MaxPath::default();
        for root in 0..vertices.len() {
            search_root(vertices, root, visited, &mut best);
        }
        trace_event!(sum = best.sum, terminal = ?best.terminal, "max path search finished");
        best
    }

    /// Finds the highest-value path that starts at `root`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `root` is absent.
    pub fn max_path_from(&self, root: VertexId) -> Result<MaxPath> {
        let vertices = self.vertices();
        let slot = vertices
            .slot(root)
            .ok_or(GraphError::VertexNotFound { id: root })?;
        let mut visited = VisitedSet::new(vertices.len());
        let mut best = MaxPath::default();
        search_root(vertices, slot, &mut visited, &mut best);
        Ok(best)
    }

    /// Parallel [`ValueGraph::max_path`]: each root is searched on its own
    /// visited set and the per-root results are merged in root order, giving
    /// the same answer as the sequential search.
    #[cfg(feature = "parallel")]
    pub fn max_path_par(&self) -> MaxPath {
        use rayon::prelude::*;

        let vertices = self.vertices();
        let per_root: Vec<MaxPath> = (0..vertices.len())
            .into_par_iter()
            .map(|root| {
                let mut visited = VisitedSet::new(vertices.len());
                let mut best = MaxPath::default();
                search_root(vertices, root, &mut visited, &mut best);
                best
            })
            .collect();

        let mut best = MaxPath::default();
        for candidate in per_root {
            best.absorb(candidate);
        }
        best
    }
}
