//! Depth-first path-sum search between two vertices.
//!
//! The search enters vertices in adjacency-list order and stops at the first
//! branch that reaches the destination; no other branch is tried afterwards.
//! Visited vertices are never unmarked, so dead ends are entered at most once.
//!
//! Two aggregates are available through [`SumPolicy`]:
//! - [`SumPolicy::PathOnly`] sums the vertices on the discovered path.
//! - [`SumPolicy::Explored`] sums every vertex the search entered, dead-end
//!   branches included. On graphs where a non-productive branch is tried
//!   before the successful one this overstates the path sum; it is kept for
//!   callers that want the explored-region aggregate.

use serde::{Deserialize, Serialize};

use super::NO_PATH;
use crate::error::{GraphError, Result};
use crate::graph::access::VisitedSet;
use crate::graph::{Value, ValueGraph, VertexId};
use crate::trace::trace_event;

/// How a reachability query aggregates vertex values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SumPolicy {
    /// Sum of the vertices on the discovered path.
    #[default]
    PathOnly,
    /// Sum of every vertex entered during the search.
    Explored,
}

/// Outcome of a successful reachability query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reachability {
    /// Aggregate value, computed according to `policy`.
    pub sum: Value,
    /// The policy `sum` was computed with.
    pub policy: SumPolicy,
    /// Discovered path, origin first and destination last.
    pub path: Vec<VertexId>,
    /// Number of vertices entered by the search.
    pub explored: usize,
}

struct Frame {
    slot: usize,
    next_edge: usize,
}

impl ValueGraph {
    /// Searches for a path `origin -> destination` and aggregates values along it.
    ///
    /// A vertex always reaches itself: `origin == destination` yields that
    /// vertex's value under either policy.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if either endpoint is absent (origin
    ///   checked first).
    /// - [`GraphError::NoPathExists`] if the destination is unreachable.
    /// - [`GraphError::ValueOverflow`] if a path exists but the aggregate
    ///   chosen by `policy` does not fit in a [`Value`]. Under
    ///   [`SumPolicy::PathOnly`] only the discovered path counts, so dead ends
    ///   with huge values do not trigger it.
    pub fn reachability(
        &self,
        origin: VertexId,
        destination: VertexId,
        policy: SumPolicy,
    ) -> Result<Reachability> {
        let mut visited = VisitedSet::new(self.vertex_count());
        self.reachability_with(origin, destination, policy, &mut visited)
    }

    /// Like [`ValueGraph::reachability`], reusing a caller-owned visited set.
    ///
    /// The set is reset to the graph's size on entry; after the call it holds
    /// the slots the search entered.
    ///
    /// # Errors
    /// See [`ValueGraph::reachability`].
    pub fn reachability_with(
        &self,
        origin: VertexId,
        destination: VertexId,
        policy: SumPolicy,
        visited: &mut VisitedSet,
    ) -> Result<Reachability> {
        let vertices = self.vertices();
        let start = vertices
            .slot(origin)
            .ok_or(GraphError::VertexNotFound { id: origin })?;
        if !vertices.contains(destination) {
            return Err(GraphError::VertexNotFound { id: destination });
        }

        visited.reset(vertices.len());
        visited.mark(start);
        let mut explored = 1usize;
        // `None` once the explored aggregate no longer fits in a `Value`.
        let mut explored_sum = Some(vertices.at_slot(start).value());
        let mut stack = vec![Frame {
            slot: start,
            next_edge: 0,
        }];
        let mut found = origin == destination;

        while !found {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let vertex = vertices.at_slot(frame.slot);
            let Some(edge) = vertex.edges().as_slice().get(frame.next_edge) else {
                stack.pop();
                continue;
            };
            frame.next_edge += 1;

            let Some(child) = vertices.slot(edge.target) else {
                continue;
            };
            if !visited.try_visit(child) {
                continue;
            }
            explored += 1;
            explored_sum =
                explored_sum.and_then(|sum| sum.checked_add(vertices.at_slot(child).value()));
            stack.push(Frame {
                slot: child,
                next_edge: 0,
            });
            found = edge.target == destination;
        }

        if !found {
            trace_event!(origin, destination, explored, "no path");
            return Err(GraphError::NoPathExists {
                origin,
                destination,
            });
        }

        let overflow = GraphError::ValueOverflow {
            origin,
            destination,
        };
        let path: Vec<VertexId> = stack
            .iter()
            .map(|f| vertices.at_slot(f.slot).id())
            .collect();
        let sum: Value = match policy {
            SumPolicy::PathOnly => stack
                .iter()
                .try_fold(0, |sum: Value, f| {
                    sum.checked_add(vertices.at_slot(f.slot).value())
                })
                .ok_or(overflow)?,
            SumPolicy::Explored => explored_sum.ok_or(overflow)?,
        };
        trace_event!(origin, destination, sum, explored, "path found");
        Ok(Reachability {
            sum,
            policy,
            path,
            explored,
        })
    }

    /// Sum of the vertex values along the discovered path `origin -> destination`.
    ///
    /// # Errors
    /// See [`ValueGraph::reachability`].
    pub fn path_sum(&self, origin: VertexId, destination: VertexId) -> Result<Value> {
        self.reachability(origin, destination, SumPolicy::PathOnly)
            .map(|r| r.sum)
    }

    /// Sentinel form of the query: the aggregate on success, [`NO_PATH`] when
    /// an endpoint is missing or the destination is unreachable.
    pub fn path_sum_or_sentinel(
        &self,
        origin: VertexId,
        destination: VertexId,
        policy: SumPolicy,
    ) -> Value {
        self.reachability(origin, destination, policy)
            .map_or(NO_PATH, |r| r.sum)
    }

    /// Returns `true` if both endpoints exist and `destination` is reachable.
    ///
    /// A path whose sum overflows still counts as a path.
    pub fn has_path(&self, origin: VertexId, destination: VertexId) -> bool {
        matches!(
            self.reachability(origin, destination, SumPolicy::PathOnly),
            Ok(_) | Err(GraphError::ValueOverflow { .. })
        )
    }
}
