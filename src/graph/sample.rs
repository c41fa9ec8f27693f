//! The fixed 5×5 demonstration grid.
//!
//! Vertices `1..=25` are laid out row-major. Each vertex has an edge to its
//! right-hand neighbour (rows) and one to the vertex below it (columns), so
//! every path runs right or down.

use super::{Value, ValueGraph, VertexId, DEFAULT_CAPACITY};
use crate::error::Result;

/// Side length of the grid.
pub const GRID_SIDE: VertexId = 5;

/// Vertex values, row-major, for ids `1..=25`.
pub const GRID_VALUES: [Value; 25] = [
    7, 53, 183, 439, 863, //
    497, 383, 563, 79, 973, //
    287, 63, 343, 169, 583, //
    627, 343, 773, 959, 943, //
    767, 473, 103, 699, 303,
];

/// Builds the grid: all row edges first, then all column edges.
///
/// # Errors
/// Propagates insertion failures, which only occur if storage cannot grow.
pub fn sample_grid() -> Result<ValueGraph> {
    let mut graph = ValueGraph::new(DEFAULT_CAPACITY)?;
    for (id, &value) in (1..).zip(GRID_VALUES.iter()) {
        graph.insert_vertex(id, value)?;
    }

    for row in 0..GRID_SIDE {
        for col in 1..GRID_SIDE {
            let id = row * GRID_SIDE + col;
            graph.insert_edge(id, id + 1)?;
        }
    }
    for col in 1..=GRID_SIDE {
        for row in 0..GRID_SIDE - 1 {
            let id = row * GRID_SIDE + col;
            graph.insert_edge(id, id + GRID_SIDE)?;
        }
    }
    Ok(graph)
}
