//! Integration tests for graph construction, mutation and both searches.

use valgraph::graph::sample::sample_grid;
use valgraph::{
    GraphError, SumPolicy, Value, ValueGraph, VertexId, VisitedSet, DEFAULT_CAPACITY, NO_PATH,
};

fn build(vertices: &[(VertexId, Value)], edges: &[(VertexId, VertexId)]) -> ValueGraph {
    let mut graph = ValueGraph::new(DEFAULT_CAPACITY).unwrap();
    for &(id, value) in vertices {
        graph.insert_vertex(id, value).unwrap();
    }
    for &(origin, destination) in edges {
        graph.insert_edge(origin, destination).unwrap();
    }
    graph
}

#[test]
fn test_three_vertex_chain_scenario() {
    let graph = build(&[(1, 7), (2, 53), (3, 183)], &[(1, 2), (2, 3)]);

    assert_eq!(graph.path_sum(1, 3).unwrap(), 243);
    assert_eq!(graph.path_sum_or_sentinel(1, 3, SumPolicy::Explored), 243);

    let best = graph.max_path();
    assert_eq!(best.sum, 243);
    assert_eq!(best.terminal, Some(3));
    assert_eq!(best.path, vec![1, 2, 3]);
}

#[test]
fn test_duplicate_insert_keeps_count() {
    let mut graph = build(&[(1, 7), (2, 53)], &[]);
    assert_eq!(
        graph.insert_vertex(2, 999).unwrap_err(),
        GraphError::DuplicateId { id: 2 }
    );
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.vertex(2).unwrap().value(), 53);
}

#[test]
fn test_edge_weight_is_a_snapshot() {
    let mut graph = build(&[(1, 10), (2, 20)], &[(1, 2)]);
    graph.set_vertex_value(1, -4).unwrap();
    graph.set_vertex_value(2, 500).unwrap();

    let edge = graph.require_edge(1, 2).unwrap();
    assert_eq!(edge.cached_value, 20);
    assert_eq!(edge.weight, 30);
}

#[test]
fn test_edges_are_directed() {
    let graph = build(&[(1, 1), (2, 2)], &[(1, 2)]);
    assert!(graph.edge(1, 2).is_some());
    assert!(graph.edge(2, 1).is_none());
    assert_eq!(
        graph.path_sum(2, 1).unwrap_err(),
        GraphError::NoPathExists { origin: 2, destination: 1 }
    );
}

#[test]
fn test_failed_deletions_leave_graph_unchanged() {
    let mut graph = build(&[(1, 1), (2, 2), (3, 3)], &[(1, 2), (2, 3)]);
    let before = graph.clone();

    let err = graph.delete_vertex(9).unwrap_err();
    assert!(err.is_not_found());
    let err = graph.delete_edge(1, 3).unwrap_err();
    assert!(err.is_not_found());
    let err = graph.delete_edge(1, 9).unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(graph, before);
}

#[test]
fn test_delete_vertex_purges_incoming_edges() {
    let mut graph = build(
        &[(1, 1), (2, 2), (3, 3), (4, 4)],
        &[(1, 3), (2, 3), (4, 3), (3, 1), (1, 2)],
    );
    let removal = graph.delete_vertex(3).unwrap();
    assert_eq!(removal.outgoing, 1);
    assert_eq!(removal.incoming, 3);

    for vertex in graph.vertices() {
        assert!(!vertex.edges().contains(3), "vertex {} still points at 3", vertex.id());
    }
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_path(1, 2));
}

#[test]
fn test_delete_head_vertex() {
    let mut graph = build(&[(1, 1), (2, 2)], &[(1, 2), (2, 1)]);
    graph.delete_vertex(1).unwrap();
    assert_eq!(graph.vertices().ids().collect::<Vec<_>>(), vec![2]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_purge_incoming_keeps_vertex() {
    let mut graph = build(&[(1, 1), (2, 2), (3, 3)], &[(1, 3), (2, 3), (3, 1)]);
    assert_eq!(graph.purge_incoming(3), 2);
    assert!(graph.contains_vertex(3));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.edge(3, 1).is_some());
}

#[test]
fn test_reinserted_vertex_starts_without_edges() {
    let mut graph = build(&[(1, 1), (2, 2)], &[(1, 2), (2, 1)]);
    graph.delete_vertex(2).unwrap();
    graph.insert_vertex(2, 50).unwrap();
    assert!(graph.edges(2).unwrap().is_empty());
    assert!(!graph.has_path(1, 2));
}

#[test]
fn test_capacity_bound() {
    let mut graph = ValueGraph::new(1).unwrap();
    graph.insert_vertex(0, 1).unwrap();
    assert_eq!(
        graph.insert_vertex(1, 1).unwrap_err(),
        GraphError::CapacityExceeded { capacity: 1 }
    );
    // Freed room can be reused.
    graph.delete_vertex(0).unwrap();
    graph.insert_vertex(1, 1).unwrap();
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_large_values_report_overflow() {
    let half = Value::MAX / 2 + 1;
    let mut graph = build(&[(1, half), (2, 0), (3, half)], &[(1, 2), (2, 3)]);

    assert_eq!(
        graph.path_sum(1, 3).unwrap_err(),
        GraphError::ValueOverflow { origin: 1, destination: 3 }
    );
    assert!(graph.has_path(1, 3));

    let best = graph.max_path();
    assert_eq!(best.sum, half);
    assert_eq!(best.path, vec![1]);

    graph.set_vertex_value(2, Value::MAX).unwrap();
    assert_eq!(
        graph.insert_edge(1, 2).unwrap_err(),
        GraphError::ValueOverflow { origin: 1, destination: 2 }
    );
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_caller_visited_set_of_any_size() {
    let graph = build(&[(1, 1), (2, 2), (3, 3)], &[(1, 2), (2, 3)]);
    for len in [0, 1, 64] {
        let mut visited = VisitedSet::new(len);
        let found = graph
            .reachability_with(1, 3, SumPolicy::PathOnly, &mut visited)
            .unwrap();
        assert_eq!(found.sum, 6);
        assert_eq!(visited.len(), 3);

        assert_eq!(graph.max_path_with(&mut visited).sum, 6);
        assert_eq!(visited.count(), 0);
    }
}

#[test]
fn test_sample_grid_reachability() {
    let graph = sample_grid().unwrap();

    let path_only = graph.reachability(1, 8, SumPolicy::PathOnly).unwrap();
    assert_eq!(path_only.path, vec![1, 2, 3, 8]);
    assert_eq!(path_only.sum, 7 + 53 + 183 + 563);

    // The explored aggregate includes every dead end tried before 3 -> 8.
    let explored = graph.reachability(1, 8, SumPolicy::Explored).unwrap();
    assert_eq!(explored.path, path_only.path);
    assert_eq!(explored.explored, 14);
    assert_eq!(explored.sum, 6816);

    assert_eq!(graph.path_sum_or_sentinel(3, 16, SumPolicy::PathOnly), NO_PATH);
    assert_eq!(graph.path_sum(7, 7).unwrap(), 383);
}

#[test]
fn test_sample_grid_max_path() {
    let graph = sample_grid().unwrap();
    let best = graph.max_path();

    assert_eq!(best.sum, 4771);
    assert_eq!(best.terminal, Some(25));
    assert_eq!(best.path, vec![1, 6, 7, 8, 13, 18, 19, 20, 25]);

    let recomputed: Value = best
        .path
        .iter()
        .map(|&id| graph.vertex(id).unwrap().value())
        .sum();
    assert_eq!(recomputed, best.sum);
}

#[test]
fn test_searches_share_graph_concurrently() {
    let graph = sample_grid().unwrap();
    let expected = graph.max_path();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (graph.max_path(), graph.path_sum(1, 25).unwrap())))
            .collect();
        for handle in handles {
            let (best, sum) = handle.join().unwrap();
            assert_eq!(best, expected);
            assert_eq!(sum, 4347);
        }
    });
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_max_path_matches_sequential() {
    let graph = sample_grid().unwrap();
    assert_eq!(graph.max_path_par(), graph.max_path());
}

#[test]
fn test_results_serialize() {
    let graph = build(&[(1, 5), (2, 100)], &[(1, 2)]);
    let json = serde_json::to_value(graph.max_path()).unwrap();
    assert_eq!(json["sum"], 105);
    assert_eq!(json["terminal"], 2);
    assert_eq!(json["path"], serde_json::json!([1, 2]));

    let json = serde_json::to_value(graph.reachability(1, 2, SumPolicy::Explored).unwrap()).unwrap();
    assert_eq!(json["policy"], "explored");
}
