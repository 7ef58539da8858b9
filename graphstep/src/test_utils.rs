//! Small graph builders shared by unit tests, integration tests and benches.
use graphstep_api::core::entities::{Edge, Graph};

/// A graph with one edge per `(source, target)` pair; nodes are created on
/// first mention, labelled with their ids.
pub fn graph_from_edges(directed: bool, edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new(directed);
    for (source, target) in edges {
        graph.add_edge_with_nodes(Edge::new(*source, *target));
    }
    graph
}

pub fn weighted_graph_from_edges(directed: bool, edges: &[(&str, &str, f64)]) -> Graph {
    let mut graph = Graph::new(directed);
    for (source, target, weight) in edges {
        graph.add_edge_with_nodes(Edge::weighted(*source, *target, *weight));
    }
    graph
}

/// Every edge of `path` exists in `graph`, honouring direction.
pub fn is_valid_path(graph: &Graph, path: &[String]) -> bool {
    path.windows(2).all(|pair| {
        graph.edges().iter().any(|e| {
            (e.source == pair[0] && e.target == pair[1])
                || (!graph.is_directed() && e.source == pair[1] && e.target == pair[0])
        })
    })
}

/// Sum of the cheapest edge weight between consecutive nodes of `path`.
pub fn path_weight(graph: &Graph, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .edges()
                .iter()
                .filter(|e| {
                    (e.source == pair[0] && e.target == pair[1])
                        || (!graph.is_directed() && e.source == pair[1] && e.target == pair[0])
                })
                .map(|e| e.weight())
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}
