/// Dijkstra's algorithm
use super::{ids_of, join_labels, resolve_endpoints, walk_parents, PATH_SEPARATOR};
use crate::{
    algorithms::algorithm_result::{AlgorithmMetrics, AlgorithmResult},
    core::adj::Adjacency,
    db::trace::{StepExtras, TraceRecorder},
};
use graphstep_api::core::{entities::Graph, EdgeState, NodeState};
use indexmap::IndexMap;
use tracing::debug;

fn metrics() -> AlgorithmMetrics {
    AlgorithmMetrics::new("O(V² + E)", "O(V)")
}

fn distance_table(graph: &Graph, distances: &[f64]) -> IndexMap<String, f64> {
    graph
        .node_ids()
        .zip(distances)
        .map(|(id, d)| (id.to_string(), *d))
        .collect()
}

/// Position of the unvisited node with the strictly smallest finite distance.
/// Ties go to the node that comes first in node order.
fn closest_unvisited(distances: &[f64], unvisited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut min = f64::INFINITY;
    for (node, (d, open)) in distances.iter().zip(unvisited).enumerate() {
        if *open && *d < min {
            min = *d;
            best = Some(node);
        }
    }
    best
}

/// Finds the minimum-weight path from `source` to `target`.
///
/// Edges without a weight count as 1. The next node to settle is picked by a
/// linear scan over the unvisited nodes, so distance ties resolve to node
/// order and every settled node produces exactly one "visiting" step.
///
/// # Arguments
///
/// * `graph`: The graph to search in.
/// * `source`: Id of the start node.
/// * `target`: Id of the node to reach.
///
/// # Returns
///
/// An [`AlgorithmResult`]; every step carries the distance table, with
/// unreached nodes at `f64::INFINITY`.
pub fn dijkstra(graph: &Graph, source: &str, target: &str) -> AlgorithmResult {
    let (src, dst) = match resolve_endpoints(graph, source, target, metrics()) {
        Ok(endpoints) => endpoints,
        Err(result) => return result,
    };
    debug!(source, target, "running dijkstra");

    let n = graph.count_nodes();
    let adj = Adjacency::traversal(graph);
    let mut trace = TraceRecorder::for_traversal(graph);
    let mut distances = vec![f64::INFINITY; n];
    let mut parents: Vec<Option<usize>> = vec![None; n];
    let mut unvisited = vec![true; n];
    let mut visited_nodes = 0;
    let mut visited_edges = 0;
    distances[src] = 0.0;

    trace.set_node_at(src, NodeState::Source);
    trace.set_node_at(dst, NodeState::Target);
    trace.record_with(
        format!(
            "Starting Dijkstra from '{}'. All distances initialized to ∞ except source (0)",
            graph.label_at(src)
        ),
        StepExtras::distances(distance_table(graph, &distances)),
    );

    while let Some(current) = closest_unvisited(&distances, &unvisited) {
        visited_nodes += 1;
        if current == dst {
            let path = walk_parents(&parents, dst);
            let ids = ids_of(graph, &path);
            trace.mark_path(&ids, !graph.is_directed());
            trace.record_with(
                format!(
                    "Shortest path found! Total distance: {}. Path: {}",
                    distances[dst],
                    join_labels(graph, &path, PATH_SEPARATOR)
                ),
                StepExtras::distances(distance_table(graph, &distances)),
            );
            let length = ids.len() - 1;
            return AlgorithmResult::found(trace.finish(), ids).with_metrics(
                metrics()
                    .visited(visited_nodes, visited_edges)
                    .path_length(Some(length)),
            );
        }

        unvisited[current] = false;
        trace.set_interior_at(current, NodeState::Visiting);
        trace.record_with(
            format!(
                "Visiting '{}' (distance: {})",
                graph.label_at(current),
                distances[current]
            ),
            StepExtras {
                current_nodes: Some(vec![graph.id_at(current).to_string()]),
                ..StepExtras::distances(distance_table(graph, &distances))
            },
        );

        for neighbour in adj.neighbours(current) {
            let next = neighbour.node;
            if !unvisited[next] {
                continue;
            }
            visited_edges += 1;
            trace.set_edge(graph.id_at(current), graph.id_at(next), EdgeState::Exploring);
            let candidate = distances[current] + neighbour.weight;
            if candidate < distances[next] {
                distances[next] = candidate;
                parents[next] = Some(current);
                trace.record_with(
                    format!(
                        "Updated distance to '{}': {} (via '{}')",
                        graph.label_at(next),
                        candidate,
                        graph.label_at(current)
                    ),
                    StepExtras::distances(distance_table(graph, &distances)),
                );
            }
        }

        trace.set_interior_at(current, NodeState::Visited);
    }

    trace.record("No path exists - remaining nodes unreachable");
    AlgorithmResult::not_found(trace.finish())
        .with_metrics(metrics().visited(visited_nodes, visited_edges))
}
