//! Unweighted shortest path by breadth-first search.
use super::{ids_of, join_labels, resolve_endpoints, walk_parents, PATH_SEPARATOR};
use crate::{
    algorithms::algorithm_result::{AlgorithmMetrics, AlgorithmResult},
    core::adj::Adjacency,
    db::trace::{StepExtras, TraceRecorder},
};
use graphstep_api::core::{entities::Graph, EdgeState, NodeState};
use std::collections::VecDeque;
use tracing::debug;

fn metrics() -> AlgorithmMetrics {
    AlgorithmMetrics::new("O(V + E)", "O(V)")
}

/// Finds a path with the fewest edges from `source` to `target`.
///
/// The search stops as soon as `target` is first discovered, which is already
/// minimal in hop count.
///
/// # Arguments
///
/// * `graph`: The graph to search in. Undirected graphs are traversed both ways.
/// * `source`: Id of the start node.
/// * `target`: Id of the node to reach.
///
/// # Returns
///
/// An [`AlgorithmResult`] with one step per dequeued node.
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> AlgorithmResult {
    let (src, dst) = match resolve_endpoints(graph, source, target, metrics()) {
        Ok(endpoints) => endpoints,
        Err(result) => return result,
    };
    debug!(source, target, "running bfs shortest path");

    let adj = Adjacency::traversal(graph);
    let mut trace = TraceRecorder::for_traversal(graph);
    let mut parents: Vec<Option<usize>> = vec![None; graph.count_nodes()];
    let mut seen = vec![false; graph.count_nodes()];
    let mut queue = VecDeque::from([src]);
    seen[src] = true;
    let mut visited_nodes = 1;
    let mut visited_edges = 0;

    trace.set_node_at(src, NodeState::Source);
    trace.set_node_at(dst, NodeState::Target);
    trace.record(format!("Starting BFS from '{}'", graph.label_at(src)));

    while let Some(current) = queue.pop_front() {
        trace.set_interior_at(current, NodeState::Visiting);
        trace.record_with(
            format!(
                "Visiting '{}'. Queue: [{}]",
                graph.label_at(current),
                join_labels(graph, &queue, ", ")
            ),
            StepExtras::current(graph.id_at(current)),
        );

        for neighbour in adj.neighbours(current) {
            visited_edges += 1;
            let next = neighbour.node;
            if seen[next] {
                continue;
            }
            seen[next] = true;
            visited_nodes += 1;
            parents[next] = Some(current);
            queue.push_back(next);
            trace.set_edge(graph.id_at(current), graph.id_at(next), EdgeState::Exploring);

            if next == dst {
                let path = walk_parents(&parents, dst);
                let ids = ids_of(graph, &path);
                trace.mark_path(&ids, !graph.is_directed());
                trace.record(format!(
                    "Shortest path found! Length: {} edges. Path: {}",
                    path.len() - 1,
                    join_labels(graph, &path, PATH_SEPARATOR)
                ));
                let length = ids.len() - 1;
                return AlgorithmResult::found(trace.finish(), ids).with_metrics(
                    metrics()
                        .visited(visited_nodes, visited_edges)
                        .path_length(Some(length)),
                );
            }
        }

        trace.set_interior_at(current, NodeState::Visited);
    }

    trace.record("No path exists");
    AlgorithmResult::not_found(trace.finish())
        .with_metrics(metrics().visited(visited_nodes, visited_edges))
}
