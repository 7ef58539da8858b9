//! Depth-first search for any path between two nodes.
use super::{ids_of, join_labels, resolve_endpoints, PATH_SEPARATOR};
use crate::{
    algorithms::algorithm_result::{AlgorithmMetrics, AlgorithmResult},
    core::adj::Adjacency,
    db::trace::{StepExtras, TraceRecorder},
};
use graphstep_api::core::{entities::Graph, EdgeState, NodeState};
use tracing::debug;

fn metrics() -> AlgorithmMetrics {
    AlgorithmMetrics::new("O(V + E)", "O(V)")
}

/// A suspended call: the node being explored and how far through its
/// neighbour list the search has got.
struct Frame {
    node: usize,
    cursor: usize,
}

struct Search<'a> {
    graph: &'a Graph,
    adj: Adjacency,
    trace: TraceRecorder,
    visited: Vec<bool>,
    path: Vec<usize>,
    visited_nodes: usize,
    visited_edges: usize,
}

impl Search<'_> {
    fn enter(&mut self, node: usize) {
        self.visited[node] = true;
        self.visited_nodes += 1;
        self.path.push(node);
        self.trace.set_interior_at(node, NodeState::Visiting);
        self.trace.record_with(
            format!(
                "Visiting '{}'. Stack: [{}]",
                self.graph.label_at(node),
                join_labels(self.graph, &self.path, ", ")
            ),
            StepExtras::current(self.graph.id_at(node)),
        );
    }

    /// Advances `frame` to its next unvisited neighbour.
    fn next_unvisited(&mut self, frame: &mut Frame) -> Option<usize> {
        let neighbours = self.adj.neighbours(frame.node);
        while let Some(neighbour) = neighbours.get(frame.cursor) {
            frame.cursor += 1;
            self.visited_edges += 1;
            if !self.visited[neighbour.node] {
                return Some(neighbour.node);
            }
        }
        None
    }
}

/// Returns the first path to `target` in depth-first order.
///
/// The path is not necessarily the shortest. Uses an explicit stack of frames,
/// so deep graphs do not grow the call stack.
pub fn dfs(graph: &Graph, source: &str, target: &str) -> AlgorithmResult {
    let (src, dst) = match resolve_endpoints(graph, source, target, metrics()) {
        Ok(endpoints) => endpoints,
        Err(result) => return result,
    };
    debug!(source, target, "running dfs");

    let mut search = Search {
        graph,
        adj: Adjacency::traversal(graph),
        trace: TraceRecorder::for_traversal(graph),
        visited: vec![false; graph.count_nodes()],
        path: vec![],
        visited_nodes: 0,
        visited_edges: 0,
    };
    search.trace.set_node_at(src, NodeState::Source);
    search.trace.set_node_at(dst, NodeState::Target);
    search
        .trace
        .record(format!("Starting DFS from '{}'", graph.label_at(src)));

    search.enter(src);
    let mut stack = vec![Frame {
        node: src,
        cursor: 0,
    }];
    let mut found = false;

    while let Some(mut frame) = stack.pop() {
        match search.next_unvisited(&mut frame) {
            Some(next) => {
                search
                    .trace
                    .set_edge(graph.id_at(frame.node), graph.id_at(next), EdgeState::Exploring);
                search.enter(next);
                stack.push(frame);
                if next == dst {
                    found = true;
                    break;
                }
                stack.push(Frame {
                    node: next,
                    cursor: 0,
                });
            }
            None => {
                search.path.pop();
                search.trace.set_interior_at(frame.node, NodeState::Visited);
                search.trace.record(format!(
                    "Backtracking from '{}'",
                    graph.label_at(frame.node)
                ));
            }
        }
    }

    let Search {
        mut trace,
        path,
        visited_nodes,
        visited_edges,
        ..
    } = search;
    let metrics = metrics().visited(visited_nodes, visited_edges);
    if !found {
        trace.record("No path exists");
        return AlgorithmResult::not_found(trace.finish()).with_metrics(metrics);
    }

    let ids = ids_of(graph, &path);
    trace.mark_path(&ids, !graph.is_directed());
    trace.record(format!(
        "Path found! Length: {} edges. Path: {}",
        path.len() - 1,
        join_labels(graph, &path, PATH_SEPARATOR)
    ));
    let length = ids.len() - 1;
    AlgorithmResult::found(trace.finish(), ids).with_metrics(metrics.path_length(Some(length)))
}

#[cfg(test)]
mod dfs_tests {
    use super::*;
    use crate::test_utils::graph_from_edges;
    use pretty_assertions::assert_eq;

    #[test]
    fn goes_deep_before_wide() {
        let g = graph_from_edges(
            false,
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")],
        );
        let result = dfs(&g, "A", "C");
        assert!(result.found);
        // A -> B -> D -> C, not the direct edge
        assert_eq!(result.path, vec!["A", "B", "D", "C"]);
        let last = result.last_step().unwrap();
        assert_eq!(last.edge_state("D-C"), EdgeState::Path);
        assert_eq!(last.edge_state("C-D"), EdgeState::Path);
        assert_eq!(last.node_state("E"), NodeState::Default);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let g = graph_from_edges(true, &[("A", "B"), ("B", "X"), ("A", "C")]);
        let result = dfs(&g, "A", "C");
        let messages: Vec<&str> = result.steps.iter().map(|s| s.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Starting DFS from 'A'",
                "Visiting 'A'. Stack: [A]",
                "Visiting 'B'. Stack: [A, B]",
                "Visiting 'X'. Stack: [A, B, X]",
                "Backtracking from 'X'",
                "Backtracking from 'B'",
                "Visiting 'C'. Stack: [A, C]",
                "Path found! Length: 1 edges. Path: A → C",
            ]
        );
        let last = result.last_step().unwrap();
        assert_eq!(last.node_state("B"), NodeState::Visited);
        assert_eq!(last.node_state("X"), NodeState::Visited);
        assert_eq!(last.edge_state("A-B"), EdgeState::Exploring);
        assert_eq!(last.edge_state("A-C"), EdgeState::Path);
    }

    #[test]
    fn exhausts_the_component_when_unreachable() {
        let g = graph_from_edges(false, &[("A", "B"), ("B", "C"), ("X", "Y")]);
        let result = dfs(&g, "A", "Y");
        assert!(!result.found);
        assert!(result.error.is_none());
        let messages: Vec<&str> = result.steps.iter().map(|s| s.message.as_str()).collect();
        assert_eq!(messages.last(), Some(&"No path exists"));
        assert_eq!(messages.iter().filter(|m| m.starts_with("Backtracking")).count(), 3);
        assert_eq!(result.metrics.unwrap().visited_nodes, 3);
    }

    #[test]
    fn long_chains_are_walked_to_the_end() {
        let edges: Vec<(String, String)> = (0..500)
            .map(|i| (format!("n{i}"), format!("n{}", i + 1)))
            .collect();
        let pairs: Vec<(&str, &str)> = edges.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        let g = graph_from_edges(true, &pairs);
        let result = dfs(&g, "n0", "n500");
        assert!(result.found);
        assert_eq!(result.path_length(), Some(500));
    }
}
