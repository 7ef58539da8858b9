//! Breadth-first search from both ends at once.
use super::{ids_of, join_labels, resolve_endpoints, walk_parents, PATH_SEPARATOR};
use crate::{
    algorithms::algorithm_result::{AlgorithmMetrics, AlgorithmResult},
    core::adj::Adjacency,
    db::trace::{StepExtras, TraceRecorder},
};
use graphstep_api::core::{entities::Graph, Direction, EdgeState, NodeState};
use std::collections::VecDeque;
use tracing::debug;

fn metrics() -> AlgorithmMetrics {
    AlgorithmMetrics::new("O(b^(d/2))", "O(b^(d/2))")
}

/// One side of the search.
struct Frontier {
    queue: VecDeque<usize>,
    parents: Vec<Option<usize>>,
    seen: Vec<bool>,
    adj: Adjacency,
    state: NodeState,
    /// Backward links on a directed graph run against the edge.
    reversed: bool,
}

impl Frontier {
    fn new(graph: &Graph, root: usize, direction: Direction, state: NodeState) -> Self {
        let mut seen = vec![false; graph.count_nodes()];
        seen[root] = true;
        Self {
            queue: VecDeque::from([root]),
            parents: vec![None; graph.count_nodes()],
            seen,
            adj: Adjacency::new(graph, direction),
            state,
            reversed: direction == Direction::IN,
        }
    }

    fn ids(&self, graph: &Graph) -> Vec<String> {
        self.queue.iter().map(|n| graph.id_at(*n).to_string()).collect()
    }

    /// Drains one level of the queue. Returns the meeting node if a newly
    /// discovered node was already seen by `other`.
    fn expand_level(
        &mut self,
        other: &Frontier,
        graph: &Graph,
        trace: &mut TraceRecorder,
        visited_edges: &mut usize,
    ) -> Option<usize> {
        let level = self.queue.len();
        for _ in 0..level {
            let Some(current) = self.queue.pop_front() else {
                break;
            };
            trace.set_interior_at(current, self.state);
            for neighbour in self.adj.neighbours(current) {
                *visited_edges += 1;
                let next = neighbour.node;
                if self.seen[next] {
                    continue;
                }
                self.seen[next] = true;
                self.parents[next] = Some(current);
                self.queue.push_back(next);
                let (from, to) = if self.reversed {
                    (next, current)
                } else {
                    (current, next)
                };
                trace.set_edge(graph.id_at(from), graph.id_at(to), EdgeState::Exploring);
                if other.seen[next] {
                    return Some(next);
                }
            }
        }
        None
    }
}

/// Finds a shortest (fewest edges) path by growing one BFS level at a time
/// from `source` and from `target` until the two searches touch.
///
/// On a directed graph the backward search follows edges against their
/// direction, so the returned path always follows edge direction.
pub fn bidirectional_bfs(graph: &Graph, source: &str, target: &str) -> AlgorithmResult {
    let (src, dst) = match resolve_endpoints(graph, source, target, metrics()) {
        Ok(endpoints) => endpoints,
        Err(result) => return result,
    };
    debug!(source, target, "running bidirectional bfs");

    let backward_direction = if graph.is_directed() {
        Direction::IN
    } else {
        Direction::BOTH
    };
    let mut forward = Frontier::new(
        graph,
        src,
        graph.traversal_direction(),
        NodeState::ForwardFrontier,
    );
    let mut backward = Frontier::new(graph, dst, backward_direction, NodeState::BackwardFrontier);
    let mut trace = TraceRecorder::for_traversal(graph);
    let mut visited_edges = 0;

    trace.set_node_at(src, NodeState::Source);
    trace.set_node_at(dst, NodeState::Target);
    trace.record_with(
        format!(
            "Starting bidirectional BFS from '{}' and '{}'",
            graph.label_at(src),
            graph.label_at(dst)
        ),
        StepExtras::frontiers(vec![source.to_string()], vec![target.to_string()]),
    );

    let mut meeting = None;
    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        meeting = forward.expand_level(&backward, graph, &mut trace, &mut visited_edges);
        if meeting.is_some() {
            break;
        }
        trace.record_with(
            format!(
                "Forward frontier expanded. Queue: [{}]",
                join_labels(graph, &forward.queue, ", ")
            ),
            StepExtras::frontiers(forward.ids(graph), backward.ids(graph)),
        );

        meeting = backward.expand_level(&forward, graph, &mut trace, &mut visited_edges);
        if meeting.is_some() {
            break;
        }
        trace.record_with(
            format!(
                "Backward frontier expanded. Queue: [{}]",
                join_labels(graph, &backward.queue, ", ")
            ),
            StepExtras::frontiers(forward.ids(graph), backward.ids(graph)),
        );
    }

    let visited_nodes = forward
        .seen
        .iter()
        .zip(&backward.seen)
        .filter(|(f, b)| **f || **b)
        .count();

    let Some(meeting) = meeting else {
        trace.record("No path exists between nodes");
        return AlgorithmResult::not_found(trace.finish())
            .with_metrics(metrics().visited(visited_nodes, visited_edges));
    };

    trace.record_with(
        format!("Searches meet at node '{}'!", graph.id_at(meeting)),
        StepExtras::frontiers(forward.ids(graph), backward.ids(graph)),
    );

    let mut path = walk_parents(&forward.parents, meeting);
    let mut next = backward.parents[meeting];
    while let Some(node) = next {
        path.push(node);
        next = backward.parents[node];
    }

    let ids = ids_of(graph, &path);
    trace.mark_path(&ids, !graph.is_directed());
    trace.record(format!(
        "Path found! Length: {} edges. Path: {}",
        path.len() - 1,
        join_labels(graph, &path, PATH_SEPARATOR)
    ));
    let length = ids.len() - 1;
    AlgorithmResult::found(trace.finish(), ids).with_metrics(
        metrics()
            .visited(visited_nodes, visited_edges)
            .path_length(Some(length)),
    )
}
