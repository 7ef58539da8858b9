//! Source-to-target path engines.
//!
//! All four traversal engines share the same up-front checks: both endpoints
//! must exist, and `source == target` short-circuits to a one-node path.
use crate::{
    algorithms::algorithm_result::{AlgorithmMetrics, AlgorithmResult},
    db::trace::TraceRecorder,
};
use graphstep_api::core::{entities::Graph, NodeState};
use itertools::Itertools;

pub mod bidirectional_bfs;
pub mod dfs;
pub mod dijkstra;
pub mod pregel_bfs;
pub mod single_source_shortest_path;

pub(crate) const PATH_SEPARATOR: &str = " → ";

/// Resolves `source` and `target` to node indexes.
///
/// Returns the finished result instead when the run must not start: an error
/// for unknown endpoints, the trivial path when they are the same node.
pub(crate) fn resolve_endpoints(
    graph: &Graph,
    source: &str,
    target: &str,
    metrics: AlgorithmMetrics,
) -> Result<(usize, usize), AlgorithmResult> {
    let src = graph
        .node_index(source)
        .ok_or_else(|| AlgorithmResult::invalid(format!("Source node '{source}' not found")))?;
    let dst = graph
        .node_index(target)
        .ok_or_else(|| AlgorithmResult::invalid(format!("Target node '{target}' not found")))?;
    if src == dst {
        let mut trace = TraceRecorder::for_traversal(graph);
        trace.set_node_at(src, NodeState::Path);
        trace.record("Source equals target - trivial path");
        return Err(
            AlgorithmResult::found(trace.finish(), vec![source.to_string()])
                .with_metrics(metrics.visited(1, 0).path_length(Some(0))),
        );
    }
    Ok((src, dst))
}

/// Follows parent links from `node` back to the root, returned root first.
pub(crate) fn walk_parents(parents: &[Option<usize>], node: usize) -> Vec<usize> {
    let mut path = vec![node];
    let mut current = node;
    while let Some(parent) = parents[current] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

pub(crate) fn ids_of(graph: &Graph, nodes: &[usize]) -> Vec<String> {
    nodes.iter().map(|n| graph.id_at(*n).to_string()).collect()
}

pub(crate) fn join_labels<'a>(graph: &Graph, nodes: impl IntoIterator<Item = &'a usize>, sep: &str) -> String {
    nodes.into_iter().map(|n| graph.label_at(*n)).join(sep)
}
