//! Rank engines.
use crate::db::trace::TraceRecorder;
use graphstep_api::core::{entities::Graph, NodeState};
use indexmap::IndexMap;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

pub mod pagerank;
pub mod pregel_pagerank;

pub(crate) const DEFAULT_DAMPING_FACTOR: f64 = 0.85;

/// Colours every node by its rank relative to the current maximum:
/// at least 80% is `path`, at least 50% is `visiting`, the rest `visited`.
pub(crate) fn colour_by_rank(trace: &mut TraceRecorder, ranks: &[f64]) {
    let max = ranks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    for (index, rank) in ranks.iter().enumerate() {
        let state = if *rank >= max * 0.8 {
            NodeState::Path
        } else if *rank >= max * 0.5 {
            NodeState::Visiting
        } else {
            NodeState::Visited
        };
        trace.set_node_at(index, state);
    }
}

pub(crate) fn rank_table(graph: &Graph, ranks: &[f64]) -> IndexMap<String, f64> {
    graph
        .node_ids()
        .zip(ranks)
        .map(|(id, rank)| (id.to_string(), *rank))
        .collect()
}

/// Node positions by descending rank; equal ranks keep node order.
pub(crate) fn by_descending_rank(ranks: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ranks.len()).collect();
    order.sort_by_key(|&index| Reverse(OrderedFloat(ranks[index])));
    order
}

pub(crate) fn describe_top(graph: &Graph, ranks: &[f64], order: &[usize], k: usize) -> String {
    order
        .iter()
        .take(k)
        .map(|&index| format!("{}: {:.4}", graph.label_at(index), ranks[index]))
        .join(", ")
}
