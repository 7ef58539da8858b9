//! Assignment of nodes to simulated workers.
//!
//! Partition ids are a derived annotation: every call recomputes the full
//! assignment from the node ids alone, so the same inputs always give the same
//! partitions.
use crate::errors::GraphError;
use graphstep_api::core::entities::Graph;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionStrategy {
    #[default]
    Hash,
    Range,
}

impl FromStr for PartitionStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hash" => Ok(PartitionStrategy::Hash),
            "range" => Ok(PartitionStrategy::Range),
            _ => Err(GraphError::UnknownPartitionStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for PartitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionStrategy::Hash => f.write_str("hash"),
            PartitionStrategy::Range => f.write_str("range"),
        }
    }
}

/// 32-bit polynomial rolling hash over the UTF-16 code units of `id`.
///
/// `hash = hash * 31 + unit`, wrapping at 32 bits as a signed integer. Kept
/// bit-for-bit stable because fixtures depend on the exact assignment.
pub fn id_hash(id: &str) -> i32 {
    id.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(unit as i32)
    })
}

/// Orders ids case-insensitively first; on a tie lowercase sorts before
/// uppercase, so `[a, b, B, C]` and not byte order `[B, C, a, b]`.
pub fn collation_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

pub fn hash_partition(id: &str, num_partitions: usize) -> usize {
    (id_hash(id).unsigned_abs() as usize) % num_partitions
}

/// Computes the partition id of every node, in node order.
pub fn assign_partitions(
    graph: &Graph,
    strategy: PartitionStrategy,
    num_partitions: usize,
) -> Vec<usize> {
    let n = graph.count_nodes();
    if num_partitions <= 1 {
        return vec![0; n];
    }
    match strategy {
        PartitionStrategy::Hash => graph
            .node_ids()
            .map(|id| hash_partition(id, num_partitions))
            .collect(),
        PartitionStrategy::Range => {
            let mut order: Vec<(usize, &str)> = graph.node_ids().enumerate().collect();
            order.sort_by(|(_, a), (_, b)| collation_order(a, b));
            let chunk_size = n.div_ceil(num_partitions).max(1);
            let mut assignment = vec![0; n];
            for (sorted_index, (node_index, _)) in order.into_iter().enumerate() {
                assignment[node_index] = sorted_index / chunk_size;
            }
            assignment
        }
    }
}

/// Returns a copy of `graph` with every node's `partition_id` set.
///
/// Node order is left untouched, even for the range strategy.
pub fn partition(graph: &Graph, strategy: PartitionStrategy, num_partitions: usize) -> Graph {
    let assignment = assign_partitions(graph, strategy, num_partitions);
    let mut partitioned = graph.clone();
    for (index, partition_id) in assignment.into_iter().enumerate() {
        partitioned.set_partition_id(index, partition_id);
    }
    partitioned
}
