use graphstep_api::core::{EdgeState, NodeState};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-worker bookkeeping for one superstep of a partitioned run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionStats {
    pub active_nodes: usize,
    pub messages_sent: usize,
}

/// One immutable snapshot of an algorithm's progress.
///
/// Steps own deep copies of every table they carry; nothing an engine does after
/// recording a step can change it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmStep {
    pub node_states: IndexMap<String, NodeState>,
    pub edge_states: IndexMap<String, EdgeState>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_nodes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_frontier: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backward_frontier: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_rank_values: Option<IndexMap<String, f64>>,
    /// Unreached nodes carry `f64::INFINITY` (serialised as `null`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<IndexMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_stats: Option<BTreeMap<usize, PartitionStats>>,
}

impl AlgorithmStep {
    pub fn node_state(&self, id: &str) -> NodeState {
        self.node_states.get(id).copied().unwrap_or_default()
    }

    pub fn edge_state(&self, key: &str) -> EdgeState {
        self.edge_states.get(key).copied().unwrap_or_default()
    }

    /// Ids of all nodes currently in `state`, in node order.
    pub fn nodes_in(&self, state: NodeState) -> Vec<&str> {
        self.node_states
            .iter()
            .filter(|(_, s)| **s == state)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmMetrics {
    pub time_complexity: String,
    pub space_complexity: String,
    pub visited_nodes: usize,
    pub visited_edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_length: Option<usize>,
}

impl AlgorithmMetrics {
    pub fn new(time_complexity: &str, space_complexity: &str) -> Self {
        Self {
            time_complexity: time_complexity.to_string(),
            space_complexity: space_complexity.to_string(),
            visited_nodes: 0,
            visited_edges: 0,
            path_length: None,
        }
    }

    pub fn visited(mut self, nodes: usize, edges: usize) -> Self {
        self.visited_nodes = nodes;
        self.visited_edges = edges;
        self
    }

    pub fn path_length(mut self, path_length: Option<usize>) -> Self {
        self.path_length = path_length;
        self
    }
}

/// Everything one run hands back to the caller.
///
/// `found = false` with no `error` means the input was fine but no path exists;
/// a present `error` means the engine refused to run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    pub steps: Vec<AlgorithmStep>,
    pub path: Vec<String>,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<AlgorithmMetrics>,
}

impl AlgorithmResult {
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            steps: vec![],
            path: vec![],
            found: false,
            error: Some(error.into()),
            metrics: None,
        }
    }

    pub fn found(steps: Vec<AlgorithmStep>, path: Vec<String>) -> Self {
        Self {
            steps,
            path,
            found: true,
            error: None,
            metrics: None,
        }
    }

    pub fn not_found(steps: Vec<AlgorithmStep>) -> Self {
        Self {
            steps,
            path: vec![],
            found: false,
            error: None,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: AlgorithmMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Number of edges on the returned path, `None` when nothing was found.
    pub fn path_length(&self) -> Option<usize> {
        if self.found && !self.path.is_empty() {
            Some(self.path.len() - 1)
        } else {
            None
        }
    }

    pub fn last_step(&self) -> Option<&AlgorithmStep> {
        self.steps.last()
    }
}
