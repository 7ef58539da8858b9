//! Step recording shared by every engine.
//!
//! An engine mutates the recorder's working colour tables while it runs and
//! calls [`TraceRecorder::record`] whenever something worth showing happens.
//! Each recorded [`AlgorithmStep`] is a deep copy of the working tables at that
//! moment.
use crate::algorithms::algorithm_result::{AlgorithmStep, PartitionStats};
use graphstep_api::core::{
    entities::{edge_key, Graph},
    EdgeState, NodeState,
};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Optional algorithm-specific tables attached to a step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepExtras {
    pub current_nodes: Option<Vec<String>>,
    pub forward_frontier: Option<Vec<String>>,
    pub backward_frontier: Option<Vec<String>>,
    pub page_rank_values: Option<IndexMap<String, f64>>,
    pub distances: Option<IndexMap<String, f64>>,
    pub partition_stats: Option<BTreeMap<usize, PartitionStats>>,
}

impl StepExtras {
    pub fn current(node: impl Into<String>) -> Self {
        Self {
            current_nodes: Some(vec![node.into()]),
            ..Default::default()
        }
    }

    pub fn frontiers(forward: Vec<String>, backward: Vec<String>) -> Self {
        Self {
            forward_frontier: Some(forward),
            backward_frontier: Some(backward),
            ..Default::default()
        }
    }

    pub fn distances(distances: IndexMap<String, f64>) -> Self {
        Self {
            distances: Some(distances),
            ..Default::default()
        }
    }

    pub fn ranks(page_rank_values: IndexMap<String, f64>) -> Self {
        Self {
            page_rank_values: Some(page_rank_values),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct TraceRecorder {
    node_states: IndexMap<String, NodeState>,
    edge_states: IndexMap<String, EdgeState>,
    steps: Vec<AlgorithmStep>,
}

impl TraceRecorder {
    fn with_edges(graph: &Graph, reverse_keys: bool) -> Self {
        let node_states = graph
            .node_ids()
            .map(|id| (id.to_string(), NodeState::Default))
            .collect();
        let mut edge_states = IndexMap::with_capacity(graph.count_edges());
        for edge in graph.edges() {
            edge_states.insert(edge_key(&edge.source, &edge.target), EdgeState::Default);
            if reverse_keys {
                edge_states.insert(edge_key(&edge.target, &edge.source), EdgeState::Default);
            }
        }
        Self {
            node_states,
            edge_states,
            steps: vec![],
        }
    }

    /// Tables for path engines: undirected graphs get a key for each direction.
    pub fn for_traversal(graph: &Graph) -> Self {
        Self::with_edges(graph, !graph.is_directed())
    }

    /// Tables for rank engines: one key per stored edge.
    pub fn for_ranking(graph: &Graph) -> Self {
        Self::with_edges(graph, false)
    }

    pub fn node_state(&self, id: &str) -> NodeState {
        self.node_states.get(id).copied().unwrap_or_default()
    }

    pub fn node_state_at(&self, index: usize) -> NodeState {
        self.node_states
            .get_index(index)
            .map(|(_, s)| *s)
            .unwrap_or_default()
    }

    pub fn set_node(&mut self, id: &str, state: NodeState) {
        if let Some(current) = self.node_states.get_mut(id) {
            *current = state;
        }
    }

    pub fn set_node_at(&mut self, index: usize, state: NodeState) {
        if let Some((_, current)) = self.node_states.get_index_mut(index) {
            *current = state;
        }
    }

    /// Sets the state unless the node is currently the source or target.
    pub fn set_interior_at(&mut self, index: usize, state: NodeState) {
        if !self.node_state_at(index).is_endpoint() {
            self.set_node_at(index, state);
        }
    }

    pub fn set_edge(&mut self, source: &str, target: &str, state: EdgeState) {
        self.edge_states.insert(edge_key(source, target), state);
    }

    /// Colours a path's nodes and the edges between consecutive nodes.
    pub fn mark_path(&mut self, path: &[String], both_ways: bool) {
        for id in path {
            self.set_node(id, NodeState::Path);
        }
        for pair in path.windows(2) {
            self.set_edge(&pair[0], &pair[1], EdgeState::Path);
            if both_ways {
                self.set_edge(&pair[1], &pair[0], EdgeState::Path);
            }
        }
    }

    pub fn record(&mut self, message: impl Into<String>) {
        self.record_with(message, StepExtras::default());
    }

    pub fn record_with(&mut self, message: impl Into<String>, extras: StepExtras) {
        self.steps.push(AlgorithmStep {
            node_states: self.node_states.clone(),
            edge_states: self.edge_states.clone(),
            message: message.into(),
            current_nodes: extras.current_nodes,
            forward_frontier: extras.forward_frontier,
            backward_frontier: extras.backward_frontier,
            page_rank_values: extras.page_rank_values,
            distances: extras.distances,
            partition_stats: extras.partition_stats,
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finish(self) -> Vec<AlgorithmStep> {
        self.steps
    }
}
