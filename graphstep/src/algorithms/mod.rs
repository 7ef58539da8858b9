//! The engines that turn a graph into a replayable trace.
//!
//! Each engine is a plain function over a borrowed [`Graph`] returning an
//! [`AlgorithmResult`](algorithm_result::AlgorithmResult). [`run_algorithm`]
//! picks one by [`AlgorithmType`] and feeds it the shared configuration.
//!
//! # Examples
//!
//! ```rust
//! use graphstep::prelude::*;
//! use graphstep::graph_loader::sample::weighted_graph;
//!
//! let g = weighted_graph();
//! let config = AlgorithmConfig::default();
//! let result = run_algorithm(&g, AlgorithmType::Dijkstra, Some("S"), Some("T"), &config);
//! assert_eq!(result.path, vec!["S", "B", "A", "C", "T"]);
//!
//! let ranks = run_algorithm(&g, "pagerank".parse().unwrap(), None, None, &config);
//! assert_eq!(ranks.path.len(), 6);
//! ```

use crate::{config::AlgorithmConfig, errors::GraphError};
use algorithm_result::AlgorithmResult;
use graphstep_api::core::entities::Graph;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::debug;

pub mod algorithm_result;
pub mod centrality;
pub mod pathing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmType {
    BidirectionalBfs,
    Dijkstra,
    Dfs,
    ShortestPath,
    #[serde(rename = "pagerank")]
    PageRank,
    #[serde(rename = "pregel-pagerank")]
    PregelPageRank,
    PregelBfs,
}

impl AlgorithmType {
    pub const ALL: [AlgorithmType; 7] = [
        AlgorithmType::BidirectionalBfs,
        AlgorithmType::Dijkstra,
        AlgorithmType::Dfs,
        AlgorithmType::ShortestPath,
        AlgorithmType::PageRank,
        AlgorithmType::PregelPageRank,
        AlgorithmType::PregelBfs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmType::BidirectionalBfs => "bidirectional-bfs",
            AlgorithmType::Dijkstra => "dijkstra",
            AlgorithmType::Dfs => "dfs",
            AlgorithmType::ShortestPath => "shortest-path",
            AlgorithmType::PageRank => "pagerank",
            AlgorithmType::PregelPageRank => "pregel-pagerank",
            AlgorithmType::PregelBfs => "pregel-bfs",
        }
    }

    /// Whether the engine needs both a source and a target.
    pub fn needs_endpoints(&self) -> bool {
        matches!(
            self,
            AlgorithmType::BidirectionalBfs
                | AlgorithmType::Dijkstra
                | AlgorithmType::Dfs
                | AlgorithmType::ShortestPath
        )
    }
}

impl FromStr for AlgorithmType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GraphError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs one engine with the shared configuration.
///
/// Path engines need both `source` and `target`, Pregel BFS only `source`;
/// a missing endpoint is reported in the result's `error`. Rank engines ignore
/// both.
pub fn run_algorithm(
    graph: &Graph,
    kind: AlgorithmType,
    source: Option<&str>,
    target: Option<&str>,
    config: &AlgorithmConfig,
) -> AlgorithmResult {
    debug!(algorithm = %kind, ?source, ?target, "dispatching");
    if kind.needs_endpoints() {
        let (Some(source), Some(target)) = (source, target) else {
            return AlgorithmResult::invalid("Select source and target");
        };
        return match kind {
            AlgorithmType::BidirectionalBfs => {
                pathing::bidirectional_bfs::bidirectional_bfs(graph, source, target)
            }
            AlgorithmType::Dijkstra => pathing::dijkstra::dijkstra(graph, source, target),
            AlgorithmType::Dfs => pathing::dfs::dfs(graph, source, target),
            _ => pathing::single_source_shortest_path::shortest_path(graph, source, target),
        };
    }
    match kind {
        AlgorithmType::PregelBfs => match source {
            Some(source) => pathing::pregel_bfs::pregel_bfs(
                graph,
                source,
                config.num_partitions,
                config.partition_strategy,
                None,
            ),
            None => AlgorithmResult::invalid("Select a source"),
        },
        AlgorithmType::PregelPageRank => centrality::pregel_pagerank::pregel_page_rank(
            graph,
            config.num_partitions,
            config.partition_strategy,
            Some(config.max_iterations),
            Some(config.damping_factor),
            None,
        ),
        _ => centrality::pagerank::page_rank(
            graph,
            Some(config.max_iterations),
            Some(config.damping_factor),
        ),
    }
}
