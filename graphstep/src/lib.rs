//! # graphstep
//!
//! `graphstep` runs textbook graph algorithms and records their execution as a
//! sequence of immutable [`AlgorithmStep`](algorithms::algorithm_result::AlgorithmStep)
//! snapshots that a rendering layer can replay without re-running anything.
//!
//! The engines are:
//!
//! * path finding: bidirectional BFS, Dijkstra, DFS and unweighted BFS
//!   ([`algorithms::pathing`]);
//! * ranking: power-iteration PageRank and a Pregel-style PageRank over
//!   simulated worker partitions ([`algorithms::centrality`]);
//! * a hop-distance BFS on the same bulk-synchronous runner
//!   ([`algorithms::pathing::pregel_bfs`]).
//!
//! Every engine is a pure function of its inputs: the same graph and
//! parameters always produce the same trace.
//!
//! # Example
//!
//! ```rust
//! use graphstep::prelude::*;
//! use graphstep::algorithms::pathing::single_source_shortest_path::shortest_path;
//!
//! let mut graph = Graph::new_undirected();
//! for (src, dst) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")] {
//!     graph.add_edge_with_nodes(Edge::new(src, dst));
//! }
//!
//! let result = shortest_path(&graph, "A", "E");
//! assert!(result.found);
//! assert_eq!(result.path, vec!["A", "B", "D", "E"]);
//!
//! let mut replay = Replay::new(&result.steps);
//! while replay.step_forward() {}
//! assert!(replay.is_finished());
//! ```

pub mod algorithms;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod graph_loader;
pub mod graphgen;
pub mod io;
pub mod prelude;
pub mod test_utils;

pub use graphstep_api::core::utils::logging;
