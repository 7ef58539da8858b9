//! Bundled demonstration graphs.
//!
//! # Example
//!
//! ```rust
//! use graphstep::graph_loader::sample::{sample_graph, sample_graphs};
//!
//! let g = sample_graph("Grid Graph").unwrap();
//! assert_eq!(g.count_nodes(), 9);
//! assert_eq!(sample_graphs().len(), 5);
//! ```
pub mod sample;
