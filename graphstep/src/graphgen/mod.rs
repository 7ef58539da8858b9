//! Provides functionality for generating graphs for testing and benchmarking.
//!
//! Generators are seeded, so the same arguments always give the same graph.

pub mod random_attachment;

/// Node id used by the generators for the `index`-th node.
pub(crate) fn node_id(index: usize) -> String {
    format!("n{index}")
}

/// Places `index` of `n` on a circle, for rendering layers that want positions.
pub(crate) fn circle_position(index: usize, n: usize) -> (f64, f64) {
    let angle = std::f64::consts::TAU * index as f64 / n.max(1) as f64;
    (300.0 + 250.0 * angle.cos(), 300.0 + 250.0 * angle.sin())
}
