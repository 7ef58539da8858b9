//! Generates a graph using the random attachment model
//!
//! This function is a graph generation model based upon:
//! Callaway, Duncan S., et al. "Are randomly grown graphs really random?."
//! Physical Review E 64.4 (2001): 041902.
//!
//! # Examples
//!
//! ```
//! use graphstep::graphgen::random_attachment::random_graph;
//! let graph = random_graph(100, 3, false, 42);
//! assert_eq!(graph.count_nodes(), 100);
//! assert_eq!(graph.count_edges(), 97 * 3);
//! ```

use super::{circle_position, node_id};
use graphstep_api::core::entities::{Edge, Graph, Node};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::error;

fn generate(
    num_nodes: usize,
    edges_per_node: usize,
    directed: bool,
    seed: u64,
    weighted: bool,
) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(directed);
    let mut ids: Vec<String> = Vec::with_capacity(num_nodes);

    for index in 0..num_nodes {
        let id = node_id(index);
        let (x, y) = circle_position(index, num_nodes);
        graph
            .add_node(Node::new(id.clone(), x, y, id.clone()))
            .map_err(|err| error!("{err}"))
            .ok();
        if ids.len() >= edges_per_node {
            let neighbours: Vec<String> = ids
                .choose_multiple(&mut rng, edges_per_node)
                .cloned()
                .collect();
            for neighbour in neighbours {
                let edge = if weighted {
                    Edge::weighted(id.clone(), neighbour, rng.gen_range(1..=10) as f64)
                } else {
                    Edge::new(id.clone(), neighbour)
                };
                graph.add_edge(edge).map_err(|err| error!("{err}")).ok();
            }
        }
        ids.push(id);
    }
    graph
}

/// Grows a graph one node at a time. The first `edges_per_node` nodes form the
/// initial pool; every later node links to `edges_per_node` distinct nodes
/// already in the graph, chosen uniformly at random without replacement.
///
/// # Arguments
/// * `num_nodes` - Total number of nodes, the initial pool included
/// * `edges_per_node` - Number of edges each joining node adds
/// * `directed` - Direction flag of the generated graph; edges point from the joining node
/// * `seed` - Seed for the random number generator
pub fn random_graph(num_nodes: usize, edges_per_node: usize, directed: bool, seed: u64) -> Graph {
    generate(num_nodes, edges_per_node, directed, seed, false)
}

/// Same as [`random_graph`] with integer edge weights drawn from `1..=10`.
pub fn random_weighted_graph(
    num_nodes: usize,
    edges_per_node: usize,
    directed: bool,
    seed: u64,
) -> Graph {
    generate(num_nodes, edges_per_node, directed, seed, true)
}

#[cfg(test)]
mod random_graph_test {
    use super::*;

    #[test]
    fn blank_graph() {
        let graph = random_graph(100, 20, true, 1);
        assert_eq!(graph.count_nodes(), 100);
        assert_eq!(graph.count_edges(), 80 * 20);
    }

    #[test]
    fn same_seed_same_graph() {
        assert_eq!(random_graph(50, 3, false, 9), random_graph(50, 3, false, 9));
        assert_ne!(
            random_graph(50, 3, false, 9).edges(),
            random_graph(50, 3, false, 10).edges()
        );
    }

    #[test]
    fn weights_are_in_range() {
        let graph = random_weighted_graph(40, 2, false, 3);
        assert!(graph
            .edges()
            .iter()
            .all(|e| e.weight.is_some_and(|w| (1.0..=10.0).contains(&w))));
    }

    #[test]
    fn no_self_loops_or_repeat_neighbours() {
        let graph = random_graph(30, 4, true, 5);
        for chunk in graph.edges().chunks(4) {
            let source = &chunk[0].source;
            assert!(chunk.iter().all(|e| &e.source == source && &e.target != source));
            let mut targets: Vec<&str> = chunk.iter().map(|e| e.target.as_str()).collect();
            targets.sort();
            targets.dedup();
            assert_eq!(targets.len(), 4);
        }
    }
}
