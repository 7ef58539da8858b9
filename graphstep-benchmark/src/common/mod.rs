#![allow(dead_code)]

use criterion::{measurement::WallTime, BenchmarkGroup, BenchmarkId, Bencher};
use graphstep::graphgen::random_attachment::random_weighted_graph;
use graphstep_api::core::{entities::Graph, utils::logging::global_info_logger};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

pub const SEED: u64 = 42;

pub fn bench<F>(
    group: &mut BenchmarkGroup<WallTime>,
    name: &str,
    parameter: Option<usize>,
    mut task: F,
) where
    F: FnMut(&mut Bencher<'_, WallTime>),
{
    match parameter {
        Some(parameter) => group.bench_with_input(
            BenchmarkId::new(name, parameter),
            &parameter,
            |b: &mut Bencher, _| task(b),
        ),
        None => group.bench_function(name, task),
    };
}

/// Weighted random-attachment graph with `num_nodes` nodes, three edges per
/// joining node.
pub fn bootstrap_graph(num_nodes: usize, directed: bool) -> Graph {
    global_info_logger();
    let graph = random_weighted_graph(num_nodes, 3, directed, SEED);
    info!(
        nodes = graph.count_nodes(),
        edges = graph.count_edges(),
        "bootstrapped benchmark graph"
    );
    graph
}

/// `count` node id pairs drawn from `graph`, the same for every run.
pub fn endpoint_pairs(graph: &Graph, count: usize) -> Vec<(String, String)> {
    let n = graph.count_nodes();
    if n == 0 {
        return vec![];
    }
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count)
        .map(|_| {
            let s = rng.gen_range(0..n);
            let t = rng.gen_range(0..n);
            (graph.id_at(s).to_string(), graph.id_at(t).to_string())
        })
        .collect()
}
