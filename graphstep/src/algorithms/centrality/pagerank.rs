use super::{by_descending_rank, colour_by_rank, describe_top, rank_table, DEFAULT_DAMPING_FACTOR};
use crate::{
    algorithms::algorithm_result::{AlgorithmMetrics, AlgorithmResult},
    core::adj::Adjacency,
    db::trace::{StepExtras, TraceRecorder},
};
use graphstep_api::core::{entities::Graph, Direction};
use tracing::{debug, info};

pub(crate) const DEFAULT_ITERATIONS: usize = 20;

/// PageRank Algorithm:
/// PageRank shows how important a node is in a graph.
///
/// Runs a fixed number of power iterations with no convergence check. Links
/// always go from an edge's source to its target, whatever the `directed`
/// flag says. A node without out-links divides its rank by 1 and its mass
/// is not redistributed.
///
/// # Arguments
///
/// - `g`: The graph to rank
/// - `iter_count`: Number of iterations to run the algorithm for, defaults to 20
/// - `damping_factor`: Probability of following a link rather than jumping, defaults to 0.85
///
/// # Returns
///
/// An [AlgorithmResult] whose `path` holds every node id by descending rank
///
pub fn page_rank(
    g: &Graph,
    iter_count: Option<usize>,
    damping_factor: Option<f64>,
) -> AlgorithmResult {
    let n = g.count_nodes();
    if n == 0 {
        return AlgorithmResult::invalid("Empty graph");
    }
    let iter_count = iter_count.unwrap_or(DEFAULT_ITERATIONS);
    let damp = damping_factor.unwrap_or(DEFAULT_DAMPING_FACTOR);
    let teleport_prob = (1f64 - damp) / n as f64;
    debug!(nodes = n, iter_count, damp, "running pagerank");

    let out_degree: Vec<usize> = {
        let adj = Adjacency::new(g, Direction::OUT);
        (0..n).map(|v| adj.degree(v)).collect()
    };
    // (source, target) positions in edge insertion order
    let links: Vec<(usize, usize)> = g
        .edges()
        .iter()
        .filter_map(|e| Some((g.node_index(&e.source)?, g.node_index(&e.target)?)))
        .collect();

    let mut trace = TraceRecorder::for_ranking(g);
    let mut ranks = vec![1f64 / n as f64; n];
    trace.record_with(
        format!(
            "Initializing PageRank. Each node starts with value {:.4}",
            1f64 / n as f64
        ),
        StepExtras::ranks(rank_table(g, &ranks)),
    );

    for iter in 0..iter_count {
        let mut incoming = vec![0f64; n];
        for &(src, dst) in &links {
            incoming[dst] += ranks[src] / out_degree[src].max(1) as f64;
        }
        ranks = incoming
            .into_iter()
            .map(|sum| teleport_prob + damp * sum)
            .collect();

        colour_by_rank(&mut trace, &ranks);
        if iter % 5 == 0 || iter + 1 == iter_count {
            let order = by_descending_rank(&ranks);
            trace.record_with(
                format!(
                    "Iteration {}/{}. Top nodes: {}",
                    iter + 1,
                    iter_count,
                    describe_top(g, &ranks, &order, 3)
                ),
                StepExtras::ranks(rank_table(g, &ranks)),
            );
        }
    }

    let order = by_descending_rank(&ranks);
    let best = order[0];
    info!(highest = g.id_at(best), rank = ranks[best], "pagerank complete");
    trace.record_with(
        format!(
            "PageRank complete! Highest: '{}' ({:.4})",
            g.label_at(best),
            ranks[best]
        ),
        StepExtras::ranks(rank_table(g, &ranks)),
    );

    let path = order.iter().map(|&v| g.id_at(v).to_string()).collect();
    AlgorithmResult::found(trace.finish(), path).with_metrics(
        AlgorithmMetrics::new("O(k·(V + E))", "O(V)").visited(n, g.count_edges() * iter_count),
    )
}
