use super::{by_descending_rank, colour_by_rank, rank_table, DEFAULT_DAMPING_FACTOR};
use crate::{
    algorithms::algorithm_result::{AlgorithmMetrics, AlgorithmResult},
    db::{
        partition::PartitionStrategy,
        task::{
            context::Context,
            eval_vertex::EvalVertexView,
            task::{ATask, Step},
            task_runner::TaskRunner,
        },
        trace::{StepExtras, TraceRecorder},
    },
};
use graphstep_api::core::{entities::Graph, Direction};
use tracing::{error, info};

pub(crate) const DEFAULT_SUPERSTEPS: usize = 15;

/// PageRank as a vertex program over simulated worker partitions.
///
/// Nodes are partitioned with `strategy` into `num_partitions` workers. In
/// superstep `s` every vertex sums the rank shares it received in `s - 1`,
/// sets its rank to `(1 - d) / N + d * sum` and sends `rank / out_degree`
/// along each out-link. Vertices never vote to halt, so exactly `iter_count`
/// supersteps run.
///
/// # Arguments
///
/// - `g`: The graph to rank
/// - `num_partitions`: Number of simulated workers, `0` counts as `1`
/// - `strategy`: How nodes are assigned to workers
/// - `iter_count`: Number of supersteps, defaults to 15
/// - `damping_factor`: Defaults to 0.85
/// - `threads`: Worker threads for the compute phase, defaults to 1
///
/// # Returns
///
/// An [AlgorithmResult] with one step per superstep (superstep 0 included)
/// whose `path` holds every node id by descending final rank
///
pub fn pregel_page_rank(
    g: &Graph,
    num_partitions: usize,
    strategy: PartitionStrategy,
    iter_count: Option<usize>,
    damping_factor: Option<f64>,
    threads: Option<usize>,
) -> AlgorithmResult {
    let n = g.count_nodes();
    if n == 0 {
        return AlgorithmResult::invalid("Empty graph");
    }
    let iter_count = iter_count.unwrap_or(DEFAULT_SUPERSTEPS);
    let damp = damping_factor.unwrap_or(DEFAULT_DAMPING_FACTOR);
    let teleport_prob = (1f64 - damp) / n as f64;

    let ctx = Context::new(g, Direction::OUT, strategy, num_partitions);
    let partitions = ctx.num_partitions();
    let mut runner = TaskRunner::new(ctx);

    let step = ATask::new(move |vv: &mut EvalVertexView<'_, f64, f64>| {
        let sum: f64 = vv.messages().iter().sum();
        let rank = teleport_prob + damp * sum;
        let delta = (rank - *vv.get()).abs();
        vv.report_delta(delta);
        *vv.get_mut() = rank;
        let out_degree = vv.out_degree();
        if out_degree > 0 {
            vv.send_to_neighbours(rank / out_degree as f64);
        }
        Step::Continue
    });

    let mut trace = TraceRecorder::for_ranking(g);
    let outcome = runner.run(
        &step,
        |_| 1f64 / n as f64,
        iter_count,
        threads,
        |report| {
            let message = if report.superstep == 0 {
                format!(
                    "[Superstep 0] Initializing Pregel. {n} vertices distributed across {partitions} partitions."
                )
            } else {
                colour_by_rank(&mut trace, &report.values);
                format!(
                    "[Superstep {}] Exchange: {} msgs. Max Δ: {:.6}",
                    report.superstep, report.messages_received, report.max_delta
                )
            };
            trace.record_with(
                message,
                StepExtras {
                    partition_stats: Some(report.partition_stats.clone()),
                    ..StepExtras::ranks(rank_table(g, &report.values))
                },
            );
        },
    );

    let ranks = match outcome {
        Ok(ranks) => ranks,
        Err(err) => {
            error!(error = %err, "pregel pagerank aborted");
            return AlgorithmResult::invalid(err.to_string());
        }
    };
    let order = by_descending_rank(&ranks);
    info!(
        supersteps = trace.len() - 1,
        partitions,
        highest = g.id_at(order[0]),
        "pregel pagerank complete"
    );

    let path = order.iter().map(|&v| g.id_at(v).to_string()).collect();
    AlgorithmResult::found(trace.finish(), path).with_metrics(
        AlgorithmMetrics::new("O(L * (V+E)/P)", "O(V + E)").visited(n, g.count_edges()),
    )
}
