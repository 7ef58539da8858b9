//! Hop distances from one source, as a vertex program.
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
use graphstep_api::core::{entities::Graph, NodeState};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::{error, info};

fn distance_table(g: &Graph, distances: &[f64]) -> IndexMap<String, f64> {
    g.node_ids()
        .zip(distances)
        .map(|(id, d)| (id.to_string(), *d))
        .collect()
}

/// Breadth-first hop distances from `source` on the bulk-synchronous runner.
///
/// In superstep 1 the source takes distance 0 and tells its neighbours about
/// distance 1. Afterwards a vertex that hears of a smaller distance adopts it
/// and forwards `distance + 1`. Every vertex votes to halt after computing, so
/// the run ends once no messages are in flight.
///
/// # Arguments
///
/// - `g`: The graph to search. Undirected graphs are traversed both ways.
/// - `source`: Id of the start node
/// - `num_partitions`: Number of simulated workers, `0` counts as `1`
/// - `strategy`: How nodes are assigned to workers
/// - `threads`: Worker threads for the compute phase, defaults to 1
///
/// # Returns
///
/// An [AlgorithmResult] whose `path` lists the reached node ids by ascending
/// distance, ties in node order
///
pub fn pregel_bfs(
    g: &Graph,
    source: &str,
    num_partitions: usize,
    strategy: PartitionStrategy,
    threads: Option<usize>,
) -> AlgorithmResult {
    let Some(src) = g.node_index(source) else {
        return AlgorithmResult::invalid(format!("Source node '{source}' not found"));
    };
    let n = g.count_nodes();

    let ctx = Context::new(g, g.traversal_direction(), strategy, num_partitions);
    let partitions = ctx.num_partitions();
    let mut runner = TaskRunner::new(ctx);

    let step = ATask::new(move |vv: &mut EvalVertexView<'_, f64, f64>| {
        let best = if vv.superstep() == 1 && vv.index() == src {
            Some(0.0)
        } else {
            vv.messages().iter().copied().reduce(f64::min)
        };
        if let Some(distance) = best {
            if distance < *vv.get() {
                *vv.get_mut() = distance;
                vv.send_to_neighbours(distance + 1.0);
            }
        }
        Step::Done
    });

    let mut trace = TraceRecorder::for_traversal(g);
    let mut settled = vec![false; n];
    let mut messages_total = 0;
    let outcome = runner.run(
        &step,
        |_| f64::INFINITY,
        n + 1,
        threads,
        |report| {
            messages_total += report.messages_sent;
            for (v, distance) in report.values.iter().enumerate() {
                if v == src {
                    trace.set_node_at(v, NodeState::Source);
                } else if settled[v] {
                    trace.set_node_at(v, NodeState::Visited);
                } else if distance.is_finite() {
                    settled[v] = true;
                    trace.set_node_at(v, NodeState::Visiting);
                }
            }
            let message = if report.superstep == 0 {
                format!(
                    "[Superstep 0] Initializing Pregel BFS from '{}'. {n} vertices distributed across {partitions} partitions.",
                    g.label_at(src)
                )
            } else {
                format!(
                    "[Superstep {}] Exchange: {} msgs. Active: {} vertices.",
                    report.superstep,
                    report.messages_received,
                    report.computed_vertices
                )
            };
            trace.record_with(
                message,
                StepExtras {
                    partition_stats: Some(report.partition_stats.clone()),
                    ..StepExtras::distances(distance_table(g, &report.values))
                },
            );
        },
    );

    let distances = match outcome {
        Ok(distances) => distances,
        Err(err) => {
            error!(error = %err, "pregel bfs aborted");
            return AlgorithmResult::invalid(err.to_string());
        }
    };

    let mut reached: Vec<usize> = (0..n).filter(|&v| distances[v].is_finite()).collect();
    reached.sort_by_key(|&v| OrderedFloat(distances[v]));
    let farthest = reached.last().map(|&v| distances[v]).unwrap_or_default();
    trace.record_with(
        format!(
            "Pregel BFS complete! Reached {} of {n} vertices, farthest at distance {farthest}",
            reached.len()
        ),
        StepExtras::distances(distance_table(g, &distances)),
    );
    info!(source, reached = reached.len(), "pregel bfs complete");

    let visited = reached.len();
    let path = reached.into_iter().map(|v| g.id_at(v).to_string()).collect();
    AlgorithmResult::found(trace.finish(), path).with_metrics(
        AlgorithmMetrics::new("O(L * (V+E)/P)", "O(V + E)").visited(visited, messages_total),
    )
}

#[cfg(test)]
mod pregel_bfs_tests {
    use super::*;
    use crate::{graph_loader::sample::grid_graph, test_utils::graph_from_edges};
    use pretty_assertions::assert_eq;

    #[test]
    fn grid_distances_are_manhattan() {
        let g = grid_graph();
        let result = pregel_bfs(&g, "1", 3, PartitionStrategy::Hash, None);
        assert!(result.found);
        let distances = result.last_step().unwrap().distances.clone().unwrap();
        let expected = [0.0, 1.0, 2.0, 1.0, 2.0, 3.0, 2.0, 3.0, 4.0];
        for (i, d) in expected.iter().enumerate() {
            assert_eq!(distances[&(i + 1).to_string()], *d);
        }
        assert_eq!(result.path, vec!["1", "2", "4", "3", "5", "7", "6", "8", "9"]);
    }

    #[test]
    fn one_step_per_superstep_plus_summary() {
        let g = graph_from_edges(false, &[("A", "B"), ("B", "C")]);
        let result = pregel_bfs(&g, "A", 2, PartitionStrategy::Range, None);
        let messages: Vec<&str> = result.steps.iter().map(|s| s.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "[Superstep 0] Initializing Pregel BFS from 'A'. 3 vertices distributed across 2 partitions.",
                "[Superstep 1] Exchange: 0 msgs. Active: 3 vertices.",
                "[Superstep 2] Exchange: 1 msgs. Active: 1 vertices.",
                "[Superstep 3] Exchange: 2 msgs. Active: 2 vertices.",
                "[Superstep 4] Exchange: 1 msgs. Active: 1 vertices.",
                "Pregel BFS complete! Reached 3 of 3 vertices, farthest at distance 2",
            ]
        );
        assert_eq!(result.steps[2].node_state("B"), NodeState::Visiting);
        assert_eq!(result.steps[3].node_state("B"), NodeState::Visited);
        assert_eq!(result.steps[3].node_state("A"), NodeState::Source);
        assert_eq!(result.steps[1].distances.as_ref().unwrap()["C"], f64::INFINITY);
    }

    #[test]
    fn unreachable_vertices_stay_infinite() {
        let g = graph_from_edges(false, &[("A", "B"), ("X", "Y")]);
        let result = pregel_bfs(&g, "A", 2, PartitionStrategy::Hash, None);
        assert_eq!(result.path, vec!["A", "B"]);
        let last = result.last_step().unwrap();
        assert_eq!(last.distances.as_ref().unwrap()["Y"], f64::INFINITY);
        assert_eq!(last.node_state("X"), NodeState::Default);
    }

    #[test]
    fn unknown_source_is_an_error() {
        let g = graph_from_edges(false, &[("A", "B")]);
        let result = pregel_bfs(&g, "Q", 2, PartitionStrategy::Hash, None);
        assert_eq!(result.error.as_deref(), Some("Source node 'Q' not found"));
    }
}
