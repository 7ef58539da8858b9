use super::{
    context::Context,
    custom_pool,
    eval_vertex::{Envelope, EvalVertexView},
    task::{Step, Task},
};
use crate::{algorithms::algorithm_result::PartitionStats, errors::GraphError};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Snapshot handed to the observer at superstep 0 and after every superstep.
#[derive(Clone, Debug)]
pub struct SuperstepReport<S> {
    pub superstep: usize,
    /// Vertex values in global node order.
    pub values: Vec<S>,
    /// Messages consumed by this superstep.
    pub messages_received: usize,
    /// Messages produced by this superstep, delivered in the next one.
    pub messages_sent: usize,
    pub max_delta: f64,
    /// Vertices whose program ran in this superstep.
    pub computed_vertices: usize,
    /// One entry per partition that owns at least one vertex.
    pub partition_stats: BTreeMap<usize, PartitionStats>,
}

impl<S> SuperstepReport<S> {
    pub fn active_vertices(&self) -> usize {
        self.partition_stats.values().map(|s| s.active_nodes).sum()
    }
}

/// The vertex slots owned by one simulated worker.
struct Worker<S> {
    partition: usize,
    vertices: Vec<usize>,
    states: Vec<S>,
    active: Vec<bool>,
}

struct WorkerOutput<M> {
    outbox: Vec<Envelope<M>>,
    max_delta: f64,
    computed: usize,
}

impl<S> Worker<S> {
    fn new(partition: usize) -> Self {
        Self {
            partition,
            vertices: vec![],
            states: vec![],
            active: vec![],
        }
    }

    fn push(&mut self, vertex: usize, state: S) -> usize {
        self.vertices.push(vertex);
        self.states.push(state);
        self.active.push(true);
        self.vertices.len() - 1
    }

    fn num_active(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }

    fn superstep<M, T: Task<S, M> + ?Sized>(
        &mut self,
        ss: usize,
        ctx: &Context<'_>,
        inbox: &[Vec<M>],
        task: &T,
    ) -> WorkerOutput<M> {
        let mut outbox = vec![];
        let mut max_delta = 0.0;
        let mut computed = 0;
        for (local, &vertex) in self.vertices.iter().enumerate() {
            let messages = inbox.get(vertex).map(|m| m.as_slice()).unwrap_or(&[]);
            // halted vertices only wake up on incoming messages
            if !self.active[local] && messages.is_empty() {
                continue;
            }
            let mut vv = EvalVertexView {
                ss,
                vertex,
                partition: self.partition,
                state: &mut self.states[local],
                messages,
                out_neighbours: ctx.out_neighbours(vertex),
                outbox: &mut outbox,
                max_delta: &mut max_delta,
            };
            self.active[local] = task.run(&mut vv) == Step::Continue;
            computed += 1;
        }
        WorkerOutput {
            outbox,
            max_delta,
            computed,
        }
    }
}

pub struct TaskRunner<'a> {
    pub(crate) ctx: Context<'a>,
}

impl<'a> TaskRunner<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    fn make_workers<S>(&self, init: &impl Fn(usize) -> S) -> (Vec<Worker<S>>, Vec<(usize, usize)>) {
        let mut workers: Vec<Worker<S>> = (0..self.ctx.num_partitions()).map(Worker::new).collect();
        let slots = (0..self.ctx.count_nodes())
            .map(|vertex| {
                let partition = self.ctx.partition_of(vertex);
                (partition, workers[partition].push(vertex, init(vertex)))
            })
            .collect();
        (workers, slots)
    }

    fn gather<S: Clone>(workers: &[Worker<S>], slots: &[(usize, usize)]) -> Vec<S> {
        slots
            .iter()
            .map(|&(partition, local)| workers[partition].states[local].clone())
            .collect()
    }

    fn partition_stats<S, M>(
        workers: &[Worker<S>],
        envelopes: &[Envelope<M>],
    ) -> BTreeMap<usize, PartitionStats> {
        let mut stats: BTreeMap<usize, PartitionStats> = workers
            .iter()
            .filter(|w| !w.vertices.is_empty())
            .map(|w| {
                (
                    w.partition,
                    PartitionStats {
                        active_nodes: w.num_active(),
                        messages_sent: 0,
                    },
                )
            })
            .collect();
        for envelope in envelopes {
            stats.entry(envelope.source_partition).or_default().messages_sent += 1;
        }
        stats
    }

    /// Runs `task` for at most `max_supersteps` supersteps and returns the final
    /// vertex values in node order.
    ///
    /// A superstep only runs while some vertex is active or some message is in
    /// flight. `observer` sees superstep 0 (the initial values) and every
    /// superstep that ran. `threads` defaults to a single worker thread; the
    /// result does not depend on it.
    pub fn run<S, M, T, F>(
        &mut self,
        task: &T,
        init: impl Fn(usize) -> S,
        max_supersteps: usize,
        threads: Option<usize>,
        mut observer: F,
    ) -> Result<Vec<S>, GraphError>
    where
        S: Clone + Send + Sync,
        M: Send + Sync,
        T: Task<S, M> + ?Sized,
        F: FnMut(&SuperstepReport<S>),
    {
        let pool = custom_pool(threads.unwrap_or(1))?;
        let n = self.ctx.count_nodes();
        let (mut workers, slots) = self.make_workers(&init);

        observer(&SuperstepReport {
            superstep: 0,
            values: Self::gather(&workers, &slots),
            messages_received: 0,
            messages_sent: 0,
            max_delta: 0.0,
            computed_vertices: 0,
            partition_stats: Self::partition_stats::<S, M>(&workers, &[]),
        });

        let mut inbox: Vec<Vec<M>> = (0..n).map(|_| vec![]).collect();
        let mut in_flight = 0;

        for ss in 1..=max_supersteps {
            let active: usize = workers.iter().map(|w| w.num_active()).sum();
            if active == 0 && in_flight == 0 {
                debug!(superstep = ss, "all vertices halted, stopping");
                break;
            }

            let ctx = &self.ctx;
            let inbox_ref = &inbox;
            let outputs: Vec<WorkerOutput<M>> = pool.install(|| {
                workers
                    .par_iter_mut()
                    .map(|worker| worker.superstep(ss, ctx, inbox_ref, task))
                    .collect()
            });

            let max_delta = outputs.iter().map(|o| o.max_delta).fold(0.0, f64::max);
            let computed_vertices = outputs.iter().map(|o| o.computed).sum();
            let mut envelopes: Vec<Envelope<M>> =
                outputs.into_iter().flat_map(|o| o.outbox).collect();
            // stable on source index, keeps per-vertex send order
            envelopes.sort_by_key(|e| e.source);
            let partition_stats = Self::partition_stats(&workers, &envelopes);

            let messages_received = in_flight;
            in_flight = envelopes.len();
            inbox = (0..n).map(|_| vec![]).collect();
            for envelope in envelopes {
                if let Some(slot) = inbox.get_mut(envelope.target) {
                    slot.push(envelope.message);
                }
            }

            debug!(
                superstep = ss,
                messages_received,
                messages_sent = in_flight,
                max_delta,
                computed_vertices,
                "superstep complete"
            );

            observer(&SuperstepReport {
                superstep: ss,
                values: Self::gather(&workers, &slots),
                messages_received,
                messages_sent: in_flight,
                max_delta,
                computed_vertices,
                partition_stats,
            });
        }

        Ok(Self::gather(&workers, &slots))
    }
}
