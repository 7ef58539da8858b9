//! Vertex-centric bulk-synchronous execution.
//!
//! Vertices are sharded over one [`Worker`](task_runner) per partition. Each
//! superstep every worker runs the vertex [`Task`](task::Task) over its own
//! vertices, then the messages they emitted are merged and delivered before
//! the next superstep starts.
use crate::errors::GraphError;
use rayon::{ThreadPool, ThreadPoolBuilder};

pub mod context;
pub mod eval_vertex;
pub mod task;
pub mod task_runner;

pub fn custom_pool(n_threads: usize) -> Result<ThreadPool, GraphError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .thread_name(|i| format!("graphstep-worker-{i}"))
        .build()?;
    Ok(pool)
}
