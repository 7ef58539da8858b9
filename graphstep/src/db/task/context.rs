use crate::{
    core::adj::{Adjacency, Neighbour},
    db::partition::{assign_partitions, PartitionStrategy},
};
use graphstep_api::core::{entities::Graph, Direction};

/// Partitioned view of a graph for one BSP run.
pub struct Context<'a> {
    graph: &'a Graph,
    adjacency: Adjacency,
    partitions: Vec<usize>,
    num_partitions: usize,
}

impl<'a> Context<'a> {
    /// Partitions `graph` with `strategy`; messages travel along `direction`.
    pub fn new(
        graph: &'a Graph,
        direction: Direction,
        strategy: PartitionStrategy,
        num_partitions: usize,
    ) -> Self {
        let num_partitions = num_partitions.max(1);
        Self {
            graph,
            adjacency: Adjacency::new(graph, direction),
            partitions: assign_partitions(graph, strategy, num_partitions),
            num_partitions,
        }
    }

    pub fn count_nodes(&self) -> usize {
        self.graph.count_nodes()
    }

    pub fn num_partitions(&self) -> usize {
        self.num_partitions
    }

    pub fn partition_of(&self, vertex: usize) -> usize {
        self.partitions.get(vertex).copied().unwrap_or(0)
    }

    pub fn partitions(&self) -> &[usize] {
        &self.partitions
    }

    pub fn out_neighbours(&self, vertex: usize) -> &[Neighbour] {
        self.adjacency.neighbours(vertex)
    }
}
