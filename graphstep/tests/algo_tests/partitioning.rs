use graphstep::{
    db::partition::{assign_partitions, collation_order, partition, PartitionStrategy},
    graph_loader::sample::directed_graph,
    graphgen::random_attachment::random_graph,
};
use proptest::prelude::*;

#[test]
fn test_hash_partitions_of_directed_sample() {
    let g = partition(&directed_graph(), PartitionStrategy::Hash, 4);
    let assigned: Vec<(&str, Option<usize>)> = g
        .nodes()
        .map(|node| (node.id.as_str(), node.partition_id))
        .collect();
    assert_eq!(
        assigned,
        vec![
            ("Home", Some(3)),
            ("About", Some(1)),
            ("Products", Some(0)),
            ("Blog", Some(2)),
            ("Contact", Some(0)),
        ]
    );
}

#[test]
fn test_partitioning_leaves_the_input_alone() {
    let g = directed_graph();
    let partitioned = partition(&g, PartitionStrategy::Range, 2);
    assert!(g.nodes().all(|node| node.partition_id.is_none()));
    assert_eq!(partitioned.edges(), g.edges());
    assert_eq!(
        partitioned.node_ids().collect::<Vec<_>>(),
        g.node_ids().collect::<Vec<_>>()
    );
}

proptest! {
    #[test]
    fn assignment_is_deterministic_and_in_range(
        n in 0usize..60,
        seed in any::<u64>(),
        partitions in 1usize..9,
        range in any::<bool>(),
    ) {
        let strategy = if range { PartitionStrategy::Range } else { PartitionStrategy::Hash };
        let g = random_graph(n, 2, false, seed);
        let first = assign_partitions(&g, strategy, partitions);
        prop_assert_eq!(&first, &assign_partitions(&g, strategy, partitions));
        prop_assert_eq!(first.len(), n);
        prop_assert!(first.iter().all(|p| *p < partitions));
    }

    #[test]
    fn range_chunks_are_balanced_and_sorted(
        n in 1usize..60,
        seed in any::<u64>(),
        partitions in 2usize..9,
    ) {
        let g = random_graph(n, 1, true, seed);
        let assignment = assign_partitions(&g, PartitionStrategy::Range, partitions);
        let chunk = n.div_ceil(partitions);
        for p in 0..partitions {
            prop_assert!(assignment.iter().filter(|a| **a == p).count() <= chunk);
        }
        let mut by_id: Vec<(&str, usize)> = g.node_ids().zip(assignment.iter().copied()).collect();
        by_id.sort_by(|a, b| collation_order(a.0, b.0));
        prop_assert!(by_id.windows(2).all(|w| w[0].1 <= w[1].1));
    }
}
