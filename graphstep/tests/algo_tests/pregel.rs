use super::{graph_with_endpoints, hop_distances};
use graphstep::{
    algorithms::pathing::pregel_bfs::pregel_bfs,
    graph_loader::sample::{disconnected_graph, grid_graph},
    prelude::*,
};
use graphstep_api::core::utils::logging::global_info_logger;
use proptest::prelude::*;

#[test]
fn test_pregel_bfs_stays_in_its_component() {
    global_info_logger();
    let g = disconnected_graph();
    let result = pregel_bfs(&g, "X", 2, PartitionStrategy::Hash, None);
    assert!(result.found);
    assert_eq!(result.path, vec!["X", "Y", "Z"]);
    let last = result.last_step().unwrap();
    assert_eq!(
        last.message,
        "Pregel BFS complete! Reached 3 of 6 vertices, farthest at distance 1"
    );
    assert_eq!(last.distances.as_ref().unwrap()["A"], f64::INFINITY);
}

#[test]
fn test_partition_stats_cover_every_superstep() {
    let g = grid_graph();
    let result = pregel_bfs(&g, "5", 3, PartitionStrategy::Range, None);
    let (summary, supersteps) = result.steps.split_last().unwrap();
    assert!(summary.partition_stats.is_none());
    for step in supersteps {
        let stats = step.partition_stats.as_ref().unwrap();
        assert_eq!(stats.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    }
    // the centre of the grid is two hops from every corner
    assert_eq!(summary.distances.as_ref().unwrap()["9"], 2.0);
}

#[test]
fn test_dispatch_requires_a_source() {
    let g = grid_graph();
    let config = AlgorithmConfig::default();
    let result = run_algorithm(&g, AlgorithmType::PregelBfs, None, None, &config);
    assert_eq!(result.error.as_deref(), Some("Select a source"));
    let result = run_algorithm(&g, AlgorithmType::PregelBfs, Some("1"), None, &config);
    assert_eq!(result.path.len(), 9);
}

proptest! {
    #[test]
    fn pregel_bfs_matches_sequential_hops(
        (g, s, _) in graph_with_endpoints(),
        partitions in 1usize..5,
        threads in 1usize..4,
    ) {
        let expected = hop_distances(&g, &s);
        let result = pregel_bfs(&g, &s, partitions, PartitionStrategy::Hash, Some(threads));
        let distances = result.last_step().unwrap().distances.clone().unwrap();
        for (index, id) in g.node_ids().enumerate() {
            match expected[index] {
                Some(hops) => prop_assert_eq!(distances[id], hops as f64),
                None => prop_assert_eq!(distances[id], f64::INFINITY),
            }
        }
        prop_assert_eq!(result.path.len(), expected.iter().flatten().count());
    }
}
