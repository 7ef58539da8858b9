use super::assert_eq_hashmaps_approx;
use graphstep::{
    algorithms::centrality::{pagerank::page_rank, pregel_pagerank::pregel_page_rank},
    graph_loader::sample::directed_graph,
    graphgen::random_attachment::random_graph,
    prelude::*,
};
use proptest::prelude::*;

fn final_ranks(result: &AlgorithmResult) -> indexmap::IndexMap<String, f64> {
    result
        .last_step()
        .and_then(|step| step.page_rank_values.clone())
        .unwrap_or_default()
}

#[test]
fn test_page_rank_home_collects_the_most_rank() {
    let g = directed_graph();
    let result = page_rank(&g, Some(50), Some(0.85));
    assert!(result.found);
    assert_eq!(result.path[0], "Home");
    let ranks = final_ranks(&result);
    // no dangling pages, so the mass stays at one
    assert!((ranks.values().sum::<f64>() - 1.0).abs() < 1e-9);
    assert!(ranks.values().all(|rank| *rank > 0.0));
    let last = result.last_step().unwrap();
    assert_eq!(last.node_state("Home"), NodeState::Path);
    assert!(last.message.starts_with("PageRank complete! Highest: 'Home'"));
}

#[test]
fn test_damping_zero_is_uniform() {
    let g = directed_graph();
    let ranks = final_ranks(&page_rank(&g, Some(5), Some(0.0)));
    for rank in ranks.values() {
        assert!((rank - 0.2).abs() < 1e-12);
    }
}

#[test]
fn test_dispatch_uses_configured_parameters() {
    let g = directed_graph();
    let config = AlgorithmConfig {
        damping_factor: 0.5,
        max_iterations: 7,
        ..Default::default()
    };
    let dispatched = run_algorithm(&g, AlgorithmType::PageRank, None, None, &config);
    assert_eq!(dispatched, page_rank(&g, Some(7), Some(0.5)));

    let pregel = run_algorithm(&g, AlgorithmType::PregelPageRank, None, None, &config);
    // superstep 0 plus one step per superstep
    assert_eq!(pregel.steps.len(), 8);
}

#[test]
fn test_pregel_matches_central_rank_on_sample() {
    let g = directed_graph();
    let central = page_rank(&g, Some(200), None);
    for strategy in [PartitionStrategy::Hash, PartitionStrategy::Range] {
        let pregel = pregel_page_rank(&g, 3, strategy, Some(200), None, Some(2));
        assert_eq_hashmaps_approx(&final_ranks(&central), &final_ranks(&pregel), 1e-9);
        assert_eq!(central.path, pregel.path);
    }
}

proptest! {
    #[test]
    fn pregel_and_central_rankings_agree(
        n in 2usize..40,
        k in 1usize..4,
        seed in any::<u64>(),
        partitions in 1usize..6,
    ) {
        let g = random_graph(n, k, true, seed);
        let central = final_ranks(&page_rank(&g, Some(200), None));
        let pregel = final_ranks(&pregel_page_rank(
            &g,
            partitions,
            PartitionStrategy::Hash,
            Some(200),
            None,
            None,
        ));
        for (id, rank) in &central {
            prop_assert!((rank - pregel[id]).abs() < 1e-9, "{} {} {}", id, rank, pregel[id]);
        }
    }

    #[test]
    fn pregel_rank_does_not_depend_on_threads(n in 2usize..40, seed in any::<u64>()) {
        let g = random_graph(n, 2, false, seed);
        let single = pregel_page_rank(&g, 4, PartitionStrategy::Range, Some(10), None, Some(1));
        let pooled = pregel_page_rank(&g, 4, PartitionStrategy::Range, Some(10), None, Some(4));
        prop_assert_eq!(single, pooled);
    }
}
