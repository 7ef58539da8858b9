use super::{graph_with_endpoints, hop_distances, weighted_distances};
use graphstep::{
    algorithms::pathing::{
        bidirectional_bfs::bidirectional_bfs, dfs::dfs, dijkstra::dijkstra,
        single_source_shortest_path::shortest_path,
    },
    graph_loader::sample::{disconnected_graph, simple_path, weighted_graph},
    prelude::*,
    test_utils::{is_valid_path, path_weight},
};
use itertools::Itertools;
use proptest::prelude::*;

type PathEngine = fn(&Graph, &str, &str) -> AlgorithmResult;

const ENGINES: [(&str, PathEngine); 4] = [
    ("bfs", shortest_path),
    ("bidirectional", bidirectional_bfs),
    ("dijkstra", dijkstra),
    ("dfs", dfs),
];

#[test]
fn test_all_engines_agree_on_the_diamond() {
    let g = simple_path();
    for (name, engine) in ENGINES {
        let result = engine(&g, "A", "E");
        assert!(result.found, "{name}");
        assert_eq!(result.path.first().map(String::as_str), Some("A"), "{name}");
        assert_eq!(result.path.last().map(String::as_str), Some("E"), "{name}");
        assert!(is_valid_path(&g, &result.path), "{name}");
        assert_eq!(result.metrics.as_ref().unwrap().path_length, result.path_length());
    }
    assert_eq!(shortest_path(&g, "A", "E").path, vec!["A", "B", "D", "E"]);
    assert_eq!(bidirectional_bfs(&g, "A", "E").path, vec!["A", "B", "D", "E"]);
}

#[test]
fn test_no_engine_crosses_components() {
    let g = disconnected_graph();
    for (name, engine) in ENGINES {
        let result = engine(&g, "A", "Z");
        assert!(!result.found, "{name}");
        assert!(result.error.is_none(), "{name}");
        assert!(result.path.is_empty(), "{name}");
        assert!(!result.steps.is_empty(), "{name}");
        let last = result.last_step().unwrap();
        assert!(last.nodes_in(NodeState::Path).is_empty(), "{name}");
        assert_eq!(last.node_state("Z"), NodeState::Target, "{name}");
    }
}

#[test]
fn test_trivial_and_invalid_requests() {
    let g = weighted_graph();
    for (name, engine) in ENGINES {
        let trivial = engine(&g, "S", "S");
        assert!(trivial.found, "{name}");
        assert_eq!(trivial.path, vec!["S"]);
        assert_eq!(trivial.steps.len(), 1);
        assert_eq!(trivial.steps[0].node_state("S"), NodeState::Path);

        let missing = engine(&g, "S", "nowhere");
        assert_eq!(missing.error.as_deref(), Some("Target node 'nowhere' not found"));
        assert!(missing.steps.is_empty());
        assert!(!missing.found);
    }
}

#[test]
fn test_dijkstra_prefers_cheap_detours() {
    let g = weighted_graph();
    let result = dijkstra(&g, "S", "T");
    assert_eq!(result.path, vec!["S", "B", "A", "C", "T"]);
    assert_eq!(path_weight(&g, &result.path), 11.0);
    let distances = result.last_step().unwrap().distances.clone().unwrap();
    assert_eq!(distances["A"], 3.0);
    assert_eq!(distances["D"], 9.0);
    // fewest hops is not cheapest here
    assert_eq!(shortest_path(&g, "S", "T").path_length(), Some(3));
}

#[test]
fn test_traces_are_replayable() {
    let g = simple_path();
    let result = dfs(&g, "A", "E");
    let mut replay = Replay::new(&result.steps);
    let mut seen = 1;
    while replay.step_forward() {
        seen += 1;
    }
    assert_eq!(seen, result.steps.len());
    assert_eq!(replay.current(), result.last_step());
    assert!(replay.is_finished());
}

#[test]
fn test_directed_edges_are_one_way() {
    let g = graphstep::test_utils::graph_from_edges(true, &[("A", "B"), ("B", "C")]);
    for (name, engine) in ENGINES {
        assert!(engine(&g, "A", "C").found, "{name}");
        let back = engine(&g, "C", "A");
        assert!(!back.found, "{name}");
        assert!(back.error.is_none(), "{name}");
    }
}

proptest! {
    #[test]
    fn bfs_and_bidirectional_find_minimal_hops((g, s, t) in graph_with_endpoints()) {
        let expected = hop_distances(&g, &s)[g.node_index(&t).unwrap()];
        let bfs = shortest_path(&g, &s, &t);
        let bidirectional = bidirectional_bfs(&g, &s, &t);
        prop_assert_eq!(bfs.path_length(), expected);
        prop_assert_eq!(bidirectional.path_length(), expected);
        prop_assert_eq!(bfs.found, expected.is_some());
        prop_assert_eq!(bidirectional.found, expected.is_some());
        prop_assert!(is_valid_path(&g, &bfs.path));
        prop_assert!(is_valid_path(&g, &bidirectional.path));
    }

    #[test]
    fn dijkstra_finds_minimal_weight((g, s, t) in graph_with_endpoints()) {
        let expected = weighted_distances(&g, &s)[g.node_index(&t).unwrap()];
        let result = dijkstra(&g, &s, &t);
        prop_assert_eq!(result.found, expected.is_finite());
        if result.found {
            prop_assert!(is_valid_path(&g, &result.path));
            prop_assert!((path_weight(&g, &result.path) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn dfs_returns_a_simple_valid_path((g, s, t) in graph_with_endpoints()) {
        let reachable = hop_distances(&g, &s)[g.node_index(&t).unwrap()].is_some();
        let result = dfs(&g, &s, &t);
        prop_assert_eq!(result.found, reachable);
        if result.found {
            prop_assert_eq!(result.path.first(), Some(&s));
            prop_assert_eq!(result.path.last(), Some(&t));
            prop_assert!(is_valid_path(&g, &result.path));
            prop_assert!(result.path.iter().all_unique());
        }
    }

    #[test]
    fn engines_are_deterministic((g, s, t) in graph_with_endpoints()) {
        for (_, engine) in ENGINES {
            prop_assert_eq!(engine(&g, &s, &t), engine(&g, &s, &t));
        }
    }
}
