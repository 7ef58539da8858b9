use graphstep::{
    graph_loader::sample::{directed_graph, sample_graphs},
    io::json::{load_graph_file, load_graph_str, save_graph_file, save_graph_string},
    prelude::*,
};
use graphstep_api::core::utils::logging::global_info_logger;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_every_sample_survives_the_filesystem() {
    global_info_logger();
    let dir = TempDir::new().unwrap();
    for (name, graph) in sample_graphs() {
        let path = dir.path().join(format!("{name}.json"));
        save_graph_file(&graph, &path).unwrap();
        let (loaded, report) = load_graph_file(&path).unwrap();
        assert_eq!(loaded, graph, "{name}");
        assert_eq!(report.nodes, graph.count_nodes());
        assert_eq!(report.edges, graph.count_edges());
        assert!(report.dropped_edges.is_empty());
    }
}

#[test]
fn test_partition_ids_are_written_when_present() {
    let graph = partition(&directed_graph(), PartitionStrategy::Hash, 4);
    let json = save_graph_string(&graph).unwrap();
    assert!(json.contains("\"partitionId\": 3"));
    let (loaded, _) = load_graph_str(&json).unwrap();
    assert_eq!(loaded.node("Home").unwrap().partition_id, Some(3));
}

#[test]
fn test_reloaded_graph_gives_identical_results() {
    let graph = directed_graph();
    let (loaded, _) = load_graph_str(&save_graph_string(&graph).unwrap()).unwrap();
    let config = AlgorithmConfig::default();
    for kind in AlgorithmType::ALL {
        let (source, target) = (Some("Blog"), Some("Contact"));
        assert_eq!(
            run_algorithm(&graph, kind, source, target, &config),
            run_algorithm(&loaded, kind, source, target, &config),
            "{kind}"
        );
    }
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(load_graph_file(missing), Err(GraphError::IOError(_))));
}

#[test]
fn test_results_serialise_to_camel_case() {
    let graph = directed_graph();
    let result = run_algorithm(
        &graph,
        AlgorithmType::PregelPageRank,
        None,
        None,
        &AlgorithmConfig::default(),
    );
    let json = serde_json::to_value(&result).unwrap();
    let first = &json["steps"][0];
    assert!(first["nodeStates"].is_object());
    assert!(first["pageRankValues"].is_object());
    assert!(first["partitionStats"]["0"]["activeNodes"].is_number());
    assert_eq!(json["found"], true);
    assert_eq!(json["metrics"]["timeComplexity"], "O(L * (V+E)/P)");
    assert!(json.get("error").is_none());
}
