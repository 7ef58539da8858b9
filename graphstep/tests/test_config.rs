use graphstep::{
    config::{load_config, AppConfigBuilder},
    graph_loader::sample::directed_graph,
    prelude::*,
};
use graphstep_api::core::utils::logging::global_info_logger;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_overrides_builder_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("graphstep.toml");
    fs::write(
        &config_path,
        r#"
            [algorithm]
            max_iterations = 3
        "#,
    )
    .unwrap();
    let app_config = AppConfigBuilder::new()
        .with_damping_factor(0.6)
        .with_max_iterations(40)
        .build();

    let config = load_config(Some(app_config), Some(config_path)).unwrap();
    assert_eq!(config.algorithm.max_iterations, 3);
    assert_eq!(config.algorithm.damping_factor, 0.6);
    assert_eq!(config.logging.log_level, "INFO");
}

#[test]
fn test_loaded_config_drives_the_engines() {
    global_info_logger();
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("graphstep.json");
    fs::write(
        &config_path,
        r#"{"algorithm": {"num_partitions": 2, "partition_strategy": "range", "max_iterations": 4}}"#,
    )
    .unwrap();
    let config = load_config(None, Some(config_path)).unwrap().algorithm;

    let result = run_algorithm(&directed_graph(), AlgorithmType::PregelPageRank, None, None, &config);
    assert_eq!(result.steps.len(), 5);
    let stats = result.steps[1].partition_stats.as_ref().unwrap();
    assert_eq!(stats.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
    assert!(result.steps[0]
        .message
        .ends_with("5 vertices distributed across 2 partitions."));
}

#[test]
fn test_unknown_sections_are_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("graphstep.toml");
    fs::write(&config_path, "[algorithm]\nspeed = 11\n").unwrap();
    assert!(load_config(None, Some(config_path)).is_err());
}
