pub use crate::{
    algorithms::{
        algorithm_result::{AlgorithmMetrics, AlgorithmResult, AlgorithmStep, PartitionStats},
        run_algorithm, AlgorithmType,
    },
    config::{AlgorithmConfig, AppConfig, AppConfigBuilder},
    db::{
        partition::{partition, PartitionStrategy},
        replay::Replay,
    },
    errors::GraphError,
};
pub use graphstep_api::core::{
    entities::{edge_key, Edge, Graph, Node},
    Direction, EdgeState, NodeState,
};
