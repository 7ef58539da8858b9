use graphstep_api::core::entities::GraphModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphModelError),
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
    #[error("Unknown partition strategy '{0}', expected 'hash' or 'range'")]
    UnknownPartitionStrategy(String),
    #[error("Sample graph '{0}' does not exist")]
    SampleGraphMissing(String),
    #[error("Invalid graph format: {0}")]
    InvalidGraphFormat(String),
    #[error("Failed to parse graph json: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Failed to build worker pool: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),
}
