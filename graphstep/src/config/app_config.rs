use crate::{
    config::{algorithm_config::AlgorithmConfig, log_config::LoggingConfig},
    db::partition::PartitionStrategy,
    errors::GraphError,
};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub algorithm: AlgorithmConfig,
}

pub struct AppConfigBuilder {
    logging: LoggingConfig,
    algorithm: AlgorithmConfig,
}

impl From<AppConfig> for AppConfigBuilder {
    fn from(config: AppConfig) -> Self {
        Self {
            logging: config.logging,
            algorithm: config.algorithm,
        }
    }
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfig::default().into()
    }

    pub fn with_log_level(mut self, log_level: String) -> Self {
        self.logging.log_level = log_level;
        self
    }

    pub fn with_damping_factor(mut self, damping_factor: f64) -> Self {
        self.algorithm.damping_factor = damping_factor;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.algorithm.max_iterations = max_iterations;
        self
    }

    pub fn with_num_partitions(mut self, num_partitions: usize) -> Self {
        self.algorithm.num_partitions = num_partitions;
        self
    }

    pub fn with_partition_strategy(mut self, partition_strategy: PartitionStrategy) -> Self {
        self.algorithm.partition_strategy = partition_strategy;
        self
    }

    pub fn build(self) -> AppConfig {
        AppConfig {
            logging: self.logging,
            algorithm: self.algorithm,
        }
    }
}

// Order of precedence of config loading: config path >> app_config >> config default
// The given (or default) app config seeds the defaults and the file at
// config_path is layered on top. The merged result is validated before use.
// Callers that want their own values to beat the file apply them afterwards
// through `AppConfigBuilder::from`.
pub fn load_config(
    app_config: Option<AppConfig>,
    config_path: Option<PathBuf>,
) -> Result<AppConfig, GraphError> {
    let app_config = app_config.unwrap_or_default();
    let json = serde_json::to_string(&app_config)?;
    let mut builder = Config::builder().add_source(File::from_str(&json, FileFormat::Json));
    if let Some(config_path) = config_path {
        builder = builder.add_source(File::from(config_path));
    }
    let config = builder.build()?.try_deserialize::<AppConfig>()?;
    config.algorithm.validate()?;
    Ok(config)
}
