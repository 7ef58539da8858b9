pub mod algorithm_config;
pub mod app_config;
pub mod log_config;

pub use algorithm_config::AlgorithmConfig;
pub use app_config::{load_config, AppConfig, AppConfigBuilder};
pub use log_config::{LoggingConfig, DEFAULT_LOG_LEVEL};
