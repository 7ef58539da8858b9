use graphstep_api::core::utils::logging::{get_log_env, init_logger_with_filter};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl LoggingConfig {
    /// Filter for the graphstep crates at `log_level`; `RUST_LOG` wins when set.
    pub fn get_log_env(&self) -> EnvFilter {
        get_log_env(self.log_level.clone())
    }

    /// Installs the process-wide subscriber once; later calls are no-ops.
    pub fn init_logger(&self) {
        init_logger_with_filter(self.get_log_env())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
