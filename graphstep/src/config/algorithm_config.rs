use crate::{db::partition::PartitionStrategy, errors::GraphError};
use serde::{Deserialize, Serialize};

/// The knobs shared by the rank engines. Nothing else is recognised.
///
/// JSON payloads may use the camelCase names (`dampingFactor`, ...). Config
/// files layered through [`load_config`](super::load_config) must use the
/// snake_case names, since the defaults they are merged over are snake_case.
#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlgorithmConfig {
    #[serde(alias = "dampingFactor")]
    pub damping_factor: f64,
    #[serde(alias = "maxIterations")]
    pub max_iterations: usize,
    #[serde(alias = "numPartitions")]
    pub num_partitions: usize,
    #[serde(alias = "partitionStrategy")]
    pub partition_strategy: PartitionStrategy,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 20,
            num_partitions: 4,
            partition_strategy: PartitionStrategy::Hash,
        }
    }
}

impl AlgorithmConfig {
    pub fn validate(&self) -> Result<(), GraphError> {
        if !(0.0..=1.0).contains(&self.damping_factor) {
            return Err(GraphError::InvalidConfig {
                reason: format!(
                    "damping_factor must be within [0, 1], got {}",
                    self.damping_factor
                ),
            });
        }
        if self.max_iterations == 0 {
            return Err(GraphError::InvalidConfig {
                reason: "max_iterations must be positive".to_string(),
            });
        }
        if self.num_partitions == 0 {
            return Err(GraphError::InvalidConfig {
                reason: "num_partitions must be positive".to_string(),
            });
        }
        Ok(())
    }
}
