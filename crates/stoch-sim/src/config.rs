//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for population sampling. `None` seeds from system entropy.
    pub seed: Option<u64>,
    /// Give up after this many consecutive attempts that found too few
    /// molecules. `None` retries forever.
    pub max_stalled_attempts: Option<u64>,
}

/// Builder for simulation configuration.
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn max_stalled_attempts(mut self, attempts: u64) -> Self {
        self.config.max_stalled_attempts = Some(attempts);
        self
    }

    pub fn build(self) -> SimulationConfig {
        self.config
    }
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = SimulationConfigBuilder::new()
            .seed(7)
            .max_stalled_attempts(1000)
            .build();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_stalled_attempts, Some(1000));
        assert_eq!(SimulationConfigBuilder::default().build(), SimulationConfig::default());
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: SimulationConfig = serde_json::from_str(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_stalled_attempts, None);

        let empty: SimulationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SimulationConfig::default());
    }
}
