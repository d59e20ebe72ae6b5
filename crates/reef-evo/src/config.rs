//! Evolution run configuration, loadable from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of genotypes kept alive each generation. Should be even.
    pub population_size: usize,

    /// Generation budget. The best candidate so far is returned once it is spent.
    pub max_generations: usize,

    /// Report progress lines (generation index, final fitness).
    pub debug: bool,

    /// Seed for the population shuffle. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            debug: false,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.max_generations = max_generations;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = EvolutionConfig::from_yaml_str("population_size: 20\nseed: 7\n").unwrap();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, 100);
        assert!(!config.debug);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn empty_document_is_default() {
        let config = EvolutionConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, EvolutionConfig::default());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = EvolutionConfig::from_yaml_str("population_size: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn builders_override_fields() {
        let config = EvolutionConfig::default()
            .with_population_size(8)
            .with_max_generations(3)
            .with_debug(true)
            .with_seed(11);
        assert_eq!(config.population_size, 8);
        assert_eq!(config.max_generations, 3);
        assert!(config.debug);
        assert_eq!(config.seed, Some(11));
    }
}
