use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvolutionError {
    #[error("population size must be at least 1")]
    EmptyPopulation,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read evolution config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse evolution config")]
    Parse(#[from] serde_yaml::Error),
}
