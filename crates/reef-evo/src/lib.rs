//! Evolutionary search for procedural content generation.
//!
//! [`EvolutionaryPcg`] owns a fixed-size population of [`Genotype`]s and repeats
//! shuffle → evaluate → rank → elitist replacement until some candidate's [`FitnessValue`] is
//! suitable or the generation budget runs out. Reproduction is mutation-only: the top half of
//! each generation survives unchanged and mutated copies of it fill the bottom half.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod genotype;

pub use config::EvolutionConfig;
pub use engine::{EvolutionaryPcg, Evolved};
pub use error::{ConfigError, EvolutionError};
pub use fitness::{FitnessAnomaly, FitnessValue, DEFAULT_SUITABLE_THRESHOLD};
pub use genotype::Genotype;
