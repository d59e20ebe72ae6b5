use std::fmt;

use reef_core::{Diagnostics, Report};
use serde::Serialize;

pub const DEFAULT_SUITABLE_THRESHOLD: i32 = 100;

/// Why a [`FitnessValue`] had to be clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FitnessAnomaly {
    /// The threshold was negative and has been raised to 0.
    NegativeThreshold { threshold: i32 },
    BelowZero { fitness: i32 },
    AboveThreshold { fitness: i32, threshold: i32 },
}

impl fmt::Display for FitnessAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessAnomaly::NegativeThreshold { threshold } => {
                write!(f, "created a fitness value with a negative threshold ({threshold})")
            }
            FitnessAnomaly::BelowZero { fitness } => {
                write!(f, "created a negative fitness value ({fitness})")
            }
            FitnessAnomaly::AboveThreshold { fitness, threshold } => write!(
                f,
                "created a fitness value ({fitness}) above the max value ({threshold})"
            ),
        }
    }
}

/// A candidate's quality, clamped into `[0, suitable_threshold]`.
///
/// Out-of-range inputs are never rejected. The value is clamped and the clamp is remembered as
/// an [`FitnessAnomaly`] so whoever evaluates it can report the bug in the fitness function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FitnessValue {
    fitness: i32,
    suitable_threshold: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    anomaly: Option<FitnessAnomaly>,
}

impl FitnessValue {
    pub fn new(fitness: i32, suitable_threshold: i32) -> Self {
        if suitable_threshold < 0 {
            return Self {
                fitness: 0,
                suitable_threshold: 0,
                anomaly: Some(FitnessAnomaly::NegativeThreshold {
                    threshold: suitable_threshold,
                }),
            };
        }

        let anomaly = if fitness < 0 {
            Some(FitnessAnomaly::BelowZero { fitness })
        } else if fitness > suitable_threshold {
            Some(FitnessAnomaly::AboveThreshold {
                fitness,
                threshold: suitable_threshold,
            })
        } else {
            None
        };

        Self {
            fitness: fitness.clamp(0, suitable_threshold),
            suitable_threshold,
            anomaly,
        }
    }

    /// Uses [`DEFAULT_SUITABLE_THRESHOLD`].
    pub fn from_fitness(fitness: i32) -> Self {
        Self::new(fitness, DEFAULT_SUITABLE_THRESHOLD)
    }

    /// Like [`FitnessValue::new`], reporting any clamp to `diagnostics` straight away.
    pub fn new_reported(
        fitness: i32,
        suitable_threshold: i32,
        diagnostics: &mut dyn Diagnostics,
    ) -> Self {
        let value = Self::new(fitness, suitable_threshold);
        if let Some(anomaly) = value.anomaly {
            diagnostics.report(Report::error(anomaly.to_string()));
        }
        value
    }

    pub fn value(&self) -> i32 {
        self.fitness
    }

    pub fn suitable_threshold(&self) -> i32 {
        self.suitable_threshold
    }

    pub fn is_suitable(&self) -> bool {
        self.fitness >= self.suitable_threshold
    }

    pub fn anomaly(&self) -> Option<FitnessAnomaly> {
        self.anomaly
    }
}

impl fmt::Display for FitnessValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fitness)
    }
}
