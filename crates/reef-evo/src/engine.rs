use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reef_core::{Diagnostics, Report, TracingDiagnostics};
use serde::Serialize;

use crate::config::EvolutionConfig;
use crate::error::EvolutionError;
use crate::fitness::FitnessValue;
use crate::genotype::Genotype;

/// Result of a search run.
#[derive(Debug, Clone, Serialize)]
pub struct Evolved<G> {
    pub genotype: G,
    pub fitness: FitnessValue,
    /// 1-based generation the genotype was picked in.
    pub generation: usize,
    /// `false` when the generation budget ran out and this is only the best candidate seen.
    pub suitable: bool,
}

struct Scored<G> {
    genotype: G,
    fitness: FitnessValue,
}

/// Elitist, mutation-only evolutionary search over a fixed-size population.
///
/// The engine is `Send` whenever `G` and the diagnostics sink `D` are, so a built engine can be
/// moved onto a worker thread for the blocking search.
pub struct EvolutionaryPcg<G, D = TracingDiagnostics> {
    config: EvolutionConfig,
    population: Vec<G>,
    elite_size: usize,
    rng: StdRng,
    diagnostics: D,
}

impl<G: Genotype> EvolutionaryPcg<G> {
    /// Builds the initial population, reporting to `tracing`.
    pub fn new(
        initializer: impl FnMut() -> G,
        config: EvolutionConfig,
    ) -> Result<Self, EvolutionError> {
        Self::with_diagnostics(initializer, config, TracingDiagnostics::new("reef_evo"))
    }
}

impl<G: Genotype, D: Diagnostics> EvolutionaryPcg<G, D> {
    /// Builds the initial population by calling `initializer` once per slot.
    ///
    /// An odd population size is reported and accepted: the elite is `population_size / 2` and
    /// the last slot of every new generation carries over the lowest-ranked individual.
    pub fn with_diagnostics(
        mut initializer: impl FnMut() -> G,
        config: EvolutionConfig,
        mut diagnostics: D,
    ) -> Result<Self, EvolutionError> {
        if config.population_size == 0 {
            return Err(EvolutionError::EmptyPopulation);
        }

        if config.population_size % 2 != 0 {
            diagnostics.report(Report::warn(format!(
                "population size must be even (got {})",
                config.population_size
            )));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let population = (0..config.population_size)
            .map(|_| initializer())
            .collect();

        Ok(Self {
            elite_size: config.population_size / 2,
            config,
            population,
            rng,
            diagnostics,
        })
    }

    /// Replaces the shuffle source, e.g. to share one seeded stream across engines.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn population(&self) -> &[G] {
        &self.population
    }

    pub fn elite_size(&self) -> usize {
        self.elite_size
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Runs generations until a suitable genotype turns up, returning it.
    ///
    /// Never fails: once `max_generations` is reached the best candidate of that generation is
    /// returned instead.
    pub fn generate_fit_genotype(&mut self) -> G {
        self.evolve().genotype
    }

    /// Same search as [`EvolutionaryPcg::generate_fit_genotype`], with the winner's fitness and
    /// the generation it was found in.
    pub fn evolve(&mut self) -> Evolved<G> {
        let mut generation = 1;

        loop {
            let ranked = self.rank();

            if let Some(winner) = ranked.iter().find(|s| s.fitness.is_suitable()) {
                let evolved = Evolved {
                    genotype: winner.genotype.clone(),
                    fitness: winner.fitness,
                    generation,
                    suitable: true,
                };
                if self.config.debug {
                    self.progress(format!("found suitable genotype at generation: {generation}"));
                    self.progress(format!("final fitness: {}", evolved.fitness));
                }
                self.restore(ranked);
                return evolved;
            }

            if generation >= self.config.max_generations {
                // The population is never empty, so there is always a head.
                let best = &ranked[0];
                let evolved = Evolved {
                    genotype: best.genotype.clone(),
                    fitness: best.fitness,
                    generation,
                    suitable: false,
                };
                if self.config.debug {
                    self.progress(format!("reached max generations: {generation}"));
                    self.progress(format!("final fitness: {}", evolved.fitness));
                }
                self.restore(ranked);
                return evolved;
            }

            self.breed(ranked);
            generation += 1;
        }
    }

    /// Runs one generation without checking for a winner.
    pub fn advance(&mut self) {
        let ranked = self.rank();
        self.breed(ranked);
    }

    /// Shuffles, scores and sorts the population by descending fitness.
    ///
    /// The sort is stable, so ties keep their shuffled order.
    fn rank(&mut self) -> Vec<Scored<G>> {
        self.population.shuffle(&mut self.rng);

        let mut ranked: Vec<Scored<G>> = self
            .population
            .drain(..)
            .map(|genotype| {
                let fitness = genotype.fitness();
                Scored { genotype, fitness }
            })
            .collect();

        for scored in &ranked {
            if let Some(anomaly) = scored.fitness.anomaly() {
                self.diagnostics.report(Report::error(anomaly.to_string()));
            }
        }

        ranked.sort_by(|a, b| b.fitness.value().cmp(&a.fitness.value()));
        ranked
    }

    fn restore(&mut self, ranked: Vec<Scored<G>>) {
        self.population = ranked.into_iter().map(|s| s.genotype).collect();
    }

    /// Keeps the elite in the first half and overwrites the second half with mutated copies.
    fn breed(&mut self, ranked: Vec<Scored<G>>) {
        self.restore(ranked);

        let elite = self.elite_size;
        for i in 0..elite {
            let mut offspring = self.population[i].clone();
            offspring.mutate(&mut self.rng);
            self.population[elite + i] = offspring;
        }
    }

    fn progress(&mut self, message: String) {
        self.diagnostics.report(Report::info(message));
    }
}

impl<G, D> std::fmt::Debug for EvolutionaryPcg<G, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvolutionaryPcg")
            .field("config", &self.config)
            .field("population", &self.population.len())
            .field("elite_size", &self.elite_size)
            .finish_non_exhaustive()
    }
}
