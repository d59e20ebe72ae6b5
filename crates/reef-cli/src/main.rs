//! reef CLI - run the engines without a host application.
//!
//! - `reef-cli evolve` - evolve a phrase toward a target string
//! - `reef-cli patrol` - tick a guard behaviour tree and print each status

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use reef::bt::{Action, BehaviourTree, Condition, Node, NodeResult, Selector, Sequence};
use reef::evo::{EvolutionConfig, EvolutionaryPcg, FitnessValue, Genotype};

const ALPHABET: std::ops::RangeInclusive<u8> = b' '..=b'z';

#[derive(Parser)]
#[command(name = "reef-cli")]
#[command(about = "Behaviour trees and evolutionary content generation", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve a phrase until it matches a target string
    Evolve {
        /// YAML evolution config; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Target phrase (characters between ' ' and 'z')
        #[arg(long, default_value = "hello reef")]
        target: String,

        #[arg(long)]
        population: Option<usize>,

        #[arg(long)]
        generations: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,

        /// Report progress lines while searching
        #[arg(long)]
        debug: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Tick a guard that patrols between posts and attacks when it spots an enemy
    Patrol {
        #[arg(long, default_value_t = 12)]
        ticks: u64,

        /// An enemy is visible on every Nth tick (0 = never)
        #[arg(long, default_value_t = 5)]
        enemy_every: u64,

        /// Steps between patrol posts
        #[arg(long, default_value_t = 3)]
        post_distance: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Evolve {
            config,
            target,
            population,
            generations,
            seed,
            debug,
            json,
        } => {
            let mut config = match config {
                Some(path) => EvolutionConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => EvolutionConfig::default(),
            };
            if let Some(population) = population {
                config.population_size = population;
            }
            if let Some(generations) = generations {
                config.max_generations = generations;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            config.debug |= debug;

            evolve_phrase(&target, config, json)
        }
        Commands::Patrol {
            ticks,
            enemy_every,
            post_distance,
        } => {
            patrol(ticks, enemy_every, post_distance);
            Ok(())
        }
    }
}

#[derive(Debug, Clone)]
struct Phrase {
    text: Vec<u8>,
    target: Rc<[u8]>,
}

impl Genotype for Phrase {
    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let i = rng.gen_range(0..self.text.len());
        self.text[i] = rng.gen_range(ALPHABET);
    }

    fn fitness(&self) -> FitnessValue {
        let matching = self
            .text
            .iter()
            .zip(self.target.iter())
            .filter(|(a, b)| a == b)
            .count();
        FitnessValue::new(matching as i32, self.target.len() as i32)
    }
}

#[derive(Serialize)]
struct EvolveSummary {
    phrase: String,
    target: String,
    fitness: FitnessValue,
    generation: usize,
    suitable: bool,
}

fn evolve_phrase(target: &str, config: EvolutionConfig, json: bool) -> Result<()> {
    if target.is_empty() {
        bail!("target phrase must not be empty");
    }
    if let Some(c) = target.bytes().find(|b| !ALPHABET.contains(b)) {
        bail!("target contains unsupported character {:?}", c as char);
    }

    tracing::info!(
        target_len = target.len(),
        population = config.population_size,
        max_generations = config.max_generations,
        "Evolving phrase"
    );

    let target_bytes: Rc<[u8]> = Rc::from(target.as_bytes());
    let mut init_rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ 0x5EED),
        None => StdRng::from_entropy(),
    };
    let initializer = || Phrase {
        text: (0..target_bytes.len())
            .map(|_| init_rng.gen_range(ALPHABET))
            .collect(),
        target: target_bytes.clone(),
    };

    let mut pcg = EvolutionaryPcg::new(initializer, config).context("building population")?;
    let evolved = pcg.evolve();

    let summary = EvolveSummary {
        phrase: String::from_utf8_lossy(&evolved.genotype.text).into_owned(),
        target: target.to_string(),
        fitness: evolved.fitness,
        generation: evolved.generation,
        suitable: evolved.suitable,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("phrase:     {}", summary.phrase);
        println!(
            "fitness:    {}/{}",
            summary.fitness,
            summary.fitness.suitable_threshold()
        );
        println!("generation: {}", summary.generation);
        println!("suitable:   {}", summary.suitable);
    }

    Ok(())
}

#[derive(Debug)]
struct Guard {
    tick: u64,
    enemy_every: u64,
    post_distance: u32,
    steps_left: u32,
    posts_reached: u32,
    attacks: u32,
}

impl Guard {
    fn sees_enemy(&self) -> bool {
        self.enemy_every > 0 && self.tick % self.enemy_every == 0
    }
}

fn guard_tree() -> BehaviourTree<Guard> {
    let engage: Sequence<Guard> = Sequence::new(vec![
        Box::new(Condition::new(Guard::sees_enemy)),
        Box::new(Action::new(|g: &mut Guard| {
            g.attacks += 1;
            NodeResult::Success
        })),
    ]);

    let walk = Action::new(|g: &mut Guard| {
        if g.steps_left == 0 {
            g.posts_reached += 1;
            g.steps_left = g.post_distance;
            return NodeResult::Success;
        }
        g.steps_left -= 1;
        NodeResult::Running
    });

    let root: Selector<Guard> =
        Selector::new(vec![Box::new(engage) as Box<dyn Node<Guard>>, Box::new(walk)]);
    BehaviourTree::new(Box::new(root))
}

fn patrol(ticks: u64, enemy_every: u64, post_distance: u32) {
    let mut tree = guard_tree();
    let mut guard = Guard {
        tick: 0,
        enemy_every,
        post_distance,
        steps_left: post_distance,
        posts_reached: 0,
        attacks: 0,
    };

    tracing::info!(nodes = tree.node_count(), depth = tree.depth(), "Patrolling");

    for tick in 1..=ticks {
        guard.tick = tick;
        let status = tree.tick(&mut guard);
        println!(
            "tick {tick:>3}: {status:?} (steps left: {}, posts: {}, attacks: {})",
            guard.steps_left, guard.posts_reached, guard.attacks
        );
    }
}
