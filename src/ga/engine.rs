//! The generational loop.
//!
//! [`EvolutionEngine`] owns a population of [`Tour`]s and advances it one
//! generation at a time:
//! evaluate → record statistics → select → recombine → mutate → repeat.

use super::config::EngineConfig;
use super::operators::order_crossover;
use super::selection::roulette_select;
use super::stats::{FitnessHistory, GenerationStats};
use super::tour::Tour;
use crate::cities::CityMap;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Where the engine is in its generational loop.
///
/// Between generations the engine rests in [`Phase::Evaluating`], the
/// first step of the next generation, or in [`Phase::Terminated`] once the
/// last generation is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Population created and generation 0 recorded; no generation run yet.
    Initialized,
    /// Recomputing fitness and recording statistics.
    Evaluating,
    /// Drawing the mating pool.
    Selecting,
    /// Producing offspring from adjacent pairs.
    Recombining,
    /// Applying swap mutation to the offspring.
    Mutating,
    /// All `max_generations` generations are done.
    Terminated,
}

/// Snapshot of a finished run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EvolutionResult {
    /// Highest-fitness tour of the final population.
    pub best: Tour,
    /// Lowest-fitness tour of the final population.
    pub worst: Tour,
    /// Statistics per recorded generation, `generations + 1` entries.
    pub history: FitnessHistory,
    /// Number of generations executed.
    pub generations: usize,
}

/// Genetic algorithm over tours of a shared [`CityMap`].
///
/// The engine borrows the map, owns its population, history and random
/// source. Independent engines share nothing mutable, so separate
/// repetitions may run on separate threads.
///
/// # Usage
///
/// ```
/// use u_tsp_ga::cities::CityMap;
/// use u_tsp_ga::ga::{EngineConfig, EvolutionEngine};
///
/// let cities = CityMap::ten_cities();
/// let config = EngineConfig::default()
///     .with_population_size(40)
///     .with_max_generations(30)
///     .with_seed(7);
///
/// let mut engine = EvolutionEngine::new(&cities, config).unwrap();
/// engine.run();
///
/// assert_eq!(engine.history().len(), 31);
/// assert!(engine.best().fitness() >= engine.worst().fitness());
/// ```
pub struct EvolutionEngine<'a, R: Rng = StdRng> {
    cities: &'a CityMap,
    config: EngineConfig,
    rng: R,
    population: Vec<Tour>,
    history: FitnessHistory,
    generation: usize,
    phase: Phase,
}

impl<'a> EvolutionEngine<'a, StdRng> {
    /// Builds an engine whose generator is seeded from `config.seed`, or
    /// from a random seed when none is set.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter) if the
    /// configuration does not validate.
    pub fn new(cities: &'a CityMap, config: EngineConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::with_rng(cities, config, rng)
    }
}

impl<'a, R: Rng> EvolutionEngine<'a, R> {
    /// Builds an engine that draws all randomness from `rng`.
    ///
    /// `config.seed` is ignored. The initial population is created and
    /// its statistics recorded as generation 0.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter) if the
    /// configuration does not validate.
    pub fn with_rng(cities: &'a CityMap, config: EngineConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let population: Vec<Tour> = (0..config.population_size)
            .map(|_| Tour::random(cities, &mut rng))
            .collect();

        let mut engine = Self {
            cities,
            history: FitnessHistory::with_capacity(config.max_generations + 1),
            config,
            rng,
            population,
            generation: 0,
            phase: Phase::Initialized,
        };
        engine.record_statistics();
        Ok(engine)
    }

    /// Runs every remaining generation.
    ///
    /// After this returns the engine is [`Phase::Terminated`]; further
    /// calls do nothing.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            population = self.config.population_size,
            generations = self.config.max_generations,
        )
    )]
    pub fn run(&mut self) {
        while self.next_generation() {}

        let best = self.best();
        info!(
            generations = self.generation,
            best_length = best.length(),
            best_fitness = best.fitness(),
            "evolution finished"
        );
    }

    /// Advances exactly one generation.
    ///
    /// Returns `false` without doing anything once `max_generations`
    /// generations have run.
    pub fn next_generation(&mut self) -> bool {
        if self.generation >= self.config.max_generations {
            self.phase = Phase::Terminated;
            return false;
        }

        self.phase = Phase::Evaluating;
        self.evaluate();
        self.record_statistics();

        self.phase = Phase::Selecting;
        let pool = roulette_select(&self.population, &mut self.rng);

        self.phase = Phase::Recombining;
        self.population = recombine(
            pool,
            self.config.crossover_rate,
            self.cities,
            &mut self.rng,
        );

        self.phase = Phase::Mutating;
        for tour in &mut self.population {
            tour.mutate(self.config.mutation_rate, self.cities, &mut self.rng);
        }

        self.generation += 1;
        self.phase = if self.generation == self.config.max_generations {
            Phase::Terminated
        } else {
            Phase::Evaluating
        };
        true
    }

    /// Recomputes every tour's fitness from its genes.
    fn evaluate(&mut self) {
        for tour in &mut self.population {
            tour.evaluate(self.cities);
        }
    }

    fn record_statistics(&mut self) {
        let stats = GenerationStats::of(&self.population);
        debug!(
            generation = self.history.len(),
            average = stats.average,
            max = stats.max,
            min = stats.min,
            "generation recorded"
        );
        self.history.push(stats);
    }

    /// The highest-fitness tour; the earliest one wins ties.
    pub fn best(&self) -> &Tour {
        first_extreme(&self.population, |candidate, current| candidate > current)
    }

    /// The lowest-fitness tour; the earliest one wins ties.
    pub fn worst(&self) -> &Tour {
        first_extreme(&self.population, |candidate, current| candidate < current)
    }

    /// The current population.
    pub fn population(&self) -> &[Tour] {
        &self.population
    }

    /// All recorded statistics.
    pub fn history(&self) -> &FitnessHistory {
        &self.history
    }

    /// Mean fitness per recorded generation.
    pub fn average_fitness_history(&self) -> &[f64] {
        &self.history.average
    }

    /// Maximum fitness per recorded generation.
    pub fn max_fitness_history(&self) -> &[f64] {
        &self.history.max
    }

    /// Minimum fitness per recorded generation.
    pub fn min_fitness_history(&self) -> &[f64] {
        &self.history.min
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current state of the loop.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The shared city map.
    pub fn cities(&self) -> &'a CityMap {
        self.cities
    }

    /// Consumes the engine and returns its final best/worst tours and
    /// history.
    pub fn into_result(self) -> EvolutionResult {
        EvolutionResult {
            best: self.best().clone(),
            worst: self.worst().clone(),
            generations: self.generation,
            history: self.history,
        }
    }
}

/// Order crossover over disjoint adjacent pairs `(2i, 2i + 1)`.
///
/// Each pair is recombined with probability `crossover_rate` and copied
/// through otherwise. With an odd count the last tour is copied through.
fn recombine<R: Rng>(
    parents: Vec<Tour>,
    crossover_rate: f64,
    cities: &CityMap,
    rng: &mut R,
) -> Vec<Tour> {
    let mut offspring = Vec::with_capacity(parents.len());
    let mut parents = parents.into_iter();

    while let Some(parent1) = parents.next() {
        let Some(parent2) = parents.next() else {
            offspring.push(parent1);
            break;
        };

        if rng.random::<f64>() < crossover_rate {
            let (child1, child2) = order_crossover(parent1.genes(), parent2.genes(), rng);
            offspring.push(Tour::new(child1, cities));
            offspring.push(Tour::new(child2, cities));
        } else {
            offspring.push(parent1);
            offspring.push(parent2);
        }
    }

    offspring
}

/// Scans in order and keeps the current pick unless `replaces` says a
/// later candidate's fitness beats it.
fn first_extreme(population: &[Tour], replaces: impl Fn(f64, f64) -> bool) -> &Tour {
    population
        .iter()
        .reduce(|current, candidate| {
            if replaces(candidate.fitness(), current.fitness()) {
                candidate
            } else {
                current
            }
        })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
