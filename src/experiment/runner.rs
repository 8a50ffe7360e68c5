//! Repetition loop and aggregation.

use super::config::ExperimentConfig;
use crate::cities::CityMap;
use crate::error::Result;
use crate::ga::{EngineConfig, EvolutionEngine, EvolutionResult, FitnessHistory, Tour};
use tracing::info;

/// Aggregate over all repetitions of an experiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExperimentSummary {
    /// Highest-fitness final tour over all runs; the earliest run wins ties.
    pub best: Tour,

    /// Lowest-fitness final tour over all runs; the earliest run wins ties.
    pub worst: Tour,

    /// Per-generation mean of each run's average/max/min series.
    pub mean_history: FitnessHistory,

    /// Mean of each run's best final fitness.
    pub mean_best_fitness: f64,

    /// Number of runs aggregated.
    pub repetitions: usize,
}

/// Runs an [`EvolutionEngine`] many times and aggregates the results.
///
/// # Usage
///
/// ```
/// use u_tsp_ga::cities::CityMap;
/// use u_tsp_ga::experiment::{Experiment, ExperimentConfig};
/// use u_tsp_ga::ga::EngineConfig;
///
/// let cities = CityMap::ten_cities();
/// let engine = EngineConfig::default().with_max_generations(10);
/// let experiment = ExperimentConfig::default().with_repetitions(8).with_seed(3);
///
/// let summary = Experiment::run(&cities, &engine, &experiment).unwrap();
/// assert_eq!(summary.repetitions, 8);
/// assert_eq!(summary.mean_history.len(), 11);
/// ```
pub struct Experiment;

impl Experiment {
    /// Runs `experiment.repetitions` independent engines built from
    /// `engine` and summarizes them.
    ///
    /// `engine.seed` is replaced per repetition by the seed derived from
    /// `experiment.seed`.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter) if either
    /// configuration does not validate.
    #[tracing::instrument(level = "info", skip_all, fields(repetitions = experiment.repetitions))]
    pub fn run(
        cities: &CityMap,
        engine: &EngineConfig,
        experiment: &ExperimentConfig,
    ) -> Result<ExperimentSummary> {
        engine.validate()?;
        experiment.validate()?;

        let results = run_repetitions(cities, engine, experiment)?;
        let summary = summarize(results);

        info!(
            best_length = summary.best.length(),
            worst_length = summary.worst.length(),
            mean_best_fitness = summary.mean_best_fitness,
            "experiment finished"
        );
        Ok(summary)
    }
}

fn run_once(cities: &CityMap, config: &EngineConfig, seed: u64) -> Result<EvolutionResult> {
    let mut engine = EvolutionEngine::new(cities, config.clone().with_seed(seed))?;
    engine.run();
    Ok(engine.into_result())
}

/// Results in repetition order, whichever way they were computed.
fn run_repetitions(
    cities: &CityMap,
    engine: &EngineConfig,
    experiment: &ExperimentConfig,
) -> Result<Vec<EvolutionResult>> {
    let seeds: Vec<u64> = (0..experiment.repetitions)
        .map(|i| experiment.seed_for(i))
        .collect();

    #[cfg(feature = "parallel")]
    {
        if experiment.parallel {
            use rayon::prelude::*;
            return seeds
                .par_iter()
                .map(|&seed| run_once(cities, engine, seed))
                .collect();
        }
    }

    seeds
        .iter()
        .map(|&seed| run_once(cities, engine, seed))
        .collect()
}

fn summarize(results: Vec<EvolutionResult>) -> ExperimentSummary {
    let repetitions = results.len();
    let mut results = results.into_iter();
    let first = results.next().expect("experiment has at least one repetition");

    let mut best = first.best;
    let mut worst = first.worst;
    let mut best_fitness_sum = best.fitness();
    let mut sums = first.history;

    for run in results {
        best_fitness_sum += run.best.fitness();
        if run.best.fitness() > best.fitness() {
            best = run.best;
        }
        if run.worst.fitness() < worst.fitness() {
            worst = run.worst;
        }
        accumulate(&mut sums.average, &run.history.average);
        accumulate(&mut sums.max, &run.history.max);
        accumulate(&mut sums.min, &run.history.min);
    }

    let n = repetitions as f64;
    for series in [&mut sums.average, &mut sums.max, &mut sums.min] {
        series.iter_mut().for_each(|v| *v /= n);
    }

    ExperimentSummary {
        best,
        worst,
        mean_history: sums,
        mean_best_fitness: best_fitness_sum / n,
        repetitions,
    }
}

fn accumulate(total: &mut [f64], series: &[f64]) {
    debug_assert_eq!(total.len(), series.len());
    for (t, v) in total.iter_mut().zip(series) {
        *t += v;
    }
}
