//! Repeated independent runs and their aggregate.
//!
//! A single GA run on a small instance is noisy. [`Experiment`] runs many
//! independently seeded [`EvolutionEngine`](crate::ga::EvolutionEngine)s
//! over the same [`CityMap`](crate::cities::CityMap) and summarizes them:
//! overall best and worst tours, per-generation mean fitness series, and
//! the mean of each run's best fitness.
//!
//! With the `parallel` feature, repetitions are distributed over rayon's
//! thread pool. Engines share only the read-only city map.

mod config;
mod runner;

pub use config::ExperimentConfig;
pub use runner::{Experiment, ExperimentSummary};
