//! Genetic algorithm for the symmetric TSP.
//!
//! Candidate solutions are [`Tour`]s: permutations of city indices whose
//! fitness is the reciprocal of the closed-cycle length. The
//! [`EvolutionEngine`] evolves a fixed-size population of them with
//! roulette-wheel selection, order crossover on adjacent pairs and swap
//! mutation, recording average/max/min fitness every generation.
//!
//! # Key Types
//!
//! - [`EngineConfig`]: Population size, generation count, operator rates, seed
//! - [`EvolutionEngine`]: Executes the generational loop
//! - [`EvolutionResult`]: Best and worst tours plus the fitness history
//! - [`FitnessHistory`] / [`GenerationStats`]: Per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover (OX) and swap mutation on raw permutations
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod engine;
pub mod operators;
mod selection;
mod stats;
mod tour;

pub use config::EngineConfig;
pub use engine::{EvolutionEngine, EvolutionResult, Phase};
pub use selection::{roulette_select, RouletteWheel};
pub use stats::{FitnessHistory, GenerationStats};
pub use tour::Tour;
