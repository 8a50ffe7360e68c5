//! Genetic algorithm for small symmetric Traveling Salesman instances.
//!
//! Provides:
//!
//! - **Cities**: An immutable [`CityMap`](cities::CityMap) of 2-D points
//!   with a precomputed Euclidean distance table.
//! - **Genetic Algorithm**: [`Tour`](ga::Tour) chromosomes with cached
//!   `1 / length` fitness, evolved by the
//!   [`EvolutionEngine`](ga::EvolutionEngine) through roulette-wheel
//!   selection, order crossover (OX) and swap mutation.
//! - **Experiments**: Repeated independently seeded runs with aggregated
//!   best/worst tours and mean fitness curves, optionally in parallel.
//!
//! # Architecture
//!
//! The engine is a pure computational component. It performs no I/O and
//! renders nothing; all randomness comes from one generator owned by each
//! engine, so a fixed seed reproduces a run bit for bit.
//!
//! # Features
//!
//! - `parallel`: run experiment repetitions on rayon's thread pool
//! - `serde`: derive serialization for configurations and results

pub mod cities;
mod error;
pub mod experiment;
pub mod ga;

pub use error::{Error, Result};
