//! Engine configuration.
//!
//! [`EngineConfig`] holds every parameter of the generational loop. All
//! values are fixed once an engine is built from it.

use crate::error::{check_rate, Error, Result};

/// Configuration for the [`EvolutionEngine`](super::EvolutionEngine).
///
/// # Defaults
///
/// ```
/// use u_tsp_ga::ga::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.max_generations, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp_ga::ga::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_population_size(50)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given; out-of-range values are reported by
/// [`validate`](Self::validate) instead of being clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of tours in every generation. Must be at least 2.
    pub population_size: usize,

    /// Number of generations `run` performs. Must be at least 1.
    pub max_generations: usize,

    /// Probability that a tour has two genes swapped each generation
    /// (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability that an adjacent parent pair is recombined rather than
    /// copied through (0.0–1.0).
    pub crossover_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            max_generations: 20,
            mutation_rate: 0.1,
            crossover_rate: 0.7,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::invalid_parameter(
                "population_size",
                format!("must be at least 2, got {}", self.population_size),
            ));
        }
        if self.max_generations == 0 {
            return Err(Error::invalid_parameter(
                "max_generations",
                "must be at least 1",
            ));
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.max_generations, 20);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_mutation_rate(0.05)
            .with_crossover_rate(0.8)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_population_too_small() {
        let err = EngineConfig::default()
            .with_population_size(1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "population_size",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_minimum_population() {
        let config = EngineConfig::default().with_population_size(2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let err = EngineConfig::default()
            .with_max_generations(0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "max_generations",
                ..
            }
        ));
    }

    #[test]
    fn test_rates_are_rejected_not_clamped() {
        let config = EngineConfig::default().with_mutation_rate(1.5);
        assert!((config.mutation_rate - 1.5).abs() < 1e-10);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter {
                name: "mutation_rate",
                ..
            })
        ));

        let config = EngineConfig::default().with_crossover_rate(-0.1);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter {
                name: "crossover_rate",
                ..
            })
        ));

        let config = EngineConfig::default().with_crossover_rate(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_boundary_rates_are_valid() {
        let config = EngineConfig::default()
            .with_mutation_rate(0.0)
            .with_crossover_rate(1.0);
        assert!(config.validate().is_ok());
    }
}
