//! Experiment configuration.

use crate::error::{Error, Result};

/// How many repetitions to run and how.
///
/// ```
/// use u_tsp_ga::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default().with_repetitions(50).with_seed(1);
/// assert_eq!(config.repetitions, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Number of independent engine runs. Must be at least 1.
    pub repetitions: usize,

    /// Run repetitions on rayon's pool.
    ///
    /// Only honored when the crate is built with the `parallel` feature;
    /// otherwise repetitions always run sequentially, whatever this is set to.
    pub parallel: bool,

    /// Base seed. Repetition `i` uses `seed.wrapping_add(i)`.
    ///
    /// `None` draws an independent random seed per repetition.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            repetitions: 1000,
            parallel: true,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Sets the number of repetitions.
    pub fn with_repetitions(mut self, n: usize) -> Self {
        self.repetitions = n;
        self
    }

    /// Enables or disables parallel repetitions.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(Error::invalid_parameter(
                "repetitions",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Seed for repetition `index`.
    pub(crate) fn seed_for(&self, index: usize) -> u64 {
        match self.seed {
            Some(base) => base.wrapping_add(index as u64),
            None => rand::random(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.repetitions, 1000);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        let err = ExperimentConfig::default()
            .with_repetitions(0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "repetitions",
                ..
            }
        ));
    }

    #[test]
    fn test_seed_derivation() {
        let config = ExperimentConfig::default().with_seed(u64::MAX);
        assert_eq!(config.seed_for(0), u64::MAX);
        assert_eq!(config.seed_for(1), 0);
        assert_eq!(config.seed_for(5), 4);
    }
}
