//! Per-generation fitness statistics.

use super::tour::Tour;

/// Aggregate fitness of one population snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Mean fitness.
    pub average: f64,
    /// Highest fitness (shortest tour).
    pub max: f64,
    /// Lowest fitness (longest tour).
    pub min: f64,
}

impl GenerationStats {
    /// Computes statistics over a non-empty population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn of(population: &[Tour]) -> Self {
        assert!(!population.is_empty(), "population must not be empty");

        let (sum, max, min) = population.iter().map(Tour::fitness).fold(
            (0.0, f64::NEG_INFINITY, f64::INFINITY),
            |(sum, max, min), f| (sum + f, max.max(f), min.min(f)),
        );
        Self {
            average: sum / population.len() as f64,
            max,
            min,
        }
    }
}

/// Three parallel series of fitness statistics, one entry per recorded
/// generation.
///
/// Entry 0 is the initial population.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessHistory {
    /// Mean fitness per generation.
    pub average: Vec<f64>,
    /// Maximum fitness per generation.
    pub max: Vec<f64>,
    /// Minimum fitness per generation.
    pub min: Vec<f64>,
}

impl FitnessHistory {
    /// Creates an empty history with room for `generations` entries.
    pub fn with_capacity(generations: usize) -> Self {
        Self {
            average: Vec::with_capacity(generations),
            max: Vec::with_capacity(generations),
            min: Vec::with_capacity(generations),
        }
    }

    /// Appends one generation's statistics.
    pub fn push(&mut self, stats: GenerationStats) {
        self.average.push(stats.average);
        self.max.push(stats.max);
        self.min.push(stats.min);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.average.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.average.is_empty()
    }

    /// Statistics recorded for `generation`, if any.
    pub fn get(&self, generation: usize) -> Option<GenerationStats> {
        Some(GenerationStats {
            average: *self.average.get(generation)?,
            max: *self.max.get(generation)?,
            min: *self.min.get(generation)?,
        })
    }

    /// Iterates over the recorded generations in order.
    pub fn iter(&self) -> impl Iterator<Item = GenerationStats> + '_ {
        (0..self.len()).filter_map(|g| self.get(g))
    }
}
