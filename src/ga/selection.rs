//! Fitness-proportionate (roulette wheel) selection.
//!
//! Fitness here is maximized: an individual's chance of being drawn is its
//! share of the population's total fitness.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::tour::Tour;
use rand::Rng;

/// Cumulative selection probabilities for one generation.
///
/// Built once from the population's fitness values and then spun
/// `population_size` times.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tsp_ga::ga::RouletteWheel;
///
/// let wheel = RouletteWheel::new(&[1.0, 3.0]);
/// assert!((wheel.probability(1) - 0.75).abs() < 1e-12);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// assert!(wheel.spin(&mut rng) < 2);
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    cumulative: Vec<f64>,
}

impl RouletteWheel {
    /// Builds the wheel from raw fitness values.
    ///
    /// Each slot's probability is `fitness / total`; the wheel stores their
    /// running sums in population order.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn new(fitness: &[f64]) -> Self {
        assert!(!fitness.is_empty(), "cannot build a wheel from an empty population");

        let total: f64 = fitness.iter().sum();
        debug_assert!(total > 0.0, "total fitness must be positive, got {total}");

        let mut acc = 0.0;
        let cumulative = fitness
            .iter()
            .map(|f| {
                acc += f / total;
                acc
            })
            .collect();
        Self { cumulative }
    }

    /// Builds the wheel from a population of tours.
    pub fn from_population(population: &[Tour]) -> Self {
        let fitness: Vec<f64> = population.iter().map(Tour::fitness).collect();
        Self::new(&fitness)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always `false`: a wheel has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Selection probability of slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn probability(&self, index: usize) -> f64 {
        match index {
            0 => self.cumulative[0],
            i => self.cumulative[i] - self.cumulative[i - 1],
        }
    }

    /// Draws one slot index.
    ///
    /// A uniform value in `[0, 1)` selects the first slot whose cumulative
    /// probability exceeds it. Rounding can leave the final running sum
    /// slightly below 1.0; a draw that lands in that gap returns the last
    /// slot.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        let draw: f64 = rng.random();
        self.cumulative
            .iter()
            .position(|&c| draw < c)
            .unwrap_or(self.cumulative.len() - 1)
    }
}

/// Draws a full mating pool of `population.len()` tours with replacement.
pub fn roulette_select<R: Rng>(population: &[Tour], rng: &mut R) -> Vec<Tour> {
    let wheel = RouletteWheel::from_population(population);
    (0..population.len())
        .map(|_| population[wheel.spin(rng)].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::CityMap;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_probabilities_are_fitness_shares() {
        let wheel = RouletteWheel::new(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(wheel.len(), 4);
        for (i, expected) in [0.1, 0.2, 0.3, 0.4].into_iter().enumerate() {
            assert!((wheel.probability(i) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_frequency_converges_to_share() {
        let fitness = [1.0, 2.0, 3.0, 4.0];
        let wheel = RouletteWheel::new(&fitness);
        let mut rng = StdRng::seed_from_u64(42);

        let n = 100_000;
        let mut counts = [0u32; 4];
        for _ in 0..n {
            counts[wheel.spin(&mut rng)] += 1;
        }
        for (i, &c) in counts.iter().enumerate() {
            let observed = c as f64 / n as f64;
            let expected = fitness[i] / 10.0;
            assert!(
                (observed - expected).abs() < 0.01,
                "slot {i}: observed {observed}, expected {expected}, counts {counts:?}"
            );
        }
    }

    #[test]
    #[should_panic]
    fn test_probability_out_of_bounds_panics() {
        RouletteWheel::new(&[1.0, 2.0]).probability(2);
    }

    #[test]
    fn test_single_slot() {
        let wheel = RouletteWheel::new(&[0.3]);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(wheel.spin(&mut rng), 0);
        }
    }

    #[test]
    fn test_drift_falls_back_to_last() {
        // Forces a final running sum below 1.0.
        let wheel = RouletteWheel {
            cumulative: vec![0.0, 0.0, 0.0],
        };
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(wheel.spin(&mut rng), 2);
    }

    #[test]
    #[should_panic(expected = "cannot build a wheel from an empty population")]
    fn test_empty_panics() {
        RouletteWheel::new(&[]);
    }

    #[test]
    fn test_roulette_select_keeps_size_and_draws_members() {
        let map = CityMap::ten_cities();
        let mut rng = StdRng::seed_from_u64(3);
        let population: Vec<Tour> = (0..15).map(|_| Tour::random(&map, &mut rng)).collect();

        let pool = roulette_select(&population, &mut rng);

        assert_eq!(pool.len(), population.len());
        for tour in &pool {
            assert!(population.contains(tour));
        }
    }

    #[test]
    fn test_roulette_select_favors_shorter_tours() {
        let map = CityMap::new([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap();
        let short = Tour::new(vec![0, 1, 2, 3], &map);
        let long = Tour::new(vec![0, 2, 1, 3], &map);
        let population = vec![long.clone(), short.clone()];
        let mut rng = StdRng::seed_from_u64(11);

        let mut short_count = 0;
        for _ in 0..5_000 {
            short_count += roulette_select(&population, &mut rng)
                .iter()
                .filter(|t| **t == short)
                .count();
        }
        // Share of the short tour: 0.025 / (0.025 + 1/48.28) ≈ 0.547
        let share = short_count as f64 / 10_000.0;
        assert!((share - 0.547).abs() < 0.02, "share {share}");
    }
}
