//! The chromosome: a closed route through every city.

use super::operators::{is_permutation, swap_mutation};
use crate::cities::CityMap;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// A candidate tour and its cached fitness.
///
/// `genes` is a permutation of `0..N` describing the visiting order; the
/// route closes back to the first city. Fitness is `1 / length`, so a
/// higher value is a shorter tour.
///
/// The fields are private and every operation that touches the genes
/// recomputes fitness before returning, so the cached values can never
/// disagree with the route.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::cities::CityMap;
/// use u_tsp_ga::ga::Tour;
///
/// let map = CityMap::new([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap();
/// let tour = Tour::new(vec![0, 1, 2, 3], &map);
/// assert!((tour.length() - 40.0).abs() < 1e-12);
/// assert!((tour.fitness() - 0.025).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour {
    genes: Vec<usize>,
    length: f64,
    fitness: f64,
}

impl Tour {
    /// Creates a tour from a visiting order and evaluates it.
    ///
    /// `genes` must be a permutation of `0..cities.len()`; this is
    /// checked in debug builds only.
    pub fn new(genes: Vec<usize>, cities: &CityMap) -> Self {
        debug_assert!(
            is_permutation(&genes, cities.len()),
            "genes must be a permutation of 0..{}: {genes:?}",
            cities.len()
        );
        let mut tour = Self {
            genes,
            length: 0.0,
            fitness: 0.0,
        };
        tour.evaluate(cities);
        tour
    }

    /// Creates a tour from a uniformly shuffled visiting order.
    pub fn random<R: Rng>(cities: &CityMap, rng: &mut R) -> Self {
        let mut genes: Vec<usize> = (0..cities.len()).collect();
        genes.shuffle(rng);
        Self::new(genes, cities)
    }

    /// Recomputes length and fitness from the current genes.
    ///
    /// `cities` must be the map the tour was built on.
    pub(crate) fn evaluate(&mut self, cities: &CityMap) {
        self.length = cities.tour_length(&self.genes);
        self.fitness = 1.0 / self.length;
    }

    /// With probability `mutation_rate`, swaps two randomly chosen genes.
    ///
    /// Fitness is recomputed whether or not a swap happened.
    pub fn mutate<R: Rng>(&mut self, mutation_rate: f64, cities: &CityMap, rng: &mut R) {
        if rng.random::<f64>() < mutation_rate {
            swap_mutation(&mut self.genes, rng);
        }
        self.evaluate(cities);
    }

    /// The visiting order.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Total cycle length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// `1 / length`. Higher is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// Renders the route with letter labels, e.g. `Route: A -> C -> B, Fitness: 0.0417`.
impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Route: ")?;
        for (i, &g) in self.genes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(&CityMap::label(g))?;
        }
        write!(f, ", Fitness: {:.4}", self.fitness)
    }
}
