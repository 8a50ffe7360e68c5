//! Permutation operators used by the engine.
//!
//! These work on raw `&[usize]` gene slices so they can be tested apart
//! from [`Tour`](super::Tour) and its fitness bookkeeping.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985), keeps one parent's segment and
//!   the other parent's relative order for the rest
//! - [`order_crossover_at`]: the same operator with explicit cut points
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two independently drawn positions
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) with random cut points.
///
/// Draws `start` uniformly from `0..n`, then `end` uniformly from
/// `start..n`, and delegates to [`order_crossover_at`].
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let (start, end) = random_segment(n, rng);
    order_crossover_at(parent1, parent2, start, end)
}

/// Order Crossover (OX) with fixed cut points.
///
/// 1. Copy `parent1[start..=end]` into child1 at the same positions
///    (`parent2` likewise into child2)
/// 2. Walk the other parent from its first gene, skipping genes already in
///    the copied segment, and write the rest into the child starting at
///    `end + 1`, wrapping around
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths, or unless
/// `start <= end < parent1.len()`.
///
/// # Example
///
/// ```
/// use u_tsp_ga::ga::operators::order_crossover_at;
///
/// let p1 = [0, 1, 2, 3, 4, 5];
/// let p2 = [5, 3, 1, 0, 4, 2];
/// let (c1, c2) = order_crossover_at(&p1, &p2, 2, 3);
/// assert_eq!(c1, vec![0, 4, 2, 3, 5, 1]);
/// assert_eq!(c2, vec![4, 5, 1, 0, 2, 3]);
/// ```
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(
        start <= end && end < parent1.len(),
        "invalid cut points [{start}, {end}] for length {}",
        parent1.len()
    );

    let child1 = ox_build_child(parent1, parent2, start, end);
    let child2 = ox_build_child(parent2, parent1, start, end);
    (child1, child2)
}

/// Build one OX child: copy segment from `template`, fill from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for &gene in donor {
        if !in_segment[gene] {
            child[pos] = gene;
            pos = (pos + 1) % n;
        }
    }

    debug_assert!(child.iter().all(|&g| g != usize::MAX));
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two random positions.
///
/// The positions are drawn independently and may coincide, in which case
/// the permutation is unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
///
/// `start` is uniform over `0..n` and `end` uniform over `start..n`, so
/// short segments near the tail are more likely than under independent
/// sorted draws: `P(start = end = n - 1) = 1 / n`.
pub(crate) fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let start = rng.random_range(0..n);
    let end = rng.random_range(start..n);
    (start, end)
}

/// Returns `true` if `perm` is a permutation of `0..n`.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &g in perm {
        if g >= n || seen[g] {
            return false;
        }
        seen[g] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
