//! Survivor selection strategies.
//!
//! Selection replaces the whole population each generation: given the
//! population and its positionally-aligned ratings, it samples the next
//! generation's starting population with replacement — survivors may
//! repeat, losers may vanish. Higher rating is better.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

/// Survivor selection strategy.
///
/// # Examples
///
/// ```
/// use tt_evolve::{Activation, Selection};
///
/// // Tournament of 3 (moderate selection pressure, the default)
/// let sel = Selection::Tournament(3);
///
/// // Roulette over softplus-transformed ratings
/// let sel = Selection::Roulette(Activation::Softplus);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: for each output slot, draw `k` distinct
    /// members at random and keep the best-rated one.
    ///
    /// Higher `k` = stronger selection pressure. `k = 1` degenerates to
    /// uniform resampling; `k = population size` copies the global best
    /// into every slot.
    ///
    /// # Complexity
    /// O(k) per slot
    Tournament(usize),

    /// Roulette-wheel selection: each member is drawn with probability
    /// proportional to an activation transform of its raw rating.
    ///
    /// The activation converts possibly-negative ratings into selection
    /// weights while preserving relative ranking.
    ///
    /// # Complexity
    /// O(n) per slot (linear scan)
    Roulette(Activation),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

/// Monotonic transform from raw rating to roulette weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activation {
    /// `softplus(x) = ln(1 + e^x)` — always positive, compresses extremes.
    Softplus,
    /// `ln(1 / (1 + e^-x)) = -softplus(-x)` — alternative transform;
    /// negative everywhere, so roulette shifts the weights before sampling.
    LogisticLog,
}

impl Activation {
    /// Applies the transform to one rating.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Softplus => softplus(x),
            Activation::LogisticLog => -softplus(-x),
        }
    }
}

/// Numerically stable `ln(1 + e^x)`.
fn softplus(x: f64) -> f64 {
    x.max(0.0) + (-x.abs()).exp().ln_1p()
}

impl Selection {
    /// Samples the next generation from `population`.
    ///
    /// Returns a new population of the same size. Generic over the member
    /// type so it can be exercised independently of the chromosome
    /// representation.
    ///
    /// # Panics
    /// Panics if `population` is empty or `ratings` is not aligned with it.
    pub fn apply<T: Clone, R: Rng>(
        &self,
        population: &[T],
        ratings: &[f64],
        rng: &mut R,
    ) -> Vec<T> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        assert_eq!(
            population.len(),
            ratings.len(),
            "ratings must be aligned with the population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, ratings, *k, rng),
            Selection::Roulette(activation) => roulette(population, ratings, *activation, rng),
        }
    }
}

/// Tournament: each slot draws `k` distinct indices without replacement and
/// keeps the max-rated one (first maximal among the drawn on ties).
fn tournament<T: Clone, R: Rng>(
    population: &[T],
    ratings: &[f64],
    k: usize,
    rng: &mut R,
) -> Vec<T> {
    let n = population.len();
    let k = k.clamp(1, n);

    (0..n)
        .map(|_| {
            let drawn = index::sample(rng, n, k);
            let mut best_idx = drawn.index(0);
            for idx in drawn.iter().skip(1) {
                if ratings[idx] > ratings[best_idx] {
                    best_idx = idx;
                }
            }
            population[best_idx].clone()
        })
        .collect()
}

/// Roulette: weight each member by the activation of its rating, then
/// sample with replacement proportionally to weight.
///
/// Weight vectors that are not strictly positive (LogisticLog is negative
/// for every input) are shifted by `w - min + epsilon` first, keeping the
/// ordering while making the wheel well defined.
fn roulette<T: Clone, R: Rng>(
    population: &[T],
    ratings: &[f64],
    activation: Activation,
    rng: &mut R,
) -> Vec<T> {
    let n = population.len();

    let mut weights: Vec<f64> = ratings.iter().map(|&r| activation.apply(r)).collect();

    let min_weight = weights.iter().cloned().fold(f64::INFINITY, f64::min);
    let epsilon = 1e-10;
    if min_weight <= 0.0 {
        for w in &mut weights {
            *w = *w - min_weight + epsilon;
        }
    }

    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        // Degenerate wheel: fall back to uniform resampling.
        return (0..n)
            .map(|_| population[rng.random_range(0..n)].clone())
            .collect();
    }

    (0..n)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            let mut cumulative = 0.0;
            for (i, &w) in weights.iter().enumerate() {
                cumulative += w;
                if cumulative > threshold {
                    return population[i].clone();
                }
            }
            population[n - 1].clone() // floating-point fallback
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    // Members are plain labels; ratings carried separately, as in the engine.
    fn counts_over_draws(selection: Selection, ratings: &[f64], rounds: usize) -> Vec<u32> {
        let population: Vec<usize> = (0..ratings.len()).collect();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut counts = vec![0u32; ratings.len()];
        for _ in 0..rounds {
            for member in selection.apply(&population, ratings, &mut rng) {
                counts[member] += 1;
            }
        }
        counts
    }

    #[test]
    fn test_output_size_matches_input() {
        let ratings = [1.0, 5.0, 3.0, 2.0, 4.0];
        let population: Vec<usize> = (0..5).collect();
        let mut rng = SmallRng::seed_from_u64(42);

        for selection in [
            Selection::Tournament(3),
            Selection::Roulette(Activation::Softplus),
            Selection::Roulette(Activation::LogisticLog),
        ] {
            let out = selection.apply(&population, &ratings, &mut rng);
            assert_eq!(out.len(), 5);
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let counts = counts_over_draws(Selection::Tournament(3), &[1.0, 8.0, 3.0, 5.0], 2500);
        // Index 1 (rating 8.0) should dominate.
        let best = counts[1];
        let total: u32 = counts.iter().sum();
        assert!(
            best > total / 2,
            "expected best selected >50% of the time, got {best}/{total} ({counts:?})"
        );
    }

    #[test]
    fn test_tournament_full_size_copies_global_best() {
        let ratings = [2.0, 9.0, 4.0, 1.0];
        let population: Vec<usize> = (0..4).collect();
        let mut rng = SmallRng::seed_from_u64(42);

        let out = Selection::Tournament(4).apply(&population, &ratings, &mut rng);
        assert_eq!(out, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_tournament_size_1_is_uniform_resampling() {
        let counts = counts_over_draws(Selection::Tournament(1), &[1.0, 8.0, 3.0, 5.0], 2500);
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_tournament_equal_ratings_is_roughly_uniform() {
        let counts = counts_over_draws(Selection::Tournament(2), &[5.0; 4], 2500);
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_softplus_favors_best() {
        let counts = counts_over_draws(
            Selection::Roulette(Activation::Softplus),
            &[-2.0, 6.0, 1.0, -5.0],
            2500,
        );
        assert!(
            counts[1] > counts[3],
            "best should outdraw worst: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_logistic_log_favors_best() {
        // LogisticLog weights are negative; the shift must keep the ordering.
        let counts = counts_over_draws(
            Selection::Roulette(Activation::LogisticLog),
            &[-2.0, 6.0, 1.0, -5.0],
            2500,
        );
        assert!(
            counts[1] > counts[3],
            "best should outdraw worst: {counts:?}"
        );
    }

    #[test]
    fn test_single_member_population() {
        let population = vec![7usize];
        let mut rng = SmallRng::seed_from_u64(42);

        for selection in [
            Selection::Tournament(3),
            Selection::Roulette(Activation::Softplus),
            Selection::Roulette(Activation::LogisticLog),
        ] {
            assert_eq!(selection.apply(&population, &[1.0], &mut rng), vec![7]);
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let population: Vec<usize> = vec![];
        let mut rng = SmallRng::seed_from_u64(42);
        Selection::default().apply(&population, &[], &mut rng);
    }

    #[test]
    #[should_panic(expected = "ratings must be aligned")]
    fn test_misaligned_ratings_panic() {
        let population = vec![0usize, 1];
        let mut rng = SmallRng::seed_from_u64(42);
        Selection::default().apply(&population, &[1.0], &mut rng);
    }

    // ---- Activation functions ----

    #[test]
    fn test_softplus_values() {
        assert!((Activation::Softplus.apply(0.0) - 2f64.ln()).abs() < 1e-12);
        // For large x, softplus(x) ~ x.
        assert!((Activation::Softplus.apply(50.0) - 50.0).abs() < 1e-9);
        // Always positive.
        assert!(Activation::Softplus.apply(-50.0) > 0.0);
    }

    #[test]
    fn test_softplus_stable_at_extremes() {
        assert!(Activation::Softplus.apply(1000.0).is_finite());
        assert!(Activation::Softplus.apply(-1000.0).is_finite());
    }

    #[test]
    fn test_logistic_log_is_negated_softplus() {
        for x in [-3.0, -0.5, 0.0, 0.5, 3.0] {
            let expected = -Activation::Softplus.apply(-x);
            assert!((Activation::LogisticLog.apply(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_activations_are_monotonic() {
        let xs = [-10.0, -1.0, 0.0, 1.0, 10.0];
        for activation in [Activation::Softplus, Activation::LogisticLog] {
            for pair in xs.windows(2) {
                assert!(activation.apply(pair[0]) < activation.apply(pair[1]));
            }
        }
    }
}
