//! The generational loop.
//!
//! [`GaRunner`] orchestrates one run: initialization → per generation
//! crossover → mutation → rating → best-tracking → selection, repeated
//! until the running best has been stale for the configured number of
//! generations. That stale limit is the only stopping rule.
//!
//! The evolved population is deliberately not elitist: the best chromosome
//! ever seen is retained on the report side only and may drop out of the
//! gene pool between generations.

use std::fmt;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::chromosome::{create_population, Chromosome};
use crate::config::{ConfigError, GaConfig};
use crate::operators::{population_crossover, population_mutation};
use crate::problem::Problem;
use crate::rater::{Rater, RatingError};

/// Immutable summary of a finished run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaReport {
    /// Best chromosome found across the whole run (not necessarily a
    /// member of the final generation).
    pub best: Chromosome,

    /// Score of `best`.
    pub best_score: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Wall-clock time of the run.
    pub elapsed: Duration,

    /// Running-best score at the end of each generation. Monotonically
    /// non-decreasing.
    pub score_history: Vec<f64>,
}

impl GaReport {
    /// Renders the report for humans: run statistics followed by the best
    /// chromosome's course → group assignments.
    ///
    /// The structured fields are the primary contract; this is a
    /// convenience for printers.
    pub fn summary(&self, problem: &Problem) -> String {
        let mut out = format!(
            "best score {} after {} generations ({:.3}s)\n",
            self.best_score,
            self.generations,
            self.elapsed.as_secs_f64()
        );
        for (course, group) in self.best.decode(problem) {
            out.push_str(&format!("  {course} -> {group}\n"));
        }
        out
    }
}

/// Fatal run failures. There is no retry policy: a failing rating
/// collaborator aborts the run.
#[derive(Debug)]
pub enum GaError {
    /// The configuration failed [`GaConfig::validate`].
    Config(ConfigError),
    /// The rating collaborator returned an error.
    Rating(RatingError),
    /// The rating collaborator returned a score vector of the wrong length.
    ScoreLengthMismatch { expected: usize, actual: usize },
    /// The rating collaborator returned NaN for a member.
    InvalidScore { index: usize },
}

impl fmt::Display for GaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaError::Config(err) => write!(f, "invalid configuration: {err}"),
            GaError::Rating(err) => write!(f, "rating failed: {err}"),
            GaError::ScoreLengthMismatch { expected, actual } => write!(
                f,
                "rating returned {actual} scores for a population of {expected}"
            ),
            GaError::InvalidScore { index } => {
                write!(f, "rating returned NaN for member {index}")
            }
        }
    }
}

impl std::error::Error for GaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GaError::Config(err) => Some(err),
            GaError::Rating(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<ConfigError> for GaError {
    fn from(err: ConfigError) -> Self {
        GaError::Config(err)
    }
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```
/// use tt_evolve::{Chromosome, Course, GaConfig, GaRunner, Problem};
///
/// let problem = Problem::new(vec![
///     Course::new("MATH101", vec!["G1".into(), "G2".into()]),
///     Course::new("PHYS102", vec!["G1".into(), "G2".into()]),
/// ])
/// .unwrap();
///
/// // Scoring rules live in the rater; here: reward group index 0.
/// let rater = |_: &Problem, ch: &Chromosome| {
///     ch.genes.iter().filter(|&&g| g == 0).count() as f64
/// };
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_stale_limit(5)
///     .with_seed(42);
///
/// let report = GaRunner::run(&problem, &rater, &config).unwrap();
/// assert!(report.best.is_valid(&problem));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion and returns the run report.
    ///
    /// The configuration is validated first; the loop itself fails only on
    /// rating-collaborator defects. For a fixed `config.seed` the run is
    /// fully deterministic: all operators draw from one generator in a
    /// fixed order per generation (crossover, then mutation, then
    /// selection), and `config.verbose` consumes no randomness.
    pub fn run<T: Rater>(
        problem: &Problem,
        rater: &T,
        config: &GaConfig,
    ) -> Result<GaReport, GaError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let start = Instant::now();
        let mut population = create_population(problem, config.population_size, &mut rng);

        let mut best = population[0].clone();
        let mut best_score = f64::NEG_INFINITY;
        let mut stale_for = 0usize;
        let mut generations = 0usize;
        let mut score_history = Vec::new();

        while stale_for < config.stale_limit {
            generations += 1;

            population = population_crossover(population, config.crossover_rate, &mut rng);
            population_mutation(&mut population, problem, config.mutation_rate, &mut rng);

            let ratings = rater
                .rate_population(problem, &population)
                .map_err(GaError::Rating)?;
            if ratings.len() != population.len() {
                return Err(GaError::ScoreLengthMismatch {
                    expected: population.len(),
                    actual: ratings.len(),
                });
            }
            if let Some(index) = ratings.iter().position(|score| score.is_nan()) {
                return Err(GaError::InvalidScore { index });
            }

            let gen_best_idx = index_of_max(&ratings);
            let gen_best_score = ratings[gen_best_idx];

            if gen_best_score > best_score {
                stale_for = 0;
                best_score = gen_best_score;
                best = population[gen_best_idx].clone();
            } else {
                stale_for += 1;
            }
            score_history.push(best_score);

            if config.verbose {
                println!(
                    "generation {generations}: best {gen_best_score}, overall {best_score}"
                );
            }

            population = config.selection.apply(&population, &ratings, &mut rng);
        }

        Ok(GaReport {
            best,
            best_score,
            generations,
            elapsed: start.elapsed(),
            score_history,
        })
    }
}

/// Index of the maximum rating, first maximal on ties.
fn index_of_max(ratings: &[f64]) -> usize {
    let mut best = 0;
    for (i, &score) in ratings.iter().enumerate().skip(1) {
        if score > ratings[best] {
            best = i;
        }
    }
    best
}
