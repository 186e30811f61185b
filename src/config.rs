//! Engine configuration.
//!
//! [`GaConfig`] holds every parameter of the generational loop.

use std::fmt;

use crate::selection::Selection;

/// Configuration for a GA run.
///
/// # Defaults
///
/// ```
/// use tt_evolve::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.stale_limit, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tt_evolve::{Activation, GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Roulette(Activation::Softplus))
///     .with_stale_limit(30)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in the population, constant across
    /// generations. Must be positive.
    pub population_size: usize,

    /// Probability of crossing each pair during crossover (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating each chromosome per generation (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of consecutive generations without strict improvement of the
    /// running best before the run terminates. Must be positive; this is
    /// the only stopping rule — callers wanting a generation cap or a
    /// wall-clock bound wrap the driver.
    pub stale_limit: usize,

    /// Survivor selection strategy.
    pub selection: Selection,

    /// Random seed for reproducibility. `None` seeds from entropy.
    ///
    /// For a fixed seed the run is deterministic: every operator draws
    /// from the one generator in a fixed order per generation (crossover,
    /// then mutation, then selection).
    pub seed: Option<u64>,

    /// Print a one-line progress report per generation. Never affects the
    /// outcome of a seeded run.
    pub verbose: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            stale_limit: 50,
            selection: Selection::default(),
            seed: None,
            verbose: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the stale-generation limit.
    pub fn with_stale_limit(mut self, limit: usize) -> Self {
        self.stale_limit = limit;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Convenience for `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables per-generation progress output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range probabilities are rejected rather than clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidPopulationSize);
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::InvalidCrossoverRate(self.crossover_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.stale_limit == 0 {
            return Err(ConfigError::InvalidStaleLimit);
        }
        if let Selection::Tournament(k) = self.selection {
            if k == 0 || k > self.population_size {
                return Err(ConfigError::InvalidTournamentSize {
                    tour_size: k,
                    population_size: self.population_size,
                });
            }
        }
        Ok(())
    }
}

/// Rejected configuration parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Population size is zero.
    InvalidPopulationSize,
    /// Crossover rate outside `[0, 1]` (or NaN).
    InvalidCrossoverRate(f64),
    /// Mutation rate outside `[0, 1]` (or NaN).
    InvalidMutationRate(f64),
    /// Stale-generation limit is zero.
    InvalidStaleLimit,
    /// Tournament size is zero or exceeds the population size, making a
    /// without-replacement draw impossible.
    InvalidTournamentSize {
        tour_size: usize,
        population_size: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPopulationSize => {
                write!(f, "population_size must be positive")
            }
            ConfigError::InvalidCrossoverRate(rate) => {
                write!(f, "crossover_rate must be within [0, 1], got {rate}")
            }
            ConfigError::InvalidMutationRate(rate) => {
                write!(f, "mutation_rate must be within [0, 1], got {rate}")
            }
            ConfigError::InvalidStaleLimit => {
                write!(f, "stale_limit must be positive")
            }
            ConfigError::InvalidTournamentSize {
                tour_size,
                population_size,
            } => write!(
                f,
                "tournament size {tour_size} not in 1..={population_size}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
