//! Genetic-algorithm engine for course-to-group timetable assignment.
//!
//! Each candidate solution ([`Chromosome`]) assigns every course in a
//! validated [`Problem`] to one of its offered groups. An external
//! [`Rater`] scores chromosomes against caller-defined scoring rules
//! (higher is better); the engine evolves a population with uniform
//! crossover, single-gene mutation, and a pluggable survivor-selection
//! strategy until the best score stalls for a configured number of
//! generations.
//!
//! # Key Types
//!
//! - [`Problem`]: course → allowed-groups definition, validated once
//! - [`Chromosome`]: one full assignment, index-encoded
//! - [`Rater`]: the external rating contract
//! - [`GaConfig`]: algorithm parameters (rates, selection, stale limit)
//! - [`GaRunner`]: executes the generational loop
//! - [`GaReport`]: best solution, score, generation count, elapsed time
//!
//! # Example
//!
//! ```
//! use tt_evolve::{Chromosome, Course, GaConfig, GaRunner, Problem};
//!
//! let problem = Problem::new(vec![
//!     Course::new("MATH101", vec!["G1".into(), "G2".into()]),
//!     Course::new("PHYS102", vec!["G1".into(), "G2".into(), "G3".into()]),
//! ])
//! .unwrap();
//!
//! // Scoring rules are external; the engine only needs a callable.
//! let rater = |_: &Problem, ch: &Chromosome| {
//!     ch.genes.iter().filter(|&&g| g == 0).count() as f64
//! };
//!
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_stale_limit(10)
//!     .with_seed(42);
//!
//! let report = GaRunner::run(&problem, &rater, &config).unwrap();
//! println!("{}", report.summary(&problem));
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one generator seeded from
//! [`GaConfig::seed`]; operators consume it in a fixed order per
//! generation (crossover, then mutation, then selection), so seeded runs
//! are reproducible.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod chromosome;
mod config;
pub mod operators;
mod problem;
mod rater;
mod runner;
mod selection;

pub use chromosome::{create_population, Chromosome};
pub use config::{ConfigError, GaConfig};
pub use problem::{Course, Problem, ProblemError};
pub use rater::{Rater, RatingError};
pub use runner::{GaError, GaReport, GaRunner};
pub use selection::{Activation, Selection};
