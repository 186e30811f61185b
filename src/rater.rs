//! The external rating contract.
//!
//! The engine never computes fitness itself: a [`Rater`] scores chromosomes
//! against whatever scoring rules the caller configured. Higher is better.
//! Scoring configuration (conflict penalties, preference bonuses, ...)
//! lives inside the rater implementation and passes through the engine
//! untouched.
//!
//! A rating failure is fatal to the run: the driver aborts with
//! [`GaError::Rating`](crate::GaError::Rating) and never retries.

use crate::chromosome::Chromosome;
use crate::problem::Problem;

/// Error type raters may return. Opaque to the engine.
pub type RatingError = Box<dyn std::error::Error + Send + Sync>;

/// Scores chromosomes; higher is better.
///
/// Implement [`rate`](Rater::rate) for per-chromosome scoring; override
/// [`rate_population`](Rater::rate_population) only when the whole
/// population can be scored more efficiently in one pass. The returned
/// vector must be positionally aligned with the population.
///
/// Plain closures work too:
///
/// ```
/// use tt_evolve::{Chromosome, Course, Problem, Rater};
///
/// let problem = Problem::new(vec![
///     Course::new("A", vec!["1".into(), "2".into()]),
/// ])
/// .unwrap();
///
/// // Prefer group index 0 for every course.
/// let rater = |_: &Problem, ch: &Chromosome| {
///     -(ch.genes.iter().sum::<usize>() as f64)
/// };
///
/// let ch = Chromosome { genes: vec![1] };
/// assert_eq!(rater.rate(&problem, &ch).unwrap(), -1.0);
/// ```
pub trait Rater {
    /// Scores a single chromosome.
    fn rate(&self, problem: &Problem, chromosome: &Chromosome) -> Result<f64, RatingError>;

    /// Scores the whole population, one score per member, positionally
    /// aligned.
    fn rate_population(
        &self,
        problem: &Problem,
        population: &[Chromosome],
    ) -> Result<Vec<f64>, RatingError> {
        population
            .iter()
            .map(|chromosome| self.rate(problem, chromosome))
            .collect()
    }
}

impl<F> Rater for F
where
    F: Fn(&Problem, &Chromosome) -> f64,
{
    fn rate(&self, problem: &Problem, chromosome: &Chromosome) -> Result<f64, RatingError> {
        Ok(self(problem, chromosome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Course;

    fn sample_problem() -> Problem {
        Problem::new(vec![
            Course::new("A", vec!["1".into(), "2".into()]),
            Course::new("B", vec!["1".into(), "2".into()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_closure_rater() {
        let problem = sample_problem();
        let rater = |_: &Problem, ch: &Chromosome| ch.genes.iter().sum::<usize>() as f64;

        let ch = Chromosome { genes: vec![1, 1] };
        assert_eq!(rater.rate(&problem, &ch).unwrap(), 2.0);
    }

    #[test]
    fn test_default_rate_population_is_aligned() {
        let problem = sample_problem();
        let rater = |_: &Problem, ch: &Chromosome| ch.genes[0] as f64;

        let population = vec![
            Chromosome { genes: vec![0, 0] },
            Chromosome { genes: vec![1, 0] },
        ];
        let scores = rater.rate_population(&problem, &population).unwrap();
        assert_eq!(scores, vec![0.0, 1.0]);
    }

    #[test]
    fn test_failing_rater_propagates() {
        struct Failing;
        impl Rater for Failing {
            fn rate(&self, _: &Problem, _: &Chromosome) -> Result<f64, RatingError> {
                Err("scoring config mismatch".into())
            }
        }

        let problem = sample_problem();
        let population = vec![Chromosome { genes: vec![0, 0] }];
        assert!(Failing.rate_population(&problem, &population).is_err());
    }
}
