//! Chromosome representation and population construction.
//!
//! # Encoding
//!
//! A chromosome holds one gene per course, positionally aligned with the
//! problem's course list. Each gene is an index into that course's group
//! list, so every chromosome assigns exactly one offered group to every
//! course by construction. String identifiers appear only when decoding
//! for a report.

use rand::Rng;

use crate::problem::Problem;

/// One candidate assignment of every course to a group.
///
/// Value-like: operators clone and rebuild chromosomes; the driver keeps
/// the best one seen across the whole run as an owned copy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    /// Group index per course, aligned with `Problem::courses()`.
    pub genes: Vec<usize>,
}

impl Chromosome {
    /// Creates a random chromosome: each gene drawn independently and
    /// uniformly from the course's allowed group set.
    pub fn random<R: Rng>(problem: &Problem, rng: &mut R) -> Self {
        let genes = (0..problem.course_count())
            .map(|c| rng.random_range(0..problem.group_count(c)))
            .collect();
        Self { genes }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Checks the closure invariant against a problem definition:
    /// one gene per course, every gene within its allowed group set.
    pub fn is_valid(&self, problem: &Problem) -> bool {
        self.genes.len() == problem.course_count()
            && self
                .genes
                .iter()
                .enumerate()
                .all(|(c, &g)| g < problem.group_count(c))
    }

    /// Decodes the chromosome into `(course id, group id)` pairs.
    ///
    /// # Panics
    /// Panics if the chromosome does not satisfy [`is_valid`](Self::is_valid)
    /// for this problem.
    pub fn decode<'a>(&self, problem: &'a Problem) -> Vec<(&'a str, &'a str)> {
        self.genes
            .iter()
            .enumerate()
            .map(|(c, &g)| problem.resolve(c, g))
            .collect()
    }
}

/// Creates `size` independently random chromosomes.
///
/// A size of 0 yields an empty population; the driver's configuration
/// validation rejects that before it can reach the loop.
pub fn create_population<R: Rng>(problem: &Problem, size: usize, rng: &mut R) -> Vec<Chromosome> {
    (0..size).map(|_| Chromosome::random(problem, rng)).collect()
}
