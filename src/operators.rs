//! Genetic operators: uniform crossover and single-gene mutation.
//!
//! Crossover works at gene granularity with no linkage between genes:
//! every gene in a child comes from one of the two parents, never from
//! anywhere else. Mutation redraws exactly one gene from its allowed set.
//!
//! Population-level wrappers preserve population size exactly;
//! [`population_mutation`] additionally preserves member order.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use rand::Rng;

use crate::chromosome::Chromosome;
use crate::problem::Problem;

/// Uniform crossover: for each gene, a fair coin decides whether the two
/// parents' values are swapped in the children.
///
/// Both children carry the full gene set and no invented alleles.
///
/// # Panics
/// Panics if the parents have different gene counts.
pub fn uniform_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal gene counts"
    );

    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent2.len());

    for (&g1, &g2) in parent1.genes.iter().zip(parent2.genes.iter()) {
        if rng.random_bool(0.5) {
            child1.push(g2);
            child2.push(g1);
        } else {
            child1.push(g1);
            child2.push(g2);
        }
    }

    (Chromosome { genes: child1 }, Chromosome { genes: child2 })
}

/// Applies crossover across a population.
///
/// Members are paired by repeatedly removing two random members; each pair
/// is crossed with probability `probability`, otherwise passed through
/// unchanged. With an odd population exactly one member is left unpaired
/// and passes through. Pairing order is arbitrary; output size equals
/// input size.
pub fn population_crossover<R: Rng>(
    mut population: Vec<Chromosome>,
    probability: f64,
    rng: &mut R,
) -> Vec<Chromosome> {
    let mut crossed = Vec::with_capacity(population.len());

    while population.len() >= 2 {
        let first = population.swap_remove(rng.random_range(0..population.len()));
        let second = population.swap_remove(rng.random_range(0..population.len()));

        if rng.random_range(0.0..1.0) < probability {
            let (child1, child2) = uniform_crossover(&first, &second, rng);
            crossed.push(child1);
            crossed.push(child2);
        } else {
            crossed.push(first);
            crossed.push(second);
        }
    }

    if let Some(leftover) = population.pop() {
        crossed.push(leftover);
    }

    crossed
}

/// Mutates exactly one gene: a uniformly chosen course is reassigned a
/// uniformly chosen group from its allowed set. The new value may coincide
/// with the old one.
pub fn gene_mutation<R: Rng>(chromosome: &mut Chromosome, problem: &Problem, rng: &mut R) {
    let course = rng.random_range(0..problem.course_count());
    chromosome.genes[course] = rng.random_range(0..problem.group_count(course));
}

/// Applies [`gene_mutation`] to each member independently with probability
/// `probability`. Member order and population size are preserved.
pub fn population_mutation<R: Rng>(
    population: &mut [Chromosome],
    problem: &Problem,
    probability: f64,
    rng: &mut R,
) {
    for chromosome in population.iter_mut() {
        if rng.random_range(0.0..1.0) < probability {
            gene_mutation(chromosome, problem, rng);
        }
    }
}
