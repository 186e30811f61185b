//! Criterion benchmarks for the timetable GA engine.
//!
//! Uses a synthetic problem with a cheap rating function so the numbers
//! measure engine overhead (operators, selection, loop bookkeeping)
//! rather than any real scoring cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tt_evolve::{Activation, Chromosome, Course, GaConfig, GaRunner, Problem, Selection};

/// `courses` courses, four groups each.
fn synthetic_problem(courses: usize) -> Problem {
    let courses = (0..courses)
        .map(|i| {
            Course::new(
                format!("C{i}"),
                (0..4).map(|g| format!("G{g}")).collect(),
            )
        })
        .collect();
    Problem::new(courses).unwrap()
}

/// Rewards spreading courses across groups: pairs of adjacent courses in
/// the same group are penalized, a stand-in for time-conflict scoring.
fn spread_rater(_: &Problem, ch: &Chromosome) -> f64 {
    let clashes = ch
        .genes
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .count();
    -(clashes as f64)
}

fn bench_run_by_problem_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run_by_courses");

    for courses in [10, 40, 160] {
        let problem = synthetic_problem(courses);
        let config = GaConfig::default()
            .with_population_size(50)
            .with_stale_limit(10)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(courses),
            &courses,
            |b, _| {
                b.iter(|| {
                    GaRunner::run(black_box(&problem), &spread_rater, black_box(&config))
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_run_by_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run_by_selection");
    let problem = synthetic_problem(40);

    for (name, selection) in [
        ("tournament3", Selection::Tournament(3)),
        ("roulette_softplus", Selection::Roulette(Activation::Softplus)),
        (
            "roulette_logistic_log",
            Selection::Roulette(Activation::LogisticLog),
        ),
    ] {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_stale_limit(10)
            .with_selection(selection)
            .with_seed(42);

        group.bench_function(name, |b| {
            b.iter(|| {
                GaRunner::run(black_box(&problem), &spread_rater, black_box(&config)).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_run_by_problem_size, bench_run_by_selection);
criterion_main!(benches);
