//! Criterion benchmarks for the real-coded operators.
//!
//! Measures pure operator throughput on a synthetic batch, independent of
//! any objective function or outer loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evo_real::batch::SolutionBatch;
use evo_real::bounds::Bounds;
use evo_real::operators::{
    ChildCount, CopyingOperator, CosynePermutation, CrossOver, GaussianMutation,
    OnePointCrossOver, SimulatedBinaryCrossOver,
};
use evo_real::problem::ProblemSpec;
use evo_real::random::{create_rng, uniform_matrix};

fn bench_problem(solution_length: usize) -> ProblemSpec {
    ProblemSpec::new(solution_length)
        .with_bounds(Bounds::uniform(-5.0, 5.0, solution_length).unwrap())
}

fn bench_batch(problem: &ProblemSpec, num_solutions: usize) -> SolutionBatch {
    let mut rng = create_rng(7);
    let values = uniform_matrix(num_solutions, problem.solution_length(), &mut rng);
    let mut batch = SolutionBatch::from_values(problem, values);
    let fitnesses: Vec<f64> = (0..num_solutions).map(|i| i as f64).collect();
    batch.set_evals(0, &fitnesses);
    batch
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    for &num_solutions in &[64usize, 256] {
        let problem = bench_problem(64);
        let batch = bench_batch(&problem, num_solutions);

        let mutation = GaussianMutation::new(problem.clone(), 0.1, 0.5).unwrap();
        group.bench_with_input(
            BenchmarkId::new("gaussian_mutation", num_solutions),
            &batch,
            |b, batch| {
                let mut rng = create_rng(42);
                b.iter(|| black_box(mutation.apply(batch, &mut rng)));
            },
        );

        let one_point =
            OnePointCrossOver::new(problem.clone(), 3, None, ChildCount::Default).unwrap();
        group.bench_with_input(
            BenchmarkId::new("one_point_crossover", num_solutions),
            &batch,
            |b, batch| {
                let mut rng = create_rng(42);
                b.iter(|| black_box(CrossOver::apply(&one_point, batch, &mut rng)));
            },
        );

        let sbx =
            SimulatedBinaryCrossOver::new(problem.clone(), 3, 15.0, None, ChildCount::Default)
                .unwrap();
        group.bench_with_input(
            BenchmarkId::new("sbx", num_solutions),
            &batch,
            |b, batch| {
                let mut rng = create_rng(42);
                b.iter(|| black_box(CrossOver::apply(&sbx, batch, &mut rng)));
            },
        );

        let cosyne = CosynePermutation::new(problem.clone(), None, false).unwrap();
        group.bench_with_input(
            BenchmarkId::new("cosyne_permutation", num_solutions),
            &batch,
            |b, batch| {
                let mut rng = create_rng(42);
                b.iter(|| black_box(cosyne.apply(batch, &mut rng)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_operators);
criterion_main!(benches);
