//! Criterion benchmarks for the NSGA-II engine.
//!
//! Uses the ZDT1 benchmark function to measure engine overhead:
//! the evaluation is trivially cheap, so the cost measured here is
//! sorting, crowding, and variation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use moea::nsga2::{DecisionVariable, MultiObjectiveProblem, Nsga2Config, Nsga2Runner};

struct Zdt1 {
    vars: Vec<DecisionVariable>,
}

impl Zdt1 {
    fn new(n: usize) -> Self {
        let vars = (0..n)
            .map(|i| DecisionVariable::new(format!("x{i}"), 0.0, 1.0))
            .collect();
        Self { vars }
    }
}

impl MultiObjectiveProblem for Zdt1 {
    fn variables(&self) -> &[DecisionVariable] {
        &self.vars
    }

    fn evaluate(&self, x: &[f64]) -> (f64, f64) {
        let f1 = x[0];
        let tail = &x[1..];
        let g = 1.0 + 9.0 * tail.iter().sum::<f64>() / tail.len() as f64;
        let f2 = g * (1.0 - (f1 / g).sqrt());
        (f1, f2)
    }
}

fn bench_nsga2_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("nsga2_zdt1");

    for &pop_size in &[50usize, 100] {
        group.bench_with_input(
            BenchmarkId::new("run", pop_size),
            &pop_size,
            |b, &pop_size| {
                let problem = Zdt1::new(10);
                let config = Nsga2Config::default()
                    .with_population_size(pop_size)
                    .with_generations(20)
                    .with_seed(42);
                b.iter(|| {
                    let result = Nsga2Runner::run(black_box(&problem), black_box(&config));
                    black_box(result.front.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_nsga2_run);
criterion_main!(benches);
