//! NSGA-II generational loop execution.
//!
//! [`Nsga2Runner`] orchestrates the complete run:
//! initialize → evaluate → rank, then per generation
//! offspring → evaluate → merge → re-rank → truncate.

use super::config::Nsga2Config;
use super::operators::{polynomial_mutation, sbx_crossover, tournament_select};
use super::sorting::assign_rank_and_crowding;
use super::types::{Candidate, MultiObjectiveProblem};
use crate::random::create_rng;
use rand::Rng;
use rayon::prelude::*;

/// Result of an NSGA-II run.
#[derive(Debug, Clone)]
pub struct Nsga2Result {
    /// The final first front (rank 1), sorted by the first objective
    /// ascending.
    pub front: Vec<Candidate>,

    /// Number of generations executed.
    pub generations: usize,
}

/// Executes the NSGA-II generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = Nsga2Config::default().with_seed(42);
/// let result = Nsga2Runner::run(&problem, &config);
/// for c in &result.front {
///     println!("{:?} -> ({}, {})", c.x, c.f1, c.f2);
/// }
/// ```
pub struct Nsga2Runner;

impl Nsga2Runner {
    /// Runs the optimization to completion.
    ///
    /// The generation count is the sole stopping condition; with 0
    /// generations the result is the first front of the initial
    /// evaluated population.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`Nsga2Config::validate`] first for a descriptive error) or if
    /// the problem defines no decision variables.
    pub fn run<P: MultiObjectiveProblem>(problem: &P, config: &Nsga2Config) -> Nsga2Result {
        config.validate().expect("invalid Nsga2Config");
        let variables = problem.variables();
        assert!(
            !variables.is_empty(),
            "problem must define at least one decision variable"
        );

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Initialize and evaluate the starting population
        let mut population: Vec<Candidate> = (0..config.population_size)
            .map(|_| Candidate::random(variables, &mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);
        assign_rank_and_crowding(&mut population);

        let report_every = (config.generations / 10).max(1);

        // 2. Generational loop
        for gen in 0..config.generations {
            let mut offspring = make_offspring(problem, &population, config, &mut rng);
            evaluate_population(problem, &mut offspring, config.parallel);

            let mut combined = population;
            combined.append(&mut offspring);
            let fronts = assign_rank_and_crowding(&mut combined);
            population = select_next_population(&combined, &fronts, config.population_size);

            if (gen + 1) % report_every == 0 {
                let front1_size = population.iter().filter(|c| c.rank == 1).count();
                problem.on_generation(gen + 1, front1_size);
            }
        }

        // 3. Return the final first front, sorted by f1 ascending
        let mut front: Vec<Candidate> = population.into_iter().filter(|c| c.rank == 1).collect();
        front.sort_by(|a, b| a.f1.partial_cmp(&b.f1).unwrap_or(std::cmp::Ordering::Equal));

        Nsga2Result {
            front,
            generations: config.generations,
        }
    }
}

/// Evaluates every candidate in `population` exactly once, storing the
/// objective values in place. Idempotent on re-invocation.
fn evaluate_population<P: MultiObjectiveProblem>(
    problem: &P,
    population: &mut [Candidate],
    parallel: bool,
) {
    if parallel {
        population.par_iter_mut().for_each(|c| {
            let (f1, f2) = problem.evaluate(&c.x);
            c.f1 = f1;
            c.f2 = f2;
        });
    } else {
        for c in population.iter_mut() {
            let (f1, f2) = problem.evaluate(&c.x);
            c.f1 = f1;
            c.f2 = f2;
        }
    }
}

/// Builds one offspring population of the target size.
///
/// Per pair: binary tournament twice, clone both winners, SBX on the
/// pair gated once by the crossover rate, then an unconditional
/// polynomial-mutation pass over each child. With an odd target size
/// the second child of the last pair is dropped.
fn make_offspring<P: MultiObjectiveProblem, R: Rng>(
    problem: &P,
    population: &[Candidate],
    config: &Nsga2Config,
    rng: &mut R,
) -> Vec<Candidate> {
    let variables = problem.variables();
    let mut offspring = Vec::with_capacity(config.population_size);

    while offspring.len() < config.population_size {
        let p1 = tournament_select(population, rng);
        let p2 = tournament_select(population, rng);

        let mut c1 = population[p1].clone();
        let mut c2 = population[p2].clone();

        if rng.random_range(0.0..1.0) < config.crossover_rate {
            sbx_crossover(&mut c1.x, &mut c2.x, variables, rng);
        }
        polynomial_mutation(&mut c1.x, variables, config.mutation_rate, rng);
        polynomial_mutation(&mut c2.x, variables, config.mutation_rate, rng);

        offspring.push(c1);
        if offspring.len() < config.population_size {
            offspring.push(c2);
        }
    }

    offspring
}

/// Elitist environmental selection.
///
/// Appends whole fronts in ascending rank order while they fit within
/// `target`; the first front that would overflow is sorted by crowding
/// distance descending and cut to fill the remaining slots exactly.
/// Later fronts are discarded.
fn select_next_population(
    combined: &[Candidate],
    fronts: &[Vec<usize>],
    target: usize,
) -> Vec<Candidate> {
    let mut next = Vec::with_capacity(target);

    for front in fronts {
        let remaining = target - next.len();
        if remaining == 0 {
            break;
        }
        if front.len() <= remaining {
            next.extend(front.iter().map(|&i| combined[i].clone()));
        } else {
            let mut by_crowding = front.clone();
            by_crowding.sort_by(|&a, &b| {
                combined[b]
                    .crowding
                    .partial_cmp(&combined[a].crowding)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            next.extend(by_crowding[..remaining].iter().map(|&i| combined[i].clone()));
            break;
        }
    }

    next
}
