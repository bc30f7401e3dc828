//! NSGA-II: elitist non-dominated sorting genetic algorithm.
//!
//! A bi-objective evolutionary optimizer over bounded real-valued
//! decision variables. Users define their problem by implementing
//! [`MultiObjectiveProblem`], which exposes the variable domains and a
//! pure two-objective evaluation function; the engine owns the
//! population and the generational loop.
//!
//! # Core Traits
//!
//! - [`MultiObjectiveProblem`]: problem definition — variable bounds and
//!   evaluation
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: algorithm parameters (population size, generations,
//!   operator rates, seed)
//! - [`Nsga2Runner`]: executes the generational loop
//! - [`Nsga2Result`]: the final Pareto front
//! - [`Candidate`]: a decision vector with fitness, rank, and crowding
//!
//! # Submodules
//!
//! - [`sorting`]: fast non-dominated sorting and crowding distance
//! - [`operators`]: tournament selection, SBX, polynomial mutation
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Deb & Agrawal (1995), *Simulated Binary Crossover for Continuous
//!   Search Space*

mod config;
mod runner;
pub mod operators;
pub mod sorting;
mod types;

pub use config::Nsga2Config;
pub use runner::{Nsga2Result, Nsga2Runner};
pub use types::{Candidate, DecisionVariable, MultiObjectiveProblem};
