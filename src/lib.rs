//! Elitist bi-objective evolutionary optimization with NSGA-II.
//!
//! Implements the Non-dominated Sorting Genetic Algorithm II
//! (Deb et al., 2002) for problems with a fixed set of bounded
//! real-valued decision variables and two minimized objectives:
//!
//! - **Fast non-dominated sorting**: partitions the population into
//!   ranked Pareto fronts.
//! - **Crowding distance**: within-front diversity metric used as the
//!   secondary selection criterion.
//! - **SBX + polynomial mutation**: real-coded variation operators
//!   bounded by the problem's variable domains.
//! - **Elitist environmental selection**: parents and offspring compete
//!   jointly; better fronts survive whole, the boundary front is cut by
//!   crowding distance.
//!
//! # Architecture
//!
//! The engine is generic over a [`nsga2::MultiObjectiveProblem`]: the
//! problem supplies the decision-variable bounds and a pure two-objective
//! evaluation function, and the engine owns everything else — population,
//! ranking, selection pressure, and the generational loop. Concrete
//! problems (benchmark functions, domain models) live with consumers,
//! never in this crate.

pub mod nsga2;
pub mod random;
