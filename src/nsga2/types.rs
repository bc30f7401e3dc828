//! Core type definitions for the NSGA-II engine.
//!
//! [`DecisionVariable`] and [`MultiObjectiveProblem`] form the contract
//! between the generic engine and domain-specific problem definitions;
//! [`Candidate`] is the engine's population entity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named, bounded real-valued decision variable.
///
/// Immutable after construction. The engine never stores bounds on
/// candidates; operators clamp against the variable's domain instead.
///
/// # Panics
///
/// [`DecisionVariable::new`] panics when `min > max` or either bound is
/// non-finite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecisionVariable {
    name: String,
    min: f64,
    max: f64,
}

impl DecisionVariable {
    /// Creates a bounded variable with `min <= max`.
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        assert!(
            min.is_finite() && max.is_finite(),
            "decision variable bounds must be finite"
        );
        assert!(
            min <= max,
            "decision variable min must not exceed max: {min} > {max}"
        );
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    /// The variable's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the domain, `max - min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Bounds `value` to `[min, max]`. Idempotent.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Defines a bi-objective optimization problem.
///
/// This is the only boundary the engine consumes: the ordered list of
/// decision variables and a pure evaluation function. Both objectives
/// are **minimized**; a problem wanting to maximize an objective negates
/// it before returning.
///
/// # Implementing
///
/// ```
/// use moea::nsga2::{DecisionVariable, MultiObjectiveProblem};
///
/// struct Schaffer {
///     vars: Vec<DecisionVariable>,
/// }
///
/// impl MultiObjectiveProblem for Schaffer {
///     fn variables(&self) -> &[DecisionVariable] {
///         &self.vars
///     }
///
///     fn evaluate(&self, x: &[f64]) -> (f64, f64) {
///         (x[0] * x[0], (x[0] - 2.0) * (x[0] - 2.0))
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `MultiObjectiveProblem` must be `Send + Sync` because the runner may
/// evaluate candidates in parallel using rayon.
pub trait MultiObjectiveProblem: Send + Sync {
    /// The ordered decision variables. Fixed for the run, length `n >= 1`.
    ///
    /// The order defines the indexing contract for decision vectors: the
    /// engine passes `x` to [`evaluate`](Self::evaluate) with `x[j]`
    /// belonging to `variables()[j]`.
    fn variables(&self) -> &[DecisionVariable];

    /// Evaluates a decision vector, returning the two objective values.
    ///
    /// Must be pure with respect to the engine: the engine calls it
    /// exactly once per (re-)evaluation point and treats the result as a
    /// black-box score. This is typically the most expensive operation
    /// and may be called in parallel across candidates.
    fn evaluate(&self, x: &[f64]) -> (f64, f64);

    /// Called periodically during the run with the current generation
    /// number and the size of the first front.
    ///
    /// Useful for logging or external progress reporting. The default
    /// implementation is a no-op.
    fn on_generation(&self, _generation: usize, _front_size: usize) {}
}

/// A candidate solution: a decision vector plus derived fitness metadata.
///
/// `f1`/`f2` are valid only after evaluation; fresh candidates carry
/// `f64::INFINITY` there. `rank` is the 1-based Pareto front index, 0
/// while unassigned. `crowding` is the within-front diversity metric;
/// `f64::INFINITY` marks a front-boundary candidate that truncation
/// never removes.
///
/// Transient dominance bookkeeping lives in the sorting pass, not here,
/// so cloning a candidate is a plain deep copy of the decision vector
/// with fitness metadata carried over.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    /// Decision vector, one component per decision variable.
    pub x: Vec<f64>,
    /// First objective value.
    pub f1: f64,
    /// Second objective value.
    pub f2: f64,
    /// 1-based Pareto front index; 0 means unassigned.
    pub rank: usize,
    /// Crowding distance within the candidate's front.
    pub crowding: f64,
}

impl Candidate {
    /// Creates an unevaluated candidate with an all-zero decision vector.
    pub fn new(n_vars: usize) -> Self {
        Self {
            x: vec![0.0; n_vars],
            f1: f64::INFINITY,
            f2: f64::INFINITY,
            rank: 0,
            crowding: 0.0,
        }
    }

    /// Creates an unevaluated candidate with each gene drawn uniformly
    /// from its variable's domain.
    pub fn random<R: rand::Rng>(variables: &[DecisionVariable], rng: &mut R) -> Self {
        let mut candidate = Self::new(variables.len());
        for (gene, var) in candidate.x.iter_mut().zip(variables) {
            // min + u * (max - min) also covers degenerate min == max
            // domains, where sampling an empty Range would panic.
            let u: f64 = rng.random_range(0.0..1.0);
            *gene = var.min() + u * var.range();
        }
        candidate
    }
}
