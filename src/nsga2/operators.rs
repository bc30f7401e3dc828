//! Variation and parent-selection operators.
//!
//! Real-coded operators bounded by the problem's variable domains:
//! binary tournament selection on (rank, crowding), simulated binary
//! crossover, and polynomial mutation. All operate through an explicit
//! [`rand::Rng`] handle; draw order is fixed so seeded runs reproduce
//! exactly.
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous
//!   Search Space"
//! - Deb & Goyal (1996), "A Combined Genetic Adaptive Search (GeneAS)
//!   for Engineering Design"

use super::types::{Candidate, DecisionVariable};
use rand::Rng;

/// Distribution index for simulated binary crossover.
pub const SBX_ETA: f64 = 15.0;

/// Distribution index for polynomial mutation.
pub const MUTATION_ETA: f64 = 20.0;

/// Binary tournament selection on a ranked population.
///
/// Draws two candidates uniformly at random with replacement and returns
/// the index of the winner: smaller rank first, larger crowding distance
/// on a rank tie, the second drawn on a full tie (deterministic).
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn tournament_select<R: Rng>(population: &[Candidate], rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let a = rng.random_range(0..population.len());
    let b = rng.random_range(0..population.len());

    if population[a].rank < population[b].rank {
        return a;
    }
    if population[b].rank < population[a].rank {
        return b;
    }
    if population[a].crowding > population[b].crowding {
        a
    } else {
        b
    }
}

/// Simulated binary crossover (SBX), in place on a pair of decision
/// vectors.
///
/// Each gene is skipped independently with probability 0.5; otherwise a
/// spread factor `beta` is drawn from the SBX distribution with
/// [`SBX_ETA`] and the two children replace the parents:
///
/// ```text
/// c1 = 0.5 * ((1 + beta) * x1 + (1 - beta) * x2)
/// c2 = 0.5 * ((1 - beta) * x1 + (1 + beta) * x2)
/// ```
///
/// Both are clamped to the gene's variable domain. The caller gates the
/// whole operator with the crossover rate, once per pair; the per-gene
/// coin here is internal to SBX.
///
/// # Panics
///
/// Panics if the vectors and `variables` have mismatched lengths.
pub fn sbx_crossover<R: Rng>(
    x1: &mut [f64],
    x2: &mut [f64],
    variables: &[DecisionVariable],
    rng: &mut R,
) {
    assert_eq!(x1.len(), variables.len(), "decision vector length mismatch");
    assert_eq!(x2.len(), variables.len(), "decision vector length mismatch");

    for i in 0..variables.len() {
        if rng.random_range(0.0..1.0) > 0.5 {
            continue;
        }
        let u: f64 = rng.random_range(0.0..1.0);
        let beta = if u <= 0.5 {
            (2.0 * u).powf(1.0 / (SBX_ETA + 1.0))
        } else {
            (1.0 / (2.0 * (1.0 - u))).powf(1.0 / (SBX_ETA + 1.0))
        };

        let c1 = 0.5 * ((1.0 + beta) * x1[i] + (1.0 - beta) * x2[i]);
        let c2 = 0.5 * ((1.0 - beta) * x1[i] + (1.0 + beta) * x2[i]);

        x1[i] = variables[i].clamp(c1);
        x2[i] = variables[i].clamp(c2);
    }
}

/// Polynomial mutation, in place on one decision vector.
///
/// Each gene mutates independently with probability `mutation_rate`.
/// The perturbation is drawn from the polynomial distribution with
/// [`MUTATION_ETA`], scaled by the gene's domain width, and clamped back
/// into the domain. Genes whose domain width is below `1e-12` are left
/// untouched (the rate coin is still consumed, keeping the draw sequence
/// independent of domain degeneracy).
///
/// # Panics
///
/// Panics if `x` and `variables` have mismatched lengths.
pub fn polynomial_mutation<R: Rng>(
    x: &mut [f64],
    variables: &[DecisionVariable],
    mutation_rate: f64,
    rng: &mut R,
) {
    assert_eq!(x.len(), variables.len(), "decision vector length mismatch");

    for i in 0..variables.len() {
        if rng.random_range(0.0..1.0) > mutation_rate {
            continue;
        }
        let var = &variables[i];
        let (lo, hi) = (var.min(), var.max());
        if hi - lo < 1e-12 {
            continue;
        }

        let y = x[i];
        let delta1 = (y - lo) / (hi - lo);
        let delta2 = (hi - y) / (hi - lo);
        let r: f64 = rng.random_range(0.0..1.0);
        let mut_pow = 1.0 / (MUTATION_ETA + 1.0);

        let deltaq = if r <= 0.5 {
            let xy = 1.0 - delta1;
            let val = 2.0 * r + (1.0 - 2.0 * r) * xy.powf(MUTATION_ETA + 1.0);
            val.powf(mut_pow) - 1.0
        } else {
            let xy = 1.0 - delta2;
            let val = 2.0 * (1.0 - r) + 2.0 * (r - 0.5) * xy.powf(MUTATION_ETA + 1.0);
            1.0 - val.powf(mut_pow)
        };

        x[i] = var.clamp(y + deltaq * (hi - lo));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn cand(rank: usize, crowding: f64) -> Candidate {
        Candidate {
            x: Vec::new(),
            f1: 0.0,
            f2: 0.0,
            rank,
            crowding,
        }
    }

    fn unit_vars(n: usize) -> Vec<DecisionVariable> {
        (0..n)
            .map(|i| DecisionVariable::new(format!("x{i}"), 0.0, 1.0))
            .collect()
    }

    // ---- Tournament ----

    #[test]
    fn test_tournament_prefers_lower_rank() {
        let pop = vec![cand(3, 100.0), cand(1, 0.0)];
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(tournament_select(&pop, &mut rng), 1);
        }
    }

    #[test]
    fn test_tournament_breaks_rank_tie_by_crowding() {
        let pop = vec![cand(1, 0.5), cand(1, 2.0)];
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(tournament_select(&pop, &mut rng), 1);
        }
    }

    #[test]
    fn test_tournament_infinite_crowding_wins_tie() {
        let pop = vec![cand(1, f64::INFINITY), cand(1, 10.0)];
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert_eq!(tournament_select(&pop, &mut rng), 0);
        }
    }

    #[test]
    fn test_tournament_full_tie_deterministic() {
        let pop = vec![cand(1, 1.0), cand(1, 1.0), cand(1, 1.0)];
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..50 {
            assert_eq!(
                tournament_select(&pop, &mut a),
                tournament_select(&pop, &mut b)
            );
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_tournament_empty_population_panics() {
        let pop: Vec<Candidate> = Vec::new();
        tournament_select(&pop, &mut create_rng(1));
    }

    // ---- SBX ----

    #[test]
    fn test_sbx_children_within_bounds() {
        let vars = unit_vars(4);
        let mut rng = create_rng(11);
        for _ in 0..200 {
            let mut x1 = vec![0.1, 0.9, 0.5, 0.0];
            let mut x2 = vec![0.8, 0.2, 0.5, 1.0];
            sbx_crossover(&mut x1, &mut x2, &vars, &mut rng);
            for (&a, &b) in x1.iter().zip(&x2) {
                assert!((0.0..=1.0).contains(&a));
                assert!((0.0..=1.0).contains(&b));
            }
        }
    }

    #[test]
    fn test_sbx_preserves_gene_sum_when_unclamped() {
        // With bounds wide enough that clamping never fires,
        // c1 + c2 == x1 + x2 per gene.
        let vars = vec![
            DecisionVariable::new("a", -1e9, 1e9),
            DecisionVariable::new("b", -1e9, 1e9),
        ];
        let mut rng = create_rng(5);
        for _ in 0..100 {
            let mut x1 = vec![3.0, -7.0];
            let mut x2 = vec![11.0, 2.5];
            let sums: Vec<f64> = x1.iter().zip(&x2).map(|(a, b)| a + b).collect();
            sbx_crossover(&mut x1, &mut x2, &vars, &mut rng);
            for i in 0..2 {
                assert!(
                    (x1[i] + x2[i] - sums[i]).abs() < 1e-6,
                    "gene sum drifted: {} vs {}",
                    x1[i] + x2[i],
                    sums[i]
                );
            }
        }
    }

    #[test]
    fn test_sbx_identical_parents_unchanged() {
        let vars = unit_vars(3);
        let mut rng = create_rng(9);
        let mut x1 = vec![0.3, 0.3, 0.3];
        let mut x2 = vec![0.3, 0.3, 0.3];
        sbx_crossover(&mut x1, &mut x2, &vars, &mut rng);
        for (&a, &b) in x1.iter().zip(&x2) {
            assert!((a - 0.3).abs() < 1e-9);
            assert!((b - 0.3).abs() < 1e-9);
        }
    }

    #[test]
    #[should_panic(expected = "decision vector length mismatch")]
    fn test_sbx_length_mismatch_panics() {
        let vars = unit_vars(2);
        let mut x1 = vec![0.5];
        let mut x2 = vec![0.5, 0.5];
        sbx_crossover(&mut x1, &mut x2, &vars, &mut create_rng(1));
    }

    // ---- Polynomial mutation ----

    #[test]
    fn test_mutation_stays_within_bounds() {
        let vars = unit_vars(5);
        let mut rng = create_rng(13);
        for _ in 0..200 {
            let mut x = vec![0.0, 0.25, 0.5, 0.75, 1.0];
            polynomial_mutation(&mut x, &vars, 1.0, &mut rng);
            for &v in &x {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let vars = unit_vars(3);
        let mut rng = create_rng(3);
        let mut x = vec![0.1, 0.5, 0.9];
        polynomial_mutation(&mut x, &vars, 0.0, &mut rng);
        assert_eq!(x, vec![0.1, 0.5, 0.9]);
    }

    #[test]
    fn test_mutation_skips_degenerate_domain() {
        let vars = vec![
            DecisionVariable::new("fixed", 2.0, 2.0),
            DecisionVariable::new("free", 0.0, 1.0),
        ];
        let mut rng = create_rng(17);
        let mut moved = false;
        for _ in 0..100 {
            let mut x = vec![2.0, 0.5];
            polynomial_mutation(&mut x, &vars, 1.0, &mut rng);
            assert_eq!(x[0], 2.0);
            moved |= (x[1] - 0.5).abs() > 1e-15;
        }
        assert!(moved, "free gene should mutate at rate 1.0");
    }

    #[test]
    fn test_mutation_rate_one_perturbs() {
        let vars = unit_vars(1);
        let mut rng = create_rng(23);
        let mut moved = false;
        for _ in 0..50 {
            let mut x = vec![0.5];
            polynomial_mutation(&mut x, &vars, 1.0, &mut rng);
            moved |= (x[0] - 0.5).abs() > 1e-15;
        }
        assert!(moved);
    }

    proptest! {
        #[test]
        fn prop_mutation_respects_bounds(seed in 0u64..1000, start in 0.0f64..1.0, rate in 0.0f64..1.0) {
            let vars = unit_vars(1);
            let mut rng = create_rng(seed);
            let mut x = vec![start];
            polynomial_mutation(&mut x, &vars, rate, &mut rng);
            prop_assert!(x[0] >= 0.0 && x[0] <= 1.0);
        }
    }
}
