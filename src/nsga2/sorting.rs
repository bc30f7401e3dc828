//! Fast non-dominated sorting and crowding distance.
//!
//! The ranking half of NSGA-II: partition a population into Pareto
//! fronts by dominance, then measure within-front diversity so that
//! selection can prefer spread-out candidates.
//!
//! Dominance bookkeeping (who dominates whom, how many dominate each
//! candidate) is transient: it lives in index-based arenas local to one
//! sorting pass, never on the candidates themselves.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II", IEEE Trans. Evolutionary Computation 6(2)

use super::types::Candidate;

/// Pareto dominance under the both-objectives-minimized convention.
///
/// `p` dominates `q` iff `p` is no worse in both objectives and strictly
/// better in at least one. Any comparison involving NaN is false, so a
/// non-finite objective resolves to "neither dominates" rather than
/// raising.
pub fn dominates(p: &Candidate, q: &Candidate) -> bool {
    let no_worse = p.f1 <= q.f1 && p.f2 <= q.f2;
    let strictly_better = p.f1 < q.f1 || p.f2 < q.f2;
    no_worse && strictly_better
}

/// Fast non-dominated sorting (Deb et al., 2002).
///
/// Partitions the population into fronts of candidate indices, best
/// front first, and sets each candidate's `rank` to its 1-based front
/// index as a side effect.
///
/// # Complexity
///
/// O(M²) dominance comparisons for a population of size M — acceptable
/// at the population sizes this algorithm targets (hundreds).
pub fn fast_non_dominated_sort(population: &mut [Candidate]) -> Vec<Vec<usize>> {
    let n = population.len();
    if n == 0 {
        return Vec::new();
    }

    // Transient dominance graph, rebuilt from scratch every pass.
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut dominance_count = vec![0usize; n];
    let mut first_front = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(&population[i], &population[j]) {
                dominated[i].push(j);
                dominance_count[j] += 1;
            } else if dominates(&population[j], &population[i]) {
                dominated[j].push(i);
                dominance_count[i] += 1;
            }
        }
        if dominance_count[i] == 0 {
            first_front.push(i);
        }
    }

    let mut fronts = vec![first_front];
    loop {
        let current = fronts.last().expect("fronts starts non-empty");
        let mut next = Vec::new();
        for &p in current {
            for &q in &dominated[p] {
                dominance_count[q] -= 1;
                if dominance_count[q] == 0 {
                    next.push(q);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        fronts.push(next);
    }

    for (front_idx, front) in fronts.iter().enumerate() {
        for &i in front {
            population[i].rank = front_idx + 1;
        }
    }

    fronts
}

/// Crowding distance assignment for one front.
///
/// `front` holds indices into `population` of candidates sharing a rank.
/// For each objective independently: sort the front by that objective
/// ascending, give the two boundary candidates `f64::INFINITY`, and add
/// the normalized gap between each interior candidate's neighbors to its
/// running total. Distances accumulate additively across both objectives.
///
/// The normalization term is skipped entirely when the objective's range
/// is at most `1e-12`, so degenerate or constant fronts never divide by
/// zero. Fronts of size 0 or 1 are no-ops: a lone candidate keeps
/// crowding 0 because no boundary distinction is possible.
pub fn crowding_distance(population: &mut [Candidate], front: &[usize]) {
    for &i in front {
        population[i].crowding = 0.0;
    }
    if front.len() < 2 {
        return;
    }

    let objectives: [fn(&Candidate) -> f64; 2] = [|c| c.f1, |c| c.f2];
    let mut order = front.to_vec();

    for objective in objectives {
        order.sort_by(|&a, &b| {
            objective(&population[a])
                .partial_cmp(&objective(&population[b]))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let last = order.len() - 1;
        population[order[0]].crowding = f64::INFINITY;
        population[order[last]].crowding = f64::INFINITY;

        let range = objective(&population[order[last]]) - objective(&population[order[0]]);
        if range > 1e-12 {
            for w in 1..last {
                let below = objective(&population[order[w - 1]]);
                let above = objective(&population[order[w + 1]]);
                population[order[w]].crowding += (above - below) / range;
            }
        }
    }
}

/// One full ranking pass: reset rank/crowding, sort into fronts, and
/// compute crowding per front. Returns the fronts as index lists.
pub fn assign_rank_and_crowding(population: &mut [Candidate]) -> Vec<Vec<usize>> {
    for c in population.iter_mut() {
        c.rank = 0;
        c.crowding = 0.0;
    }
    let fronts = fast_non_dominated_sort(population);
    for front in &fronts {
        crowding_distance(population, front);
    }
    fronts
}
