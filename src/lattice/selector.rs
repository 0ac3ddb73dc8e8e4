//! Feasibility-first candidate selection
//!
//! Ranking policy is an external comparator supplied to a stable sort, so
//! cruise and stopping modes can change tie-break rules without touching the
//! trajectory entity. Selection is a linear scan over the sorted order
//! returning the first feasible candidate, never a global minimum that
//! ignores feasibility.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::lattice::trajectory::Trajectory;

/// Cost-ascending comparator with a total order over f64
pub fn by_cost(a: &Trajectory, b: &Trajectory) -> Ordering {
    OrderedFloat(a.cost).cmp(&OrderedFloat(b.cost))
}

/// Stable-sort the candidates with the supplied comparator, then return the
/// first one satisfying the feasibility predicate. Ties keep generation
/// order. Returns the empty sentinel when no candidate exists or none is
/// feasible.
pub fn select_optimal<C, P>(mut candidates: Vec<Trajectory>, mut compare: C, feasible: P) -> Trajectory
where
    C: FnMut(&Trajectory, &Trajectory) -> Ordering,
    P: FnMut(&Trajectory) -> bool,
{
    candidates.sort_by(|a, b| compare(a, b));
    candidates.into_iter().find(feasible).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(cost: f64, marker: f64, fast: bool) -> Trajectory {
        let mut traj = Trajectory::new();
        traj.cost = cost;
        traj.s = vec![marker];
        traj.s_v = vec![if fast { 100.0 } else { 1.0 }];
        traj.x = vec![0.0, 1.0];
        traj.y = vec![0.0, 0.0];
        traj
    }

    fn slow_enough(traj: &Trajectory) -> bool {
        traj.s_v.iter().all(|&v| v <= 50.0)
    }

    #[test]
    fn test_cheaper_infeasible_candidate_is_skipped() {
        let candidates = vec![
            candidate(1.0, 1.0, true),  // cheapest but infeasible
            candidate(3.0, 2.0, false),
            candidate(2.0, 3.0, false),
        ];
        let best = select_optimal(candidates, by_cost, slow_enough);
        assert!((best.cost - 2.0).abs() < 1e-12);
        assert!((best.s[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let candidates = vec![
            candidate(2.0, 1.0, false),
            candidate(2.0, 2.0, false),
            candidate(5.0, 3.0, false),
        ];
        let best = select_optimal(candidates, by_cost, slow_enough);
        assert!((best.s[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_candidate_set_yields_sentinel() {
        let best = select_optimal(Vec::new(), by_cost, slow_enough);
        assert!(best.is_empty());
    }

    #[test]
    fn test_all_infeasible_yields_sentinel() {
        let candidates = vec![candidate(1.0, 1.0, true), candidate(2.0, 2.0, true)];
        let best = select_optimal(candidates, by_cost, slow_enough);
        assert!(best.is_empty());
    }

    #[test]
    fn test_never_returns_infeasible_when_feasible_exists() {
        let candidates = vec![
            candidate(0.5, 1.0, true),
            candidate(0.7, 2.0, true),
            candidate(9.0, 3.0, false),
        ];
        let best = select_optimal(candidates, by_cost, slow_enough);
        assert!(slow_enough(&best));
        assert!(!best.is_empty());
    }
}
