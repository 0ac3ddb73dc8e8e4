//! Candidate trajectory generation over terminal-condition grids
//!
//! Cruise mode pairs one quartic longitudinal profile per (terminal speed,
//! horizon) grid point with one quintic lateral profile per terminal offset;
//! stopping mode drives a quintic longitudinal profile into a fixed station
//! with the lateral offset pinned to the lane center. Candidates are
//! converted, filtered for validity, and scored here; their generation order
//! defines the selector's tie-break order.

use itertools::iproduct;

use crate::common::{Obstacles, ReferencePath, VehicleGeometry};
use crate::lattice::collision::collision_indicator;
use crate::lattice::config::PlannerConfig;
use crate::lattice::cost::{cruise_cost, stopping_cost};
use crate::lattice::trajectory::{FrenetState, Trajectory};
use crate::polynomial::{QuarticPolynomial, QuinticPolynomial};

/// Control-step time vector: [0, horizon) at the given step, with the
/// horizon itself appended as the final sample.
pub fn sample_times(horizon: f64, step: f64) -> Vec<f64> {
    let mut times = Vec::new();
    let mut t = 0.0;
    while t < horizon {
        times.push(t);
        t += step;
    }
    times.push(horizon);
    times
}

fn longitudinal_base<P>(times: Vec<f64>, point: P) -> Trajectory
where
    P: Fn(f64) -> (f64, f64, f64, f64),
{
    let mut base = Trajectory::new();
    for &t in &times {
        let (s, s_v, s_a, s_jerk) = point(t);
        base.s.push(s);
        base.s_v.push(s_v);
        base.s_a.push(s_a);
        base.s_jerk.push(s_jerk);
    }
    base.time = times;
    base
}

fn fill_lateral(candidate: &mut Trajectory, times: &[f64], lat: &QuinticPolynomial) {
    for &t in times {
        candidate.l.push(lat.calc_point(t));
        candidate.l_v.push(lat.calc_first_derivative(t));
        candidate.l_a.push(lat.calc_second_derivative(t));
        candidate.l_jerk.push(lat.calc_third_derivative(t));
    }
}

/// Cruise-mode candidate grid: one candidate per
/// (terminal speed, horizon, terminal lateral offset) triple.
pub fn sample_cruise_candidates<R: ReferencePath>(
    state: &FrenetState,
    ref_path: &R,
    vehicle: &VehicleGeometry,
    obstacles: &Obstacles,
    config: &PlannerConfig,
) -> Vec<Trajectory> {
    let mut candidates = Vec::new();
    let speed_grid = config.cruise_speed_grid();
    let horizon_grid = config.cruise_horizon_grid();
    let offset_grid = config.lateral_offset_grid();

    for (&s1_v, &t1) in iproduct!(speed_grid.iter(), horizon_grid.iter()) {
        let lon = QuarticPolynomial::new(state.s, state.s_v, state.s_a, s1_v, 0.0, t1);
        let base = longitudinal_base(sample_times(t1, config.time_step), |t| {
            (
                lon.calc_point(t),
                lon.calc_first_derivative(t),
                lon.calc_second_derivative(t),
                lon.calc_third_derivative(t),
            )
        });

        for &l1 in &offset_grid {
            let mut candidate = base.clone();
            let lat = QuinticPolynomial::new(state.l, state.l_v, state.l_a, l1, 0.0, 0.0, t1);
            fill_lateral(&mut candidate, &base.time, &lat);

            candidate.project_to_world(ref_path);
            candidate.calc_yaw_curvature();
            if !candidate.has_valid_pose() {
                continue;
            }

            let collision = collision_indicator(&candidate, vehicle, obstacles, config.safety_margin);
            candidate.cost = cruise_cost(&candidate, t1, collision, config);
            candidates.push(candidate);
        }
    }

    candidates
}

/// Stopping-mode candidate grid: quintic longitudinal profiles into the
/// fixed stop station per (terminal speed, horizon) pair, lateral offset
/// pinned to the lane center, no obstacle checking.
pub fn sample_stopping_candidates<R: ReferencePath>(
    state: &FrenetState,
    ref_path: &R,
    config: &PlannerConfig,
) -> Vec<Trajectory> {
    let mut candidates = Vec::new();
    let horizon_grid = config.stop_horizon_grid();

    for (&s1_v, &t1) in iproduct!(config.stop_terminal_speeds.iter(), horizon_grid.iter()) {
        let lon = QuinticPolynomial::new(
            state.s,
            state.s_v,
            state.s_a,
            config.stop_station,
            s1_v,
            0.0,
            t1,
        );
        let base = longitudinal_base(sample_times(t1, config.time_step), |t| {
            (
                lon.calc_point(t),
                lon.calc_first_derivative(t),
                lon.calc_second_derivative(t),
                lon.calc_third_derivative(t),
            )
        });

        let l1 = 0.0;
        let mut candidate = base.clone();
        let lat = QuinticPolynomial::new(state.l, state.l_v, state.l_a, l1, 0.0, 0.0, t1);
        fill_lateral(&mut candidate, &base.time, &lat);

        candidate.project_to_world(ref_path);
        candidate.calc_yaw_curvature();
        if !candidate.has_valid_pose() {
            continue;
        }

        candidate.cost = stopping_cost(&candidate, t1, config);
        candidates.push(candidate);
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Point2D;

    struct StraightLine {
        length: f64,
    }

    impl ReferencePath for StraightLine {
        fn position(&self, s: f64) -> Point2D {
            Point2D::new(s, 0.0)
        }

        fn heading(&self, _s: f64) -> f64 {
            0.0
        }

        fn max_arc_length(&self) -> f64 {
            self.length
        }
    }

    fn moving_state() -> FrenetState {
        FrenetState::new(0.0, 0.0, 0.0, 0.0, 30.0 / 3.6, 0.0)
    }

    #[test]
    fn test_sample_times_half_open_with_terminal() {
        let times = sample_times(4.5, 0.15);
        assert!((times[0] - 0.0).abs() < 1e-12);
        assert!((times[times.len() - 1] - 4.5).abs() < 1e-12);
        for pair in times.windows(2) {
            assert!(pair[1] > pair[0] - 1e-12);
        }
        // a zero horizon degenerates to the single terminal sample
        assert_eq!(sample_times(0.0, 0.15), vec![0.0]);
    }

    #[test]
    fn test_cruise_candidates_share_per_field_lengths() {
        let line = StraightLine { length: 500.0 };
        let config = PlannerConfig::default();
        let candidates = sample_cruise_candidates(
            &moving_state(),
            &line,
            &VehicleGeometry::default(),
            &Obstacles::new(),
            &config,
        );
        assert!(!candidates.is_empty());

        for c in &candidates {
            let n = c.time.len();
            assert_eq!(c.s.len(), n);
            assert_eq!(c.s_v.len(), n);
            assert_eq!(c.s_a.len(), n);
            assert_eq!(c.s_jerk.len(), n);
            assert_eq!(c.l.len(), n);
            assert_eq!(c.l_v.len(), n);
            assert_eq!(c.l_a.len(), n);
            assert_eq!(c.l_jerk.len(), n);
            // converted poses may be truncated but never exceed the samples
            assert!(c.x.len() <= n);
            assert!(c.has_valid_pose());
            assert_eq!(c.yaw.len(), c.x.len());
        }
    }

    #[test]
    fn test_cruise_grid_size_and_terminal_conditions() {
        let line = StraightLine { length: 500.0 };
        let config = PlannerConfig::default();
        let candidates = sample_cruise_candidates(
            &moving_state(),
            &line,
            &VehicleGeometry::default(),
            &Obstacles::new(),
            &config,
        );

        let expected = config.cruise_speed_grid().len()
            * config.cruise_horizon_grid().len()
            * config.lateral_offset_grid().len();
        // nothing truncates on a long straight line
        assert_eq!(candidates.len(), expected);

        let speed_grid = config.cruise_speed_grid();
        for c in &candidates {
            let terminal = *c.s_v.last().unwrap();
            assert!(speed_grid.iter().any(|g| (g - terminal).abs() < 1e-6));
        }
    }

    #[test]
    fn test_candidate_lengths_vary_with_horizon() {
        let line = StraightLine { length: 500.0 };
        let config = PlannerConfig::default();
        let candidates = sample_stopping_candidates(&moving_state(), &line, &config);

        let min_len = candidates.iter().map(|c| c.time.len()).min().unwrap();
        let max_len = candidates.iter().map(|c| c.time.len()).max().unwrap();
        assert!(min_len < max_len);
    }

    #[test]
    fn test_stopping_offsets_pinned_to_lane_center() {
        let line = StraightLine { length: 500.0 };
        let config = PlannerConfig::default();
        let candidates = sample_stopping_candidates(&moving_state(), &line, &config);
        assert!(!candidates.is_empty());

        for c in &candidates {
            assert!(c.l.last().unwrap().abs() < 1e-9);
        }
    }

    #[test]
    fn test_colliding_candidates_carry_collision_weight() {
        let line = StraightLine { length: 500.0 };
        let config = PlannerConfig::default();
        // directly downstream on the lane center
        let obstacles = Obstacles::from_xy(&[20.0], &[0.0]);
        let candidates = sample_cruise_candidates(
            &moving_state(),
            &line,
            &VehicleGeometry::default(),
            &obstacles,
            &config,
        );

        assert!(candidates.iter().any(|c| c.cost >= config.weights.collision));
    }

    #[test]
    fn test_unreachable_path_extent_yields_no_candidates() {
        let line = StraightLine { length: 10.0 };
        let config = PlannerConfig::default();
        let beyond_end = FrenetState::new(0.0, 0.0, 0.0, 200.0, 30.0 / 3.6, 0.0);
        let candidates = sample_cruise_candidates(
            &beyond_end,
            &line,
            &VehicleGeometry::default(),
            &Obstacles::new(),
            &config,
        );
        assert!(candidates.is_empty());
    }
}
