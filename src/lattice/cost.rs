//! Scalar cost evaluation for candidate trajectories

use crate::lattice::config::PlannerConfig;
use crate::lattice::trajectory::Trajectory;

fn jerk_sums(traj: &Trajectory) -> (f64, f64) {
    let l_jerk_sum = traj.l_jerk.iter().map(|j| j.abs()).sum();
    let s_jerk_sum = traj.s_jerk.iter().map(|j| j.abs()).sum();
    (l_jerk_sum, s_jerk_sum)
}

/// Cruise-mode cost: comfort (jerk), target-speed tracking, horizon length,
/// lateral deviation, and a large penalty on the binary collision indicator.
pub fn cruise_cost(traj: &Trajectory, horizon: f64, collision: f64, config: &PlannerConfig) -> f64 {
    let w = &config.weights;
    let (l_jerk_sum, s_jerk_sum) = jerk_sums(traj);
    let v_diff = (config.target_speed - traj.s_v.last().unwrap_or(&0.0)).abs();

    w.jerk * (l_jerk_sum + s_jerk_sum)
        + w.speed * v_diff
        + w.time * horizon * 2.0
        + w.offset * traj.l.last().unwrap_or(&0.0).abs()
        + w.collision * collision
}

/// Stopping-mode cost: comfort and horizon terms as in cruise, squared
/// terminal speed, and a running penalty on the summed absolute speed that
/// discourages crawling toward the stop station.
pub fn stopping_cost(traj: &Trajectory, horizon: f64, config: &PlannerConfig) -> f64 {
    let w = &config.weights;
    let (l_jerk_sum, s_jerk_sum) = jerk_sums(traj);
    let v_diff = traj.s_v.last().unwrap_or(&0.0).powi(2);
    let s_v_sum: f64 = traj.s_v.iter().map(|v| v.abs()).sum();

    w.jerk * (l_jerk_sum + s_jerk_sum)
        + w.speed * v_diff
        + w.time * horizon * 2.0
        + w.offset * traj.l.last().unwrap_or(&0.0).abs()
        + w.stop_speed * s_v_sum
}
