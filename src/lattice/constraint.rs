//! Per-sample kinematic limit checks

use crate::lattice::config::MotionLimits;
use crate::lattice::trajectory::Trajectory;

/// A candidate is feasible when no sample exceeds the speed limit, the
/// absolute acceleration limit, or the absolute curvature limit.
///
/// A candidate with zero samples vacuously passes; emptiness is filtered
/// earlier by the converter's invalidity rule, never here.
pub fn within_limits(traj: &Trajectory, limits: &MotionLimits) -> bool {
    if traj.s_v.iter().any(|&v| v > limits.max_speed) {
        return false;
    }
    if traj.s_a.iter().any(|&a| a.abs() > limits.max_accel) {
        return false;
    }
    if traj.curvature.iter().any(|&c| c.abs() > limits.max_curvature) {
        return false;
    }
    true
}
