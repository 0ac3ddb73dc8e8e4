//! Approximate footprint collision test against point obstacles
//!
//! An inflated-rectangle proxy, not exact geometry: the vehicle's safety
//! disc is centered forward of the pose by half the overhang difference, and
//! each obstacle is tested in the body frame against the disc radius
//! longitudinally and the half width plus margin laterally.

use crate::common::{Obstacles, VehicleGeometry};
use crate::lattice::trajectory::Trajectory;

/// Binary collision indicator over every third pose of the candidate:
/// 1.0 when any obstacle falls inside the inflated footprint, else 0.0.
pub fn collision_indicator(
    traj: &Trajectory,
    vehicle: &VehicleGeometry,
    obstacles: &Obstacles,
    margin: f64,
) -> f64 {
    let center_offset = (vehicle.front_overhang - vehicle.rear_overhang) / 2.0;
    let radius =
        ((vehicle.front_overhang + vehicle.rear_overhang) / 2.0).hypot(vehicle.width / 2.0) + margin;
    let half_width = vehicle.width / 2.0 + margin;

    let poses = traj
        .x
        .iter()
        .zip(traj.y.iter())
        .zip(traj.yaw.iter())
        .step_by(3);

    for ((&x, &y), &yaw) in poses {
        let cx = x + center_offset * yaw.cos();
        let cy = y + center_offset * yaw.sin();

        for ob in &obstacles.points {
            let xo = ob.x - cx;
            let yo = ob.y - cy;
            let dx = xo * yaw.cos() + yo * yaw.sin();
            let dy = -xo * yaw.sin() + yo * yaw.cos();

            if dx.abs() < radius && dy.abs() < half_width {
                return 1.0;
            }
        }
    }

    0.0
}
