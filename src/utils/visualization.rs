//! Visualization helpers for the demo scenarios
//!
//! Thin gnuplot helpers shared by the demo binaries: a palette and
//! vehicle-outline drawing.

use gnuplot::{Axes2D, Color, LineWidth};

use crate::common::{Pose2D, VehicleGeometry};

/// Color palette for consistent styling
pub mod colors {
    pub const REFERENCE: &str = "#808080";
    pub const BOUNDARY: &str = "#000000";
    pub const OBSTACLE: &str = "#000000";
    pub const CANDIDATE: &str = "#00FFFF";
    pub const OPTIMAL: &str = "#FF0000";
    pub const VEHICLE: &str = "#0000FF";
}

/// Vehicle rectangle corners in world frame, closed for line plotting
pub fn vehicle_outline(pose: &Pose2D, geometry: &VehicleGeometry) -> (Vec<f64>, Vec<f64>) {
    let rf = geometry.front_overhang;
    let rb = geometry.rear_overhang;
    let hw = geometry.width / 2.0;

    let body_x = [-rb, -rb, rf, rf, -rb];
    let body_y = [hw, -hw, -hw, hw, hw];

    let (sin_yaw, cos_yaw) = pose.yaw.sin_cos();
    let x = body_x
        .iter()
        .zip(body_y.iter())
        .map(|(&bx, &by)| pose.x + bx * cos_yaw - by * sin_yaw)
        .collect();
    let y = body_x
        .iter()
        .zip(body_y.iter())
        .map(|(&bx, &by)| pose.y + bx * sin_yaw + by * cos_yaw)
        .collect();

    (x, y)
}

/// Heading arrow polyline: shaft to the tip, then both barbs
pub fn heading_arrow(pose: &Pose2D, length: f64) -> (Vec<f64>, Vec<f64>) {
    let barb_angle = std::f64::consts::PI / 6.0;
    let barb = 0.3 * length;

    let tip_x = pose.x + length * pose.yaw.cos();
    let tip_y = pose.y + length * pose.yaw.sin();
    let left = pose.yaw + std::f64::consts::PI - barb_angle;
    let right = pose.yaw + std::f64::consts::PI + barb_angle;

    let x = vec![
        pose.x,
        tip_x,
        tip_x + barb * left.cos(),
        tip_x,
        tip_x + barb * right.cos(),
    ];
    let y = vec![
        pose.y,
        tip_y,
        tip_y + barb * left.sin(),
        tip_y,
        tip_y + barb * right.sin(),
    ];

    (x, y)
}

/// Draw the vehicle outline and heading arrow onto the axes
pub fn draw_vehicle(axes: &mut Axes2D, pose: &Pose2D, geometry: &VehicleGeometry) {
    let (x, y) = vehicle_outline(pose, geometry);
    axes.lines(&x, &y, &[Color(colors::VEHICLE), LineWidth(2.0)]);

    let (ax, ay) = heading_arrow(pose, geometry.wheelbase * 0.8);
    axes.lines(&ax, &ay, &[Color(colors::VEHICLE)]);
}
