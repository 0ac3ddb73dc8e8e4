//! LatticePlanner - Frenet-frame lattice trajectory planning
//!
//! This crate implements a receding-horizon lattice trajectory planner for
//! car-like vehicles: candidate minimum-jerk trajectories are sampled over a
//! grid of terminal conditions in Frenet coordinates, converted to world
//! frame along a reference line, scored, checked against kinematic limits,
//! and the best feasible candidate is committed one step per cycle.

// Core modules
pub mod common;
pub mod utils;

// Planner modules
pub mod cubic_spline;
pub mod polynomial;
pub mod lattice;

// Re-export common types for convenience
pub use common::{normalize_angle, Obstacles, Point2D, Pose2D, VehicleGeometry};
pub use common::{PlanningError, PlanningResult, ReferencePath};
pub use cubic_spline::CubicSpline2D;
pub use polynomial::{QuarticPolynomial, QuinticPolynomial};
pub use lattice::{
    plan_cruise, plan_stopping, CycleOutcome, DrivingMode, FrenetState, PlanOutcome,
    PlannerConfig, PlanningLoop, Trajectory,
};
