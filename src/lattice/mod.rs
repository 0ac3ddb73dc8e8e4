//! Frenet-Frame Lattice Planner Module
//!
//! Generates a grid of candidate short-horizon trajectories around an
//! arc-length parametrized reference line, scores and filters them, and
//! selects the best feasible one every planning cycle.
//!
//! # Components
//!
//! - `config`: immutable planner configuration (grids, weights, limits)
//! - `trajectory`: Frenet motion state and the candidate trajectory entity
//! - `sampler`: terminal-condition grids and candidate generation
//! - `cost`: cruise/stopping scalar cost evaluation
//! - `collision`: inflated-footprint obstacle indicator
//! - `constraint`: per-sample kinematic limit checks
//! - `selector`: feasibility-first selection over a stable cost ordering
//! - `planner`: planning entry points and the receding-horizon loop
//!
//! # Example
//!
//! ```no_run
//! use lattice_planner::cubic_spline::CubicSpline2D;
//! use lattice_planner::common::{Obstacles, VehicleGeometry};
//! use lattice_planner::lattice::{plan_cruise, FrenetState, PlannerConfig};
//!
//! let spline = CubicSpline2D::new(
//!     &[0.0, 20.0, 40.0, 60.0],
//!     &[0.0, 5.0, -5.0, 0.0],
//! ).unwrap();
//! let config = PlannerConfig::default();
//! let state = FrenetState::new(0.0, 0.0, 0.0, 0.0, 10.0 / 3.6, 0.0);
//!
//! let trajectory = plan_cruise(
//!     &state,
//!     &spline,
//!     &VehicleGeometry::default(),
//!     &Obstacles::new(),
//!     &config,
//! );
//! ```

pub mod config;
pub mod trajectory;
pub mod sampler;
pub mod cost;
pub mod collision;
pub mod constraint;
pub mod selector;
pub mod planner;

// Re-exports
pub use config::{CostWeights, MotionLimits, PlannerConfig};
pub use trajectory::{FrenetState, Trajectory};
pub use sampler::{sample_cruise_candidates, sample_stopping_candidates, sample_times};
pub use cost::{cruise_cost, stopping_cost};
pub use collision::collision_indicator;
pub use constraint::within_limits;
pub use selector::{by_cost, select_optimal};
pub use planner::{
    plan_cruise, plan_stopping, CycleOutcome, DrivingMode, PlanOutcome, PlanningLoop,
};
