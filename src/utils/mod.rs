//! Utility modules for lattice_planner

pub mod visualization;

pub use visualization::{colors, draw_vehicle, heading_arrow, vehicle_outline};
