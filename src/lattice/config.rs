//! Planner configuration
//!
//! Every numeric constant of the planner lives in an immutable
//! [`PlannerConfig`] passed into each planning call, so cruise and stopping
//! modes (and different vehicle classes) can vary them independently.

/// Hard physical limits checked against every trajectory sample
#[derive(Debug, Clone, Copy)]
pub struct MotionLimits {
    /// Maximum longitudinal speed [m/s]
    pub max_speed: f64,
    /// Maximum absolute longitudinal acceleration [m/s^2]
    pub max_accel: f64,
    /// Maximum absolute curvature [1/m]
    pub max_curvature: f64,
}

impl Default for MotionLimits {
    fn default() -> Self {
        Self {
            max_speed: 50.0 / 3.6,
            max_accel: 8.0,
            max_curvature: 6.0,
        }
    }
}

/// Weights combined into the scalar candidate cost
#[derive(Debug, Clone, Copy)]
pub struct CostWeights {
    /// Summed absolute lateral + longitudinal jerk
    pub jerk: f64,
    /// Terminal time
    pub time: f64,
    /// Terminal speed error (cruise) / squared terminal speed (stopping)
    pub speed: f64,
    /// Absolute terminal lateral offset
    pub offset: f64,
    /// Binary collision indicator (cruise only)
    pub collision: f64,
    /// Summed absolute longitudinal speed over the candidate (stopping only)
    pub stop_speed: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            jerk: 0.1,
            time: 1.0,
            speed: 1.0,
            offset: 1.5,
            collision: 500.0,
            stop_speed: 5.0,
        }
    }
}

/// Immutable configuration of the lattice planner
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Cruise target speed [m/s]
    pub target_speed: f64,
    /// Maximum lateral offset magnitude sampled either side of the
    /// reference line [m]
    pub road_width: f64,
    /// Lateral offset sampling step [m]
    pub road_sample_step: f64,
    /// Control time step of the sampled profiles [s]
    pub time_step: f64,

    /// Cruise terminal-speed grid as fractions of the target speed,
    /// [min, max) in the given step
    pub cruise_speed_fraction_min: f64,
    pub cruise_speed_fraction_max: f64,
    pub cruise_speed_fraction_step: f64,
    /// Cruise horizon grid [min, max) [s]
    pub cruise_min_horizon: f64,
    pub cruise_max_horizon: f64,
    pub cruise_horizon_step: f64,

    /// Stopping-mode target station along the reference line [m]
    pub stop_station: f64,
    /// Stopping-mode terminal speed set [m/s]
    pub stop_terminal_speeds: Vec<f64>,
    /// Stopping horizon grid [0, max) [s]
    pub stop_max_horizon: f64,
    pub stop_horizon_step: f64,

    /// World-frame goal acceptance radius [m]
    pub goal_radius: f64,
    /// Footprint inflation margin for the collision proxy [m]
    pub safety_margin: f64,

    pub weights: CostWeights,
    pub limits: MotionLimits,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            target_speed: 30.0 / 3.6,
            road_width: 8.0,
            road_sample_step: 1.0,
            time_step: 0.15,
            cruise_speed_fraction_min: 0.6,
            cruise_speed_fraction_max: 1.4,
            cruise_speed_fraction_step: 0.2,
            cruise_min_horizon: 4.5,
            cruise_max_horizon: 5.5,
            cruise_horizon_step: 0.2,
            stop_station: 55.0,
            stop_terminal_speeds: vec![-2.0, -1.0, 0.0, 1.0, 2.0],
            stop_max_horizon: 16.0,
            stop_horizon_step: 1.0,
            goal_radius: 2.0,
            safety_margin: 1.8,
            weights: CostWeights::default(),
            limits: MotionLimits::default(),
        }
    }
}

impl PlannerConfig {
    /// Cruise terminal-speed grid [m/s]
    pub fn cruise_speed_grid(&self) -> Vec<f64> {
        let mut grid = Vec::new();
        let mut v = self.target_speed * self.cruise_speed_fraction_min;
        while v < self.target_speed * self.cruise_speed_fraction_max {
            grid.push(v);
            v += self.target_speed * self.cruise_speed_fraction_step;
        }
        grid
    }

    /// Cruise terminal-time grid [s]
    pub fn cruise_horizon_grid(&self) -> Vec<f64> {
        let mut grid = Vec::new();
        let mut t = self.cruise_min_horizon;
        while t < self.cruise_max_horizon {
            grid.push(t);
            t += self.cruise_horizon_step;
        }
        grid
    }

    /// Terminal lateral offset grid either side of the reference line [m]
    pub fn lateral_offset_grid(&self) -> Vec<f64> {
        let mut grid = Vec::new();
        let mut l = -self.road_width;
        while l < self.road_width {
            grid.push(l);
            l += self.road_sample_step;
        }
        grid
    }

    /// Stopping terminal-time grid [s]
    pub fn stop_horizon_grid(&self) -> Vec<f64> {
        let mut grid = Vec::new();
        let mut t = 0.0;
        while t < self.stop_max_horizon {
            grid.push(t);
            t += self.stop_horizon_step;
        }
        grid
    }
}
