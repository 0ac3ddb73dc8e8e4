//! Planner entry points and the receding-horizon planning loop

use crate::common::{Obstacles, Point2D, ReferencePath, VehicleGeometry};
use crate::lattice::config::PlannerConfig;
use crate::lattice::constraint::within_limits;
use crate::lattice::sampler::{sample_cruise_candidates, sample_stopping_candidates};
use crate::lattice::selector::{by_cost, select_optimal};
use crate::lattice::trajectory::{FrenetState, Trajectory};

/// One cruise-mode planning cycle: target-speed tracking with obstacle
/// avoidance. Returns the selected trajectory, or the empty sentinel when
/// the grid produced no candidate or none is feasible.
pub fn plan_cruise<R: ReferencePath>(
    state: &FrenetState,
    ref_path: &R,
    vehicle: &VehicleGeometry,
    obstacles: &Obstacles,
    config: &PlannerConfig,
) -> Trajectory {
    let candidates = sample_cruise_candidates(state, ref_path, vehicle, obstacles, config);
    select_optimal(candidates, by_cost, |p| within_limits(p, &config.limits))
}

/// One stopping-mode planning cycle: fixed-station approach with zero
/// terminal velocity and no obstacle checking.
pub fn plan_stopping<R: ReferencePath>(
    state: &FrenetState,
    ref_path: &R,
    config: &PlannerConfig,
) -> Trajectory {
    let candidates = sample_stopping_candidates(state, ref_path, config);
    select_optimal(candidates, by_cost, |p| within_limits(p, &config.limits))
}

/// Driving mode of the receding-horizon loop
#[derive(Debug, Clone)]
pub enum DrivingMode {
    /// Target-speed tracking with obstacle avoidance
    Cruise {
        vehicle: VehicleGeometry,
        obstacles: Obstacles,
    },
    /// Fixed-station approach toward a stop point
    Stopping,
}

/// Result of one planning cycle
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    /// A trajectory was selected and its second sample committed;
    /// planning continues
    Committed(Trajectory),
    /// The committed pose lies within the goal radius; terminal success
    GoalReached(Trajectory),
    /// No candidate exists or none is feasible; terminal failure with no
    /// retry, relaxed-constraint fallback, or grid widening
    NoFeasiblePath,
}

/// Terminal result of a full receding-horizon run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    GoalReached,
    NoFeasiblePath,
    /// The optional cycle bound was exhausted before a terminal state
    CycleLimitReached,
}

/// Receding-horizon driver: replans the full candidate grid every cycle and
/// commits only the selected trajectory's second sample before replanning.
/// The threaded Frenet state is the only state carried across cycles.
#[derive(Debug, Clone)]
pub struct PlanningLoop {
    mode: DrivingMode,
    config: PlannerConfig,
    state: FrenetState,
    goal: Point2D,
    cycles: usize,
}

impl PlanningLoop {
    pub fn new(mode: DrivingMode, config: PlannerConfig, initial_state: FrenetState, goal: Point2D) -> Self {
        Self {
            mode,
            config,
            state: initial_state,
            goal,
            cycles: 0,
        }
    }

    /// The current threaded Frenet state
    pub fn state(&self) -> &FrenetState {
        &self.state
    }

    /// Number of planning cycles run so far
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Run one planning cycle: sample, convert, score, select, commit.
    pub fn step<R: ReferencePath>(&mut self, ref_path: &R) -> CycleOutcome {
        self.cycles += 1;

        let selected = match &self.mode {
            DrivingMode::Cruise { vehicle, obstacles } => {
                plan_cruise(&self.state, ref_path, vehicle, obstacles, &self.config)
            }
            DrivingMode::Stopping => plan_stopping(&self.state, ref_path, &self.config),
        };

        if selected.is_empty() {
            return CycleOutcome::NoFeasiblePath;
        }
        let next = match selected.state_at_step(1) {
            Some(next) => next,
            None => return CycleOutcome::NoFeasiblePath,
        };
        self.state = next;

        let committed = Point2D::new(selected.x[1], selected.y[1]);
        if committed.distance(&self.goal) <= self.config.goal_radius {
            CycleOutcome::GoalReached(selected)
        } else {
            CycleOutcome::Committed(selected)
        }
    }

    /// Drive the loop to a terminal outcome. `max_cycles` of `None`
    /// preserves the unbounded replanning behavior.
    pub fn run<R: ReferencePath>(&mut self, ref_path: &R, max_cycles: Option<usize>) -> PlanOutcome {
        loop {
            if let Some(max) = max_cycles {
                if self.cycles >= max {
                    return PlanOutcome::CycleLimitReached;
                }
            }
            match self.step(ref_path) {
                CycleOutcome::Committed(_) => {}
                CycleOutcome::GoalReached(_) => return PlanOutcome::GoalReached,
                CycleOutcome::NoFeasiblePath => return PlanOutcome::NoFeasiblePath,
            }
        }
    }
}
