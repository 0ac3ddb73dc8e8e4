//! Frenet motion state and candidate trajectory entity

use std::f64::consts::FRAC_PI_2;

use crate::common::ReferencePath;

/// Vehicle motion state in road-relative coordinates at one instant.
///
/// Owned by the planning loop, replaced wholesale each cycle, never mutated
/// in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrenetState {
    /// Lateral offset from the reference line [m]
    pub l: f64,
    /// Lateral velocity [m/s]
    pub l_v: f64,
    /// Lateral acceleration [m/s^2]
    pub l_a: f64,
    /// Arc-length position along the reference line [m]
    pub s: f64,
    /// Longitudinal velocity [m/s]
    pub s_v: f64,
    /// Longitudinal acceleration [m/s^2]
    pub s_a: f64,
}

impl FrenetState {
    pub fn new(l: f64, l_v: f64, l_a: f64, s: f64, s_v: f64, s_a: f64) -> Self {
        Self { l, l_v, l_a, s, s_v, s_a }
    }
}

/// One candidate trajectory: time-indexed Frenet samples plus, after
/// conversion, world-frame pose samples and a scalar cost.
///
/// All longitudinal sequences share the time vector's length, and likewise
/// all lateral sequences. The pose sequence may be shorter when conversion
/// truncates at the reference path's extent. The default value is the empty
/// sentinel returned when selection fails.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub cost: f64,

    pub l: Vec<f64>,
    pub l_v: Vec<f64>,
    pub l_a: Vec<f64>,
    pub l_jerk: Vec<f64>,

    pub s: Vec<f64>,
    pub s_v: Vec<f64>,
    pub s_a: Vec<f64>,
    pub s_jerk: Vec<f64>,

    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub yaw: Vec<f64>,
    pub ds: Vec<f64>,
    pub curvature: Vec<f64>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A trajectory with no converted pose carries no plan
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// A committable candidate needs at least two converted poses
    pub fn has_valid_pose(&self) -> bool {
        self.x.len() >= 2
    }

    /// Map the Frenet samples to world frame via the reference path.
    ///
    /// Conversion stops at the first sample beyond the path's maximum arc
    /// length; later samples are dropped, never extrapolated.
    pub fn project_to_world<R: ReferencePath>(&mut self, ref_path: &R) {
        self.x.clear();
        self.y.clear();

        for i in 0..self.s.len() {
            if self.s[i] > ref_path.max_arc_length() {
                break;
            }

            let p = ref_path.position(self.s[i]);
            let yaw = ref_path.heading(self.s[i]);
            self.x.push(p.x + self.l[i] * (yaw + FRAC_PI_2).cos());
            self.y.push(p.y + self.l[i] * (yaw + FRAC_PI_2).sin());
        }
    }

    /// Recompute heading from consecutive point differences and curvature as
    /// the discrete heading derivative over the inter-sample distance. The
    /// final heading/distance values are duplicated to keep lengths
    /// consistent with the pose sequence.
    pub fn calc_yaw_curvature(&mut self) {
        self.yaw.clear();
        self.ds.clear();
        self.curvature.clear();

        for i in 0..self.x.len().saturating_sub(1) {
            let dx = self.x[i + 1] - self.x[i];
            let dy = self.y[i + 1] - self.y[i];
            self.ds.push(dx.hypot(dy));
            self.yaw.push(dy.atan2(dx));
        }

        if self.yaw.is_empty() {
            return;
        }
        self.yaw.push(self.yaw[self.yaw.len() - 1]);
        self.ds.push(self.ds[self.ds.len() - 1]);

        for i in 0..self.yaw.len() - 1 {
            if self.ds[i] > 0.0 {
                self.curvature.push((self.yaw[i + 1] - self.yaw[i]) / self.ds[i]);
            } else {
                self.curvature.push(0.0);
            }
        }
    }

    /// Frenet state read back from sample index i; the planning loop commits
    /// index 1, one step ahead of the current state.
    pub fn state_at_step(&self, i: usize) -> Option<FrenetState> {
        if i >= self.time.len() {
            return None;
        }
        Some(FrenetState {
            l: self.l[i],
            l_v: self.l_v[i],
            l_a: self.l_a[i],
            s: self.s[i],
            s_v: self.s_v[i],
            s_a: self.s_a[i],
        })
    }
}
