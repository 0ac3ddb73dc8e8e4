//! Common types used throughout lattice_planner

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

/// 2D pose (position + orientation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Static obstacle set represented as an ordered sequence of 2D points
#[derive(Debug, Clone, Default)]
pub struct Obstacles {
    pub points: Vec<Point2D>,
}

impl Obstacles {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        assert_eq!(x.len(), y.len());
        let points = x.iter().zip(y.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        Self { points }
    }

    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Car-like vehicle footprint constants, measured from the rear axle [m]
#[derive(Debug, Clone, Copy)]
pub struct VehicleGeometry {
    /// Distance from rear axle to vehicle front end
    pub front_overhang: f64,
    /// Distance from rear axle to vehicle back end
    pub rear_overhang: f64,
    /// Vehicle width
    pub width: f64,
    /// Distance between front and rear axles
    pub wheelbase: f64,
}

impl Default for VehicleGeometry {
    fn default() -> Self {
        Self {
            front_overhang: 6.75,
            rear_overhang: 1.5,
            width: 4.5,
            wheelbase: 5.25,
        }
    }
}

/// Normalize an angle to (-pi, pi]
pub fn normalize_angle(mut theta: f64) -> f64 {
    while theta > std::f64::consts::PI {
        theta -= 2.0 * std::f64::consts::PI;
    }
    while theta <= -std::f64::consts::PI {
        theta += 2.0 * std::f64::consts::PI;
    }
    theta
}
