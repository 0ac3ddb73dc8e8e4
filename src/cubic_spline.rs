//! Arc-length parametrized cubic spline reference line
//!
//! A `CubicSpline2D` interpolates a sequence of waypoints with natural cubic
//! splines over cumulative arc length, and is the concrete reference curve
//! behind the [`ReferencePath`] contract.

use nalgebra::{DMatrix, DVector};

use crate::common::{PlanningError, PlanningResult, Point2D, ReferencePath};

/// Natural cubic spline over one coordinate
#[derive(Debug, Clone)]
struct Spline1D {
    x: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl Spline1D {
    fn new(x: &[f64], y: &[f64]) -> PlanningResult<Self> {
        if x.len() != y.len() {
            return Err(PlanningError::InvalidParameter(
                "spline knot and value lengths differ".to_string(),
            ));
        }
        if x.len() < 2 {
            return Err(PlanningError::InvalidParameter(
                "spline needs at least 2 knots".to_string(),
            ));
        }

        let nx = x.len();
        let h: Vec<f64> = (0..nx - 1).map(|i| x[i + 1] - x[i]).collect();
        if h.iter().any(|&hi| hi <= 0.0) {
            return Err(PlanningError::InvalidParameter(
                "spline knots must be strictly increasing".to_string(),
            ));
        }

        let a = y.to_vec();

        // Tridiagonal system for the c coefficients, natural boundary conditions
        let mut mat = DMatrix::<f64>::zeros(nx, nx);
        let mut rhs = DVector::<f64>::zeros(nx);
        mat[(0, 0)] = 1.0;
        mat[(nx - 1, nx - 1)] = 1.0;
        for i in 1..nx - 1 {
            mat[(i, i - 1)] = h[i - 1];
            mat[(i, i)] = 2.0 * (h[i - 1] + h[i]);
            mat[(i, i + 1)] = h[i];
            rhs[i] = 3.0 * ((a[i + 1] - a[i]) / h[i] - (a[i] - a[i - 1]) / h[i - 1]);
        }

        let c_vec = mat
            .lu()
            .solve(&rhs)
            .ok_or_else(|| PlanningError::NumericalError("spline system is singular".to_string()))?;
        let c: Vec<f64> = c_vec.iter().copied().collect();

        let mut b = Vec::with_capacity(nx - 1);
        let mut d = Vec::with_capacity(nx - 1);
        for i in 0..nx - 1 {
            d.push((c[i + 1] - c[i]) / (3.0 * h[i]));
            b.push((a[i + 1] - a[i]) / h[i] - h[i] * (c[i + 1] + 2.0 * c[i]) / 3.0);
        }

        Ok(Spline1D { x: x.to_vec(), a, b, c, d })
    }

    fn calc(&self, t: f64) -> f64 {
        let i = self.search_index(t);
        let dx = t - self.x[i];
        self.a[i] + self.b[i] * dx + self.c[i] * dx.powi(2) + self.d[i] * dx.powi(3)
    }

    fn calc_d(&self, t: f64) -> f64 {
        let i = self.search_index(t);
        let dx = t - self.x[i];
        self.b[i] + 2.0 * self.c[i] * dx + 3.0 * self.d[i] * dx.powi(2)
    }

    /// Index of the segment containing t, clamped to the defined segments
    fn search_index(&self, t: f64) -> usize {
        let mut lo = 0;
        let mut hi = self.x.len() - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.x[mid] <= t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

/// 2D cubic spline parametrized by cumulative arc length
#[derive(Debug, Clone)]
pub struct CubicSpline2D {
    /// Cumulative arc length at each waypoint
    pub s: Vec<f64>,
    sx: Spline1D,
    sy: Spline1D,
}

impl CubicSpline2D {
    pub fn new(x: &[f64], y: &[f64]) -> PlanningResult<Self> {
        if x.len() != y.len() {
            return Err(PlanningError::InvalidParameter(
                "waypoint x/y lengths differ".to_string(),
            ));
        }
        if x.len() < 2 {
            return Err(PlanningError::InvalidParameter(
                "need at least 2 waypoints".to_string(),
            ));
        }

        let mut s = Vec::with_capacity(x.len());
        s.push(0.0);
        for i in 1..x.len() {
            let ds = (x[i] - x[i - 1]).hypot(y[i] - y[i - 1]);
            s.push(s[i - 1] + ds);
        }

        let sx = Spline1D::new(&s, x)?;
        let sy = Spline1D::new(&s, y)?;

        Ok(CubicSpline2D { s, sx, sy })
    }

    pub fn calc_position(&self, s: f64) -> Point2D {
        Point2D::new(self.sx.calc(s), self.sy.calc(s))
    }

    pub fn calc_yaw(&self, s: f64) -> f64 {
        let dx = self.sx.calc_d(s);
        let dy = self.sy.calc_d(s);
        dy.atan2(dx)
    }

    pub fn max_s(&self) -> f64 {
        self.s[self.s.len() - 1]
    }
}

impl ReferencePath for CubicSpline2D {
    fn position(&self, s: f64) -> Point2D {
        self.calc_position(s)
    }

    fn heading(&self, s: f64) -> f64 {
        self.calc_yaw(s)
    }

    fn max_arc_length(&self) -> f64 {
        self.max_s()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spline_interpolates_waypoints() {
        let x = [0.0, 10.0, 20.5, 35.0];
        let y = [0.0, -6.0, 5.0, 6.5];
        let sp = CubicSpline2D::new(&x, &y).unwrap();

        for (i, &si) in sp.s.iter().enumerate() {
            let p = sp.calc_position(si);
            assert!((p.x - x[i]).abs() < 1e-9);
            assert!((p.y - y[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_straight_line_spline() {
        let x = [0.0, 25.0, 50.0, 100.0];
        let y = [0.0, 0.0, 0.0, 0.0];
        let sp = CubicSpline2D::new(&x, &y).unwrap();

        assert!((sp.max_s() - 100.0).abs() < 1e-9);
        for &s in &[0.0, 12.5, 40.0, 99.0] {
            let p = sp.calc_position(s);
            assert!((p.x - s).abs() < 1e-9);
            assert!(p.y.abs() < 1e-9);
            assert!(sp.calc_yaw(s).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invalid_waypoints() {
        assert!(CubicSpline2D::new(&[0.0], &[0.0]).is_err());
        assert!(CubicSpline2D::new(&[0.0, 1.0], &[0.0]).is_err());
        // duplicate waypoints collapse an arc-length segment
        assert!(CubicSpline2D::new(&[0.0, 0.0, 1.0], &[0.0, 0.0, 1.0]).is_err());
    }
}
