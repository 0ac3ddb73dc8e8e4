//! Minimum-jerk polynomial motion profiles
//!
//! Coefficients are solved once from the boundary conditions via a small
//! linear system and reused for every evaluation of the instance. The
//! quintic fixes position, velocity, and acceleration at both ends; the
//! quartic leaves the end position free and is used for cruise-mode speed
//! tracking.

use nalgebra::{Matrix2, Matrix3, Vector2, Vector3};

/// Quintic polynomial profile with fully fixed boundary conditions
#[derive(Debug, Clone)]
pub struct QuinticPolynomial {
    a0: f64,
    a1: f64,
    a2: f64,
    a3: f64,
    a4: f64,
    a5: f64,
}

impl QuinticPolynomial {
    pub fn new(xs: f64, vxs: f64, axs: f64, xe: f64, vxe: f64, axe: f64, time: f64) -> Self {
        let a0 = xs;
        let a1 = vxs;
        let a2 = axs / 2.0;

        let t2 = time * time;
        let t3 = t2 * time;
        let t4 = t3 * time;
        let t5 = t4 * time;

        // Solve for a3, a4, a5
        let a = Matrix3::new(
            t3, t4, t5,
            3.0 * t2, 4.0 * t3, 5.0 * t4,
            6.0 * time, 12.0 * t2, 20.0 * t3,
        );

        let b = Vector3::new(
            xe - a0 - a1 * time - a2 * t2,
            vxe - a1 - 2.0 * a2 * time,
            axe - 2.0 * a2,
        );

        // A zero-duration profile leaves the system singular; the degenerate
        // candidate is dropped later by the converter's invalidity rule.
        let x = a.try_inverse().map(|inv| inv * b).unwrap_or(Vector3::zeros());

        QuinticPolynomial {
            a0,
            a1,
            a2,
            a3: x[0],
            a4: x[1],
            a5: x[2],
        }
    }

    pub fn calc_point(&self, t: f64) -> f64 {
        self.a0 + self.a1 * t + self.a2 * t.powi(2)
            + self.a3 * t.powi(3) + self.a4 * t.powi(4) + self.a5 * t.powi(5)
    }

    pub fn calc_first_derivative(&self, t: f64) -> f64 {
        self.a1 + 2.0 * self.a2 * t
            + 3.0 * self.a3 * t.powi(2) + 4.0 * self.a4 * t.powi(3) + 5.0 * self.a5 * t.powi(4)
    }

    pub fn calc_second_derivative(&self, t: f64) -> f64 {
        2.0 * self.a2 + 6.0 * self.a3 * t + 12.0 * self.a4 * t.powi(2) + 20.0 * self.a5 * t.powi(3)
    }

    pub fn calc_third_derivative(&self, t: f64) -> f64 {
        6.0 * self.a3 + 24.0 * self.a4 * t + 60.0 * self.a5 * t.powi(2)
    }
}

/// Quartic polynomial profile for velocity keeping, end position free
#[derive(Debug, Clone)]
pub struct QuarticPolynomial {
    a0: f64,
    a1: f64,
    a2: f64,
    a3: f64,
    a4: f64,
}

impl QuarticPolynomial {
    pub fn new(xs: f64, vxs: f64, axs: f64, vxe: f64, axe: f64, time: f64) -> Self {
        let a0 = xs;
        let a1 = vxs;
        let a2 = axs / 2.0;

        let t2 = time * time;
        let t3 = t2 * time;

        // Solve for a3, a4
        let a = Matrix2::new(
            3.0 * t2, 4.0 * t3,
            6.0 * time, 12.0 * t2,
        );

        let b = Vector2::new(
            vxe - a1 - 2.0 * a2 * time,
            axe - 2.0 * a2,
        );

        let x = a.try_inverse().map(|inv| inv * b).unwrap_or(Vector2::zeros());

        QuarticPolynomial {
            a0,
            a1,
            a2,
            a3: x[0],
            a4: x[1],
        }
    }

    pub fn calc_point(&self, t: f64) -> f64 {
        self.a0 + self.a1 * t + self.a2 * t.powi(2) + self.a3 * t.powi(3) + self.a4 * t.powi(4)
    }

    pub fn calc_first_derivative(&self, t: f64) -> f64 {
        self.a1 + 2.0 * self.a2 * t + 3.0 * self.a3 * t.powi(2) + 4.0 * self.a4 * t.powi(3)
    }

    pub fn calc_second_derivative(&self, t: f64) -> f64 {
        2.0 * self.a2 + 6.0 * self.a3 * t + 12.0 * self.a4 * t.powi(2)
    }

    pub fn calc_third_derivative(&self, t: f64) -> f64 {
        6.0 * self.a3 + 24.0 * self.a4 * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_quintic_boundary_conditions() {
        let (xs, vxs, axs) = (1.0, 2.0, 0.5);
        let (xe, vxe, axe) = (10.0, 1.0, -0.3);
        let time = 4.2;
        let qp = QuinticPolynomial::new(xs, vxs, axs, xe, vxe, axe, time);

        assert!((qp.calc_point(0.0) - xs).abs() < TOL);
        assert!((qp.calc_first_derivative(0.0) - vxs).abs() < TOL);
        assert!((qp.calc_second_derivative(0.0) - axs).abs() < TOL);
        assert!((qp.calc_point(time) - xe).abs() < TOL);
        assert!((qp.calc_first_derivative(time) - vxe).abs() < TOL);
        assert!((qp.calc_second_derivative(time) - axe).abs() < TOL);
    }

    #[test]
    fn test_quartic_boundary_conditions() {
        let (xs, vxs, axs) = (0.0, 8.3, 0.0);
        let (vxe, axe) = (11.1, 0.0);
        let time = 5.1;
        let qp = QuarticPolynomial::new(xs, vxs, axs, vxe, axe, time);

        assert!((qp.calc_point(0.0) - xs).abs() < TOL);
        assert!((qp.calc_first_derivative(0.0) - vxs).abs() < TOL);
        assert!((qp.calc_second_derivative(0.0) - axs).abs() < TOL);
        // end position is unconstrained and deliberately unchecked
        assert!((qp.calc_first_derivative(time) - vxe).abs() < TOL);
        assert!((qp.calc_second_derivative(time) - axe).abs() < TOL);
    }

    #[test]
    fn test_zero_duration_profile_does_not_panic() {
        let qp = QuinticPolynomial::new(0.0, 1.0, 0.0, 5.0, 0.0, 0.0, 0.0);
        assert!((qp.calc_point(0.0) - 0.0).abs() < TOL);
        assert!((qp.calc_first_derivative(0.0) - 1.0).abs() < TOL);
    }

    #[test]
    fn test_third_derivative_consistency() {
        // jerk of the quintic is the analytic derivative of the acceleration
        let qp = QuinticPolynomial::new(0.0, 0.0, 0.0, 6.0, 0.0, 0.0, 3.0);
        let dt = 1e-6;
        let t = 1.3;
        let numeric =
            (qp.calc_second_derivative(t + dt) - qp.calc_second_derivative(t - dt)) / (2.0 * dt);
        assert!((qp.calc_third_derivative(t) - numeric).abs() < 1e-4);
    }
}
