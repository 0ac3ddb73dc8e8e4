//! Error types for lattice_planner

use std::fmt;

/// Main error type for planner construction and geometry building.
///
/// Planner-level failures (no feasible candidate in a cycle) are not errors;
/// they surface as an empty trajectory from selection.
#[derive(Debug)]
pub enum PlanningError {
    /// Invalid parameter
    InvalidParameter(String),
    /// Numerical computation failed (matrix inversion, etc.)
    NumericalError(String),
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PlanningError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for PlanningError {}

/// Result type alias for planner operations
pub type PlanningResult<T> = Result<T, PlanningError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanningError::InvalidParameter("need at least 2 waypoints".to_string());
        assert_eq!(format!("{}", err), "Invalid parameter: need at least 2 waypoints");
        let err = PlanningError::NumericalError("singular spline system".to_string());
        assert_eq!(format!("{}", err), "Numerical error: singular spline system");
    }
}
