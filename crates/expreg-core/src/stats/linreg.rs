use serde::{Deserialize, Serialize};
use std::fmt;

/// Fitted line `y = intercept + slope * x`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinReg {
    pub intercept: f64,
    pub slope: f64,
}

impl fmt::Display for LinReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Predicted = {:.4} + X0*{:.4}", self.intercept, self.slope)
    }
}

impl Default for LinReg {
    fn default() -> Self {
        Self::new()
    }
}

impl LinReg {
    pub fn new() -> Self {
        Self { intercept: 0., slope: 0. }
    }
    pub fn calculate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
    pub fn from_val(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Regression report line, e.g. `Predicted = 1.0000 + X0*1.5000`.
    ///
    /// This is the shape [`parse_formula`](crate::parse_formula) reads back.
    pub fn formula(&self) -> String {
        self.to_string()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("x and y have different lengths: {len_x} vs {len_y}")]
    LengthMismatch { len_x: usize, len_y: usize },
    #[error("not enough points: got {len}, need at least {needed}")]
    NotEnoughPoints { len: usize, needed: usize },
    #[error("non-finite value in regression input")]
    NonFinite,
    #[error("degenerate x: no variance in x")]
    DegenerateX,
    #[error("normal equations are singular")]
    Singular,
}

/// Single-feature least-squares backend.
///
/// Fits `target = intercept + slope * feature` or reports why it could not.
pub trait LinearSolver {
    fn solve(&self, x: &[f64], y: &[f64]) -> Result<LinReg, SolverError>;
}

/// Ordinary least squares through the 2x2 normal equations.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrdinaryLeastSquares;

impl LinearSolver for OrdinaryLeastSquares {
    fn solve(&self, x: &[f64], y: &[f64]) -> Result<LinReg, SolverError> {
        if x.len() != y.len() {
            return Err(SolverError::LengthMismatch { len_x: x.len(), len_y: y.len() });
        }
        if x.len() < 2 {
            return Err(SolverError::NotEnoughPoints { len: x.len(), needed: 2 });
        }
        if x.iter().chain(y).any(|v| !v.is_finite()) {
            return Err(SolverError::NonFinite);
        }
        if x.iter().all(|&xi| xi == x[0]) {
            return Err(SolverError::DegenerateX);
        }

        let n = x.len() as f64;
        let avg_x = x.iter().sum::<f64>() / n;

        // centered x keeps the normal matrix well conditioned for large offsets
        let x_c: Vec<f64> = x.iter().map(|xi| xi - avg_x).collect();
        let sum_xc: f64 = x_c.iter().sum();
        let ss_xx: f64 = x_c.iter().map(|xi| xi * xi).sum();
        if ss_xx == 0.0 {
            return Err(SolverError::DegenerateX);
        }

        let sum_y: f64 = y.iter().sum();
        let sum_xy: f64 = x_c.iter().zip(y).map(|(xi, yi)| xi * yi).sum();

        let a = nalgebra::Matrix2::new(n, sum_xc, sum_xc, ss_xx);
        let b = nalgebra::Vector2::new(sum_y, sum_xy);
        let coeffs = a.lu().solve(&b).ok_or(SolverError::Singular)?;

        let slope = coeffs[1];
        let intercept = coeffs[0] - slope * avg_x;
        if !intercept.is_finite() || !slope.is_finite() {
            return Err(SolverError::Singular);
        }

        Ok(LinReg { intercept, slope })
    }
}

#[cfg(test)]
mod tests {
    use super::{LinReg, LinearSolver, OrdinaryLeastSquares, SolverError};

    #[test]
    fn test_ols_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0]; // y = 2x + 1

        let model = OrdinaryLeastSquares.solve(&x, &y).unwrap();
        assert!((model.slope - 2.0).abs() < 1e-9);
        assert!((model.intercept - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ols_large_offset() {
        let x: Vec<f64> = (0..10).map(|i| 1.0e6 + i as f64).collect();
        let y: Vec<f64> = x.iter().map(|xi| 0.5 * (xi - 1.0e6) - 3.0).collect();

        let model = OrdinaryLeastSquares.solve(&x, &y).unwrap();
        assert!((model.slope - 0.5).abs() < 1e-6);
        assert!((model.calculate(1.0e6) + 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_ols_noisy() {
        let x: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
        let y: Vec<f64> =
            x.iter().map(|xi| 4.0 - 0.3 * xi + rand::random::<f64>() * 0.02 - 0.01).collect();

        let model = OrdinaryLeastSquares.solve(&x, &y).unwrap();
        assert!((model.slope + 0.3).abs() < 0.01);
        assert!((model.intercept - 4.0).abs() < 0.05);
    }

    #[test]
    fn test_ols_not_enough_points() {
        assert_eq!(
            OrdinaryLeastSquares.solve(&[], &[]),
            Err(SolverError::NotEnoughPoints { len: 0, needed: 2 })
        );
        assert_eq!(
            OrdinaryLeastSquares.solve(&[1.0], &[2.0]),
            Err(SolverError::NotEnoughPoints { len: 1, needed: 2 })
        );
    }

    #[test]
    fn test_ols_degenerate_x() {
        let x = [2.0, 2.0, 2.0];
        let y = [1.0, 2.0, 3.0];
        assert_eq!(OrdinaryLeastSquares.solve(&x, &y), Err(SolverError::DegenerateX));
        assert_eq!(OrdinaryLeastSquares.solve(&[0.0, 0.0], &[1.0, 2.0]), Err(SolverError::DegenerateX));
    }

    #[test]
    fn test_ols_close_distinct_x() {
        // unix timestamps one second apart
        let x = [1.7e9, 1.7e9 + 1.0, 1.7e9 + 2.0];
        let y = [0.0, 2f64.ln(), 4f64.ln()];

        let model = OrdinaryLeastSquares.solve(&x, &y).unwrap();
        assert!((model.slope - 2f64.ln()).abs() < 1e-9);
        assert!((model.calculate(1.7e9 + 1.0) - 2f64.ln()).abs() < 1e-6);

        let model = OrdinaryLeastSquares.solve(&[1e8, 1e8 + 1.0], &[0.0, 1.0]).unwrap();
        assert!((model.slope - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ols_rejects_non_finite() {
        let x = [1.0, 2.0, 3.0];
        let y = [f64::NEG_INFINITY, 0.0, 1.0];
        assert_eq!(OrdinaryLeastSquares.solve(&x, &y), Err(SolverError::NonFinite));
    }

    #[test]
    fn test_ols_length_mismatch() {
        assert_eq!(
            OrdinaryLeastSquares.solve(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(SolverError::LengthMismatch { len_x: 3, len_y: 2 })
        );
    }

    #[test]
    fn test_formula_text() {
        assert_eq!(LinReg::from_val(1.0, 1.5).formula(), "Predicted = 1.0000 + X0*1.5000");
        assert_eq!(LinReg::from_val(-0.25, -2.0).formula(), "Predicted = -0.2500 + X0*-2.0000");
        assert_eq!(LinReg::from_val(1.0, 1.5).to_string(), LinReg::from_val(1.0, 1.5).formula());
    }
}
