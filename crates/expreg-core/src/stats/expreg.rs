use crate::error::ExpRegResult;
use crate::session::Session;
use crate::stats::linreg::LinReg;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpReg {
    /// a in y = a * b^x
    pub a: f64,
    /// b in y = a * b^x
    pub b: f64,
}

impl fmt::Display for ExpReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {:.4} * {:.4}^x", self.a, self.b)
    }
}

impl ExpReg {
    pub fn new() -> Self {
        Self { a: 1.0, b: 1.0 }
    }

    pub fn from_val(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Back-transform a fit of `ln y = intercept + slope * x`.
    ///
    /// No clamping: extreme coefficients overflow to infinity like any `exp`.
    pub fn from_linear(lin: &LinReg) -> Self {
        Self { a: lin.intercept.exp(), b: lin.slope.exp() }
    }

    /// Evaluate y = a * b^x
    pub fn calculate(&self, x: f64) -> f64 {
        self.a * self.b.powf(x)
    }
    /// dy/dx = a * b^x * ln(b)
    pub fn derivative(&self, x: f64) -> f64 {
        self.calculate(x) * self.b.ln()
    }

    /// Fit (x, y) pairs in one go with the default least-squares solver.
    pub fn train(x: &[f64], y: &[f64]) -> ExpRegResult<Self> {
        let mut session = Session::new();
        session.init(x.iter().copied().zip(y.iter().copied()))?;
        session.convert()?;
        session.run()?;
        session.result()
    }
}

impl Default for ExpReg {
    fn default() -> Self {
        Self::new()
    }
}
