use crate::error::{ExpRegError, ExpRegResult};
use crate::stats::{ExpReg, LinReg, SolverError};

/// Outcome of a linear fit on log-transformed data.
///
/// Starts as `Linear` (or `Failed`) and can be exponentiated exactly once.
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    Linear(LinReg),
    Exponential(ExpReg),
    Failed(SolverError),
}

impl From<LinReg> for Output {
    fn from(lin: LinReg) -> Self {
        Output::Linear(lin)
    }
}

impl Output {
    /// Turns `(intercept, slope)` into `(a, b) = (e^intercept, e^slope)`.
    ///
    /// A second call fails with [`ExpRegError::AlreadyConverted`] and leaves the stored
    /// coefficients as they are.
    pub fn exponentiate(&mut self) -> ExpRegResult<ExpReg> {
        match self {
            Output::Exponential(_) => Err(ExpRegError::AlreadyConverted),
            Output::Failed(err) => Err(ExpRegError::LinearRegression(err.clone())),
            Output::Linear(lin) => {
                let model = ExpReg::from_linear(lin);
                *self = Output::Exponential(model);
                Ok(model)
            },
        }
    }

    pub fn linear(&self) -> Option<LinReg> {
        match self {
            Output::Linear(lin) => Some(*lin),
            _ => None,
        }
    }

    pub fn exponential(&self) -> Option<ExpReg> {
        match self {
            Output::Exponential(model) => Some(*model),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SolverError> {
        match self {
            Output::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_exponentiated(&self) -> bool {
        matches!(self, Output::Exponential(_))
    }
}
