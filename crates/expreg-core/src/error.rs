use crate::stats::SolverError;

/// Every way a regression session or the formula parser can refuse a call.
///
/// Callers are expected to branch on the variant. A failed fit is terminal for its
/// session: the only way forward is a new [`Session`](crate::Session).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ExpRegError {
    #[error("data has been initialized already")]
    AlreadyInitialized,
    #[error("data has been converted already")]
    AlreadyConverted,
    #[error("sample size is too small: got {len}, need at least {needed}")]
    NotEnoughData { len: usize, needed: usize },
    #[error("negative value {0}: no exponential regression possible")]
    NegativeValue(f64),
    #[error("data has not been log-transformed yet")]
    NotConverted,
    #[error("regression was run already")]
    AlreadyRan,
    #[error("linear regression failed: {0}")]
    LinearRegression(SolverError),
    #[error("regression has not been run yet")]
    NotRan,
    #[error("invalid formula: {0:?}")]
    InvalidFormula(String),
}

pub type ExpRegResult<T> = Result<T, ExpRegError>;
