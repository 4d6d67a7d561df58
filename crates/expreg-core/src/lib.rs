//! Exponential regression `y = a * b^x` by log-linearized ordinary least squares.

pub mod error;
pub mod formula;
pub mod input;
pub mod output;
pub mod session;
pub mod stats;

pub use error::{ExpRegError, ExpRegResult};
pub use formula::parse_formula;
pub use input::{Input, Observation};
pub use output::Output;
pub use session::{Session, Stage};
pub use stats::{ExpReg, LinReg, LinearSolver, OrdinaryLeastSquares, SolverError};
