pub mod expreg;
pub mod linreg;

pub use expreg::ExpReg;
pub use linreg::{LinReg, LinearSolver, OrdinaryLeastSquares, SolverError};
