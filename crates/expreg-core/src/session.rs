use crate::error::{ExpRegError, ExpRegResult};
use crate::input::{check_y, Input};
use crate::output::Output;
use crate::stats::{ExpReg, LinearSolver, OrdinaryLeastSquares};

/// Where a session is in `append/init -> convert -> run -> result`.
///
/// Stages only move forward. Whether the fit has been exponentiated is tracked by the
/// [`Output`] held in `Ran`.
#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
    Empty,
    Collecting,
    LogTransformed,
    Ran(Output),
}

/// One accumulate, fit, back-transform lifecycle for `y = a * b^x`.
///
/// A session is single use. Once `run` has been called, successfully or not, the only way
/// to fit again is a new session.
#[derive(Clone, Debug)]
pub struct Session<S = OrdinaryLeastSquares> {
    input: Input,
    stage: Stage,
    solver: S,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_solver(OrdinaryLeastSquares)
    }
}

impl<S: LinearSolver> Session<S> {
    pub fn with_solver(solver: S) -> Self {
        Self { input: Input::default(), stage: Stage::Empty, solver }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn output(&self) -> Option<&Output> {
        match &self.stage {
            Stage::Ran(output) => Some(output),
            _ => None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        !matches!(self.stage, Stage::Empty)
    }

    pub fn is_converted(&self) -> bool {
        matches!(self.stage, Stage::LogTransformed | Stage::Ran(_))
    }

    pub fn has_ran(&self) -> bool {
        matches!(self.stage, Stage::Ran(_))
    }

    /// Adds one observation.
    ///
    /// An `x` that is already present is silently ignored: the call succeeds and the first
    /// `y` recorded for that `x` is kept. Callers that need to know whether a point was
    /// dropped should check [`Input::contains`] first.
    pub fn append(&mut self, x: f64, y: f64) -> ExpRegResult<()> {
        if self.is_converted() {
            return Err(ExpRegError::AlreadyConverted);
        }
        self.input.push(x, y)?;
        self.stage = Stage::Collecting;
        Ok(())
    }

    /// Bulk-loads observations into an empty session.
    ///
    /// Every `y` is checked before anything is stored, so a rejected batch leaves the
    /// session untouched. Duplicate x inside the batch keep the first occurrence.
    pub fn init<I>(&mut self, points: I) -> ExpRegResult<()>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        if self.is_initialized() {
            return Err(ExpRegError::AlreadyInitialized);
        }
        let points: Vec<(f64, f64)> = points.into_iter().collect();
        for &(_, y) in &points {
            check_y(y)?;
        }

        let mut added = 0;
        for (x, y) in points.iter().copied() {
            if self.input.push(x, y)? {
                added += 1;
            }
        }
        self.stage = Stage::Collecting;
        tracing::debug!(added, skipped = points.len() - added, "session initialized");
        Ok(())
    }

    /// Replaces every `y` by `ln y`. Irreversible.
    pub fn convert(&mut self) -> ExpRegResult<()> {
        if self.input.len() < 2 {
            return Err(ExpRegError::NotEnoughData { len: self.input.len(), needed: 2 });
        }
        if self.is_converted() {
            return Err(ExpRegError::AlreadyConverted);
        }
        self.input.log_transform();
        self.stage = Stage::LogTransformed;
        tracing::debug!(points = self.input.len(), "log-transformed input");
        Ok(())
    }

    /// Fits `ln y = intercept + slope * x` with the session's solver.
    ///
    /// A solver failure is stored in the session and still counts as the one allowed run.
    pub fn run(&mut self) -> ExpRegResult<()> {
        match self.stage {
            Stage::Empty | Stage::Collecting => return Err(ExpRegError::NotConverted),
            Stage::Ran(_) => return Err(ExpRegError::AlreadyRan),
            Stage::LogTransformed => {},
        }

        match self.solver.solve(&self.input.xs(), &self.input.ys()) {
            Ok(lin) => {
                tracing::debug!(intercept = lin.intercept, slope = lin.slope, "linear fit done");
                self.stage = Stage::Ran(Output::Linear(lin));
                Ok(())
            },
            Err(err) => {
                tracing::warn!(error = %err, "linear fit failed");
                self.stage = Stage::Ran(Output::Failed(err.clone()));
                Err(ExpRegError::LinearRegression(err))
            },
        }
    }

    /// Exponentiates the stored fit and returns `(a, b)`. Works once per session.
    pub fn result(&mut self) -> ExpRegResult<ExpReg> {
        match &mut self.stage {
            Stage::Ran(output) => output.exponentiate(),
            _ => Err(ExpRegError::NotRan),
        }
    }
}
