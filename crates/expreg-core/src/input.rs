use crate::error::{ExpRegError, ExpRegResult};
use rustc_hash::FxHashSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub x: f64,
    pub y: f64,
}

/// Observations collected by a [`Session`](crate::Session), unique on x.
///
/// Only the owning session mutates it, so every write goes through the session's stage
/// checks.
#[derive(Clone, Debug, Default)]
pub struct Input {
    values: Vec<Observation>,
    covered: FxHashSet<u64>,
}

/// Hash key matching `==` on f64: both zeros share a key, NaN has none.
fn x_key(x: f64) -> Option<u64> {
    if x.is_nan() {
        None
    } else if x == 0.0 {
        Some(0f64.to_bits())
    } else {
        Some(x.to_bits())
    }
}

pub(crate) fn check_y(y: f64) -> ExpRegResult<()> {
    // also catches NaN
    if y >= 0.0 {
        Ok(())
    } else {
        Err(ExpRegError::NegativeValue(y))
    }
}

impl Input {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.values
    }

    pub fn xs(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.y).collect()
    }

    pub fn contains(&self, x: f64) -> bool {
        x_key(x).is_some_and(|key| self.covered.contains(&key))
    }

    /// Returns `Ok(false)` and leaves the input untouched when `x` is already present.
    pub(crate) fn push(&mut self, x: f64, y: f64) -> ExpRegResult<bool> {
        check_y(y)?;
        if let Some(key) = x_key(x) {
            if !self.covered.insert(key) {
                tracing::trace!(x, y, "skipping duplicate x");
                return Ok(false);
            }
        }
        self.values.push(Observation { x, y });
        Ok(true)
    }

    pub(crate) fn log_transform(&mut self) {
        for value in self.values.iter_mut() {
            value.y = value.y.ln();
        }
    }
}
