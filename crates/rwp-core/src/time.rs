//! Simulation time model.
//!
//! # Design
//!
//! Mobility models see time as an opaque, monotonically non-decreasing
//! `SimTime` scalar in seconds.  They only ever compare two times or take
//! their difference, so nothing here is tied to a wall clock.
//!
//! Fixed-step hosts use `SimClock` to turn a step counter into a `SimTime`:
//!
//!   now = start + step * step_secs
//!
//! Deriving `now` from the integer step (instead of accumulating `step_secs`)
//! keeps long runs free of summation drift.

use std::fmt;

use crate::{RwpError, RwpResult};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulated timestamp, in seconds.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self`.  Negative when `earlier` is
    /// actually later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts a fixed-step counter into `SimTime`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Time of step 0.
    pub start: SimTime,
    /// Simulated seconds per step.
    pub step_secs: f64,
    /// The current step, advanced by `SimClock::advance()`.
    pub current_step: u64,
}

impl SimClock {
    pub fn new(start: SimTime, step_secs: f64) -> Self {
        Self {
            start,
            step_secs,
            current_step: 0,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_step += 1;
    }

    /// Simulated seconds since step 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_step as f64 * self.step_secs
    }

    /// The `SimTime` of the current step.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.start + self.elapsed_secs()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.current_step, self.now())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration for fixed-step hosts.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated time of step 0, in seconds.
    pub start_secs: f64,

    /// Seconds per step.  Must be positive and finite.
    pub step_secs: f64,

    /// Total steps to simulate.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Emit a snapshot every N steps.  1 = every step.
    pub output_interval_steps: u64,
}

impl SimConfig {
    /// The step at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> u64 {
        self.total_steps
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(SimTime(self.start_secs), self.step_secs)
    }

    pub fn validate(&self) -> RwpResult<()> {
        if !(self.step_secs.is_finite() && self.step_secs > 0.0) {
            return Err(RwpError::Config(format!(
                "step_secs must be positive and finite, got {}",
                self.step_secs
            )));
        }
        if !self.start_secs.is_finite() {
            return Err(RwpError::Config(format!(
                "start_secs must be finite, got {}",
                self.start_secs
            )));
        }
        if self.output_interval_steps == 0 {
            return Err(RwpError::Config("output_interval_steps must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_secs:            0.0,
            step_secs:             1.0,
            total_steps:           3_600,
            seed:                  0,
            num_threads:           None,
            output_interval_steps: 60,
        }
    }
}
