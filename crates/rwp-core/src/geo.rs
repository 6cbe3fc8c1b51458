//! Planar coordinate type and playground bounds.
//!
//! The mobility models work on a flat rectangle with its origin at `(0, 0)`.
//! Units are whatever the host chooses (metres by convention); the only
//! requirement is that speeds share the same distance unit.

use std::fmt;

use crate::{RwpError, RwpResult};

/// A mutable 2-D point.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point a fraction `t` of the way from `self` to `other`.  `t` is not
    /// clamped, so values outside `[0, 1]` extrapolate along the line.
    #[inline]
    pub fn lerp(self, other: Position, t: f64) -> Position {
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// The rectangular playground `[0, width] × [0, height]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub width:  u32,
    pub height: u32,
}

impl Scenario {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width_f64(self) -> f64 {
        self.width as f64
    }

    #[inline]
    pub fn height_f64(self) -> f64 {
        self.height as f64
    }

    /// Inclusive containment test.  NaN coordinates are never contained.
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        (0.0..=self.width_f64()).contains(&p.x) && (0.0..=self.height_f64()).contains(&p.y)
    }

    /// Nearest point inside the playground.
    #[inline]
    pub fn clamp(self, p: Position) -> Position {
        Position {
            x: p.x.clamp(0.0, self.width_f64()),
            y: p.y.clamp(0.0, self.height_f64()),
        }
    }

    /// Length of the diagonal, the longest possible leg.
    #[inline]
    pub fn diagonal(self) -> f64 {
        self.width_f64().hypot(self.height_f64())
    }

    /// Rejects degenerate (zero-area) playgrounds.
    pub fn validate(self) -> RwpResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RwpError::Config(format!(
                "scenario must have positive dimensions, got {self}"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
