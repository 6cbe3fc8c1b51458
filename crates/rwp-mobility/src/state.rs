//! Per-leg movement state and update outcomes.

use rwp_core::Position;

/// The active leg: where the node is heading and how fast.
///
/// A leg is always replaced as a whole, so the waypoint coordinates are never
/// observed half-updated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Leg {
    /// Destination of this leg.
    pub waypoint: Position,

    /// Travel speed, never below [`crate::MIN_VELOCITY`].
    pub velocity: f64,
}

/// Whether a node is waiting out a pause or travelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MovementPhase {
    Paused,
    Moving,
}

impl MovementPhase {
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, MovementPhase::Moving)
    }
}

/// What a single `update_location` call did.
///
/// Purely informational: hosts may ignore it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Update {
    /// `now` was not after the previous update; nothing changed.
    Stale,

    /// The node is still pausing; only the update timestamp moved.
    Paused,

    /// The node moved toward its waypoint and has `remaining` distance left.
    EnRoute { remaining: f64 },

    /// The node reached `waypoint` and a new leg was sampled, starting after
    /// `pause` seconds.
    Arrived { waypoint: Position, pause: f64 },
}

impl Update {
    #[inline]
    pub fn arrived(&self) -> bool {
        matches!(self, Update::Arrived { .. })
    }
}
