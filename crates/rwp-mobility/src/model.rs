//! One node's Random Waypoint state machine.

use rwp_core::{Position, SimTime};
use tracing::trace;

use crate::{Leg, MovementPhase, Update, WaypointConfig, WaypointSampler};

/// Speed floor applied to every sampled velocity.
///
/// Without it a normal draw near zero leaves the node effectively stuck for
/// the rest of the run (the "zero speed problem").
pub const MIN_VELOCITY: f64 = 0.5;

/// Kinematic state of a single node moving under the Random Waypoint pattern.
///
/// # Sampling order
///
/// Every leg completion draws, in order: the pause (`normal`), the waypoint
/// x and y (`uniform`), then the velocity (`normal`).  Scripted samplers in
/// tests rely on this order.
#[derive(Clone, Debug)]
pub struct WaypointMobilityModel {
    position:       Position,
    config:         WaypointConfig,
    leg:            Leg,
    /// End of the current pause while paused; tracks `last_update` while
    /// moving, so it never falls behind it.
    next_move_time: SimTime,
    last_update:    SimTime,
}

impl WaypointMobilityModel {
    /// Store the parameters without sampling anything.
    ///
    /// The node sits at `position` with a zero-length leg until
    /// [`initialize`](Self::initialize) is called.
    pub fn new(position: Position, config: WaypointConfig) -> Self {
        Self {
            position,
            config,
            leg: Leg {
                waypoint: position,
                velocity: MIN_VELOCITY,
            },
            next_move_time: SimTime::ZERO,
            last_update:    SimTime::ZERO,
        }
    }

    /// Place the node at `position` and sample its first leg as of `now`.
    ///
    /// `position` should come from the stationary spatial distribution (see
    /// [`crate::steady_state_position`]); it is committed as given.
    pub fn initialize<S>(&mut self, position: Position, now: SimTime, sampler: &mut S)
    where
        S: WaypointSampler + ?Sized,
    {
        self.position = position;
        self.last_update = now;
        let (leg, pause) = self.sample_leg(sampler);
        self.leg = leg;
        self.next_move_time = now + pause;
    }

    /// Advance the node to `now`.
    ///
    /// Calls with `now` not after the previous update are ignored.  While
    /// paused only the update timestamp moves.  Otherwise the node travels
    /// `velocity * elapsed` along the straight line to its waypoint; if that
    /// reaches or passes the waypoint the node is snapped onto it, the excess
    /// distance is dropped, and the next leg is sampled.
    pub fn update_location<S>(&mut self, now: SimTime, sampler: &mut S) -> Update
    where
        S: WaypointSampler + ?Sized,
    {
        let elapsed = now - self.last_update;
        if !(elapsed > 0.0) {
            return Update::Stale;
        }

        if now < self.next_move_time {
            self.last_update = now;
            return Update::Paused;
        }

        let target   = self.leg.waypoint;
        let dx       = target.x - self.position.x;
        let dy       = target.y - self.position.y;
        let distance = dx.hypot(dy);
        let travel   = self.leg.velocity * elapsed;
        self.last_update = now;
        self.next_move_time = now;

        if travel < distance {
            self.position.x += dx / distance * travel;
            self.position.y += dy / distance * travel;
            return Update::EnRoute { remaining: distance - travel };
        }

        self.position = target;
        let (leg, pause) = self.sample_leg(sampler);
        self.leg = leg;
        self.next_move_time = now + pause;
        trace!(
            %now,
            reached = %target,
            next = %leg.waypoint,
            velocity = leg.velocity,
            pause,
            "waypoint reached"
        );
        Update::Arrived { waypoint: target, pause }
    }

    /// `true` when the node has drifted outside the playground.  Never
    /// corrects the position.
    #[inline]
    pub fn check_off_map(&self) -> bool {
        !self.config.scenario.contains(self.position)
    }

    /// Draw the pause before the next leg and the leg itself.
    fn sample_leg<S>(&self, sampler: &mut S) -> (Leg, f64)
    where
        S: WaypointSampler + ?Sized,
    {
        let cfg = &self.config;

        let pause = sampler.normal(cfg.pause_mean, cfg.pause_sd).max(0.0);

        let scenario = cfg.scenario;
        let waypoint = scenario.clamp(Position::new(
            sampler.uniform(0.0, scenario.width_f64()),
            sampler.uniform(0.0, scenario.height_f64()),
        ));

        // `max` also maps a NaN draw to the floor.
        let velocity = sampler.normal(cfg.velocity_mean, cfg.velocity_sd).max(MIN_VELOCITY);

        (Leg { waypoint, velocity }, pause)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Overwrite the position, e.g. to clamp a node reported by
    /// [`check_off_map`](Self::check_off_map).  The active leg is kept.
    #[inline]
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[inline]
    pub fn leg(&self) -> Leg {
        self.leg
    }

    #[inline]
    pub fn waypoint(&self) -> Position {
        self.leg.waypoint
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.leg.velocity
    }

    /// End of the current pause.  The node is frozen while
    /// `now < next_move_time`.
    #[inline]
    pub fn next_move_time(&self) -> SimTime {
        self.next_move_time
    }

    #[inline]
    pub fn last_update(&self) -> SimTime {
        self.last_update
    }

    #[inline]
    pub fn config(&self) -> &WaypointConfig {
        &self.config
    }

    /// Phase the node is in at `now`.
    #[inline]
    pub fn phase(&self, now: SimTime) -> MovementPhase {
        if now < self.next_move_time {
            MovementPhase::Paused
        } else {
            MovementPhase::Moving
        }
    }
}
