//! Steady-state initial placement (Navidi & Camp, 2003).
//!
//! Placing nodes uniformly makes the first part of a run unrepresentative:
//! Random Waypoint nodes spend more time near the centre of the playground
//! than near its edges.  The stationary position of a moving node is a
//! uniform point on a leg, where legs are chosen with probability
//! proportional to their length.  Rejection-sampling the leg endpoints
//! against the playground diagonal gives exactly that.
//!
//! The stationary distribution of the *paused* state is not modelled; every
//! node starts as if it were mid-leg.

use rwp_core::{Position, Scenario};

use crate::WaypointSampler;

/// Rejection rounds before giving up and returning a uniform point.
///
/// The acceptance rate is the mean leg length over the diagonal (about 0.37
/// for a square), so this bound is only reached with a broken sampler.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Draw a starting position from the stationary spatial distribution.
pub fn steady_state_position<S>(sampler: &mut S, scenario: Scenario) -> Position
where
    S: WaypointSampler + ?Sized,
{
    let w    = scenario.width_f64();
    let h    = scenario.height_f64();
    let diag = scenario.diagonal();

    let mut start = Position::ORIGIN;
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        start   = Position::new(sampler.uniform(0.0, w), sampler.uniform(0.0, h));
        let end = Position::new(sampler.uniform(0.0, w), sampler.uniform(0.0, h));

        if sampler.uniform(0.0, diag) < start.distance(end) {
            let t = sampler.uniform(0.0, 1.0);
            return scenario.clamp(start.lerp(end, t));
        }
    }
    scenario.clamp(start)
}
