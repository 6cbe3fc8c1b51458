//! Simulation observer trait for progress reporting and data collection.

use rwp_core::{NodeId, Position, SimTime};
use rwp_mobility::MobilityStore;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — off-map counter
///
/// ```rust,ignore
/// struct DriftCounter(usize);
///
/// impl SimObserver for DriftCounter {
///     fn on_off_map(&mut self, _node: NodeId, _position: Position) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each step, after the clock has advanced.
    fn on_step_start(&mut self, _step: u64, _now: SimTime) {}

    /// Called for every node that reached its waypoint during this step.
    ///
    /// `pause` is the freshly sampled pause before the node's next leg.
    fn on_arrival(&mut self, _node: NodeId, _now: SimTime, _waypoint: Position, _pause: f64) {}

    /// Called for every node found outside the playground after the update.
    /// The node is left where it is; correcting it is up to the observer's
    /// owner.
    fn on_off_map(&mut self, _node: NodeId, _position: Position) {}

    /// Called at the end of each step with the number of arrivals.
    fn on_step_end(&mut self, _step: u64, _now: SimTime, _arrivals: usize) {}

    /// Called at step 0 and then every `config.output_interval_steps` steps.
    ///
    /// Provides read-only access to every node so output writers can record
    /// positions without the sim knowing about any output format.
    fn on_snapshot(&mut self, _now: SimTime, _mobility: &MobilityStore) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _now: SimTime) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
