//! The `Sim` struct and its step loop.

use rwp_core::{NodeId, SimClock, SimConfig, SimTime};
use rwp_mobility::{MobilityStore, Update};
use tracing::{debug, info};

use crate::SimObserver;

/// The fixed-step simulation runner.
///
/// Each step advances the clock, updates every node, then reports arrivals,
/// off-map nodes and (periodically) a snapshot to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (step length, total steps, seed, …).
    pub config: SimConfig,

    /// Tracks the current step and maps it to `SimTime`.
    pub clock: SimClock,

    /// Every node's mobility model and RNG.
    pub mobility: MobilityStore,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step to `config.end_step()`.
    ///
    /// Emits the step-0 snapshot first when starting from the beginning.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        info!(
            nodes = self.mobility.len(),
            steps = self.config.total_steps,
            step_secs = self.config.step_secs,
            "simulation start"
        );
        if self.clock.current_step == 0 {
            observer.on_snapshot(self.clock.now(), &self.mobility);
        }

        let mut arrivals = 0usize;
        while self.clock.current_step < self.config.end_step() {
            arrivals += self.step(observer);
        }

        let now = self.clock.now();
        observer.on_sim_end(now);
        info!(%now, arrivals, "simulation end");
    }

    /// Run exactly `n` steps from the current position (ignores `end_step`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Advance one step and return the number of nodes that completed a leg.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        self.clock.advance();
        let step = self.clock.current_step;
        let now  = self.clock.now();
        observer.on_step_start(step, now);

        let arrived = update_nodes(&mut self.mobility, now);
        for &(node, update) in &arrived {
            if let Update::Arrived { waypoint, pause } = update {
                observer.on_arrival(node, now, waypoint, pause);
            }
        }

        let off_map = self.mobility.off_map();
        for &node in &off_map {
            let position = self.mobility.models[node.index()].position();
            observer.on_off_map(node, position);
        }

        observer.on_step_end(step, now, arrived.len());
        if step.is_multiple_of(self.config.output_interval_steps) {
            observer.on_snapshot(now, &self.mobility);
        }

        debug!(step, %now, arrivals = arrived.len(), off_map = off_map.len(), "step complete");
        arrived.len()
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }
}

// ── Update phase ──────────────────────────────────────────────────────────────

#[cfg(not(feature = "parallel"))]
fn update_nodes(mobility: &mut MobilityStore, now: SimTime) -> Vec<(NodeId, Update)> {
    mobility.update_all(now)
}

/// Nodes share no state, so each `(model, rng)` pair is updated on whichever
/// worker picks it up.  Collecting an indexed iterator keeps NodeId order.
#[cfg(feature = "parallel")]
fn update_nodes(mobility: &mut MobilityStore, now: SimTime) -> Vec<(NodeId, Update)> {
    use rayon::prelude::*;

    mobility
        .models
        .par_iter_mut()
        .zip(mobility.rngs.par_iter_mut())
        .enumerate()
        .filter_map(|(i, (model, rng))| {
            let update = model.update_location(now, rng);
            update.arrived().then_some((NodeId(i as u32), update))
        })
        .collect()
}
