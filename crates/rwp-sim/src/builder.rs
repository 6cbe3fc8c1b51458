//! Fluent builder for constructing a [`Sim`].

use rwp_core::{NodeId, Position, SimConfig};
use rwp_mobility::{MobilityStore, WaypointConfig};
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total steps, seed, step length, …
/// - [`WaypointConfig`] — speed/pause distributions and the playground
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                               |
/// |--------------------------|---------------------------------------|
/// | `.node_count(n)`         | 1                                     |
/// | `.initial_positions(v)`  | Steady-state (Navidi–Camp) placement  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, waypoint)
///     .node_count(50)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    waypoint:   WaypointConfig,
    node_count: usize,
    positions:  Option<Vec<Position>>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, waypoint: WaypointConfig) -> Self {
        Self {
            config,
            waypoint,
            node_count: 1,
            positions:  None,
        }
    }

    /// Number of independent nodes to simulate.
    pub fn node_count(mut self, n: usize) -> Self {
        self.node_count = n;
        self
    }

    /// Supply the starting position of each node (must be length
    /// `node_count`).
    ///
    /// Positions are committed as given.  If not called, every node starts
    /// at a point drawn from the stationary spatial distribution.
    pub fn initial_positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, place every node, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        if self.node_count == 0 {
            return Err(SimError::Config("node_count must be at least 1".into()));
        }
        if u32::try_from(self.node_count).is_err() {
            return Err(SimError::Config(format!(
                "node_count {} exceeds the NodeId range",
                self.node_count
            )));
        }

        let clock = self.config.make_clock();
        let now   = clock.now();
        let mut mobility = MobilityStore::new(self.waypoint, self.node_count, self.config.seed)?;

        // ── Place nodes ───────────────────────────────────────────────────
        match self.positions {
            Some(positions) => {
                if positions.len() != self.node_count {
                    return Err(SimError::NodeCountMismatch {
                        expected: self.node_count,
                        got:      positions.len(),
                    });
                }
                for (i, position) in positions.into_iter().enumerate() {
                    mobility.place(NodeId(i as u32), position, now)?;
                }
            }
            None => mobility.place_steady_state(now),
        }

        info!(
            nodes = self.node_count,
            scenario = %self.waypoint.scenario,
            seed = self.config.seed,
            "simulation built"
        );

        Ok(Sim {
            config: self.config,
            clock,
            mobility,
        })
    }
}
