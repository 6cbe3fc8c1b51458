//! The `MobilityStore` — one waypoint model and one RNG per node.

use rwp_core::{NodeId, NodeRng, Position, RwpError, SimTime};
use tracing::debug;

use crate::{
    MobilityResult, Update, WaypointConfig, WaypointMobilityModel, steady_state_position,
};

/// Holds the mobility model and private RNG of every node.
///
/// Both vectors are indexed by `NodeId` and always have the same length.
/// Nodes share nothing, so callers may update them in any order or split the
/// vectors across threads.
pub struct MobilityStore {
    /// Parameters every node was built with.
    pub config: WaypointConfig,

    /// Per-node model, indexed by `NodeId`.
    pub models: Vec<WaypointMobilityModel>,

    /// Per-node RNG, indexed by `NodeId`.
    pub rngs: Vec<NodeRng>,
}

impl MobilityStore {
    /// Validate `config` and create `node_count` unplaced nodes at the origin.
    pub fn new(config: WaypointConfig, node_count: usize, seed: u64) -> MobilityResult<Self> {
        config.validate()?;
        let models = vec![WaypointMobilityModel::new(Position::ORIGIN, config); node_count];
        let rngs = (0..node_count)
            .map(|i| NodeRng::new(seed, NodeId(i as u32)))
            .collect();
        Ok(Self { config, models, rngs })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    fn index(&self, node: NodeId) -> MobilityResult<usize> {
        if node.index() < self.models.len() {
            Ok(node.index())
        } else {
            Err(RwpError::NodeNotFound(node).into())
        }
    }

    /// Initialize `node` at `position` as of `now`.
    pub fn place(&mut self, node: NodeId, position: Position, now: SimTime) -> MobilityResult<()> {
        let i = self.index(node)?;
        self.models[i].initialize(position, now, &mut self.rngs[i]);
        Ok(())
    }

    /// Initialize every node at a point drawn from the stationary spatial
    /// distribution, using the node's own RNG.
    pub fn place_steady_state(&mut self, now: SimTime) {
        let scenario = self.config.scenario;
        for (model, rng) in self.models.iter_mut().zip(self.rngs.iter_mut()) {
            let start = steady_state_position(rng, scenario);
            model.initialize(start, now, rng);
        }
        debug!(nodes = self.models.len(), %scenario, "placed nodes at steady state");
    }

    /// Advance a single node to `now`.
    pub fn update(&mut self, node: NodeId, now: SimTime) -> MobilityResult<Update> {
        let i = self.index(node)?;
        Ok(self.models[i].update_location(now, &mut self.rngs[i]))
    }

    /// Advance every node to `now`.
    ///
    /// Returns the nodes that completed a leg during this call, with their
    /// `Update::Arrived` outcome.
    pub fn update_all(&mut self, now: SimTime) -> Vec<(NodeId, Update)> {
        self.models
            .iter_mut()
            .zip(self.rngs.iter_mut())
            .enumerate()
            .filter_map(|(i, (model, rng))| {
                let update = model.update_location(now, rng);
                update.arrived().then_some((NodeId(i as u32), update))
            })
            .collect()
    }

    /// Nodes currently outside the playground.
    pub fn off_map(&self) -> Vec<NodeId> {
        self.models
            .iter()
            .enumerate()
            .filter(|(_, m)| m.check_off_map())
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    pub fn position(&self, node: NodeId) -> MobilityResult<Position> {
        let i = self.index(node)?;
        Ok(self.models[i].position())
    }

    /// `(NodeId, Position)` for every node, in ID order.
    pub fn positions(&self) -> impl Iterator<Item = (NodeId, Position)> + '_ {
        self.models
            .iter()
            .enumerate()
            .map(|(i, m)| (NodeId(i as u32), m.position()))
    }

    pub fn model(&self, node: NodeId) -> MobilityResult<&WaypointMobilityModel> {
        let i = self.index(node)?;
        Ok(&self.models[i])
    }
}
