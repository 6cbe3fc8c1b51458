//! Deterministic per-node and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each node gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (node_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive node IDs uniformly across the seed space.
//! This means:
//!
//! - Nodes never share RNG state, so updating them in any order (or in
//!   parallel) yields the same trajectories.
//! - Adding nodes at the end of the list does not disturb the seeds of
//!   existing nodes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::NodeId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── NodeRng ───────────────────────────────────────────────────────────────────

/// Per-node deterministic RNG.
///
/// Create one per node at simulation init and store it alongside the node's
/// mobility model.
pub struct NodeRng(SmallRng);

impl NodeRng {
    /// Seed deterministically from the run's global seed and a node ID.
    pub fn new(global_seed: u64, node: NodeId) -> Self {
        let seed = global_seed ^ (node.0 as u64).wrapping_mul(MIXING_CONSTANT);
        NodeRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
