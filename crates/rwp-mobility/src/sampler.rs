//! The randomness a mobility model consumes from its host.

use rand_distr::{Distribution, Normal};
use rwp_core::NodeRng;

/// Source of independent samples for the waypoint process.
///
/// Models never own a generator; the host passes one into every call.  Each
/// call must produce a fresh, independent draw.  Truncation (speed floor,
/// non-negative pause, playground bounds) is applied by the model, so an
/// implementation may return any real number.
pub trait WaypointSampler {
    /// One draw from a normal distribution with the given mean and standard
    /// deviation.
    fn normal(&mut self, mean: f64, sd: f64) -> f64;

    /// One draw uniformly distributed over `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl WaypointSampler for NodeRng {
    /// A degenerate distribution (negative or non-finite `sd`) yields `mean`.
    fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        match Normal::new(mean, sd) {
            Ok(dist) => dist.sample(self.inner()),
            Err(_) => mean,
        }
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if !(high > low) {
            return low;
        }
        self.gen_range(low..=high)
    }
}
