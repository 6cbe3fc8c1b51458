//! Distribution and playground parameters shared by every node of a run.

use rwp_core::Scenario;

use crate::{MobilityError, MobilityResult};

/// Fixed per-run parameters of the Random Waypoint process.
///
/// Speeds are in distance units per second, pauses in seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointConfig {
    /// Mean of the speed distribution.
    pub velocity_mean: f64,
    /// Standard deviation of the speed distribution.
    pub velocity_sd: f64,
    /// Mean of the pause-duration distribution.
    pub pause_mean: f64,
    /// Standard deviation of the pause-duration distribution.
    pub pause_sd: f64,
    /// The playground, origin at `(0, 0)`.
    pub scenario: Scenario,
}

impl WaypointConfig {
    /// Check the parameters before any node is built.
    ///
    /// `WaypointMobilityModel::new` accepts anything; hosts call this so a
    /// degenerate playground or a negative deviation fails loudly at startup
    /// instead of being silently truncated later.
    pub fn validate(&self) -> MobilityResult<()> {
        self.scenario.validate()?;

        let params = [
            ("velocity_mean", self.velocity_mean),
            ("velocity_sd",   self.velocity_sd),
            ("pause_mean",    self.pause_mean),
            ("pause_sd",      self.pause_sd),
        ];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(MobilityError::InvalidConfig(format!("{name} must be finite, got {value}")));
            }
        }
        if self.velocity_sd < 0.0 {
            return Err(MobilityError::InvalidConfig(format!(
                "velocity_sd must be non-negative, got {}",
                self.velocity_sd
            )));
        }
        if self.pause_sd < 0.0 {
            return Err(MobilityError::InvalidConfig(format!(
                "pause_sd must be non-negative, got {}",
                self.pause_sd
            )));
        }
        Ok(())
    }
}

impl Default for WaypointConfig {
    /// Pedestrian-like defaults on a 1000 × 1000 playground.
    fn default() -> Self {
        Self {
            velocity_mean: 1.5,
            velocity_sd:   0.5,
            pause_mean:    30.0,
            pause_sd:      10.0,
            scenario:      Scenario::new(1_000, 1_000),
        }
    }
}
