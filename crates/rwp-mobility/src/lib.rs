//! `rwp-mobility` — the Random Waypoint movement state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`config`]    | `WaypointConfig` — distribution and playground parameters         |
//! | [`sampler`]   | `WaypointSampler` — injected normal/uniform sampling capability   |
//! | [`state`]     | `Leg`, `MovementPhase`, `Update`                                  |
//! | [`model`]     | `WaypointMobilityModel` — one node's waypoint/pause cycle         |
//! | [`placement`] | Navidi–Camp steady-state initial placement                        |
//! | [`store`]     | `MobilityStore` — many independent nodes plus their RNGs          |
//! | [`error`]     | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model
//!
//! 1. The host places a node with `initialize`, ideally at a point drawn from
//!    [`steady_state_position`] so the run starts in the stationary regime.
//! 2. `initialize` samples the first [`Leg`]: a uniform waypoint, a speed from a
//!    normal distribution floored at [`MIN_VELOCITY`], and a pause from a
//!    normal distribution floored at zero.
//! 3. Each `update_location(now)` either leaves the node frozen (paused),
//!    interpolates it along the straight line to the waypoint, or snaps it
//!    onto the waypoint and samples the next leg.
//! 4. `check_off_map` reports drift outside the playground; correcting it is
//!    the host's job.
//!
//! All randomness comes through a [`WaypointSampler`] passed into each call,
//! so tests can script exact draws and runs are reproducible per seed.

pub mod config;
pub mod error;
pub mod model;
pub mod placement;
pub mod sampler;
pub mod state;
pub mod store;


pub use config::WaypointConfig;
pub use error::{MobilityError, MobilityResult};
pub use model::{MIN_VELOCITY, WaypointMobilityModel};
pub use placement::{MAX_PLACEMENT_ATTEMPTS, steady_state_position};
pub use sampler::WaypointSampler;
pub use state::{Leg, MovementPhase, Update};
pub use store::MobilityStore;
