//! `rwp-core` — foundational types for the `rust_rwp` mobility framework.
//!
//! This crate is a dependency of every other `rwp-*` crate.  It intentionally
//! has no `rwp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`geo`]         | `Position`, `Scenario` (planar playground bounds)     |
//! | [`time`]        | `SimTime`, `SimClock`, `SimConfig`                    |
//! | [`rng`]         | `NodeRng` (per-node)                                  |
//! | [`error`]       | `RwpError`, `RwpResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RwpError, RwpResult};
pub use geo::{Position, Scenario};
pub use ids::NodeId;
pub use rng::NodeRng;
pub use time::{SimClock, SimConfig, SimTime};
