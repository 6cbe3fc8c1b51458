//! `rwp-sim` — fixed-step host loop for the rust_rwp framework.
//!
//! Mobility models never decide when they run; something has to hand them
//! the current time.  This crate is the simplest such host: a fixed-step
//! clock that updates every node each step.
//!
//! # Step loop
//!
//! ```text
//! build:  validate configs, create MobilityStore, place nodes
//!         (explicit positions, or steady-state placement)
//! for step in 1..=config.total_steps:
//!   ① Advance   — clock.advance(); now = start + step * step_secs
//!   ② Update    — update_location(now) on every node
//!                 (parallel with the `parallel` feature)
//!   ③ Arrivals  — report nodes that finished a leg, in NodeId order
//!   ④ Off-map   — poll check_off_map and report offenders (never clamped)
//!   ⑤ Snapshot  — every output_interval_steps
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the update phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rwp_core::SimConfig;
//! use rwp_mobility::WaypointConfig;
//! use rwp_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), WaypointConfig::default())
//!     .node_count(100)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
