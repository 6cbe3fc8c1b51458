//! Integration tests for rwp-sim.

use rwp_core::{NodeId, Position, Scenario, SimConfig, SimTime};
use rwp_mobility::{MobilityStore, WaypointConfig};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_steps: u64) -> SimConfig {
    SimConfig {
        start_secs:            0.0,
        step_secs:             1.0,
        total_steps,
        seed:                  42,
        num_threads:           Some(1),
        output_interval_steps: total_steps.max(1),
    }
}

/// Speed 1.0, no pause, small playground so legs finish quickly.
fn small_waypoint() -> WaypointConfig {
    WaypointConfig {
        velocity_mean: 1.0,
        velocity_sd:   0.0,
        pause_mean:    0.0,
        pause_sd:      0.0,
        scenario:      Scenario::new(20, 20),
    }
}

#[derive(Default)]
struct Recorder {
    step_starts: Vec<u64>,
    step_ends:   Vec<(u64, usize)>,
    arrivals:    Vec<(NodeId, SimTime, Position, f64)>,
    off_map:     Vec<(NodeId, Position)>,
    snapshots:   Vec<(SimTime, Vec<Position>)>,
    ended:       Option<SimTime>,
}

impl SimObserver for Recorder {
    fn on_step_start(&mut self, step: u64, _now: SimTime) {
        self.step_starts.push(step);
    }

    fn on_arrival(&mut self, node: NodeId, now: SimTime, waypoint: Position, pause: f64) {
        self.arrivals.push((node, now, waypoint, pause));
    }

    fn on_off_map(&mut self, node: NodeId, position: Position) {
        self.off_map.push((node, position));
    }

    fn on_step_end(&mut self, step: u64, _now: SimTime, arrivals: usize) {
        self.step_ends.push((step, arrivals));
    }

    fn on_snapshot(&mut self, now: SimTime, mobility: &MobilityStore) {
        self.snapshots.push((now, mobility.positions().map(|(_, p)| p).collect()));
    }

    fn on_sim_end(&mut self, now: SimTime) {
        self.ended = Some(now);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let sim = SimBuilder::new(test_config(10), WaypointConfig::default())
            .build()
            .unwrap();
        assert_eq!(sim.mobility.len(), 1);
        assert!(sim.mobility.off_map().is_empty());
        assert_eq!(sim.now(), SimTime(0.0));
    }

    #[test]
    fn zero_nodes_errors() {
        let result = SimBuilder::new(test_config(10), small_waypoint()).node_count(0).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn invalid_sim_config_errors() {
        let config = SimConfig { step_secs: -1.0, ..test_config(10) };
        let result = SimBuilder::new(config, small_waypoint()).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn invalid_waypoint_config_errors() {
        let waypoint = WaypointConfig { scenario: Scenario::new(0, 20), ..small_waypoint() };
        let result = SimBuilder::new(test_config(10), waypoint).build();
        assert!(matches!(result, Err(SimError::Mobility(_))));
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = SimBuilder::new(test_config(10), small_waypoint())
            .node_count(3)
            .initial_positions(vec![Position::new(1.0, 1.0); 2])
            .build();
        assert!(matches!(
            result,
            Err(SimError::NodeCountMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn initial_positions_are_committed() {
        let positions = vec![Position::new(1.0, 2.0), Position::new(15.0, 5.0)];
        let sim = SimBuilder::new(test_config(10), small_waypoint())
            .node_count(2)
            .initial_positions(positions.clone())
            .build()
            .unwrap();
        let placed: Vec<Position> = sim.mobility.positions().map(|(_, p)| p).collect();
        assert_eq!(placed, positions);
    }

    #[test]
    fn steady_state_placement_by_default() {
        let sim = SimBuilder::new(test_config(10), small_waypoint())
            .node_count(25)
            .build()
            .unwrap();
        assert_eq!(sim.mobility.len(), 25);
        assert!(sim.mobility.off_map().is_empty());
    }
}

// ── Step loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_invokes_hooks_per_step() {
        let config = SimConfig { output_interval_steps: 5, ..test_config(10) };
        let mut sim = SimBuilder::new(config, small_waypoint()).node_count(3).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(rec.step_starts, (1..=10).collect::<Vec<_>>());
        assert_eq!(rec.step_ends.len(), 10);
        // Step 0, 5 and 10.
        let snap_times: Vec<SimTime> = rec.snapshots.iter().map(|(t, _)| *t).collect();
        assert_eq!(snap_times, vec![SimTime(0.0), SimTime(5.0), SimTime(10.0)]);
        assert_eq!(rec.snapshots[0].1.len(), 3);
        assert_eq!(rec.ended, Some(SimTime(10.0)));
        assert_eq!(sim.now(), SimTime(10.0));
    }

    #[test]
    fn run_respects_start_and_step_length() {
        let config = SimConfig { start_secs: 100.0, step_secs: 0.5, ..test_config(4) };
        let mut sim = SimBuilder::new(config, small_waypoint()).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert_eq!(rec.ended, Some(SimTime(102.0)));
    }

    #[test]
    fn arrivals_are_reported_in_bounds() {
        let mut sim = SimBuilder::new(test_config(300), small_waypoint())
            .node_count(5)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert!(!rec.arrivals.is_empty());
        let scenario = small_waypoint().scenario;
        for &(node, _, waypoint, pause) in &rec.arrivals {
            assert!(node.index() < 5);
            assert!(scenario.contains(waypoint));
            assert_eq!(pause, 0.0);
        }
        let counted: usize = rec.step_ends.iter().map(|&(_, n)| n).sum();
        assert_eq!(counted, rec.arrivals.len());
    }

    #[test]
    fn off_map_nodes_are_reported_not_clamped() {
        let waypoint = WaypointConfig { pause_mean: 1_000.0, ..small_waypoint() };
        let mut sim = SimBuilder::new(test_config(10), waypoint)
            .node_count(2)
            .initial_positions(vec![Position::new(5.0, 5.0), Position::new(10.0, 10.0)])
            .build()
            .unwrap();
        sim.mobility.models[1].set_position(Position::new(150.0, 10.0));

        let mut rec = Recorder::default();
        sim.run_steps(3, &mut rec);

        assert_eq!(rec.off_map.len(), 3);
        for &(node, position) in &rec.off_map {
            assert_eq!(node, NodeId(1));
            assert_eq!(position, Position::new(150.0, 10.0));
        }
        // Paused node 0 never moved.
        assert_eq!(sim.mobility.position(NodeId(0)).unwrap(), Position::new(5.0, 5.0));
    }

    #[test]
    fn same_seed_is_reproducible() {
        let run = || {
            let mut sim = SimBuilder::new(test_config(120), WaypointConfig::default())
                .node_count(10)
                .build()
                .unwrap();
            sim.run(&mut NoopObserver);
            sim.mobility.positions().map(|(_, p)| p).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn run_steps_ignores_end_step() {
        let mut sim = SimBuilder::new(test_config(2), small_waypoint()).build().unwrap();
        sim.run_steps(5, &mut NoopObserver);
        assert_eq!(sim.clock.current_step, 5);
    }
}
