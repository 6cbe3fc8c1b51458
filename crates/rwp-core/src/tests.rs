//! Unit tests for rwp-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert_eq!(NodeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Position, Scenario};

    #[test]
    fn distance_three_four_five() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Position::new(10.0, 10.0);
        let b = Position::new(30.0, 50.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Position::new(20.0, 30.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let s = Scenario::new(100, 50);
        assert!(s.contains(Position::new(0.0, 0.0)));
        assert!(s.contains(Position::new(100.0, 50.0)));
        assert!(s.contains(Position::new(50.0, 25.0)));
        assert!(!s.contains(Position::new(100.000_001, 10.0)));
        assert!(!s.contains(Position::new(10.0, -0.000_001)));
        assert!(!s.contains(Position::new(f64::NAN, 10.0)));
    }

    #[test]
    fn clamp_pulls_inside() {
        let s = Scenario::new(100, 100);
        assert_eq!(s.clamp(Position::new(150.0, -3.0)), Position::new(100.0, 0.0));
        assert_eq!(s.clamp(Position::new(42.0, 17.0)), Position::new(42.0, 17.0));
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        assert!(Scenario::new(100, 100).validate().is_ok());
        assert!(Scenario::new(0, 100).validate().is_err());
        assert!(Scenario::new(100, 0).validate().is_err());
    }

    #[test]
    fn diagonal() {
        assert_eq!(Scenario::new(30, 40).diagonal(), 50.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, SimTime};

    #[test]
    fn sim_time_arithmetic() {
        let t = SimTime(10.0);
        assert_eq!(t + 5.0, SimTime(15.0));
        assert_eq!(SimTime(15.0) - SimTime(10.0), 5.0);
        assert_eq!(SimTime(10.0).since(SimTime(15.0)), -5.0);
        assert!(SimTime(1.0) < SimTime(1.5));
    }

    #[test]
    fn clock_now_from_step() {
        let mut clock = SimClock::new(SimTime(100.0), 0.5);
        assert_eq!(clock.now(), SimTime(100.0));
        clock.advance();
        clock.advance();
        assert_eq!(clock.now(), SimTime(101.0));
        assert_eq!(clock.elapsed_secs(), 1.0);
    }

    #[test]
    fn config_validation() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_step(), cfg.total_steps);

        let bad_step = SimConfig { step_secs: 0.0, ..SimConfig::default() };
        assert!(bad_step.validate().is_err());

        let bad_interval = SimConfig { output_interval_steps: 0, ..SimConfig::default() };
        assert!(bad_interval.validate().is_err());
    }

    #[test]
    fn make_clock_uses_start() {
        let cfg = SimConfig { start_secs: 7.0, step_secs: 2.0, ..SimConfig::default() };
        let mut clock = cfg.make_clock();
        clock.advance();
        assert_eq!(clock.now(), SimTime(9.0));
    }
}

#[cfg(test)]
mod rng {
    use crate::{NodeId, NodeRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = NodeRng::new(12345, NodeId(0));
        let mut r2 = NodeRng::new(12345, NodeId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_nodes_differ() {
        let mut r0 = NodeRng::new(1, NodeId(0));
        let mut r1 = NodeRng::new(1, NodeId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent nodes should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = NodeRng::new(0, NodeId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..=100.0);
            assert!((0.0..=100.0).contains(&v));
        }
    }
}
