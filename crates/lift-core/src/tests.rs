//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::LiftId;

    #[test]
    fn index_roundtrip() {
        let id = LiftId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(LiftId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_fleet_order() {
        assert!(LiftId(0) < LiftId(1));
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(LiftId(0).to_string(), "Lift 1");
        assert_eq!(LiftId(1).number(), 2);
    }
}

#[cfg(test)]
mod floor {
    use crate::Floor;

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(7).distance(Floor(10)), 3);
        assert_eq!(Floor(10).distance(Floor(7)), 3);
        assert_eq!(Floor(4).distance(Floor(4)), 0);
    }

    #[test]
    fn ground_floor_label() {
        assert_eq!(Floor(1).label(), "G");
        assert_eq!(Floor(6).label(), "6");
        assert_eq!(Floor::default(), Floor::GROUND);
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, Floor};

    #[test]
    fn toward_higher_floor_is_up() {
        assert_eq!(Direction::toward(Floor(1), Floor(5)), Direction::Up);
        assert_eq!(Direction::toward(Floor(5), Floor(1)), Direction::Down);
    }

    #[test]
    fn toward_same_floor_is_down() {
        assert_eq!(Direction::toward(Floor(4), Floor(4)), Direction::Down);
    }

    #[test]
    fn idle_is_default_and_not_moving() {
        assert_eq!(Direction::default(), Direction::Idle);
        assert!(!Direction::Idle.is_moving());
        assert!(Direction::Up.is_moving());
        assert_eq!(Direction::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(5)), 0);
    }

    #[test]
    fn tick_addition_saturates() {
        assert_eq!(Tick(u64::MAX - 1) + 5, Tick(u64::MAX));
        assert_eq!(SimClock::new(1_000).ms_for_ticks(u64::MAX), u64::MAX);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(250);
        assert_eq!(clock.elapsed_ms(), 0);
        assert_eq!(clock.advance(), Tick(1));
        clock.advance();
        assert_eq!(clock.elapsed_ms(), 500);
        assert_eq!(clock.to_string(), "T2 (0.500 s)");
    }

    #[test]
    fn ticks_for_ms_rounds_up() {
        let clock = SimClock::new(1_000);
        assert_eq!(clock.ticks_for_ms(9_000), 9);
        assert_eq!(clock.ticks_for_ms(9_001), 10);
        assert_eq!(clock.ticks_for_ms(1), 1);
    }
}

#[cfg(test)]
mod config {
    use crate::{Floor, FleetConfig, LiftError, MAX_TRAVEL_TICKS, MIN_FLOORS};

    #[test]
    fn default_is_valid() {
        let cfg = FleetConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.total_floors, 8);
        assert_eq!(cfg.lift_count, 2);
        assert_eq!(cfg.travel_ms(), 9_000);
    }

    #[test]
    fn too_few_floors_rejected() {
        let cfg = FleetConfig { total_floors: MIN_FLOORS - 1, ..FleetConfig::default() };
        assert!(matches!(cfg.validate(), Err(LiftError::InvalidConfiguration(_))));

        let cfg = FleetConfig { total_floors: MIN_FLOORS, ..FleetConfig::default() };
        cfg.validate().unwrap();
    }

    #[test]
    fn zero_lifts_rejected() {
        let cfg = FleetConfig { lift_count: 0, ..FleetConfig::default() };
        assert!(matches!(cfg.validate(), Err(LiftError::InvalidConfiguration(_))));
    }

    #[test]
    fn zero_travel_rejected() {
        let cfg = FleetConfig { travel_ticks: 0, ..FleetConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn huge_travel_rejected() {
        let cfg = FleetConfig { travel_ticks: u64::MAX, ..FleetConfig::default() };
        assert!(matches!(cfg.validate(), Err(LiftError::InvalidConfiguration(_))));

        let cfg = FleetConfig { travel_ticks: MAX_TRAVEL_TICKS + 1, ..FleetConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn longest_travel_fits_in_milliseconds() {
        let cfg = FleetConfig {
            travel_ticks:     MAX_TRAVEL_TICKS,
            tick_duration_ms: u32::MAX,
            ..FleetConfig::default()
        };
        cfg.validate().unwrap();
        assert_eq!(cfg.travel_ms(), MAX_TRAVEL_TICKS * u32::MAX as u64);
    }

    #[test]
    fn floor_range_is_inclusive() {
        let cfg = FleetConfig::default();
        cfg.check_floor(Floor(1)).unwrap();
        cfg.check_floor(Floor(8)).unwrap();
        assert_eq!(
            cfg.check_floor(Floor(0)),
            Err(LiftError::InvalidFloorRequest { floor: Floor(0), total_floors: 8 }),
        );
        assert!(cfg.check_floor(Floor(9)).is_err());
    }

    #[test]
    fn panel_order_is_top_down() {
        let cfg = FleetConfig { total_floors: 5, ..FleetConfig::default() };
        let floors: Vec<_> = cfg.floors_top_down().collect();
        assert_eq!(floors, [Floor(5), Floor(4), Floor(3), Floor(2), Floor(1)]);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_range(1u32..=8), r2.gen_range(1u32..=8));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.5));
    }
}
