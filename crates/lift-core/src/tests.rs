//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, FloorId, PassengerId};

    #[test]
    fn index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn elevator_id_rejects_overflow() {
        assert!(ElevatorId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(PassengerId(7).to_string(), "PassengerId(7)");
        assert_eq!(FloorId(3).to_string(), "FloorId(3)");
    }

    #[test]
    fn floor_bounds() {
        assert!(FloorId(1).in_building(100));
        assert!(FloorId(100).in_building(100));
        assert!(!FloorId(0).in_building(100));
        assert!(!FloorId(101).in_building(100));
    }

    #[test]
    fn floor_moves_are_clamped() {
        assert_eq!(FloorId(5).up(10), FloorId(6));
        assert_eq!(FloorId(10).up(10), FloorId(10));
        assert_eq!(FloorId(5).down(), FloorId(4));
        assert_eq!(FloorId::LOBBY.down(), FloorId::LOBBY);
    }

    #[test]
    fn floor_distance_is_symmetric() {
        assert_eq!(FloorId(3).distance(FloorId(8)), 5);
        assert_eq!(FloorId(8).distance(FloorId(3)), 5);
        assert_eq!(FloorId(4).distance(FloorId(4)), 0);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_since() {
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(7).since(Tick(7)), 0);
    }

    #[test]
    fn clock_advances_by_one() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn clock_hms() {
        let clock = SimClock { current_tick: Tick(3_723) };
        assert_eq!(clock.elapsed_hms(), (1, 2, 3));
        assert_eq!(clock.to_string(), "t=3723 (01:02:03)");
    }
}

#[cfg(test)]
mod config {
    use crate::BankConfig;

    #[test]
    fn defaults_match_reference_building() {
        let cfg = BankConfig::default();
        assert_eq!(cfg.floors, 100);
        assert_eq!(cfg.elevators, 4);
        assert_eq!(cfg.capacity, 8);
        assert_eq!(cfg.ticks_per_floor, 10);
        assert_eq!(cfg.dwell_ticks, 2);
        assert_eq!(cfg.stall_limit, 60_000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn setters_chain() {
        let cfg = BankConfig::default()
            .with_floors(10)
            .with_elevators(2)
            .with_capacity(4)
            .with_ticks_per_floor(5)
            .with_stall_limit(100);
        assert_eq!(cfg.floors, 10);
        assert_eq!(cfg.elevators, 2);
        assert_eq!(cfg.capacity, 4);
        assert_eq!(cfg.ticks_per_floor, 5);
        assert_eq!(cfg.stall_limit, 100);
    }

    #[test]
    fn zero_values_rejected() {
        assert!(BankConfig::default().with_floors(0).validate().is_err());
        assert!(BankConfig::default().with_elevators(0).validate().is_err());
        assert!(BankConfig::default().with_capacity(0).validate().is_err());
        assert!(BankConfig::default().with_ticks_per_floor(0).validate().is_err());
        assert!(BankConfig::default().with_stall_limit(0).validate().is_err());
    }

    #[test]
    fn zero_dwell_allowed() {
        assert!(BankConfig::default().with_dwell_ticks(0).validate().is_ok());
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
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(1u16..=100);
            assert!((1..=100).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
