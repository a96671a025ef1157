//! Unit tests for wn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntityId, RequestId, WaypointId};

    #[test]
    fn index_roundtrip() {
        let id = WaypointId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(WaypointId::from_index(42), Some(id));
        assert_eq!(WaypointId::from_index(u32::MAX as usize), None);
    }

    #[test]
    fn ordering() {
        assert!(RequestId(0) < RequestId(1));
        assert!(WaypointId(100) > WaypointId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(WaypointId::INVALID.0, u32::MAX);
        assert_eq!(EntityId::default(), EntityId::INVALID);
        assert!(!RequestId::INVALID.is_valid());
        assert!(RequestId(3).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(WaypointId(7).to_string(), "WaypointId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Position;

    #[test]
    fn distance_along_axis() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn total_cmp_orders_componentwise() {
        use std::cmp::Ordering;
        let a = Position::new(1.0, 2.0, 3.0);
        let b = Position::new(1.0, 2.0, 4.0);
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(a.total_cmp(&a), Ordering::Equal);

        let nan = Position::new(f32::NAN, 0.0, 0.0);
        assert_eq!(nan.total_cmp(&nan), Ordering::Equal);
    }
}

#[cfg(test)]
mod time {
    use crate::{ClockMode, SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10).next(), Tick(11));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(3).since(Tick(10)), 0);
    }

    #[test]
    fn clock_advance() {
        let mut clock = SimClock::new(Tick(5));
        clock.advance();
        assert_eq!(clock.current_tick, Tick(6));
    }

    #[test]
    fn simulates_only_when_running_and_recording() {
        let mut clock = SimClock::default();
        assert!(clock.should_simulate());

        clock.pause();
        assert!(!clock.should_simulate());
        clock.resume();

        clock.set_mode(ClockMode::Playback);
        assert!(!clock.should_simulate());
        clock.set_mode(ClockMode::Record);
        assert!(clock.should_simulate());
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new(Tick(3));
        assert_eq!(clock.to_string(), "T3 (recording)");
        clock.pause();
        assert_eq!(clock.to_string(), "T3 (paused)");
    }
}

#[cfg(test)]
mod flags {
    use crate::{GatewayFlags, HighwayFlags};

    #[test]
    fn highway_traversable_unless_blocked() {
        assert!(HighwayFlags::empty().is_traversable());
        assert!(HighwayFlags::UNDER_MAINTENANCE.is_traversable());
        assert!(!(HighwayFlags::BLOCKED | HighwayFlags::UNDER_MAINTENANCE).is_traversable());
    }

    #[test]
    fn gateway_offline_or_restricted_not_traversable() {
        assert!(GatewayFlags::empty().is_traversable());
        assert!(!GatewayFlags::OFFLINE.is_traversable());
        assert!(!GatewayFlags::RESTRICTED.is_traversable());
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, CostModel};

    #[test]
    fn defaults_match_recorded_constants() {
        let m = CostModel::default();
        assert_eq!(m.maintenance_penalty, 1.25);
        assert_eq!(m.gateway_cost, 0.01);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn rejects_penalty_below_one() {
        let m = CostModel { maintenance_penalty: 0.5, ..CostModel::default() };
        assert!(matches!(m.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_negative_or_nan_gateway_cost() {
        let neg = CostModel { gateway_cost: -1.0, ..CostModel::default() };
        assert!(neg.validate().is_err());
        let nan = CostModel { gateway_cost: f32::NAN, ..CostModel::default() };
        assert!(nan.validate().is_err());
    }
}
