//! Unit tests for wn-world.

#[cfg(test)]
mod spawn {
    use wn_core::{Position, WaypointId};

    use crate::{HighwayRecord, MemoryWorld, WaypointRecord, WorldError, WorldStore};

    #[test]
    fn entity_ids_are_sequential() {
        let mut w = MemoryWorld::new();
        let a = w.spawn_waypoint(WaypointRecord::new(WaypointId(1), Position::ORIGIN)).unwrap();
        let b = w.spawn_inert().unwrap();
        let c = w.spawn_highway(HighwayRecord::new(WaypointId(1), WaypointId(2), 1.0)).unwrap();
        assert_eq!((a.0, b.0, c.0), (0, 1, 2));
        assert_eq!(w.entity_count(), 3);
    }

    #[test]
    fn duplicate_waypoint_id_rejected() {
        let mut w = MemoryWorld::new();
        let first = w.spawn_waypoint(WaypointRecord::new(WaypointId(9), Position::ORIGIN)).unwrap();
        let err = w
            .spawn_waypoint(WaypointRecord::new(WaypointId(9), Position::new(1.0, 0.0, 0.0)))
            .unwrap_err();
        assert_eq!(err, WorldError::DuplicateWaypoint { id: WaypointId(9), existing: first });
        assert_eq!(w.waypoint_count(), 1);
    }

    #[test]
    fn waypoint_id_reusable_after_despawn() {
        let mut w = MemoryWorld::new();
        let e = w.spawn_waypoint(WaypointRecord::new(WaypointId(9), Position::ORIGIN)).unwrap();
        w.despawn(e).unwrap();
        assert!(w.spawn_waypoint(WaypointRecord::new(WaypointId(9), Position::ORIGIN)).is_ok());
    }

    #[test]
    fn entity_ids_stop_before_invalid() {
        let mut w = MemoryWorld::new();
        w.next_entity = u32::MAX - 1;
        let last = w.spawn_inert().unwrap();
        assert!(last.is_valid());
        assert_eq!(w.spawn_inert(), Err(WorldError::EntitiesExhausted));
        assert_eq!(
            w.spawn_waypoint(WaypointRecord::new(WaypointId(1), Position::ORIGIN)),
            Err(WorldError::EntitiesExhausted)
        );
        assert!(w.waypoint_entity(WaypointId(1)).is_none());
        assert_eq!(w.entity_count(), 1);
    }

    #[test]
    fn inert_entities_are_invisible_to_store() {
        let mut w = MemoryWorld::new();
        w.spawn_inert().unwrap();
        w.spawn_inert().unwrap();
        assert_eq!(w.waypoints().count(), 0);
        assert_eq!(w.highways().count(), 0);
        assert_eq!(w.gateways().count(), 0);
        assert_eq!(w.entity_count(), 2);
    }
}

#[cfg(test)]
mod despawn {
    use wn_core::{EntityId, GatewayFlags, Position, WaypointId};

    use crate::{GatewayRecord, MemoryWorld, WaypointRecord, WorldError, WorldStore};

    #[test]
    fn despawn_unknown_entity_errors() {
        let mut w = MemoryWorld::new();
        assert_eq!(w.despawn(EntityId(5)), Err(WorldError::EntityNotFound(EntityId(5))));
    }

    #[test]
    fn despawn_removes_tracked_position() {
        let mut w = MemoryWorld::new();
        let e = w.spawn_waypoint(WaypointRecord::new(WaypointId(1), Position::ORIGIN)).unwrap();
        w.track_position(e, Position::new(4.0, 0.0, 0.0)).unwrap();
        w.despawn(e).unwrap();
        assert!(!w.contains(e));
        assert_eq!(w.untrack_position(e), None);
    }

    #[test]
    fn gateway_flags_update() {
        let mut w = MemoryWorld::new();
        let g = w.spawn_gateway(GatewayRecord::new(WaypointId(1), WaypointId(2))).unwrap();
        w.set_gateway_flags(g, GatewayFlags::OFFLINE).unwrap();
        let flags: Vec<_> = w.gateways().map(|r| r.flags).collect();
        assert_eq!(flags, vec![GatewayFlags::OFFLINE]);
    }
}

#[cfg(test)]
mod tracked_position {
    use wn_core::{Position, WaypointId};

    use crate::{HighwayRecord, MemoryWorld, WaypointRecord, WorldError, WorldStore};

    #[test]
    fn tracked_position_reported_alongside_record() {
        let mut w = MemoryWorld::new();
        let e = w.spawn_waypoint(WaypointRecord::new(WaypointId(1), Position::ORIGIN)).unwrap();
        let (_, tracked) = w.waypoints().next().unwrap();
        assert_eq!(tracked, None);

        w.track_position(e, Position::new(2.0, 3.0, 4.0)).unwrap();
        let (record, tracked) = w.waypoints().next().unwrap();
        assert_eq!(record.position, Position::ORIGIN);
        assert_eq!(tracked, Some(Position::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn tracking_a_highway_is_rejected() {
        let mut w = MemoryWorld::new();
        let h = w.spawn_highway(HighwayRecord::new(WaypointId(1), WaypointId(2), 1.0)).unwrap();
        assert_eq!(
            w.track_position(h, Position::ORIGIN),
            Err(WorldError::NotAWaypoint(h)),
        );
    }
}
