//! A small relay network: two 3×3 districts joined by a slow bridge
//! highway and a gateway.
//!
//! ```text
//!   west district           east district
//!   1 ─ 2 ─ 3               11 ─ 12 ─ 13
//!   │   │   │               │    │    │
//!   4 ─ 5 ─ 6 ══ bridge ══ 14 ─ 15 ─ 16
//!   │   │   │               │    │    │
//!   7 ─ 8 ─ 9 ·· gateway ·· 17 ─ 18 ─ 19
//! ```

use anyhow::Result;

use wn_core::{EntityId, Position, WaypointId};
use wn_world::{GatewayRecord, HighwayRecord, MemoryWorld, WaypointRecord};

/// Grid spacing between neighbouring waypoints.
const SPACING: f32 = 100.0;

/// Gap between the two districts along x.
const DISTRICT_GAP: f32 = 600.0;

/// Handles the demo needs to mutate the world between steps.
pub struct Relay {
    pub bridge:  EntityId,
    pub gateway: EntityId,
    pub courier: EntityId,
}

fn district(world: &mut MemoryWorld, first_id: u32, x0: f32) -> Result<()> {
    for row in 0..3u32 {
        for col in 0..3u32 {
            let id  = first_id + row * 3 + col;
            let pos = Position::new(x0 + col as f32 * SPACING, row as f32 * SPACING, 0.0);
            world.spawn_waypoint(WaypointRecord::new(WaypointId(id), pos))?;
        }
    }
    for row in 0..3u32 {
        for col in 0..3u32 {
            let id = first_id + row * 3 + col;
            if col < 2 {
                world.spawn_highway(HighwayRecord::new(WaypointId(id), WaypointId(id + 1), SPACING))?;
            }
            if row < 2 {
                world.spawn_highway(HighwayRecord::new(WaypointId(id), WaypointId(id + 3), SPACING))?;
            }
        }
    }
    Ok(())
}

/// Build both districts and their links.
pub fn build_world() -> Result<(MemoryWorld, Relay)> {
    let mut world = MemoryWorld::new();
    district(&mut world, 1, 0.0)?;
    district(&mut world, 11, 2.0 * SPACING + DISTRICT_GAP)?;

    // Cost 0 falls back to travel time.
    let bridge = world.spawn_highway(
        HighwayRecord::new(WaypointId(6), WaypointId(14), 0.0).with_travel_time(DISTRICT_GAP * 1.5),
    )?;
    let gateway = world.spawn_gateway(GatewayRecord::new(WaypointId(9), WaypointId(17)))?;

    // A mobile relay parked on waypoint 5 that later drives east.
    let courier = world.spawn_waypoint(WaypointRecord::new(
        WaypointId(50),
        Position::new(SPACING, SPACING, 0.0),
    ))?;
    world.spawn_highway(HighwayRecord::new(WaypointId(50), WaypointId(5), 1.0))?;

    for _ in 0..4 {
        world.spawn_inert()?;
    }

    Ok((world, Relay { bridge, gateway, courier }))
}
