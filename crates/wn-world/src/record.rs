//! Raw network records as authored in the world.

use wn_core::{GatewayFlags, HighwayFlags, Position, Tick, WaypointFlags, WaypointId};

/// A movement-graph node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointRecord {
    pub id:           WaypointId,
    /// Position stored on the record itself.  Superseded by a separately
    /// tracked spatial position when the store has one.
    pub position:     Position,
    pub flags:        WaypointFlags,
    /// Upkeep cost per service interval.
    pub upkeep:       f32,
    pub last_service: Tick,
}

impl WaypointRecord {
    /// An enabled waypoint with no upkeep, serviced at tick 0.
    pub fn new(id: WaypointId, position: Position) -> Self {
        Self {
            id,
            position,
            flags:        WaypointFlags::empty(),
            upkeep:       0.0,
            last_service: Tick::ZERO,
        }
    }

    pub fn with_flags(mut self, flags: WaypointFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A weighted road between two waypoints, traversable both ways.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighwayRecord {
    pub from:        WaypointId,
    pub to:          WaypointId,
    /// Base cost.  When not positive the travel time is used instead.
    pub cost:        f32,
    pub travel_time: f32,
    pub flags:       HighwayFlags,
}

impl HighwayRecord {
    pub fn new(from: WaypointId, to: WaypointId, cost: f32) -> Self {
        Self {
            from,
            to,
            cost,
            travel_time: 0.0,
            flags:       HighwayFlags::empty(),
        }
    }

    pub fn with_travel_time(mut self, travel_time: f32) -> Self {
        self.travel_time = travel_time;
        self
    }

    pub fn with_flags(mut self, flags: HighwayFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// An instantaneous shortcut (portal) between two waypoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GatewayRecord {
    pub from:  WaypointId,
    pub to:    WaypointId,
    pub flags: GatewayFlags,
}

impl GatewayRecord {
    pub fn new(from: WaypointId, to: WaypointId) -> Self {
        Self { from, to, flags: GatewayFlags::empty() }
    }

    pub fn with_flags(mut self, flags: GatewayFlags) -> Self {
        self.flags = flags;
        self
    }
}
