//! The authoritative, versioned picture of the movement graph.

use wn_core::{Tick, WaypointId};

use crate::{GatewayEntry, HighwayEntry, WaypointEntry};

/// Three canonically sorted entry collections plus a version counter.
///
/// Only [`TopologyCollector`](crate::TopologyCollector) writes a snapshot;
/// everything else reads it.  `version` starts at 0 for the empty bootstrap
/// snapshot and increases by exactly one on every step whose entry content
/// differs from the previous step's.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkSnapshot {
    pub(crate) version:    u64,
    pub(crate) last_build: Tick,
    pub(crate) waypoints:  Vec<WaypointEntry>,
    pub(crate) highways:   Vec<HighwayEntry>,
    pub(crate) gateways:   Vec<GatewayEntry>,
}

impl NetworkSnapshot {
    /// The empty bootstrap snapshot (version 0).
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Tick of the most recent collection, changed or not.
    #[inline]
    pub fn last_build(&self) -> Tick {
        self.last_build
    }

    /// Waypoints sorted by id.
    pub fn waypoints(&self) -> &[WaypointEntry] {
        &self.waypoints
    }

    /// Highways sorted by `(from, to)`.
    pub fn highways(&self) -> &[HighwayEntry] {
        &self.highways
    }

    /// Gateways sorted by `(from, to)`.
    pub fn gateways(&self) -> &[GatewayEntry] {
        &self.gateways
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn highway_count(&self) -> usize {
        self.highways.len()
    }

    pub fn gateway_count(&self) -> usize {
        self.gateways.len()
    }

    /// Look up a waypoint by id.  O(log N); entries are sorted by id.
    pub fn waypoint(&self, id: WaypointId) -> Option<&WaypointEntry> {
        self.waypoints
            .binary_search_by(|e| e.id.cmp(&id))
            .ok()
            .map(|i| &self.waypoints[i])
    }
}
