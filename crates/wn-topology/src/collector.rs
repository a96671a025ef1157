//! Per-step snapshot rebuild with change detection.

use std::mem;

use tracing::{debug, trace};
use wn_core::Tick;
use wn_world::WorldStore;

use crate::entry::same_entries;
use crate::{GatewayEntry, HighwayEntry, NetworkSnapshot, WaypointEntry};

/// Rebuilds the [`NetworkSnapshot`] from the world store every step.
///
/// Each collection is re-derived into a scratch buffer, canonically sorted,
/// and compared with the stored one.  Only a collection that differs is
/// swapped in; an unchanged collection keeps its allocation and the scratch
/// buffer is reused next step.
#[derive(Default)]
pub struct TopologyCollector {
    snapshot: NetworkSnapshot,

    scratch_waypoints: Vec<WaypointEntry>,
    scratch_highways:  Vec<HighwayEntry>,
    scratch_gateways:  Vec<GatewayEntry>,
}

impl TopologyCollector {
    /// A collector holding the empty version-0 snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &NetworkSnapshot {
        &self.snapshot
    }

    /// Re-derive the snapshot from `world` at tick `now`.
    ///
    /// Returns `true` if any collection changed and the version advanced.
    /// The version advances at most once per call.  `last_build` is set to
    /// `now` either way.
    pub fn collect<W: WorldStore>(&mut self, world: &W, now: Tick) -> bool {
        self.scratch_waypoints.clear();
        self.scratch_waypoints.extend(
            world
                .waypoints()
                .map(|(record, tracked)| WaypointEntry::from_record(record, tracked)),
        );
        self.scratch_waypoints.sort_by(WaypointEntry::canonical_cmp);

        self.scratch_highways.clear();
        self.scratch_highways.extend(world.highways().map(HighwayEntry::from));
        self.scratch_highways.sort_by(HighwayEntry::canonical_cmp);

        self.scratch_gateways.clear();
        self.scratch_gateways.extend(world.gateways().map(GatewayEntry::from));
        self.scratch_gateways.sort_by(GatewayEntry::canonical_cmp);

        let snap = &mut self.snapshot;
        let mut changed = false;

        if !same_entries(&self.scratch_waypoints, &snap.waypoints, WaypointEntry::canonical_cmp) {
            mem::swap(&mut self.scratch_waypoints, &mut snap.waypoints);
            changed = true;
        }
        if !same_entries(&self.scratch_highways, &snap.highways, HighwayEntry::canonical_cmp) {
            mem::swap(&mut self.scratch_highways, &mut snap.highways);
            changed = true;
        }
        if !same_entries(&self.scratch_gateways, &snap.gateways, GatewayEntry::canonical_cmp) {
            mem::swap(&mut self.scratch_gateways, &mut snap.gateways);
            changed = true;
        }

        if changed {
            snap.version += 1;
            debug!(
                version = snap.version,
                tick = now.0,
                waypoints = snap.waypoints.len(),
                highways = snap.highways.len(),
                gateways = snap.gateways.len(),
                "topology_changed"
            );
        } else {
            trace!(version = snap.version, tick = now.0, "topology_unchanged");
        }
        snap.last_build = now;
        changed
    }
}
