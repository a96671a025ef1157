//! Filtered adjacency built from a snapshot.
//!
//! # Data layout
//!
//! Reachable waypoints are packed into dense **slots** `0..node_count` in
//! ascending id order; `ids[slot]` maps back to the authoring id and an
//! id → slot map answers the reverse.  Outgoing arcs use **Compressed Sparse
//! Row (CSR)** format:
//!
//! ```text
//! arc_to  [ out_start[s] .. out_start[s+1] ]
//! arc_cost[ out_start[s] .. out_start[s+1] ]
//! ```
//!
//! so the search inner loop is a contiguous scan over plain indices.
//!
//! # Filtering
//!
//! | Record   | Excluded when                                  | Cost                                   |
//! |----------|------------------------------------------------|----------------------------------------|
//! | Waypoint | `DISABLED`                                     | —                                      |
//! | Highway  | `BLOCKED`, endpoint unreachable, cost NaN/∞ before or after the penalty | `cost > 0 ? cost : travel_time`, ×penalty if `UNDER_MAINTENANCE` |
//! | Gateway  | `OFFLINE` or `RESTRICTED`, endpoint unreachable, `gateway_cost` NaN/∞ | `CostModel::gateway_cost`, clamped to `>= 0` |
//!
//! Every surviving record contributes two arcs (one per direction).  Arcs of
//! a slot keep the canonical snapshot order: highways first, then gateways.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over reachable waypoint positions answers
//! nearest-waypoint queries for consumers that need to snap a world position
//! onto the network.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use tracing::debug;

use wn_core::{CostModel, HighwayFlags, Position, WaypointId};

use crate::{HighwayEntry, NetworkSnapshot};

#[cfg(feature = "fx-hash")]
type SlotMap = rustc_hash::FxHashMap<WaypointId, u32>;
#[cfg(not(feature = "fx-hash"))]
type SlotMap = std::collections::HashMap<WaypointId, u32>;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct SlotEntry {
    point: [f32; 3],
    slot:  u32,
}

impl RTreeObject for SlotEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SlotEntry {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── NetworkGraph ──────────────────────────────────────────────────────────────

/// Reachable waypoints and traversable arcs of one snapshot version.
///
/// Immutable once built.  Construct with [`NetworkGraph::build`].
pub struct NetworkGraph {
    version: u64,

    // ── Slot data ─────────────────────────────────────────────────────────
    /// Authoring id of each slot, ascending.
    pub ids: Vec<WaypointId>,

    /// Position of each slot.
    pub positions: Vec<Position>,

    slots: SlotMap,

    // ── CSR arcs ──────────────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub out_start: Vec<u32>,

    /// Destination slot of each arc.
    pub arc_to: Vec<u32>,

    /// Effective cost of each arc, finite and `>= 0`.
    pub arc_cost: Vec<f32>,

    spatial_idx: RTree<SlotEntry>,
}

/// Effective highway cost, or `None` if the highway cannot be traversed.
fn highway_cost(h: &HighwayEntry, model: &CostModel) -> Option<f32> {
    if !h.flags.is_traversable() {
        return None;
    }
    let base = if h.cost > 0.0 { h.cost } else { h.travel_time };
    if !base.is_finite() {
        return None;
    }
    let base = base.max(0.0);
    let cost = if h.flags.contains(HighwayFlags::UNDER_MAINTENANCE) {
        base * model.maintenance_penalty
    } else {
        base
    };
    arc_cost(cost)
}

/// Arc weights must be finite and `>= 0` for the search and for the failure
/// sentinels to stay distinguishable.  Negative values clamp to zero;
/// NaN and infinities drop the arc.
fn arc_cost(cost: f32) -> Option<f32> {
    cost.is_finite().then(|| cost.max(0.0))
}

impl NetworkGraph {
    /// A graph with no waypoints, tagged version 0.
    pub fn empty() -> Self {
        Self::build(&NetworkSnapshot::empty(), &CostModel::default())
    }

    /// Build the filtered adjacency for `snapshot`.
    ///
    /// Time complexity: O(N + E log E) for N waypoints and E edge records.
    pub fn build(snapshot: &NetworkSnapshot, model: &CostModel) -> Self {
        // ── Reachability set ──────────────────────────────────────────────
        let mut ids       = Vec::with_capacity(snapshot.waypoints.len());
        let mut positions = Vec::with_capacity(snapshot.waypoints.len());
        let mut slots     = SlotMap::default();
        for w in snapshot.waypoints.iter().filter(|w| !w.is_disabled()) {
            // Entries are sorted, so the first of any duplicate id wins.
            if slots.contains_key(&w.id) {
                continue;
            }
            slots.insert(w.id, ids.len() as u32);
            ids.push(w.id);
            positions.push(w.position);
        }
        let node_count = ids.len();

        // ── Arcs, both directions, canonical order ────────────────────────
        let mut raw: Vec<(u32, u32, f32)> = Vec::new();
        let mut link = |from: WaypointId, to: WaypointId, cost: f32| {
            if let (Some(&a), Some(&b)) = (slots.get(&from), slots.get(&to)) {
                raw.push((a, b, cost));
                raw.push((b, a, cost));
            }
        };
        for h in &snapshot.highways {
            if let Some(cost) = highway_cost(h, model) {
                link(h.from, h.to, cost);
            }
        }
        if let Some(cost) = arc_cost(model.gateway_cost) {
            for g in snapshot.gateways.iter().filter(|g| g.flags.is_traversable()) {
                link(g.from, g.to, cost);
            }
        }

        // Stable sort: arcs of a slot keep their canonical relative order.
        raw.sort_by_key(|&(from, _, _)| from);

        let arc_to:   Vec<u32> = raw.iter().map(|&(_, to, _)| to).collect();
        let arc_cost: Vec<f32> = raw.iter().map(|&(_, _, c)| c).collect();

        let mut out_start = vec![0u32; node_count + 1];
        for &(from, _, _) in &raw {
            out_start[from as usize + 1] += 1;
        }
        for i in 1..=node_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[node_count] as usize, arc_to.len());

        // ── Spatial index ─────────────────────────────────────────────────
        let entries: Vec<SlotEntry> = positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.x.is_finite() && p.y.is_finite() && p.z.is_finite())
            .map(|(i, p)| SlotEntry { point: p.to_array(), slot: i as u32 })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        debug!(
            version = snapshot.version,
            nodes = node_count,
            arcs = arc_to.len(),
            "network_graph_built"
        );

        Self {
            version: snapshot.version,
            ids,
            positions,
            slots,
            out_start,
            arc_to,
            arc_cost,
            spatial_idx,
        }
    }

    /// Snapshot version this graph was built from.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arc_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    // ── Slot lookup ───────────────────────────────────────────────────────

    /// Slot of a reachable waypoint, or `None` if it is absent or disabled.
    #[inline]
    pub fn slot(&self, id: WaypointId) -> Option<usize> {
        self.slots.get(&id).map(|&s| s as usize)
    }

    #[inline]
    pub fn contains(&self, id: WaypointId) -> bool {
        self.slots.contains_key(&id)
    }

    #[inline]
    pub fn id(&self, slot: usize) -> WaypointId {
        self.ids[slot]
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `(destination slot, cost)` of every arc leaving `slot`.
    #[inline]
    pub fn arcs(&self, slot: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        let start = self.out_start[slot] as usize;
        let end   = self.out_start[slot + 1] as usize;
        (start..end).map(|a| (self.arc_to[a] as usize, self.arc_cost[a]))
    }

    #[inline]
    pub fn out_degree(&self, slot: usize) -> usize {
        (self.out_start[slot + 1] - self.out_start[slot]) as usize
    }

    /// Cheapest live arc between two waypoints, if any.
    pub fn arc_cost_between(&self, from: WaypointId, to: WaypointId) -> Option<f32> {
        let (a, b) = (self.slot(from)?, self.slot(to)?);
        self.arcs(a)
            .filter(|&(dest, _)| dest == b)
            .map(|(_, cost)| cost)
            .min_by(f32::total_cmp)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The reachable waypoint nearest to `pos`.  `None` only when the graph
    /// has no indexed waypoints.
    pub fn nearest_waypoint(&self, pos: Position) -> Option<WaypointId> {
        self.spatial_idx
            .nearest_neighbor(&pos.to_array())
            .map(|e| self.ids[e.slot as usize])
    }

    /// Up to `k` reachable waypoints nearest to `pos`, ascending by distance.
    pub fn k_nearest_waypoints(&self, pos: Position, k: usize) -> Vec<WaypointId> {
        self.spatial_idx
            .nearest_neighbor_iter(&pos.to_array())
            .take(k)
            .map(|e| self.ids[e.slot as usize])
            .collect()
    }
}
