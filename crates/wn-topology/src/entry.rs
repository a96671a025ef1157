//! Flattened snapshot entries.
//!
//! Each entry type has a `canonical_cmp` total order.  Float fields compare
//! with `f32::total_cmp`, so the order is total even for NaN payloads and two
//! entries compare `Equal` exactly when they are bit-identical.  The
//! collector uses the same function for sorting and for change detection.

use std::cmp::Ordering;

use wn_core::{GatewayFlags, HighwayFlags, Position, Tick, WaypointFlags, WaypointId};
use wn_world::{GatewayRecord, HighwayRecord, WaypointRecord};

// ── WaypointEntry ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointEntry {
    pub id:           WaypointId,
    pub position:     Position,
    pub flags:        WaypointFlags,
    pub upkeep:       f32,
    pub last_service: Tick,
}

impl WaypointEntry {
    /// Flatten a record, preferring the separately tracked position.
    pub fn from_record(record: &WaypointRecord, tracked: Option<Position>) -> Self {
        Self {
            id:           record.id,
            position:     tracked.unwrap_or(record.position),
            flags:        record.flags,
            upkeep:       record.upkeep,
            last_service: record.last_service,
        }
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.flags.contains(WaypointFlags::DISABLED)
    }

    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.position.total_cmp(&other.position))
            .then_with(|| self.flags.cmp(&other.flags))
            .then_with(|| self.upkeep.total_cmp(&other.upkeep))
            .then_with(|| self.last_service.cmp(&other.last_service))
    }
}

// ── HighwayEntry ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighwayEntry {
    pub from:        WaypointId,
    pub to:          WaypointId,
    pub cost:        f32,
    pub travel_time: f32,
    pub flags:       HighwayFlags,
}

impl From<&HighwayRecord> for HighwayEntry {
    fn from(r: &HighwayRecord) -> Self {
        Self {
            from:        r.from,
            to:          r.to,
            cost:        r.cost,
            travel_time: r.travel_time,
            flags:       r.flags,
        }
    }
}

impl HighwayEntry {
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        (self.from, self.to)
            .cmp(&(other.from, other.to))
            .then_with(|| self.cost.total_cmp(&other.cost))
            .then_with(|| self.travel_time.total_cmp(&other.travel_time))
            .then_with(|| self.flags.cmp(&other.flags))
    }
}

// ── GatewayEntry ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GatewayEntry {
    pub from:  WaypointId,
    pub to:    WaypointId,
    pub flags: GatewayFlags,
}

impl From<&GatewayRecord> for GatewayEntry {
    fn from(r: &GatewayRecord) -> Self {
        Self { from: r.from, to: r.to, flags: r.flags }
    }
}

impl GatewayEntry {
    #[inline]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Element-wise equality under a canonical order.  Differing lengths are
/// unequal.
pub(crate) fn same_entries<T>(a: &[T], b: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| cmp(x, y) == Ordering::Equal)
}
