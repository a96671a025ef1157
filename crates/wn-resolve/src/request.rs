//! Request / result / sequence triple.

use wn_core::{RequestFlags, Tick, WaypointId};

use crate::PathFailure;

/// Cost written to a result when the destination cannot be reached.
pub const NO_PATH_COST: f32 = -1.0;

// ── PathRequest ───────────────────────────────────────────────────────────────

/// A shortest-path query submitted by a consumer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRequest {
    pub from: WaypointId,
    pub to:   WaypointId,
    /// Largest acceptable total cost.  `0.0` (or anything not positive)
    /// means unconstrained.
    pub max_cost: f32,
    pub flags:    RequestFlags,
    /// Ordering key.  Left `None`, it is stamped with the tick of the first
    /// step that resolves the request.
    pub requested_at: Option<Tick>,
}

impl PathRequest {
    pub fn new(from: WaypointId, to: WaypointId) -> Self {
        Self {
            from,
            to,
            max_cost:     0.0,
            flags:        RequestFlags::empty(),
            requested_at: None,
        }
    }

    pub fn with_max_cost(mut self, max_cost: f32) -> Self {
        self.max_cost = max_cost;
        self
    }

    pub fn with_flags(mut self, flags: RequestFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn requested_at(mut self, tick: Tick) -> Self {
        self.requested_at = Some(tick);
        self
    }

    /// `true` when a positive budget applies.
    #[inline]
    pub fn has_budget(&self) -> bool {
        self.max_cost > 0.0
    }
}

// ── PathResult ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathStatus {
    #[default]
    Unresolved,
    Assigned,
    Failed,
}

/// Outcome of the latest resolution attempt.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub status: PathStatus,
    /// Total cost; see the crate docs for the values written on failure.
    pub cost: f32,
    /// Waypoints in the sequence, endpoints included.  Zero unless assigned.
    pub hop_count: u32,
    pub last_update: Tick,
    /// Set exactly when `status == Failed`.
    pub failure: Option<PathFailure>,
}

impl PathResult {
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.status == PathStatus::Assigned
    }

    /// `Ok(cost)` for an assigned path, `Err` with the failure reason for a
    /// failed one, `None` before the first resolution.
    pub fn outcome(&self) -> Option<Result<f32, PathFailure>> {
        match self.status {
            PathStatus::Unresolved => None,
            PathStatus::Assigned   => Some(Ok(self.cost)),
            PathStatus::Failed     => Some(Err(self.failure.unwrap_or(PathFailure::Unreachable))),
        }
    }

    pub(crate) fn fail(&mut self, failure: PathFailure, cost: f32) {
        self.status    = PathStatus::Failed;
        self.cost      = cost;
        self.hop_count = 0;
        self.failure   = Some(failure);
    }

    pub(crate) fn assign(&mut self, cost: f32, hop_count: u32) {
        self.status    = PathStatus::Assigned;
        self.cost      = cost;
        self.hop_count = hop_count;
        self.failure   = None;
    }
}

// ── PathRecord ────────────────────────────────────────────────────────────────

/// One outstanding query: the request, its latest result, and the resolved
/// waypoint sequence (origin and destination inclusive).
///
/// The sequence is cleared and rewritten on every resolution attempt;
/// `result.hop_count == sequence.len()` always holds afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRecord {
    pub request:  PathRequest,
    pub result:   PathResult,
    pub sequence: Vec<WaypointId>,
}

impl PathRecord {
    pub fn new(request: PathRequest) -> Self {
        Self {
            request,
            result:   PathResult::default(),
            sequence: Vec::new(),
        }
    }
}
