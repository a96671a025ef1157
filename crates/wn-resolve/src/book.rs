//! The `PathBook` — every outstanding request record.

use std::collections::BTreeMap;

use wn_core::{RequestId, Tick};

use crate::{PathRecord, PathRequest};

/// Outstanding path records keyed by [`RequestId`].
///
/// Ids are allocated in ascending order and never reused, so iteration order
/// is submission order.  Withdrawing a record before the next step simply
/// drops it from that step's resolution.
#[derive(Default, Clone, Debug)]
pub struct PathBook {
    /// Next id to hand out.  `RequestId::INVALID` is never allocated.
    pub(crate) next_id: u32,
    records: BTreeMap<RequestId, PathRecord>,
}

impl PathBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `request`; its result starts `Unresolved`.
    ///
    /// Returns `None` once every id below `RequestId::INVALID` has been
    /// handed out.  Ids are not reused after a withdraw.
    pub fn submit(&mut self, request: PathRequest) -> Option<RequestId> {
        let id = RequestId(self.next_id);
        if !id.is_valid() {
            return None;
        }
        self.next_id += 1;
        self.records.insert(id, PathRecord::new(request));
        Some(id)
    }

    /// Remove a record, returning it if it existed.
    pub fn withdraw(&mut self, id: RequestId) -> Option<PathRecord> {
        self.records.remove(&id)
    }

    pub fn get(&self, id: RequestId) -> Option<&PathRecord> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: RequestId) -> Option<&mut PathRecord> {
        self.records.get_mut(&id)
    }

    /// Records in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (RequestId, &PathRecord)> + '_ {
        self.records.iter().map(|(&id, r)| (id, r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Deterministic resolution order: ascending `(requested_at, id)`.
    ///
    /// Requests without a `requested_at` are stamped with `now` first, so
    /// their position is fixed from this step on.
    pub(crate) fn resolution_order(&mut self, now: Tick) -> Vec<RequestId> {
        let mut keys: Vec<(Tick, RequestId)> = self
            .records
            .iter_mut()
            .map(|(&id, record)| {
                let tick = *record.request.requested_at.get_or_insert(now);
                (tick, id)
            })
            .collect();
        keys.sort_unstable();
        keys.into_iter().map(|(_, id)| id).collect()
    }
}
