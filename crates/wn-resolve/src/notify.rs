//! Interception / rendezvous notifications.
//!
//! A request can ask for its route to be announced.  Listeners such as raider
//! AI drain the [`EventLog`] each step; the log is rebuilt from scratch every
//! step, so anything not drained in the same step is gone.

use wn_core::{RequestFlags, Tick, WaypointId};

use crate::PathRequest;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Rendezvous,
    Interception,
}

/// One announced route.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterceptionEvent {
    pub from: WaypointId,
    pub to:   WaypointId,
    pub tick: Tick,
    pub kind: EventKind,
}

/// The per-step event buffer.
#[derive(Default, Clone, Debug)]
pub struct EventLog {
    events: Vec<InterceptionEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every event, keeping the allocation.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push(&mut self, event: InterceptionEvent) {
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &InterceptionEvent> + '_ {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[InterceptionEvent] {
        &self.events
    }

    /// Take all events out of the log.
    pub fn drain(&mut self) -> std::vec::Drain<'_, InterceptionEvent> {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Append the events `request` asks for: a rendezvous event for
/// `BROADCAST_RENDEZVOUS`, then an interception event for
/// `ALLOW_INTERCEPTION`.  Returns how many were appended.
pub fn notify(request: &PathRequest, now: Tick, log: &mut EventLog) -> usize {
    let mut emitted = 0;
    let wanted = [
        (RequestFlags::BROADCAST_RENDEZVOUS, EventKind::Rendezvous),
        (RequestFlags::ALLOW_INTERCEPTION, EventKind::Interception),
    ];
    for (flag, kind) in wanted {
        if request.flags.contains(flag) {
            log.push(InterceptionEvent { from: request.from, to: request.to, tick: now, kind });
            emitted += 1;
        }
    }
    emitted
}
