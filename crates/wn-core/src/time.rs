//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter supplied by the host
//! simulation.  `SimClock` pairs the counter with the two switches the
//! network core cares about: a pause flag and the record/playback mode.
//! Deterministic work only happens while the clock is running in
//! [`ClockMode::Record`]; during playback or rewind the recorded state is
//! authoritative and must not be recomputed.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Step counter supplied by the host simulation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after this one.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Ticks elapsed from `earlier` to `self`; zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── ClockMode ─────────────────────────────────────────────────────────────────

/// Whether the host simulation is producing new state or replaying old state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockMode {
    /// Live, deterministic simulation.  The network core runs.
    #[default]
    Record,
    /// Playback or rewind of recorded state.  The network core is idle.
    Playback,
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The host clock as seen by the network core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by [`SimClock::advance`].
    pub current_tick: Tick,
    /// `true` while the host simulation is paused.
    pub paused: bool,
    pub mode: ClockMode,
}

impl SimClock {
    /// A running clock in record mode at `tick`.
    pub fn new(tick: Tick) -> Self {
        Self {
            current_tick: tick,
            paused:       false,
            mode:         ClockMode::Record,
        }
    }

    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn set_mode(&mut self, mode: ClockMode) {
        self.mode = mode;
    }

    /// `true` when the network core is allowed to do work this tick: the
    /// clock is running and recording.
    #[inline]
    pub fn should_simulate(&self) -> bool {
        !self.paused && self.mode == ClockMode::Record
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(Tick::ZERO)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match (self.paused, self.mode) {
            (true, _)                    => "paused",
            (false, ClockMode::Record)   => "recording",
            (false, ClockMode::Playback) => "playback",
        };
        write!(f, "{} ({state})", self.current_tick)
    }
}
