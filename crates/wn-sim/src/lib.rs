//! `wn-sim` — per-step orchestrator for the waynet mobility network.
//!
//! # Three-phase step
//!
//! ```text
//! step(world, clock):
//!   ⓪ Gate     — do nothing unless the clock is running in record mode.
//!   ① Collect  — TopologyCollector rebuilds the snapshot; version bumps
//!                only on content change.
//!   ② Resolve  — rebuild the NetworkGraph if the version moved, then
//!                resolve every PathBook record in (requested_at, id) order.
//!   ③ Notify   — event log cleared, then refilled from request flags
//!                during ②.
//! ```
//!
//! The phases run strictly in sequence on the calling thread.  The graph the
//! resolver reads is always the one derived from this step's snapshot.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                |
//! |-----------|-------------------------------------------------------|
//! | `fx-hash` | FxHash for the waypoint id → slot map.                |
//! | `serde`   | Serde derives across all `wn-*` value types.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wn_core::SimClock;
//! use wn_resolve::{LinearDijkstra, PathRequest};
//! use wn_sim::{CoreBuilder, NoopObserver};
//!
//! let mut core = CoreBuilder::new(LinearDijkstra).build()?;
//! let id = core.requests_mut().submit(PathRequest::new(from, to)).unwrap();
//! let report = core.step(&world, &clock, &mut NoopObserver);
//! let record = core.requests().get(id).unwrap();
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;


pub use builder::CoreBuilder;
pub use engine::{NetworkCore, StepReport};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, StepObserver};
