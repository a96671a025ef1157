//! `wn-core` — foundational types for the `waynet` mobility network.
//!
//! Every other `wn-*` crate depends on this one.  It has no `wn-*`
//! dependencies and only small external ones (`bitflags`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `WaypointId`, `EntityId`, `RequestId`                      |
//! | [`geo`]         | `Position` (3-D world coordinate)                          |
//! | [`time`]        | `Tick`, `SimClock`, `ClockMode`                            |
//! | [`flags`]       | Waypoint / highway / gateway / request flag sets           |
//! | [`config`]      | `CostModel` (maintenance penalty, gateway cost)            |
//! | [`error`]       | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod flags;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CostModel;
pub use error::{CoreError, CoreResult};
pub use flags::{GatewayFlags, HighwayFlags, RequestFlags, WaypointFlags};
pub use geo::Position;
pub use ids::{EntityId, RequestId, WaypointId};
pub use time::{ClockMode, SimClock, Tick};
