//! `wn-topology` — the versioned network snapshot and its filtered adjacency.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`entry`]     | Flattened `WaypointEntry` / `HighwayEntry` / `GatewayEntry`    |
//! | [`snapshot`]  | `NetworkSnapshot` — sorted entries plus version counter        |
//! | [`collector`] | `TopologyCollector` — per-step rebuild with change detection   |
//! | [`graph`]     | `NetworkGraph` — reachable slots, CSR arcs, R-tree             |
//!
//! # Data flow
//!
//! ```text
//! WorldStore ──collect()──▶ NetworkSnapshot (version N)
//!                                 │
//!                                 └──NetworkGraph::build()──▶ CSR adjacency
//! ```
//!
//! The snapshot version only moves when entry content changes, so a
//! consumer holding a `NetworkGraph` can compare versions and skip the
//! rebuild entirely.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                       |
//! |-----------|--------------------------------------------------------------|
//! | `fx-hash` | FxHash for the waypoint id → slot map.                        |
//! | `serde`   | Derives `Serialize`/`Deserialize` on entries and snapshot.    |

pub mod collector;
pub mod entry;
pub mod graph;
pub mod snapshot;


pub use collector::TopologyCollector;
pub use entry::{GatewayEntry, HighwayEntry, WaypointEntry};
pub use graph::NetworkGraph;
pub use snapshot::NetworkSnapshot;
