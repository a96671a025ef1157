//! `wn-world` — the world store as seen by the network core.
//!
//! The real host simulation keeps waypoints, highways and gateways as
//! entities in its own component storage.  The network core only ever reads
//! them, through the [`WorldStore`] trait.  [`MemoryWorld`] is a
//! self-contained implementation used by tests, demos and tools.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`record`]   | `WaypointRecord`, `HighwayRecord`, `GatewayRecord`           |
//! | [`store`]    | `WorldStore` trait, `MemoryWorld`                            |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                               |
//!
//! # Iteration order
//!
//! `WorldStore` makes **no** ordering promise.  `MemoryWorld` is backed by
//! hash maps, so its iteration order changes from process to process; any
//! consumer that needs reproducible output must impose its own order.

pub mod error;
pub mod record;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use record::{GatewayRecord, HighwayRecord, WaypointRecord};
pub use store::{MemoryWorld, WorldStore};
