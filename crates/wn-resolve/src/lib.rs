//! `wn-resolve` — path requests, shortest-path resolution, and interception
//! notifications.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                           |
//! |-------------|--------------------------------------------------------------------|
//! | [`request`] | `PathRequest`, `PathResult`, `PathStatus`, `PathRecord`            |
//! | [`book`]    | `PathBook` — outstanding records keyed by `RequestId`              |
//! | [`search`]  | `PathSearch` trait, `LinearDijkstra`, `HeapDijkstra`               |
//! | [`resolve`] | `resolve_all` / `resolve_one` — writes results back into records   |
//! | [`notify`]  | `InterceptionEvent`, `EventKind`, `EventLog`, `notify`             |
//! | [`error`]   | `PathFailure` — why a result is `Failed`                           |
//!
//! # Resolution model
//!
//! Every step, every record in the book is resolved against the current
//! [`NetworkGraph`](wn_topology::NetworkGraph), in ascending
//! `(requested_at, RequestId)` order.  Failures are not errors: they are
//! written into the record as a `Failed` status with a distinguishing cost.
//!
//! | Failure           | Cost written              |
//! |-------------------|---------------------------|
//! | `MissingEndpoint` | `0.0`                     |
//! | `Unreachable`     | `-1.0` ([`NO_PATH_COST`]) |
//! | `OverBudget`      | the computed path cost    |

pub mod book;
pub mod error;
pub mod notify;
pub mod request;
pub mod resolve;
pub mod search;

#[cfg(test)]
mod tests;

pub use book::PathBook;
pub use error::PathFailure;
pub use notify::{notify, EventKind, EventLog, InterceptionEvent};
pub use request::{PathRecord, PathRequest, PathResult, PathStatus, NO_PATH_COST};
pub use resolve::{resolve_all, resolve_one, ResolveStats};
pub use search::{HeapDijkstra, LinearDijkstra, PathSearch, SearchOutcome};
