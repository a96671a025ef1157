//! Step observer trait for progress reporting and result collection.

use wn_core::{RequestId, Tick};
use wn_resolve::PathRecord;
use wn_topology::NetworkSnapshot;

use crate::StepReport;

/// Callbacks invoked by [`NetworkCore::step`][crate::NetworkCore::step].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — route cache invalidation
///
/// ```rust,ignore
/// struct CacheInvalidator { cache: RouteCache }
///
/// impl StepObserver for CacheInvalidator {
///     fn on_topology_changed(&mut self, _version: u64, _snapshot: &NetworkSnapshot) {
///         self.cache.clear();
///     }
/// }
/// ```
pub trait StepObserver {
    /// Called before any work in a simulated step.  Not called for skipped
    /// steps.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after collection when the snapshot version advanced.
    fn on_topology_changed(&mut self, _version: u64, _snapshot: &NetworkSnapshot) {}

    /// Called once per record, in resolution order, after all records of the
    /// step are resolved.
    fn on_resolved(&mut self, _id: RequestId, _record: &PathRecord) {}

    /// Called at the end of every step, skipped or not.
    fn on_step_end(&mut self, _report: &StepReport) {}
}

/// A [`StepObserver`] that does nothing.
pub struct NoopObserver;

impl StepObserver for NoopObserver {}
