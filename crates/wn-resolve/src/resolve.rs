//! Resolve outstanding records against a graph and write results back.

use tracing::debug;
use wn_core::{RequestId, Tick};
use wn_topology::NetworkGraph;

use crate::{notify, EventLog, PathBook, PathFailure, PathRecord, PathSearch, NO_PATH_COST};

/// Tally of one [`resolve_all`] pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Every record touched, in resolution order.
    pub order: Vec<RequestId>,
    pub assigned: usize,
    pub failed: usize,
}

/// Resolve a single record at tick `now`.
///
/// Always clears the sequence and stamps `last_update`; never panics on bad
/// input.  Events are not emitted here; see [`resolve_all`].
pub fn resolve_one<S: PathSearch + ?Sized>(
    search: &S,
    graph:  &NetworkGraph,
    record: &mut PathRecord,
    now:    Tick,
) {
    record.sequence.clear();
    record.result.last_update = now;
    let request = record.request;

    let (Some(from), Some(to)) = (graph.slot(request.from), graph.slot(request.to)) else {
        record.result.fail(PathFailure::MissingEndpoint, 0.0);
        return;
    };

    match search.search(graph, from, to) {
        None => {
            record.result.fail(PathFailure::Unreachable, NO_PATH_COST);
        }
        Some(found) if request.has_budget() && found.cost > request.max_cost => {
            record.result.fail(PathFailure::OverBudget, found.cost);
        }
        Some(found) => {
            record.sequence.extend(found.slots.iter().map(|&s| graph.id(s)));
            record.result.assign(found.cost, record.sequence.len() as u32);
        }
    }
}

/// Resolve every record in `book`, in ascending `(requested_at, RequestId)`
/// order, appending notifications for each one to `log`.
///
/// `log` is appended to, not cleared; the step driver owns its lifetime.
pub fn resolve_all<S: PathSearch + ?Sized>(
    search: &S,
    graph:  &NetworkGraph,
    book:   &mut PathBook,
    now:    Tick,
    log:    &mut EventLog,
) -> ResolveStats {
    let order = book.resolution_order(now);
    let mut stats = ResolveStats { order: Vec::with_capacity(order.len()), ..Default::default() };

    for id in order {
        let Some(record) = book.get_mut(id) else { continue };
        resolve_one(search, graph, record, now);

        if record.result.is_assigned() {
            stats.assigned += 1;
        } else {
            stats.failed += 1;
            debug!(
                request = id.0,
                from = record.request.from.0,
                to = record.request.to.0,
                cost = record.result.cost,
                reason = ?record.result.failure,
                "path_failed"
            );
        }
        notify(&record.request, now, log);
        stats.order.push(id);
    }
    stats
}
