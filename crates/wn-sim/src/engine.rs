//! The `NetworkCore` struct and its step.

use tracing::{debug, trace};

use wn_core::{CostModel, SimClock, Tick};
use wn_resolve::{resolve_all, EventLog, InterceptionEvent, PathBook, PathSearch};
use wn_topology::{NetworkGraph, NetworkSnapshot, TopologyCollector};
use wn_world::WorldStore;

use crate::{SimResult, StepObserver};

// ── StepReport ────────────────────────────────────────────────────────────────

/// Summary of one call to [`NetworkCore::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub tick: Tick,
    /// `true` when the clock was paused or in playback; nothing ran.
    pub skipped: bool,
    /// Snapshot version after the step.
    pub version: u64,
    pub topology_changed: bool,
    /// Records resolved this step.
    pub resolved: usize,
    pub assigned: usize,
    pub failed: usize,
    /// Events in the log after the step.
    pub events: usize,
}

impl StepReport {
    fn skipped(tick: Tick, version: u64) -> Self {
        Self {
            tick,
            skipped: true,
            version,
            topology_changed: false,
            resolved: 0,
            assigned: 0,
            failed: 0,
            events: 0,
        }
    }
}

// ── NetworkCore ───────────────────────────────────────────────────────────────

/// Owns the snapshot, the filtered graph, the outstanding requests and the
/// event log, and drives them through one step at a time.
///
/// Create via [`CoreBuilder`][crate::CoreBuilder].
pub struct NetworkCore<S: PathSearch> {
    /// The shortest-path engine.
    pub search: S,

    /// Always valid; replaced only through [`NetworkCore::set_cost_model`].
    cost_model: CostModel,

    collector: TopologyCollector,

    /// Graph of the current snapshot version under `cost_model`.  Rebuilt
    /// when either changes.
    graph: NetworkGraph,

    requests: PathBook,

    events: EventLog,
}

impl<S: PathSearch> NetworkCore<S> {
    pub(crate) fn new(search: S, cost_model: CostModel, requests: PathBook) -> Self {
        Self {
            cost_model,
            search,
            collector: TopologyCollector::new(),
            graph: NetworkGraph::empty(),
            requests,
            events: EventLog::new(),
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    pub fn snapshot(&self) -> &NetworkSnapshot {
        self.collector.snapshot()
    }

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    pub fn requests(&self) -> &PathBook {
        &self.requests
    }

    /// Submit and withdraw requests between steps.
    pub fn requests_mut(&mut self) -> &mut PathBook {
        &mut self.requests
    }

    /// This step's events.  Cleared at the start of the next simulated step.
    pub fn events(&self) -> &[InterceptionEvent] {
        self.events.as_slice()
    }

    /// Take this step's events.
    pub fn drain_events(&mut self) -> Vec<InterceptionEvent> {
        self.events.drain().collect()
    }

    /// Validate and install a new cost model.  The graph is rebuilt from the
    /// current snapshot immediately, so the next step resolves with the new
    /// costs even if the topology is unchanged.  On error the old model
    /// stays in place.
    pub fn set_cost_model(&mut self, model: CostModel) -> SimResult<()> {
        model.validate()?;
        if model != self.cost_model {
            debug!(
                maintenance_penalty = model.maintenance_penalty,
                gateway_cost = model.gateway_cost,
                "cost_model_changed"
            );
            self.cost_model = model;
            self.graph = NetworkGraph::build(self.collector.snapshot(), &self.cost_model);
        }
        Ok(())
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run one step at `clock.current_tick`.
    ///
    /// Skipped entirely, touching no state, when the clock is paused or in
    /// playback.
    pub fn step<W: WorldStore, O: StepObserver>(
        &mut self,
        world:    &W,
        clock:    &SimClock,
        observer: &mut O,
    ) -> StepReport {
        let now = clock.current_tick;
        if !clock.should_simulate() {
            trace!(tick = now.0, paused = clock.paused, mode = ?clock.mode, "step_skipped");
            let report = StepReport::skipped(now, self.snapshot().version());
            observer.on_step_end(&report);
            return report;
        }

        observer.on_step_start(now);

        // ── Phase 1: collect topology ─────────────────────────────────────
        let topology_changed = self.collector.collect(world, now);
        let snapshot = self.collector.snapshot();
        if topology_changed {
            observer.on_topology_changed(snapshot.version(), snapshot);
        }

        // ── Phase 2: resolve requests ─────────────────────────────────────
        //
        // The graph is a pure function of (snapshot, cost model).  Cost model
        // changes rebuild it eagerly in `set_cost_model`, so only the version
        // needs checking here.
        if self.graph.version() != snapshot.version() {
            self.graph = NetworkGraph::build(snapshot, &self.cost_model);
        }

        // ── Phase 3: notifications, refilled by resolve_all ───────────────
        self.events.clear();
        let stats = resolve_all(&self.search, &self.graph, &mut self.requests, now, &mut self.events);

        for &id in &stats.order {
            if let Some(record) = self.requests.get(id) {
                observer.on_resolved(id, record);
            }
        }

        let report = StepReport {
            tick: now,
            skipped: false,
            version: self.collector.snapshot().version(),
            topology_changed,
            resolved: stats.order.len(),
            assigned: stats.assigned,
            failed: stats.failed,
            events: self.events.len(),
        };
        debug!(
            tick = now.0,
            version = report.version,
            changed = topology_changed,
            resolved = report.resolved,
            assigned = report.assigned,
            failed = report.failed,
            events = report.events,
            "step_done"
        );
        observer.on_step_end(&report);
        report
    }

    /// Step `n` times, advancing `clock` after each step.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<W: WorldStore, O: StepObserver>(
        &mut self,
        world:    &W,
        clock:    &mut SimClock,
        n:        u64,
        observer: &mut O,
    ) -> Vec<StepReport> {
        let mut reports = Vec::with_capacity(n as usize);
        for _ in 0..n {
            reports.push(self.step(world, clock, observer));
            clock.advance();
        }
        reports
    }
}
