//! relay — a walkthrough of the waynet core on a two-district network.
//!
//! Each tick the script mutates the world (maintenance, outages, a moving
//! courier), steps the core, and prints what the resolver decided.
//!
//! Run with `RUST_LOG=debug` to see the per-phase trace from the crates.

mod network;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use wn_core::{
    ClockMode, CostModel, GatewayFlags, HighwayFlags, Position, RequestFlags, RequestId,
    SimClock, Tick, WaypointId,
};
use wn_resolve::{HeapDijkstra, PathBook, PathRecord, PathRequest, PathStatus};
use wn_sim::{CoreBuilder, StepObserver, StepReport};
use wn_topology::NetworkSnapshot;

use network::build_world;

// ── Constants ─────────────────────────────────────────────────────────────────

const TICKS: u64 = 6;

/// Requests with a budget fail when the cheapest path costs more.
const ROUTE_BUDGET: f32 = 1_500.0;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Printer {
    rebuilds: usize,
}

impl StepObserver for Printer {
    fn on_topology_changed(&mut self, version: u64, snapshot: &NetworkSnapshot) {
        self.rebuilds += 1;
        println!(
            "  topology v{version}: {} waypoints, {} highways, {} gateways",
            snapshot.waypoint_count(),
            snapshot.highway_count(),
            snapshot.gateway_count(),
        );
    }

    fn on_resolved(&mut self, id: RequestId, record: &PathRecord) {
        let r = &record.result;
        let route = match r.status {
            PathStatus::Assigned => record
                .sequence
                .iter()
                .map(|w| w.0.to_string())
                .collect::<Vec<_>>()
                .join(" → "),
            _ => match r.outcome() {
                Some(Err(reason)) => format!("failed: {reason}"),
                _ => "unresolved".to_owned(),
            },
        };
        println!(
            "  {id}: {} → {}  cost {:>8.2}  hops {:>2}  {route}",
            record.request.from, record.request.to, r.cost, r.hop_count,
        );
    }

    fn on_step_end(&mut self, report: &StepReport) {
        if report.skipped {
            println!("  (skipped)");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let (mut world, relay) = build_world()?;

    let mut requests = PathBook::new();
    let west_east = requests.submit(
        PathRequest::new(WaypointId(1), WaypointId(19))
            .with_flags(RequestFlags::ALLOW_INTERCEPTION)
            .requested_at(Tick::ZERO),
    )
    .context("request ids exhausted")?;
    requests.submit(
        PathRequest::new(WaypointId(50), WaypointId(13))
            .with_max_cost(ROUTE_BUDGET)
            .with_flags(RequestFlags::BROADCAST_RENDEZVOUS),
    )
    .context("request ids exhausted")?;
    requests
        .submit(PathRequest::new(WaypointId(3), WaypointId(99)))
        .context("request ids exhausted")?;

    let model = CostModel { maintenance_penalty: 2.0, ..CostModel::default() };
    let mut core = CoreBuilder::new(HeapDijkstra)
        .cost_model(model)
        .requests(requests)
        .build()?;

    info!(requests = core.requests().len(), ticks = TICKS, "relay starting");

    let mut clock = SimClock::new(Tick::ZERO);
    let mut printer = Printer::default();

    for _ in 0..TICKS {
        match clock.current_tick.0 {
            1 => world.set_highway_flags(relay.bridge, HighwayFlags::UNDER_MAINTENANCE)?,
            2 => world.set_gateway_flags(relay.gateway, GatewayFlags::OFFLINE)?,
            3 => {
                world.set_highway_flags(relay.bridge, HighwayFlags::BLOCKED)?;
                clock.set_mode(ClockMode::Playback);
            }
            4 => {
                clock.set_mode(ClockMode::Record);
                world.track_position(relay.courier, Position::new(850.0, 0.0, 0.0))?;
            }
            5 => world.set_gateway_flags(relay.gateway, GatewayFlags::empty())?,
            _ => {}
        }

        println!("{clock}");
        let report = core.step(&world, &clock, &mut printer);
        for event in core.drain_events() {
            println!("  event {:?}: {} → {} at {}", event.kind, event.from, event.to, event.tick);
        }
        info!(tick = report.tick.0, version = report.version, failed = report.failed, "tick done");
        clock.advance();
    }

    if let Some(near) = core.graph().nearest_waypoint(Position::new(820.0, 10.0, 0.0)) {
        println!("Nearest waypoint to the courier's new spot: {near}");
    }
    let final_cost = core.requests().get(west_east).map(|r| r.result.cost);
    println!(
        "Snapshot rebuilt {} times; final west→east cost {:?}",
        printer.rebuilds, final_cost,
    );
    Ok(())
}
