//! Unit tests for wn-resolve.

use wn_core::{CostModel, Position, Tick, WaypointId};
use wn_topology::{NetworkGraph, TopologyCollector};
use wn_world::{GatewayRecord, HighwayRecord, MemoryWorld, WaypointRecord};

use crate::{resolve_all, EventLog, LinearDijkstra, PathBook, PathRequest};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn wp(id: u32, x: f32) -> WaypointRecord {
    WaypointRecord::new(WaypointId(id), Position::new(x, 0.0, 0.0))
}

fn hw(from: u32, to: u32, cost: f32) -> HighwayRecord {
    HighwayRecord::new(WaypointId(from), WaypointId(to), cost)
}

fn gw(from: u32, to: u32) -> GatewayRecord {
    GatewayRecord::new(WaypointId(from), WaypointId(to))
}

fn world_with(ids: &[u32]) -> MemoryWorld {
    let mut w = MemoryWorld::new();
    for &id in ids {
        w.spawn_waypoint(wp(id, id as f32)).unwrap();
    }
    w
}

fn graph_of(world: &MemoryWorld) -> NetworkGraph {
    let mut c = TopologyCollector::new();
    c.collect(world, Tick(1));
    NetworkGraph::build(c.snapshot(), &CostModel::default())
}

/// Waypoints 1, 2, 3 at x = 0, 1, 2; highways 1→2 and 2→3 at cost 1.
fn scenario_a_world() -> MemoryWorld {
    let mut w = MemoryWorld::new();
    w.spawn_waypoint(wp(1, 0.0)).unwrap();
    w.spawn_waypoint(wp(2, 1.0)).unwrap();
    w.spawn_waypoint(wp(3, 2.0)).unwrap();
    w.spawn_highway(hw(1, 2, 1.0)).unwrap();
    w.spawn_highway(hw(2, 3, 1.0)).unwrap();
    w
}

fn req(from: u32, to: u32) -> PathRequest {
    PathRequest::new(WaypointId(from), WaypointId(to))
}

fn ids(seq: &[WaypointId]) -> Vec<u32> {
    seq.iter().map(|w| w.0).collect()
}

/// Resolve one request against `world` at tick 5 and return the record.
fn resolve_single(world: &MemoryWorld, request: PathRequest) -> crate::PathRecord {
    let graph = graph_of(world);
    let mut book = PathBook::new();
    let id = book.submit(request).unwrap();
    resolve_all(&LinearDijkstra, &graph, &mut book, Tick(5), &mut EventLog::new());
    book.get(id).unwrap().clone()
}

// ── Concrete scenarios ────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use wn_core::HighwayFlags;

    use super::*;
    use crate::{PathFailure, PathStatus};

    #[test]
    fn a_reachable_no_penalty() {
        let r = resolve_single(&scenario_a_world(), req(1, 3));
        assert_eq!(r.result.status, PathStatus::Assigned);
        assert_eq!(r.result.cost, 2.0);
        assert_eq!(r.result.hop_count, 3);
        assert_eq!(ids(&r.sequence), vec![1, 2, 3]);
        assert_eq!(r.result.last_update, Tick(5));
    }

    #[test]
    fn b_disconnected() {
        let r = resolve_single(&world_with(&[1, 2]), req(1, 2));
        assert_eq!(r.result.status, PathStatus::Failed);
        assert_eq!(r.result.cost, -1.0);
        assert_eq!(r.result.hop_count, 0);
        assert!(r.sequence.is_empty());
        assert_eq!(r.result.failure, Some(PathFailure::Unreachable));
    }

    #[test]
    fn c_gateway_beats_highway() {
        let mut w = world_with(&[1, 2]);
        w.spawn_highway(hw(1, 2, 10.0)).unwrap();
        w.spawn_gateway(gw(1, 2)).unwrap();
        let r = resolve_single(&w, req(1, 2));
        assert_eq!(r.result.status, PathStatus::Assigned);
        assert!((r.result.cost - 0.01).abs() < 1e-6, "got {}", r.result.cost);
        assert_eq!(ids(&r.sequence), vec![1, 2]);
    }

    #[test]
    fn d_maintenance_penalty() {
        let mut w = world_with(&[1, 2]);
        w.spawn_highway(hw(1, 2, 4.0).with_flags(HighwayFlags::UNDER_MAINTENANCE)).unwrap();
        let r = resolve_single(&w, req(1, 2));
        assert_eq!(r.result.status, PathStatus::Assigned);
        assert_eq!(r.result.cost, 5.0);
        assert_eq!(ids(&r.sequence), vec![1, 2]);
    }

    #[test]
    fn e_budget_rejection_keeps_cost() {
        let r = resolve_single(&scenario_a_world(), req(1, 3).with_max_cost(1.0));
        assert_eq!(r.result.status, PathStatus::Failed);
        assert_eq!(r.result.cost, 2.0);
        assert_eq!(r.result.hop_count, 0);
        assert!(r.sequence.is_empty());
        assert_eq!(r.result.outcome(), Some(Err(PathFailure::OverBudget)));
    }
}

// ── Failure and edge cases ────────────────────────────────────────────────────

#[cfg(test)]
mod edge_cases {
    use wn_core::{GatewayFlags, HighwayFlags, WaypointFlags};

    use super::*;
    use crate::{PathFailure, PathStatus};

    #[test]
    fn negative_gateway_cost_never_yields_negative_path() {
        let mut w = world_with(&[1, 2]);
        w.spawn_gateway(gw(1, 2)).unwrap();
        let mut c = TopologyCollector::new();
        c.collect(&w, Tick(1));
        let model = CostModel { gateway_cost: -5.0, ..CostModel::default() };
        let graph = NetworkGraph::build(c.snapshot(), &model);

        let mut book = PathBook::new();
        let id = book.submit(req(1, 2)).unwrap();
        resolve_all(&LinearDijkstra, &graph, &mut book, Tick(1), &mut EventLog::new());
        let r = book.get(id).unwrap();
        assert_eq!(r.result.status, PathStatus::Assigned);
        assert_eq!(r.result.cost, 0.0);
        assert_eq!(ids(&r.sequence), vec![1, 2]);
    }

    #[test]
    fn missing_endpoint_writes_zero_cost() {
        let r = resolve_single(&scenario_a_world(), req(1, 42));
        assert_eq!(r.result.status, PathStatus::Failed);
        assert_eq!(r.result.cost, 0.0);
        assert_eq!(r.result.failure, Some(PathFailure::MissingEndpoint));
        assert!(r.sequence.is_empty());
    }

    #[test]
    fn disabled_endpoint_counts_as_missing() {
        let mut w = scenario_a_world();
        let e = w.waypoint_entity(WaypointId(3)).unwrap();
        w.set_waypoint_flags(e, WaypointFlags::DISABLED).unwrap();
        let r = resolve_single(&w, req(1, 3));
        assert_eq!(r.result.failure, Some(PathFailure::MissingEndpoint));
    }

    #[test]
    fn budget_exactly_met_is_assigned() {
        let r = resolve_single(&scenario_a_world(), req(1, 3).with_max_cost(2.0));
        assert_eq!(r.result.status, PathStatus::Assigned);
    }

    #[test]
    fn same_origin_and_destination() {
        let r = resolve_single(&scenario_a_world(), req(2, 2));
        assert_eq!(r.result.status, PathStatus::Assigned);
        assert_eq!(r.result.cost, 0.0);
        assert_eq!(r.result.hop_count, 1);
        assert_eq!(ids(&r.sequence), vec![2]);
    }

    #[test]
    fn blocked_highway_forces_detour() {
        let mut w = world_with(&[1, 2, 3]);
        w.spawn_highway(hw(1, 3, 1.0).with_flags(HighwayFlags::BLOCKED)).unwrap();
        w.spawn_highway(hw(1, 2, 5.0)).unwrap();
        w.spawn_highway(hw(2, 3, 5.0)).unwrap();
        let r = resolve_single(&w, req(1, 3));
        assert_eq!(ids(&r.sequence), vec![1, 2, 3]);
        assert_eq!(r.result.cost, 10.0);
    }

    #[test]
    fn offline_and_restricted_gateways_never_used() {
        let mut w = world_with(&[1, 2, 3]);
        w.spawn_gateway(gw(1, 3).with_flags(GatewayFlags::OFFLINE)).unwrap();
        w.spawn_gateway(gw(3, 1).with_flags(GatewayFlags::RESTRICTED)).unwrap();
        w.spawn_highway(hw(1, 2, 3.0)).unwrap();
        w.spawn_highway(hw(2, 3, 3.0)).unwrap();
        let r = resolve_single(&w, req(1, 3));
        assert_eq!(ids(&r.sequence), vec![1, 2, 3]);
    }

    #[test]
    fn disabled_waypoint_is_routed_around() {
        let mut w = world_with(&[1, 2, 3, 4]);
        w.spawn_highway(hw(1, 2, 1.0)).unwrap();
        w.spawn_highway(hw(2, 4, 1.0)).unwrap();
        w.spawn_highway(hw(1, 3, 4.0)).unwrap();
        w.spawn_highway(hw(3, 4, 4.0)).unwrap();
        let e = w.waypoint_entity(WaypointId(2)).unwrap();
        w.set_waypoint_flags(e, WaypointFlags::DISABLED).unwrap();
        let r = resolve_single(&w, req(1, 4));
        assert_eq!(ids(&r.sequence), vec![1, 3, 4]);
    }

    #[test]
    fn highways_are_symmetric() {
        let r = resolve_single(&scenario_a_world(), req(3, 1));
        assert_eq!(ids(&r.sequence), vec![3, 2, 1]);
    }

    #[test]
    fn sequence_rewritten_on_failure() {
        let mut w = scenario_a_world();
        let graph = graph_of(&w);
        let mut book = PathBook::new();
        let id = book.submit(req(1, 3)).unwrap();
        resolve_all(&LinearDijkstra, &graph, &mut book, Tick(1), &mut EventLog::new());
        assert_eq!(book.get(id).unwrap().sequence.len(), 3);

        let e = w.waypoint_entity(WaypointId(2)).unwrap();
        w.despawn(e).unwrap();
        let graph = graph_of(&w);
        resolve_all(&LinearDijkstra, &graph, &mut book, Tick(2), &mut EventLog::new());
        let r = book.get(id).unwrap();
        assert!(r.sequence.is_empty());
        assert_eq!(r.result.hop_count, 0);
        assert_eq!(r.result.last_update, Tick(2));
    }

    #[test]
    fn unresolved_outcome_is_none() {
        let mut book = PathBook::new();
        let id = book.submit(req(1, 2)).unwrap();
        assert_eq!(book.get(id).unwrap().result.outcome(), None);
    }
}

// ── Ordering and determinism ──────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn requests_resolved_by_tick_then_id() {
        let graph = graph_of(&scenario_a_world());
        let mut book = PathBook::new();
        let late  = book.submit(req(1, 3).requested_at(Tick(9))).unwrap();
        let unset = book.submit(req(1, 2)).unwrap();
        let early = book.submit(req(2, 3).requested_at(Tick(2))).unwrap();
        let also_early = book.submit(req(3, 1).requested_at(Tick(2))).unwrap();

        let stats = resolve_all(&LinearDijkstra, &graph, &mut book, Tick(5), &mut EventLog::new());
        assert_eq!(stats.order, vec![early, also_early, unset, late]);
        assert_eq!(stats.assigned, 4);
        assert_eq!(stats.failed, 0);
    }

    #[test]
    fn unset_tick_stamped_once() {
        let graph = graph_of(&scenario_a_world());
        let mut book = PathBook::new();
        let id = book.submit(req(1, 3)).unwrap();
        resolve_all(&LinearDijkstra, &graph, &mut book, Tick(5), &mut EventLog::new());
        resolve_all(&LinearDijkstra, &graph, &mut book, Tick(6), &mut EventLog::new());
        let r = book.get(id).unwrap();
        assert_eq!(r.request.requested_at, Some(Tick(5)));
        assert_eq!(r.result.last_update, Tick(6));
    }

    #[test]
    fn request_ids_stop_before_invalid() {
        let mut book = PathBook::new();
        book.next_id = u32::MAX - 1;
        let last = book.submit(req(1, 3)).unwrap();
        assert!(last.is_valid());
        assert_eq!(book.submit(req(3, 1)), None);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn withdrawn_request_skipped() {
        let graph = graph_of(&scenario_a_world());
        let mut book = PathBook::new();
        let a = book.submit(req(1, 3)).unwrap();
        let b = book.submit(req(3, 1)).unwrap();
        book.withdraw(a).unwrap();
        let stats = resolve_all(&LinearDijkstra, &graph, &mut book, Tick(1), &mut EventLog::new());
        assert_eq!(stats.order, vec![b]);
        assert!(book.get(a).is_none());
    }

    #[test]
    fn equal_cost_ties_follow_insertion_order_not_id() {
        // Arcs out of 1 are (1→5) from highway (1,5), then (1→2) from the
        // reverse of highway (2,1).  5 enters the open set first and wins.
        let mut w = world_with(&[1, 2, 5, 9]);
        w.spawn_highway(hw(2, 1, 1.0)).unwrap();
        w.spawn_highway(hw(1, 5, 1.0)).unwrap();
        w.spawn_highway(hw(2, 9, 1.0)).unwrap();
        w.spawn_highway(hw(5, 9, 1.0)).unwrap();
        let r = resolve_single(&w, req(1, 9));
        assert_eq!(ids(&r.sequence), vec![1, 5, 9]);
        assert_eq!(r.result.cost, 2.0);
    }

    #[test]
    fn shuffled_world_gives_identical_results() {
        use rand::rngs::SmallRng;
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let mut edges: Vec<(u32, u32, f32)> = Vec::new();
        for i in 1..30u32 {
            edges.push((i, i + 1, 1.0 + (i % 3) as f32));
            if i + 5 <= 30 {
                edges.push((i, i + 5, 4.0));
            }
        }
        let mut nodes: Vec<u32> = (1..=30).collect();

        let mut outputs = Vec::new();
        for seed in [7u64, 8, 9] {
            let mut rng = SmallRng::seed_from_u64(seed);
            nodes.shuffle(&mut rng);
            edges.shuffle(&mut rng);

            let mut w = MemoryWorld::new();
            for &n in &nodes {
                w.spawn_waypoint(wp(n, n as f32)).unwrap();
            }
            for &(a, b, c) in &edges {
                w.spawn_highway(hw(a, b, c)).unwrap();
            }
            let graph = graph_of(&w);
            let mut book = PathBook::new();
            for (a, b) in [(1, 30), (30, 1), (7, 22), (3, 3), (12, 29)] {
                book.submit(req(a, b).requested_at(Tick(1))).unwrap();
            }
            resolve_all(&LinearDijkstra, &graph, &mut book, Tick(2), &mut EventLog::new());
            let records: Vec<_> = book.iter().map(|(_, r)| r.clone()).collect();
            outputs.push(records);
        }
        assert_eq!(outputs[0], outputs[1]);
        assert_eq!(outputs[1], outputs[2]);
    }
}

// ── Search implementations ────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::{HeapDijkstra, PathSearch};

    /// Random graph with small integer costs so equal-cost ties are common.
    fn random_world(seed: u64, nodes: u32, edges: usize) -> MemoryWorld {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut w = world_with(&(1..=nodes).collect::<Vec<_>>());
        for _ in 0..edges {
            let a = rng.gen_range(1..=nodes);
            let b = rng.gen_range(1..=nodes);
            if rng.gen_bool(0.2) {
                w.spawn_gateway(gw(a, b)).unwrap();
            } else {
                w.spawn_highway(hw(a, b, rng.gen_range(1..=3) as f32)).unwrap();
            }
        }
        w
    }

    #[test]
    fn heap_and_linear_agree_on_every_pair() {
        for seed in 0..4 {
            let graph = graph_of(&random_world(seed, 25, 45));
            for from in 0..graph.node_count() {
                for to in 0..graph.node_count() {
                    let lin = LinearDijkstra.search(&graph, from, to);
                    let heap = HeapDijkstra.search(&graph, from, to);
                    assert_eq!(lin, heap, "seed {seed}: {from} → {to}");
                }
            }
        }
    }

    #[test]
    fn resolved_paths_walk_live_arcs() {
        let graph = graph_of(&random_world(11, 30, 60));
        let mut book = PathBook::new();
        for a in (1..=30).step_by(3) {
            for b in (2..=30).step_by(4) {
                book.submit(req(a, b)).unwrap();
            }
        }
        resolve_all(&HeapDijkstra, &graph, &mut book, Tick(1), &mut EventLog::new());

        for (_, r) in book.iter() {
            assert_eq!(r.result.hop_count as usize, r.sequence.len());
            if !r.result.is_assigned() {
                continue;
            }
            assert_eq!(r.sequence.first(), Some(&r.request.from));
            assert_eq!(r.sequence.last(), Some(&r.request.to));
            let mut total = 0.0f32;
            for pair in r.sequence.windows(2) {
                let cost = graph.arc_cost_between(pair[0], pair[1]);
                assert!(cost.is_some(), "{} → {} is not a live arc", pair[0], pair[1]);
                total += cost.unwrap();
            }
            assert!((total - r.result.cost).abs() < 1e-4);
        }
    }

    #[test]
    fn unreachable_is_none() {
        let graph = graph_of(&world_with(&[1, 2]));
        assert!(LinearDijkstra.search(&graph, 0, 1).is_none());
        assert!(HeapDijkstra.search(&graph, 0, 1).is_none());
    }
}

// ── Notifications ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod notifications {
    use wn_core::RequestFlags;

    use super::*;
    use crate::{notify, EventKind, InterceptionEvent};

    #[test]
    fn no_flags_no_events() {
        let mut log = EventLog::new();
        assert_eq!(notify(&req(1, 2), Tick(3), &mut log), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn both_flags_emit_rendezvous_then_interception() {
        let mut log = EventLog::new();
        let r = req(1, 2).with_flags(RequestFlags::BROADCAST_RENDEZVOUS | RequestFlags::ALLOW_INTERCEPTION);
        assert_eq!(notify(&r, Tick(3), &mut log), 2);
        let kinds: Vec<_> = log.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Rendezvous, EventKind::Interception]);
        assert_eq!(
            log.as_slice()[0],
            InterceptionEvent { from: WaypointId(1), to: WaypointId(2), tick: Tick(3), kind: EventKind::Rendezvous },
        );
    }

    #[test]
    fn failed_requests_still_notify() {
        let graph = graph_of(&world_with(&[1, 2]));
        let mut book = PathBook::new();
        book.submit(req(1, 2).with_flags(RequestFlags::ALLOW_INTERCEPTION)).unwrap();
        let mut log = EventLog::new();
        let stats = resolve_all(&LinearDijkstra, &graph, &mut book, Tick(1), &mut log);
        assert_eq!(stats.failed, 1);
        assert_eq!(log.len(), 1);
        assert_eq!(log.as_slice()[0].kind, EventKind::Interception);
    }

    #[test]
    fn events_follow_resolution_order() {
        let graph = graph_of(&scenario_a_world());
        let mut book = PathBook::new();
        book.submit(req(3, 1).requested_at(Tick(4)).with_flags(RequestFlags::BROADCAST_RENDEZVOUS)).unwrap();
        book.submit(req(1, 3).requested_at(Tick(1)).with_flags(RequestFlags::BROADCAST_RENDEZVOUS)).unwrap();
        let mut log = EventLog::new();
        resolve_all(&LinearDijkstra, &graph, &mut book, Tick(5), &mut log);
        let froms: Vec<u32> = log.drain().map(|e| e.from.0).collect();
        assert_eq!(froms, vec![1, 3]);
        assert!(log.is_empty());
    }
}
