//! Single-source shortest-path search over a [`NetworkGraph`].
//!
//! # Pluggability
//!
//! The resolver calls search through the [`PathSearch`] trait.  Two
//! implementations ship here and produce identical output:
//!
//! | Search           | Open-set extraction           | Suits                         |
//! |------------------|-------------------------------|-------------------------------|
//! | `LinearDijkstra` | linear scan, O(V²)            | tens to low hundreds of nodes |
//! | `HeapDijkstra`   | binary heap, O(E log V)       | larger graphs                 |
//!
//! # Tie-break contract
//!
//! Among open nodes with equal tentative distance, the one that entered the
//! open set **first** is extracted first.  A node keeps its entry position
//! when its distance improves.  Any replacement search must honour the same
//! rule or recorded replays will diverge.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use wn_topology::NetworkGraph;

/// Marks a slot with no predecessor.
const NO_SLOT: usize = usize::MAX;

// ── SearchOutcome ─────────────────────────────────────────────────────────────

/// A found path in graph slots.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Total path cost.
    pub cost: f32,
    /// Slots from origin to destination inclusive.
    pub slots: Vec<usize>,
}

// ── PathSearch trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be deterministic and follow the tie-break contract
/// in the module docs.  `Send + Sync` so a search can be shared with worker
/// threads that read the same immutable graph.
pub trait PathSearch: Send + Sync {
    /// Shortest path from slot `from` to slot `to`, or `None` if `to` cannot
    /// be reached.  `from == to` yields a single-slot path of cost 0.
    fn search(&self, graph: &NetworkGraph, from: usize, to: usize) -> Option<SearchOutcome>;
}

// ── LinearDijkstra ────────────────────────────────────────────────────────────

/// Dijkstra with an insertion-ordered open list and linear extraction.
pub struct LinearDijkstra;

impl PathSearch for LinearDijkstra {
    fn search(&self, graph: &NetworkGraph, from: usize, to: usize) -> Option<SearchOutcome> {
        let n = graph.node_count();
        let mut dist   = vec![f32::INFINITY; n];
        let mut prev   = vec![NO_SLOT; n];
        let mut closed = vec![false; n];
        let mut queued = vec![false; n];

        dist[from]   = 0.0;
        queued[from] = true;
        let mut open = vec![from];

        while !open.is_empty() {
            // Strict `<` keeps the earliest-inserted node on ties.
            let mut best = 0;
            for i in 1..open.len() {
                if dist[open[i]] < dist[open[best]] {
                    best = i;
                }
            }
            let node = open.remove(best);
            closed[node] = true;
            if node == to {
                break;
            }

            for (next, cost) in graph.arcs(node) {
                if closed[next] {
                    continue;
                }
                let candidate = dist[node] + cost;
                if candidate < dist[next] {
                    dist[next] = candidate;
                    prev[next] = node;
                    if !queued[next] {
                        queued[next] = true;
                        open.push(next);
                    }
                }
            }
        }

        finish(&dist, &prev, from, to)
    }
}

// ── HeapDijkstra ──────────────────────────────────────────────────────────────

/// Heap key: distance under `total_cmp`, then first-insertion sequence.
#[derive(Copy, Clone, PartialEq)]
struct OpenKey {
    dist:  f32,
    order: u32,
}

impl Eq for OpenKey {}

impl Ord for OpenKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.order.cmp(&other.order))
    }
}

impl PartialOrd for OpenKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra with a binary heap.
///
/// Each slot is tagged with the sequence number of its first insertion into
/// the open set, and heap entries order by `(distance, sequence)`.  That is
/// exactly the order [`LinearDijkstra`] extracts in, so the two always agree.
pub struct HeapDijkstra;

impl PathSearch for HeapDijkstra {
    fn search(&self, graph: &NetworkGraph, from: usize, to: usize) -> Option<SearchOutcome> {
        let n = graph.node_count();
        let mut dist   = vec![f32::INFINITY; n];
        let mut prev   = vec![NO_SLOT; n];
        let mut closed = vec![false; n];
        let mut order  = vec![u32::MAX; n];
        let mut next_order = 0u32;

        dist[from]  = 0.0;
        order[from] = next_order;
        next_order += 1;

        let mut heap: BinaryHeap<Reverse<(OpenKey, usize)>> = BinaryHeap::new();
        heap.push(Reverse((OpenKey { dist: 0.0, order: order[from] }, from)));

        while let Some(Reverse((key, node))) = heap.pop() {
            // Skip stale entries.
            if closed[node] || key.dist > dist[node] {
                continue;
            }
            closed[node] = true;
            if node == to {
                break;
            }

            for (next, cost) in graph.arcs(node) {
                if closed[next] {
                    continue;
                }
                let candidate = dist[node] + cost;
                if candidate < dist[next] {
                    dist[next] = candidate;
                    prev[next] = node;
                    if order[next] == u32::MAX {
                        order[next] = next_order;
                        next_order += 1;
                    }
                    heap.push(Reverse((OpenKey { dist: candidate, order: order[next] }, next)));
                }
            }
        }

        finish(&dist, &prev, from, to)
    }
}

// ── Shared reconstruction ─────────────────────────────────────────────────────

fn finish(dist: &[f32], prev: &[usize], from: usize, to: usize) -> Option<SearchOutcome> {
    let cost = dist[to];
    if !cost.is_finite() {
        return None;
    }

    let mut slots = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur];
        if cur == NO_SLOT {
            return None;
        }
        slots.push(cur);
    }
    slots.reverse();
    Some(SearchOutcome { cost, slots })
}
