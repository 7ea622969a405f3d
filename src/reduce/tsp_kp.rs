//! TSP to fragile knapsack.
//!
//! Each edge becomes a unit-weight item whose value shrinks with the edge
//! weight, so the most valuable closed walk of `n` arcs is the cheapest
//! tour.

use tracing::debug;

use crate::knapsack::{FragileArc, Item, Knapsack, KnapsackFill};
use crate::tsp::Tsp;

/// Builds a fragile knapsack with one item `"i_j"` per finite edge,
/// weight 1, count 1 and value `1 - w(i, j) / total` where `total` sums
/// every finite edge. Capacity and fragile size are both `n`.
pub fn tsp_to_kp(tsp: &Tsp) -> Knapsack {
    let m = tsp.matrix();
    let n = m.size();
    let total = m.finite_sum();

    let mut items = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if m.has_edge(i, j) {
                let arc = FragileArc { start: i, finish: j };
                items.push(Item::new(arc.id(), 1, 1.0 - share(m.get(i, j), total), 1));
            }
        }
    }

    debug!(items = items.len(), size = n, "tsp reduced to fragile knapsack");
    Knapsack::fragile_unchecked(n as u32, items, n)
}

fn share(weight: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        weight / total
    }
}

/// Arc ids of a tour, closing arc included.
pub fn tour_to_arc_ids(tour: &[usize]) -> Vec<String> {
    let mut ids: Vec<String> = tour
        .windows(2)
        .map(|w| FragileArc { start: w[0], finish: w[1] }.id())
        .collect();
    if let (Some(&first), Some(&last)) = (tour.first(), tour.last()) {
        if first != last {
            ids.push(FragileArc { start: last, finish: first }.id());
        }
    }
    ids
}

/// Knapsack value of a tour in the reduced instance: `n - Σ w / total`.
pub fn tour_kp_cost(tsp: &Tsp, tour: &[usize]) -> f64 {
    let m = tsp.matrix();
    let total = m.finite_sum();
    let mut cost = m.size() as f64;
    for w in tour.windows(2) {
        cost -= share(m.get(w[0], w[1]), total);
    }
    if let (Some(&first), Some(&last)) = (tour.first(), tour.last()) {
        if first != last {
            cost -= share(m.get(last, first), total);
        }
    }
    cost
}

/// Follows the arcs of a fragile fill from vertex 0. Returns `None` for a
/// standard instance.
pub fn fill_to_tour(kp: &Knapsack, fill: &KnapsackFill) -> Option<Vec<usize>> {
    let arcs = kp.arcs()?;
    let mut tour = Vec::with_capacity(fill.picks.len() + 1);
    tour.push(0);
    tour.extend(fill.picks.iter().map(|&i| arcs[i].finish));
    Some(tour)
}
