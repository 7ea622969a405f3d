//! Knapsack to TSP.
//!
//! Vertices `0..=W` form a capacity line: an item of weight `w` is an edge
//! `j -> j + w` priced `w² / cost`. Vertices `W+1..2W-1` plus zero-weight
//! return edges let a tour walk back to 0 from wherever the packed weight
//! ended.

use tracing::debug;

use crate::knapsack::{Item, Knapsack, KnapsackFill};
use crate::matrix::WeightMatrix;
use crate::tsp::Tsp;

/// Builds the `2W - 1` vertex TSP instance of a knapsack with capacity `W`.
///
/// Only one item per distinct weight is kept: the most valuable one, the
/// first in weight order on equal value. Counts are ignored.
pub fn kp_to_tsp(kp: &Knapsack) -> Tsp {
    let capacity = kp.max_weight() as usize;
    let n = 2 * capacity - 1;
    let items = distinct_weights(kp.items());

    let mut matrix = WeightMatrix::disconnected(n);
    for j in 0..capacity {
        for item in &items {
            let w = item.weight as usize;
            let to = j + w;
            if to <= capacity && to < n {
                matrix.set(j, to, (w * w) as f64 / item.cost);
            }
        }
    }
    for j in capacity..n {
        matrix.set(j, n - j, 0.0);
        if j == n - 1 {
            matrix.set(j, 0, 0.0);
        } else {
            matrix.set(j, j + 1, 0.0);
        }
    }
    for j in (1..capacity).rev() {
        if j == 1 {
            matrix.set(j, 0, 0.0);
        } else {
            matrix.set(j, 2 * capacity - j, 0.0);
        }
    }

    debug!(
        items = items.len(),
        vertices = n,
        "knapsack reduced to tsp"
    );
    Tsp::from_matrix(matrix)
}

/// Items by weight descending with equal weights collapsed to the most
/// valuable one.
fn distinct_weights(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| b.weight.cmp(&a.weight));

    let mut kept: Vec<&Item> = Vec::with_capacity(sorted.len());
    for item in sorted {
        match kept.last_mut() {
            Some(last) if last.weight == item.weight => {
                if item.cost > last.cost {
                    *last = item;
                }
            }
            _ => kept.push(item),
        }
    }
    kept
}

/// Reads item weights off a tour of the reduced instance: the positive
/// steps along the capacity line, up to the first step that does not
/// advance.
pub fn tour_to_item_weights(tour: &[usize]) -> Vec<u32> {
    let mut weights = Vec::new();
    for i in 0..(tour.len() + 1) / 2 {
        let Some(&next) = tour.get(i + 1) else { break };
        if next <= tour[i] {
            break;
        }
        weights.push((next - tour[i]) as u32);
    }
    weights
}

/// What a knapsack fill costs as a path in the reduced instance.
pub fn fill_tsp_cost(kp: &Knapsack, fill: &KnapsackFill) -> f64 {
    fill.picks
        .iter()
        .map(|&i| {
            let item = &kp.items()[i];
            let w = f64::from(item.weight);
            w * w / item.cost
        })
        .sum()
}
