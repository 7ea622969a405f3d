//! Best-ratio heuristics for knapsack fills.

use crate::knapsack::{FragileState, Knapsack, KnapsackFill};

/// A fragile fill together with the fragility verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyFill {
    pub fill: KnapsackFill,
    /// Whether the walk ended in the terminal fragility state. Only such
    /// fills are valid fragile solutions.
    pub terminal: bool,
}

/// Repeatedly packs the item with the best value per unit weight.
///
/// Candidates are items with copies left that still fit. A later item with
/// an equal ratio displaces an earlier one; zero-value items still qualify.
/// Stops when nothing fits or the capacity is reached.
///
/// # Examples
///
/// ```
/// use np_exact::greedy::greedy_fill;
/// use np_exact::knapsack::{Item, Knapsack};
///
/// let kp = Knapsack::new(7, vec![
///     Item::new("a", 2, 5.0, 3),
///     Item::new("b", 3, 6.0, 1),
/// ])
/// .unwrap();
/// let fill = greedy_fill(&kp);
/// assert_eq!(fill.ids, vec!["a", "a", "a"]);
/// assert_eq!(fill.cost, 15.0);
/// ```
pub fn greedy_fill(knapsack: &Knapsack) -> KnapsackFill {
    let items = knapsack.items();
    let max_weight = u64::from(knapsack.max_weight());
    let mut remaining: Vec<u32> = items.iter().map(|item| item.count).collect();
    let mut weight = 0u64;
    let mut picks = Vec::new();

    while weight < max_weight {
        let mut best: Option<(usize, f64)> = None;
        for (i, item) in items.iter().enumerate() {
            if remaining[i] == 0 || weight + u64::from(item.weight) > max_weight {
                continue;
            }
            let ratio = item.ratio();
            if best.map_or(true, |(_, r)| ratio >= r) {
                best = Some((i, ratio));
            }
        }
        let Some((i, _)) = best else { break };
        remaining[i] -= 1;
        weight += u64::from(items[i].weight);
        picks.push(i);
    }

    KnapsackFill::from_picks(knapsack, picks)
}

/// Best-ratio walk over a fragile instance.
///
/// Each step only considers arcs leaving the current vertex (0 at first).
/// Before the last step arcs back into 0 and arcs into an already passed
/// vertex are skipped; the last step must return to 0. The walk stops
/// after `fragile_size` steps. Returns `None` for a standard instance.
pub fn greedy_fragile_fill(knapsack: &Knapsack) -> Option<GreedyFill> {
    let arcs = knapsack.arcs()?;
    let size = knapsack.fragile_size()?;
    let items = knapsack.items();
    let max_weight = u64::from(knapsack.max_weight());

    let mut state = FragileState::new(size);
    let mut remaining: Vec<u32> = items.iter().map(|item| item.count).collect();
    let mut weight = 0u64;
    let mut picks = Vec::new();
    let mut position = 0;

    while weight < max_weight && picks.len() < size {
        let last_step = picks.len() + 1 == size;
        let mut best: Option<(usize, f64)> = None;
        for (i, (item, arc)) in items.iter().zip(arcs).enumerate() {
            if arc.start != position {
                continue;
            }
            if last_step != (arc.finish == 0) {
                continue;
            }
            if !last_step && state.counter(arc.finish) == 2 {
                continue;
            }
            if remaining[i] == 0 || weight + u64::from(item.weight) > max_weight {
                continue;
            }
            let ratio = item.ratio();
            if best.map_or(true, |(_, r)| ratio >= r) {
                best = Some((i, ratio));
            }
        }
        let Some((i, _)) = best else { break };
        remaining[i] -= 1;
        weight += u64::from(items[i].weight);
        state.enter(arcs[i]);
        position = arcs[i].finish;
        picks.push(i);
    }

    Some(GreedyFill {
        fill: KnapsackFill::from_picks(knapsack, picks),
        terminal: state.is_terminal(),
    })
}
