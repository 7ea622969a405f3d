//! Fragility bookkeeping and the fragile search space.
//!
//! Every vertex carries a signed counter. Vertex 0 starts at `-1`, the
//! others at `1`. Leaving a vertex adds 2, entering one subtracts 1, so a
//! walk that leaves 0 once, passes through every other vertex exactly once
//! and returns to 0 ends at `[0, 2, 2, ..]`.

use super::types::{FragileArc, Item, Knapsack};
use crate::search::{Backtrack, Sense};

/// Per-vertex fragility counters.
///
/// # Examples
///
/// ```
/// use np_exact::knapsack::{FragileArc, FragileState};
///
/// let mut state = FragileState::new(2);
/// state.enter(FragileArc { start: 0, finish: 1 });
/// state.enter(FragileArc { start: 1, finish: 0 });
/// assert!(state.is_terminal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragileState {
    counters: Vec<i64>,
}

impl FragileState {
    pub fn new(size: usize) -> Self {
        let mut counters = vec![1; size];
        if let Some(origin) = counters.first_mut() {
            *origin = -1;
        }
        Self { counters }
    }

    #[inline]
    pub fn enter(&mut self, arc: FragileArc) {
        self.counters[arc.start] += 2;
        self.counters[arc.finish] -= 1;
    }

    #[inline]
    pub fn leave(&mut self, arc: FragileArc) {
        self.counters[arc.start] -= 2;
        self.counters[arc.finish] += 1;
    }

    /// Whether the state after entering `arc` must be abandoned.
    #[inline]
    pub fn is_blocked(&self, arc: FragileArc) -> bool {
        self.counters[arc.start] > 2 && self.counters[arc.finish] < 0
    }

    /// Whether the state is `[0, 2, 2, ..]`.
    pub fn is_terminal(&self) -> bool {
        match self.counters.split_first() {
            Some((&origin, rest)) => origin == 0 && rest.iter().all(|&c| c == 2),
            None => false,
        }
    }

    pub fn counter(&self, vertex: usize) -> i64 {
        self.counters[vertex]
    }

    pub fn counters(&self) -> &[i64] {
        &self.counters
    }
}

/// Search space over walks of arcs starting at vertex 0.
pub(crate) struct FragileSpace<'a> {
    items: &'a [Item],
    arcs: &'a [FragileArc],
    max_weight: u64,
    remaining: Vec<i64>,
    state: FragileState,
    picks: Vec<usize>,
    weight: u64,
    costs: Vec<f64>,
}

impl<'a> FragileSpace<'a> {
    /// Returns `None` for a standard instance.
    pub(crate) fn new(knapsack: &'a Knapsack) -> Option<Self> {
        let arcs = knapsack.arcs()?;
        let size = knapsack.fragile_size()?;
        let items = knapsack.items();
        Some(Self {
            items,
            arcs,
            max_weight: u64::from(knapsack.max_weight()),
            remaining: items.iter().map(|item| i64::from(item.count)).collect(),
            state: FragileState::new(size),
            picks: Vec::new(),
            weight: 0,
            costs: vec![0.0],
        })
    }

    fn cost(&self) -> f64 {
        self.costs.last().copied().unwrap_or(0.0)
    }
}

impl Backtrack for FragileSpace<'_> {
    type Move = usize;
    type Solution = Vec<usize>;

    fn sense(&self) -> Sense {
        Sense::Maximize
    }

    fn moves(&self, out: &mut Vec<usize>) {
        if self.weight >= self.max_weight {
            return;
        }
        let position = match self.picks.last() {
            Some(&last) => self.arcs[last].finish,
            None => 0,
        };
        out.extend(
            self.arcs
                .iter()
                .enumerate()
                .filter(|(_, arc)| arc.start == position)
                .map(|(i, _)| i),
        );
    }

    fn apply(&mut self, i: usize) -> bool {
        let arc = self.arcs[i];
        self.remaining[i] -= 1;
        self.weight += u64::from(self.items[i].weight);
        self.costs.push(self.cost() + self.items[i].cost);
        self.picks.push(i);
        self.state.enter(arc);

        if self.state.is_blocked(arc) {
            return false;
        }
        self.remaining[i] >= 0 && self.weight <= self.max_weight
    }

    fn undo(&mut self, i: usize) {
        self.state.leave(self.arcs[i]);
        self.picks.pop();
        self.costs.pop();
        self.weight -= u64::from(self.items[i].weight);
        self.remaining[i] += 1;
    }

    fn objective(&self) -> Option<f64> {
        (!self.picks.is_empty() && self.state.is_terminal()).then(|| self.cost())
    }

    fn partial_cost(&self) -> f64 {
        self.cost()
    }

    fn snapshot(&self) -> Vec<usize> {
        self.picks.clone()
    }
}
