//! Exact knapsack solving.

use tracing::{debug, info};

use super::fragile::FragileSpace;
use super::types::{Item, Knapsack, KnapsackFill};
use crate::error::ValidationError;
use crate::greedy::{greedy_fill, greedy_fragile_fill};
use crate::search::{Backtrack, SearchConfig, SearchRunner, Sense};

/// Search space over multisets of items, enumerated in non-decreasing
/// index order.
pub(crate) struct StandardSpace<'a> {
    items: &'a [Item],
    max_weight: u64,
    remaining: Vec<i64>,
    picks: Vec<usize>,
    weight: u64,
    costs: Vec<f64>,
}

impl<'a> StandardSpace<'a> {
    pub(crate) fn new(knapsack: &'a Knapsack) -> Self {
        let items = knapsack.items();
        Self {
            items,
            max_weight: u64::from(knapsack.max_weight()),
            remaining: items.iter().map(|item| i64::from(item.count)).collect(),
            picks: Vec::new(),
            weight: 0,
            costs: vec![0.0],
        }
    }

    fn cost(&self) -> f64 {
        self.costs.last().copied().unwrap_or(0.0)
    }
}

impl Backtrack for StandardSpace<'_> {
    type Move = usize;
    type Solution = Vec<usize>;

    fn sense(&self) -> Sense {
        Sense::Maximize
    }

    fn moves(&self, out: &mut Vec<usize>) {
        if self.weight >= self.max_weight {
            return;
        }
        let from = self.picks.last().copied().unwrap_or(0);
        out.extend(from..self.items.len());
    }

    fn apply(&mut self, i: usize) -> bool {
        self.remaining[i] -= 1;
        self.weight += u64::from(self.items[i].weight);
        self.costs.push(self.cost() + self.items[i].cost);
        self.picks.push(i);
        self.remaining[i] >= 0 && self.weight <= self.max_weight
    }

    fn undo(&mut self, i: usize) {
        self.picks.pop();
        self.costs.pop();
        self.weight -= u64::from(self.items[i].weight);
        self.remaining[i] += 1;
    }

    fn objective(&self) -> Option<f64> {
        (!self.picks.is_empty()).then(|| self.cost())
    }

    fn partial_cost(&self) -> f64 {
        self.cost()
    }

    fn snapshot(&self) -> Vec<usize> {
        self.picks.clone()
    }
}

/// Outcome of [`KnapsackSolver::solve`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackSolution {
    /// Most valuable fill, or `None` when no acceptable fill exists (only
    /// possible for fragile instances).
    pub fill: Option<KnapsackFill>,

    /// The heuristic fill used as the starting bound. For fragile
    /// instances it is only reported when it ended in the terminal state.
    pub greedy: Option<KnapsackFill>,

    /// Number of search nodes visited.
    pub nodes_visited: u64,

    /// Search time in milliseconds.
    pub elapsed_ms: u64,
}

impl KnapsackSolution {
    pub fn max_cost(&self) -> Option<f64> {
        self.fill.as_ref().map(|f| f.cost)
    }
}

/// Exact solver for standard and fragile knapsack instances.
///
/// # Examples
///
/// ```
/// use np_exact::knapsack::{Item, Knapsack, KnapsackSolver};
/// use np_exact::search::SearchConfig;
///
/// let kp = Knapsack::new(7, vec![
///     Item::new("a", 2, 5.0, 3),
///     Item::new("b", 3, 8.0, 1),
/// ])
/// .unwrap();
/// let solution = KnapsackSolver::solve(&kp, &SearchConfig::default()).unwrap();
/// assert_eq!(solution.max_cost(), Some(18.0));
/// ```
pub struct KnapsackSolver;

impl KnapsackSolver {
    /// Finds the most valuable fill within capacity.
    ///
    /// Fragile instances additionally require the fill to be a walk that
    /// ends in the terminal fragility state.
    pub fn solve(
        knapsack: &Knapsack,
        config: &SearchConfig,
    ) -> Result<KnapsackSolution, ValidationError> {
        config.validate()?;

        let (greedy, result) = match FragileSpace::new(knapsack) {
            Some(mut space) => {
                let greedy = greedy_fragile_fill(knapsack)
                    .filter(|g| g.terminal)
                    .map(|g| g.fill);
                let seed = seed_bound(config, greedy.as_ref(), |picks| space.replay(picks));
                debug!(seed = ?seed, "fragile knapsack greedy seed");
                (greedy, SearchRunner::run(&mut space, config, seed))
            }
            None => {
                let greedy = Some(greedy_fill(knapsack)).filter(|g| !g.is_empty());
                let mut space = StandardSpace::new(knapsack);
                // the search only reaches a multiset in index order
                let seed = seed_bound(config, greedy.as_ref(), |picks| {
                    let mut sorted = picks.to_vec();
                    sorted.sort_unstable();
                    space.replay(&sorted)
                });
                debug!(seed = ?seed, "knapsack greedy seed");
                (greedy, SearchRunner::run(&mut space, config, seed))
            }
        };

        let fill = result
            .bound
            .map(|bound| KnapsackFill::from_picks(knapsack, bound.best));

        info!(
            problem = if knapsack.is_fragile() { "kp-fragile" } else { "kp" },
            items = knapsack.items().len(),
            max_weight = knapsack.max_weight(),
            best_cost = ?fill.as_ref().map(|f| f.cost),
            nodes = result.nodes_visited,
            elapsed_ms = result.elapsed_ms,
            "knapsack solved"
        );

        Ok(KnapsackSolution {
            fill,
            greedy,
            nodes_visited: result.nodes_visited,
            elapsed_ms: result.elapsed_ms,
        })
    }
}

/// Prices the greedy fill through the search space so the seed matches the
/// cost the search computes for the same fill bit for bit.
fn seed_bound(
    config: &SearchConfig,
    greedy: Option<&KnapsackFill>,
    replay: impl FnOnce(&[usize]) -> Option<f64>,
) -> Option<f64> {
    if !config.use_greedy_seed {
        return None;
    }
    greedy.and_then(|g| replay(&g.picks))
}
