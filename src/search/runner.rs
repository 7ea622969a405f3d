//! Backtracking execution loop.

use super::config::{SearchConfig, TiePolicy};
use super::types::{Backtrack, Sense, SolutionBound};

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
pub struct SearchResult<S: Clone> {
    /// Best cost and the solutions achieving it, or `None` when no
    /// acceptable state exists.
    pub bound: Option<SolutionBound<S>>,

    /// Number of search nodes entered, root included.
    pub nodes_visited: u64,

    /// Number of subtrees cut by bound pruning.
    pub pruned: u64,

    /// Wall-clock time of the search in milliseconds.
    pub elapsed_ms: u64,
}

/// Executes exhaustive backtracking over a [`Backtrack`] space.
pub struct SearchRunner;

impl SearchRunner {
    /// Explores every state reachable from the current state of `space`.
    ///
    /// `seed_bound` is a known achievable cost (usually a greedy result).
    /// It filters candidates like a real incumbent but carries no solution:
    /// the first candidate not worse than it becomes the best. Compute it
    /// with [`Backtrack::replay`] so that the seeded solution, once reached
    /// by the search, compares equal to it.
    ///
    /// The config is assumed valid; solvers call
    /// [`SearchConfig::validate`] before reaching this point.
    pub fn run<B: Backtrack>(
        space: &mut B,
        config: &SearchConfig,
        seed_bound: Option<f64>,
    ) -> SearchResult<B::Solution> {
        let start_time = std::time::Instant::now();
        let sense = space.sense();

        let mut walker = Walker {
            space,
            sense,
            prune: config.bound_pruning && sense == Sense::Minimize,
            incumbent: Incumbent::new(sense, config, seed_bound),
            buffers: Vec::new(),
            nodes_visited: 0,
            pruned: 0,
        };
        walker.visit(0);

        let Walker {
            incumbent,
            nodes_visited,
            pruned,
            ..
        } = walker;

        SearchResult {
            bound: incumbent.into_bound(),
            nodes_visited,
            pruned,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        }
    }
}

struct Walker<'a, B: Backtrack> {
    space: &'a mut B,
    sense: Sense,
    prune: bool,
    incumbent: Incumbent<B::Solution>,
    // One move buffer per depth, reused across siblings.
    buffers: Vec<Vec<B::Move>>,
    nodes_visited: u64,
    pruned: u64,
}

impl<B: Backtrack> Walker<'_, B> {
    fn visit(&mut self, depth: usize) {
        self.nodes_visited += 1;

        if let Some(cost) = self.space.objective() {
            let space = &*self.space;
            self.incumbent.offer(cost, || space.snapshot());
        }

        if self.buffers.len() <= depth {
            self.buffers.push(Vec::new());
        }
        let mut moves = std::mem::take(&mut self.buffers[depth]);
        moves.clear();
        self.space.moves(&mut moves);

        for &mv in &moves {
            if self.space.apply(mv) {
                if self.cut_by_bound() {
                    self.pruned += 1;
                } else {
                    self.visit(depth + 1);
                }
            }
            self.space.undo(mv);
        }

        self.buffers[depth] = moves;
    }

    fn cut_by_bound(&self) -> bool {
        if !self.prune {
            return false;
        }
        match self.incumbent.cost {
            Some(best) => self
                .sense
                .worsens(self.space.partial_cost(), best, self.incumbent.tolerance),
            None => false,
        }
    }
}

/// Best-so-far tracker implementing the acceptance rules.
struct Incumbent<S> {
    sense: Sense,
    tolerance: f64,
    collect: bool,
    cost: Option<f64>,
    best: Option<S>,
    tied: Vec<S>,
}

impl<S: Clone> Incumbent<S> {
    fn new(sense: Sense, config: &SearchConfig, seed_bound: Option<f64>) -> Self {
        Self {
            sense,
            tolerance: config.tolerance,
            collect: config.tie_policy == TiePolicy::Collect,
            cost: seed_bound.filter(|c| c.is_finite()),
            best: None,
            tied: Vec::new(),
        }
    }

    fn offer(&mut self, cost: f64, snapshot: impl FnOnce() -> S) {
        if !cost.is_finite() {
            return;
        }

        let current = match self.cost {
            None => {
                self.replace(cost, snapshot());
                return;
            }
            Some(current) => current,
        };

        if self.sense.improves(cost, current, self.tolerance) {
            self.replace(cost, snapshot());
        } else if !self.sense.worsens(cost, current, self.tolerance) {
            if self.best.is_none() {
                self.replace(cost, snapshot());
            } else if self.collect {
                self.tied.push(snapshot());
            }
        }
    }

    fn replace(&mut self, cost: f64, solution: S) {
        self.cost = Some(cost);
        self.tied.clear();
        self.tied.push(solution.clone());
        self.best = Some(solution);
    }

    fn into_bound(self) -> Option<SolutionBound<S>> {
        let best = self.best?;
        let cost = self.cost?;
        Some(SolutionBound {
            cost,
            best,
            tied: self.tied,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Orders of `0..n`, cost = sum of `position * value` (minimized by
    /// the descending order). Ties come from the `flat` switch.
    struct Permutations {
        n: usize,
        flat: bool,
        order: Vec<usize>,
        used: Vec<bool>,
    }

    impl Permutations {
        fn new(n: usize, flat: bool) -> Self {
            Self {
                n,
                flat,
                order: Vec::new(),
                used: vec![false; n],
            }
        }

        fn cost(&self) -> f64 {
            if self.flat {
                return 1.0;
            }
            self.order
                .iter()
                .enumerate()
                .map(|(pos, &v)| (pos * v) as f64)
                .sum()
        }
    }

    impl Backtrack for Permutations {
        type Move = usize;
        type Solution = Vec<usize>;

        fn sense(&self) -> Sense {
            Sense::Minimize
        }

        fn moves(&self, out: &mut Vec<usize>) {
            out.extend((0..self.n).filter(|&v| !self.used[v]));
        }

        fn apply(&mut self, v: usize) -> bool {
            self.used[v] = true;
            self.order.push(v);
            true
        }

        fn undo(&mut self, v: usize) {
            self.used[v] = false;
            self.order.pop();
        }

        fn objective(&self) -> Option<f64> {
            (self.order.len() == self.n).then(|| self.cost())
        }

        fn partial_cost(&self) -> f64 {
            self.cost()
        }

        fn snapshot(&self) -> Vec<usize> {
            self.order.clone()
        }
    }

    #[test]
    fn test_finds_minimum() {
        let mut space = Permutations::new(4, false);
        let result = SearchRunner::run(&mut space, &SearchConfig::default(), None);
        let bound = result.bound.unwrap();
        assert_eq!(bound.best, vec![3, 2, 1, 0]);
        assert_eq!(bound.cost, 4.0);
        assert_eq!(bound.tied.len(), 1);
        // 1 root + 4 + 12 + 24 + 24
        assert_eq!(result.nodes_visited, 65);
        assert!(space.order.is_empty(), "state must be restored");
    }

    #[test]
    fn test_collects_ties_in_discovery_order() {
        let mut space = Permutations::new(3, true);
        let config = SearchConfig::default().with_tie_policy(TiePolicy::Collect);
        let bound = SearchRunner::run(&mut space, &config, None).bound.unwrap();
        assert_eq!(bound.tied.len(), 6);
        assert_eq!(bound.tied[0], bound.best);
        assert_eq!(bound.best, vec![0, 1, 2]);
        assert_eq!(bound.tied[5], vec![2, 1, 0]);
    }

    #[test]
    fn test_keep_first_drops_ties() {
        let mut space = Permutations::new(3, true);
        let bound = SearchRunner::run(&mut space, &SearchConfig::default(), None)
            .bound
            .unwrap();
        assert_eq!(bound.tied, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_seed_equal_to_optimum_still_yields_solution() {
        let mut space = Permutations::new(4, false);
        let bound = SearchRunner::run(&mut space, &SearchConfig::default(), Some(4.0))
            .bound
            .unwrap();
        assert_eq!(bound.cost, 4.0);
        assert_eq!(bound.best, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_seed_better_than_everything_yields_none() {
        let mut space = Permutations::new(3, false);
        let result = SearchRunner::run(&mut space, &SearchConfig::default(), Some(-1.0));
        assert!(result.bound.is_none());
    }

    #[test]
    fn test_bound_pruning_keeps_optimum() {
        let mut full = Permutations::new(5, false);
        let plain = SearchRunner::run(&mut full, &SearchConfig::default(), None);

        let mut cut = Permutations::new(5, false);
        let config = SearchConfig::default().with_bound_pruning(true);
        let pruned = SearchRunner::run(&mut cut, &config, None);

        assert_eq!(plain.bound.unwrap().cost, pruned.bound.as_ref().unwrap().cost);
        assert!(pruned.pruned > 0);
        assert!(
            pruned.nodes_visited < plain.nodes_visited,
            "pruning should visit fewer nodes: {} vs {}",
            pruned.nodes_visited,
            plain.nodes_visited
        );
    }

    #[test]
    fn test_incumbent_ignores_non_finite() {
        let config = SearchConfig::default();
        let mut incumbent: Incumbent<u8> = Incumbent::new(Sense::Minimize, &config, None);
        incumbent.offer(f64::INFINITY, || 1);
        incumbent.offer(f64::NAN, || 2);
        assert!(incumbent.into_bound().is_none());
    }

    #[test]
    fn test_incumbent_maximize() {
        let config = SearchConfig::default().with_tie_policy(TiePolicy::Collect);
        let mut incumbent = Incumbent::new(Sense::Maximize, &config, None);
        incumbent.offer(1.0, || 'a');
        incumbent.offer(3.0, || 'b');
        incumbent.offer(2.0, || 'c');
        incumbent.offer(3.0 + 1e-12, || 'd');
        let bound = incumbent.into_bound().unwrap();
        assert_eq!(bound.best, 'b');
        assert_eq!(bound.tied, vec!['b', 'd']);
    }

    #[test]
    fn test_replayed_seed_is_reached_by_search() {
        let mut space = Permutations::new(4, false);
        assert_eq!(space.replay(&[3, 2]), None);
        let seed = space.replay(&[3, 2, 1, 0]);
        assert_eq!(seed, Some(4.0));
        assert!(space.order.is_empty());
        assert!(space.used.iter().all(|&u| !u));

        let result = SearchRunner::run(&mut space, &SearchConfig::default(), seed);
        assert_eq!(result.bound.unwrap().best, vec![3, 2, 1, 0]);
    }
}
