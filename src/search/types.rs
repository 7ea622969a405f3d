//! Core trait for exact backtracking search.

/// Optimization direction of a search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    /// Lower objective is better (tours).
    Minimize,
    /// Higher objective is better (knapsack fills).
    Maximize,
}

impl Sense {
    /// Whether `candidate` beats `incumbent` by more than `tolerance`.
    #[inline]
    pub fn improves(self, candidate: f64, incumbent: f64, tolerance: f64) -> bool {
        match self {
            Sense::Minimize => candidate < incumbent - tolerance,
            Sense::Maximize => candidate > incumbent + tolerance,
        }
    }

    /// Whether `candidate` is worse than `incumbent` by more than `tolerance`.
    #[inline]
    pub fn worsens(self, candidate: f64, incumbent: f64, tolerance: f64) -> bool {
        self.improves(incumbent, candidate, tolerance)
    }
}

/// A mutable state space explored by [`SearchRunner`](super::SearchRunner).
///
/// The space holds the partial solution of the current search node. The
/// runner asks for the moves available from the node, applies each one,
/// recurses when the result is feasible and always undoes the move before
/// trying the next.
///
/// # Contract
///
/// - `apply` followed by `undo` with the same move restores the state
///   exactly, whether or not `apply` reported feasibility.
/// - `objective` is only consulted on feasible states.
///
/// # Examples
///
/// ```
/// use np_exact::search::{Backtrack, SearchConfig, SearchRunner, Sense};
///
/// /// Pick a subset of values whose sum stays <= 5, maximizing the sum.
/// struct SubsetSum {
///     values: Vec<u32>,
///     picked: Vec<usize>,
///     sum: u32,
/// }
///
/// impl Backtrack for SubsetSum {
///     type Move = usize;
///     type Solution = Vec<usize>;
///
///     fn sense(&self) -> Sense { Sense::Maximize }
///
///     fn moves(&self, out: &mut Vec<usize>) {
///         let start = self.picked.last().map_or(0, |&i| i + 1);
///         out.extend(start..self.values.len());
///     }
///
///     fn apply(&mut self, i: usize) -> bool {
///         self.picked.push(i);
///         self.sum += self.values[i];
///         self.sum <= 5
///     }
///
///     fn undo(&mut self, i: usize) {
///         self.picked.pop();
///         self.sum -= self.values[i];
///     }
///
///     fn objective(&self) -> Option<f64> { Some(self.sum as f64) }
///
///     fn partial_cost(&self) -> f64 { self.sum as f64 }
///
///     fn snapshot(&self) -> Vec<usize> { self.picked.clone() }
/// }
///
/// let mut space = SubsetSum { values: vec![4, 3, 2], picked: vec![], sum: 0 };
/// let result = SearchRunner::run(&mut space, &SearchConfig::default(), None);
/// let bound = result.bound.unwrap();
/// assert_eq!(bound.cost, 5.0);
/// assert_eq!(bound.best, vec![1, 2]);
/// ```
pub trait Backtrack {
    /// A single decision taken at a search node.
    type Move: Copy;

    /// The owned form of an accepted solution.
    type Solution: Clone;

    /// Optimization direction.
    fn sense(&self) -> Sense;

    /// Pushes the moves available from the current state, in exploration
    /// order.
    fn moves(&self, out: &mut Vec<Self::Move>);

    /// Applies a move. Returns `false` when the resulting state is
    /// infeasible; the runner then skips the subtree but still calls
    /// [`Backtrack::undo`].
    fn apply(&mut self, mv: Self::Move) -> bool;

    /// Reverts a move previously passed to [`Backtrack::apply`].
    fn undo(&mut self, mv: Self::Move);

    /// Cost of the current state if it is an acceptable solution.
    fn objective(&self) -> Option<f64>;

    /// Cost accumulated so far, used only for bound pruning.
    fn partial_cost(&self) -> f64;

    /// Clones the current state into a solution.
    fn snapshot(&self) -> Self::Solution;

    /// Objective of the state reached by applying `path` from the current
    /// state, or `None` if a move is infeasible or the end state is not a
    /// solution. The space is restored before returning.
    ///
    /// The value is accumulated exactly as the search accumulates it along
    /// the same moves, so it compares equal to what the search reports for
    /// that state.
    fn replay(&mut self, path: &[Self::Move]) -> Option<f64> {
        let mut applied = 0;
        let mut feasible = true;
        for &mv in path {
            applied += 1;
            if !self.apply(mv) {
                feasible = false;
                break;
            }
        }
        let cost = if feasible { self.objective() } else { None };
        for &mv in path[..applied].iter().rev() {
            self.undo(mv);
        }
        cost
    }
}

/// Best objective value together with the solutions achieving it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionBound<S> {
    /// Best objective value found.
    pub cost: f64,
    /// First solution found with that value.
    pub best: S,
    /// Every solution with that value in discovery order; `tied[0] == best`.
    /// Holds only `best` unless ties are collected.
    pub tied: Vec<S>,
}
