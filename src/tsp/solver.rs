//! Exact TSP solving.

use tracing::{debug, info};

use super::space::TourSpace;
use crate::error::ValidationError;
use crate::greedy::{greedy_tour, GreedyTour};
use crate::matrix::WeightMatrix;
use crate::search::{Backtrack, SearchConfig, SearchRunner, SolutionBound};

/// A validated TSP instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tsp {
    matrix: WeightMatrix,
}

impl Tsp {
    /// Builds an instance from matrix rows, `NO_EDGE` on the diagonal.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        Ok(Self {
            matrix: WeightMatrix::new(rows)?,
        })
    }

    /// Wraps an existing matrix.
    pub fn from_matrix(matrix: WeightMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &WeightMatrix {
        &self.matrix
    }

    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Cost of a tour, closing edge included.
    pub fn tour_cost(&self, path: &[usize]) -> f64 {
        self.matrix.tour_cost(path)
    }
}

/// Outcome of [`TspSolver::solve`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspSolution {
    /// Minimum tour cost with the tour(s) achieving it, or `None` when the
    /// graph has no Hamiltonian cycle.
    pub bound: Option<SolutionBound<Vec<usize>>>,

    /// Heuristic tour used as the starting bound.
    pub greedy: Option<GreedyTour>,

    /// Number of search nodes visited.
    pub nodes_visited: u64,

    /// Search time in milliseconds.
    pub elapsed_ms: u64,
}

impl TspSolution {
    pub fn min_cost(&self) -> Option<f64> {
        self.bound.as_ref().map(|b| b.cost)
    }

    /// Closed optimal tour `[0, .., 0]`.
    pub fn min_path(&self) -> Option<&[usize]> {
        self.bound.as_ref().map(|b| b.best.as_slice())
    }
}

/// Exact solver for the traveling salesman problem.
///
/// # Examples
///
/// ```
/// use np_exact::matrix::NO_EDGE;
/// use np_exact::search::SearchConfig;
/// use np_exact::tsp::{Tsp, TspSolver};
///
/// let tsp = Tsp::new(vec![
///     vec![NO_EDGE, 10.0, 15.0, 20.0],
///     vec![10.0, NO_EDGE, 35.0, 25.0],
///     vec![15.0, 35.0, NO_EDGE, 30.0],
///     vec![20.0, 25.0, 30.0, NO_EDGE],
/// ])
/// .unwrap();
/// let solution = TspSolver::solve(&tsp, &SearchConfig::default()).unwrap();
/// assert_eq!(solution.min_cost(), Some(80.0));
/// ```
pub struct TspSolver;

impl TspSolver {
    /// Finds a minimum-cost Hamiltonian cycle starting and ending at 0.
    pub fn solve(tsp: &Tsp, config: &SearchConfig) -> Result<TspSolution, ValidationError> {
        config.validate()?;
        Ok(solve_matrix(tsp.matrix(), config, "tsp"))
    }
}

/// Shared by the TSP and assignment solvers, which differ only in the
/// matrix searched and the tie policy.
pub(crate) fn solve_matrix(
    matrix: &WeightMatrix,
    config: &SearchConfig,
    problem: &'static str,
) -> TspSolution {
    let greedy = greedy_tour(matrix);
    let mut space = TourSpace::new(matrix);

    // Re-priced in search order: the greedy cost is summed from the seed
    // edge and may differ from the search's sum in the last bits.
    let seed = match &greedy {
        Some(g) if config.use_greedy_seed => g
            .path
            .get(1..g.path.len() - 1)
            .and_then(|moves| space.replay(moves)),
        _ => None,
    };
    debug!(problem, seed = ?seed, "greedy tour seed");

    let result = SearchRunner::run(&mut space, config, seed);

    info!(
        problem,
        size = matrix.size(),
        best_cost = ?result.bound.as_ref().map(|b| b.cost),
        tied = result.bound.as_ref().map_or(0, |b| b.tied.len()),
        nodes = result.nodes_visited,
        pruned = result.pruned,
        elapsed_ms = result.elapsed_ms,
        "tour search finished"
    );

    TspSolution {
        bound: result.bound,
        greedy,
        nodes_visited: result.nodes_visited,
        elapsed_ms: result.elapsed_ms,
    }
}
