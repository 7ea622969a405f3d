//! Bilevel assignment problem.
//!
//! Every worker `i` is followed by worker `j` at a salary `salary(i, j)` and
//! an operating cost `cost(i, j)`. The leader minimizes total salary over
//! closed tours; among all salary-optimal tours the follower picks the one
//! with the smallest total cost.

use tracing::info;

use crate::error::ValidationError;
use crate::matrix::WeightMatrix;
use crate::search::{SearchConfig, SolutionBound, TiePolicy};
use crate::tsp::solve_matrix;

/// A validated assignment instance: two square matrices of equal size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cap {
    costs: WeightMatrix,
    salaries: WeightMatrix,
}

impl Cap {
    /// Builds an instance. Diagonal cells may be finite; no tour uses them.
    pub fn new(costs: Vec<Vec<f64>>, salaries: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let costs = WeightMatrix::square(costs)?;
        let salaries = WeightMatrix::square(salaries)?;
        if costs.size() != salaries.size() {
            return Err(ValidationError::shape(
                "salary matrix",
                costs.size(),
                salaries.size(),
            ));
        }
        Ok(Self { costs, salaries })
    }

    pub(crate) fn from_matrices(costs: WeightMatrix, salaries: WeightMatrix) -> Self {
        Self { costs, salaries }
    }

    pub fn costs(&self) -> &WeightMatrix {
        &self.costs
    }

    pub fn salaries(&self) -> &WeightMatrix {
        &self.salaries
    }

    pub fn size(&self) -> usize {
        self.costs.size()
    }
}

/// The tour chosen at the follower level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapTour {
    /// Closed tour `[0, .., 0]`.
    pub path: Vec<usize>,
    /// Total salary (the leader's objective).
    pub salary: f64,
    /// Total cost (the follower's objective).
    pub cost: f64,
}

/// Outcome of [`CapSolver::solve`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapSolution {
    /// Minimum salary with every tour achieving it, in discovery order.
    pub salary_bound: Option<SolutionBound<Vec<usize>>>,

    /// The cheapest of the salary-optimal tours.
    pub selected: Option<CapTour>,

    /// Number of search nodes visited.
    pub nodes_visited: u64,

    /// Search time in milliseconds.
    pub elapsed_ms: u64,
}

impl CapSolution {
    pub fn min_salary(&self) -> Option<f64> {
        self.salary_bound.as_ref().map(|b| b.cost)
    }

    pub fn min_cost(&self) -> Option<f64> {
        self.selected.as_ref().map(|t| t.cost)
    }

    pub fn path(&self) -> Option<&[usize]> {
        self.selected.as_ref().map(|t| t.path.as_slice())
    }
}

/// Exact two-level solver.
///
/// # Examples
///
/// ```
/// use np_exact::cap::{Cap, CapSolver};
/// use np_exact::search::SearchConfig;
///
/// let cap = Cap::new(
///     vec![vec![0.0, 1.0, 9.0], vec![9.0, 0.0, 1.0], vec![1.0, 9.0, 0.0]],
///     vec![vec![0.0, 5.0, 5.0], vec![5.0, 0.0, 5.0], vec![5.0, 5.0, 0.0]],
/// )
/// .unwrap();
/// let solution = CapSolver::solve(&cap, &SearchConfig::default()).unwrap();
/// assert_eq!(solution.min_salary(), Some(15.0));
/// assert_eq!(solution.min_cost(), Some(3.0));
/// assert_eq!(solution.path(), Some(&[0, 1, 2, 0][..]));
/// ```
pub struct CapSolver;

impl CapSolver {
    /// Minimizes salary, then cost among the salary-optimal tours.
    ///
    /// Ties are always collected at the salary level regardless of
    /// `config.tie_policy`. When several salary-optimal tours share the
    /// minimum cost, the one found first is selected.
    pub fn solve(cap: &Cap, config: &SearchConfig) -> Result<CapSolution, ValidationError> {
        config.validate()?;
        let config = config.clone().with_tie_policy(TiePolicy::Collect);
        let tolerance = config.tolerance;

        let salary = solve_matrix(cap.salaries(), &config, "cap");

        let selected = salary.bound.as_ref().and_then(|bound| {
            let mut selected: Option<CapTour> = None;
            for path in &bound.tied {
                let cost = cap.costs().tour_cost(path);
                if selected
                    .as_ref()
                    .map_or(true, |best| cost < best.cost - tolerance)
                {
                    selected = Some(CapTour {
                        path: path.clone(),
                        salary: bound.cost,
                        cost,
                    });
                }
            }
            selected
        });

        info!(
            problem = "cap",
            size = cap.size(),
            salary_ties = salary.bound.as_ref().map_or(0, |b| b.tied.len()),
            min_cost = ?selected.as_ref().map(|t| t.cost),
            "follower tour selected"
        );

        Ok(CapSolution {
            salary_bound: salary.bound,
            selected,
            nodes_visited: salary.nodes_visited,
            elapsed_ms: salary.elapsed_ms,
        })
    }
}
