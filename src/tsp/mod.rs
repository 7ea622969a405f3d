//! Traveling salesman problem.
//!
//! Finds a minimum-weight Hamiltonian cycle over a directed weight matrix
//! by exhaustive search from vertex 0, seeded with the greedy tour.

mod solver;
mod space;

pub use solver::{Tsp, TspSolution, TspSolver};
pub(crate) use solver::solve_matrix;
