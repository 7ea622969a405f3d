//! Exact solvers for small NP-hard combinatorial problems and the
//! polynomial reductions between them.
//!
//! Three problems are modelled:
//!
//! - **TSP**: minimum-weight Hamiltonian cycle on a directed weight matrix.
//! - **Knapsack**: bounded multiplicity knapsack maximizing total cost, with
//!   an optional *fragile* variant whose items are arcs that must form a
//!   closed walk through vertex 0.
//! - **CAP**: bilevel assignment; among the tours of minimum salary, pick
//!   the one of minimum cost.
//!
//! Every solver is a configuration of one generic backtracking routine
//! ([`search::SearchRunner`]) seeded with a greedy bound
//! ([`greedy`]). The [`reduce`] module maps instances KP→TSP, TSP→CAP,
//! TSP→KP and CAP→TSP, with companion mappings for solutions.
//!
//! # Architecture
//!
//! - [`matrix`], [`tsp`], [`cap`], [`knapsack`]: validated instances and
//!   their solvers.
//! - [`search`]: the backtracking engine, its config and incumbent policy.
//! - [`greedy`]: fast feasible solutions used as starting bounds.
//! - [`reduce`]: problem-to-problem transformations.
//! - [`format`], [`generate`]: plain-text I/O and seeded random instances.
//!
//! The solvers are exponential and meant for small instances. They log
//! through `tracing`; installing a subscriber is left to the caller.
//!
//! # Example
//!
//! ```
//! use np_exact::matrix::NO_EDGE;
//! use np_exact::search::SearchConfig;
//! use np_exact::tsp::{Tsp, TspSolver};
//!
//! let tsp = Tsp::new(vec![
//!     vec![NO_EDGE, 10.0, 15.0, 20.0],
//!     vec![10.0, NO_EDGE, 35.0, 25.0],
//!     vec![15.0, 35.0, NO_EDGE, 30.0],
//!     vec![20.0, 25.0, 30.0, NO_EDGE],
//! ])
//! .unwrap();
//!
//! let solution = TspSolver::solve(&tsp, &SearchConfig::default()).unwrap();
//! assert_eq!(solution.min_cost(), Some(80.0));
//! ```

pub mod cap;
pub mod error;
pub mod format;
pub mod generate;
pub mod greedy;
pub mod knapsack;
pub mod matrix;
pub mod reduce;
pub mod search;
pub mod tsp;

pub use error::ValidationError;
