//! Exact backtracking search.
//!
//! One recursive routine explores a problem-provided state space in full.
//! A problem supplies moves, feasibility and an objective through the
//! [`Backtrack`] trait; the runner owns recursion, statistics and the
//! incumbent (best cost plus, optionally, every tied solution).
//!
//! Runtime is exponential in the instance size. The solvers in this crate
//! are intended for small instances only.

mod config;
mod runner;
mod types;

pub use config::{SearchConfig, TiePolicy};
pub use runner::{SearchResult, SearchRunner};
pub use types::{Backtrack, Sense, SolutionBound};
