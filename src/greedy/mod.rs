//! Greedy bound heuristics.
//!
//! Fast feasible solutions used to seed the exact solvers' incumbents and
//! as a reference cost. None of them is optimal in general.

mod knapsack;
mod tour;

pub use knapsack::{greedy_fill, greedy_fragile_fill, GreedyFill};
pub use tour::{greedy_tour, GreedyTour};
