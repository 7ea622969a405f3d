//! Bounded knapsack and its fragile variant.
//!
//! A standard instance packs copies of items under a weight capacity to
//! maximize total value. A fragile instance reads every item id as an arc
//! `"start_finish"`; a fill must then be a walk of arcs from vertex 0 that
//! leaves 0 once, passes through every other vertex once and returns to 0,
//! which is tracked by [`FragileState`].

mod fragile;
mod solver;
mod types;

pub use fragile::FragileState;
pub use solver::{KnapsackSolution, KnapsackSolver};
pub use types::{FragileArc, Item, Knapsack, KnapsackFill};
