//! Polynomial reductions between the three problems.
//!
//! Each reduction builds an instance of the target problem and comes with
//! helpers that translate the target's solution (or cost) back into the
//! source problem's terms.
//!
//! | from | to | build | map back |
//! |------|----|-------|----------|
//! | knapsack | TSP | [`kp_to_tsp`] | [`tour_to_item_weights`], [`fill_tsp_cost`] |
//! | TSP | assignment | [`tsp_to_cap`] | [`cap_tour_tsp_cost`] |
//! | TSP | fragile knapsack | [`tsp_to_kp`] | [`fill_to_tour`], [`tour_to_arc_ids`], [`tour_kp_cost`] |
//! | assignment | TSP | [`cap_to_tsp`] | [`tsp_tour_to_cap`] |
//!
//! Reduced matrices are built directly and skip instance validation: the
//! assignment reduction in particular produces negative edge weights.

mod cap_tsp;
mod kp_tsp;
mod tsp_cap;
mod tsp_kp;

pub use cap_tsp::{cap_to_tsp, tsp_tour_to_cap};
pub use kp_tsp::{fill_tsp_cost, kp_to_tsp, tour_to_item_weights};
pub use tsp_cap::{cap_tour_tsp_cost, tsp_to_cap};
pub use tsp_kp::{fill_to_tour, tour_kp_cost, tour_to_arc_ids, tsp_to_kp};
