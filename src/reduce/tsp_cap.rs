//! TSP to assignment: the tour matrix serves as both cost and salary.

use tracing::debug;

use crate::cap::Cap;
use crate::tsp::Tsp;

pub fn tsp_to_cap(tsp: &Tsp) -> Cap {
    debug!(size = tsp.size(), "tsp reduced to cap");
    Cap::from_matrices(tsp.matrix().clone(), tsp.matrix().clone())
}

/// TSP cost of a tour chosen for the reduced instance. Vertex numbering is
/// shared, so this is the tour cost on the source matrix.
pub fn cap_tour_tsp_cost(tsp: &Tsp, tour: &[usize]) -> f64 {
    tsp.tour_cost(tour)
}
