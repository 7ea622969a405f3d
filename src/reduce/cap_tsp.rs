//! Assignment to TSP.
//!
//! Worker `i` becomes vertex `i` and its "followed by" slot vertex `n + i`.
//! A tour alternates `i -> n + j -> j`, so it visits workers in the order
//! of a CAP tour.

use tracing::debug;

use crate::cap::Cap;
use crate::matrix::WeightMatrix;
use crate::tsp::Tsp;

/// Weight of the cost term folded into every salary edge.
const COST_FACTOR: f64 = 0.1;

/// Builds the `2n` vertex TSP instance of an assignment instance.
///
/// Edge `i -> n + j` weighs `salary(i, j) - 0.1 / cost(i, j)` (just the
/// salary where the cost is zero), edge `n + j -> j` weighs 0, and no
/// other edge exists.
pub fn cap_to_tsp(cap: &Cap) -> Tsp {
    let n = cap.size();
    let matrix = WeightMatrix::from_fn(2 * n, |from, to| {
        if from < n && to >= n {
            let j = to - n;
            let salary = cap.salaries().get(from, j);
            let cost = cap.costs().get(from, j);
            if cost == 0.0 {
                salary
            } else {
                salary - COST_FACTOR / cost
            }
        } else if from >= n && to == from - n {
            0.0
        } else {
            f64::INFINITY
        }
    });

    debug!(workers = n, vertices = 2 * n, "cap reduced to tsp");
    Tsp::from_matrix(matrix)
}

/// Folds a tour of the reduced instance back into a closed CAP tour:
/// slot vertices map to their worker and every second vertex is kept.
pub fn tsp_tour_to_cap(cap: &Cap, tour: &[usize]) -> Vec<usize> {
    let n = cap.size();
    let halved: Vec<usize> = tour
        .iter()
        .map(|&v| if v >= n { v - n } else { v })
        .collect();

    let mut folded = Vec::with_capacity(n + 1);
    if let Some(&first) = halved.first() {
        folded.push(first);
        folded.extend(
            halved
                .iter()
                .enumerate()
                .skip(1)
                .step_by(2)
                .filter(|&(i, _)| i < halved.len() - 1)
                .map(|(_, &v)| v),
        );
        if folded.last() != Some(&first) {
            folded.push(first);
        }
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cap::CapSolver;
    use crate::matrix::NO_EDGE;
    use crate::search::SearchConfig;
    use crate::tsp::TspSolver;

    fn sample() -> Cap {
        Cap::new(
            vec![
                vec![0.0, 2.0, 4.0],
                vec![4.0, 0.0, 2.0],
                vec![2.0, 4.0, 0.0],
            ],
            vec![
                vec![0.0, 3.0, 3.0],
                vec![3.0, 0.0, 3.0],
                vec![3.0, 3.0, 0.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_matrix_layout() {
        let tsp = cap_to_tsp(&sample());
        let m = tsp.matrix();
        assert_eq!(m.size(), 6);
        assert!((m.get(0, 4) - (3.0 - 0.1 / 2.0)).abs() < 1e-12);
        // zero cost on the diagonal leaves the bare salary
        assert_eq!(m.get(1, 4), 0.0);
        assert_eq!(m.get(4, 1), 0.0);
        assert_eq!(m.get(4, 2), NO_EDGE);
        assert_eq!(m.get(0, 1), NO_EDGE);
        assert_eq!(m.get(3, 3), NO_EDGE);
    }

    #[test]
    fn test_fold_closed_and_open() {
        let cap = sample();
        assert_eq!(tsp_tour_to_cap(&cap, &[0, 4, 1, 5, 2, 3, 0]), vec![0, 1, 2, 0]);
        assert_eq!(tsp_tour_to_cap(&cap, &[0, 4, 1, 5, 2, 3]), vec![0, 1, 2, 0]);
        assert!(tsp_tour_to_cap(&cap, &[]).is_empty());
    }

    #[test]
    fn test_reduced_optimum_prefers_cheaper_tour() {
        // equal salary everywhere, so the folded cost term decides
        let cap = sample();
        let tsp = cap_to_tsp(&cap);
        let solution = TspSolver::solve(&tsp, &SearchConfig::default()).unwrap();
        let folded = tsp_tour_to_cap(&cap, solution.min_path().unwrap());
        assert_eq!(folded, vec![0, 1, 2, 0]);

        let direct = CapSolver::solve(&cap, &SearchConfig::default()).unwrap();
        assert_eq!(direct.path(), Some(folded.as_slice()));
    }
}
