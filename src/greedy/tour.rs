//! Nearest-end insertion heuristic for tours.

use crate::matrix::WeightMatrix;

/// A feasible tour found by [`greedy_tour`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyTour {
    /// Closed path `[0, .., 0]`.
    pub path: Vec<usize>,
    /// Total weight including the closing edge.
    pub cost: f64,
}

/// Builds a tour by growing a chain from the cheapest edge.
///
/// The chain starts with the globally cheapest edge. Each step attaches the
/// unused vertex with the cheapest edge into the chain's first vertex or out
/// of its last vertex; the earliest candidate wins ties, and for a single
/// vertex the front end wins. Returns `None` when the chain cannot be
/// extended or closed over existing edges, or when there are fewer than two
/// vertices.
///
/// # Examples
///
/// ```
/// use np_exact::greedy::greedy_tour;
/// use np_exact::matrix::{WeightMatrix, NO_EDGE};
///
/// let m = WeightMatrix::new(vec![
///     vec![NO_EDGE, 1.0, 9.0],
///     vec![9.0, NO_EDGE, 1.0],
///     vec![1.0, 9.0, NO_EDGE],
/// ])
/// .unwrap();
/// let tour = greedy_tour(&m).unwrap();
/// assert_eq!(tour.path, vec![0, 1, 2, 0]);
/// assert_eq!(tour.cost, 3.0);
/// ```
pub fn greedy_tour(matrix: &WeightMatrix) -> Option<GreedyTour> {
    let n = matrix.size();
    if n < 2 {
        return None;
    }

    let mut seed: Option<(usize, usize, f64)> = None;
    for i in 0..n {
        for j in 0..n {
            if !matrix.has_edge(i, j) {
                continue;
            }
            let w = matrix.get(i, j);
            if seed.map_or(true, |(_, _, best)| w < best) {
                seed = Some((i, j, w));
            }
        }
    }
    let (a, b, mut cost) = seed?;

    let mut chain = std::collections::VecDeque::with_capacity(n);
    chain.push_back(a);
    chain.push_back(b);
    let mut used = vec![false; n];
    used[a] = true;
    used[b] = true;

    while chain.len() < n {
        let first = *chain.front()?;
        let last = *chain.back()?;

        // (weight, vertex, attach at front)
        let mut pick: Option<(f64, usize, bool)> = None;
        for v in (0..n).filter(|&v| !used[v]) {
            for (w, front) in [(matrix.get(v, first), true), (matrix.get(last, v), false)] {
                if w.is_finite() && pick.map_or(true, |(best, _, _)| w < best) {
                    pick = Some((w, v, front));
                }
            }
        }

        let (w, v, front) = pick?;
        if front {
            chain.push_front(v);
        } else {
            chain.push_back(v);
        }
        used[v] = true;
        cost += w;
    }

    let closing = matrix.get(*chain.back()?, *chain.front()?);
    if !closing.is_finite() {
        return None;
    }
    cost += closing;

    let mut path: Vec<usize> = chain.into();
    let origin = path.iter().position(|&v| v == 0)?;
    path.rotate_left(origin);
    path.push(0);

    Some(GreedyTour { path, cost })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::NO_EDGE;

    fn four_city() -> WeightMatrix {
        WeightMatrix::new(vec![
            vec![NO_EDGE, 10.0, 15.0, 20.0],
            vec![10.0, NO_EDGE, 35.0, 25.0],
            vec![15.0, 35.0, NO_EDGE, 30.0],
            vec![20.0, 25.0, 30.0, NO_EDGE],
        ])
        .unwrap()
    }

    #[test]
    fn test_four_city() {
        let m = four_city();
        let tour = greedy_tour(&m).unwrap();
        assert_eq!(tour.path.first(), Some(&0));
        assert_eq!(tour.path.last(), Some(&0));
        assert_eq!(tour.path.len(), 5);
        assert_eq!(tour.cost, m.tour_cost(&tour.path));
        // seed 0->1, then 2->0 (15), 1->3 (25), close 3->2 (30)
        assert_eq!(tour.path, vec![0, 1, 3, 2, 0]);
        assert_eq!(tour.cost, 80.0);
    }

    #[test]
    fn test_missing_closing_edge() {
        let m = WeightMatrix::new(vec![
            vec![NO_EDGE, 1.0, NO_EDGE],
            vec![NO_EDGE, NO_EDGE, 1.0],
            vec![NO_EDGE, NO_EDGE, NO_EDGE],
        ])
        .unwrap();
        assert!(greedy_tour(&m).is_none());
    }

    #[test]
    fn test_too_small() {
        let m = WeightMatrix::new(vec![vec![NO_EDGE]]).unwrap();
        assert!(greedy_tour(&m).is_none());
    }

    #[test]
    fn test_ignores_assignment_diagonal() {
        let m = WeightMatrix::square(vec![vec![0.0, 5.0], vec![7.0, 0.0]]).unwrap();
        let tour = greedy_tour(&m).unwrap();
        assert_eq!(tour.path, vec![0, 1, 0]);
        assert_eq!(tour.cost, 12.0);
    }
}
