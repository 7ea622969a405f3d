//! Search space over Hamiltonian cycles rooted at vertex 0.

use crate::matrix::WeightMatrix;
use crate::search::{Backtrack, Sense};

/// Paths from vertex 0 over unvisited vertices, in ascending vertex order.
///
/// Path costs live on a prefix stack so that undoing a move never
/// subtracts a weight.
pub(crate) struct TourSpace<'a> {
    matrix: &'a WeightMatrix,
    path: Vec<usize>,
    visited: Vec<bool>,
    costs: Vec<f64>,
}

impl<'a> TourSpace<'a> {
    pub(crate) fn new(matrix: &'a WeightMatrix) -> Self {
        let n = matrix.size();
        let mut path = Vec::with_capacity(n + 1);
        path.push(0);
        let mut visited = vec![false; n];
        if let Some(origin) = visited.first_mut() {
            *origin = true;
        }
        let mut costs = Vec::with_capacity(n);
        costs.push(0.0);
        Self {
            matrix,
            path,
            visited,
            costs,
        }
    }

    fn last(&self) -> usize {
        self.path.last().copied().unwrap_or(0)
    }

    fn cost(&self) -> f64 {
        self.costs.last().copied().unwrap_or(0.0)
    }
}

impl Backtrack for TourSpace<'_> {
    type Move = usize;
    type Solution = Vec<usize>;

    fn sense(&self) -> Sense {
        Sense::Minimize
    }

    fn moves(&self, out: &mut Vec<usize>) {
        out.extend((0..self.visited.len()).filter(|&v| !self.visited[v]));
    }

    fn apply(&mut self, v: usize) -> bool {
        let w = self.matrix.get(self.last(), v);
        self.costs.push(self.cost() + w);
        self.path.push(v);
        self.visited[v] = true;
        w.is_finite()
    }

    fn undo(&mut self, v: usize) {
        self.visited[v] = false;
        self.path.pop();
        self.costs.pop();
    }

    fn objective(&self) -> Option<f64> {
        let n = self.matrix.size();
        if n < 2 || self.path.len() != n {
            return None;
        }
        Some(self.cost() + self.matrix.get(self.last(), 0))
    }

    fn partial_cost(&self) -> f64 {
        self.cost()
    }

    fn snapshot(&self) -> Vec<usize> {
        let mut tour = self.path.clone();
        tour.push(0);
        tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::NO_EDGE;
    use crate::search::{SearchConfig, SearchRunner};

    #[test]
    fn test_counts_all_permutations() {
        let m = WeightMatrix::from_fn(4, |_, _| 1.0);
        let mut space = TourSpace::new(&m);
        let result = SearchRunner::run(&mut space, &SearchConfig::default(), None);
        // 1 + 3 + 6 + 6
        assert_eq!(result.nodes_visited, 16);
        assert_eq!(result.bound.unwrap().cost, 4.0);
        assert_eq!(space.path, vec![0]);
    }

    #[test]
    fn test_missing_edge_cuts_branch() {
        let m = WeightMatrix::new(vec![
            vec![NO_EDGE, 1.0, NO_EDGE],
            vec![NO_EDGE, NO_EDGE, 1.0],
            vec![1.0, NO_EDGE, NO_EDGE],
        ])
        .unwrap();
        let mut space = TourSpace::new(&m);
        let bound = SearchRunner::run(&mut space, &SearchConfig::default(), None)
            .bound
            .unwrap();
        assert_eq!(bound.best, vec![0, 1, 2, 0]);
        assert_eq!(bound.cost, 3.0);
    }

    #[test]
    fn test_single_vertex_has_no_tour() {
        let m = WeightMatrix::square(vec![vec![0.0]]).unwrap();
        let mut space = TourSpace::new(&m);
        assert!(SearchRunner::run(&mut space, &SearchConfig::default(), None)
            .bound
            .is_none());
    }
}
