//! Square weight matrix shared by the tour and assignment problems.

use crate::error::ValidationError;

/// Sentinel weight meaning "no edge". Diagonal cells always hold it.
pub const NO_EDGE: f64 = f64::INFINITY;

/// A dense, row-major square matrix of edge weights.
///
/// Off-diagonal cells hold either a finite weight or [`NO_EDGE`].
///
/// # Examples
///
/// ```
/// use np_exact::matrix::{WeightMatrix, NO_EDGE};
///
/// let m = WeightMatrix::new(vec![
///     vec![NO_EDGE, 1.0],
///     vec![2.0, NO_EDGE],
/// ])
/// .unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.tour_cost(&[0, 1, 0]), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl WeightMatrix {
    /// Builds a tour matrix: square, non-negative, [`NO_EDGE`] on the diagonal.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let matrix = Self::square(rows)?;
        for i in 0..matrix.size {
            let cell = matrix.get(i, i);
            if cell != NO_EDGE {
                return Err(ValidationError::out_of_range(
                    format!("cell ({i}, {i})"),
                    cell,
                    "inf on the diagonal",
                ));
            }
        }
        Ok(matrix)
    }

    /// Builds an assignment matrix: square and non-negative. The diagonal
    /// may hold finite values since a tour never traverses it.
    pub fn square(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let size = rows.len();
        if size == 0 {
            return Err(ValidationError::out_of_range("matrix size", 0u32, ">= 1"));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(ValidationError::shape(format!("row {i}"), size, row.len()));
            }
            for (j, &cell) in row.iter().enumerate() {
                if cell.is_nan() || cell < 0.0 {
                    return Err(ValidationError::out_of_range(
                        format!("cell ({i}, {j})"),
                        cell,
                        ">= 0",
                    ));
                }
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Builds a matrix cell by cell without validation. The diagonal is
    /// forced to [`NO_EDGE`]. Used by reductions and generators, whose
    /// output is valid by construction.
    pub(crate) fn from_fn(size: usize, mut cell: impl FnMut(usize, usize) -> f64) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                cells.push(if i == j { NO_EDGE } else { cell(i, j) });
            }
        }
        Self { size, cells }
    }

    /// A matrix with every cell set to [`NO_EDGE`].
    pub(crate) fn disconnected(size: usize) -> Self {
        Self {
            size,
            cells: vec![NO_EDGE; size * size],
        }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight of the edge `from -> to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.size + to]
    }

    #[inline]
    pub(crate) fn set(&mut self, from: usize, to: usize, weight: f64) {
        self.cells[from * self.size + to] = weight;
    }

    /// Whether `from -> to` is a real (finite, off-diagonal) edge.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from != to && self.get(from, to).is_finite()
    }

    /// One row of the matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }

    /// Sum of all finite cells.
    pub fn finite_sum(&self) -> f64 {
        self.cells.iter().filter(|w| w.is_finite()).sum()
    }

    /// Cost of walking `path` edge by edge.
    ///
    /// A closed tour (`[0, .., 0]`) includes its closing edge; an open path
    /// is closed implicitly back to its first vertex. Returns [`NO_EDGE`] if
    /// any traversed edge is missing.
    pub fn tour_cost(&self, path: &[usize]) -> f64 {
        if path.len() < 2 {
            return NO_EDGE;
        }
        let mut cost: f64 = path.windows(2).map(|w| self.get(w[0], w[1])).sum();
        let (first, last) = (path[0], path[path.len() - 1]);
        if first != last {
            cost += self.get(last, first);
        }
        cost
    }
}
