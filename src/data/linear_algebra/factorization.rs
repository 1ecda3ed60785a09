//! # Solving linear systems
//!
//! The affine scaling method needs the solution of a Gram system in every iteration, together
//! with a judgement on whether that solution can be trusted. Both live behind the `LinearSolver`
//! trait so a numerically more robust decomposition can be swapped in without touching the solver
//! logic.
use std::fmt::Debug;

use num_traits::{Float, NumAssign};

use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
use crate::data::linear_algebra::vector::{DenseVector, Vector};

/// A factored square dense matrix, ready to solve systems in.
///
/// Implementations decide how the factorization is computed; they should fail (return `None`)
/// rather than produce values from a numerically singular input.
pub trait LinearSolver<F>: Sized {
    /// Factor a square matrix in preparation for [`LinearSolver::solve`] calls.
    ///
    /// # Return value
    ///
    /// `None` if the matrix is (numerically) singular.
    fn factor(matrix: &DenseMatrix<F>) -> Option<Self>;
    /// Solve `A y = rhs` for `y`, where `A` is the factored matrix.
    fn solve(&self, rhs: &DenseVector<F>) -> DenseVector<F>;
    /// An estimate of the condition number of the factored matrix.
    ///
    /// Large values indicate that solutions should not be trusted.
    fn condition_estimate(&self) -> F;
}

/// LU decomposition with partial pivoting.
///
/// The condition estimate is the ratio of the largest to the smallest absolute pivot.
#[derive(Clone, Debug, PartialEq)]
pub struct LuDecomposition<F> {
    /// `U` on and above the diagonal, the multipliers of `L` below it (unit diagonal implied).
    lu: DenseMatrix<F>,
    /// Row permutation from the pivoting: factored row `i` was input row `permutation[i]`.
    permutation: Vec<usize>,
    condition: F,
}

impl<F: Float + NumAssign + Debug> LinearSolver<F> for LuDecomposition<F> {
    fn factor(matrix: &DenseMatrix<F>) -> Option<Self> {
        debug_assert_eq!(matrix.nr_rows(), matrix.nr_columns());

        let size = matrix.nr_rows();
        let mut lu = matrix.clone();
        let mut permutation = (0..size).collect::<Vec<_>>();
        let mut largest_pivot = F::zero();
        let mut smallest_pivot = F::infinity();

        for column in 0..size {
            let pivot_row = (column..size)
                .max_by(|&row1, &row2| {
                    lu.get_value(row1, column).abs()
                        .partial_cmp(&lu.get_value(row2, column).abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })?;
            let pivot = lu.get_value(pivot_row, column);
            if pivot.abs() <= F::epsilon() {
                return None;
            }

            lu.swap_rows(column, pivot_row);
            permutation.swap(column, pivot_row);
            largest_pivot = largest_pivot.max(pivot.abs());
            smallest_pivot = smallest_pivot.min(pivot.abs());

            for row in (column + 1)..size {
                let multiplier = lu.get_value(row, column) / pivot;
                lu.set_value(row, column, multiplier);
                for j in (column + 1)..size {
                    let value = lu.get_value(row, j) - multiplier * lu.get_value(column, j);
                    lu.set_value(row, j, value);
                }
            }
        }

        let condition = largest_pivot / smallest_pivot;

        Some(Self { lu, permutation, condition })
    }

    fn solve(&self, rhs: &DenseVector<F>) -> DenseVector<F> {
        debug_assert_eq!(self.lu.nr_rows(), rhs.len());

        let size = self.lu.nr_rows();
        let mut y = self.permutation.iter().map(|&i| rhs[i]).collect::<Vec<_>>();

        // Forward substitution through `L`.
        for i in 0..size {
            for j in 0..i {
                let known = y[j];
                y[i] = y[i] - self.lu.get_value(i, j) * known;
            }
        }
        // Back substitution through `U`.
        for i in (0..size).rev() {
            for j in (i + 1)..size {
                let known = y[j];
                y[i] = y[i] - self.lu.get_value(i, j) * known;
            }
            y[i] = y[i] / self.lu.get_value(i, i);
        }

        DenseVector::new(y)
    }

    fn condition_estimate(&self) -> F {
        self.condition
    }
}
