//! # Matrix implementations
//!
//! The `Matrix` trait defines a set of operations available for all matrix types defined in this
//! module. The single implementation is dense and row major; the problems this crate solves are
//! small enough that sparsity never pays off.
use std::fmt::Debug;
use std::slice::Iter;

use num_traits::{Float, NumAssign};

use crate::data::linear_algebra::vector::{DenseVector, Vector};

/// Defines basic ways to create or change a matrix, regardless of back-end.
pub trait Matrix<F> {
    /// Create a matrix from a row major data structure.
    fn from_data(data: Vec<Vec<F>>) -> Self;
    /// Create a square identity matrix.
    fn identity(size: usize) -> Self;
    /// Create a matrix filled with zeros.
    fn zeros(rows: usize, columns: usize) -> Self;
    /// Multiply a row by a constant factor.
    fn multiply_row(&mut self, row: usize, factor: F);
    /// Get the value at a coordinate.
    fn get_value(&self, row: usize, column: usize) -> F;
    /// Set the value at a coordinate.
    fn set_value(&mut self, row: usize, column: usize, value: F);
    /// Number of rows.
    fn nr_rows(&self) -> usize;
    /// Number of columns.
    fn nr_columns(&self) -> usize;
}

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Float + NumAssign + Debug> DenseMatrix<F> {
    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, F> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);

        for j in 0..self.nr_columns {
            let value = self.data[read_row][j];
            self.data[write_row][j] += factor * value;
        }
    }

    /// The transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let data = (0..self.nr_columns).map(|j| self.column(j)).collect();

        Self { data, nr_rows: self.nr_columns, nr_columns: self.nr_rows }
    }

    /// Standard matrix multiplication `self * other`.
    pub fn multiply_matrix(&self, other: &Self) -> Self {
        debug_assert_eq!(self.nr_columns, other.nr_rows);

        let data = self.data.iter()
            .map(|row| {
                (0..other.nr_columns)
                    .map(|j| {
                        (0..self.nr_columns)
                            .fold(F::zero(), |total, k| total + row[k] * other.data[k][j])
                    })
                    .collect()
            })
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: other.nr_columns }
    }

    /// Matrix vector product `self * vector`.
    pub fn multiply_vector(&self, vector: &DenseVector<F>) -> DenseVector<F> {
        debug_assert_eq!(self.nr_columns, vector.len());

        DenseVector::new(
            self.data.iter()
                .map(|row| {
                    row.iter()
                        .zip(vector.iter_values())
                        .fold(F::zero(), |total, (&left, &right)| total + left * right)
                })
                .collect(),
        )
    }

    /// Sum of the values in each row.
    pub fn row_sums(&self) -> DenseVector<F> {
        DenseVector::new(
            self.data.iter()
                .map(|row| row.iter().fold(F::zero(), |total, &value| total + value))
                .collect(),
        )
    }

    /// Scale column `j` by `factors[j]` for every column.
    ///
    /// Equals the product `self * diag(factors)` without materializing the diagonal matrix.
    pub fn scale_columns(&self, factors: &DenseVector<F>) -> Self {
        debug_assert_eq!(self.nr_columns, factors.len());

        let data = self.data.iter()
            .map(|row| {
                row.iter()
                    .zip(factors.iter_values())
                    .map(|(&value, &factor)| value * factor)
                    .collect()
            })
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: self.nr_columns }
    }

    /// Swap two rows.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) {
        debug_assert!(row1 < self.nr_rows);
        debug_assert!(row2 < self.nr_rows);

        self.data.swap(row1, row2);
    }
}

impl<F: Float + NumAssign + Debug> Matrix<F> for DenseMatrix<F> {
    fn from_data(data: Vec<Vec<F>>) -> Self {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);

        Self { data, nr_rows, nr_columns }
    }

    fn identity(size: usize) -> Self {
        debug_assert!(size > 0);

        let data = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| if i == j { F::one() } else { F::zero() })
                    .collect()
            })
            .collect();

        Self { data, nr_rows: size, nr_columns: size }
    }

    fn zeros(rows: usize, columns: usize) -> Self {
        debug_assert!(rows > 0);
        debug_assert!(columns > 0);

        Self {
            data: vec![vec![F::zero(); columns]; rows],
            nr_rows: rows,
            nr_columns: columns,
        }
    }

    fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in self.data[i].iter_mut() {
            *value *= factor;
        }
    }

    fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

/// Determine the dimensions of a row major data structure, which must be rectangular. Empty data
/// has dimensions `(0, 0)`.
fn get_data_dimensions<F>(data: &[Vec<F>]) -> (usize, usize) {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);
    debug_assert!(data.iter().all(|row| row.len() == nr_columns));

    (nr_rows, nr_columns)
}
