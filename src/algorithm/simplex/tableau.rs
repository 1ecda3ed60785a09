//! # Data structures for Simplex
//!
//! Contains the Simplex tableau and logic for the elementary operations which can be performed
//! upon it: the ratio test, the pivot itself and solution extraction.
use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::solution::Solution;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// Dimension `(N + 1) x (N + M + 1)` for a problem with `N` constraints and `M` structural
/// variables. Row `0` is the relative cost row, rows `1..=N` hold the constraints augmented with
/// an identity block for the slack variables and the right hand side in the last column. The
/// relative cost row carries `-c` when maximizing and `c` when minimizing, so the pivot logic
/// always drives negative relative costs to zero regardless of the original direction.
///
/// It is created from a [`LinearProgram`], mutated in place by each pivot and dropped when the
/// solve call ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    /// All coefficients, including the relative cost row and the right hand side column.
    rows: DenseMatrix<f64>,
    /// Number of constraints `N`.
    nr_constraints: usize,
    /// Number of structural variables `M`.
    nr_structural: usize,
    /// Which variable is basic in each constraint row. Starts out as the all-slack basis.
    basis: Vec<usize>,
    /// Direction of optimization of the original problem.
    objective: Objective,
}

/// Outcome of the ratio test for a chosen pivot column.
#[derive(Clone, Debug, PartialEq)]
pub enum RatioTest {
    /// No row limits the increase of the entering variable: the problem is unbounded.
    Unbounded,
    /// A single row attains the minimum ratio.
    Unique {
        /// The tableau row to pivot on.
        row: usize,
    },
    /// Multiple rows tie at the minimum ratio: the next basic feasible solution is degenerate.
    Tied {
        /// All tableau rows attaining the minimum ratio, in increasing order.
        rows: Vec<usize>,
    },
}

impl Tableau {
    /// Build the initial tableau with the all-slack basis.
    pub fn from_program(program: &LinearProgram) -> Self {
        let nr_constraints = program.nr_constraints();
        let nr_structural = program.nr_variables();
        let nr_columns = nr_structural + nr_constraints + 1;

        let mut rows = DenseMatrix::zeros(nr_constraints + 1, nr_columns);

        let cost_sign = match program.objective() {
            Objective::Maximize => -1f64,
            Objective::Minimize => 1f64,
        };
        for (j, &cost) in program.cost().iter_values().enumerate() {
            rows.set_value(0, j, cost_sign * cost);
        }

        for i in 0..nr_constraints {
            for (j, &coefficient) in program.constraints().row(i).enumerate() {
                rows.set_value(i + 1, j, coefficient);
            }
            rows.set_value(i + 1, nr_structural + i, 1f64);
            rows.set_value(i + 1, nr_columns - 1, program.rhs()[i]);
        }

        Self {
            rows,
            nr_constraints,
            nr_structural,
            basis: (nr_structural..(nr_structural + nr_constraints)).collect(),
            objective: program.objective(),
        }
    }

    /// Number of columns that take part in pricing (structural plus slack, excluding the right
    /// hand side).
    pub fn nr_active_columns(&self) -> usize {
        self.nr_structural + self.nr_constraints
    }

    /// The relative cost of a column.
    pub fn relative_cost(&self, column: usize) -> f64 {
        debug_assert!(column < self.nr_active_columns());

        self.rows.get_value(0, column)
    }

    /// Which variable is basic in a constraint row (rows are numbered `1..=N` as in the tableau).
    pub fn basic_variable(&self, row: usize) -> usize {
        debug_assert!((1..=self.nr_constraints).contains(&row));

        self.basis[row - 1]
    }

    /// Determine which row limits the increase of the entering variable.
    ///
    /// Each constraint row contributes the ratio of its right hand side to its pivot column
    /// entry. Ratios below `epsilon` (in particular those of rows with a non-positive pivot
    /// column entry) are excluded, as the corresponding basic variables don't block the entering
    /// one.
    pub fn select_pivot_row(&self, pivot_column: usize, epsilon: f64) -> RatioTest {
        debug_assert!(pivot_column < self.nr_active_columns());

        let rhs_column = self.nr_active_columns();
        let ratios = (1..=self.nr_constraints)
            .filter_map(|row| {
                let entry = self.rows.get_value(row, pivot_column);
                if entry == 0f64 {
                    return None;
                }
                let ratio = self.rows.get_value(row, rhs_column) / entry;
                (ratio >= epsilon).then_some((row, ratio))
            })
            .collect::<Vec<_>>();

        let minimum = ratios.iter()
            .map(|&(_, ratio)| ratio)
            .fold(f64::INFINITY, f64::min);
        if minimum.is_infinite() {
            return RatioTest::Unbounded;
        }

        let rows = ratios.into_iter()
            .filter(|&(_, ratio)| ratio == minimum)
            .map(|(row, _)| row)
            .collect::<Vec<_>>();
        debug_assert!(!rows.is_empty());
        if rows.len() == 1 {
            RatioTest::Unique { row: rows[0] }
        } else {
            RatioTest::Tied { rows }
        }
    }

    /// Bring the entering variable into the basis with a Gauss-Jordan elimination step.
    ///
    /// The pivot row is normalized by the pivot element, after which the pivot column is
    /// eliminated from every other row, including the relative cost row.
    pub fn pivot_on(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!((1..=self.nr_constraints).contains(&pivot_row));
        debug_assert!(pivot_column < self.nr_active_columns());

        let pivot = self.rows.get_value(pivot_row, pivot_column);
        debug_assert_ne!(pivot, 0f64);

        self.rows.multiply_row(pivot_row, 1f64 / pivot);
        for row in 0..=self.nr_constraints {
            if row != pivot_row {
                let factor = self.rows.get_value(row, pivot_column);
                if factor != 0f64 {
                    self.rows.mul_add_rows(pivot_row, row, -factor);
                }
            }
        }

        self.basis[pivot_row - 1] = pivot_column;
    }

    /// Value of the objective function of the current basic solution, in the unified minimize
    /// form (the corner cell of the tableau).
    pub fn objective_function_value(&self) -> f64 {
        self.rows.get_value(0, self.nr_active_columns())
    }

    /// Read the current basic solution from the tableau.
    ///
    /// A structural column is basic if it has exactly one entry exceeding the tolerance in the
    /// constraint rows and that entry equals one within the tolerance; its value is the right
    /// hand side of that row. All other structural variables are zero. Values not exceeding the
    /// tolerance are left out of the result.
    pub fn extract_solution(&self, epsilon: f64) -> Solution {
        let rhs_column = self.nr_active_columns();

        let solution_values = (0..self.nr_structural)
            .filter_map(|j| {
                let nonzero = (1..=self.nr_constraints)
                    .filter(|&row| self.rows.get_value(row, j).abs() > epsilon)
                    .collect::<Vec<_>>();
                match nonzero.as_slice() {
                    &[row] if (self.rows.get_value(row, j) - 1f64).abs() <= epsilon => {
                        let value = self.rows.get_value(row, rhs_column);
                        (value.abs() > epsilon).then_some((j, value))
                    },
                    _ => None,
                }
            })
            .collect();

        let corner = self.objective_function_value();
        let objective_value = match self.objective {
            Objective::Maximize => corner,
            Objective::Minimize => -corner,
        };

        Solution::new(objective_value, solution_values)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
    use crate::data::linear_algebra::vector::{DenseVector, Vector};
    use crate::data::linear_program::LinearProgram;
    use crate::data::linear_program::elements::Objective;

    use super::*;

    fn program() -> LinearProgram {
        LinearProgram::new(
            DenseMatrix::from_data(vec![
                vec![1f64, 0f64],
                vec![0f64, 2f64],
                vec![3f64, 2f64],
            ]),
            DenseVector::new(vec![4f64, 12f64, 18f64]),
            DenseVector::new(vec![3f64, 5f64]),
            Objective::Maximize,
        ).unwrap()
    }

    #[test]
    fn initial_tableau() {
        let tableau = Tableau::from_program(&program());

        assert_eq!(tableau.nr_active_columns(), 5);
        assert_abs_diff_eq!(tableau.relative_cost(0), -3f64);
        assert_abs_diff_eq!(tableau.relative_cost(1), -5f64);
        assert_abs_diff_eq!(tableau.relative_cost(2), 0f64);
        assert_abs_diff_eq!(tableau.objective_function_value(), 0f64);
        assert_eq!(tableau.basic_variable(1), 2);
        assert_eq!(tableau.basic_variable(3), 4);
    }

    #[test]
    fn ratio_test_skips_nonpositive_entries() {
        let tableau = Tableau::from_program(&program());

        // The first constraint has a zero entry in the second column.
        assert_eq!(tableau.select_pivot_row(1, 1e-4), RatioTest::Unique { row: 2 });
    }

    #[test]
    fn ratio_test_detects_tie() {
        let program = LinearProgram::new(
            DenseMatrix::from_data(vec![
                vec![1f64],
                vec![1f64],
            ]),
            DenseVector::new(vec![3f64, 3f64]),
            DenseVector::new(vec![2f64]),
            Objective::Maximize,
        ).unwrap();
        let tableau = Tableau::from_program(&program);

        assert_eq!(tableau.select_pivot_row(0, 1e-4), RatioTest::Tied { rows: vec![1, 2] });
    }

    #[test]
    fn ratio_test_unbounded() {
        let program = LinearProgram::new(
            DenseMatrix::from_data(vec![vec![1f64, -1f64]]),
            DenseVector::new(vec![1f64]),
            DenseVector::new(vec![1f64, 0f64]),
            Objective::Maximize,
        ).unwrap();
        let tableau = Tableau::from_program(&program);

        assert_eq!(tableau.select_pivot_row(1, 1e-4), RatioTest::Unbounded);
    }

    #[test]
    fn pivot_updates_basis_and_objective() {
        let mut tableau = Tableau::from_program(&program());

        tableau.pivot_on(2, 1);

        assert_eq!(tableau.basic_variable(2), 1);
        assert_abs_diff_eq!(tableau.relative_cost(1), 0f64);
        assert_abs_diff_eq!(tableau.objective_function_value(), 30f64);
    }

    #[test]
    fn extract_solution_of_optimal_tableau() {
        let mut tableau = Tableau::from_program(&program());

        tableau.pivot_on(2, 1);
        tableau.pivot_on(3, 0);

        let solution = tableau.extract_solution(1e-4);
        assert_abs_diff_eq!(solution.objective_value(), 36f64);
        assert_abs_diff_eq!(solution.value_of(0), 2f64);
        assert_abs_diff_eq!(solution.value_of(1), 6f64);
    }
}
