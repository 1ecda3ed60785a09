//! # Representation of linear programs
//!
//! The problem descriptor both solvers consume, and the solution they produce.
use thiserror::Error;

use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
use crate::data::linear_algebra::vector::{DenseVector, Vector};
use crate::data::linear_program::elements::Objective;

pub mod elements;
pub mod solution;

/// A linear program in the form "optimize `c x` subject to `A x <= b`, `x >= 0`".
///
/// Constructed once by the caller and read-only afterwards; the solvers copy and augment it
/// internally and never mutate it, so a single instance can safely be shared between concurrent
/// solves.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram {
    /// Constraint coefficients, one row per constraint.
    constraints: DenseMatrix<f64>,
    /// Right hand sides, all nonnegative.
    rhs: DenseVector<f64>,
    /// Objective function coefficients.
    cost: DenseVector<f64>,
    /// Direction of optimization.
    objective: Objective,
}

impl LinearProgram {
    /// Create a new linear program, validating the caller supplied data.
    ///
    /// # Errors
    ///
    /// When the dimensions of the inputs don't match up, when any coefficient is not a finite
    /// number, or when a right hand side is negative. Both solvers derive their feasible starting
    /// point from an all-slack basis, which requires `b >= 0`; problems with `>=` constraints
    /// need to be normalized by the caller before they are passed in.
    pub fn new(
        constraints: DenseMatrix<f64>,
        rhs: DenseVector<f64>,
        cost: DenseVector<f64>,
        objective: Objective,
    ) -> Result<Self, ProblemError> {
        if constraints.nr_rows() == 0 || cost.is_empty() {
            return Err(ProblemError::Empty);
        }
        if constraints.nr_columns() != cost.len() || constraints.nr_rows() != rhs.len() {
            return Err(ProblemError::DimensionMismatch {
                nr_constraint_rows: constraints.nr_rows(),
                nr_constraint_columns: constraints.nr_columns(),
                rhs_len: rhs.len(),
                cost_len: cost.len(),
            });
        }
        let all_finite = (0..constraints.nr_rows())
            .all(|i| constraints.row(i).all(|value| value.is_finite()))
            && rhs.is_finite()
            && cost.is_finite();
        if !all_finite {
            return Err(ProblemError::NotFinite);
        }
        if let Some((index, &value)) = rhs.iter_values().enumerate().find(|&(_, &value)| value < 0f64) {
            return Err(ProblemError::NegativeRightHandSide { index, value });
        }

        Ok(Self { constraints, rhs, cost, objective })
    }

    /// Number of constraints (rows of `A`).
    pub fn nr_constraints(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of structural variables (columns of `A`).
    pub fn nr_variables(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// The constraint coefficient matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<f64> {
        &self.constraints
    }

    /// The right hand side vector `b`.
    pub fn rhs(&self) -> &DenseVector<f64> {
        &self.rhs
    }

    /// The objective coefficient vector `c`.
    pub fn cost(&self) -> &DenseVector<f64> {
        &self.cost
    }

    /// Whether the problem maximizes or minimizes.
    pub fn objective(&self) -> Objective {
        self.objective
    }
}

/// A logical inconsistency in caller supplied problem data.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ProblemError {
    /// No constraints or no variables.
    #[error("the problem has no constraints or no variables")]
    Empty,
    /// The matrix and vector dimensions don't match up.
    #[error(
        "dimension mismatch: A is {nr_constraint_rows}x{nr_constraint_columns}, \
         b has length {rhs_len}, c has length {cost_len}"
    )]
    DimensionMismatch {
        /// Number of rows of the constraint matrix.
        nr_constraint_rows: usize,
        /// Number of columns of the constraint matrix.
        nr_constraint_columns: usize,
        /// Length of the right hand side vector.
        rhs_len: usize,
        /// Length of the cost vector.
        cost_len: usize,
    },
    /// A coefficient is infinite or NaN.
    #[error("a coefficient is not a finite number")]
    NotFinite,
    /// A right hand side value is negative.
    #[error("right hand side {index} is negative ({value}); normalize the constraint first")]
    NegativeRightHandSide {
        /// Row index of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },
}
