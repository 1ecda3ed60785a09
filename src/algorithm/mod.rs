//! # Algorithms
//!
//! Two independent solvers for the same class of linear programs: the tableau Simplex method and
//! a primal affine-scaling interior point method. Neither depends on the other; running both on
//! one problem and comparing the objective values is a cheap consistency check.
use thiserror::Error;

use crate::data::linear_program::solution::Solution;

pub mod affine_scaling;
pub mod simplex;

/// Outcome of a solve call: a solution, or a typed reason why there is none.
///
/// Callers must treat an `Err` as "no solution", never as a numeric zero.
pub type SolveResult = Result<Solution, SolveError>;

/// Why a solver terminated without an optimal solution.
///
/// All of these are detected locally within a solver and reported once; no failure is retried
/// internally with different parameters.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SolveError {
    /// The objective can be improved without limit along a feasible direction.
    #[error("the problem is unbounded")]
    Unbounded,
    /// The Gram matrix of the scaled constraints is singular or too ill-conditioned to solve
    /// against.
    ///
    /// The affine scaling method can't distinguish an unbounded problem from one whose scaled
    /// constraints degenerate numerically, so both surface as this variant.
    #[error("the problem is unbounded or the scaled constraints are numerically singular")]
    UnboundedOrSingular,
    /// No improving feasible direction exists under the method's sign convention.
    #[error("no improving feasible direction exists; the method is not applicable")]
    Infeasible,
    /// The Simplex ratio test found multiple rows tied at the minimum.
    ///
    /// Under [`DegeneracyPolicy::StopEarly`] the solver stops at this point; the basic solution
    /// of the tableau at the moment of the tie is included, but it may not be optimal.
    #[error("degenerate basic feasible solution; stopped with a possibly suboptimal result")]
    Degenerate {
        /// The basic solution at the moment the tie was detected.
        partial: Solution,
    },
    /// The affine scaling starting point is not strictly interior.
    ///
    /// The method starts from `x = [1, ..., 1]` with slacks `b - A 1`; when such a slack is not
    /// strictly positive the walk would leave the feasible region immediately.
    #[error("starting point is not interior: slack {index} is {value}")]
    NonInteriorStart {
        /// Index of the constraint whose slack is not strictly positive.
        index: usize,
        /// The offending slack value.
        value: f64,
    },
    /// The iteration cap was reached before convergence.
    #[error("no convergence within {0} iterations")]
    IterationLimit(usize),
}

/// What to do when the Simplex ratio test ties, indicating a degenerate basic feasible solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegeneracyPolicy {
    /// Stop and report [`SolveError::Degenerate`] with the current basic solution.
    ///
    /// Cheap and honest about the risk of cycling, but the reported solution may be suboptimal.
    StopEarly,
    /// Switch to Bland's smallest-index pivot rule and continue to optimality.
    Blands,
}

impl Default for DegeneracyPolicy {
    fn default() -> Self {
        DegeneracyPolicy::StopEarly
    }
}

/// Per-call solver configuration.
///
/// Passing these explicitly (rather than consulting process-wide constants) keeps concurrent
/// solves with different tolerances safe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverOptions {
    /// Convergence and pivot tolerance.
    pub epsilon: f64,
    /// Step fraction of the affine scaling method, in `(0, 1)`.
    pub alpha: f64,
    /// Upper bound on the number of iterations of either solver.
    pub max_iterations: usize,
    /// How the Simplex method reacts to a degenerate ratio test.
    pub degeneracy: DegeneracyPolicy,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            epsilon: 1e-4,
            alpha: 0.5,
            max_iterations: 10_000,
            degeneracy: DegeneracyPolicy::default(),
        }
    }
}
