//! # Problems without a reportable optimum
//!
//! Unbounded and degenerate problems, and inputs that violate the preconditions of the solvers.
//! A failed solve must surface as a typed error, never as a numeric zero.
use crate::algorithm::{affine_scaling, simplex, DegeneracyPolicy, SolveError, SolverOptions};
use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
use crate::data::linear_algebra::vector::{DenseVector, Vector};
use crate::data::linear_program::{LinearProgram, ProblemError};
use crate::data::linear_program::elements::Objective;

/// Maximize `x1` subject to `x1 - x2 <= 1`: the feasible region is unbounded along the
/// objective.
fn unbounded_program() -> LinearProgram {
    LinearProgram::new(
        DenseMatrix::from_data(vec![vec![1f64, -1f64]]),
        DenseVector::new(vec![1f64]),
        DenseVector::new(vec![1f64, 0f64]),
        Objective::Maximize,
    ).unwrap()
}

#[test]
fn both_solvers_flag_an_unbounded_problem() {
    let program = unbounded_program();
    let options = SolverOptions::default();

    assert_eq!(simplex::solve(&program, &options), Err(SolveError::Unbounded));
    assert_eq!(
        affine_scaling::solve(&program, &options),
        Err(SolveError::UnboundedOrSingular),
    );
}

#[test]
fn negative_right_hand_side_is_a_construction_error() {
    // Minimize `2 x1 + 3 x2` subject to `x1 + x2 >= 1`, written as `-x1 - x2 <= -1`. The solvers
    // derive their start from an all-slack basis, which requires `b >= 0`; such problems are
    // rejected up front rather than mangled.
    let result = LinearProgram::new(
        DenseMatrix::from_data(vec![vec![-1f64, -1f64]]),
        DenseVector::new(vec![-1f64]),
        DenseVector::new(vec![2f64, 3f64]),
        Objective::Minimize,
    );

    assert_eq!(result, Err(ProblemError::NegativeRightHandSide { index: 0, value: -1f64 }));
}

/// Two identical constraints produce a tie in the first ratio test.
fn degenerate_program() -> LinearProgram {
    LinearProgram::new(
        DenseMatrix::from_data(vec![
            vec![1f64],
            vec![1f64],
        ]),
        DenseVector::new(vec![3f64, 3f64]),
        DenseVector::new(vec![2f64]),
        Objective::Maximize,
    ).unwrap()
}

#[test]
fn degenerate_policies_differ_only_in_the_reporting() {
    let program = degenerate_program();

    let stopped = simplex::solve(&program, &SolverOptions::default());
    assert!(matches!(stopped, Err(SolveError::Degenerate { .. })));

    let continued = simplex::solve(&program, &SolverOptions {
        degeneracy: DegeneracyPolicy::Blands,
        ..SolverOptions::default()
    }).unwrap();
    assert_eq!(continued.value_of(0), 3f64);
    assert_eq!(continued.objective_value(), 6f64);
}

#[test]
fn degeneracy_does_not_disturb_the_interior_walk() {
    // The same program is harmless for the affine scaling method: no vertices, no ties.
    let program = degenerate_program();

    let solution = affine_scaling::solve(&program, &SolverOptions::default()).unwrap();
    assert!((solution.objective_value() - 6f64).abs() < 1e-2);
}

#[test]
fn tight_start_is_rejected_by_the_interior_method_only() {
    // `x1 + x2 <= 2` leaves no room at `[1, 1]`: the affine scaling start is not interior. The
    // Simplex method has no such precondition and solves the problem.
    let program = LinearProgram::new(
        DenseMatrix::from_data(vec![vec![1f64, 1f64]]),
        DenseVector::new(vec![2f64]),
        DenseVector::new(vec![1f64, 1f64]),
        Objective::Maximize,
    ).unwrap();
    let options = SolverOptions::default();

    assert!(matches!(
        affine_scaling::solve(&program, &options),
        Err(SolveError::NonInteriorStart { index: 0, .. }),
    ));

    let by_simplex = simplex::solve(&program, &options).unwrap();
    assert_eq!(by_simplex.objective_value(), 2f64);
}

#[test]
fn errors_display_a_reason() {
    let program = unbounded_program();
    let options = SolverOptions::default();

    let error = simplex::solve(&program, &options).unwrap_err();
    assert_eq!(error.to_string(), "the problem is unbounded");
}
