//! # Primal affine scaling
//!
//! An interior point method: the feasible region is rescaled by the current iterate so that it
//! locally looks like the positive orthant, after which a step is taken along the projection of
//! the cost gradient onto the null space of the rescaled constraints. The iterate stays strictly
//! inside the feasible region; it converges towards an optimal point rather than walking from
//! vertex to vertex.
use log::{debug, trace};

use crate::algorithm::{SolveError, SolveResult, SolverOptions};
use crate::data::linear_algebra::factorization::{LinearSolver, LuDecomposition};
use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
use crate::data::linear_algebra::vector::{DenseVector, Vector};
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::solution::Solution;

/// Condition estimates beyond this can't be distinguished from singularity in `f64`.
///
/// The limit is deliberately generous: as the walk closes in on a vertex, the Gram matrix
/// condition grows like the inverse square of the remaining slack, so a tight limit would reject
/// every run that is about to converge.
const CONDITION_LIMIT: f64 = 1e14;

/// Solve a linear program with the affine scaling method and an LU factorization back-end.
///
/// # Errors
///
/// * [`SolveError::NonInteriorStart`] when the standard starting point `[1, ..., 1]` doesn't
///   leave all slacks strictly positive.
/// * [`SolveError::UnboundedOrSingular`] when the Gram system of the scaled constraints can't be
///   solved reliably, or when the iterates diverge.
/// * [`SolveError::Infeasible`] when the projected cost offers no improving direction.
/// * [`SolveError::IterationLimit`] when the iteration cap is reached before convergence.
pub fn solve(program: &LinearProgram, options: &SolverOptions) -> SolveResult {
    solve_with::<LuDecomposition<f64>>(program, options)
}

/// Solve a linear program with the affine scaling method and a caller chosen factorization
/// back-end.
pub fn solve_with<LS: LinearSolver<f64>>(program: &LinearProgram, options: &SolverOptions) -> SolveResult {
    let nr_variables = program.nr_variables();
    let nr_constraints = program.nr_constraints();

    // Lift to M + N dimensions: structural variables start at one, the slacks absorb what the
    // constraints leave of the right hand side.
    let row_sums = program.constraints().row_sums();
    let mut start = vec![1f64; nr_variables];
    for i in 0..nr_constraints {
        let slack = program.rhs()[i] - row_sums[i];
        if slack <= options.epsilon {
            return Err(SolveError::NonInteriorStart { index: i, value: slack });
        }
        start.push(slack);
    }
    let mut x = DenseVector::new(start);

    let augmented = augment_with_slacks(program.constraints());

    let cost_sign = match program.objective() {
        Objective::Maximize => 1f64,
        Objective::Minimize => -1f64,
    };
    let cost = DenseVector::new(
        program.cost().iter_values()
            .map(|&value| cost_sign * value)
            .chain(std::iter::repeat_n(0f64, nr_constraints))
            .collect(),
    );

    let divergence_bound = 1f64 / (options.epsilon * options.epsilon);

    for iteration in 0..options.max_iterations {
        let scaled_constraints = augmented.scale_columns(&x);
        let scaled_cost = x.hadamard_product(&cost);

        let gram = scaled_constraints.multiply_matrix(&scaled_constraints.transpose());
        let Some(factored) = LS::factor(&gram) else {
            debug!("affine scaling: Gram matrix singular at iteration {iteration}");
            return Err(SolveError::UnboundedOrSingular);
        };
        if factored.condition_estimate() > CONDITION_LIMIT {
            debug!(
                "affine scaling: Gram matrix ill-conditioned ({:e}) at iteration {iteration}",
                factored.condition_estimate(),
            );
            return Err(SolveError::UnboundedOrSingular);
        }

        // Project the scaled cost onto the null space of the scaled constraints: `cc - AAᵀ y`
        // with `(AA AAᵀ) y = AA cc`. The Gram system is consistent, so any solution yields the
        // same projection even when constraint rows are (nearly) dependent.
        let multipliers = factored.solve(&scaled_constraints.multiply_vector(&scaled_cost));
        let pulled_back = scaled_constraints.transpose().multiply_vector(&multipliers);
        let projected_cost = scaled_cost.subtract(&pulled_back);

        let improves = match program.objective() {
            Objective::Maximize => projected_cost.iter_values().any(|&value| value < 0f64),
            Objective::Minimize => projected_cost.iter_values().any(|&value| value > 0f64),
        };
        if !improves {
            debug!("affine scaling: no improving direction at iteration {iteration}");
            return Err(SolveError::Infeasible);
        }

        let step = options.alpha / minimum(&projected_cost).abs();
        let x_new = DenseVector::new(
            x.iter_values()
                .zip(projected_cost.iter_values())
                .map(|(&current, &direction)| current * (1f64 + step * direction))
                .collect(),
        );

        if !x_new.is_finite() || x_new.max_absolute() > divergence_bound {
            debug!("affine scaling: iterates diverge at iteration {iteration}");
            return Err(SolveError::UnboundedOrSingular);
        }

        let movement = x_new.distance(&x);
        trace!("affine scaling: iteration {iteration}, movement {movement:e}");
        x = x_new;
        if movement < options.epsilon {
            let solution = extract_solution(&x, &cost, program.objective(), nr_variables, options.epsilon);
            debug!(
                "affine scaling: converged after {} iterations, objective {}",
                iteration + 1,
                solution.objective_value(),
            );
            return Ok(solution);
        }
    }

    Err(SolveError::IterationLimit(options.max_iterations))
}

/// The constraint matrix of the lifted problem: `[A | I]`.
fn augment_with_slacks(constraints: &DenseMatrix<f64>) -> DenseMatrix<f64> {
    let nr_constraints = constraints.nr_rows();

    DenseMatrix::from_data(
        (0..nr_constraints)
            .map(|i| {
                constraints.row(i)
                    .copied()
                    .chain((0..nr_constraints).map(|j| if i == j { 1f64 } else { 0f64 }))
                    .collect()
            })
            .collect(),
    )
}

/// Smallest value of a vector.
fn minimum(vector: &DenseVector<f64>) -> f64 {
    vector.iter_values().copied().fold(f64::INFINITY, f64::min)
}

/// Restrict the converged iterate to the structural variables and correct the objective sign.
fn extract_solution(
    x: &DenseVector<f64>,
    cost: &DenseVector<f64>,
    objective: Objective,
    nr_variables: usize,
    epsilon: f64,
) -> Solution {
    let internal_objective = cost.inner_product(x);
    let objective_value = match objective {
        Objective::Maximize => internal_objective,
        Objective::Minimize => -internal_objective,
    };

    let solution_values = x.iter_values()
        .take(nr_variables)
        .enumerate()
        .filter(|&(_, &value)| value.abs() > epsilon)
        .map(|(index, &value)| (index, value))
        .collect();

    Solution::new(objective_value, solution_values)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
    use crate::data::linear_algebra::vector::{DenseVector, Vector};
    use crate::data::linear_program::elements::Objective;

    use super::*;

    fn options() -> SolverOptions {
        SolverOptions::default()
    }

    #[test]
    fn textbook_maximization() {
        let program = LinearProgram::new(
            DenseMatrix::from_data(vec![
                vec![1f64, 0f64],
                vec![0f64, 2f64],
                vec![3f64, 2f64],
            ]),
            DenseVector::new(vec![4f64, 12f64, 18f64]),
            DenseVector::new(vec![3f64, 5f64]),
            Objective::Maximize,
        ).unwrap();

        let solution = solve(&program, &options()).unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 36f64, epsilon = 1e-2);
        assert_abs_diff_eq!(solution.value_of(0), 2f64, epsilon = 1e-2);
        assert_abs_diff_eq!(solution.value_of(1), 6f64, epsilon = 1e-2);
    }

    #[test]
    fn minimization_converges_to_origin() {
        let program = LinearProgram::new(
            DenseMatrix::from_data(vec![vec![1f64, 1f64]]),
            DenseVector::new(vec![10f64]),
            DenseVector::new(vec![2f64, 3f64]),
            Objective::Minimize,
        ).unwrap();

        let solution = solve(&program, &options()).unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 0f64, epsilon = 1e-2);
    }

    #[test]
    fn unbounded_problem_diverges() {
        let program = LinearProgram::new(
            DenseMatrix::from_data(vec![vec![1f64, -1f64]]),
            DenseVector::new(vec![1f64]),
            DenseVector::new(vec![1f64, 0f64]),
            Objective::Maximize,
        ).unwrap();

        assert_eq!(solve(&program, &options()), Err(SolveError::UnboundedOrSingular));
    }

    #[test]
    fn zero_objective_has_no_improving_direction() {
        let program = LinearProgram::new(
            DenseMatrix::from_data(vec![vec![1f64, 1f64]]),
            DenseVector::new(vec![4f64]),
            DenseVector::new(vec![0f64, 0f64]),
            Objective::Maximize,
        ).unwrap();

        assert_eq!(solve(&program, &options()), Err(SolveError::Infeasible));
    }

    #[test]
    fn non_interior_start_is_rejected() {
        // The row sum equals the right hand side, so the initial slack is zero.
        let program = LinearProgram::new(
            DenseMatrix::from_data(vec![vec![1f64, 1f64]]),
            DenseVector::new(vec![2f64]),
            DenseVector::new(vec![1f64, 1f64]),
            Objective::Maximize,
        ).unwrap();

        match solve(&program, &options()) {
            Err(SolveError::NonInteriorStart { index: 0, value }) => {
                assert_abs_diff_eq!(value, 0f64);
            },
            other => panic!("expected a non-interior start, got {other:?}"),
        }
    }

    #[test]
    fn duplicated_constraints_still_converge() {
        // Maximize `2 x1` subject to `x1 <= 3` stated twice. Both slacks vanish together, so the
        // Gram matrix of the scaled constraints approaches singularity as the walk converges; the
        // solve must still reach the optimum instead of destabilizing.
        let program = LinearProgram::new(
            DenseMatrix::from_data(vec![
                vec![1f64],
                vec![1f64],
            ]),
            DenseVector::new(vec![3f64, 3f64]),
            DenseVector::new(vec![2f64]),
            Objective::Maximize,
        ).unwrap();

        let solution = solve(&program, &options()).unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 6f64, epsilon = 1e-2);
        assert_abs_diff_eq!(solution.value_of(0), 3f64, epsilon = 1e-2);
    }

    #[test]
    fn minimization_with_negative_costs() {
        let program = LinearProgram::new(
            DenseMatrix::from_data(vec![
                vec![1f64, 0f64],
                vec![0f64, 2f64],
                vec![3f64, 2f64],
            ]),
            DenseVector::new(vec![4f64, 12f64, 18f64]),
            DenseVector::new(vec![-3f64, -5f64]),
            Objective::Minimize,
        ).unwrap();

        let solution = solve(&program, &options()).unwrap();
        assert_abs_diff_eq!(solution.objective_value(), -36f64, epsilon = 1e-2);
        assert_abs_diff_eq!(solution.value_of(0), 2f64, epsilon = 1e-2);
        assert_abs_diff_eq!(solution.value_of(1), 6f64, epsilon = 1e-2);
    }

    #[test]
    fn iteration_limit_is_reported() {
        let program = LinearProgram::new(
            DenseMatrix::from_data(vec![
                vec![1f64, 0f64],
                vec![0f64, 2f64],
                vec![3f64, 2f64],
            ]),
            DenseVector::new(vec![4f64, 12f64, 18f64]),
            DenseVector::new(vec![3f64, 5f64]),
            Objective::Maximize,
        ).unwrap();
        let options = SolverOptions { max_iterations: 2, ..SolverOptions::default() };

        assert_eq!(solve(&program, &options), Err(SolveError::IterationLimit(2)));
    }
}
