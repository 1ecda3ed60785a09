//! # The Simplex method
//!
//! Tableau based Simplex with the most-negative relative cost pivot rule. The details of the
//! elementary operations are hidden away in the `Tableau` type; this module contains the
//! high-level loop and the handling of the degenerate and unbounded cases.
use log::{debug, trace};

use crate::algorithm::{DegeneracyPolicy, SolveError, SolveResult, SolverOptions};
use crate::algorithm::simplex::strategy::pivot_rule::{MostNegative, PivotRule, SmallestIndex};
use crate::algorithm::simplex::tableau::{RatioTest, Tableau};
use crate::data::linear_program::LinearProgram;

pub mod strategy;
pub mod tableau;

/// Solve a linear program with the Simplex method and the default pivot rule.
///
/// # Errors
///
/// * [`SolveError::Unbounded`] when no constraint limits the entering variable.
/// * [`SolveError::Degenerate`] when the ratio test ties and the degeneracy policy is
///   [`DegeneracyPolicy::StopEarly`]; carries the basic solution at the moment of the tie.
/// * [`SolveError::IterationLimit`] when the iteration cap is reached, which can happen on
///   cycling degenerate problems under a policy that continues past ties.
pub fn solve(program: &LinearProgram, options: &SolverOptions) -> SolveResult {
    solve_with::<MostNegative>(program, options)
}

/// Solve a linear program with the Simplex method and a caller chosen pivot rule.
///
/// The chosen rule is used until a degenerate tie is observed; from that point on, under
/// [`DegeneracyPolicy::Blands`], column selection switches to [`SmallestIndex`] permanently to
/// rule out cycling.
pub fn solve_with<PR: PivotRule>(program: &LinearProgram, options: &SolverOptions) -> SolveResult {
    let mut tableau = Tableau::from_program(program);
    let mut rule = PR::new();
    let mut fallback = SmallestIndex::new();
    let mut degenerate_seen = false;

    for iteration in 0..options.max_iterations {
        let column = if degenerate_seen {
            fallback.select_pivot_column(&tableau, options.epsilon)
        } else {
            rule.select_pivot_column(&tableau, options.epsilon)
        };
        let Some(column) = column else {
            let solution = tableau.extract_solution(options.epsilon);
            debug!("simplex: optimal after {iteration} pivots, objective {}", solution.objective_value());
            return Ok(solution);
        };

        let row = match tableau.select_pivot_row(column, options.epsilon) {
            RatioTest::Unbounded => {
                debug!("simplex: unbounded in column {column} after {iteration} pivots");
                return Err(SolveError::Unbounded);
            },
            RatioTest::Unique { row } => row,
            RatioTest::Tied { rows } => match options.degeneracy {
                DegeneracyPolicy::StopEarly => {
                    debug!("simplex: degenerate tie in column {column} after {iteration} pivots");
                    return Err(SolveError::Degenerate {
                        partial: tableau.extract_solution(options.epsilon),
                    });
                },
                DegeneracyPolicy::Blands => {
                    degenerate_seen = true;
                    debug_assert!(rows.len() >= 2);
                    // Smallest basic variable index among the tied rows; together with the
                    // smallest index column rule this is Bland's anti-cycling rule.
                    match rows.into_iter().min_by_key(|&row| tableau.basic_variable(row)) {
                        Some(row) => row,
                        None => break,
                    }
                },
            },
        };

        tableau.pivot_on(row, column);
        trace!(
            "simplex: iteration {iteration}, pivot ({row}, {column}), objective {}",
            tableau.objective_function_value(),
        );
    }

    Err(SolveError::IterationLimit(options.max_iterations))
}
