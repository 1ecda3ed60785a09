//! # Representation of solutions
//!
//! Once a linear program is solved, a solution is derived. Variables whose value doesn't exceed
//! the convergence tolerance are left out; a missing variable is implicitly zero. This struct
//! would typically be used to print the optimal solution for the user.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;

/// An assignment of values to the structural variables, with the accompanying objective value.
///
/// The objective value is corrected for the direction of optimization of the original problem,
/// regardless of the internal sign conventions of the algorithm that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Value of the objective function for this solution.
    objective_value: f64,
    /// (variable index, solution value) tuples, ordered by index, zero values omitted.
    solution_values: Vec<(usize, f64)>,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: f64, solution_values: Vec<(usize, f64)>) -> Self {
        debug_assert!(solution_values.windows(2).all(|pair| pair[0].0 < pair[1].0));

        Self { objective_value, solution_values }
    }

    /// The objective value.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// The retained (variable index, value) pairs, ordered by variable index.
    pub fn solution_values(&self) -> &[(usize, f64)] {
        &self.solution_values
    }

    /// Value of a single variable; zero when the variable was filtered out.
    pub fn value_of(&self, variable: usize) -> f64 {
        self.solution_values.iter()
            .find(|&&(index, _)| index == variable)
            .map_or(0f64, |&(_, value)| value)
    }

    /// Whether two solutions are approximately the same.
    ///
    /// Both the objective values and all variable values need to match within the given
    /// tolerance. Variables absent on one side compare as zero.
    pub fn is_probably_equal_to(&self, other: &Self, tolerance: f64) -> bool {
        if (self.objective_value - other.objective_value).abs() > tolerance {
            return false;
        }

        self.solution_values.iter()
            .map(|&(index, _)| index)
            .chain(other.solution_values.iter().map(|&(index, _)| index))
            .all(|index| (self.value_of(index) - other.value_of(index)).abs() <= tolerance)
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Objective value: {}", self.objective_value)?;
        let values = self.solution_values.iter()
            .map(|(index, value)| format!("x{index} = {value}"))
            .join(", ");
        write!(f, "{values}")
    }
}
