//! # Pivot rules
//!
//! Strategies for selecting the entering variable. During the Simplex method, one needs to decide
//! how to move from basic solution to basic solution; the pivot rule describes that behavior.
//!
//! Once the column has been selected, the row is found with the ratio test. That decision is
//! currently made independently of the strategy, except for the tie-break applied under Bland's
//! rule.
use itertools::Itertools;

use crate::algorithm::simplex::tableau::Tableau;

/// Deciding on the entering variable.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;
    /// Column selection rule.
    ///
    /// # Return value
    ///
    /// `None` if no column has a relative cost below `-epsilon`, in which case the current basic
    /// solution is optimal.
    fn select_pivot_column(&mut self, tableau: &Tableau, epsilon: f64) -> Option<usize>;
}

/// Pivot on the column with the most negative relative cost, the classic textbook rule.
///
/// Ties are broken by the first occurrence.
pub struct MostNegative;

impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_pivot_column(&mut self, tableau: &Tableau, epsilon: f64) -> Option<usize> {
        (0..tableau.nr_active_columns())
            .map(|column| tableau.relative_cost(column))
            .position_min_by(|left, right| left.total_cmp(right))
            .filter(|&column| tableau.relative_cost(column) < -epsilon)
    }
}

/// Pivot on the first column with a negative relative cost (Bland's rule).
///
/// Combined with the smallest-basic-index tie-break in the ratio test this rule cannot cycle,
/// which makes it the fallback once a degenerate tie has been observed.
pub struct SmallestIndex;

impl PivotRule for SmallestIndex {
    fn new() -> Self {
        Self
    }

    fn select_pivot_column(&mut self, tableau: &Tableau, epsilon: f64) -> Option<usize> {
        (0..tableau.nr_active_columns())
            .find(|&column| tableau.relative_cost(column) < -epsilon)
    }
}
