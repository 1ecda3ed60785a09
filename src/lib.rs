//! # A linear program solver, twice over
//!
//! Linear programs of the form "optimize `c x` subject to `A x <= b`, `x >= 0`" are solved with
//! two independent numerical algorithms: the tableau Simplex method and a primal affine-scaling
//! interior point method. Both consume the same problem description and should agree, within
//! tolerance, on the optimal objective value of a feasible and bounded problem, which makes
//! running both a cheap sanity check on either.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
