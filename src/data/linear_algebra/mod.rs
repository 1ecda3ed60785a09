//! # Linear algebra primitives
//!
//! Dense matrices and vectors, written by hand because the solvers need a small, specific set of
//! operations to be available and nothing more. All types are generic over a floating point
//! number type; the solvers instantiate them at `f64`.
pub mod factorization;
pub mod matrix;
pub mod vector;
