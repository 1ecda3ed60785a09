//! # Data structures
//!
//! Linear algebra primitives and the representation of linear programs and their solutions.
pub mod linear_algebra;
pub mod linear_program;
