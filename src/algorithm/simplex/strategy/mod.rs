//! # Strategies
//!
//! Interchangeable decision rules used inside the Simplex method.
pub mod pivot_rule;
