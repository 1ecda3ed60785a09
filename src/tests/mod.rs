//! # Integration tests
//!
//! Both solvers run against the same problems and their outcomes are compared against each other
//! and against closed-form optima. Each problem module builds the program once and feeds fresh
//! copies to both algorithms.
mod problem_2;
