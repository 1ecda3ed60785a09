//! # Vector types
//!
//! A dense vector with the handful of operations the solvers need: inner products, Euclidean
//! distances and elementwise scaling.
use std::fmt::Debug;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use num_traits::{Float, NumAssign};

/// Defines basic ways to create or inspect a vector, regardless of back-end.
pub trait Vector<F>: Index<usize, Output = F> + PartialEq + Debug {
    /// Create a new instance from existing values.
    fn new(data: Vec<F>) -> Self;
    /// Set the value at an index.
    fn set_value(&mut self, index: usize, value: F);
    /// Iterate over the values.
    fn iter_values(&self) -> Iter<'_, F>;
    /// Number of items in the vector.
    fn len(&self) -> usize;
    /// Whether the vector has no items.
    fn is_empty(&self) -> bool;
}

/// Uses a `Vec<F>` as underlying data structure. Length is fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseVector<F> {
    data: Vec<F>,
}

impl<F: Float + NumAssign> DenseVector<F> {
    /// Create a vector with all values equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    pub fn constant(value: F, len: usize) -> Self {
        debug_assert_ne!(len, 0);

        Self { data: vec![value; len] }
    }

    /// Create a vector of ones.
    pub fn ones(len: usize) -> Self {
        Self::constant(F::one(), len)
    }

    /// The standard inner product with another vector of the same length.
    pub fn inner_product(&self, other: &Self) -> F {
        debug_assert_eq!(self.data.len(), other.data.len());

        self.data.iter()
            .zip(other.data.iter())
            .fold(F::zero(), |total, (&left, &right)| total + left * right)
    }

    /// Euclidean distance between this vector and another of the same length.
    pub fn distance(&self, other: &Self) -> F {
        debug_assert_eq!(self.data.len(), other.data.len());

        self.data.iter()
            .zip(other.data.iter())
            .fold(F::zero(), |total, (&left, &right)| {
                let difference = left - right;
                total + difference * difference
            })
            .sqrt()
    }

    /// Elementwise product with another vector of the same length.
    ///
    /// Multiplying by a vector `x` is how the solvers apply the diagonal matrix `diag(x)` without
    /// materializing it.
    pub fn hadamard_product(&self, other: &Self) -> Self {
        debug_assert_eq!(self.data.len(), other.data.len());

        Self {
            data: self.data.iter()
                .zip(other.data.iter())
                .map(|(&left, &right)| left * right)
                .collect(),
        }
    }

    /// Elementwise difference with another vector of the same length.
    pub fn subtract(&self, other: &Self) -> Self {
        debug_assert_eq!(self.data.len(), other.data.len());

        Self {
            data: self.data.iter()
                .zip(other.data.iter())
                .map(|(&left, &right)| left - right)
                .collect(),
        }
    }

    /// Largest absolute value of any element.
    pub fn max_absolute(&self) -> F {
        self.data.iter().fold(F::zero(), |largest, value| largest.max(value.abs()))
    }

    /// Whether all values are finite (no infinities, no NaN).
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|value| value.is_finite())
    }
}

impl<F: Float + NumAssign + Debug> Vector<F> for DenseVector<F> {
    fn new(data: Vec<F>) -> Self {
        Self { data }
    }

    fn set_value(&mut self, index: usize, value: F) {
        debug_assert!(index < self.data.len());

        self.data[index] = value;
    }

    fn iter_values(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<F> Index<usize> for DenseVector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<F> IndexMut<usize> for DenseVector<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
