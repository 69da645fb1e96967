//! N-dimensional vector type
//!
//! Hypercube vertices live in an arbitrary number of dimensions, so unlike
//! [`Vec3`](crate::Vec3) the component count is only known at runtime.

use serde::{Serialize, Deserialize};
use std::ops::{Index, IndexMut};

/// A point in n-dimensional space
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VecN(Vec<f64>);

impl VecN {
    /// Create a vector from its coordinates
    pub fn new(coords: Vec<f64>) -> Self {
        Self(coords)
    }

    /// Create the zero vector of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self(vec![0.0; dim])
    }

    /// Number of coordinates
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Coordinates as a slice
    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.0
    }

    /// Coordinates as a mutable slice
    #[inline]
    pub fn coords_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }

    /// Coordinate `i`, or 0 if the vector has fewer dimensions
    #[inline]
    pub fn get_or_zero(&self, i: usize) -> f64 {
        self.0.get(i).copied().unwrap_or(0.0)
    }

    /// The last coordinate, if any
    #[inline]
    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// Dot product; both vectors must have the same dimension
    pub fn dot(&self, other: &Self) -> f64 {
        debug_assert_eq!(self.dim(), other.dim());
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }

    /// Length (magnitude)
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Number of coordinates in which the two vectors differ
    pub fn differing_coords(&self, other: &Self) -> usize {
        self.0.iter().zip(&other.0).filter(|(a, b)| a != b).count()
    }

    /// Largest absolute coordinate difference (for approximate comparison)
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl From<Vec<f64>> for VecN {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords)
    }
}

impl Index<usize> for VecN {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for VecN {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let v = VecN::zeros(5);
        assert_eq!(v.dim(), 5);
        assert!(v.coords().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_index() {
        let mut v = VecN::new(vec![1.0, -1.0, 1.0]);
        assert_eq!(v[1], -1.0);
        v[1] = 0.5;
        assert_eq!(v.coords(), &[1.0, 0.5, 1.0]);
    }

    #[test]
    fn test_get_or_zero_pads() {
        let v = VecN::new(vec![1.0, 2.0]);
        assert_eq!(v.get_or_zero(1), 2.0);
        assert_eq!(v.get_or_zero(2), 0.0);
    }

    #[test]
    fn test_differing_coords() {
        let a = VecN::new(vec![-1.0, -1.0, 1.0, 1.0]);
        let b = VecN::new(vec![-1.0, 1.0, 1.0, 1.0]);
        let c = VecN::new(vec![1.0, 1.0, 1.0, 1.0]);
        assert_eq!(a.differing_coords(&b), 1);
        assert_eq!(a.differing_coords(&c), 2);
        assert_eq!(a.differing_coords(&a), 0);
    }

    #[test]
    fn test_length() {
        let v = VecN::new(vec![1.0, 1.0, 1.0, 1.0]);
        assert!((v.length() - 2.0).abs() < 1e-12);
    }
}
