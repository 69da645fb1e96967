//! Rotation within a single coordinate plane
//!
//! The n-dimensional generalisation of "rotate about an axis": a rotation
//! mixes exactly two coordinates `p` and `q` and leaves every other
//! coordinate alone. Which pair is mixed, and in which order, is decided by
//! the caller; swapping `p` and `q` reverses the direction of rotation.

/// Rotate coordinates `p` and `q` of `coords` given a precomputed `cos`/`sin`
///
/// `p' = p·cos − q·sin`, `q' = p·sin + q·cos`.
///
/// # Panics
/// If `p` or `q` is out of bounds for `coords`.
#[inline]
pub fn rotate_in_plane(coords: &mut [f64], p: usize, q: usize, cos: f64, sin: f64) {
    let a = coords[p];
    let b = coords[q];
    coords[p] = a * cos - b * sin;
    coords[q] = a * sin + b * cos;
}
