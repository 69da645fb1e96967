//! Math error types

use std::fmt;

/// A rotation between two vectors could not be constructed
///
/// Returned instead of a matrix full of NaN/Infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateRotationError {
    /// One of the input vectors has (near) zero length
    ZeroLength,
    /// The input vectors point in opposite directions, so the rotation axis is undefined
    AntiParallel,
}

impl fmt::Display for DegenerateRotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateRotationError::ZeroLength => {
                write!(f, "Degenerate rotation: zero-length input vector")
            }
            DegenerateRotationError::AntiParallel => {
                write!(f, "Degenerate rotation: vectors are anti-parallel")
            }
        }
    }
}

impl std::error::Error for DegenerateRotationError {}
