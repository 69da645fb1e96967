//! Geometry error types
//!
//! All failures are local to the call that produced them; the caller decides
//! whether to skip a frame or abort.

use std::fmt;
use hyperwire_math::DegenerateRotationError;

/// Error type for hypercube generation and rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Dimension is zero or too large to enumerate
    InvalidDimension(usize),
    /// Rotation label or coordinate pair is not valid for the dimension
    UnknownAxis {
        /// The offending label (or coordinate pair, e.g. `"(0, 7)"`)
        label: String,
        /// Dimension the label was resolved against
        dimension: usize,
    },
    /// A vector-to-vector rotation could not be constructed
    DegenerateRotation(DegenerateRotationError),
}

impl GeometryError {
    pub(crate) fn unknown_axis(label: impl Into<String>, dimension: usize) -> Self {
        GeometryError::UnknownAxis { label: label.into(), dimension }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidDimension(dim) => {
                write!(f, "Invalid dimension: {} (expected 1..={})", dim, crate::MAX_DIMENSION)
            }
            GeometryError::UnknownAxis { label, dimension } => {
                write!(f, "Unknown rotation axis '{}' for {}-dimensional shape", label, dimension)
            }
            GeometryError::DegenerateRotation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeometryError::DegenerateRotation(err) => Some(err),
            GeometryError::InvalidDimension(_) => None,
            GeometryError::UnknownAxis { .. } => None,
        }
    }
}

impl From<DegenerateRotationError> for GeometryError {
    fn from(err: DegenerateRotationError) -> Self {
        GeometryError::DegenerateRotation(err)
    }
}
