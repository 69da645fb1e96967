//! Quaternions for 3D rotations
//!
//! Only what the connector geometry needs: building the rotation that carries
//! one direction onto another, and turning it into a homogeneous matrix.
//!
//! q = w + x*i + y*j + z*k

use crate::{DegenerateRotationError, Vec3};
use crate::mat4::Mat4;

/// Relative quaternion norm below which two vectors count as anti-parallel
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Quaternion representing a 3D rotation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    /// Real (scalar) component
    pub w: f64,
    /// i component
    pub x: f64,
    /// j component
    pub y: f64,
    /// k component
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    /// Create a quaternion from raw components
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Shortest-arc rotation carrying the direction of `from` onto the direction of `to`
    ///
    /// The imaginary part is `from × to` and the real part is
    /// `dot + sqrt(dot² + |cross|²)`, i.e. `dot + |from||to|`, normalized
    /// afterwards. Inputs need not be unit length.
    pub fn from_rotation_between(from: Vec3, to: Vec3) -> Result<Self, DegenerateRotationError> {
        let scale = from.length() * to.length();
        if !(scale > f64::MIN_POSITIVE) || !scale.is_finite() {
            return Err(DegenerateRotationError::ZeroLength);
        }

        let cross = from.cross(to);
        let dot = from.dot(to);
        let w = dot + (dot * dot + cross.length_squared()).sqrt();
        let q = Self::new(w, cross.x, cross.y, cross.z);

        if q.magnitude() <= DEGENERATE_EPSILON * scale {
            return Err(DegenerateRotationError::AntiParallel);
        }

        Ok(q.normalize())
    }

    /// Squared magnitude
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Normalize to unit magnitude
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            let inv_mag = 1.0 / mag;
            Self::new(self.w * inv_mag, self.x * inv_mag, self.y * inv_mag, self.z * inv_mag)
        } else {
            Self::IDENTITY
        }
    }

    /// Conjugate; the inverse rotation for unit quaternions
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Rotate a vector (the quaternion must be unit length)
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        // v' = v + 2w(u × v) + 2u × (u × v), u = imaginary part
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }

    /// Convert to a row-major 4x4 homogeneous rotation matrix
    pub fn to_matrix(&self) -> Mat4 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let wx = 2.0 * w * x;
        let wy = 2.0 * w * y;
        let wz = 2.0 * w * z;
        let xx = 2.0 * x * x;
        let xy = 2.0 * x * y;
        let xz = 2.0 * x * z;
        let yy = 2.0 * y * y;
        let yz = 2.0 * y * z;
        let zz = 2.0 * z * z;

        [
            [1.0 - (yy + zz), xy - wz, xz + wy, 0.0],
            [xy + wz, 1.0 - (xx + zz), yz - wx, 0.0],
            [xz - wy, yz + wx, 1.0 - (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat4::transform_direction;

    const EPSILON: f64 = 1e-9;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_rotation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(Quaternion::IDENTITY.rotate(v), v));
    }

    #[test]
    fn test_between_same_direction_is_identity() {
        let q = Quaternion::from_rotation_between(Vec3::X, Vec3::X * 3.0).unwrap();
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[test]
    fn test_between_z_and_x() {
        let q = Quaternion::from_rotation_between(Vec3::Z, Vec3::X).unwrap();
        assert!(vec_approx_eq(q.rotate(Vec3::Z), Vec3::X), "got {:?}", q.rotate(Vec3::Z));
    }

    #[test]
    fn test_rotate_matches_matrix() {
        let q = Quaternion::from_rotation_between(Vec3::new(1.0, 2.0, -1.0), Vec3::new(-3.0, 0.5, 2.0)).unwrap();
        let v = Vec3::new(0.3, -0.7, 1.1);
        let m = q.to_matrix();
        assert!(vec_approx_eq(q.rotate(v), transform_direction(&m, v)));
    }

    #[test]
    fn test_conjugate_inverts() {
        let q = Quaternion::from_rotation_between(Vec3::Y, Vec3::new(1.0, 1.0, 0.0)).unwrap();
        let v = Vec3::new(0.2, 0.4, 0.6);
        assert!(vec_approx_eq(q.conjugate().rotate(q.rotate(v)), v));
    }

    #[test]
    fn test_zero_length_rejected() {
        assert_eq!(
            Quaternion::from_rotation_between(Vec3::ZERO, Vec3::X),
            Err(DegenerateRotationError::ZeroLength)
        );
        assert_eq!(
            Quaternion::from_rotation_between(Vec3::X, Vec3::ZERO),
            Err(DegenerateRotationError::ZeroLength)
        );
    }

    #[test]
    fn test_anti_parallel_rejected() {
        assert_eq!(
            Quaternion::from_rotation_between(Vec3::Z, -Vec3::Z * 2.0),
            Err(DegenerateRotationError::AntiParallel)
        );
    }

    #[test]
    fn test_normalize() {
        let q = Quaternion::new(2.0, 0.0, 0.0, 0.0).normalize();
        assert_eq!(q, Quaternion::IDENTITY);
        assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize(), Quaternion::IDENTITY);
    }
}
