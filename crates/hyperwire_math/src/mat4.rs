//! 4x4 homogeneous matrix utilities
//!
//! Matrices are row-major: `m[row][col]`, and transform column vectors
//! (`p' = M * p`). The last row of every affine matrix built here is `[0, 0, 0, 1]`.

use crate::{DegenerateRotationError, Quaternion, Vec3};

/// 4x4 matrix type (row-major)
pub type Mat4 = [[f64; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Rotation matrix mapping the direction of `from` onto the direction of `to`
///
/// Only the direction is matched: the result applied to `from` is parallel
/// to `to` but keeps the length of `from`. Scaling is the caller's business.
///
/// # Errors
/// [`DegenerateRotationError`] when either vector has zero length or the two
/// are anti-parallel.
///
/// # Example
/// ```
/// use hyperwire_math::{Vec3, mat4::{rotation_between, transform_direction}};
/// let m = rotation_between(Vec3::Z, Vec3::X).unwrap();
/// let v = transform_direction(&m, Vec3::Z);
/// assert!((v - Vec3::X).length() < 1e-9);
/// ```
pub fn rotation_between(from: Vec3, to: Vec3) -> Result<Mat4, DegenerateRotationError> {
    Ok(Quaternion::from_rotation_between(from, to)?.to_matrix())
}

/// Half turn about the x axis; maps +z onto -z
pub fn half_turn_x() -> Mat4 {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, -1.0, 0.0, 0.0],
        [0.0, 0.0, -1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Translation matrix
pub fn translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][3] = t.x;
    m[1][3] = t.y;
    m[2][3] = t.z;
    m
}

/// Non-uniform scale matrix
pub fn scale(s: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s.x;
    m[1][1] = s.y;
    m[2][2] = s.z;
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// Applied to a vector, b acts first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut result = [[0.0f64; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    result
}

/// Transform a point (w = 1, translation applies)
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
        m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
        m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
    )
}

/// Transform a direction (w = 0, translation ignored)
pub fn transform_direction(m: &Mat4, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
        m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
        m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
    )
}

/// Transpose a matrix
pub fn transpose(m: &Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Narrow to `f32` for GPU buffers
pub fn to_f32(m: &Mat4) -> [[f32; 4]; 4] {
    m.map(|row| row.map(|v| v as f32))
}
