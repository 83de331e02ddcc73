//! Quaternion helpers.
//!
//! All rotations in the rig are unit quaternions. Every helper that produces
//! a quaternion renormalises it, so small drift from repeated composition
//! never accumulates into the stored orientation.

use glam::{Mat3, Quat, Vec3};

use crate::error::MathError;

/// Divide each component of `q` by its Euclidean norm.
///
/// # Errors
///
/// Returns [`MathError::ZeroNorm`] if the norm is zero or not finite.
pub fn normalize(q: Quat) -> Result<Quat, MathError> {
    let norm = q.length();
    if norm == 0.0 || !norm.is_finite() {
        return Err(MathError::ZeroNorm);
    }
    let [x, y, z, w] = q.to_array();
    Ok(Quat::from_xyzw(x / norm, y / norm, z / norm, w / norm))
}

/// Hamilton product `q1 * q2`, renormalised.
///
/// The result rotates by `q2` first and then by `q1`.
///
/// # Errors
///
/// Returns [`MathError::ZeroNorm`] if the product degenerates.
pub fn compose(q1: Quat, q2: Quat) -> Result<Quat, MathError> {
    normalize(q1 * q2)
}

/// Rotate `v` by the unit quaternion `q`, using the rotation matrix of `q`.
#[must_use]
pub fn rotate_vector(q: Quat, v: Vec3) -> Vec3 {
    Mat3::from_quat(q) * v
}

/// Build the rotation of `angle` radians about `axis`.
///
/// The axis does not need to be normalised.
///
/// # Errors
///
/// Returns [`MathError::ZeroAxis`] if `axis` has zero or non-finite length.
pub fn from_axis_angle(axis: Vec3, angle: f32) -> Result<Quat, MathError> {
    let axis = axis.try_normalize().ok_or(MathError::ZeroAxis)?;
    let (sin, cos) = (angle / 2.0).sin_cos();
    let v = axis * sin;
    Ok(Quat::from_xyzw(v.x, v.y, v.z, cos))
}
