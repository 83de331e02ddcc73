//! Conversion between quaternions and the host's Euler angles.
//!
//! The host describes rotations as a vector `(x, y, z)` of angles in radians
//! about the X, Y and Z axes, applied X first and Z last:
//! `q = Rz(z) * Ry(y) * Rx(x)`.

use glam::{Quat, Vec3};

use crate::error::MathError;
use crate::quat::normalize;

/// Convert a host Euler vector to a unit quaternion.
///
/// # Errors
///
/// Returns [`MathError::ZeroNorm`] if the angles are not finite.
pub fn euler_to_quat(euler: Vec3) -> Result<Quat, MathError> {
    let (sx, cx) = (euler.x / 2.0).sin_cos();
    let (sy, cy) = (euler.y / 2.0).sin_cos();
    let (sz, cz) = (euler.z / 2.0).sin_cos();

    let w = cx * cy * cz + sx * sy * sz;
    let x = sx * cy * cz - cx * sy * sz;
    let y = cx * sy * cz + sx * cy * sz;
    let z = cx * cy * sz - sx * sy * cz;

    normalize(Quat::from_xyzw(x, y, z, w))
}

/// Convert a unit quaternion to a host Euler vector.
///
/// The Y angle is taken from `asin` with its argument clamped to `[-1, 1]`,
/// so orientations at gimbal lock still produce finite angles.
#[must_use]
pub fn quat_to_euler(q: Quat) -> Vec3 {
    let [x, y, z, w] = q.to_array();

    let ex = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
    let ey = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin();
    let ez = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

    Vec3::new(ex, ey, ez)
}
