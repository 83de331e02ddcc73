//! # rig_math
//!
//! Math for the runtime spawn rig. Re-exports [`glam`] for linear algebra and
//! defines the quaternion helpers, the host Euler convention and the
//! [`Pose`] of a spawned object.

pub mod error;
pub mod euler;
pub mod pose;
pub mod quat;

// Re-export glam types for convenience.
pub use glam::{Quat, Vec3};

pub use error::MathError;
pub use euler::{euler_to_quat, quat_to_euler};
pub use pose::Pose;
pub use quat::{compose, from_axis_angle, normalize, rotate_vector};
