//! Pivot pose of a spawned object.
//!
//! [`Pose`] is the pivot position plus orientation the rig tracks for each
//! object. The object itself sits at a fixed local offset from the pivot, so
//! its world position is always [`Pose::anchor`] of that offset.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::MathError;
use crate::euler::quat_to_euler;
use crate::quat::{compose, rotate_vector};

/// A rotation pivot and the orientation about it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Pose {
    /// World-space rotation pivot.
    pub pivot: Vec3,
    /// Orientation as a unit quaternion.
    pub orientation: Quat,
}

impl Pose {
    /// Pivot at the origin, no rotation.
    pub const IDENTITY: Self = Self {
        pivot: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Create a pose from a pivot and orientation.
    #[must_use]
    pub fn new(pivot: Vec3, orientation: Quat) -> Self {
        Self { pivot, orientation }
    }

    /// World position of a point at local `offset` from the pivot.
    #[must_use]
    pub fn anchor(&self, offset: Vec3) -> Vec3 {
        self.pivot + rotate_vector(self.orientation, offset)
    }

    /// The orientation as a host Euler vector.
    #[must_use]
    pub fn euler(&self) -> Vec3 {
        quat_to_euler(self.orientation)
    }

    /// Translate the pivot.
    #[must_use]
    pub fn translated(mut self, delta: Vec3) -> Self {
        self.pivot += delta;
        self
    }

    /// Rotate the pose by `rotation` about the world point `center`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroNorm`] if the composed orientation degenerates.
    pub fn rotated_about(mut self, rotation: Quat, center: Vec3) -> Result<Self, MathError> {
        self.pivot = center + rotate_vector(rotation, self.pivot - center);
        self.orientation = compose(rotation, self.orientation)?;
        Ok(self)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
