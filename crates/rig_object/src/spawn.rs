//! Spawn parameters.

use rig_host::Prefab;
use rig_math::{MathError, Quat, Vec3, euler_to_quat, from_axis_angle, quat_to_euler};

/// Initial orientation of a spawned object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    /// Host Euler angles, passed to the host unchanged.
    Euler(Vec3),
    /// Rotation of `angle` radians about `axis`.
    AxisAngle { axis: Vec3, angle: f32 },
}

impl Orientation {
    /// Resolve to a unit quaternion and the Euler vector the host should see.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroAxis`] for a degenerate axis and
    /// [`MathError::ZeroNorm`] for non-finite Euler angles.
    pub fn resolve(self) -> Result<(Quat, Vec3), MathError> {
        match self {
            Self::Euler(euler) => Ok((euler_to_quat(euler)?, euler)),
            Self::AxisAngle { axis, angle } => {
                let q = from_axis_angle(axis, angle)?;
                Ok((q, quat_to_euler(q)))
            }
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Euler(Vec3::ZERO)
    }
}

/// Everything needed to spawn a [`RigObject`](crate::RigObject).
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSpec {
    /// Asset to spawn.
    pub prefab: Prefab,
    /// Rotation pivot in world space.
    pub pivot: Vec3,
    /// Object position relative to the pivot, in the object's local frame.
    pub offset: Vec3,
    /// Initial orientation about the pivot.
    pub orientation: Orientation,
    /// Per-axis scale; `None` defers to the caller's default.
    pub scale: Option<Vec3>,
}

impl SpawnSpec {
    /// Spawn `prefab` with its pivot at `pivot`, no offset and no rotation.
    #[must_use]
    pub fn new(prefab: Prefab, pivot: Vec3) -> Self {
        Self {
            prefab,
            pivot,
            offset: Vec3::ZERO,
            orientation: Orientation::default(),
            scale: None,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_euler(mut self, euler: Vec3) -> Self {
        self.orientation = Orientation::Euler(euler);
        self
    }

    #[must_use]
    pub fn with_axis_angle(mut self, axis: Vec3, angle: f32) -> Self {
        self.orientation = Orientation::AxisAngle { axis, angle };
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }
}
