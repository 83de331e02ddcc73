//! Deltas waiting to be flushed to the host.

use rig_math::{MathError, Quat, Vec3, compose};

/// Translation and rotation accumulated since the last flush.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransform {
    /// World-space displacement of the pivot.
    pub translation: Vec3,
    /// Rotation to pre-multiply onto the stored orientation.
    pub rotation: Quat,
    /// Set once any delta has been pushed.
    pub dirty: bool,
}

impl PendingTransform {
    /// No pending change.
    pub const CLEAN: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        dirty: false,
    };

    /// Add a displacement.
    pub fn push_translation(&mut self, delta: Vec3) {
        self.translation += delta;
        self.dirty = true;
    }

    /// Compose `delta` after the pending rotation and add the pivot shift it
    /// causes.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroNorm`] if the composition degenerates; the
    /// pending state is left unchanged.
    pub fn push_rotation(&mut self, delta: Quat, shift: Vec3) -> Result<(), MathError> {
        self.rotation = compose(delta, self.rotation)?;
        self.translation += shift;
        self.dirty = true;
        Ok(())
    }

    /// Forget everything pending.
    pub fn reset(&mut self) {
        *self = Self::CLEAN;
    }
}

impl Default for PendingTransform {
    fn default() -> Self {
        Self::CLEAN
    }
}
