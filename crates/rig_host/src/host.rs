//! The [`Host`] trait and host transform type.

use rig_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::catalog::Prefab;
use crate::error::HostError;
use crate::handle::ObjectId;

/// A transform as the host receives it: a world position and a rotation in
/// the host Euler convention (see [`rig_math::euler`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostTransform {
    /// World-space position.
    pub position: Vec3,
    /// Euler angles in radians about X, Y and Z.
    pub rotation: Vec3,
}

impl HostTransform {
    /// Create a host transform.
    #[must_use]
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }
}

/// The scripting host the rig drives.
///
/// Implementations forward each call to the game runtime. The rig makes no
/// assumption about how the host stores objects beyond the handle it returns
/// from [`Host::spawn_object`].
///
/// # Examples
///
/// ```rust
/// use rig_host::{Host, HostTransform, MemoryHost, Prefab};
/// use rig_math::Vec3;
///
/// let mut host = MemoryHost::new();
/// let id = host
///     .spawn_object(&Prefab::common("Crate"), Vec3::ZERO, Vec3::ZERO, Vec3::ONE)
///     .unwrap();
/// host.set_object_transform(id, HostTransform::new(Vec3::X, Vec3::ZERO))
///     .unwrap();
/// assert_eq!(host.object_position(id).unwrap(), Vec3::X);
/// ```
pub trait Host {
    /// Spawn `prefab` at `position` with Euler `rotation` and per-axis `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Rejected`] if the host refuses the spawn.
    fn spawn_object(
        &mut self,
        prefab: &Prefab,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
    ) -> Result<ObjectId, HostError>;

    /// Remove a previously spawned object.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownObject`] if `id` is not live.
    fn unspawn_object(&mut self, id: ObjectId) -> Result<(), HostError>;

    /// Current world position of an object.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownObject`] if `id` is not live.
    fn object_position(&self, id: ObjectId) -> Result<Vec3, HostError>;

    /// Replace an object's position and rotation.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownObject`] if `id` is not live.
    fn set_object_transform(
        &mut self,
        id: ObjectId,
        transform: HostTransform,
    ) -> Result<(), HostError>;

    /// Surface an error message to the level author.
    fn report_error(&mut self, message: &str);
}
