//! In-memory [`Host`] implementation.
//!
//! [`MemoryHost`] keeps every spawned object in a map and records reported
//! errors, which is enough to run the rig outside the game.

use std::collections::BTreeMap;

use rig_math::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Prefab;
use crate::error::HostError;
use crate::handle::ObjectId;
use crate::host::{Host, HostTransform};

/// An object as stored by [`MemoryHost`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostObject {
    /// What was spawned.
    pub prefab: Prefab,
    /// Current world position.
    pub position: Vec3,
    /// Current Euler rotation.
    pub rotation: Vec3,
    /// Scale given at spawn time.
    pub scale: Vec3,
}

/// A host that lives entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    /// Raw value of the last handle given out; 0 before the first spawn.
    last_id: u64,
    /// Live objects, keyed by handle.
    objects: BTreeMap<ObjectId, HostObject>,
    /// Messages passed to [`Host::report_error`], oldest first.
    errors: Vec<String>,
    /// Number of successful [`Host::set_object_transform`] calls.
    transform_writes: usize,
}

impl MemoryHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a live object.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&HostObject> {
        self.objects.get(&id)
    }

    /// Iterate over live objects in handle order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &HostObject)> {
        self.objects.iter().map(|(id, obj)| (*id, obj))
    }

    /// Number of live objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if no objects are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Errors reported so far.
    #[must_use]
    pub fn reported_errors(&self) -> &[String] {
        &self.errors
    }

    /// How many transform writes the host has accepted.
    #[must_use]
    pub fn transform_writes(&self) -> usize {
        self.transform_writes
    }

    /// Move an object without going through the rig, as game logic or
    /// physics would.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnknownObject`] if `id` is not live.
    pub fn move_object(&mut self, id: ObjectId, delta: Vec3) -> Result<(), HostError> {
        let obj = self
            .objects
            .get_mut(&id)
            .ok_or(HostError::UnknownObject(id))?;
        obj.position += delta;
        Ok(())
    }
}

impl Host for MemoryHost {
    fn spawn_object(
        &mut self,
        prefab: &Prefab,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
    ) -> Result<ObjectId, HostError> {
        if !(position.is_finite() && rotation.is_finite() && scale.is_finite()) {
            return Err(HostError::Rejected(format!(
                "non-finite spawn transform for {prefab}"
            )));
        }
        self.last_id += 1;
        let id = ObjectId::from_raw(self.last_id);
        self.objects.insert(
            id,
            HostObject {
                prefab: prefab.clone(),
                position,
                rotation,
                scale,
            },
        );
        debug!(object = %id, %prefab, "host spawned object");
        Ok(id)
    }

    fn unspawn_object(&mut self, id: ObjectId) -> Result<(), HostError> {
        self.objects
            .remove(&id)
            .map(|_| ())
            .ok_or(HostError::UnknownObject(id))
    }

    fn object_position(&self, id: ObjectId) -> Result<Vec3, HostError> {
        self.objects
            .get(&id)
            .map(|obj| obj.position)
            .ok_or(HostError::UnknownObject(id))
    }

    fn set_object_transform(
        &mut self,
        id: ObjectId,
        transform: HostTransform,
    ) -> Result<(), HostError> {
        let obj = self
            .objects
            .get_mut(&id)
            .ok_or(HostError::UnknownObject(id))?;
        if !(transform.position.is_finite() && transform.rotation.is_finite()) {
            return Err(HostError::Rejected(format!("non-finite transform for {id}")));
        }
        obj.position = transform.position;
        obj.rotation = transform.rotation;
        self.transform_writes += 1;
        Ok(())
    }

    fn report_error(&mut self, message: &str) {
        warn!(report = message, "host error report");
        self.errors.push(message.to_owned());
    }
}
