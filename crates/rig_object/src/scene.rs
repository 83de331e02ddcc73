//! A set of rig objects driven over one host.
//!
//! [`Scene`] owns the host and every [`RigObject`] spawned through it. Level
//! scripts queue moves and rotations by handle, then flush with
//! [`Scene::apply_all`] once per update.
//!
//! Degenerate move or rotation input never fails a script: the scene reports
//! it to the host, logs it, drops the offending delta and carries on. Unknown
//! handles and host failures still propagate as [`RigError`].

use std::collections::{BTreeMap, BTreeSet};

use rig_host::{Host, ObjectId};
use rig_math::{MathError, Vec3, from_axis_angle};
use tracing::{debug, info, warn};

use crate::config::SceneConfig;
use crate::error::RigError;
use crate::object::RigObject;
use crate::spawn::{Orientation, SpawnSpec};

/// Rig objects spawned into one host.
#[derive(Debug)]
pub struct Scene<H: Host> {
    host: H,
    config: SceneConfig,
    objects: BTreeMap<ObjectId, RigObject>,
}

impl<H: Host> Scene<H> {
    /// Create an empty scene over `host`.
    #[must_use]
    pub fn new(host: H, config: SceneConfig) -> Self {
        Self {
            host,
            config,
            objects: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give the host back, dropping the rig's bookkeeping. Host objects stay
    /// spawned.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Number of managed objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Look up a managed object.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&RigObject> {
        self.objects.get(&id)
    }

    /// Handles of managed objects, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.keys().copied()
    }

    /// Spawn an object and start managing it.
    ///
    /// A spec without a scale gets [`SceneConfig::default_scale`]. A
    /// degenerate orientation is reported and the object spawns unrotated.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Host`] if the host refuses the spawn.
    pub fn spawn(&mut self, mut spec: SpawnSpec) -> Result<ObjectId, RigError> {
        spec.scale.get_or_insert(self.config.default_scale);

        let object = match RigObject::spawn(&mut self.host, &spec) {
            Err(RigError::Math(err)) => {
                self.report(&format!("spawn of {}", spec.prefab), err, "rotation disabled");
                spec.orientation = Orientation::default();
                RigObject::spawn(&mut self.host, &spec)?
            }
            other => other?,
        };

        let id = object.id();
        self.objects.insert(id, object);
        info!(scene = %self.config.name, object = %id, count = self.objects.len(), "object added");
        Ok(id)
    }

    /// Unspawn an object and stop managing it.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownObject`] if the scene does not manage `id`,
    /// or [`RigError::Host`] if the host call fails.
    pub fn remove(&mut self, id: ObjectId) -> Result<(), RigError> {
        let object = self.objects.remove(&id).ok_or(RigError::UnknownObject(id))?;
        object.remove(&mut self.host)
    }

    /// Queue a move for one object. A non-finite `delta` is reported and
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownObject`] if the scene does not manage `id`.
    pub fn translate(&mut self, id: ObjectId, delta: Vec3) -> Result<(), RigError> {
        let result = self.object_mut(id)?.translate(delta);
        match result {
            Err(RigError::Math(err)) => {
                self.report(&id.to_string(), err, "move ignored");
                Ok(())
            }
            other => other,
        }
    }

    /// Queue a rotation for one object. `None` rotates about its own pivot.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownObject`] if the scene does not manage `id`.
    pub fn rotate(
        &mut self,
        id: ObjectId,
        axis: Vec3,
        angle: f32,
        pivot: Option<Vec3>,
    ) -> Result<(), RigError> {
        let result = self.object_mut(id)?.rotate(axis, angle, pivot);
        match result {
            Err(RigError::Math(err)) => {
                self.report(&id.to_string(), err, "rotation ignored");
                Ok(())
            }
            other => other,
        }
    }

    /// Queue the same move for several objects. A handle listed more than
    /// once is moved once.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownObject`] if any handle is unmanaged; no
    /// object is touched in that case.
    pub fn translate_group(&mut self, ids: &[ObjectId], delta: Vec3) -> Result<(), RigError> {
        let group = self.managed_group(ids)?;
        if !delta.is_finite() {
            let subject = format!("group of {}", group.len());
            self.report(&subject, MathError::NonFinite, "move ignored");
            return Ok(());
        }
        for id in group {
            self.object_mut(id)?.translate(delta)?;
        }
        Ok(())
    }

    /// Queue one rotation about a shared world `pivot` for several objects,
    /// so they turn together as a rigid group. A handle listed more than once
    /// is rotated once.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownObject`] if any handle is unmanaged; no
    /// object is touched in that case.
    pub fn rotate_group(
        &mut self,
        ids: &[ObjectId],
        axis: Vec3,
        angle: f32,
        pivot: Vec3,
    ) -> Result<(), RigError> {
        let group = self.managed_group(ids)?;
        let delta = if pivot.is_finite() {
            from_axis_angle(axis, angle)
        } else {
            Err(MathError::NonFinite)
        };
        let delta = match delta {
            Ok(delta) => delta,
            Err(err) => {
                self.report(&format!("group of {}", group.len()), err, "rotation ignored");
                return Ok(());
            }
        };

        for id in group {
            let result = self.object_mut(id)?.rotate_by(delta, Some(pivot));
            if let Err(RigError::Math(err)) = result {
                self.report(&id.to_string(), err, "rotation ignored");
            }
        }
        Ok(())
    }

    /// Flush one object's pending deltas. Returns whether the host was
    /// written.
    ///
    /// Degenerate input is dropped when it is queued, so the flush itself
    /// only fails on unknown handles or host errors.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownObject`] if the scene does not manage `id`,
    /// or [`RigError::Host`] if a host call fails.
    pub fn apply(&mut self, id: ObjectId) -> Result<bool, RigError> {
        self.objects
            .get_mut(&id)
            .ok_or(RigError::UnknownObject(id))?
            .apply(&mut self.host)
    }

    /// Flush every dirty object. Returns how many host writes were made.
    ///
    /// # Errors
    ///
    /// Stops at the first host failure and returns it.
    pub fn apply_all(&mut self) -> Result<usize, RigError> {
        let dirty: Vec<ObjectId> = self
            .objects
            .values()
            .filter(|obj| obj.is_dirty())
            .map(RigObject::id)
            .collect();

        let mut written = 0;
        for id in dirty {
            if self.apply(id)? {
                written += 1;
            }
        }
        debug!(scene = %self.config.name, written, "applied scene");
        Ok(written)
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut RigObject, RigError> {
        self.objects.get_mut(&id).ok_or(RigError::UnknownObject(id))
    }

    /// Deduplicate `ids`, failing on the first handle the scene does not
    /// manage.
    fn managed_group(&self, ids: &[ObjectId]) -> Result<BTreeSet<ObjectId>, RigError> {
        match ids.iter().find(|id| !self.objects.contains_key(*id)) {
            Some(id) => Err(RigError::UnknownObject(*id)),
            None => Ok(ids.iter().copied().collect()),
        }
    }

    fn report(&mut self, subject: &str, err: MathError, outcome: &str) {
        warn!(scene = %self.config.name, subject, %err, outcome, "degenerate transform input");
        if self.config.report_errors {
            self.host.report_error(&format!("{subject}: {err}; {outcome}"));
        }
    }
}
