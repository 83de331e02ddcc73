//! The spawned-object wrapper.
//!
//! A [`RigObject`] sits at `pivot + orientation * offset`. Moves and pivot
//! rotations only touch its [`PendingTransform`]; [`RigObject::apply`] turns
//! the pending state into one host transform write and folds it into the
//! stored pose.
//!
//! Each rotation swings the *projected* pivot (stored pivot plus pending
//! translation), so any sequence of moves and rotations about different
//! pivots composes exactly as if every step had been applied on its own.

use rig_host::{Host, HostTransform, ObjectId, Prefab};
use rig_math::{MathError, Pose, Quat, Vec3, compose, from_axis_angle, rotate_vector};
use tracing::{debug, info};

use crate::error::RigError;
use crate::pending::PendingTransform;
use crate::spawn::SpawnSpec;

/// A host object plus the pose and pending deltas the rig tracks for it.
#[derive(Debug, Clone)]
pub struct RigObject {
    /// Host handle.
    id: ObjectId,
    /// What was spawned.
    prefab: Prefab,
    /// Fixed local offset from pivot to object.
    offset: Vec3,
    /// Pivot and orientation as of the last flush.
    pose: Pose,
    /// Deltas since the last flush.
    pending: PendingTransform,
}

impl RigObject {
    /// Spawn the object described by `spec`.
    ///
    /// The host receives the position `pivot + orientation * offset`, the
    /// spec's Euler angles (or the Euler form of its axis-angle rotation), and
    /// the spec's scale, or unit scale when it has none.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Math`] for a degenerate orientation and
    /// [`RigError::Host`] if the host refuses the spawn.
    pub fn spawn<H: Host + ?Sized>(host: &mut H, spec: &SpawnSpec) -> Result<Self, RigError> {
        let (orientation, euler) = spec.orientation.resolve()?;
        let pose = Pose::new(spec.pivot, orientation);
        let position = pose.anchor(spec.offset);
        let scale = spec.scale.unwrap_or(Vec3::ONE);

        let id = host.spawn_object(&spec.prefab, position, euler, scale)?;
        info!(object = %id, prefab = %spec.prefab, ?position, "spawned rig object");

        Ok(Self {
            id,
            prefab: spec.prefab.clone(),
            offset: spec.offset,
            pose,
            pending: PendingTransform::CLEAN,
        })
    }

    /// Unspawn the host object.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Host`] if the host no longer knows the object.
    pub fn remove<H: Host + ?Sized>(self, host: &mut H) -> Result<(), RigError> {
        host.unspawn_object(self.id)?;
        info!(object = %self.id, prefab = %self.prefab, "removed rig object");
        Ok(())
    }

    /// Queue a world-space move.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Math`] if `delta` is not finite; nothing is queued
    /// in that case.
    pub fn translate(&mut self, delta: Vec3) -> Result<(), RigError> {
        if !delta.is_finite() {
            return Err(MathError::NonFinite.into());
        }
        self.pending.push_translation(delta);
        Ok(())
    }

    /// Queue a rotation of `angle` radians about `axis`, through `pivot`.
    ///
    /// `None` rotates about the object's own (projected) pivot.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Math`] for a zero or non-finite axis; nothing is
    /// queued in that case.
    pub fn rotate(&mut self, axis: Vec3, angle: f32, pivot: Option<Vec3>) -> Result<(), RigError> {
        let delta = from_axis_angle(axis, angle)?;
        self.rotate_by(delta, pivot)
    }

    /// Queue the unit rotation `delta` through `pivot`.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Math`] for a non-finite pivot or if composing the
    /// rotation degenerates.
    pub fn rotate_by(&mut self, delta: Quat, pivot: Option<Vec3>) -> Result<(), RigError> {
        if pivot.is_some_and(|p| !p.is_finite()) {
            return Err(MathError::NonFinite.into());
        }
        let projected = self.projected_pose();
        let swung = projected.rotated_about(delta, pivot.unwrap_or(projected.pivot))?;
        self.pending.push_rotation(delta, swung.pivot - projected.pivot)?;
        Ok(())
    }

    /// Flush pending deltas to the host.
    ///
    /// The new position is read relative to where the host currently has the
    /// object, so host-side motion since the last flush is preserved. Returns
    /// `false` without calling the host when nothing is pending.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Math`] if the final orientation degenerates and
    /// [`RigError::Host`] if a host call fails. The pending state is kept
    /// on error.
    pub fn apply<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<bool, RigError> {
        if !self.pending.dirty {
            return Ok(false);
        }

        let target = compose(self.pending.rotation, self.pose.orientation)?;
        let old_arm = rotate_vector(self.pose.orientation, self.offset);
        let new_arm = rotate_vector(target, self.offset);

        let position =
            host.object_position(self.id)? + self.pending.translation + (new_arm - old_arm);
        let next = Pose::new(position - new_arm, target);
        let rotation = next.euler();
        host.set_object_transform(self.id, HostTransform::new(position, rotation))?;

        self.pose = next;
        self.pending.reset();
        debug!(object = %self.id, ?position, ?rotation, "applied transform");
        Ok(true)
    }

    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[must_use]
    pub fn prefab(&self) -> &Prefab {
        &self.prefab
    }

    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Pivot as of the last flush.
    #[must_use]
    pub fn pivot(&self) -> Vec3 {
        self.pose.pivot
    }

    /// Orientation as of the last flush.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.pose.orientation
    }

    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[must_use]
    pub fn pending(&self) -> &PendingTransform {
        &self.pending
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.pending.dirty
    }

    /// Where the pivot will be once pending deltas are applied.
    #[must_use]
    pub fn projected_pivot(&self) -> Vec3 {
        self.projected_pose().pivot
    }

    /// The pose the object will have once pending deltas are applied,
    /// assuming the host has not moved it in the meantime.
    #[must_use]
    pub fn projected_pose(&self) -> Pose {
        Pose::new(self.pose.pivot, self.pending.rotation * self.pose.orientation)
            .translated(self.pending.translation)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use rig_host::MemoryHost;
    use rig_math::MathError;

    use super::*;

    const EPS: f32 = 1e-4;

    fn spawn(host: &mut MemoryHost, pivot: Vec3, offset: Vec3) -> RigObject {
        let spec = SpawnSpec::new(Prefab::common("Panel"), pivot).with_offset(offset);
        RigObject::spawn(host, &spec).unwrap()
    }

    fn host_position(host: &MemoryHost, obj: &RigObject) -> Vec3 {
        host.object(obj.id()).unwrap().position
    }

    #[test]
    fn test_spawn_places_object_at_offset() {
        let mut host = MemoryHost::new();
        let spec = SpawnSpec::new(Prefab::common("Panel"), Vec3::new(10.0, 0.0, 0.0))
            .with_offset(Vec3::X)
            .with_axis_angle(Vec3::Z, FRAC_PI_2)
            .with_scale(Vec3::splat(3.0));
        let obj = RigObject::spawn(&mut host, &spec).unwrap();

        let spawned = host.object(obj.id()).unwrap();
        assert!(spawned.position.abs_diff_eq(Vec3::new(10.0, 1.0, 0.0), EPS));
        assert!(spawned.rotation.abs_diff_eq(Vec3::new(0.0, 0.0, FRAC_PI_2), EPS));
        assert_eq!(spawned.scale, Vec3::splat(3.0));
        assert!(!obj.is_dirty());
    }

    #[test]
    fn test_spawn_passes_euler_through() {
        let mut host = MemoryHost::new();
        let euler = Vec3::new(0.2, -0.3, 2.5);
        let spec = SpawnSpec::new(Prefab::common("Panel"), Vec3::ZERO).with_euler(euler);
        let obj = RigObject::spawn(&mut host, &spec).unwrap();
        assert_eq!(host.object(obj.id()).unwrap().rotation, euler);
        assert_eq!(host.object(obj.id()).unwrap().scale, Vec3::ONE);
    }

    #[test]
    fn test_spawn_rejects_zero_axis() {
        let mut host = MemoryHost::new();
        let spec =
            SpawnSpec::new(Prefab::common("Panel"), Vec3::ZERO).with_axis_angle(Vec3::ZERO, 1.0);
        let result = RigObject::spawn(&mut host, &spec);
        assert!(matches!(result, Err(RigError::Math(MathError::ZeroAxis))));
        assert!(host.is_empty());
    }

    #[test]
    fn test_moves_accumulate_until_apply() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::ZERO, Vec3::ZERO);
        obj.translate(Vec3::X).unwrap();
        obj.translate(Vec3::Y).unwrap();
        assert!(obj.is_dirty());
        assert_eq!(host_position(&host, &obj), Vec3::ZERO);

        assert!(obj.apply(&mut host).unwrap());
        assert_eq!(host_position(&host, &obj), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(obj.pivot(), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(host.transform_writes(), 1);
        assert!(!obj.is_dirty());
    }

    #[test]
    fn test_apply_when_clean_skips_host() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::ZERO, Vec3::X);
        assert!(!obj.apply(&mut host).unwrap());
        assert_eq!(host.transform_writes(), 0);
    }

    #[test]
    fn test_rotate_about_own_pivot_swings_offset() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::ZERO, Vec3::X);
        obj.rotate(Vec3::Z, FRAC_PI_2, None).unwrap();
        obj.apply(&mut host).unwrap();

        let placed = host.object(obj.id()).unwrap();
        assert!(placed.position.abs_diff_eq(Vec3::Y, EPS));
        assert!(placed.rotation.abs_diff_eq(Vec3::new(0.0, 0.0, FRAC_PI_2), EPS));
        assert!(obj.pivot().abs_diff_eq(Vec3::ZERO, EPS));
    }

    #[test]
    fn test_rotate_about_external_pivot_moves_pivot() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::X, Vec3::X);
        obj.rotate(Vec3::Z, FRAC_PI_2, Some(Vec3::ZERO)).unwrap();
        obj.apply(&mut host).unwrap();

        assert!(obj.pivot().abs_diff_eq(Vec3::Y, EPS));
        assert!(host_position(&host, &obj).abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), EPS));
    }

    #[test]
    fn test_batched_rotations_match_single_rotation() {
        let mut host = MemoryHost::new();
        let mut batched = spawn(&mut host, Vec3::X, Vec3::X);
        let mut single = spawn(&mut host, Vec3::X, Vec3::X);

        batched.rotate(Vec3::Z, FRAC_PI_2, Some(Vec3::ZERO)).unwrap();
        batched.rotate(Vec3::Z, FRAC_PI_2, Some(Vec3::ZERO)).unwrap();
        batched.apply(&mut host).unwrap();

        single.rotate(Vec3::Z, PI, Some(Vec3::ZERO)).unwrap();
        single.apply(&mut host).unwrap();

        let expected = Vec3::new(-2.0, 0.0, 0.0);
        assert!(host_position(&host, &batched).abs_diff_eq(expected, EPS));
        assert!(host_position(&host, &single).abs_diff_eq(expected, EPS));
        assert!(batched.pivot().abs_diff_eq(Vec3::NEG_X, EPS));
        assert!(batched.orientation().abs_diff_eq(single.orientation(), EPS));
    }

    #[test]
    fn test_batched_matches_step_by_step() {
        let mut host = MemoryHost::new();
        let mut batched = spawn(&mut host, Vec3::new(1.0, 2.0, 0.0), Vec3::new(0.5, 0.0, 1.0));
        let mut stepped = spawn(&mut host, Vec3::new(1.0, 2.0, 0.0), Vec3::new(0.5, 0.0, 1.0));

        let hinge = Vec3::new(-1.0, 0.0, 0.0);
        let steps: [(Vec3, f32, Option<Vec3>, Vec3); 3] = [
            (Vec3::Z, 0.7, Some(hinge), Vec3::new(0.0, 0.0, 1.0)),
            (Vec3::new(1.0, 1.0, 0.0), -1.1, None, Vec3::new(2.0, 0.0, 0.0)),
            (Vec3::X, 0.4, Some(Vec3::ZERO), Vec3::ZERO),
        ];

        for (axis, angle, pivot, delta) in steps {
            batched.rotate(axis, angle, pivot).unwrap();
            batched.translate(delta).unwrap();

            stepped.rotate(axis, angle, pivot).unwrap();
            stepped.apply(&mut host).unwrap();
            stepped.translate(delta).unwrap();
            stepped.apply(&mut host).unwrap();
        }
        batched.apply(&mut host).unwrap();

        assert!(host_position(&host, &batched).abs_diff_eq(host_position(&host, &stepped), EPS));
        assert!(batched.pivot().abs_diff_eq(stepped.pivot(), EPS));
        assert!(batched.orientation().abs_diff_eq(stepped.orientation(), EPS));
    }

    #[test]
    fn test_move_then_rotate_keeps_new_pivot() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::ZERO, Vec3::X);
        obj.translate(Vec3::new(5.0, 0.0, 0.0)).unwrap();
        obj.rotate(Vec3::Z, FRAC_PI_2, None).unwrap();
        obj.apply(&mut host).unwrap();

        assert!(obj.pivot().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), EPS));
        assert!(host_position(&host, &obj).abs_diff_eq(Vec3::new(5.0, 1.0, 0.0), EPS));
    }

    #[test]
    fn test_host_side_motion_is_preserved() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::ZERO, Vec3::ZERO);
        host.move_object(obj.id(), Vec3::new(0.0, 0.0, 3.0)).unwrap();

        obj.translate(Vec3::X).unwrap();
        obj.apply(&mut host).unwrap();

        assert_eq!(host_position(&host, &obj), Vec3::new(1.0, 0.0, 3.0));
        assert_eq!(obj.pivot(), Vec3::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn test_zero_axis_queues_nothing() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::ZERO, Vec3::X);
        let result = obj.rotate(Vec3::ZERO, 1.0, None);
        assert_eq!(result, Err(RigError::Math(MathError::ZeroAxis)));
        assert!(!obj.is_dirty());
    }

    #[test]
    fn test_non_finite_input_queues_nothing() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::ZERO, Vec3::X);
        let nan = Vec3::new(f32::NAN, 0.0, 0.0);
        assert_eq!(obj.translate(nan), Err(RigError::Math(MathError::NonFinite)));
        assert_eq!(
            obj.rotate(Vec3::Z, 1.0, Some(Vec3::splat(f32::INFINITY))),
            Err(RigError::Math(MathError::NonFinite))
        );
        assert!(!obj.is_dirty());
        assert_eq!(obj.projected_pivot(), Vec3::ZERO);
    }

    #[test]
    fn test_projected_pose_predicts_apply() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        obj.translate(Vec3::new(0.0, 0.0, 4.0)).unwrap();
        obj.rotate(Vec3::Z, FRAC_PI_2, Some(Vec3::ZERO)).unwrap();
        obj.rotate(Vec3::X, 0.3, None).unwrap();

        let projected = obj.projected_pose();
        obj.apply(&mut host).unwrap();

        assert!(obj.pivot().abs_diff_eq(projected.pivot, EPS));
        assert!(obj.orientation().abs_diff_eq(projected.orientation, EPS));
        let expected = projected.anchor(obj.offset());
        assert!(host_position(&host, &obj).abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_orientation_stays_unit_after_many_flushes() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
        for i in 0..500 {
            obj.rotate(Vec3::new(1.0, 0.3, -0.2), 0.01 * i as f32, Some(Vec3::ONE)).unwrap();
            obj.apply(&mut host).unwrap();
        }
        assert!((obj.orientation().length() - 1.0).abs() < 1e-5);
        let expected = obj.pose().anchor(obj.offset());
        assert!(host_position(&host, &obj).abs_diff_eq(expected, 1e-3));
    }

    #[test]
    fn test_remove_unspawns() {
        let mut host = MemoryHost::new();
        let obj = spawn(&mut host, Vec3::ZERO, Vec3::ZERO);
        let id = obj.id();
        obj.remove(&mut host).unwrap();
        assert!(host.object(id).is_none());
    }

    #[test]
    fn test_apply_unknown_object_keeps_pending() {
        let mut host = MemoryHost::new();
        let mut obj = spawn(&mut host, Vec3::ZERO, Vec3::ZERO);
        host.unspawn_object(obj.id()).unwrap();
        obj.translate(Vec3::X).unwrap();
        assert!(matches!(obj.apply(&mut host), Err(RigError::Host(_))));
        assert!(obj.is_dirty());
    }
}
