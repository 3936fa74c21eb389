//! Tick advancement and keyframe capture.

use super::InterpEngine;
use crate::pose::{BoneTransform, RootPose, SkeletonSnapshot};
use crate::track::{CameraTrack, EntityId, EntityTrack};

impl InterpEngine {
    /// Advance the logic-tick counter.
    ///
    /// Call exactly once per simulation step, strictly before that step's
    /// captures. No-op when uninitialized.
    pub fn on_logic_tick(&mut self) {
        if !self.initialized {
            return;
        }
        self.tick += 1;
    }

    /// Record a keyframe for `id` at the current logic tick.
    ///
    /// Finds or allocates a tracking slot (linear scan over the fixed
    /// table) and shifts the slot's current keyframe into its previous one
    /// before storing the new data. The second capture for an entity makes
    /// it eligible for interpolation.
    ///
    /// Degrades silently in every failure mode: does nothing when the
    /// engine is disabled, uninitialized, or the host gate reports off;
    /// ignores an empty bone slice; truncates bones beyond
    /// [`MAX_BONES`](crate::pose::MAX_BONES); drops the capture when the
    /// table is full (the entity simply renders unsmoothed).
    pub fn capture(
        &mut self,
        id: EntityId,
        bones: &[BoneTransform],
        root: RootPose,
    ) {
        if !self.work_allowed() || bones.is_empty() {
            return;
        }

        let snapshot = SkeletonSnapshot::from_bones(root, bones);
        let tick = self.tick;

        if let Some(track) = self.find_track_mut(id) {
            track.record(tick, snapshot);
            return;
        }

        let Some(slot) = self.slots.iter_mut().find(|slot| slot.is_none())
        else {
            log::debug!("pose track table full; dropping capture for {id:?}");
            return;
        };
        *slot = Some(EntityTrack::primed(id, tick, snapshot));
    }

    /// Record a camera keyframe (root placement only) at the current logic
    /// tick. Same gating and validity rules as entity captures.
    pub fn capture_camera(&mut self, root: RootPose) {
        if !self.work_allowed() {
            return;
        }
        let tick = self.tick;
        if let Some(track) = &mut self.camera {
            track.record(tick, root);
        } else {
            self.camera = Some(CameraTrack::primed(tick, root));
        }
    }
}
