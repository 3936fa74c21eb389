//! Render-frame blending and pose queries.

use super::{InterpEngine, STALE_TICKS};
use crate::blend::{lerp_vec3, sharpen};
use crate::pose::{RootPose, SkeletonSnapshot};
use crate::track::{EntityId, EntityTrack, TrackPhase};

/// Which channels to blend this frame, copied out of the config once per
/// update so the per-bone loop reads locals.
#[derive(Clone, Copy)]
struct Channels {
    position: bool,
    rotation: bool,
    scale: bool,
}

impl InterpEngine {
    /// Blend every valid, recently-captured track for the current render
    /// frame.
    ///
    /// `alpha` is the fractional progress between the previous and current
    /// logic tick; out-of-range values are clamped, then warped by the
    /// configured blend sharpness. Tracks whose last capture is more than
    /// [`STALE_TICKS`] old are skipped, freezing their rendered output at
    /// the last computed pose. No-op when the engine is disabled,
    /// uninitialized, or the host gate reports off.
    pub fn update(&mut self, alpha: f32) {
        if !self.work_allowed() {
            return;
        }

        let t = sharpen(alpha, self.config.blend_sharpness);
        let tick = self.tick;
        let channels = Channels {
            position: self.config.interp_position,
            rotation: self.config.interp_rotation,
            scale: self.config.interp_scale,
        };

        for track in self.slots.iter_mut().flatten() {
            if track.phase != TrackPhase::Valid
                || track.staleness(tick) > STALE_TICKS
            {
                continue;
            }
            blend_track(track, t, channels);
        }

        let camera_on = self.config.interp_camera;
        if let Some(camera) = &mut self.camera {
            if camera.phase == TrackPhase::Valid
                && camera.staleness(tick) <= STALE_TICKS
            {
                camera.rendered = if camera_on {
                    blend_root(&camera.prev, &camera.curr, t, true, true)
                } else {
                    camera.curr
                };
            }
        }
    }

    /// The most recently blended snapshot for `id`.
    ///
    /// `None` when the entity is untracked, not yet valid (fewer than two
    /// captures), or the engine is disabled or uninitialized. The data is
    /// only current until the next [`update`](Self::update).
    #[must_use]
    pub fn pose(&self, id: EntityId) -> Option<&SkeletonSnapshot> {
        if !self.initialized || !self.config.enabled {
            return None;
        }
        self.find_track(id)
            .filter(|track| track.phase == TrackPhase::Valid)
            .map(|track| &track.rendered)
    }

    /// The most recently blended camera placement, under the same validity
    /// rules as [`pose`](Self::pose).
    #[must_use]
    pub fn camera_pose(&self) -> Option<&RootPose> {
        if !self.initialized || !self.config.enabled {
            return None;
        }
        self.camera
            .as_ref()
            .filter(|camera| camera.phase == TrackPhase::Valid)
            .map(|camera| &camera.rendered)
    }
}

/// Blend one track's `prev`/`curr` keyframes into its `rendered` output.
///
/// A bone-count mismatch means the entity changed skeleton mid-track;
/// blending semantically unrelated bones is meaningless, so the current
/// keyframe is used verbatim.
fn blend_track(track: &mut EntityTrack, t: f32, channels: Channels) {
    if track.prev.bone_count() != track.curr.bone_count() {
        track.rendered = track.curr.clone();
        return;
    }

    let mut rendered = track.curr.clone();
    rendered.root = blend_root(
        &track.prev.root,
        &track.curr.root,
        t,
        channels.position,
        channels.rotation,
    );

    for (out, prev) in rendered.bones_mut().iter_mut().zip(track.prev.bones())
    {
        if channels.position {
            out.position = lerp_vec3(prev.position, out.position, t);
        }
        if channels.rotation {
            out.rotation = std::array::from_fn(|i| {
                prev.rotation[i].lerp(out.rotation[i], t)
            });
        }
        if channels.scale {
            out.scale = lerp_vec3(prev.scale, out.scale, t);
        }
    }

    track.rendered = rendered;
}

/// Blend two root placements. Disabled channels snap to `curr`.
fn blend_root(
    prev: &RootPose,
    curr: &RootPose,
    t: f32,
    position: bool,
    rotation: bool,
) -> RootPose {
    RootPose {
        position: if position {
            lerp_vec3(prev.position, curr.position, t)
        } else {
            curr.position
        },
        rotation: if rotation {
            std::array::from_fn(|i| prev.rotation[i].lerp(curr.rotation[i], t))
        } else {
            curr.rotation
        },
    }
}
