//! Per-entity tracking records and the two-capture validity machine.

use crate::pose::{RootPose, SkeletonSnapshot};

/// Opaque, stable identifier for a tracked entity.
///
/// Typically a handle or object address from the host simulation; the only
/// requirement is that it is not reused across unrelated entities while a
/// track exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// How many captures a track has accumulated.
///
/// Interpolation requires `Valid`, so the first frame after an entity
/// appears never blends from uninitialized data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackPhase {
    /// Exactly one capture recorded; `prev` mirrors `curr`.
    Primed,
    /// Two or more captures recorded; `prev` and `curr` hold real keyframes.
    Valid,
}

/// Per-entity animation tracking record.
#[derive(Debug, Clone)]
pub struct EntityTrack {
    /// Host identifier this track follows.
    pub id: EntityId,
    /// Capture-count phase.
    pub phase: TrackPhase,
    /// Logic tick of the most recent capture.
    pub last_capture_tick: u64,
    /// Keyframe from the previous logic tick.
    pub prev: SkeletonSnapshot,
    /// Keyframe from the current logic tick.
    pub curr: SkeletonSnapshot,
    /// Most recently blended output.
    pub rendered: SkeletonSnapshot,
}

impl EntityTrack {
    /// Start tracking with a first capture. `prev` and `rendered` mirror
    /// the capture so every field holds real data from the start.
    pub(crate) fn primed(
        id: EntityId,
        tick: u64,
        snapshot: SkeletonSnapshot,
    ) -> Self {
        Self {
            id,
            phase: TrackPhase::Primed,
            last_capture_tick: tick,
            prev: snapshot.clone(),
            curr: snapshot.clone(),
            rendered: snapshot,
        }
    }

    /// Record a subsequent capture: shift `curr` into `prev`, store the new
    /// keyframe, stamp the tick, and advance to `Valid`.
    pub(crate) fn record(&mut self, tick: u64, snapshot: SkeletonSnapshot) {
        self.prev = std::mem::replace(&mut self.curr, snapshot);
        self.last_capture_tick = tick;
        self.phase = TrackPhase::Valid;
    }

    /// Ticks elapsed since the last capture.
    pub(crate) fn staleness(&self, current_tick: u64) -> u64 {
        current_tick.saturating_sub(self.last_capture_tick)
    }
}

/// Root-only track for the host camera.
#[derive(Debug, Clone)]
pub struct CameraTrack {
    /// Capture-count phase.
    pub phase: TrackPhase,
    /// Logic tick of the most recent capture.
    pub last_capture_tick: u64,
    /// Placement from the previous logic tick.
    pub prev: RootPose,
    /// Placement from the current logic tick.
    pub curr: RootPose,
    /// Most recently blended output.
    pub rendered: RootPose,
}

impl CameraTrack {
    /// Start tracking with a first capture.
    pub(crate) fn primed(tick: u64, pose: RootPose) -> Self {
        Self {
            phase: TrackPhase::Primed,
            last_capture_tick: tick,
            prev: pose,
            curr: pose,
            rendered: pose,
        }
    }

    /// Record a subsequent capture.
    pub(crate) fn record(&mut self, tick: u64, pose: RootPose) {
        self.prev = self.curr;
        self.curr = pose;
        self.last_capture_tick = tick;
        self.phase = TrackPhase::Valid;
    }

    /// Ticks elapsed since the last capture.
    pub(crate) fn staleness(&self, current_tick: u64) -> u64 {
        current_tick.saturating_sub(self.last_capture_tick)
    }
}
