//! The interpolation engine: slot table, lifecycle, and diagnostics.
//!
//! Capture-side operations (tick advancement, keyframe recording) live in
//! `capture`; blend-side operations (per-frame update, pose queries) live
//! in `update`. Both extend [`InterpEngine`] with further `impl` blocks.

mod capture;
mod update;

use crate::config::InterpConfig;
use crate::error::InterpError;
use crate::gate::{shared, SharedGate, StaticGate};
use crate::track::{CameraTrack, EntityId, EntityTrack};

/// Fixed entity-slot capacity. Captures for additional entities are
/// silently dropped; the table never grows.
pub const MAX_ENTITIES: usize = 128;

/// Tracks whose last capture is older than this many ticks freeze their
/// rendered output instead of blending. Covers entities that stop being
/// captured (off-screen, destroyed) without an explicit removal call.
pub const STALE_TICKS: u64 = 2;

/// Owns all interpolation state: the fixed slot table, the camera track,
/// the logic-tick counter, and the live configuration.
///
/// The host constructs one engine and passes it by reference to every call.
/// All access is single-threaded and call-order-dependent: `on_logic_tick`
/// then captures once per simulation step, `update` once per render frame,
/// pose queries between updates.
pub struct InterpEngine {
    slots: Vec<Option<EntityTrack>>,
    camera: Option<CameraTrack>,
    tick: u64,
    config: InterpConfig,
    gate: SharedGate,
    initialized: bool,
}

impl InterpEngine {
    /// Engine whose host gate always allows interpolation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_gate(shared(StaticGate(true)))
    }

    /// Engine consulting the given host gate before doing any work.
    #[must_use]
    pub fn with_gate(gate: SharedGate) -> Self {
        Self {
            slots: Vec::new(),
            camera: None,
            tick: 0,
            config: InterpConfig::default(),
            gate,
            initialized: false,
        }
    }

    /// Allocate the slot table and reset configuration to defaults.
    ///
    /// Idempotent: initializing an already-initialized engine is a no-op
    /// returning success. The `Result` is reserved for future resource
    /// acquisition; the in-memory implementation cannot fail.
    pub fn init(&mut self) -> Result<(), InterpError> {
        if self.initialized {
            return Ok(());
        }
        self.slots = vec![None; MAX_ENTITIES];
        self.camera = None;
        self.tick = 0;
        self.config = InterpConfig::default();
        self.initialized = true;
        log::info!("pose interpolation initialized ({MAX_ENTITIES} slots)");
        Ok(())
    }

    /// Clear all tracks and mark the engine uninitialized.
    ///
    /// Safe to call when not initialized (no-op).
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        self.slots.clear();
        self.camera = None;
        self.initialized = false;
        log::info!("pose interpolation shut down");
    }

    /// Whether [`init`](Self::init) has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Live configuration (read-only).
    #[must_use]
    pub fn config(&self) -> &InterpConfig {
        &self.config
    }

    /// Live configuration; callers mutate fields directly. No
    /// synchronization; single-threaded access assumed.
    pub fn config_mut(&mut self) -> &mut InterpConfig {
        &mut self.config
    }

    /// Current logic tick.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of occupied slots. Diagnostic only.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Stop tracking one entity. Returns whether it was tracked.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|track| track.id == id))
        else {
            return false;
        };
        *slot = None;
        true
    }

    /// Drop every track at once.
    ///
    /// Intended for scene/map transitions, flushing stale data immediately
    /// rather than waiting out the staleness window. Keeps the table
    /// allocation.
    pub fn remove_all(&mut self) {
        let dropped = self.entity_count();
        for slot in &mut self.slots {
            *slot = None;
        }
        self.camera = None;
        if dropped > 0 {
            log::debug!("flushed {dropped} pose tracks");
        }
    }

    /// Whether capture/update may do any work right now: initialized,
    /// enabled, and allowed by the host gate.
    fn work_allowed(&self) -> bool {
        self.initialized && self.config.enabled && self.gate.enabled()
    }

    fn find_track(&self, id: EntityId) -> Option<&EntityTrack> {
        self.slots.iter().flatten().find(|track| track.id == id)
    }

    fn find_track_mut(&mut self, id: EntityId) -> Option<&mut EntityTrack> {
        self.slots.iter_mut().flatten().find(|track| track.id == id)
    }
}

impl Default for InterpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InterpEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpEngine")
            .field("initialized", &self.initialized)
            .field("tick", &self.tick)
            .field("entity_count", &self.entity_count())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::pose::{BoneTransform, RootPose};

    fn bone_at(x: f32) -> BoneTransform {
        BoneTransform {
            position: Vec3::new(x, 0.0, 0.0),
            ..BoneTransform::default()
        }
    }

    fn capture_twice(engine: &mut InterpEngine, id: EntityId) {
        engine.on_logic_tick();
        engine.capture(id, &[bone_at(0.0)], RootPose::default());
        engine.on_logic_tick();
        engine.capture(id, &[bone_at(1.0)], RootPose::default());
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut engine = InterpEngine::new();
        assert!(engine.init().is_ok());
        assert!(engine.is_initialized());

        capture_twice(&mut engine, EntityId(1));
        assert_eq!(engine.entity_count(), 1);

        // A second init while initialized must not reset anything.
        assert!(engine.init().is_ok());
        assert_eq!(engine.entity_count(), 1);
    }

    #[test]
    fn test_shutdown_twice_is_safe() {
        let mut engine = InterpEngine::new();
        assert!(engine.init().is_ok());
        engine.shutdown();
        assert!(!engine.is_initialized());
        engine.shutdown();
        assert!(!engine.is_initialized());
    }

    #[test]
    fn test_uninitialized_calls_are_noops() {
        let mut engine = InterpEngine::new();
        engine.on_logic_tick();
        engine.capture(EntityId(1), &[bone_at(0.0)], RootPose::default());
        engine.update(0.5);

        assert_eq!(engine.tick(), 0);
        assert_eq!(engine.entity_count(), 0);
        assert!(engine.pose(EntityId(1)).is_none());
    }

    #[test]
    fn test_init_resets_config_to_defaults() {
        let mut engine = InterpEngine::new();
        assert!(engine.init().is_ok());
        engine.config_mut().blend_sharpness = 0.8;
        engine.shutdown();
        assert!(engine.init().is_ok());
        assert_eq!(engine.config().blend_sharpness, 0.0);
    }

    #[test]
    fn test_remove_entity() {
        let mut engine = InterpEngine::new();
        assert!(engine.init().is_ok());
        capture_twice(&mut engine, EntityId(7));

        assert!(engine.remove_entity(EntityId(7)));
        assert_eq!(engine.entity_count(), 0);
        assert!(engine.pose(EntityId(7)).is_none());
        // Already gone.
        assert!(!engine.remove_entity(EntityId(7)));
    }

    #[test]
    fn test_remove_all_flushes_everything() {
        let mut engine = InterpEngine::new();
        assert!(engine.init().is_ok());
        capture_twice(&mut engine, EntityId(1));
        capture_twice(&mut engine, EntityId(2));
        engine.capture_camera(RootPose::default());

        engine.remove_all();
        assert_eq!(engine.entity_count(), 0);
        assert!(engine.camera_pose().is_none());
    }
}
