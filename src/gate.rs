//! Host feature-flag gating.
//!
//! The host decides whether interpolation may run at all (e.g. a
//! framerate-unlock toggle in its patch registry). The engine consults the
//! gate before capture and update so a disabled feature costs nothing per
//! frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Host-side switch deciding whether interpolation work is allowed.
pub trait FeatureGate: Send + Sync {
    /// Whether interpolation may currently do any work.
    fn enabled(&self) -> bool;
}

/// Type alias for shared gate references.
pub type SharedGate = Arc<dyn FeatureGate>;

/// Create a shared gate from any [`FeatureGate`] implementation.
pub fn shared<G: FeatureGate + 'static>(gate: G) -> SharedGate {
    Arc::new(gate)
}

/// Gate fixed at construction time.
#[derive(Debug, Clone, Copy)]
pub struct StaticGate(pub bool);

impl FeatureGate for StaticGate {
    fn enabled(&self) -> bool {
        self.0
    }
}

/// Gate the host can flip after construction (settings changes at runtime).
#[derive(Debug, Default)]
pub struct SwitchGate(AtomicBool);

impl SwitchGate {
    /// Gate starting in the given state.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self(AtomicBool::new(enabled))
    }

    /// Flip the gate.
    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }
}

impl FeatureGate for SwitchGate {
    fn enabled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_gate() {
        assert!(StaticGate(true).enabled());
        assert!(!StaticGate(false).enabled());
    }

    #[test]
    fn test_switch_gate_flips() {
        let gate = SwitchGate::new(false);
        assert!(!gate.enabled());
        gate.set(true);
        assert!(gate.enabled());
    }

    #[test]
    fn test_shared_gate_through_arc() {
        let gate = shared(SwitchGate::new(true));
        assert!(gate.enabled());
    }
}
