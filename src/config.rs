//! Engine configuration with TOML preset support.
//!
//! All fields use `#[serde(default)]` so partial TOML presets (e.g. only
//! overriding `blend_sharpness`) work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InterpError;

/// Live interpolation configuration.
///
/// Mutated directly through [`InterpEngine::config_mut`]; no
/// synchronization, since the engine assumes single-threaded access.
///
/// [`InterpEngine::config_mut`]: crate::engine::InterpEngine::config_mut
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InterpConfig {
    /// Master switch. When false, capture and update do no work.
    pub enabled: bool,
    /// Presentation rate the host targets, in frames per second.
    pub target_fps: u32,
    /// Blend bone and root positions (false = snap to the current tick).
    pub interp_position: bool,
    /// Blend rotation channels along the shortest arc.
    pub interp_rotation: bool,
    /// Blend bone scales.
    pub interp_scale: bool,
    /// Blend the camera track.
    pub interp_camera: bool,
    /// Blend curve steepness: 0.0 = linear, 1.0 = hard snap at the 0.5
    /// alpha midpoint.
    pub blend_sharpness: f32,
}

impl Default for InterpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target_fps: 60,
            interp_position: true,
            interp_rotation: true,
            interp_scale: true,
            interp_camera: true,
            blend_sharpness: 0.0,
        }
    }
}

impl InterpConfig {
    /// Load a config preset from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, InterpError> {
        let content = std::fs::read_to_string(path).map_err(InterpError::Io)?;
        toml::from_str(&content)
            .map_err(|e| InterpError::ConfigParse(e.to_string()))
    }

    /// Save the config to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), InterpError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| InterpError::ConfigParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(InterpError::Io)?;
        }
        std::fs::write(path, content).map_err(InterpError::Io)
    }
}
