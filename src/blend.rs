//! Alpha shaping and lerp helpers for the update pass.

use glam::Vec3;

/// Clamp a render-frame alpha into `[0, 1]`.
#[inline]
#[must_use]
pub fn clamp_alpha(alpha: f32) -> f32 {
    alpha.clamp(0.0, 1.0)
}

/// Warp alpha around the 0.5 midpoint.
///
/// `sharpness` 0.0 leaves alpha untouched; values toward 1.0 steepen the
/// curve around the midpoint (below it biased toward 0, above it toward 1),
/// and 1.0 degenerates to a hard step. Produces snappier motion than a pure
/// linear blend while still smoothing.
///
/// Input alpha is clamped to `[0, 1]` first.
#[inline]
#[must_use]
pub fn sharpen(alpha: f32, sharpness: f32) -> f32 {
    let alpha = clamp_alpha(alpha);
    if sharpness <= 0.0 {
        return alpha;
    }
    if sharpness >= 1.0 {
        return if alpha < 0.5 { 0.0 } else { 1.0 };
    }
    ((alpha - 0.5) / (1.0 - sharpness) + 0.5).clamp(0.0, 1.0)
}

/// Lerp two scalars.
#[inline]
#[must_use]
pub fn lerp_f32(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Lerp two positions component-wise.
#[inline]
#[must_use]
pub fn lerp_vec3(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    start + (end - start) * t
}
