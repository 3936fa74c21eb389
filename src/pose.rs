//! Skeletal pose data model.

use glam::Vec3;

use crate::angle::Turn16;

/// Maximum bones tracked per skeleton. Captures beyond this are truncated.
pub const MAX_BONES: usize = 64;

/// One bone's local pose for a single captured frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneTransform {
    /// Local position.
    pub position: Vec3,
    /// Local rotation, three independent wrapping components.
    pub rotation: [Turn16; 3],
    /// Local scale.
    pub scale: Vec3,
}

impl Default for BoneTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: [Turn16::ZERO; 3],
            scale: Vec3::ONE,
        }
    }
}

/// World-space root placement shared by skeleton snapshots and the camera
/// track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootPose {
    /// World-space position.
    pub position: Vec3,
    /// Root rotation, three independent wrapping components.
    pub rotation: [Turn16; 3],
}

/// One captured frame of a full skeleton.
///
/// Storage is a fixed array; entries past `bone_count` are unused padding.
/// The count is clamped to [`MAX_BONES`] once, here at the construction
/// boundary.
#[derive(Debug, Clone)]
pub struct SkeletonSnapshot {
    /// World-space root placement.
    pub root: RootPose,
    bone_count: usize,
    bones: [BoneTransform; MAX_BONES],
}

impl SkeletonSnapshot {
    /// Empty snapshot: identity root, no bones.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: RootPose::default(),
            bone_count: 0,
            bones: [BoneTransform::default(); MAX_BONES],
        }
    }

    /// Snapshot from a root placement and bone slice.
    ///
    /// Bones beyond [`MAX_BONES`] are dropped silently.
    #[must_use]
    pub fn from_bones(root: RootPose, bones: &[BoneTransform]) -> Self {
        let bone_count = bones.len().min(MAX_BONES);
        let mut stored = [BoneTransform::default(); MAX_BONES];
        stored[..bone_count].copy_from_slice(&bones[..bone_count]);
        Self {
            root,
            bone_count,
            bones: stored,
        }
    }

    /// Number of active bones.
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bone_count
    }

    /// Active bones.
    #[must_use]
    pub fn bones(&self) -> &[BoneTransform] {
        &self.bones[..self.bone_count]
    }

    /// Mutable view of the active bones.
    pub(crate) fn bones_mut(&mut self) -> &mut [BoneTransform] {
        &mut self.bones[..self.bone_count]
    }
}

impl Default for SkeletonSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let snap = SkeletonSnapshot::empty();
        assert_eq!(snap.bone_count(), 0);
        assert!(snap.bones().is_empty());
    }

    #[test]
    fn test_from_bones_stores_slice() {
        let bones = vec![
            BoneTransform {
                position: Vec3::new(1.0, 2.0, 3.0),
                ..BoneTransform::default()
            };
            10
        ];
        let snap = SkeletonSnapshot::from_bones(RootPose::default(), &bones);

        assert_eq!(snap.bone_count(), 10);
        assert_eq!(snap.bones()[9].position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_bones_clamps_to_max() {
        let bones = vec![BoneTransform::default(); MAX_BONES + 40];
        let snap = SkeletonSnapshot::from_bones(RootPose::default(), &bones);

        assert_eq!(snap.bone_count(), MAX_BONES);
        assert_eq!(snap.bones().len(), MAX_BONES);
    }

    #[test]
    fn test_default_bone_scale_is_one() {
        let bone = BoneTransform::default();
        assert_eq!(bone.scale, Vec3::ONE);
    }
}
