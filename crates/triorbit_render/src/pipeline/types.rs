//! GPU-compatible data types
//!
//! These types match the shader layouts exactly and derive Pod and
//! Zeroable for safe buffer writes.

use bytemuck::{Pod, Zeroable};

use triorbit_math::{mat4, Mat4};

/// Per-group uniforms: the combined transform plus the flat color
///
/// Layout: 80 bytes total (must match the `GroupUniforms` struct in both
/// WGSL shaders). The color field is ignored by the vertex-color shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GroupUniforms {
    /// Combined model-view-projection matrix (64 bytes)
    pub mvp: Mat4,
    /// Flat RGBA color (16 bytes)
    pub color: [f32; 4],
}

impl Default for GroupUniforms {
    fn default() -> Self {
        Self {
            mvp: mat4::IDENTITY,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Stride of one position entry in the vertex buffer
pub const POSITION_STRIDE: u64 = std::mem::size_of::<[f32; 3]>() as u64;

/// Stride of one color entry in the color buffer
pub const COLOR_STRIDE: u64 = std::mem::size_of::<[f32; 3]>() as u64;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_group_uniforms_size() {
        // 16 floats mvp + 4 floats color = 80 bytes
        assert_eq!(size_of::<GroupUniforms>(), 80);
    }

    #[test]
    fn test_group_uniforms_alignment() {
        assert_eq!(std::mem::align_of::<GroupUniforms>(), 4);
    }

    #[test]
    fn test_strides() {
        assert_eq!(POSITION_STRIDE, 12);
        assert_eq!(COLOR_STRIDE, 12);
    }

    #[test]
    fn test_default_is_identity_white() {
        let u = GroupUniforms::default();
        assert_eq!(u.mvp, mat4::IDENTITY);
        assert_eq!(u.color, [1.0, 1.0, 1.0, 1.0]);
    }
}
