//! Per-frame camera transform
//!
//! [`CameraRig`] owns the constant projection matrix and the camera path and
//! turns elapsed seconds into the combined model-view-projection matrix.
//! The model matrix is always the identity; all apparent motion is camera
//! motion. This is pure math so the transform contract can be tested
//! without touching a GPU.

use triorbit_math::{mat4, Mat4};

use crate::path::CameraPath;
use crate::scene::SceneDef;

/// World-space point the camera always looks at
const LOOK_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
/// Fixed up vector
const UP: [f32; 3] = [0.0, 1.0, 0.0];
/// Model matrix, never mutated
const MODEL: Mat4 = mat4::IDENTITY;

/// Computes the camera transform for a scene
#[derive(Debug, Clone)]
pub struct CameraRig {
    path: CameraPath,
    /// Projection matrix, computed once at construction
    projection: Mat4,
}

impl CameraRig {
    /// Build a rig from a scene's camera path and projection constants
    pub fn for_scene(scene: &SceneDef) -> Self {
        Self {
            path: scene.camera,
            projection: scene.projection.matrix(),
        }
    }

    /// The constant projection matrix
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// View matrix at `t` seconds
    ///
    /// For a fixed camera this is the identity; the scene's geometry is
    /// already in clip space.
    pub fn view_at(&self, t: f32) -> Mat4 {
        match self.path {
            CameraPath::Fixed => mat4::IDENTITY,
            CameraPath::Orbit(orbit) => mat4::look_at(orbit.position(t), LOOK_TARGET, UP),
        }
    }

    /// Combined transform at `t` seconds: `projection * view * model`
    ///
    /// A fixed camera applies no transform at all.
    pub fn mvp_at(&self, t: f32) -> Mat4 {
        match self.path {
            CameraPath::Fixed => mat4::IDENTITY,
            CameraPath::Orbit(_) => mat4::mul(self.projection, mat4::mul(self.view_at(t), MODEL)),
        }
    }
}
