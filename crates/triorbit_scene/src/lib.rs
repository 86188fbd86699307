//! Scene descriptions for the triorbit renderer
//!
//! A [`SceneDef`] is everything the renderer needs to know about one scene:
//! immutable vertex (and optional color) data, an ordered list of
//! [`DrawGroup`] descriptors, a [`CameraPath`], and the per-scene projection
//! constants. Scenes are validated before any GPU resource is created; a
//! draw range that overruns the buffer is a configuration error, never a
//! runtime condition.
//!
//! The camera transform itself lives in [`CameraRig`], which is pure math
//! and fully testable without a GPU.

pub mod builtin;
pub mod camera;
pub mod path;
pub mod scene;

pub use builtin::by_name;
pub use camera::CameraRig;
pub use path::{CameraPath, OrbitPath};
pub use scene::{DrawGroup, ProjectionParams, SceneDef, Shading, ValidationError};
