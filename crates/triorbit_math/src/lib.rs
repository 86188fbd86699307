//! Matrix and vector math for the triorbit renderer
//!
//! Everything here operates on plain float arrays so the results can be
//! written straight into GPU uniform buffers without conversion.
//!
//! ## Core Types
//!
//! - [`Mat4`] - 4x4 column-major matrix
//! - [`Vec3`] - 3-component vector (plain `[f32; 3]`)

pub mod mat4;
pub mod vec3;

pub use mat4::{Mat4, IDENTITY, look_at, mul, perspective, transpose, view_eye};
pub use vec3::Vec3;
