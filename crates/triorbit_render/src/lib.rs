//! wgpu rendering for triorbit
//!
//! This crate turns a validated [`triorbit_scene::SceneDef`] into GPU
//! resources and draws it each frame.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - wgpu device, queue, and surface management
//! - [`pipeline::GroupPipeline`] - one compiled pipeline per draw group
//! - [`pipeline::FrameRenderer`] - per-frame transform upload and draw pass

pub mod context;
pub mod pipeline;

pub use context::{ContextError, RenderContext};
pub use pipeline::{FrameRenderer, GroupPipeline, GroupUniforms};
