//! Rendering pipeline components
//!
//! One [`GroupPipeline`] per draw group plus the [`FrameRenderer`] that
//! drives them each frame.

pub mod frame_renderer;
pub mod group_pipeline;
pub mod types;

pub use frame_renderer::FrameRenderer;
pub use group_pipeline::GroupPipeline;
pub use types::GroupUniforms;
