//! GPU rendering system
//!
//! Bridges the host loop and the render crate: owns the render context and
//! the frame renderer, acquires the surface texture, and submits one frame
//! per call.

use std::sync::Arc;

use winit::window::Window;

use triorbit_render::{ContextError, FrameRenderer, RenderContext};
use triorbit_scene::SceneDef;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering for one scene
pub struct RenderSystem {
    context: RenderContext,
    frame: FrameRenderer,
}

impl RenderSystem {
    /// Create the render context and upload the scene
    ///
    /// The scene must already have passed validation.
    pub fn new(
        window: Arc<Window>,
        scene: &SceneDef,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut frame = FrameRenderer::new(&context.device, context.config.format, scene);
        frame.ensure_depth_texture(&context.device, context.size.width, context.size.height);

        Ok(Self { context, frame })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.frame
            .ensure_depth_texture(&self.context.device, width, height);
    }

    /// Render a single frame at the given elapsed time
    pub fn render_frame(&mut self, elapsed_seconds: f32) -> Result<(), RenderError> {
        self.frame
            .update_transforms(&self.context.queue, elapsed_seconds);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.frame.render(&mut encoder, &view);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
