//! Per-frame rendering of a scene
//!
//! The [`FrameRenderer`] owns the uploaded vertex data and one
//! [`GroupPipeline`] per draw group. Each frame it computes the camera
//! transform for the elapsed time, writes it to every group's uniforms,
//! and records a single render pass that draws the groups in their
//! declared order.

use std::ops::Range;

use wgpu::util::DeviceExt;

use triorbit_scene::{CameraRig, SceneDef};

use super::group_pipeline::GroupPipeline;

/// Renders one validated scene
///
/// Precondition: `SceneDef::validate` returned no errors. Draw ranges are
/// trusted from here on; a violation is a defect in the caller, not a
/// per-frame condition.
pub struct FrameRenderer {
    rig: CameraRig,
    clear_color: wgpu::Color,
    vertex_buffer: wgpu::Buffer,
    color_buffer: Option<wgpu::Buffer>,
    /// Pipelines paired with their vertex ranges, in draw order
    groups: Vec<(GroupPipeline, Range<u32>)>,
    uses_depth: bool,
    depth_texture: Option<wgpu::TextureView>,
    depth_size: (u32, u32),
}

impl FrameRenderer {
    /// Upload the scene's buffers and compile its pipelines
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        scene: &SceneDef,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Vertex Buffer"),
            contents: bytemuck::cast_slice(&scene.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_buffer = scene.colors.as_ref().map(|colors| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Color Buffer"),
                contents: bytemuck::cast_slice(colors),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let groups = scene
            .groups
            .iter()
            .map(|group| {
                (
                    GroupPipeline::new(device, surface_format, group.shading, scene.depth_test),
                    group.range.clone(),
                )
            })
            .collect();

        log::info!(
            "Scene '{}': {} vertices in {} draw group(s)",
            scene.name,
            scene.positions.len(),
            scene.groups.len()
        );

        let bg = scene.clear_color;
        Self {
            rig: CameraRig::for_scene(scene),
            clear_color: wgpu::Color {
                r: bg[0],
                g: bg[1],
                b: bg[2],
                a: bg[3],
            },
            vertex_buffer,
            color_buffer,
            groups,
            uses_depth: scene.depth_test,
            depth_texture: None,
            depth_size: (0, 0),
        }
    }

    /// Ensure the depth texture exists and matches the surface size
    ///
    /// No-op for scenes without depth testing.
    pub fn ensure_depth_texture(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if !self.uses_depth {
            return;
        }
        if self.depth_texture.is_none() || self.depth_size != (width, height) {
            let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Depth32Float,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });

            self.depth_texture =
                Some(depth_texture.create_view(&wgpu::TextureViewDescriptor::default()));
            self.depth_size = (width, height);
        }
    }

    /// Write this frame's transform to every group's uniforms
    pub fn update_transforms(&self, queue: &wgpu::Queue, elapsed_seconds: f32) {
        let mvp = self.rig.mvp_at(elapsed_seconds);
        for (pipeline, _) in &self.groups {
            pipeline.update_transform(queue, mvp);
        }
    }

    /// Record the draw pass: clear, then draw every group in order
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let depth_attachment = if self.uses_depth {
            let depth_view = self
                .depth_texture
                .as_ref()
                .expect("Depth texture not created. Call ensure_depth_texture first.");
            Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            })
        } else {
            None
        };

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: depth_attachment,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        for (pipeline, range) in &self.groups {
            render_pass.set_pipeline(pipeline.pipeline());
            render_pass.set_bind_group(0, pipeline.bind_group(), &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            if let Some(colors) = &self.color_buffer {
                render_pass.set_vertex_buffer(1, colors.slice(..));
            }
            render_pass.draw(range.clone(), 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use triorbit_scene::builtin;

    // GPU-dependent paths are exercised by running the binary; these tests
    // cover the pure parts the renderer relies on.

    #[test]
    fn test_builtin_scenes_are_uploadable() {
        // cast_slice requirements: position/color data must be tightly
        // packed [f32; 3] runs.
        let scene = builtin::gem_orbit();
        let bytes: &[u8] = bytemuck::cast_slice(&scene.positions);
        assert_eq!(bytes.len(), scene.positions.len() * 12);
        let colors = scene.colors.unwrap();
        let bytes: &[u8] = bytemuck::cast_slice(&colors);
        assert_eq!(bytes.len(), colors.len() * 12);
    }

    #[test]
    fn test_draw_ranges_match_buffer_sizes() {
        // Buffer size in vertices must equal the total drawn range.
        for name in builtin::names() {
            let scene = builtin::by_name(name).unwrap();
            let drawn: u32 = scene.groups.iter().map(|g| g.range.end - g.range.start).sum();
            assert_eq!(drawn, scene.vertex_count(), "scene '{}'", name);
        }
    }
}
