//! Per-group render pipeline
//!
//! Each draw group gets its own compiled pipeline, uniform buffer, and
//! bind group, standing in for the original notion of a shader program
//! handle. Flat groups and vertex-colored groups compile different WGSL
//! sources but share the uniform layout.

use wgpu::util::DeviceExt;

use triorbit_math::Mat4;
use triorbit_scene::Shading;

use super::types::{GroupUniforms, COLOR_STRIDE, POSITION_STRIDE};

/// One compiled pipeline with its uniform state
pub struct GroupPipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// Flat color written alongside the MVP each frame; white for
    /// vertex-colored groups, where the shader ignores it
    color: [f32; 4],
}

impl GroupPipeline {
    /// Compile the pipeline for one draw group
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shading: Shading,
        depth_test: bool,
    ) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Group Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Group Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let (shader_source, label) = match shading {
            Shading::Flat(_) => (include_str!("../shaders/flat.wgsl"), "Flat Shader"),
            Shading::VertexColor => (
                include_str!("../shaders/vertex_color.wgsl"),
                "Vertex Color Shader",
            ),
        };
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let mut vertex_buffers = vec![Self::position_layout()];
        if shading == Shading::VertexColor {
            vertex_buffers.push(Self::color_layout());
        }

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Group Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Winding in the fixed scene data is mixed; don't cull
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: depth_test.then(|| wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let color = match shading {
            Shading::Flat(c) => c,
            Shading::VertexColor => [1.0, 1.0, 1.0, 1.0],
        };

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Group Uniform Buffer"),
            contents: bytemuck::bytes_of(&GroupUniforms {
                color,
                ..GroupUniforms::default()
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Group Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            color,
        }
    }

    /// Vertex buffer layout for positions (slot 0)
    fn position_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: POSITION_STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        }
    }

    /// Vertex buffer layout for per-vertex colors (slot 1)
    fn color_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: COLOR_STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 1,
            }],
        }
    }

    /// Write this frame's transform into the uniform buffer
    pub fn update_transform(&self, queue: &wgpu::Queue, mvp: Mat4) {
        let uniforms = GroupUniforms {
            mvp,
            color: self.color,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_layout_stride() {
        let layout = GroupPipeline::position_layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
    }

    #[test]
    fn test_color_layout_slot() {
        let layout = GroupPipeline::color_layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes[0].shader_location, 1);
    }
}
