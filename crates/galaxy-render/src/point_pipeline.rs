//! Instanced point-sprite pipeline
//!
//! One camera-facing quad per particle. Positions and colors are bound as
//! flat `array<f32>` storage buffers, three floats per particle, so the CPU
//! buffers upload without repacking. One pipeline per [`PointBlending`].

use bytemuck::{Pod, Zeroable};
use galaxy_core::PointBlending;
use wgpu::util::DeviceExt;

/// Camera data shared by every draw in a frame. Matches the WGSL layout.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_right: [f32; 3],
    pub point_scale: f32,
    pub camera_up: [f32; 3],
    pub _pad: f32,
}

/// Per-drawable data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointUniforms {
    pub offset: [f32; 3],
    pub size: f32,
}

/// Color blend state for a blending mode.
///
/// `Custom` is source-alpha over destination, `Additive` adds source
/// (scaled by its alpha) onto destination.
pub fn blend_state(blending: PointBlending) -> wgpu::BlendState {
    match blending {
        PointBlending::Custom => wgpu::BlendState::ALPHA_BLENDING,
        PointBlending::Additive => wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        },
    }
}

pub struct PointPipeline {
    pub custom_pipeline: wgpu::RenderPipeline,
    pub additive_pipeline: wgpu::RenderPipeline,
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    pub points_bind_group_layout: wgpu::BindGroupLayout,
    pub quad_index_buffer: wgpu::Buffer,
    pub camera_buffer: wgpu::Buffer,
    pub camera_bind_group: wgpu::BindGroup,
}

impl PointPipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Point Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("point_shader.wgsl").into()),
        });

        // Group 0: camera
        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[uniform_entry(0)],
                label: Some("Point Camera Bind Group Layout"),
            });

        // Group 1: per-drawable uniforms, positions, colors
        let points_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[uniform_entry(0), storage_entry(1), storage_entry(2)],
                label: Some("Point Data Bind Group Layout"),
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Point Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &points_bind_group_layout],
            push_constant_ranges: &[],
        });

        let custom_pipeline = create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            format,
            PointBlending::Custom,
        );
        let additive_pipeline = create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            format,
            PointBlending::Additive,
        );

        let quad_indices: [u32; 6] = [0, 1, 2, 2, 1, 3];
        let quad_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Quad Index Buffer"),
            contents: bytemuck::cast_slice(&quad_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniforms::zeroed()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
            label: Some("Point Camera Bind Group"),
        });

        Self {
            custom_pipeline,
            additive_pipeline,
            camera_bind_group_layout,
            points_bind_group_layout,
            quad_index_buffer,
            camera_buffer,
            camera_bind_group,
        }
    }

    pub fn pipeline_for(&self, blending: PointBlending) -> &wgpu::RenderPipeline {
        match blending {
            PointBlending::Custom => &self.custom_pipeline,
            PointBlending::Additive => &self.additive_pipeline,
        }
    }
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn storage_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only: true },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    blending: PointBlending,
) -> wgpu::RenderPipeline {
    let label = format!("Point {} Pipeline", blending.label());
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_point"),
            buffers: &[],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_point"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(blend_state(blending)),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        // Opaque sprites write depth
        depth_stencil: Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sizes_match_wgsl() {
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 96);
        assert_eq!(std::mem::size_of::<PointUniforms>(), 16);
    }

    #[test]
    fn custom_blending_is_alpha_over() {
        let state = blend_state(PointBlending::Custom);
        assert_eq!(state.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
    }

    #[test]
    fn additive_blending_adds() {
        let state = blend_state(PointBlending::Additive);
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::One);
        assert_eq!(state.color.operation, wgpu::BlendOperation::Add);
    }
}
