//! GPU buffers for one drawable

use crate::point_pipeline::{PointPipeline, PointUniforms};
use galaxy_core::PointBlending;
use galaxy_particles::PositionBuffer;
use galaxy_scene::Drawable;
use wgpu::util::DeviceExt;

/// Per-drawable uniforms for `drawable`
pub fn point_uniforms(drawable: &Drawable) -> PointUniforms {
    PointUniforms {
        offset: drawable.offset.to_array(),
        size: drawable.size,
    }
}

/// Positions, colors and uniforms of one drawable, bound for the point pipeline
pub struct GpuPoints {
    pub uniform_buffer: wgpu::Buffer,
    pub position_buffer: wgpu::Buffer,
    pub color_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub instance_count: u32,
    pub blending: PointBlending,
}

impl GpuPoints {
    pub fn new(device: &wgpu::Device, pipeline: &PointPipeline, drawable: &Drawable) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Uniform Buffer"),
            contents: bytemuck::cast_slice(&[point_uniforms(drawable)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Position Buffer"),
            contents: bytemuck::cast_slice(drawable.positions.as_slice()),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });

        let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Color Buffer"),
            contents: bytemuck::cast_slice(drawable.colors.as_slice()),
            usage: wgpu::BufferUsages::STORAGE,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &pipeline.points_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: position_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: color_buffer.as_entire_binding(),
                },
            ],
            label: Some("Point Data Bind Group"),
        });

        Self {
            uniform_buffer,
            position_buffer,
            color_buffer,
            bind_group,
            instance_count: drawable.particle_count() as u32,
            blending: drawable.blending,
        }
    }

    /// Overwrite the position buffer. The length must match the one the
    /// buffer was created with; anything past it is ignored.
    pub fn upload_positions(&self, queue: &wgpu::Queue, positions: &PositionBuffer) {
        let len = positions.len().min(self.instance_count as usize * 3);
        queue.write_buffer(
            &self.position_buffer,
            0,
            bytemuck::cast_slice(&positions.as_slice()[..len]),
        );
    }

    pub fn write_uniforms(&self, queue: &wgpu::Queue, drawable: &Drawable) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[point_uniforms(drawable)]),
        );
    }

    /// Release the GPU memory now instead of when the handles drop
    pub fn destroy(self) {
        self.uniform_buffer.destroy();
        self.position_buffer.destroy();
        self.color_buffer.destroy();
    }
}
