//! Frame rendering and the GPU side of the scene binding

use crate::camera::Camera;
use crate::context::RenderContext;
use crate::gpu_points::GpuPoints;
use crate::point_pipeline::{CameraUniforms, PointPipeline};
use galaxy_core::{DrawableId, DrawableIds, GalaxyError, Result};
use galaxy_scene::{Drawable, SceneBinding};
use std::collections::HashMap;

/// Owns the point pipeline and every attached drawable's GPU buffers
pub struct GalaxyRenderer {
    pipeline: PointPipeline,
    points: HashMap<DrawableId, GpuPoints>,
    /// Draw order
    order: Vec<DrawableId>,
    ids: DrawableIds,
    pub clear_color: wgpu::Color,
}

impl GalaxyRenderer {
    pub fn new(context: &RenderContext) -> Self {
        Self {
            pipeline: PointPipeline::new(&context.device, context.config.format),
            points: HashMap::new(),
            order: Vec::new(),
            ids: DrawableIds::new(),
            clear_color: wgpu::Color::BLACK,
        }
    }

    /// Scene binding that uploads through `context`
    pub fn bind<'a>(&'a mut self, context: &'a RenderContext) -> RenderScene<'a> {
        RenderScene {
            renderer: self,
            device: &context.device,
            queue: &context.queue,
        }
    }

    /// Particles across all attached drawables
    pub fn particle_count(&self) -> u64 {
        self.points.values().map(|p| p.instance_count as u64).sum()
    }

    /// Clear `view` and draw every attached drawable
    pub fn render(&self, context: &RenderContext, camera: &Camera, view: &wgpu::TextureView) {
        let uniforms = CameraUniforms {
            view_proj: camera.view_projection_matrix(),
            camera_right: camera.right_vector(),
            point_scale: camera.point_scale(),
            camera_up: camera.up_vector(),
            _pad: 0.0,
        };
        context.queue.write_buffer(
            &self.pipeline.camera_buffer,
            0,
            bytemuck::cast_slice(&[uniforms]),
        );

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Galaxy Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Galaxy Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &context.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_index_buffer(
                self.pipeline.quad_index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            render_pass.set_bind_group(0, &self.pipeline.camera_bind_group, &[]);

            for points in self.order.iter().filter_map(|id| self.points.get(id)) {
                render_pass.set_pipeline(self.pipeline.pipeline_for(points.blending));
                render_pass.set_bind_group(1, &points.bind_group, &[]);
                render_pass.draw_indexed(0..6, 0, 0..points.instance_count);
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
    }
}

/// [`SceneBinding`] backed by a [`GalaxyRenderer`]
pub struct RenderScene<'a> {
    renderer: &'a mut GalaxyRenderer,
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
}

impl SceneBinding for RenderScene<'_> {
    fn attach(&mut self, drawable: &Drawable) -> Result<DrawableId> {
        if drawable.particle_count() == 0 {
            return Err(GalaxyError::RenderError(
                "Cannot attach a drawable with no particles".into(),
            ));
        }
        let points = GpuPoints::new(self.device, &self.renderer.pipeline, drawable);
        let id = self.renderer.ids.next_id();
        self.renderer.points.insert(id, points);
        self.renderer.order.push(id);
        Ok(id)
    }

    fn detach(&mut self, id: DrawableId) {
        self.renderer.order.retain(|o| *o != id);
        match self.renderer.points.remove(&id) {
            Some(points) => points.destroy(),
            None => log::warn!("Detach of unknown drawable {id}"),
        }
    }

    fn update(&mut self, id: DrawableId, drawable: &Drawable) -> Result<()> {
        let points = self
            .renderer
            .points
            .get(&id)
            .ok_or_else(|| GalaxyError::RenderError(format!("Unknown drawable {id}")))?;
        if drawable.positions_dirty() {
            points.upload_positions(self.queue, &drawable.positions);
        }
        if drawable.transform_dirty() {
            points.write_uniforms(self.queue, drawable);
        }
        Ok(())
    }
}
