//! Galaxy Render - wgpu renderer for the particle cloud
//!
//! Draws every particle as a camera-facing square sprite, one instanced quad
//! per particle, with positions and colors read straight from storage
//! buffers. `GalaxyRenderer::bind` hands out the scene binding the state
//! owner attaches drawables through.

mod camera;
mod context;
mod gpu_points;
pub mod point_pipeline;
mod renderer;

pub use camera::Camera;
pub use context::{capped_surface_size, RenderContext, RenderError, MAX_PIXEL_RATIO};
pub use gpu_points::GpuPoints;
pub use point_pipeline::{CameraUniforms, PointPipeline, PointUniforms};
pub use renderer::{GalaxyRenderer, RenderScene};
