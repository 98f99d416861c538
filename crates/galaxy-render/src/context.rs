//! wgpu render context setup

use std::sync::Arc;
use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Device pixel ratio ceiling. Higher ratios are rendered at this ratio and
/// scaled up by the compositor.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to create surface: {0}")]
    SurfaceCreation(String),
    #[error("Failed to get adapter")]
    AdapterNotFound,
    #[error("Failed to create device: {0}")]
    DeviceCreation(String),
    #[error("Surface error: {0}")]
    SurfaceError(String),
}

/// Surface size for a window of `physical` pixels at `scale_factor`, with
/// the pixel ratio capped at [`MAX_PIXEL_RATIO`].
pub fn capped_surface_size(physical: PhysicalSize<u32>, scale_factor: f64) -> PhysicalSize<u32> {
    if scale_factor.is_nan() || scale_factor <= MAX_PIXEL_RATIO {
        return PhysicalSize::new(physical.width.max(1), physical.height.max(1));
    }
    let shrink = MAX_PIXEL_RATIO / scale_factor;
    let scale = |v: u32| ((v as f64 * shrink).round() as u32).max(1);
    PhysicalSize::new(scale(physical.width), scale(physical.height))
}

/// wgpu device, queue and the window surface with its depth buffer
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    /// Configured surface size (after the pixel ratio cap)
    pub size: PhysicalSize<u32>,
    /// Effective pixel ratio after the cap
    pub pixel_ratio: f64,
    pub depth_texture: wgpu::Texture,
    pub depth_view: wgpu::TextureView,
}

impl RenderContext {
    pub async fn new(window: Arc<Window>) -> Result<Self, RenderError> {
        let scale_factor = window.scale_factor();
        let size = capped_surface_size(window.inner_size(), scale_factor);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| RenderError::SurfaceCreation(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| RenderError::AdapterNotFound)?;

        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Galaxy Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| RenderError::DeviceCreation(e.to_string()))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| RenderError::SurfaceError("Surface reports no formats".into()))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth_texture, depth_view) = create_depth_texture(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            pixel_ratio: scale_factor.min(MAX_PIXEL_RATIO),
            depth_texture,
            depth_view,
        })
    }

    /// Reconfigure for a window of `physical` pixels at `scale_factor`
    pub fn resize(&mut self, physical: PhysicalSize<u32>, scale_factor: f64) {
        if physical.width == 0 || physical.height == 0 {
            return;
        }
        let size = capped_surface_size(physical, scale_factor);
        self.size = size;
        self.pixel_ratio = scale_factor.min(MAX_PIXEL_RATIO);
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);

        let (depth_texture, depth_view) = create_depth_texture(&self.device, &self.config);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;
        log::debug!(
            "Surface resized to {}x{} (pixel ratio {:.2})",
            size.width,
            size.height,
            self.pixel_ratio
        );
    }

    /// Reconfigure at the current size, after a lost or outdated surface
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}

fn create_depth_texture(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> (wgpu::Texture, wgpu::TextureView) {
    let size = wgpu::Extent3d {
        width: config.width.max(1),
        height: config.height.max(1),
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    (texture, view)
}
