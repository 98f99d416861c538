//! Viewer application: wgpu point rendering with an egui overlay

use crate::config::ViewerConfig;
use crate::panels::{DebugPanel, RenderStats};
use anyhow::{Context, Result};
use galaxy_render::{Camera, GalaxyRenderer, RenderContext};
use galaxy_runtime::{
    EventBus, FrameClock, GalaxyEvent, RedrawMode, RedrawScheduler, RuntimeSystem,
};
use galaxy_scene::GalaxyState;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

/// The windowed visualizer.
///
/// Each turn of the event loop ticks the clock, drains UI events into the
/// galaxy state, steps transitions and syncs dirty buffers to the GPU. Whether
/// a frame is then drawn is decided by the redraw scheduler alone.
pub struct GalaxyApp {
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    renderer: Option<GalaxyRenderer>,
    camera: Camera,
    state: GalaxyState,
    clock: FrameClock,
    events: EventBus,
    redraw: RedrawScheduler,
    fullscreen: bool,

    // egui state
    egui_ctx: egui::Context,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    debug_panel: DebugPanel,
    render_stats: RenderStats,
}

impl GalaxyApp {
    pub fn new(config: ViewerConfig) -> Self {
        let state = GalaxyState::from_preset(&config.preset, config.seed);
        let debug_panel = DebugPanel::new(state.params());
        Self {
            window: None,
            render_context: None,
            renderer: None,
            camera: Camera::galaxy_view(),
            state,
            clock: FrameClock::new(),
            events: EventBus::new(),
            redraw: RedrawScheduler::new(config.redraw_mode),
            fullscreen: config.fullscreen,
            egui_ctx: egui::Context::default(),
            egui_winit: None,
            egui_renderer: None,
            debug_panel,
            render_stats: RenderStats::new(),
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title("Galaxy")
            .with_inner_size(LogicalSize::new(1280.0, 800.0));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("Failed to create galaxy window")?,
        );
        if self.fullscreen {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        self.window = Some(window.clone());

        let render_context = pollster::block_on(RenderContext::new(window.clone()))
            .context("Failed to initialize render context")?;

        let size = window.inner_size();
        self.camera.set_aspect(size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &render_context.device,
            render_context.config.format,
            None,
            1,
            false,
        );

        let mut renderer = GalaxyRenderer::new(&render_context);
        RuntimeSystem::initialize(&mut self.state, &mut renderer.bind(&render_context))
            .context("Failed to build the initial galaxy")?;

        log::info!(
            "Galaxy ready: {} particles, redraw mode {:?}",
            self.state.params().count,
            self.redraw.mode()
        );

        self.render_context = Some(render_context);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);
        self.redraw.request();

        Ok(())
    }

    /// Apply queued UI events, step transitions and upload what changed
    fn update(&mut self) -> Result<()> {
        let dt = self.clock.tick();

        let (Some(context), Some(renderer)) = (&self.render_context, &mut self.renderer) else {
            return Ok(());
        };
        let mut scene = renderer.bind(context);

        for event in self.events.drain() {
            let committed = matches!(event, GalaxyEvent::ParamsCommitted(_));
            self.state.handle_event(event, &mut scene)?;
            if committed {
                self.debug_panel.sync(self.state.params());
            }
        }

        RuntimeSystem::update(&mut self.state, &mut scene, dt)?;

        if self.state.take_redraw_request() {
            self.redraw.request();
        }
        Ok(())
    }

    fn render(&mut self) {
        let Some(context) = &mut self.render_context else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                context.reconfigure();
                self.redraw.request();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {e:?}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.render_stats.record_frame();

        if let (Some(context), Some(renderer)) = (&self.render_context, &self.renderer) {
            renderer.render(context, &self.camera, &view);
        }

        self.render_egui(&view);

        output.present();
    }

    fn render_egui(&mut self, target_view: &wgpu::TextureView) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let (Some(context), Some(egui_winit), Some(egui_renderer)) = (
            &self.render_context,
            &mut self.egui_winit,
            &mut self.egui_renderer,
        ) else {
            return;
        };

        let raw_input = egui_winit.take_egui_input(&window);

        let debug_panel = &mut self.debug_panel;
        let events = &mut self.events;
        let render_stats = &self.render_stats;
        let particles = self
            .renderer
            .as_ref()
            .map(|r| r.particle_count())
            .unwrap_or(0);
        let animating = self.state.is_animating();

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            debug_panel.ui(ctx, events);

            egui::Area::new(egui::Id::new("render_stats"))
                .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
                .show(ctx, |ui| {
                    render_stats.ui(ui, particles, animating);
                });
        });

        egui_winit.handle_platform_output(&window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        // The surface may be smaller than the window when the pixel ratio is capped
        let surface_scale = (context.pixel_ratio / window.scale_factor()) as f32;
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [context.config.width, context.config.height],
            pixels_per_point: full_output.pixels_per_point * surface_scale,
        };

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui Encoder"),
            });

        for (id, image_delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(&context.device, &context.queue, *id, image_delta);
        }

        egui_renderer.update_buffers(
            &context.device,
            &context.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        context.queue.submit(std::iter::once(encoder.finish()));

        for id in &full_output.textures_delta.free {
            egui_renderer.free_texture(id);
        }
    }

    fn toggle_fullscreen(&mut self) {
        if let Some(window) = &self.window {
            if window.fullscreen().is_some() {
                window.set_fullscreen(None);
            } else {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            }
        }
    }

    fn shutdown(&mut self) {
        if let (Some(context), Some(renderer)) = (&self.render_context, &mut self.renderer) {
            if let Err(e) = RuntimeSystem::shutdown(&mut self.state, &mut renderer.bind(context)) {
                log::warn!("Galaxy state shutdown failed: {e}");
            }
        }
    }
}

impl ApplicationHandler for GalaxyApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.initialize(event_loop) {
                log::error!("Failed to initialize galaxy viewer: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window) {
            let response = egui_winit.on_window_event(window, &event);
            if response.repaint {
                self.redraw.request();
            }
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let (Some(context), Some(window)) = (&mut self.render_context, &self.window) {
                    context.resize(new_size, window.scale_factor());
                    self.camera.set_aspect(new_size.width, new_size.height);
                    self.events.push(GalaxyEvent::Resized {
                        width: new_size.width,
                        height: new_size.height,
                    });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::F11) => self.toggle_fullscreen(),
                        PhysicalKey::Code(KeyCode::Tab) => {
                            self.debug_panel.open = !self.debug_panel.open;
                            self.redraw.request();
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.update() {
            log::error!("Frame update failed: {e}");
        }

        // Idle on-demand viewers sleep until the next input event
        let control_flow = match self.redraw.mode() {
            RedrawMode::OnDemand if !self.state.is_animating() => ControlFlow::Wait,
            _ => ControlFlow::Poll,
        };
        event_loop.set_control_flow(control_flow);

        if self.redraw.take() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
