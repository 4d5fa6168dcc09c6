//! Interactive presentation of a [`Plot`] in a winit window, rendered
//! with vello.

use std::num::NonZeroUsize;
use std::sync::Arc;

use kurbo::Size;
use tracing::{debug, error};
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu;
use vello::{AaConfig, RenderParams, Renderer, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::error::ViewError;
use crate::plot::Plot;
use crate::scene::SceneCanvas;
use crate::viewport::Viewport;

/// Initial window size in logical pixels.
const INITIAL_SIZE: (f64, f64) = (800.0, 800.0);

/// Opens a window showing `plot` and blocks until it is closed.
pub fn show(plot: &Plot, title: &str) -> Result<(), ViewError> {
    let event_loop = EventLoop::new()?;
    let mut app = PlotApp::new(plot, title);

    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct PlotApp<'s, 'p> {
    context: RenderContext,
    renderer: Option<Renderer>,
    state: RenderState<'s>,
    scene: Scene,
    plot: &'p Plot,
    title: String,
    /// First error hit inside the event loop, which cannot return it.
    failure: Option<ViewError>,
}

enum RenderState<'s> {
    Suspended(Option<Arc<Window>>),
    Active {
        surface: Box<RenderSurface<'s>>,
        window: Arc<Window>,
    },
}

impl<'p> PlotApp<'_, 'p> {
    fn new(plot: &'p Plot, title: &str) -> Self {
        Self {
            context: RenderContext::new(),
            renderer: None,
            state: RenderState::Suspended(None),
            scene: Scene::new(),
            plot,
            title: title.to_owned(),
            failure: None,
        }
    }

    /// Records `err` and stops the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ViewError) {
        error!("{err}");
        self.failure.get_or_insert(err);
        event_loop.exit();
    }

    fn rebuild_scene(&mut self, size: Size, scale_factor: f64) {
        let style = self.plot.style();
        let viewport = Viewport::fit(
            self.plot.bounds(),
            size,
            style.margin * scale_factor,
        );
        debug!(scale = viewport.scale(), ?size, "fitted viewport");

        self.scene.reset();
        let mut canvas = SceneCanvas::new(&mut self.scene, viewport)
            .with_scale_factor(scale_factor)
            .with_stroke_width(style.stroke_width)
            .with_label_size(style.label_size);
        self.plot.draw(&mut canvas);
    }

    /// Performs a complete render pass.
    fn render(&mut self) -> Result<(), ViewError> {
        let (surface, window) = match &mut self.state {
            RenderState::Active { surface, window } => {
                (surface, window.clone())
            }
            _ => return Ok(()),
        };

        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        if surface.config.width != size.width
            || surface.config.height != size.height
        {
            self.context.resize_surface(
                surface,
                size.width,
                size.height,
            );
        }

        let dev_id = surface.dev_id;
        let target = (surface.config.width, surface.config.height);
        self.rebuild_scene(
            Size::new(f64::from(size.width), f64::from(size.height)),
            window.scale_factor(),
        );

        let RenderState::Active { surface, .. } = &mut self.state else {
            return Ok(());
        };
        let dev = &self.context.devices[dev_id];
        let texture = match surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(
                wgpu::SurfaceError::Lost
                | wgpu::SurfaceError::Outdated,
            ) => {
                self.context.resize_surface(
                    surface,
                    size.width,
                    size.height,
                );
                window.request_redraw();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(ViewError::OutOfMemory);
            }
            Err(wgpu::SurfaceError::Other) => return Ok(()),
        };

        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(());
        };
        renderer
            .render_to_texture(
                &dev.device,
                &dev.queue,
                &self.scene,
                &surface.target_view,
                &RenderParams {
                    base_color: self.plot.style().background,
                    width: target.0,
                    height: target.1,
                    antialiasing_method: AaConfig::Area,
                },
            )
            .map_err(ViewError::Render)?;

        let mut enc = dev.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor { label: None },
        );

        surface.blitter.copy(
            &dev.device,
            &mut enc,
            &surface.target_view,
            &texture
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default()),
        );

        dev.queue.submit([enc.finish()]);
        texture.present();

        Ok(())
    }

    fn activate(
        &mut self,
        event_loop: &ActiveEventLoop,
        cached_window: Option<Arc<Window>>,
    ) -> Result<(), ViewError> {
        let window = match cached_window {
            Some(window) => window,
            None => {
                let (w, h) = INITIAL_SIZE;
                let attr = Window::default_attributes()
                    .with_inner_size(LogicalSize::new(w, h))
                    .with_title(self.title.as_str());
                Arc::new(event_loop.create_window(attr)?)
            }
        };

        let size = window.inner_size();
        let surface_future = self.context.create_surface(
            window.clone(),
            size.width,
            size.height,
            wgpu::PresentMode::AutoVsync,
        );
        let surface = pollster::block_on(surface_future)
            .map_err(ViewError::Surface)?;

        let device_handle = &self.context.devices[surface.dev_id];
        surface
            .surface
            .configure(&device_handle.device, &surface.config);

        if self.renderer.is_none() {
            let renderer = Renderer::new(
                &device_handle.device,
                RendererOptions {
                    use_cpu: false,
                    antialiasing_support: vello::AaSupport::area_only(),
                    num_init_threads: NonZeroUsize::new(1),
                    pipeline_cache: None,
                },
            )
            .map_err(ViewError::Renderer)?;
            self.renderer = Some(renderer);
        }

        window.request_redraw();
        self.state = RenderState::Active {
            surface: Box::new(surface),
            window,
        };

        Ok(())
    }
}

impl ApplicationHandler for PlotApp<'_, '_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let RenderState::Suspended(cached_window) = &mut self.state
        else {
            return;
        };
        let cached_window = cached_window.take();

        if let Err(err) = self.activate(event_loop, cached_window) {
            self.fail(event_loop, err);
        }
    }

    fn suspended(&mut self, _el: &ActiveEventLoop) {
        if let RenderState::Active { window, .. } = &self.state {
            self.state = RenderState::Suspended(Some(window.clone()));
        }
    }

    fn window_event(
        &mut self,
        el: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => el.exit(),
            WindowEvent::Resized(size) => {
                debug!(?size, "window resized");
                if let RenderState::Active { window, .. } = &self.state {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render() {
                    self.fail(el, err);
                }
            }
            _ => {}
        }
    }
}
