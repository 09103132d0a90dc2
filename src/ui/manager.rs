//! ImGui frame management for the editor shell
//!
//! Owns the Dear ImGui context, its winit platform glue and the wgpu
//! renderer. Input is fed through [`UiManager::handle_input`], panels are
//! built once per frame in [`UiManager::update_logic`] and drawn over the
//! viewport by [`UiManager::render_display_only`].

use imgui::{Context, FontConfig, FontSource, MouseCursor};
use imgui_wgpu::{Renderer, RendererConfig};
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use std::time::Instant;
use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
use winit::{
    event::{Event, WindowEvent},
    window::Window,
};

/// Tracks whether a built ImGui frame is waiting to be rendered.
///
/// ImGui may only render a frame it has started, so a failed
/// `prepare_frame` must leave nothing to render.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct FrameGate {
    pending: bool,
}

impl FrameGate {
    fn built(&mut self) {
        self.pending = true;
    }

    /// Returns true once per built frame
    fn take(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }
}

/// Dear ImGui context plus winit and wgpu integration
pub struct UiManager {
    pub context: Context,
    platform: WinitPlatform,
    renderer: Renderer,
    last_frame: Instant,
    last_cursor: Option<MouseCursor>,
    frame: FrameGate,
}

impl UiManager {
    /// Create the context, attach it to `window` and set up the renderer.
    ///
    /// DPI is locked to 1.0 so panel sizes are in window pixels.
    pub fn new(
        device: &Device,
        queue: &Queue,
        output_color_format: TextureFormat,
        window: &Window,
        font_size: f32,
    ) -> Self {
        let mut context = Context::create();
        context.set_ini_filename(None);

        let mut platform = WinitPlatform::new(&mut context);
        platform.attach_window(context.io_mut(), window, HiDpiMode::Locked(1.0));

        context.fonts().add_font(&[FontSource::DefaultFontData {
            config: Some(FontConfig {
                oversample_h: 1,
                pixel_snap_h: true,
                size_pixels: font_size,
                ..Default::default()
            }),
        }]);

        let renderer_config = RendererConfig {
            texture_format: output_color_format,
            ..Default::default()
        };
        let renderer = Renderer::new(&mut context, device, queue, renderer_config);

        Self {
            context,
            platform,
            renderer,
            last_frame: Instant::now(),
            last_cursor: None,
            frame: FrameGate::default(),
        }
    }

    /// Forward an input event; returns true if ImGui wants the mouse
    pub fn handle_input<T>(&mut self, window: &Window, event: &Event<T>) -> bool {
        let Event::WindowEvent {
            event: window_event,
            ..
        } = event
        else {
            return false;
        };

        match window_event {
            WindowEvent::CursorMoved { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::MouseWheel { .. }
            | WindowEvent::KeyboardInput { .. }
            | WindowEvent::Focused(_)
            | WindowEvent::Resized(_) => {
                self.platform
                    .handle_event(self.context.io_mut(), window, event);
                self.wants_mouse()
            }
            _ => false,
        }
    }

    pub fn wants_mouse(&self) -> bool {
        self.context.io().want_capture_mouse
    }

    /// Build this frame's panels; returns whether ImGui wants the mouse.
    ///
    /// When the platform cannot prepare the frame, no panels are built and
    /// the next [`UiManager::render_display_only`] draws nothing.
    pub fn update_logic<F>(&mut self, window: &Window, run_ui: F) -> bool
    where
        F: FnOnce(&imgui::Ui),
    {
        let now = Instant::now();
        self.context
            .io_mut()
            .update_delta_time(now - self.last_frame);
        self.last_frame = now;

        // A frame that was never drawn (skipped surface) is closed first
        if self.frame.take() {
            self.context.render();
        }

        if let Err(err) = self.platform.prepare_frame(self.context.io_mut(), window) {
            log::warn!("Failed to prepare UI frame: {}", err);
            return false;
        }

        let ui = self.context.frame();
        run_ui(ui);

        if self.last_cursor != ui.mouse_cursor() {
            self.last_cursor = ui.mouse_cursor();
            self.platform.prepare_render(ui, window);
        }

        self.frame.built();
        self.wants_mouse()
    }

    /// Draw the frame built by [`UiManager::update_logic`] over
    /// `color_attachment`, keeping what is already there
    pub fn render_display_only(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        color_attachment: &TextureView,
    ) {
        if !self.frame.take() {
            return;
        }

        let draw_data = self.context.render();
        if draw_data.display_size[0] <= 0.0 || draw_data.display_size[1] <= 0.0 {
            return;
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("imgui_render_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_attachment,
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

        if let Err(err) = self
            .renderer
            .render(draw_data, queue, device, &mut render_pass)
        {
            log::warn!("Failed to render UI: {:?}", err);
        }
    }
}
