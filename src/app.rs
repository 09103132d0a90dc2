use anyhow::Context;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::config::EditorConfig;
use crate::editor::EditorContext;
use crate::gfx::camera::Camera;
use crate::gfx::rendering::RenderEngine;
use crate::input::{InputAction, InputRouter};
use crate::ui::{editor_panels, UiManager};

const UI_FONT_SIZE: f32 = 18.0;

/// Panels built every frame against the editor
pub type UiCallback = Box<dyn FnMut(&imgui::Ui, &mut EditorContext)>;

/// Called after each frame is presented
pub type FrameHook = Box<dyn FnMut(Frame<'_>)>;

/// State of the editor once a frame has been drawn
pub struct Frame<'a> {
    pub window: &'a Window,
    pub editor: &'a EditorContext,
}

/// Windowed editor shell.
///
/// Owns the event loop, the wgpu [`RenderEngine`] and the [`EditorContext`].
/// Routes winit events through [`InputRouter`], draws the grid, objects,
/// selection outline, gizmo and panels, then calls the frame hook.
pub struct EditorApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    editor: EditorContext,
    input: InputRouter,
    ui_callback: Option<UiCallback>,
    frame_hook: Option<FrameHook>,
    ui_wants_mouse: bool,
    last_frame: Instant,
    error: Option<anyhow::Error>,
}

impl EditorApp {
    /// Create the event loop and an editor holding the startup cube
    pub fn new(config: EditorConfig) -> anyhow::Result<Self> {
        let _ = env_logger::try_init();

        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        let mut editor = EditorContext::new(config).context("Invalid editor configuration")?;
        editor.spawn_startup_cube();

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                editor,
                input: InputRouter::default(),
                ui_callback: Some(Box::new(editor_panels())),
                frame_hook: None,
                ui_wants_mouse: false,
                last_frame: Instant::now(),
                error: None,
            },
        })
    }

    /// Replace the default editor panels
    pub fn set_ui<F>(&mut self, ui_fn: F)
    where
        F: FnMut(&imgui::Ui, &mut EditorContext) + 'static,
    {
        self.app_state.ui_callback = Some(Box::new(ui_fn));
    }

    /// Set the hook called after each frame
    pub fn set_frame_hook<F>(&mut self, hook: F)
    where
        F: FnMut(Frame<'_>) + 'static,
    {
        self.app_state.frame_hook = Some(Box::new(hook));
    }

    pub fn editor(&self) -> &EditorContext {
        &self.app_state.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.app_state.editor
    }

    /// Run until the window closes or Escape is pressed
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("Event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("Failed to run event loop")?;

        match self.app_state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn redraw(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };

        let now = Instant::now();
        let delta_time = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.input.update_camera(&mut self.editor, delta_time);
        self.editor.update();

        if let (Some(ui_manager), Some(ui_callback)) =
            (self.ui_manager.as_mut(), self.ui_callback.as_mut())
        {
            let editor = &mut self.editor;
            self.ui_wants_mouse = ui_manager.update_logic(&window, |ui| ui_callback(ui, editor));
        }

        if let Some(render_engine) = self.render_engine.as_mut() {
            let view_proj = self.editor.camera.gpu_view_projection_matrix(self.editor.aspect());
            let scene_lines = self.editor.scene_lines();
            let overlay_lines = self.editor.overlay_lines();
            let ui_manager = self.ui_manager.as_mut();

            render_engine.render_frame_with_ui(
                view_proj,
                &scene_lines,
                &overlay_lines,
                |device, queue, encoder, color_attachment| {
                    if let Some(ui_manager) = ui_manager {
                        ui_manager.render_display_only(device, queue, encoder, color_attachment);
                    }
                },
            );
        }

        if let Some(frame_hook) = self.frame_hook.as_mut() {
            frame_hook(Frame {
                window: &window,
                editor: &self.editor,
            });
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.editor.viewport();
        let attributes = WindowAttributes::default()
            .with_title("Gizmo Editor")
            .with_inner_size(LogicalSize::new(width, height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.error = Some(anyhow::Error::new(err).context("Failed to create window"));
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let surface_window = window.clone();
        let render_engine = match pollster::block_on(async move {
            RenderEngine::new(surface_window, size.width, size.height).await
        }) {
            Ok(render_engine) => render_engine,
            Err(err) => {
                self.error = Some(err.context("Failed to initialise rendering"));
                event_loop.exit();
                return;
            }
        };

        self.editor.set_viewport(size.width, size.height);
        self.ui_manager = Some(UiManager::new(
            render_engine.device(),
            render_engine.queue(),
            render_engine.surface_format(),
            &window,
            UI_FONT_SIZE,
        ));
        self.render_engine = Some(render_engine);
        self.window = Some(window);
        log::info!("Editor window created ({}x{})", size.width, size.height);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: Event<()> = Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            self.ui_wants_mouse = ui_manager.handle_input(&window, &ui_event);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            event => {
                if let (WindowEvent::Resized(size), Some(render_engine)) =
                    (&event, self.render_engine.as_mut())
                {
                    render_engine.resize(size.width, size.height);
                }

                let action =
                    self.input
                        .handle_window_event(&event, &mut self.editor, self.ui_wants_mouse);
                if action == InputAction::Exit {
                    event_loop.exit();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
