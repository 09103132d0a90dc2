//! # Input Routing
//!
//! Translates winit window events into editor actions: the left button
//! presses and releases gizmo handles and picks objects, the right button,
//! WASD and the wheel drive the camera, and resizes update the viewport
//! used for unprojection.

use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::editor::EditorContext;
use crate::gfx::camera::CameraController;
use crate::gfx::gizmos::PressOutcome;

/// What an event did to the editor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Event not relevant to the editor
    Ignored,
    Pressed(PressOutcome),
    Released,
    CursorMoved,
    /// Consumed by the camera controller
    Camera,
    Resized,
    /// Escape was pressed
    Exit,
}

/// Routes window events to the editor and its camera
pub struct InputRouter {
    pub camera_controller: CameraController,
}

impl InputRouter {
    pub fn new(camera_controller: CameraController) -> Self {
        Self { camera_controller }
    }

    /// Handle one window event.
    ///
    /// `ui_wants_mouse` suppresses presses that land on a UI panel. Releases
    /// always go through so a drag can never get stuck.
    pub fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        editor: &mut EditorContext,
        ui_wants_mouse: bool,
    ) -> InputAction {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32, editor)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button(*button, *state, editor, ui_wants_mouse)
            }
            WindowEvent::MouseWheel { delta, .. } if !ui_wants_mouse => {
                self.camera_controller
                    .process_scroll(delta, &mut editor.camera);
                InputAction::Camera
            }
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.key(code, event.state),
                PhysicalKey::Unidentified(_) => InputAction::Ignored,
            },
            WindowEvent::Resized(size) => self.resized(size.width, size.height, editor),
            _ => InputAction::Ignored,
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32, editor: &mut EditorContext) -> InputAction {
        editor.set_cursor(x, y);
        self.camera_controller
            .process_cursor(x, y, &mut editor.camera);
        InputAction::CursorMoved
    }

    /// Left button drives the editor, every other button the camera
    pub fn mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        editor: &mut EditorContext,
        ui_wants_mouse: bool,
    ) -> InputAction {
        if button != MouseButton::Left {
            self.camera_controller.process_mouse_button(button, state);
            return InputAction::Camera;
        }

        match state {
            ElementState::Pressed if ui_wants_mouse => InputAction::Ignored,
            ElementState::Pressed => InputAction::Pressed(editor.press()),
            ElementState::Released => {
                editor.release();
                InputAction::Released
            }
        }
    }

    pub fn key(&mut self, code: KeyCode, state: ElementState) -> InputAction {
        if code == KeyCode::Escape && state == ElementState::Pressed {
            return InputAction::Exit;
        }
        if self.camera_controller.process_key(code, state) {
            InputAction::Camera
        } else {
            InputAction::Ignored
        }
    }

    pub fn resized(&mut self, width: u32, height: u32, editor: &mut EditorContext) -> InputAction {
        editor.set_viewport(width, height);
        InputAction::Resized
    }

    /// Apply held camera keys for this frame
    pub fn update_camera(&self, editor: &mut EditorContext, delta_time: f32) {
        self.camera_controller.update(&mut editor.camera, delta_time);
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(CameraController::default())
    }
}
