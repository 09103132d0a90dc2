use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, MouseScrollDelta},
    keyboard::KeyCode,
};

use super::fly_camera::{CameraMovement, FlyCamera};

/// Pixel scroll deltas are divided by this to match line deltas
const PIXELS_PER_LINE: f32 = 40.0;

/// Maps winit input to [`FlyCamera`] moves.
///
/// WASD moves while held, the right mouse button enables mouse look and the
/// wheel zooms. The left button is left to the editor.
pub struct CameraController {
    pub look_speed: f32,
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    is_look_held: bool,
    last_cursor: Option<(f32, f32)>,
}

impl CameraController {
    pub fn new(look_speed: f32) -> Self {
        Self {
            look_speed,
            forward: false,
            backward: false,
            left: false,
            right: false,
            is_look_held: false,
            last_cursor: None,
        }
    }

    /// Returns true when the key is one of the movement keys
    pub fn process_key(&mut self, code: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        match code {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            _ => return false,
        }
        true
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Right {
            self.is_look_held = state == ElementState::Pressed;
            // Forget the old cursor so the first move after a press does not jump
            self.last_cursor = None;
        }
    }

    /// Feed a cursor position; rotates the camera while look is held
    pub fn process_cursor(&mut self, x: f32, y: f32, camera: &mut FlyCamera) {
        if !self.is_look_held {
            self.last_cursor = None;
            return;
        }

        if let Some((last_x, last_y)) = self.last_cursor {
            let x_offset = (x - last_x) * self.look_speed;
            // Screen Y grows downwards
            let y_offset = (last_y - y) * self.look_speed;
            camera.process_mouse_movement(x_offset, y_offset);
        }
        self.last_cursor = Some((x, y));
    }

    pub fn process_scroll(&mut self, delta: &MouseScrollDelta, camera: &mut FlyCamera) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y as f32 / PIXELS_PER_LINE,
        };
        camera.process_mouse_scroll(lines);
    }

    /// Apply held movement keys for this frame
    pub fn update(&self, camera: &mut FlyCamera, delta_time: f32) {
        let held = [
            (self.forward, CameraMovement::Forward),
            (self.backward, CameraMovement::Backward),
            (self.left, CameraMovement::Left),
            (self.right, CameraMovement::Right),
        ];
        for (is_held, movement) in held {
            if is_held {
                camera.process_keyboard(movement, delta_time);
            }
        }
    }

    pub fn is_looking(&self) -> bool {
        self.is_look_held
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(0.1)
    }
}
