//! # Editor Context
//!
//! [`EditorContext`] owns everything the gizmo core mutates: the scene and
//! its selection, the manipulation state, the camera, the viewport and the
//! console. All hit testing and manipulation go through `&mut EditorContext`,
//! which keeps a single writer for the whole editor state.
//!
//! ## Frame order
//!
//! Within one frame the host calls, in order:
//!
//! 1. [`EditorContext::press`] / [`EditorContext::release`] for button edges
//! 2. [`EditorContext::update`] to apply the drag for the live cursor
//! 3. [`EditorContext::gizmo_lines`] (or any read) to draw
//!
//! ## Usage
//!
//! ```no_run
//! use gizmo_editor::config::EditorConfig;
//! use gizmo_editor::editor::EditorContext;
//! use gizmo_editor::gfx::scene::ShapeKind;
//!
//! let mut editor = EditorContext::new(EditorConfig::default()).unwrap();
//! editor.add_object(ShapeKind::Cube);
//! editor.set_cursor(960.0, 540.0);
//! editor.press();
//! editor.update();
//! editor.release();
//! ```

use cgmath::Vector3;

use crate::config::EditorConfig;
use crate::error::Result;
use crate::gfx::camera::{Camera, FlyCamera};
use crate::gfx::gizmos::{
    apply_drag, apply_press, build_gizmo_lines, build_scene_lines, build_selection_outline,
    resolve_press, AppliedTransform, EditorState, GizmoVertex, ManipulationState, Mode,
    PressOutcome, TransformStep,
};
use crate::gfx::picking::{screen_to_world_ray, Ray};
use crate::gfx::scene::{Scene, SceneObject, ShapeKind, TextureHandle};
use crate::ui::console::Console;

#[cfg(test)]
mod test_scenario;

/// Offset from the camera at which the startup cube is placed
const STARTUP_CUBE_OFFSET: Vector3<f32> = Vector3::new(0.0, 0.5, -3.0);

pub(crate) fn fmt_vec(v: Vector3<f32>) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

/// The editor state shared by input handling, manipulation and drawing.
///
/// The scene is only reachable read-only from outside; selection changes go
/// through [`EditorContext::select`] or a press so a drag never outlives the
/// object it was started on.
pub struct EditorContext {
    pub config: EditorConfig,
    scene: Scene,
    pub manipulation: ManipulationState,
    pub camera: FlyCamera,
    pub console: Console,
    viewport: (u32, u32),
    cursor: (f32, f32),
}

impl EditorContext {
    /// Creates an empty editor after validating `config`
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            scene: Scene::new(config.min_scale),
            manipulation: ManipulationState::new(),
            camera: FlyCamera::default(),
            console: Console::new(config.console_capacity),
            viewport: (config.viewport_width, config.viewport_height),
            cursor: (
                config.viewport_width as f32 / 2.0,
                config.viewport_height as f32 / 2.0,
            ),
            config,
        })
    }

    pub fn with_camera(mut self, camera: FlyCamera) -> Self {
        self.camera = camera;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Resize the viewport. Zero sizes (a minimized window) are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.viewport = (width, height);
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1 as f32
    }

    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
    }

    /// World ray under a screen position
    pub fn ray_at(&self, x: f32, y: f32) -> Ray {
        screen_to_world_ray(
            x,
            y,
            &self.camera.view_matrix(),
            &self.camera.projection_matrix(self.aspect()),
            self.viewport.0 as f32,
            self.viewport.1 as f32,
        )
    }

    /// World ray under the cursor
    pub fn cursor_ray(&self) -> Ray {
        self.ray_at(self.cursor.0, self.cursor.1)
    }

    pub fn state(&self) -> EditorState {
        EditorState::derive(self.scene.selected(), &self.manipulation)
    }

    /// "Add Cube" / "Add Sphere": appends at the spawn point, keeps the selection
    pub fn add_object(&mut self, shape: ShapeKind) -> usize {
        let index = self.scene.add(shape);
        let position = self.scene.objects()[index].position;
        self.console.info(format!(
            "Added a new {} at position {}",
            shape.label().to_lowercase(),
            fmt_vec(position)
        ));
        index
    }

    /// Places a cube a little in front of the camera
    pub fn spawn_startup_cube(&mut self) -> usize {
        let position = self.camera.position + STARTUP_CUBE_OFFSET;
        let index = self.scene.push(SceneObject::cube(position));
        self.console.info(format!(
            "Default cube created at position {} with scale (1.0, 1.0, 1.0)",
            fmt_vec(position)
        ));
        index
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.manipulation.mode != mode {
            self.manipulation.set_mode(mode);
            self.console.info(format!("Switched to {} mode", mode.label()));
        }
    }

    /// Select from outside the viewport (e.g. the object list).
    ///
    /// Changing or clearing the selection ends any drag.
    pub fn select(&mut self, index: Option<usize>) {
        let previous = self.scene.selected();
        self.scene.select(index);

        let selected = self.scene.selected();
        if selected != previous {
            self.manipulation.reset();
        }
        match selected {
            Some(index) => self.console.info(format!("Selected object Object {}", index)),
            None if index.is_some() => {
                self.console.warn("Ignored selection of a missing object");
            }
            None => {}
        }
    }

    /// Primary button pressed at the current cursor position
    pub fn press(&mut self) -> PressOutcome {
        let ray = self.cursor_ray();
        self.press_ray(&ray)
    }

    /// Primary button pressed along `ray`
    pub fn press_ray(&mut self, ray: &Ray) -> PressOutcome {
        let had_selection = self.scene.selected().is_some();
        let outcome = resolve_press(ray, &self.scene, self.manipulation.mode, &self.config);
        apply_press(outcome, &mut self.scene, &mut self.manipulation);

        match outcome {
            PressOutcome::Handle { axis, .. } => {
                self.console
                    .info(format!("Selected {}-axis for dragging", axis.label()));
                self.console
                    .info(format!("Started dragging along axis {}", axis.label()));
            }
            PressOutcome::Object(index) => {
                if had_selection {
                    self.console.info("Gizmo not selected");
                }
                let position = self.scene.objects()[index].position;
                self.console.info(format!(
                    "Object {} selected at position {}",
                    index,
                    fmt_vec(position)
                ));
            }
            PressOutcome::Nothing => {
                if had_selection {
                    self.console.info("Gizmo not selected");
                }
                self.console.info("No object selected");
            }
        }

        outcome
    }

    /// Primary button released: the drag ends whatever is selected
    pub fn release(&mut self) {
        if self.manipulation.is_dragging() {
            self.console.info("Stopped dragging");
        }
        self.manipulation.reset();
    }

    /// Per-frame drag update from the live cursor
    pub fn update(&mut self) -> Option<TransformStep> {
        if !self.manipulation.is_dragging() {
            return None;
        }
        let ray = self.cursor_ray();
        self.update_with_ray(&ray)
    }

    /// Per-frame drag update along an explicit ray
    pub fn update_with_ray(&mut self, ray: &Ray) -> Option<TransformStep> {
        let step = apply_drag(ray, &mut self.scene, &mut self.manipulation, &self.config)?;

        let message = match step.applied {
            AppliedTransform::Translated { position } => format!(
                "Translating along axis {}, movement: {}, new position: {}",
                step.axis.label(),
                fmt_vec(step.movement),
                fmt_vec(position)
            ),
            AppliedTransform::Rotated { angle, position } => format!(
                "Rotating around axis {}, angle: {:.3}, new position: {}",
                step.axis.label(),
                angle.0,
                fmt_vec(position)
            ),
            AppliedTransform::Scaled { scale } => format!(
                "Scaling along axis {}, scale change: {}, new scale: {}",
                step.axis.label(),
                fmt_vec(step.movement),
                fmt_vec(scale)
            ),
        };

        if self.config.echo_transforms {
            self.console.log(log::Level::Debug, message);
        } else {
            log::debug!("{}", message);
        }

        Some(step)
    }

    /// Gizmo lines for the selected object; empty when nothing is selected
    pub fn gizmo_lines(&self) -> Vec<GizmoVertex> {
        match self.scene.selected_object() {
            Some(object) => build_gizmo_lines(object.position, &self.manipulation, &self.config),
            None => Vec::new(),
        }
    }

    /// Depth-tested lines: ground grid and object wireframes
    pub fn scene_lines(&self) -> Vec<GizmoVertex> {
        build_scene_lines(&self.scene, &self.config)
    }

    /// Lines drawn on top of the scene: selection outline and gizmo
    pub fn overlay_lines(&self) -> Vec<GizmoVertex> {
        match self.scene.selected_object() {
            Some(object) => {
                let mut lines = build_selection_outline(object);
                lines.extend(build_gizmo_lines(
                    object.position,
                    &self.manipulation,
                    &self.config,
                ));
                lines
            }
            None => Vec::new(),
        }
    }

    /// Direct position edit (object settings panel)
    pub fn set_position(&mut self, index: usize, position: Vector3<f32>) -> Result<()> {
        self.scene.set_position(index, position)
    }

    /// Direct scale edit; clamped like a gizmo drag
    pub fn set_scale(&mut self, index: usize, scale: Vector3<f32>) -> Result<()> {
        self.scene.set_scale(index, scale)
    }

    pub fn set_color(&mut self, index: usize, color: [f32; 4]) -> Result<()> {
        self.scene.set_color(index, color)
    }

    /// Bind a texture the renderer has already loaded
    pub fn set_texture(&mut self, index: usize, texture: Option<TextureHandle>) -> Result<()> {
        self.scene.set_texture(index, texture)?;
        match texture {
            Some(TextureHandle(id)) => self
                .console
                .info(format!("Bound texture {} to Object {}", id, index)),
            None => self.console.info(format!("Cleared texture of Object {}", index)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditorError;
    use crate::gfx::gizmos::Axis;

    fn editor() -> EditorContext {
        EditorContext::new(EditorConfig::default())
            .unwrap()
            .with_camera(FlyCamera::new(Vector3::new(0.0, 0.5, 3.0)))
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = EditorContext::new(EditorConfig::default().with_click_radius(-1.0));
        assert!(matches!(
            result,
            Err(EditorError::NonPositiveConfig {
                name: "click_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_startup_cube_in_front_of_camera() {
        let mut editor = editor();
        let index = editor.spawn_startup_cube();
        assert_eq!(
            editor.scene().objects()[index].position,
            Vector3::new(0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_zero_viewport_is_ignored() {
        let mut editor = editor();
        editor.set_viewport(0, 0);
        assert_eq!(editor.viewport(), (1920, 1080));
        editor.set_viewport(800, 600);
        assert_eq!(editor.viewport(), (800, 600));
    }

    #[test]
    fn test_press_miss_clears_selection() {
        let mut editor = editor();
        editor.add_object(ShapeKind::Sphere);
        editor.select(Some(0));

        // Far corner of the screen, nowhere near the sphere
        editor.set_cursor(0.0, 0.0);
        assert_eq!(editor.press(), PressOutcome::Nothing);
        assert_eq!(editor.state(), EditorState::Idle);
        assert_eq!(editor.console.last(), Some("No object selected"));
    }

    #[test]
    fn test_deselect_ends_drag() {
        let mut editor = editor();
        editor.add_object(ShapeKind::Cube);
        editor.select(Some(0));
        editor
            .manipulation
            .begin_drag(Axis::X, Vector3::new(0.0, 0.0, 0.0));

        editor.select(None);
        assert!(!editor.manipulation.is_dragging());
    }

    #[test]
    fn test_mode_change_logs_once() {
        let mut editor = editor();
        editor.set_mode(Mode::Rotate);
        editor.set_mode(Mode::Rotate);
        assert_eq!(editor.console.len(), 1);
        assert_eq!(editor.console.last(), Some("Switched to Rotate mode"));
    }

    #[test]
    fn test_gizmo_lines_only_with_selection() {
        let mut editor = editor();
        editor.add_object(ShapeKind::Cube);
        assert!(editor.gizmo_lines().is_empty());

        editor.select(Some(0));
        assert_eq!(editor.gizmo_lines().len(), 6);
    }

    #[test]
    fn test_overlay_adds_outline_to_gizmo() {
        let mut editor = editor();
        editor.add_object(ShapeKind::Cube);
        assert!(editor.overlay_lines().is_empty());

        editor.select(Some(0));
        // Cube outline (12 edges) plus three translate handles
        assert_eq!(editor.overlay_lines().len(), 24 + 6);
        assert_eq!(
            editor.scene_lines().len(),
            build_scene_lines(editor.scene(), &editor.config).len()
        );
    }

    #[test]
    fn test_transform_echo_follows_config() {
        let mut editor = editor();
        editor.add_object(ShapeKind::Cube);
        editor.select(Some(0));
        editor
            .manipulation
            .begin_drag(Axis::X, Vector3::new(0.0, 0.5, 2.0));
        let before = editor.console.len();

        let ray = Ray::new(Vector3::new(0.0, 0.5, 3.0), Vector3::new(0.1, 0.0, -1.0));
        editor.update_with_ray(&ray).unwrap();
        assert_eq!(editor.console.len(), before + 1);
        assert!(editor
            .console
            .last()
            .is_some_and(|line| line.starts_with("Translating along axis X")));

        editor.config = editor.config.with_echo_transforms(false);
        editor.update_with_ray(&ray).unwrap();
        assert_eq!(editor.console.len(), before + 1);
    }

    #[test]
    fn test_direct_edits() {
        let mut editor = editor();
        editor.add_object(ShapeKind::Cube);

        editor.set_scale(0, Vector3::new(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(
            editor.scene().objects()[0].scale(),
            Vector3::new(0.1, 0.1, 0.1)
        );

        editor.set_color(0, [0.2, 0.4, 0.6, 1.0]).unwrap();
        assert_eq!(editor.scene().objects()[0].color, [0.2, 0.4, 0.6, 1.0]);

        editor.set_texture(0, Some(TextureHandle(3))).unwrap();
        assert_eq!(editor.console.last(), Some("Bound texture 3 to Object 0"));

        assert!(editor.set_position(9, Vector3::new(0.0, 0.0, 0.0)).is_err());
    }
}
