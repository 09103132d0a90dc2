//! # Gizmo Editor Prelude
//!
//! Commonly used types in one import:
//!
//! ```no_run
//! use gizmo_editor::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut app = gizmo_editor::default()?;
//!     app.editor_mut().add_object(ShapeKind::Sphere);
//!     app.editor_mut().set_mode(Mode::Scale);
//!     app.run()
//! }
//! ```

// Re-export core application types
pub use crate::app::{EditorApp, Frame};
pub use crate::config::EditorConfig;
pub use crate::default;
pub use crate::editor::EditorContext;
pub use crate::error::EditorError;

// Re-export graphics and scene types
pub use crate::gfx::camera::{Camera, CameraController, FlyCamera};
pub use crate::gfx::gizmos::{Axis, EditorState, GizmoVertex, Mode, PressOutcome};
pub use crate::gfx::picking::Ray;
pub use crate::gfx::scene::{Scene, SceneObject, ShapeKind, TextureHandle};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3};
pub use imgui::Ui;
