//! # Gizmo System
//!
//! This module implements the translate / rotate / scale gizmo shown on the
//! selected object: which handles exist, how a press grabs one, and how a
//! drag turns cursor motion into a transform.
//!
//! ## Architecture
//!
//! - [`manipulation`] - Mode and drag state ([`DragState`] keeps the active
//!   axis and the drag flag in one value)
//! - [`handles`] - Segment and ring proxies for each axis
//! - [`hit_test`] - Press resolution: handles first, then objects
//! - [`transform`] - Per-frame incremental transform while dragging
//! - [`lines`] - Line geometry for drawing the gizmo
//!
//! ## Usage
//!
//! ```no_run
//! use cgmath::Vector3;
//! use gizmo_editor::config::EditorConfig;
//! use gizmo_editor::gfx::gizmos::{apply_press, resolve_press, ManipulationState};
//! use gizmo_editor::gfx::picking::Ray;
//! use gizmo_editor::gfx::scene::{Scene, ShapeKind};
//!
//! let config = EditorConfig::default();
//! let mut scene = Scene::new(config.min_scale);
//! scene.add(ShapeKind::Cube);
//! let mut manipulation = ManipulationState::new();
//!
//! let ray = Ray::new(Vector3::new(0.0, 0.5, 3.0), Vector3::new(0.0, 0.0, -1.0));
//! let outcome = resolve_press(&ray, &scene, manipulation.mode, &config);
//! apply_press(outcome, &mut scene, &mut manipulation);
//! ```

pub mod handles;
pub mod lines;
pub mod manipulation;
pub mod transform;

// Re-export main types
pub use handles::{handles_for, Handle, HandleShape};
pub use hit_test::{apply_press, hit_test_handles, hit_test_objects, resolve_press, PressOutcome};
pub use lines::{
    axis_color, build_gizmo_lines, build_grid_lines, build_scene_lines, build_selection_outline,
    GizmoVertex,
};
pub use manipulation::{Axis, DragState, EditorState, ManipulationState, Mode};
pub use transform::{apply_drag, AppliedTransform, TransformStep};
