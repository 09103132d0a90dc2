//! # Scene Object Store
//!
//! This module holds the editable scene: an ordered list of cube and sphere
//! primitives and the single-object selection.
//!
//! ## Key Components
//!
//! - [`Scene`] - Ordered object store that owns the selection
//! - [`SceneObject`] - A primitive with position, scale, color and texture
//! - [`ShapeKind`] - Cube or sphere
//!
//! ## Invariants
//!
//! - Object identity is the index in the store; objects are never removed
//! - Every scale component stays at or above the scene's minimum after any
//!   mutation, whether it comes from a gizmo drag or a direct UI edit
//! - At most one object is selected; a stale index reads as no selection
//!
//! ## Usage
//!
//! ```no_run
//! use gizmo_editor::gfx::scene::{Scene, ShapeKind};
//!
//! let mut scene = Scene::new(0.1);
//! let cube = scene.add(ShapeKind::Cube);
//! scene.select(Some(cube));
//! ```

pub mod object;
pub mod scene;

// Re-export main types
pub use object::{SceneObject, ShapeKind, TextureHandle};
pub use scene::Scene;
