//! # Graphics Module
//!
//! Scene data and the interactive pieces that act on it.
//!
//! ## Architecture Overview
//!
//! - **Camera** ([`camera`]) - Fly camera providing view and projection
//! - **Picking** ([`picking`]) - Screen rays and ray/shape proximity tests
//! - **Scene** ([`scene`]) - Ordered objects plus the current selection
//! - **Gizmos** ([`gizmos`]) - Handle hit testing, drag state and transforms
//! - **Rendering** ([`rendering`]) - wgpu surface and line-list pipelines
//!
//! ## Usage
//!
//! ```no_run
//! use gizmo_editor::config::EditorConfig;
//! use gizmo_editor::gfx::gizmos::{resolve_press, Mode};
//! use gizmo_editor::gfx::picking::Ray;
//! use gizmo_editor::gfx::scene::{Scene, ShapeKind};
//! use cgmath::Vector3;
//!
//! let mut scene = Scene::default();
//! scene.add(ShapeKind::Cube);
//!
//! let ray = Ray::new(Vector3::new(0.0, 0.5, 3.0), Vector3::new(0.0, 0.0, -1.0));
//! let outcome = resolve_press(&ray, &scene, Mode::Translate, &EditorConfig::default());
//! ```

pub mod camera;
pub mod gizmos;
pub mod picking;
pub mod rendering;
pub mod scene;

// Re-export commonly used types
pub use camera::FlyCamera;
pub use picking::Ray;
pub use rendering::RenderEngine;
pub use scene::Scene;
