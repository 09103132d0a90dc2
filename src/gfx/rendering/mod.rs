//! # Rendering Module
//!
//! wgpu drawing for the editor window. Everything the viewport shows is a
//! colored line list built from [`GizmoVertex`](crate::gfx::gizmos::GizmoVertex):
//!
//! - scene lines (grid and object wireframes), depth tested
//! - overlay lines (selection outline and gizmo), always on top
//!
//! The ImGui pass is recorded afterwards by the UI manager.

pub mod line_renderer;
pub mod render_engine;

// Re-export main types
pub use line_renderer::{LineRenderer, LineUniform};
pub use render_engine::RenderEngine;
