//! Gizmo Editor
//!
//! Interactive 3D scene editing core: ray picking, translate/rotate/scale
//! gizmos and drag manipulation, with a winit and Dear ImGui editor shell.

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod gfx;
pub mod input;
pub mod prelude;
pub mod ui;

// Re-export main types for convenience
pub use app::EditorApp;
pub use editor::EditorContext;

/// Creates an editor application with the default configuration
pub fn default() -> anyhow::Result<EditorApp> {
    EditorApp::new(config::EditorConfig::default())
}
