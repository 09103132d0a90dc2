//! # User Interface Module
//!
//! Dear ImGui integration for the editor shell.
//!
//! ## Key Components
//!
//! - [`UiManager`] - ImGui context and winit platform glue
//! - [`panel`] - Transformation mode, object list, object settings and
//!   console windows
//! - [`Console`] - Bounded message log shown by the console window
//!
//! ## Usage
//!
//! ```no_run
//! use gizmo_editor::app::EditorApp;
//! use gizmo_editor::config::EditorConfig;
//!
//! let mut app = EditorApp::new(EditorConfig::default()).unwrap();
//! app.set_ui(|ui, editor| {
//!     ui.window("Stats").build(|| {
//!         ui.text(format!("{} objects", editor.scene().len()));
//!     });
//! });
//! ```
//!
//! Presses that land on a panel never reach the gizmo hit test; releases
//! always do.

pub mod console;
pub mod manager;
pub mod panel;

// Re-export main types
pub use console::Console;
pub use manager::UiManager;
pub use panel::editor_panels;
