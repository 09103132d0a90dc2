//! Opens the editor window with the default panels.
//!
//! The viewport shows the ground grid, both objects as wireframes and the
//! gizmo of the selected object. The frame hook reports editor state
//! transitions so picking and dragging can also be followed from the
//! terminal. Run with `RUST_LOG=info` (or `debug` for per-frame transforms).

use gizmo_editor::prelude::*;

fn main() -> anyhow::Result<()> {
    let mut app = gizmo_editor::default()?;
    app.editor_mut().add_object(ShapeKind::Sphere);

    let mut last_state = EditorState::Idle;
    app.set_frame_hook(move |frame| {
        let state = frame.editor.state();
        if state != last_state {
            log::info!(
                "{:?} -> {:?} ({} gizmo vertices)",
                last_state,
                state,
                frame.editor.gizmo_lines().len()
            );
            last_state = state;
        }
    });

    app.run()
}
