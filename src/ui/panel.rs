//! Editor panels
//!
//! Dear ImGui windows for the editor: transformation mode, object list,
//! object settings and the console. Every edit goes through
//! [`EditorContext`], so panel edits obey the same clamping and selection
//! rules as gizmo drags.

use cgmath::Vector3;

use crate::editor::EditorContext;
use crate::gfx::gizmos::Mode;
use crate::gfx::scene::{ShapeKind, TextureHandle};

const PANEL_WIDTH: f32 = 300.0;
const MODE_BUTTON_SIZE: [f32; 2] = [100.0, 30.0];

/// All editor panels as one callback.
///
/// The returned closure keeps the panels' own widget state (the texture id
/// being typed) between frames.
pub fn editor_panels() -> impl FnMut(&imgui::Ui, &mut EditorContext) {
    let mut texture_input: i32 = 0;
    move |ui, editor| {
        transformation_mode_panel(ui, editor);
        object_list_panel(ui, editor);
        object_settings_panel(ui, editor, &mut texture_input);
        console_panel(ui, editor);
    }
}

/// Translate / Rotate / Scale buttons
pub fn transformation_mode_panel(ui: &imgui::Ui, editor: &mut EditorContext) {
    ui.window("Transformation Mode")
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .always_auto_resize(true)
        .build(|| {
            for (i, mode) in Mode::ALL.into_iter().enumerate() {
                if i > 0 {
                    ui.same_line();
                }
                let label = if editor.manipulation.mode == mode {
                    format!("[{}]", mode.label())
                } else {
                    mode.label().to_string()
                };
                if ui.button_with_size(format!("{}##mode", label), MODE_BUTTON_SIZE) {
                    editor.set_mode(mode);
                }
            }
        });
}

/// Add Cube / Add Sphere plus the selectable object list
pub fn object_list_panel(ui: &imgui::Ui, editor: &mut EditorContext) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("Object List")
        .size([PANEL_WIDTH, 300.0], imgui::Condition::FirstUseEver)
        .position(
            [display_size[0] - PANEL_WIDTH - 20.0, 20.0],
            imgui::Condition::FirstUseEver,
        )
        .build(|| {
            if ui.button("Add Cube") {
                editor.add_object(ShapeKind::Cube);
            }
            ui.same_line();
            if ui.button("Add Sphere") {
                editor.add_object(ShapeKind::Sphere);
            }
            ui.separator();

            if editor.scene().is_empty() {
                ui.text_disabled("Scene is empty");
                return;
            }

            let selected = editor.scene().selected();
            let mut clicked = None;
            for (i, name) in editor.scene().object_names().iter().enumerate() {
                let shape = editor.scene().objects()[i].shape.label();
                if ui
                    .selectable_config(format!("{} ({})", name, shape))
                    .selected(selected == Some(i))
                    .build()
                {
                    clicked = Some(i);
                }
            }
            if clicked.is_some() && clicked != selected {
                editor.select(clicked);
            }
        });
}

/// Position, scale, color and texture of the selected object
pub fn object_settings_panel(
    ui: &imgui::Ui,
    editor: &mut EditorContext,
    texture_input: &mut i32,
) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("Object Settings")
        .size([PANEL_WIDTH, 260.0], imgui::Condition::FirstUseEver)
        .position(
            [display_size[0] - PANEL_WIDTH - 20.0, 340.0],
            imgui::Condition::FirstUseEver,
        )
        .build(|| {
            let Some(index) = editor.scene().selected() else {
                ui.text("No object selected");
                return;
            };
            let Some(object) = editor.scene().get(index) else {
                return;
            };

            ui.text(format!("Object {} ({})", index, object.shape.label()));
            ui.separator();

            let mut position: [f32; 3] = object.position.into();
            let mut scale: [f32; 3] = object.scale().into();
            let mut color = object.color;
            let texture = object.texture;
            let min_scale = editor.scene().min_scale();

            if imgui::Drag::new("Position")
                .speed(0.01)
                .build_array(ui, &mut position)
            {
                let result = editor.set_position(index, Vector3::from(position));
                report(editor, result);
            }

            if imgui::Drag::new("Scale")
                .speed(0.01)
                .range(min_scale, f32::MAX)
                .build_array(ui, &mut scale)
            {
                let result = editor.set_scale(index, Vector3::from(scale));
                report(editor, result);
            }

            if ui.color_edit4("Color", &mut color) {
                let result = editor.set_color(index, color);
                report(editor, result);
            }

            ui.separator();
            match texture {
                Some(TextureHandle(id)) => ui.text(format!("Texture: {}", id)),
                None => ui.text("Texture: none"),
            }
            ui.input_int("Texture id", texture_input).build();
            if ui.button("Bind") {
                let handle = u32::try_from(*texture_input).ok().map(TextureHandle);
                match handle {
                    Some(handle) => {
                        let result = editor.set_texture(index, Some(handle));
                        report(editor, result);
                    }
                    None => editor
                        .console
                        .warn(format!("Invalid texture id {}", texture_input)),
                }
            }
            ui.same_line();
            if ui.button("Clear") {
                let result = editor.set_texture(index, None);
                report(editor, result);
            }
        });
}

/// Scrolling view of the editor console
pub fn console_panel(ui: &imgui::Ui, editor: &mut EditorContext) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("Console")
        .size([500.0, 300.0], imgui::Condition::FirstUseEver)
        .position([20.0, display_size[1] - 320.0], imgui::Condition::FirstUseEver)
        .build(|| {
            if ui.button("Clear") {
                editor.console.clear();
            }
            ui.separator();

            ui.child_window("console_lines").build(|| {
                for line in editor.console.lines() {
                    ui.text_wrapped(line);
                }
                // Follow new output unless the user scrolled up
                if ui.scroll_y() >= ui.scroll_max_y() {
                    ui.set_scroll_here_y_with_ratio(1.0);
                }
            });
        });
}

fn report(editor: &mut EditorContext, result: crate::error::Result<()>) {
    if let Err(err) = result {
        editor.console.warn(err.to_string());
    }
}
