//! End-to-end editing sessions driven through the editor context

use cgmath::{InnerSpace, Vector3};

use super::EditorContext;
use crate::config::EditorConfig;
use crate::gfx::camera::FlyCamera;
use crate::gfx::gizmos::{Axis, EditorState, Mode, PressOutcome};
use crate::gfx::picking::Ray;
use crate::gfx::scene::ShapeKind;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_vec_near(actual: Vector3<f32>, expected: Vector3<f32>) {
    assert!(
        (actual - expected).magnitude() < 1e-4,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

/// Camera at (0, 0.5, 3) looking down -Z: the screen center ray passes
/// through the spawn point (0, 0.5, 0)
fn editor_with_cube() -> EditorContext {
    init_logger();
    let mut editor = EditorContext::new(EditorConfig::default())
        .unwrap()
        .with_camera(FlyCamera::new(Vector3::new(0.0, 0.5, 3.0)));
    editor.add_object(ShapeKind::Cube);
    editor.set_cursor(960.0, 540.0);
    editor
}

fn drag_invariant_holds(editor: &EditorContext) -> bool {
    editor.manipulation.is_dragging() == editor.manipulation.active_axis().is_some()
}

#[test]
fn test_select_grab_translate_release() {
    let mut editor = editor_with_cube();

    // First press selects the cube
    assert_eq!(editor.press(), PressOutcome::Object(0));
    assert_eq!(editor.state(), EditorState::Selected(0));
    assert!(drag_invariant_holds(&editor));

    // Second press at the gizmo origin grabs X, which has priority
    match editor.press() {
        PressOutcome::Handle { axis, anchor } => {
            assert_eq!(axis, Axis::X);
            assert_vec_near(anchor, Vector3::new(0.0, 0.5, 2.0));
        }
        other => panic!("expected a handle grab, got {:?}", other),
    }
    assert_eq!(editor.state(), EditorState::Dragging(0, Axis::X));
    assert!(drag_invariant_holds(&editor));

    // One frame whose ray sample moved 0.075 along X: movement (0.3, 0, 0)
    let x: f32 = 0.075;
    let ray = Ray::new(
        Vector3::new(0.0, 0.5, 3.0),
        Vector3::new(x, 0.0, -(1.0 - x * x).sqrt()),
    );
    let step = editor.update_with_ray(&ray).expect("drag should apply");
    assert_vec_near(step.movement, Vector3::new(0.3, 0.0, 0.0));
    assert_vec_near(editor.scene().objects()[0].position, Vector3::new(0.3, 0.5, 0.0));

    editor.release();
    assert_eq!(editor.state(), EditorState::Selected(0));
    assert!(!editor.manipulation.is_dragging());
    assert_eq!(editor.manipulation.active_axis(), None);
    assert_eq!(editor.console.last(), Some("Stopped dragging"));
}

#[test]
fn test_cursor_drag_moves_right() {
    let mut editor = editor_with_cube();
    editor.press();
    editor.press();
    assert!(editor.manipulation.is_dragging());

    // Cursor moves right on screen: the object follows along +X
    editor.set_cursor(1060.0, 540.0);
    editor.update().expect("drag should apply");
    let position = editor.scene().objects()[0].position;
    assert!(position.x > 0.0);
    assert!((position.y - 0.5).abs() < 1e-5);
    assert!(position.z.abs() < 1e-5);

    // Cursor at rest: no further motion
    editor.update();
    assert_vec_near(editor.scene().objects()[0].position, position);
}

#[test]
fn test_update_without_drag_is_noop() {
    let mut editor = editor_with_cube();
    editor.press();

    editor.set_cursor(1200.0, 300.0);
    assert!(editor.update().is_none());
    assert_eq!(
        editor.scene().objects()[0].position,
        Vector3::new(0.0, 0.5, 0.0)
    );
}

#[test]
fn test_rotate_mode_grabs_ring() {
    let mut editor = editor_with_cube();
    editor.press();
    editor.set_mode(Mode::Rotate);

    // The screen center looks at the ring center: no ring is near it
    let outcome = editor.press();
    assert_eq!(outcome, PressOutcome::Object(0));

    // A ray straight down -Z landing on the Z ring
    let ray = Ray::new(Vector3::new(0.0, -0.5, 3.0), Vector3::new(0.0, 0.0, -1.0));
    match editor.press_ray(&ray) {
        PressOutcome::Handle { axis, .. } => assert_eq!(axis, Axis::Z),
        other => panic!("expected the Z ring, got {:?}", other),
    }

    // Rotation never displaces the object
    let moved = Ray::new(Vector3::new(0.0, -0.5, 3.0), Vector3::new(0.0, 0.3, -1.0));
    editor.update_with_ray(&moved);
    assert_vec_near(editor.scene().objects()[0].position, Vector3::new(0.0, 0.5, 0.0));
}

#[test]
fn test_scale_drag_respects_minimum() {
    let mut editor = editor_with_cube();
    editor.press();
    editor.set_mode(Mode::Scale);
    editor.press();
    assert_eq!(editor.manipulation.active_axis(), Some(Axis::X));

    // Far to the left: a large negative X delta
    editor.set_cursor(0.0, 540.0);
    editor.update();
    let scale = editor.scene().objects()[0].scale();
    assert_eq!(scale.x, 0.1);
    assert_eq!(scale.y, 1.0);
    assert_eq!(scale.z, 1.0);
}

#[test]
fn test_press_is_idempotent_for_selection() {
    let mut editor = editor_with_cube();
    editor.add_object(ShapeKind::Sphere);

    // Both objects sit at the spawn point; the first in storage order wins
    assert_eq!(editor.press(), PressOutcome::Object(0));
    editor.release();
    let first = editor.scene().selected();

    editor.set_cursor(0.0, 0.0);
    editor.press();
    editor.release();
    assert_eq!(editor.state(), EditorState::Idle);

    editor.set_cursor(960.0, 540.0);
    editor.press();
    assert_eq!(editor.scene().selected(), first);
}

#[test]
fn test_release_without_selection() {
    let mut editor = editor_with_cube();
    editor.release();
    assert_eq!(editor.state(), EditorState::Idle);
    assert!(drag_invariant_holds(&editor));
}

#[test]
fn test_reselecting_mid_drag_never_moves_other_object() {
    let mut editor = editor_with_cube();
    editor.add_object(ShapeKind::Sphere);
    editor
        .set_position(1, Vector3::new(3.0, 0.5, 0.0))
        .unwrap();

    editor.press();
    assert!(matches!(editor.press(), PressOutcome::Handle { axis: Axis::X, .. }));

    // Switching to the sphere from the object list ends the drag
    editor.select(Some(1));
    assert!(!editor.manipulation.is_dragging());

    let x: f32 = 0.075;
    let ray = Ray::new(
        Vector3::new(0.0, 0.5, 3.0),
        Vector3::new(x, 0.0, -(1.0 - x * x).sqrt()),
    );
    assert!(editor.update_with_ray(&ray).is_none());
    assert_vec_near(editor.scene().objects()[0].position, Vector3::new(0.0, 0.5, 0.0));
    assert_vec_near(editor.scene().objects()[1].position, Vector3::new(3.0, 0.5, 0.0));
    assert_eq!(editor.state(), EditorState::Selected(1));
}
