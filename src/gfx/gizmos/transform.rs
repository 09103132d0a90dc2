//! # Transform Applier
//!
//! Turns the live cursor ray into an incremental transform of the selected
//! object while a handle is dragged. Deltas are measured from the previous
//! frame's ray sample and the anchor advances every frame, so manipulation
//! is velocity based.

use cgmath::{Deg, InnerSpace, Quaternion, Rotation, Rotation3, Vector3};

use crate::config::EditorConfig;
use crate::gfx::picking::Ray;
use crate::gfx::scene::Scene;

use super::manipulation::{Axis, DragState, ManipulationState, Mode};

/// What a drag step did to the object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppliedTransform {
    Translated { position: Vector3<f32> },
    /// `position` is the object center after rotating it about itself
    Rotated { angle: Deg<f32>, position: Vector3<f32> },
    Scaled { scale: Vector3<f32> },
}

/// One frame of manipulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformStep {
    pub index: usize,
    pub axis: Axis,
    pub movement: Vector3<f32>,
    pub applied: AppliedTransform,
}

/// Projection of the ray-sample delta onto `axis`, scaled by `sensitivity`
pub fn axis_movement(
    current: Vector3<f32>,
    anchor: Vector3<f32>,
    axis: Axis,
    sensitivity: f32,
) -> Vector3<f32> {
    let direction = axis.direction();
    direction * ((current - anchor).dot(direction) * sensitivity)
}

/// Apply one frame of dragging.
///
/// Returns `None` when no drag is active. A drag whose selection has gone
/// away is dropped back to idle.
pub fn apply_drag(
    ray: &Ray,
    scene: &mut Scene,
    manipulation: &mut ManipulationState,
    config: &EditorConfig,
) -> Option<TransformStep> {
    let DragState::Dragging { axis, anchor } = manipulation.drag else {
        return None;
    };

    let Some(index) = scene.selected() else {
        manipulation.reset();
        return None;
    };

    let min_scale = scene.min_scale();
    let object = scene.selected_object_mut()?;

    let current = ray.unit_sample();
    let movement = axis_movement(current, anchor, axis, config.sensitivity);

    let applied = match manipulation.mode {
        Mode::Translate => {
            object.position += movement;
            AppliedTransform::Translated {
                position: object.position,
            }
        }
        Mode::Rotate => {
            let angle = Deg(movement.magnitude() * config.rotate_gain * config.sensitivity);
            let rotation = Quaternion::from_axis_angle(axis.direction(), angle);
            // Pivot is the object's own center, so the offset is always zero
            let center = object.position;
            object.position = rotation.rotate_vector(object.position - center) + center;
            AppliedTransform::Rotated {
                angle,
                position: object.position,
            }
        }
        Mode::Scale => {
            let scale = object.scale() + movement;
            object.set_scale(scale, min_scale);
            AppliedTransform::Scaled {
                scale: object.scale(),
            }
        }
    };

    manipulation.advance_anchor(current);

    Some(TransformStep {
        index,
        axis,
        movement,
        applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::ShapeKind;
    use rand::Rng;

    fn assert_vec_near(actual: Vector3<f32>, expected: Vector3<f32>) {
        assert!(
            (actual - expected).magnitude() < 1e-4,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    /// Scene with one selected cube at (0, 0.5, 0) and a drag on `axis`
    /// anchored at the unit sample of a ray straight down -Z from z = 3
    fn dragging(mode: Mode, axis: Axis) -> (Scene, ManipulationState) {
        let mut scene = Scene::default();
        let index = scene.add(ShapeKind::Cube);
        scene.select(Some(index));

        let mut manipulation = ManipulationState::new();
        manipulation.set_mode(mode);
        manipulation.begin_drag(axis, Vector3::new(0.0, 0.5, 2.0));
        (scene, manipulation)
    }

    fn ray_with_x(x: f32) -> Ray {
        Ray::new(
            Vector3::new(0.0, 0.5, 3.0),
            Vector3::new(x, 0.0, -(1.0 - x * x).sqrt()),
        )
    }

    #[test]
    fn test_axis_movement_projects_onto_axis() {
        let movement = axis_movement(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.5, 0.0, 0.0),
            Axis::X,
            4.0,
        );
        assert_vec_near(movement, Vector3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_translate_moves_along_axis() {
        let (mut scene, mut manipulation) = dragging(Mode::Translate, Axis::X);
        let config = EditorConfig::default();

        let step = apply_drag(&ray_with_x(0.075), &mut scene, &mut manipulation, &config)
            .expect("drag should apply");

        assert_vec_near(step.movement, Vector3::new(0.3, 0.0, 0.0));
        assert_vec_near(scene.objects()[0].position, Vector3::new(0.3, 0.5, 0.0));
    }

    #[test]
    fn test_off_axis_motion_is_ignored() {
        let (mut scene, mut manipulation) = dragging(Mode::Translate, Axis::Y);
        let config = EditorConfig::default();

        apply_drag(&ray_with_x(0.2), &mut scene, &mut manipulation, &config);
        assert_vec_near(scene.objects()[0].position, Vector3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_anchor_advances_every_frame() {
        let (mut scene, mut manipulation) = dragging(Mode::Translate, Axis::X);
        let config = EditorConfig::default();
        let ray = ray_with_x(0.075);

        apply_drag(&ray, &mut scene, &mut manipulation, &config);
        assert_eq!(manipulation.drag.anchor(), Some(ray.unit_sample()));

        // Same cursor position next frame: no further movement
        let step = apply_drag(&ray, &mut scene, &mut manipulation, &config).unwrap();
        assert_vec_near(step.movement, Vector3::new(0.0, 0.0, 0.0));
        assert_vec_near(scene.objects()[0].position, Vector3::new(0.3, 0.5, 0.0));
    }

    #[test]
    fn test_rotate_keeps_position() {
        let (mut scene, mut manipulation) = dragging(Mode::Rotate, Axis::X);
        let config = EditorConfig::default();

        let step = apply_drag(&ray_with_x(0.075), &mut scene, &mut manipulation, &config)
            .unwrap();

        match step.applied {
            AppliedTransform::Rotated { angle, position } => {
                // |movement| = 0.3, times gain 5 and sensitivity 4
                assert!((angle.0 - 6.0).abs() < 1e-3);
                assert_vec_near(position, Vector3::new(0.0, 0.5, 0.0));
            }
            other => panic!("expected a rotation, got {:?}", other),
        }
    }

    #[test]
    fn test_scale_grows_and_clamps() {
        let (mut scene, mut manipulation) = dragging(Mode::Scale, Axis::X);
        let config = EditorConfig::default();

        apply_drag(&ray_with_x(0.075), &mut scene, &mut manipulation, &config);
        assert_vec_near(scene.objects()[0].scale(), Vector3::new(1.3, 1.0, 1.0));

        // Drag far back along -X: clamps at the minimum
        apply_drag(&ray_with_x(-0.9), &mut scene, &mut manipulation, &config);
        assert_vec_near(scene.objects()[0].scale(), Vector3::new(0.1, 1.0, 1.0));
    }

    #[test]
    fn test_scale_never_drops_below_minimum() {
        let config = EditorConfig::default();
        let mut rng = rand::rng();

        for axis in Axis::ALL {
            let (mut scene, mut manipulation) = dragging(Mode::Scale, axis);
            for _ in 0..200 {
                let direction = Vector3::new(
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..-0.1),
                );
                let ray = Ray::new(Vector3::new(0.0, 0.5, 3.0), direction);
                apply_drag(&ray, &mut scene, &mut manipulation, &config);

                let scale = scene.objects()[0].scale();
                assert!(scale.x >= config.min_scale);
                assert!(scale.y >= config.min_scale);
                assert!(scale.z >= config.min_scale);
            }
        }
    }

    #[test]
    fn test_idle_does_nothing() {
        let mut scene = Scene::default();
        scene.add(ShapeKind::Cube);
        scene.select(Some(0));
        let mut manipulation = ManipulationState::new();

        let step = apply_drag(
            &ray_with_x(0.5),
            &mut scene,
            &mut manipulation,
            &EditorConfig::default(),
        );
        assert!(step.is_none());
        assert_eq!(scene.objects()[0].position, Vector3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_missing_selection_drops_drag() {
        let (mut scene, mut manipulation) = dragging(Mode::Translate, Axis::X);
        scene.clear_selection();

        let step = apply_drag(
            &ray_with_x(0.075),
            &mut scene,
            &mut manipulation,
            &EditorConfig::default(),
        );
        assert!(step.is_none());
        assert!(!manipulation.is_dragging());
        assert_eq!(manipulation.active_axis(), None);
    }
}
