//! # Gizmo Line Geometry
//!
//! Builds the colored line lists the editor draws: the selected object's
//! gizmo, the ground grid, object wireframes and the selection outline.
//! Nothing here touches the GPU; [`GizmoVertex::desc`] only describes the
//! layout so a wgpu pipeline can consume the vertices as-is.

use cgmath::{ElementWise, InnerSpace, Vector3};
use std::f32::consts::PI;

use crate::config::EditorConfig;
use crate::gfx::scene::{Scene, SceneObject, ShapeKind};

use super::handles::{handles_for, HandleShape};
use super::manipulation::{Axis, ManipulationState, Mode};

/// Segments used to approximate each rotate ring
pub const RING_SEGMENTS: usize = 64;

/// Edge length of the cubes drawn at the tips of scale handles
pub const SCALE_TIP_SIZE: f32 = 0.1;

/// Segments per ring of a sphere wireframe
pub const SPHERE_RING_SEGMENTS: usize = 32;

pub const GRID_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Selection outline, drawn slightly larger than the object
pub const OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
pub const OUTLINE_INFLATE: f32 = 1.05;

/// Upper bound on grid lines per direction
const MAX_GRID_LINES: usize = 4096;

/// A colored line vertex.
///
/// `#[repr(C)]` keeps the layout stable for GPU upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GizmoVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl GizmoVertex {
    fn new(position: Vector3<f32>, color: [f32; 4]) -> Self {
        Self {
            position: position.into(),
            color,
        }
    }

    /// Vertex buffer layout: position at location 0, color at location 1
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<GizmoVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Axis color, lightened while that axis is being dragged
pub fn axis_color(axis: Axis, highlighted: bool) -> [f32; 4] {
    match (axis, highlighted) {
        (Axis::X, false) => [1.0, 0.0, 0.0, 1.0],
        (Axis::X, true) => [1.0, 0.5, 0.5, 1.0],
        (Axis::Y, false) => [0.0, 1.0, 0.0, 1.0],
        (Axis::Y, true) => [0.5, 1.0, 0.5, 1.0],
        (Axis::Z, false) => [0.0, 0.0, 1.0, 1.0],
        (Axis::Z, true) => [0.5, 0.5, 1.0, 1.0],
    }
}

/// Line list (pairs of vertices) for the gizmo around `center`
pub fn build_gizmo_lines(
    center: Vector3<f32>,
    manipulation: &ManipulationState,
    config: &EditorConfig,
) -> Vec<GizmoVertex> {
    let mut vertices = Vec::new();

    for handle in handles_for(manipulation.mode, center, config) {
        let color = axis_color(handle.axis, manipulation.is_highlighted(handle.axis));

        match handle.shape {
            HandleShape::Segment { start, end } => {
                vertices.push(GizmoVertex::new(start, color));
                vertices.push(GizmoVertex::new(end, color));

                if manipulation.mode == Mode::Scale {
                    let half = SCALE_TIP_SIZE * 0.5;
                    push_box(&mut vertices, end, Vector3::new(half, half, half), color);
                }
            }
            HandleShape::Ring {
                center,
                normal,
                radius,
            } => push_ellipse(
                &mut vertices,
                center,
                normal,
                Vector3::new(radius, radius, radius),
                RING_SEGMENTS,
                color,
            ),
        }
    }

    vertices
}

/// Ground grid on the XZ plane spanning `-size..=size`.
///
/// Each step emits one line parallel to Z and one parallel to X. A
/// non-positive step gives an empty grid.
pub fn build_grid_lines(size: f32, step: f32) -> Vec<GizmoVertex> {
    if !(step > 0.0) || !(size >= 0.0) {
        return Vec::new();
    }

    // Small slack so `size` itself is reached despite rounding
    let count = ((2.0 * size / step) + 1e-4).floor() as usize;
    let count = count.min(MAX_GRID_LINES);

    let mut vertices = Vec::with_capacity((count + 1) * 4);
    for k in 0..=count {
        let i = -size + k as f32 * step;
        vertices.push(GizmoVertex::new(Vector3::new(i, 0.0, -size), GRID_COLOR));
        vertices.push(GizmoVertex::new(Vector3::new(i, 0.0, size), GRID_COLOR));
        vertices.push(GizmoVertex::new(Vector3::new(-size, 0.0, i), GRID_COLOR));
        vertices.push(GizmoVertex::new(Vector3::new(size, 0.0, i), GRID_COLOR));
    }
    vertices
}

/// Wireframe of one object, scaled by `inflate` around its center
pub fn push_object_lines(
    vertices: &mut Vec<GizmoVertex>,
    object: &SceneObject,
    inflate: f32,
    color: [f32; 4],
) {
    let half = object.scale() * (0.5 * inflate);
    match object.shape {
        ShapeKind::Cube => push_box(vertices, object.position, half, color),
        ShapeKind::Sphere => {
            for normal in [Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z()] {
                push_ellipse(
                    vertices,
                    object.position,
                    normal,
                    half,
                    SPHERE_RING_SEGMENTS,
                    color,
                );
            }
        }
    }
}

/// Yellow outline around the selected object
pub fn build_selection_outline(object: &SceneObject) -> Vec<GizmoVertex> {
    let mut vertices = Vec::new();
    push_object_lines(&mut vertices, object, OUTLINE_INFLATE, OUTLINE_COLOR);
    vertices
}

/// Grid plus every object's wireframe in its own color
pub fn build_scene_lines(scene: &Scene, config: &EditorConfig) -> Vec<GizmoVertex> {
    let mut vertices = build_grid_lines(config.grid_size, config.grid_step);
    for object in scene.objects() {
        let [r, g, b, _] = object.color;
        push_object_lines(&mut vertices, object, 1.0, [r, g, b, 1.0]);
    }
    vertices
}

/// Two unit vectors spanning the plane orthogonal to `normal`
fn plane_basis(normal: Vector3<f32>) -> (Vector3<f32>, Vector3<f32>) {
    let normal = normal.normalize();
    let helper = if normal.z.abs() < 0.999 {
        Vector3::unit_z()
    } else {
        Vector3::unit_x()
    };
    let u = helper.cross(normal).normalize();
    let v = normal.cross(u);
    (u, v)
}

/// Closed curve in the plane orthogonal to `normal`, stretched per world
/// axis by `extents`
fn push_ellipse(
    vertices: &mut Vec<GizmoVertex>,
    center: Vector3<f32>,
    normal: Vector3<f32>,
    extents: Vector3<f32>,
    segments: usize,
    color: [f32; 4],
) {
    let (u, v) = plane_basis(normal);
    let point = |i: usize| {
        let theta = 2.0 * PI * i as f32 / segments as f32;
        center + (u * theta.cos() + v * theta.sin()).mul_element_wise(extents)
    };

    for i in 0..segments {
        vertices.push(GizmoVertex::new(point(i), color));
        vertices.push(GizmoVertex::new(point(i + 1), color));
    }
}

fn push_box(
    vertices: &mut Vec<GizmoVertex>,
    center: Vector3<f32>,
    half: Vector3<f32>,
    color: [f32; 4],
) {
    let corner = |i: usize| {
        center
            + Vector3::new(
                if i & 1 == 0 { -half.x } else { half.x },
                if i & 2 == 0 { -half.y } else { half.y },
                if i & 4 == 0 { -half.z } else { half.z },
            )
    };

    // Corners differing in exactly one bit share an edge
    for a in 0..8 {
        for bit in [1, 2, 4] {
            if a & bit == 0 {
                vertices.push(GizmoVertex::new(corner(a), color));
                vertices.push(GizmoVertex::new(corner(a | bit), color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<GizmoVertex>(), 28);
        assert_eq!(GizmoVertex::desc().array_stride, 28);
    }

    #[test]
    fn test_translate_gizmo_is_three_lines() {
        let manipulation = ManipulationState::new();
        let lines = build_gizmo_lines(
            Vector3::new(0.0, 0.5, 0.0),
            &manipulation,
            &EditorConfig::default(),
        );

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1].position, [1.0, 0.5, 0.0]);
        assert_eq!(lines[0].color, axis_color(Axis::X, false));
    }

    #[test]
    fn test_scale_gizmo_adds_tip_cubes() {
        let mut manipulation = ManipulationState::new();
        manipulation.set_mode(Mode::Scale);
        let lines = build_gizmo_lines(
            Vector3::new(0.0, 0.0, 0.0),
            &manipulation,
            &EditorConfig::default(),
        );

        // Per axis: one segment plus twelve cube edges
        assert_eq!(lines.len(), 3 * (2 + 24));
    }

    #[test]
    fn test_rings_lie_on_radius() {
        let mut manipulation = ManipulationState::new();
        manipulation.set_mode(Mode::Rotate);
        let center = Vector3::new(1.0, 2.0, 3.0);
        let lines = build_gizmo_lines(center, &manipulation, &EditorConfig::default());

        assert_eq!(lines.len(), 3 * RING_SEGMENTS * 2);
        for vertex in &lines {
            let offset = Vector3::from(vertex.position) - center;
            assert!((offset.magnitude() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_dragged_axis_is_highlighted() {
        let mut manipulation = ManipulationState::new();
        manipulation.begin_drag(Axis::Y, Vector3::new(0.0, 0.0, 0.0));
        let lines = build_gizmo_lines(
            Vector3::new(0.0, 0.0, 0.0),
            &manipulation,
            &EditorConfig::default(),
        );

        assert_eq!(lines[0].color, axis_color(Axis::X, false));
        assert_eq!(lines[2].color, axis_color(Axis::Y, true));
        assert_eq!(lines[4].color, axis_color(Axis::Z, false));
    }

    #[test]
    fn test_grid_matches_size_and_step() {
        let grid = build_grid_lines(10.0, 1.0);

        // 21 positions from -10 to 10, two lines each
        assert_eq!(grid.len(), 21 * 4);
        assert!(grid.iter().all(|v| v.position[1] == 0.0));
        assert_eq!(grid[0].position, [-10.0, 0.0, -10.0]);
        assert_eq!(grid[grid.len() - 1].position, [10.0, 0.0, 10.0]);
    }

    #[test]
    fn test_grid_rejects_bad_step() {
        assert!(build_grid_lines(10.0, 0.0).is_empty());
        assert!(build_grid_lines(10.0, -1.0).is_empty());
        assert!(build_grid_lines(10.0, f32::NAN).is_empty());
    }

    #[test]
    fn test_selection_outline_is_inflated() {
        let cube = SceneObject::cube(Vector3::new(0.0, 0.5, 0.0));
        let outline = build_selection_outline(&cube);

        assert_eq!(outline.len(), 24);
        assert!(outline.iter().all(|v| v.color == OUTLINE_COLOR));
        for vertex in &outline {
            assert!((vertex.position[0].abs() - 0.525).abs() < 1e-5);
            assert!(((vertex.position[1] - 0.5).abs() - 0.525).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_wireframe_follows_scale() {
        let sphere = SceneObject::sphere(Vector3::new(0.0, 0.0, 0.0))
            .with_scale(Vector3::new(2.0, 2.0, 2.0), 0.1);
        let mut lines = Vec::new();
        push_object_lines(&mut lines, &sphere, 1.0, [1.0; 4]);

        assert_eq!(lines.len(), 3 * SPHERE_RING_SEGMENTS * 2);
        for vertex in &lines {
            assert!((Vector3::from(vertex.position).magnitude() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_scene_lines_cover_grid_and_objects() {
        let mut scene = Scene::default();
        scene.add(ShapeKind::Cube);
        scene.add(ShapeKind::Cube);
        let config = EditorConfig::default().with_grid(1.0, 1.0);

        let lines = build_scene_lines(&scene, &config);
        assert_eq!(lines.len(), 3 * 4 + 2 * 24);
    }
}
