//! # Ray Picking Utilities
//!
//! This module provides the geometric primitives behind mouse picking: turning
//! a cursor position into a world-space ray, and testing that ray against
//! bounding spheres, axis handle segments and rotate rings.
//!
//! ## How it works
//!
//! 1. **Mouse to Ray**: Convert cursor coordinates to a ray from the camera eye
//! 2. **Ray-Shape Tests**: Test the ray against spheres, segments or rings
//! 3. **Misses are values**: every test answers `false` (or a distance) and
//!    degenerate inputs are plain misses, never NaN
//!
//! ## Usage
//!
//! ```no_run
//! use cgmath::{Deg, Matrix4, Point3, Vector3};
//! use gizmo_editor::gfx::picking::{ray_sphere_intersects, screen_to_world_ray};
//!
//! let view = Matrix4::look_at_rh(
//!     Point3::new(0.0, 0.0, 3.0),
//!     Point3::new(0.0, 0.0, 0.0),
//!     Vector3::unit_y(),
//! );
//! let projection = cgmath::perspective(Deg(45.0), 16.0 / 9.0, 0.1, 100.0);
//! let ray = screen_to_world_ray(960.0, 540.0, &view, &projection, 1920.0, 1080.0);
//! let hit = ray_sphere_intersects(ray.origin, ray.direction, Vector3::new(0.0, 0.0, 0.0), 0.5);
//! ```

use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4};

/// Below this `|dot(direction, normal)|` a ray counts as parallel to a plane
const PARALLEL_EPSILON: f32 = 1e-6;

/// Below this length a vector counts as zero
const LENGTH_EPSILON: f32 = 1e-6;

/// Default tolerance around a ring's radius
pub const DEFAULT_RING_THRESHOLD: f32 = 0.1;

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray, normalizing the direction
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }

    /// The point one unit along the ray.
    ///
    /// Drag anchors are sampled here rather than on a plane, so manipulation
    /// speed scales with the distance between camera and object.
    pub fn unit_sample(&self) -> Vector3<f32> {
        self.point_at(1.0)
    }
}

/// Convert screen coordinates to a world-space ray starting at the camera eye.
///
/// The screen origin is the top-left corner, so Y is flipped on the way to
/// normalized device coordinates. The eye position is recovered from the
/// inverse view matrix. Matrices from a valid perspective + look-at camera are
/// always invertible; anything else falls back to identity instead of
/// panicking.
pub fn screen_to_world_ray(
    screen_x: f32,
    screen_y: f32,
    view: &Matrix4<f32>,
    projection: &Matrix4<f32>,
    viewport_width: f32,
    viewport_height: f32,
) -> Ray {
    // Convert screen coordinates to normalized device coordinates (-1 to 1)
    let ndc_x = (2.0 * screen_x) / viewport_width - 1.0;
    let ndc_y = 1.0 - (2.0 * screen_y) / viewport_height;
    let clip = Vector4::new(ndc_x, ndc_y, -1.0, 1.0);

    let inv_projection = projection.invert().unwrap_or(Matrix4::identity());
    let eye = inv_projection * clip;
    // Point the eye-space vector down -Z and drop the w component
    let eye = Vector4::new(eye.x, eye.y, -1.0, 0.0);

    let inv_view = view.invert().unwrap_or(Matrix4::identity());
    let world = inv_view * eye;

    Ray::new(inv_view.w.truncate(), world.truncate())
}

/// Test a ray against a sphere.
///
/// Only a strictly positive discriminant is a hit: a ray that exactly grazes
/// the sphere is a miss.
pub fn ray_sphere_intersects(
    origin: Vector3<f32>,
    direction: Vector3<f32>,
    center: Vector3<f32>,
    radius: f32,
) -> bool {
    let oc = origin - center;
    let a = direction.dot(direction);
    let b = 2.0 * oc.dot(direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    discriminant > 0.0
}

/// Shortest distance between a ray and a line segment.
///
/// The ray origin is projected onto the segment (clamped to its ends) and the
/// perpendicular distance from the ray line to that point is returned. A
/// zero-length segment degenerates to its start point; a zero direction never
/// grabs anything and yields infinity.
pub fn distance_ray_to_segment(
    origin: Vector3<f32>,
    direction: Vector3<f32>,
    segment_start: Vector3<f32>,
    segment_end: Vector3<f32>,
) -> f32 {
    let direction_length = direction.magnitude();
    if direction_length < LENGTH_EPSILON {
        return f32::INFINITY;
    }

    let segment = segment_end - segment_start;
    let segment_length = segment.magnitude();

    let closest = if segment_length < LENGTH_EPSILON {
        segment_start
    } else {
        let segment_dir = segment / segment_length;
        let t = ((origin - segment_start).dot(segment_dir) / segment_length).clamp(0.0, 1.0);
        segment_start + segment * t
    };

    direction.cross(closest - origin).magnitude() / direction_length
}

/// Test whether a ray passes close to a ring.
///
/// The ray is intersected with the ring's plane; the hit is accepted when the
/// intersection lies within `threshold` of the ring radius. Rays parallel to
/// the plane, a zero normal and intersections behind the origin are misses.
pub fn ray_near_circle(
    origin: Vector3<f32>,
    direction: Vector3<f32>,
    center: Vector3<f32>,
    normal: Vector3<f32>,
    radius: f32,
    threshold: f32,
) -> bool {
    let denominator = direction.dot(normal);
    if denominator.abs() < PARALLEL_EPSILON {
        return false;
    }

    let t = (center - origin).dot(normal) / denominator;
    // Written this way so a NaN t is also rejected
    if !(t >= 0.0) {
        return false;
    }

    let intersection = origin + direction * t;
    ((intersection - center).magnitude() - radius).abs() < threshold
}
