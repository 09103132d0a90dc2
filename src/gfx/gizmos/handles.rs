//! # Gizmo Handles
//!
//! Clickable proxies for each axis of the gizmo. Translate and scale use a
//! segment running from the object center along the axis; rotate uses a ring
//! around the axis. The same geometry drives hit testing and drawing.

use cgmath::Vector3;

use crate::config::EditorConfig;
use crate::gfx::picking::{distance_ray_to_segment, ray_near_circle, Ray};

use super::manipulation::{Axis, Mode};

/// Geometry of a single handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleShape {
    Segment {
        start: Vector3<f32>,
        end: Vector3<f32>,
    },
    Ring {
        center: Vector3<f32>,
        normal: Vector3<f32>,
        radius: f32,
    },
}

impl HandleShape {
    /// Whether `ray` grabs this handle
    pub fn is_hit(&self, ray: &Ray, config: &EditorConfig) -> bool {
        match *self {
            HandleShape::Segment { start, end } => {
                distance_ray_to_segment(ray.origin, ray.direction, start, end)
                    < config.click_radius
            }
            HandleShape::Ring {
                center,
                normal,
                radius,
            } => ray_near_circle(
                ray.origin,
                ray.direction,
                center,
                normal,
                radius,
                config.ring_threshold,
            ),
        }
    }
}

/// One axis handle of the gizmo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub axis: Axis,
    pub shape: HandleShape,
}

/// Handles for `mode` around `center`, in X, Y, Z order
pub fn handles_for(mode: Mode, center: Vector3<f32>, config: &EditorConfig) -> [Handle; 3] {
    Axis::ALL.map(|axis| Handle {
        axis,
        shape: match mode {
            Mode::Translate | Mode::Scale => HandleShape::Segment {
                start: center,
                end: center + axis.direction() * config.handle_length,
            },
            Mode::Rotate => HandleShape::Ring {
                center,
                normal: axis.direction(),
                radius: config.ring_radius,
            },
        },
    })
}
