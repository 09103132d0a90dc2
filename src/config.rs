//! # Editor Configuration
//!
//! Tunables for hit testing and manipulation. The defaults reproduce the
//! feel of the reference editor: a 0.2 unit click radius around axis
//! handles, unit-length handles and rings, and a drag sensitivity of 4.

use crate::error::{EditorError, Result};

/// Configuration for the gizmo editor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Lower bound applied to every scale component after any edit
    pub min_scale: f32,
    /// Max ray-to-segment distance that counts as grabbing an axis handle
    pub click_radius: f32,
    /// Length of the translate/scale axis handles
    pub handle_length: f32,
    /// Radius of the rotate rings
    pub ring_radius: f32,
    /// Tolerance around the ring radius for rotate hits
    pub ring_threshold: f32,
    /// Multiplier applied to the projected ray delta every frame
    pub sensitivity: f32,
    /// Degrees of rotation per unit of movement (before sensitivity)
    pub rotate_gain: f32,
    /// Initial viewport width in pixels
    pub viewport_width: u32,
    /// Initial viewport height in pixels
    pub viewport_height: u32,
    /// Number of console lines kept in memory
    pub console_capacity: usize,
    /// Half extent of the ground grid on the XZ plane
    pub grid_size: f32,
    /// Spacing between grid lines
    pub grid_step: f32,
    /// Also write every per-frame transform step to the console
    pub echo_transforms: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            click_radius: 0.2,
            handle_length: 1.0,
            ring_radius: 1.0,
            ring_threshold: 0.1,
            sensitivity: 4.0,
            rotate_gain: 5.0,
            viewport_width: 1920,
            viewport_height: 1080,
            console_capacity: 512,
            grid_size: 10.0,
            grid_step: 1.0,
            echo_transforms: true,
        }
    }
}

impl EditorConfig {
    pub fn with_min_scale(mut self, min_scale: f32) -> Self {
        self.min_scale = min_scale;
        self
    }

    pub fn with_click_radius(mut self, click_radius: f32) -> Self {
        self.click_radius = click_radius;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_ring(mut self, radius: f32, threshold: f32) -> Self {
        self.ring_radius = radius;
        self.ring_threshold = threshold;
        self
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_console_capacity(mut self, capacity: usize) -> Self {
        self.console_capacity = capacity;
        self
    }

    pub fn with_grid(mut self, size: f32, step: f32) -> Self {
        self.grid_size = size;
        self.grid_step = step;
        self
    }

    pub fn with_echo_transforms(mut self, echo: bool) -> Self {
        self.echo_transforms = echo;
        self
    }

    /// Check that every tunable is usable.
    ///
    /// NaN fails the positivity checks as well.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("min_scale", self.min_scale),
            ("click_radius", self.click_radius),
            ("handle_length", self.handle_length),
            ("ring_radius", self.ring_radius),
            ("ring_threshold", self.ring_threshold),
            ("sensitivity", self.sensitivity),
            ("rotate_gain", self.rotate_gain),
            ("grid_size", self.grid_size),
            ("grid_step", self.grid_step),
        ];

        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(EditorError::NonPositiveConfig { name, value });
            }
        }

        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(EditorError::EmptyViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        Ok(())
    }
}
