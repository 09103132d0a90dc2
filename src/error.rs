//! Error types for the editor core.
//!
//! Geometry misses are never errors; they are plain `false` results. The
//! variants here cover configuration mistakes and direct edits that address
//! an object that does not exist.

use thiserror::Error;

/// Errors surfaced by the editor API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// A configuration value that must be strictly positive was not
    #[error("config value `{name}` must be positive, got {value}")]
    NonPositiveConfig { name: &'static str, value: f32 },

    /// The viewport has a zero dimension
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    /// A direct edit addressed an object index outside the scene
    #[error("object index {index} out of range (scene has {len} objects)")]
    ObjectOutOfRange { index: usize, len: usize },
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EditorError::ObjectOutOfRange { index: 3, len: 1 };
        assert_eq!(
            err.to_string(),
            "object index 3 out of range (scene has 1 objects)"
        );

        let err = EditorError::NonPositiveConfig {
            name: "min_scale",
            value: 0.0,
        };
        assert!(err.to_string().contains("min_scale"));
    }
}
