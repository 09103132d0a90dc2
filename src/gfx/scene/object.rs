use cgmath::{InnerSpace, Matrix4, Vector3};

/// Where "Add Cube" / "Add Sphere" place new objects
pub const DEFAULT_SPAWN_POSITION: Vector3<f32> = Vector3::new(0.0, 0.5, 0.0);

/// Opaque white
pub const DEFAULT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Primitive shape of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Sphere,
}

impl ShapeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Sphere => "Sphere",
        }
    }
}

/// Opaque reference to a texture owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// A primitive placed in the scene.
///
/// `scale` is private: every write goes through [`SceneObject::set_scale`],
/// which clamps each component to the configured minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub position: Vector3<f32>,
    scale: Vector3<f32>,
    /// RGBA, only used while no texture is bound
    pub color: [f32; 4],
    pub shape: ShapeKind,
    pub texture: Option<TextureHandle>,
}

impl SceneObject {
    /// Create an object with unit scale, opaque white and no texture
    pub fn new(shape: ShapeKind, position: Vector3<f32>) -> Self {
        Self {
            position,
            scale: Vector3::new(1.0, 1.0, 1.0),
            color: DEFAULT_COLOR,
            shape,
            texture: None,
        }
    }

    pub fn cube(position: Vector3<f32>) -> Self {
        Self::new(ShapeKind::Cube, position)
    }

    pub fn sphere(position: Vector3<f32>) -> Self {
        Self::new(ShapeKind::Sphere, position)
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Builder variant of [`SceneObject::set_scale`]
    pub fn with_scale(mut self, scale: Vector3<f32>, min_scale: f32) -> Self {
        self.set_scale(scale, min_scale);
        self
    }

    pub fn scale(&self) -> Vector3<f32> {
        self.scale
    }

    /// Set the scale, clamping every component to at least `min_scale`
    pub fn set_scale(&mut self, scale: Vector3<f32>, min_scale: f32) {
        self.scale = Vector3::new(
            scale.x.max(min_scale),
            scale.y.max(min_scale),
            scale.z.max(min_scale),
        );
    }

    /// Radius of the bounding sphere used for picking.
    ///
    /// Cubes and spheres share the same approximation.
    pub fn bounding_radius(&self) -> f32 {
        0.5 * self.scale.magnitude()
    }

    /// Translation * scale, ready for a model uniform
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_object_defaults() {
        let object = SceneObject::cube(DEFAULT_SPAWN_POSITION);
        assert_eq!(object.scale(), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(object.color, DEFAULT_COLOR);
        assert_eq!(object.shape, ShapeKind::Cube);
        assert!(object.texture.is_none());
    }

    #[test]
    fn test_set_scale_clamps_each_component() {
        let mut object = SceneObject::sphere(DEFAULT_SPAWN_POSITION);
        object.set_scale(Vector3::new(-2.0, 0.05, 3.0), 0.1);
        assert_eq!(object.scale(), Vector3::new(0.1, 0.1, 3.0));
    }

    #[test]
    fn test_bounding_radius() {
        let object = SceneObject::cube(DEFAULT_SPAWN_POSITION)
            .with_scale(Vector3::new(2.0, 0.0, 0.0), 0.0);
        assert!((object.bounding_radius() - 1.0).abs() < 1e-6);
    }
}
