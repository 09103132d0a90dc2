use cgmath::{Matrix4, Vector3};

/// Near clipping plane shared by every editor projection
pub const Z_NEAR: f32 = 0.1;

/// Far clipping plane shared by every editor projection
pub const Z_FAR: f32 = 100.0;

/// Remaps OpenGL clip depth (-1..1) to the 0..1 range wgpu expects
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// What picking needs from a camera.
///
/// Implementations must produce an invertible view (look-at) and projection
/// (perspective) so rays can be unprojected.
pub trait Camera {
    /// Eye position in world space
    fn eye(&self) -> Vector3<f32>;

    fn view_matrix(&self) -> Matrix4<f32>;

    /// Projection for a viewport of the given width / height ratio
    fn projection_matrix(&self, aspect: f32) -> Matrix4<f32>;

    fn view_projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// View-projection in wgpu clip space, for uploading to shaders.
    ///
    /// Picking keeps using [`Camera::view_projection_matrix`].
    fn gpu_view_projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * self.view_projection_matrix(aspect)
    }
}
