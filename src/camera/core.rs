use glam::{Mat4, Vec3};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh uses [0,1] depth range
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Camera forward direction (from eye toward target), normalized.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }
}
