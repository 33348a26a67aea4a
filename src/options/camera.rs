use serde::{Deserialize, Serialize};

/// Camera projection and control parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Initial orbit distance from the focus point.
    pub initial_distance: f32,
    /// Orbit speed in radians per pixel of drag.
    pub rotate_speed: f32,
    /// Pan speed in world units per pixel of drag.
    pub pan_speed: f32,
    /// Zoom speed as a distance factor per scroll step.
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            // Matches an eye at (5, 5, 5) looking at the origin
            initial_distance: 8.66,
            rotate_speed: 0.01,
            pan_speed: 0.02,
            zoom_speed: 0.05,
        }
    }
}
