use glam::{Quat, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Orbital camera controller: a quaternion orientation plus a focus point
/// and distance, from which the camera eye is derived.
pub struct CameraController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    /// The camera driven by this controller.
    pub camera: Camera,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl CameraController {
    /// Create a controller from camera options and an initial viewport
    /// size in physical pixels.
    #[must_use]
    pub fn new(options: &CameraOptions, width: u32, height: u32) -> Self {
        let focus_point = Vec3::ZERO;
        let distance = options.initial_distance;
        // Start on the (1,1,1) diagonal like the reference view
        let orientation = Quat::from_rotation_arc(
            Vec3::Z,
            Vec3::ONE.normalize(),
        );

        let camera = Camera {
            eye: focus_point + orientation * Vec3::Z * distance,
            target: focus_point,
            up: orientation * Vec3::Y,
            aspect: width as f32 / height.max(1) as f32,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        Self {
            orientation,
            distance,
            focus_point,
            camera,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
        }
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;
        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height.max(1) as f32;
    }

    /// Orbit the camera by a screen-space drag delta.
    pub fn rotate(&mut self, delta: Vec2) {
        // Horizontal rotation around the camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal =
            Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal * self.orientation;

        // Vertical rotation around the camera's right vector
        let right = self.orientation * Vec3::X;
        let vertical =
            Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = vertical * self.orientation;

        self.update_camera_pos();
    }

    /// Pan the focus point by a screen-space drag delta.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;

        let translation = right * (-delta.x * self.pan_speed)
            + up * (delta.y * self.pan_speed);

        self.focus_point += translation;
        self.update_camera_pos();
    }

    /// Zoom by scaling the orbit distance (positive delta zooms in).
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(0.5, 500.0);
        self.update_camera_pos();
    }

    /// Re-center the focus point on the world origin.
    pub fn recenter(&mut self) {
        self.focus_point = Vec3::ZERO;
        self.update_camera_pos();
    }

    /// Adjust the camera to fit the given positions, centering on their
    /// centroid and setting distance so all points are visible.
    pub fn fit_to_positions(&mut self, positions: &[Vec3]) {
        if positions.is_empty() {
            return;
        }

        let centroid: Vec3 = positions.iter().copied().sum::<Vec3>()
            / positions.len() as f32;
        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        self.focus_point = centroid;

        let fovy_rad = self.camera.fovy.to_radians();
        let fit_distance = radius.max(1.0) / (fovy_rad / 2.0).tan();
        self.distance = fit_distance * 1.5; // padding for a comfortable view

        self.update_camera_pos();
    }

    /// Current orbit distance from focus to eye.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current focus point.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }
}
