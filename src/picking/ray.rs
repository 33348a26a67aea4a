use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::nodes::{Marker, MarkerId};

/// Minimum hit distance along the ray. Rejects markers at (or numerically
/// indistinguishable from) the eye position as well as anything behind it.
const MIN_HIT_DISTANCE: f32 = 1e-4;

/// World-space ray cast from the camera through a screen point.
///
/// Recomputed every frame from the cached pointer position; never
/// persisted.
#[derive(Debug, Clone, Copy)]
pub struct PickRay {
    /// Ray origin (on the near plane).
    pub origin: Vec3,
    /// Normalized ray direction.
    pub direction: Vec3,
}

impl PickRay {
    /// Build the ray through `ndc` (device-normalized coordinates in
    /// [-1,1]², Y up) by unprojecting the near- and far-plane points.
    #[must_use]
    pub fn from_camera(camera: &Camera, ndc: Vec2) -> Self {
        let inverse = camera.view_projection().inverse();
        // [0,1] depth range: 0 = near plane, 1 = far plane
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self {
            origin: near,
            direction: (far - near).normalize(),
        }
    }

    /// Distance along the ray to the nearest intersection with a sphere,
    /// or `None` if the ray misses or the sphere lies behind the origin.
    #[must_use]
    pub fn intersect_sphere(
        &self,
        center: Vec3,
        radius: f32,
    ) -> Option<f32> {
        let oc = self.origin - center;
        // Quadratic in t with a = 1 (direction is normalized)
        let half_b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = half_b * half_b - c;
        if discriminant < 0.0 {
            return None;
        }

        // Entry point only: a sphere enclosing the origin is not a hit
        let near = -half_b - discriminant.sqrt();
        (near > MIN_HIT_DISTANCE).then_some(near)
    }
}

/// Return the marker nearest along the ray whose bounding sphere the ray
/// intersects, or `None` if nothing is hit.
///
/// Ties break toward the smallest positive hit distance; markers at or
/// behind the ray origin are never returned.
#[must_use]
pub fn pick(
    ray: &PickRay,
    markers: &[Marker],
    radius: f32,
) -> Option<MarkerId> {
    let mut nearest: Option<(f32, MarkerId)> = None;
    for marker in markers {
        if let Some(t) = ray.intersect_sphere(marker.position, radius) {
            if nearest.is_none_or(|(best, _)| t < best) {
                nearest = Some((t, marker.id));
            }
        }
    }
    nearest.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(eye: Vec3, target: Vec3) -> Camera {
        Camera {
            eye,
            target,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    fn marker(id: u32, position: Vec3) -> Marker {
        Marker {
            id: MarkerId(id),
            position,
        }
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let ray = PickRay::from_camera(&cam, Vec2::ZERO);
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn center_ray_hits_marker_at_target() {
        let cam = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let ray = PickRay::from_camera(&cam, Vec2::ZERO);
        let markers = [marker(0, Vec3::ZERO)];
        assert_eq!(pick(&ray, &markers, 0.1), Some(MarkerId(0)));
    }

    #[test]
    fn offset_ray_misses_marker_at_target() {
        let cam = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let ray = PickRay::from_camera(&cam, Vec2::new(0.8, 0.8));
        let markers = [marker(0, Vec3::ZERO)];
        assert_eq!(pick(&ray, &markers, 0.1), None);
    }

    #[test]
    fn nearest_of_two_overlapping_markers_wins() {
        let cam = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let ray = PickRay::from_camera(&cam, Vec2::ZERO);
        // Both on the ray; id 1 is closer to the eye
        let markers = [
            marker(0, Vec3::new(0.0, 0.0, -2.0)),
            marker(1, Vec3::new(0.0, 0.0, 2.0)),
        ];
        assert_eq!(pick(&ray, &markers, 0.1), Some(MarkerId(1)));
    }

    #[test]
    fn marker_behind_camera_is_never_hit() {
        let cam = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let ray = PickRay::from_camera(&cam, Vec2::ZERO);
        let markers = [marker(0, Vec3::new(0.0, 0.0, 20.0))];
        assert_eq!(pick(&ray, &markers, 0.1), None);
    }

    #[test]
    fn sphere_intersection_distance_is_exact() {
        let ray = PickRay {
            origin: Vec3::ZERO,
            direction: Vec3::X,
        };
        let t = ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 1.0);
        assert!((t.unwrap() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn sphere_enclosing_the_origin_is_not_a_hit() {
        let ray = PickRay {
            origin: Vec3::ZERO,
            direction: Vec3::X,
        };
        assert_eq!(ray.intersect_sphere(Vec3::ZERO, 1.0), None);
    }

    #[test]
    fn empty_marker_list_hits_nothing() {
        let cam = camera_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let ray = PickRay::from_camera(&cam, Vec2::ZERO);
        assert_eq!(pick(&ray, &[], 0.1), None);
    }
}
