//! Retained CPU scene: reference-frame geometry (axes, grid planes,
//! parametric surface) plus one sphere primitive per loaded marker.
//!
//! The scene owns geometry only. Marker visual state is derived by the
//! interaction state machine and delivered alongside the scene in the
//! per-frame snapshot; it is never stored here.

pub mod mesh_gen;

use glam::Vec3;

pub use mesh_gen::{
    axes_lines, default_surface, grid_plane, parametric_surface, LineSet,
    LineVertex, SurfaceMesh,
};

use crate::nodes::{Marker, MarkerId};
use crate::options::{ColorOptions, SceneOptions};

/// A renderable marker sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSphere {
    /// The marker this sphere represents.
    pub id: MarkerId,
    /// Sphere center in world space.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

/// The retained scene. Owns all primitives in flat lists.
pub struct Scene {
    line_sets: Vec<LineSet>,
    meshes: Vec<SurfaceMesh>,
    markers: Vec<MarkerSphere>,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            line_sets: Vec::new(),
            meshes: Vec::new(),
            markers: Vec::new(),
            generation: 0,
            rendered_generation: 0,
        }
    }

    /// Create a scene pre-populated with the reference frame: colored
    /// axes, the three default grid planes (XY, YZ, ZX), and the
    /// parametric surface.
    #[must_use]
    pub fn with_reference_frame(
        options: &SceneOptions,
        colors: &ColorOptions,
    ) -> Self {
        let mut scene = Self::new();
        scene.add_lines(axes_lines(options.axis_limit, colors));
        for normal in [Vec3::Z, Vec3::X, Vec3::Y] {
            scene.add_lines(grid_plane(
                normal,
                options.grid_size,
                options.grid_divisions,
                colors.grid,
            ));
        }
        if options.show_surface {
            scene.add_mesh(parametric_surface(
                default_surface,
                options.surface_resolution,
                options.surface_resolution,
                colors.surface,
            ));
        }
        scene
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since the last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Force the scene dirty (e.g. when marker visual state changes but
    /// geometry hasn't).
    pub fn force_dirty(&mut self) {
        self.invalidate();
    }

    /// Mark the current generation as rendered (call after uploading).
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// Add a line set primitive.
    pub fn add_lines(&mut self, lines: LineSet) {
        self.line_sets.push(lines);
        self.invalidate();
    }

    /// Add a mesh primitive.
    pub fn add_mesh(&mut self, mesh: SurfaceMesh) {
        self.meshes.push(mesh);
        self.invalidate();
    }

    /// Insert one sphere primitive per marker.
    pub fn add_markers(&mut self, markers: &[Marker], radius: f32) {
        self.markers.extend(markers.iter().map(|m| MarkerSphere {
            id: m.id,
            center: m.position,
            radius,
        }));
        self.invalidate();
    }

    /// All line set primitives.
    #[must_use]
    pub fn line_sets(&self) -> &[LineSet] {
        &self.line_sets
    }

    /// All mesh primitives.
    #[must_use]
    pub fn meshes(&self) -> &[SurfaceMesh] {
        &self.meshes
    }

    /// All marker sphere primitives.
    #[must_use]
    pub fn markers(&self) -> &[MarkerSphere] {
        &self.markers
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_frame_has_axes_grids_and_surface() {
        let scene = Scene::with_reference_frame(
            &SceneOptions::default(),
            &ColorOptions::default(),
        );
        // axes + three grid planes
        assert_eq!(scene.line_sets().len(), 4);
        assert_eq!(scene.meshes().len(), 1);
        assert!(scene.markers().is_empty());
    }

    #[test]
    fn surface_can_be_disabled() {
        let options = SceneOptions {
            show_surface: false,
            ..SceneOptions::default()
        };
        let scene = Scene::with_reference_frame(
            &options,
            &ColorOptions::default(),
        );
        assert!(scene.meshes().is_empty());
    }

    #[test]
    fn mutations_mark_the_scene_dirty() {
        let mut scene = Scene::new();
        assert!(!scene.is_dirty());
        scene.add_markers(
            &[Marker {
                id: MarkerId(0),
                position: Vec3::ZERO,
            }],
            0.1,
        );
        assert!(scene.is_dirty());
        scene.mark_rendered();
        assert!(!scene.is_dirty());
        scene.force_dirty();
        assert!(scene.is_dirty());
    }
}
