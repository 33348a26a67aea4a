//! CPU generation of the reference-frame geometry: axis lines, grid
//! planes, and the parametric surface.

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

use crate::options::ColorOptions;

/// One colored line vertex, laid out for direct upload by a render
/// collaborator.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
}

/// A set of line segments: consecutive vertex pairs form one segment.
#[derive(Debug, Clone, Default)]
pub struct LineSet {
    /// Segment vertices, two per segment.
    pub vertices: Vec<LineVertex>,
}

impl LineSet {
    /// Append one segment.
    pub fn push_segment(&mut self, a: Vec3, b: Vec3, color: [f32; 3]) {
        self.vertices.push(LineVertex {
            position: a.to_array(),
            color,
        });
        self.vertices.push(LineVertex {
            position: b.to_array(),
            color,
        });
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }
}

/// An indexed triangle mesh with a single color, drawn as a wireframe by
/// the collaborator.
#[derive(Debug, Clone, Default)]
pub struct SurfaceMesh {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
    /// Linear RGB color.
    pub color: [f32; 3],
}

/// The three world axes from `-limit` to `+limit`, X red, Y green,
/// Z blue (per the configured palette).
#[must_use]
pub fn axes_lines(limit: f32, colors: &ColorOptions) -> LineSet {
    let mut lines = LineSet::default();
    lines.push_segment(
        Vec3::new(-limit, 0.0, 0.0),
        Vec3::new(limit, 0.0, 0.0),
        colors.axis_x,
    );
    lines.push_segment(
        Vec3::new(0.0, -limit, 0.0),
        Vec3::new(0.0, limit, 0.0),
        colors.axis_y,
    );
    lines.push_segment(
        Vec3::new(0.0, 0.0, -limit),
        Vec3::new(0.0, 0.0, limit),
        colors.axis_z,
    );
    lines
}

/// A square grid of `divisions` cells per side, generated in the XZ
/// plane and rotated so its +Y normal aligns with `normal`.
#[must_use]
pub fn grid_plane(
    normal: Vec3,
    size: f32,
    divisions: u32,
    color: [f32; 3],
) -> LineSet {
    let rotation = Quat::from_rotation_arc(Vec3::Y, normal.normalize());
    let half = size / 2.0;
    let step = size / divisions.max(1) as f32;

    let mut lines = LineSet::default();
    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        // Line parallel to Z at x = offset
        lines.push_segment(
            rotation * Vec3::new(offset, 0.0, -half),
            rotation * Vec3::new(offset, 0.0, half),
            color,
        );
        // Line parallel to X at z = offset
        lines.push_segment(
            rotation * Vec3::new(-half, 0.0, offset),
            rotation * Vec3::new(half, 0.0, offset),
            color,
        );
    }
    lines
}

/// The default surface: x,y swept over [-5,5], z = sin(sqrt(x² + y²)).
#[must_use]
pub fn default_surface(u: f32, v: f32) -> Vec3 {
    let x = u * 10.0 - 5.0;
    let y = v * 10.0 - 5.0;
    let z = x.hypot(y).sin();
    Vec3::new(x, y, z)
}

/// Tessellate a parametric surface over (u, v) ∈ [0,1]² into an indexed
/// triangle mesh with `slices` × `stacks` quads.
#[must_use]
pub fn parametric_surface(
    f: impl Fn(f32, f32) -> Vec3,
    slices: u32,
    stacks: u32,
    color: [f32; 3],
) -> SurfaceMesh {
    let slices = slices.max(1);
    let stacks = stacks.max(1);

    let mut positions =
        Vec::with_capacity(((slices + 1) * (stacks + 1)) as usize);
    for j in 0..=stacks {
        let v = j as f32 / stacks as f32;
        for i in 0..=slices {
            let u = i as f32 / slices as f32;
            positions.push(f(u, v).to_array());
        }
    }

    let mut indices = Vec::with_capacity((slices * stacks * 6) as usize);
    let row = slices + 1;
    for j in 0..stacks {
        for i in 0..slices {
            let a = j * row + i;
            let b = a + 1;
            let c = a + row;
            let d = c + 1;
            indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }

    SurfaceMesh {
        positions,
        indices,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_have_three_segments_with_palette_colors() {
        let colors = ColorOptions::default();
        let axes = axes_lines(10.0, &colors);
        assert_eq!(axes.segment_count(), 3);
        assert_eq!(axes.vertices[0].position, [-10.0, 0.0, 0.0]);
        assert_eq!(axes.vertices[0].color, colors.axis_x);
        assert_eq!(axes.vertices[5].position, [0.0, 0.0, 10.0]);
        assert_eq!(axes.vertices[5].color, colors.axis_z);
    }

    #[test]
    fn grid_segment_count_matches_divisions() {
        let grid = grid_plane(Vec3::Y, 10.0, 10, [0.5; 3]);
        // (divisions + 1) lines in each of the two directions
        assert_eq!(grid.segment_count(), 22);
    }

    #[test]
    fn grid_rotates_into_requested_plane() {
        // Normal +Z: the grid should lie in the XY plane (all z ≈ 0)
        let grid = grid_plane(Vec3::Z, 10.0, 4, [0.5; 3]);
        for v in &grid.vertices {
            assert!(v.position[2].abs() < 1e-5, "vertex off plane: {v:?}");
        }
    }

    #[test]
    fn default_surface_spans_expected_range() {
        let p00 = default_surface(0.0, 0.0);
        let p11 = default_surface(1.0, 1.0);
        assert_eq!((p00.x, p00.y), (-5.0, -5.0));
        assert_eq!((p11.x, p11.y), (5.0, 5.0));
        // z = sin(r) is bounded
        assert!(p00.z.abs() <= 1.0);
    }

    #[test]
    fn surface_center_height_is_zero() {
        let center = default_surface(0.5, 0.5);
        assert!(center.z.abs() < 1e-6);
    }

    #[test]
    fn surface_tessellation_counts() {
        let mesh =
            parametric_surface(default_surface, 4, 3, [0.0, 0.467, 1.0]);
        assert_eq!(mesh.positions.len(), 5 * 4);
        assert_eq!(mesh.indices.len(), (4 * 3 * 6) as usize);
        // All indices in range
        assert!(mesh
            .indices
            .iter()
            .all(|&i| (i as usize) < mesh.positions.len()));
    }
}
