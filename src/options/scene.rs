use serde::{Deserialize, Serialize};

/// Reference-frame geometry parameters (axes, grids, surface).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Axis line half-length along each world axis.
    pub axis_limit: f32,
    /// Grid plane side length.
    pub grid_size: f32,
    /// Number of grid divisions per side.
    pub grid_divisions: u32,
    /// Parametric surface tessellation (segments per parameter axis).
    pub surface_resolution: u32,
    /// Whether to generate the parametric surface at all.
    pub show_surface: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            axis_limit: 10.0,
            grid_size: 10.0,
            grid_divisions: 10,
            surface_resolution: 100,
            show_surface: true,
        }
    }
}
