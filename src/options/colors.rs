use serde::{Deserialize, Serialize};

use crate::picking::VisualState;

/// Color palette options. All colors are linear RGB triples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Scene background color.
    pub background: [f32; 3],
    /// X axis color.
    pub axis_x: [f32; 3],
    /// Y axis color.
    pub axis_y: [f32; 3],
    /// Z axis color.
    pub axis_z: [f32; 3],
    /// Grid line color.
    pub grid: [f32; 3],
    /// Parametric surface wireframe color.
    pub surface: [f32; 3],
    /// Marker color when neither selected nor hovered.
    pub marker_default: [f32; 3],
    /// Marker color when hovered only.
    pub marker_hovered: [f32; 3],
    /// Marker color when selected only.
    pub marker_selected: [f32; 3],
    /// Marker color when selected and hovered.
    pub marker_hovered_selected: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [1.0, 1.0, 1.0],
            axis_x: [1.0, 0.0, 0.0],
            axis_y: [0.0, 1.0, 0.0],
            axis_z: [0.0, 0.0, 1.0],
            grid: [0.5, 0.5, 0.5],
            surface: [0.0, 0.467, 1.0],
            marker_default: [0.0, 0.0, 0.0],
            marker_hovered: [1.0, 0.8, 0.0],
            marker_selected: [1.0, 0.0, 0.0],
            marker_hovered_selected: [1.0, 0.4, 0.0],
        }
    }
}

impl ColorOptions {
    /// Marker color for a given visual state.
    #[must_use]
    pub fn marker_color(&self, state: VisualState) -> [f32; 3] {
        match state {
            VisualState::Default => self.marker_default,
            VisualState::Hovered => self.marker_hovered,
            VisualState::Selected => self.marker_selected,
            VisualState::HoveredSelected => self.marker_hovered_selected,
        }
    }
}
