use glam::Vec2;

use crate::nodes::MarkerId;

/// Commands executed by the viewer.
///
/// Produced by the [`InputProcessor`](crate::input::InputProcessor) from
/// raw events, or issued directly by embedding code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    /// Orbit the camera by a screen-space drag delta.
    RotateCamera {
        /// Drag delta in pixels.
        delta: Vec2,
    },
    /// Pan the camera focus by a screen-space drag delta.
    PanCamera {
        /// Drag delta in pixels.
        delta: Vec2,
    },
    /// Zoom by a scroll delta (positive = in).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
    /// Viewport resized.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// Toggle one marker's selection membership.
    ToggleSelect {
        /// The marker to toggle.
        id: MarkerId,
    },
    /// Clear the selection.
    ClearSelection,
    /// Re-center the camera on the world origin.
    RecenterCamera,
    /// Fit the camera to the loaded markers.
    FitToMarkers,
}
