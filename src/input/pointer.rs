use glam::Vec2;

/// Map a screen-pixel position to device-normalized coordinates.
///
/// X and Y both land in [-1, 1]; Y is inverted so screen-down becomes
/// NDC-negative, matching the projection convention used for ray
/// construction.
#[must_use]
pub fn screen_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (x / width) * 2.0 - 1.0,
        -((y / height) * 2.0 - 1.0),
    )
}

/// Caches the last known pointer position and viewport size so the hit
/// tester can re-pick every tick, not just on pointer-move events
/// (camera orbit changes the hit under a stationary cursor).
#[derive(Debug, Clone)]
pub struct PointerTracker {
    position: Option<Vec2>,
    width: f32,
    height: f32,
}

impl PointerTracker {
    /// Create a tracker for the given viewport size. No pointer position
    /// is known until the first move event.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: None,
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    /// Record a pointer move in screen pixels.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    /// Record a viewport resize.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width.max(1) as f32;
        self.height = height.max(1) as f32;
    }

    /// Last pointer position in screen pixels, if any.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Last pointer position in device-normalized coordinates, if any.
    #[must_use]
    pub fn ndc(&self) -> Option<Vec2> {
        self.position
            .map(|p| screen_to_ndc(p.x, p.y, self.width, self.height))
    }
}
