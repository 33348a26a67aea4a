//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (button tracking,
//! drag detection, the press-time pick target). It is the only thing that
//! sits between raw window events and the viewer's
//! [`execute`](crate::viewer::Viewer::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::nodes::MarkerId;
use crate::viewer::ViewerCommand;

/// Cursor travel (in pixels) from the press position beyond which a
/// press/release pair counts as a camera drag rather than a click.
const DRAG_THRESHOLD: f32 = 4.0;

/// Converts raw window events into [`ViewerCommand`]s.
///
/// A left press/release pair on the same marker with no significant
/// cursor travel is a click and toggles that marker's selection; with
/// travel it is an orbit drag and toggles nothing. Presses that hit no
/// marker never produce a selection command.
pub struct InputProcessor {
    held: Option<MouseButton>,
    cursor: Option<Vec2>,
    press_cursor: Option<Vec2>,
    press_target: Option<MarkerId>,
    dragging: bool,
}

impl InputProcessor {
    /// Create a processor with no buttons held.
    #[must_use]
    pub fn new() -> Self {
        Self {
            held: None,
            cursor: None,
            press_cursor: None,
            press_target: None,
            dragging: false,
        }
    }

    /// Process one raw event into zero or more commands.
    ///
    /// `hovered` is the marker currently under the cursor as reported by
    /// the most recent pick, used to pair press and release targets.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hovered: Option<MarkerId>,
    ) -> Vec<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y))
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_button(button, pressed, hovered)
            }
            InputEvent::Scroll { delta } => {
                vec![ViewerCommand::Zoom { delta }]
            }
            InputEvent::Resized { width, height } => {
                vec![ViewerCommand::Resize { width, height }]
            }
        }
    }

    fn handle_cursor_moved(&mut self, position: Vec2) -> Vec<ViewerCommand> {
        let delta = self
            .cursor
            .map_or(Vec2::ZERO, |previous| position - previous);
        self.cursor = Some(position);

        let Some(button) = self.held else {
            return Vec::new();
        };

        if let Some(press) = self.press_cursor {
            if (position - press).length() > DRAG_THRESHOLD {
                self.dragging = true;
            }
        }

        match button {
            MouseButton::Left => {
                vec![ViewerCommand::RotateCamera { delta }]
            }
            MouseButton::Right | MouseButton::Middle => {
                vec![ViewerCommand::PanCamera { delta }]
            }
        }
    }

    fn handle_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        hovered: Option<MarkerId>,
    ) -> Vec<ViewerCommand> {
        if pressed {
            // First held button wins; ignore chording
            if self.held.is_none() {
                self.held = Some(button);
                self.press_cursor = self.cursor;
                self.press_target = hovered;
                self.dragging = false;
            }
            return Vec::new();
        }

        if self.held != Some(button) {
            return Vec::new();
        }

        let was_dragging = self.dragging;
        let press_target = self.press_target.take();
        self.held = None;
        self.press_cursor = None;
        self.dragging = false;

        // Click: same marker under the cursor at press and release, and
        // no drag in between. Background clicks are no-ops.
        if button == MouseButton::Left && !was_dragging {
            if let (Some(id), true) = (hovered, press_target == hovered) {
                return vec![ViewerCommand::ToggleSelect { id }];
            }
        }
        Vec::new()
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
