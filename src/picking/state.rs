//! Hover and selection state for markers.
//!
//! Selection and hover are independent boolean facts per marker. The
//! displayed state is always the pure join of the two via
//! [`visual_state`] — it is never stored per marker, so it cannot drift
//! out of sync with the underlying facts.

use rustc_hash::FxHashSet;

use crate::nodes::MarkerId;

/// Visual state of one marker, the join of (selected, hovered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// Not selected, not hovered.
    #[default]
    Default,
    /// Hovered only.
    Hovered,
    /// Selected only.
    Selected,
    /// Selected and hovered.
    HoveredSelected,
}

/// The pure join of the two per-marker booleans.
#[must_use]
pub fn visual_state(selected: bool, hovered: bool) -> VisualState {
    match (selected, hovered) {
        (false, false) => VisualState::Default,
        (false, true) => VisualState::Hovered,
        (true, false) => VisualState::Selected,
        (true, true) => VisualState::HoveredSelected,
    }
}

/// Owns the selection set and the hover target.
///
/// Driven once per tick for hover (from the hit tester's output) and once
/// per click event for selection. Nothing else mutates marker visual
/// state.
#[derive(Debug, Default)]
pub struct InteractionState {
    selected: FxHashSet<MarkerId>,
    hovered: Option<MarkerId>,
}

impl InteractionState {
    /// Create an empty interaction state: nothing selected, nothing
    /// hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the hover target with the latest hit-test result.
    ///
    /// At most one marker is hovered at any time; a previous hover (if
    /// different) is implicitly cleared. Selection is untouched.
    pub fn set_hover(&mut self, target: Option<MarkerId>) {
        self.hovered = target;
    }

    /// Toggle a marker's selection membership, returning its new
    /// membership. Hover is untouched, so toggling preserves the
    /// marker's hover status.
    pub fn toggle_select(&mut self, id: MarkerId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            let _ = self.selected.insert(id);
            true
        }
    }

    /// Clear the selection. Returns `true` if it was non-empty (i.e. it
    /// actually changed).
    pub fn clear_selection(&mut self) -> bool {
        if self.selected.is_empty() {
            false
        } else {
            self.selected.clear();
            true
        }
    }

    /// Whether the marker is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: MarkerId) -> bool {
        self.selected.contains(&id)
    }

    /// The currently hovered marker, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<MarkerId> {
        self.hovered
    }

    /// Number of selected markers.
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    /// The marker's visual state: the pure join of its selection
    /// membership and hover equality.
    #[must_use]
    pub fn state_of(&self, id: MarkerId) -> VisualState {
        visual_state(self.is_selected(id), self.hovered == Some(id))
    }

    /// Drop selection/hover references to markers that no longer exist.
    /// Stale events against removed markers are thereby no-ops.
    pub fn prune(&mut self, exists: impl Fn(MarkerId) -> bool) {
        self.selected.retain(|id| exists(*id));
        if self.hovered.is_some_and(|id| !exists(id)) {
            self.hovered = None;
        }
    }
}
