//! Interaction state owned by a scrollbar.

/// Whether the slider is being dragged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// The slider was grabbed; `last` is the last pointer position seen.
    Dragging { last: (i32, i32) },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Pointer-related state carried between `update` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionState {
    pub drag: DragState,
    /// Pointer is over the track.
    pub hovered: bool,
    /// The window lost focus mid-drag; the drag's `last` position is where
    /// the pointer was at that moment.
    pub focus_lost: bool,
}

/// Outcome of processing one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    /// The slider moved by a nonzero amount.
    pub moved: bool,
    /// Something observable changed (a move or the end of a drag).
    pub updated: bool,
}

impl Transition {
    pub const NONE: Self = Self {
        moved: false,
        updated: false,
    };

    /// Transition for a scroll attempt that may or may not have moved the slider.
    pub fn scrolled(moved: bool) -> Self {
        Self {
            moved,
            updated: moved,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            moved: self.moved || other.moved,
            updated: self.updated || other.updated,
        }
    }
}
