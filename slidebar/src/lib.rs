//! Slidebar: a scrollbar widget and the input classification that drives it.
//!
//! The [`scrollbar`] module holds the widget itself; [`controls`] turns raw
//! [`Event`]s into named navigation actions.

pub mod controls;
pub mod error;
pub mod scrollbar;
pub mod transform;

pub use slidebar_input::{Event, Key, Modifiers, MouseButton, Orientation, PointerTracker, Rect};

pub mod prelude {
    pub use crate::controls::{Action, ControlTarget, Controller, ControllerBinding, Controls};
    pub use crate::error::ScrollbarError;
    pub use crate::scrollbar::{Scrollbar, ScrollbarBuilder};
    pub use crate::transform::{Transform, TransformKind};
    pub use slidebar_input::{Event, Key, Modifiers, MouseButton, Orientation, Rect};
}
