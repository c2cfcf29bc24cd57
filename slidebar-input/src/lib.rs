pub mod event;
pub mod layout;
pub mod tracker;

pub use event::{convert_key, Event, Key, Modifiers, MouseButton};
pub use layout::{Orientation, Rect};
pub use tracker::PointerTracker;
