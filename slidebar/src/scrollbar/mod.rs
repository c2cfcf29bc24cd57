//! Scrollbar widget.
//!
//! A [`Scrollbar`] maps the pixel offset of a slider on a fixed-length track
//! onto an integer value range, and moves the slider in response to input:
//!
//! - dragging the slider
//! - clicking the track outside the slider (one page towards the click)
//! - page-up/page-down keys on vertical scrollbars
//! - wheel gestures on vertical scrollbars
//!
//! # Example
//!
//! ```ignore
//! let mut scrollbar = Scrollbar::builder(200, 0, 100)
//!     .orientation(Orientation::Vertical)
//!     .page_step(50.0)
//!     .on_change(|value| println!("scrolled to {value}"))
//!     .build()?;
//!
//! scrollbar.update(&events);
//! ```

mod events;
mod geometry;
mod range;
mod state;
mod widget;

pub use geometry::{DEFAULT_THICKNESS, TrackGeometry};
pub use range::{DEFAULT_SINGLE_STEP, ValueRange};
pub use state::DragState;
pub use widget::{ChangeCallback, Scrollbar, ScrollbarBuilder};
