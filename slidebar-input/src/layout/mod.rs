mod orientation;
mod rect;

pub use orientation::Orientation;
pub use rect::Rect;
