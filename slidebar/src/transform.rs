//! Generic widget transformations.
//!
//! Widgets share one transformation surface, but not every widget honours
//! every operation. Disabled operations return
//! [`ScrollbarError::Unsupported`] instead of silently succeeding, so callers
//! can tell a no-op from an applied change.

use std::fmt;

use crate::error::ScrollbarError;

/// Identifies a transformation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Translate,
    Padding,
    Scale,
    Resize,
    MaxWidth,
    MaxHeight,
    Rotate,
    Flip,
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransformKind::Translate => "translate",
            TransformKind::Padding => "padding",
            TransformKind::Scale => "scale",
            TransformKind::Resize => "resize",
            TransformKind::MaxWidth => "max width",
            TransformKind::MaxHeight => "max height",
            TransformKind::Rotate => "rotate",
            TransformKind::Flip => "flip",
        };
        f.write_str(name)
    }
}

/// Transformations a widget may accept.
///
/// Every method defaults to [`ScrollbarError::Unsupported`]; implementors
/// override the ones they honour and report them through [`Transform::supports`].
pub trait Transform {
    /// Name used in unsupported-operation errors.
    fn widget_name(&self) -> &'static str;

    /// Whether `kind` has an effect on this widget.
    fn supports(&self, kind: TransformKind) -> bool;

    fn translate(&mut self, _dx: i32, _dy: i32) -> Result<(), ScrollbarError> {
        Err(self.unsupported(TransformKind::Translate))
    }

    fn set_padding(&mut self, _padding: i32) -> Result<(), ScrollbarError> {
        Err(self.unsupported(TransformKind::Padding))
    }

    fn scale(&mut self, _x: f32, _y: f32) -> Result<(), ScrollbarError> {
        Err(self.unsupported(TransformKind::Scale))
    }

    fn resize(&mut self, _width: i32, _height: i32) -> Result<(), ScrollbarError> {
        Err(self.unsupported(TransformKind::Resize))
    }

    fn set_max_width(&mut self, _width: Option<i32>) -> Result<(), ScrollbarError> {
        Err(self.unsupported(TransformKind::MaxWidth))
    }

    fn set_max_height(&mut self, _height: Option<i32>) -> Result<(), ScrollbarError> {
        Err(self.unsupported(TransformKind::MaxHeight))
    }

    fn rotate(&mut self, _degrees: f32) -> Result<(), ScrollbarError> {
        Err(self.unsupported(TransformKind::Rotate))
    }

    fn flip(&mut self, _x: bool, _y: bool) -> Result<(), ScrollbarError> {
        Err(self.unsupported(TransformKind::Flip))
    }

    fn unsupported(&self, operation: TransformKind) -> ScrollbarError {
        ScrollbarError::Unsupported {
            widget: self.widget_name(),
            operation,
        }
    }
}
