//! Scrollbar error types.

use thiserror::Error;

use crate::transform::TransformKind;

/// Precondition violations reported by scrollbar construction and setters.
///
/// A rejected call leaves the scrollbar exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrollbarError {
    /// The value range is empty or inverted.
    #[error("Invalid range [{min}, {max}]: minimum value first is expected")]
    InvalidRange { min: i32, max: i32 },

    /// Padding leaves less than two pixels of slider thickness.
    #[error("Slider shall be visible: thickness {thickness} - 2 * padding {padding} < 2")]
    SliderNotVisible { thickness: i32, padding: i32 },

    /// Track length must be positive.
    #[error("Track length shall be positive, got {0}")]
    InvalidLength(i32),

    /// `set_minimum` with a value not below the current maximum.
    #[error("Minimum value {value} shall be lower than {max}")]
    MinimumTooLarge { value: i32, max: i32 },

    /// `set_maximum` with a value not above the current minimum.
    #[error("Maximum value {value} shall be greater than {min}")]
    MaximumTooSmall { value: i32, min: i32 },

    /// Page step must be a positive, finite number.
    #[error("Page step shall be > 0, got {0}")]
    InvalidPageStep(f64),

    /// Single step must be a positive, finite number of pixels.
    #[error("Single step shall be > 0, got {0}")]
    InvalidSingleStep(f64),

    /// `set_value` outside `[min, max]`.
    #[error("Value {value} outside [{min}, {max}]")]
    ValueOutOfRange { value: i32, min: i32, max: i32 },

    /// The widget declares this transformation inert.
    #[error("{widget} does not support {operation}")]
    Unsupported {
        widget: &'static str,
        operation: TransformKind,
    },
}
