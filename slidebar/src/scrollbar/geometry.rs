//! Track and slider rectangles.

use slidebar_input::{Orientation, Rect};

use crate::error::ScrollbarError;

/// Default track thickness, in pixels.
pub const DEFAULT_THICKNESS: i32 = 20;

/// Physical layout of the track: length along the orientation axis,
/// thickness across it, slider padding, and the absolute origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackGeometry {
    orientation: Orientation,
    length: i32,
    thickness: i32,
    padding: i32,
    origin: (i32, i32),
}

impl TrackGeometry {
    pub fn new(
        length: i32,
        thickness: i32,
        padding: i32,
        orientation: Orientation,
    ) -> Result<Self, ScrollbarError> {
        if length <= 0 {
            return Err(ScrollbarError::InvalidLength(length));
        }
        if i64::from(thickness) - 2 * i64::from(padding) < 2 {
            return Err(ScrollbarError::SliderNotVisible { thickness, padding });
        }
        Ok(Self {
            orientation,
            length,
            thickness,
            padding,
            origin: (0, 0),
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn padding(&self) -> i32 {
        self.padding
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub fn set_length(&mut self, length: i32) -> Result<(), ScrollbarError> {
        if length <= 0 {
            return Err(ScrollbarError::InvalidLength(length));
        }
        self.length = length;
        Ok(())
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn set_origin(&mut self, x: i32, y: i32) {
        self.origin = (x, y);
    }

    /// Absolute track rectangle.
    pub fn rect(&self) -> Rect {
        let (width, height) = self.orientation.compose(self.length, self.thickness);
        Rect::new(self.origin.0, self.origin.1, width, height)
    }

    /// Absolute slider rectangle for a slider at `position` spanning `extent`
    /// pixels along the axis, shrunk by the padding on every side.
    pub fn slider_rect(&self, position: i32, extent: i32) -> Rect {
        let (x, y) = self.orientation.compose(position, 0);
        let (width, height) = self.orientation.compose(extent, self.thickness);
        Rect::new(x, y, width, height)
            .inflate(self.padding.saturating_mul(-2), self.padding.saturating_mul(-2))
            .translate(self.origin.0, self.origin.1)
    }
}
