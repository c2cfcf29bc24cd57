use super::Orientation;

/// Axis-aligned rectangle in absolute pixels.
///
/// `right()` and `bottom()` are exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Get the center point of this rectangle.
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Move by the given offset.
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Grow (or shrink, with negative amounts) around the same center.
    ///
    /// Half of each amount goes to either side. Sizes saturate at zero.
    pub fn inflate(self, dw: i32, dh: i32) -> Self {
        let width = (self.width + dw).max(0);
        let height = (self.height + dh).max(0);
        Self {
            x: self.x - (width - self.width) / 2,
            y: self.y - (height - self.height) / 2,
            width,
            height,
        }
    }

    /// Leading edge along the orientation axis.
    pub const fn start(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.left(),
            Orientation::Vertical => self.top(),
        }
    }

    /// Trailing (exclusive) edge along the orientation axis.
    pub const fn end(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.right(),
            Orientation::Vertical => self.bottom(),
        }
    }

    /// Size along the orientation axis.
    pub const fn extent(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}
