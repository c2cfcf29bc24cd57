/// Axis along which a widget operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const fn opposite(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Pick the component of `(x, y)` that lies on this axis.
    pub const fn pick(self, x: i32, y: i32) -> i32 {
        match self {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        }
    }

    /// Build an `(x, y)` pair with `along` on this axis and `across` on the other.
    pub const fn compose(self, along: i32, across: i32) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (along, across),
            Orientation::Vertical => (across, along),
        }
    }
}
