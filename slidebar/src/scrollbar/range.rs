//! Logical value range and its mapping onto track pixels.

use crate::error::ScrollbarError;

/// Default single step, in pixels.
pub const DEFAULT_SINGLE_STEP: f64 = 20.0;

/// The `[min, max]` value range with its page and single steps.
///
/// The page step is kept in value units; its pixel size depends on the track
/// length and is derived on demand, so changing the range or the length keeps
/// the slider representing the same proportion of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRange {
    min: i32,
    max: i32,
    page_step: f64,
    single_step: f64,
}

impl ValueRange {
    /// Create a range with the default page step for a track of `length` pixels.
    pub fn new(min: i32, max: i32, length: i32) -> Result<Self, ScrollbarError> {
        if max <= min {
            return Err(ScrollbarError::InvalidRange { min, max });
        }
        let span = f64::from(max) - f64::from(min);
        let page_step = if span > f64::from(length) {
            f64::from(length)
        } else {
            span / 5.0
        };
        Ok(Self {
            min,
            max,
            page_step,
            single_step: DEFAULT_SINGLE_STEP,
        })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// `max - min`, always positive.
    pub fn span(&self) -> f64 {
        f64::from(self.max) - f64::from(self.min)
    }

    /// Page step in value units.
    pub fn page_step(&self) -> f64 {
        self.page_step
    }

    pub fn set_minimum(&mut self, value: i32) -> Result<(), ScrollbarError> {
        if value >= self.max {
            return Err(ScrollbarError::MinimumTooLarge {
                value,
                max: self.max,
            });
        }
        self.min = value;
        Ok(())
    }

    pub fn set_maximum(&mut self, value: i32) -> Result<(), ScrollbarError> {
        if value <= self.min {
            return Err(ScrollbarError::MaximumTooSmall {
                value,
                min: self.min,
            });
        }
        self.max = value;
        Ok(())
    }

    pub fn set_page_step(&mut self, value: f64) -> Result<(), ScrollbarError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ScrollbarError::InvalidPageStep(value));
        }
        self.page_step = value;
        Ok(())
    }

    /// Requested single step in pixels, before it is capped by the page step.
    pub fn set_single_step(&mut self, pixels: f64) -> Result<(), ScrollbarError> {
        if !pixels.is_finite() || pixels <= 0.0 {
            return Err(ScrollbarError::InvalidSingleStep(pixels));
        }
        self.single_step = pixels;
        Ok(())
    }

    /// Page step in pixels for a track of `length` pixels. Never exceeds `length`.
    pub fn page_step_px(&self, length: i32) -> f64 {
        let length = f64::from(length);
        (length * self.page_step / self.span()).min(length)
    }

    /// Single step in pixels, kept strictly below the page step.
    pub fn single_step_px(&self, length: i32) -> f64 {
        let page = self.page_step_px(length);
        if self.single_step >= page {
            (page / 2.0).floor()
        } else {
            self.single_step
        }
    }

    /// Distance the slider can travel, `length - page_step_px`.
    pub fn travel(&self, length: i32) -> f64 {
        (f64::from(length) - self.page_step_px(length)).max(0.0)
    }

    /// Value for a slider offset, clamped to `[min, max]`.
    pub fn value_from_position(&self, position: i32, length: i32) -> f64 {
        let travel = self.travel(length);
        if travel <= 0.0 {
            return f64::from(self.min);
        }
        let value = f64::from(self.min) + f64::from(position) * self.span() / travel;
        value.clamp(f64::from(self.min), f64::from(self.max))
    }

    /// Slider offset for a value, clamped to `[0, travel]`.
    pub fn position_from_value(&self, value: f64, length: i32) -> f64 {
        let travel = self.travel(length);
        let position = (value - f64::from(self.min)) * travel / self.span();
        position.clamp(0.0, travel)
    }

    /// Fraction of the range covered by `value`, rounded to three decimals.
    pub fn percent(&self, value: i32) -> f64 {
        let ratio = (f64::from(value) - f64::from(self.min)) / self.span();
        (ratio * 1000.0).round() / 1000.0
    }
}
